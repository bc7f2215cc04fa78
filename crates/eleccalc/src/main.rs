mod cli;

use std::{
    fs,
    io::{self, Read},
    path::Path,
    process::ExitCode,
};

use anyhow::{bail, Context};
use clap::Parser;
use linear::Dense;
use prettytable::{row, Table as PrettyTable};
use tabular::{Solution, Table};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Some cells of the table were rejected.
const EXIT_INVALID_INPUT: u8 = 2;
/// The system has no unique solution.
const EXIT_SINGULAR: u8 = 3;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Cli::parse();

    let text = read_input(args.input.as_deref())?;
    let table = Table::parse(&text)?;

    if let Some(size) = args.size {
        if table.size() != size.get() {
            bail!(
                "Expected a table with {size} unknowns, found {}",
                table.size()
            );
        }
    }

    let system = match table.validate() {
        Ok(system) => system,
        Err(errors) => {
            for e in &errors {
                eprintln!("{e}");
            }
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    let dense = Dense::with_tolerance(args.tolerance);
    let solution = match system.clone().solve(&dense) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::from(EXIT_SINGULAR));
        }
    };

    tracing::debug!(residual = system.residual(&solution), "solved");

    if args.plain {
        println!("{solution}");
    } else {
        solution_table(&solution).printstd();
    }

    Ok(ExitCode::SUCCESS)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read table from {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read table from standard input")?;
            Ok(text)
        }
    }
}

fn solution_table(solution: &Solution) -> PrettyTable {
    let mut table = PrettyTable::new();
    table.set_titles(row!["Variable", "Value"]);
    for (name, value) in solution.variables() {
        table.add_row(row![c->name, r->format!("{value:.6}")]);
    }
    table
}
