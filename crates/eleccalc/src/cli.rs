use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tabular::SystemSize;

#[derive(Debug, Parser)]
#[command(
    name = "eleccalc",
    version,
    about = "Solve a square linear system Ax = b by Gaussian elimination with partial pivoting",
    long_about = "Reads a table with one row per equation: the coefficients of v1 … vn followed by \
                  the constant term. Cells are separated by whitespace, ',' or ';' and may be \
                  decimals or fractions such as 1/3. '#' starts a comment."
)]
pub struct Cli {
    /// Table to solve; reads standard input when omitted or '-'
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Number of unknowns the table must have
    #[arg(short = 'n', long = "size", value_name = "N")]
    pub size: Option<SystemSize>,

    /// Pivot magnitude below which the matrix is reported as singular
    #[arg(
        long = "tolerance",
        value_name = "TOL",
        default_value_t = linear::PIVOT_TOLERANCE,
        value_parser = parse_tolerance
    )]
    pub tolerance: f64,

    /// Print `name = value` lines instead of a table
    #[arg(long = "plain", action = ArgAction::SetTrue)]
    pub plain: bool,
}

fn parse_tolerance(text: &str) -> Result<f64, String> {
    match text.trim().parse::<f64>() {
        Ok(tol) if tol.is_finite() && tol > 0.0 => Ok(tol),
        _ => Err(format!("'{text}' is not a positive number")),
    }
}
