//! Tabular input for the dense linear solver.
//!
//! A system with `n` unknowns is entered as a table of `n` rows and `n + 1` text cells: the
//! coefficients of `v1 … vn` followed by the constant term `C`. Every cell must hold a decimal
//! number or a `numerator/denominator` fraction. A table is validated as a whole; if any cell is
//! rejected no system is built and every offending cell is reported.

mod cell;
mod size;
mod solution;
mod system;
mod table;

pub use cell::{parse_cell, CellError, CellErrorKind, ValidationErrors};
pub use size::SystemSize;
pub use solution::Solution;
pub use system::LinearSystem;
pub use table::Table;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// The table has no rows.
    #[error("The table is empty")]
    Empty,

    /// A row does not hold exactly one cell per unknown plus the constant term.
    #[error("Row {row} has {got} values, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// An entry of the coefficient matrix (`col <= n`) or the constants (`col == n + 1`) is NaN or
    /// infinite. Positions are 1-based.
    #[error("Value at ({row}, {col}) is not a finite number")]
    NotFinite { row: usize, col: usize },

    #[error("'size' has invalid input: '{value}'")]
    InvalidSize { value: String },

    #[error(transparent)]
    Solve(#[from] linear::Error),
}
