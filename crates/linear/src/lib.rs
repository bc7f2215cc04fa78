//! Dense linear solver for small, interactively entered systems `Ax = b`.

mod dense;
mod traits;

pub use dense::{solve, Dense, PIVOT_TOLERANCE};
pub use traits::LSolver;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Every candidate pivot in column `index` of the remaining submatrix was below tolerance.
    #[error("Matrix is singular or nearly singular (pivot {index})")]
    SingularMatrix { index: usize },

    /// The system is not a non-empty square matrix with a matching right-hand side.
    #[error("Expected a non-empty square system, got a {rows}x{cols} matrix with {len} constants")]
    DimensionMismatch { rows: usize, cols: usize, len: usize },
}

