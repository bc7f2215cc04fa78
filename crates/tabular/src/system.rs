use linear::LSolver;
use nalgebra::{DMatrix, DVector, Dyn};

use crate::{Error, Solution};

/// A system `A x = b` with a square coefficient matrix and only finite entries.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    matrix: DMatrix<f64>,
    constants: DVector<f64>,
}

impl LinearSystem {
    /// Pairs a square coefficient matrix with its constants.
    ///
    /// Fails if the shapes do not match or any entry is NaN or infinite.
    pub fn new(matrix: DMatrix<f64>, constants: DVector<f64>) -> Result<Self, Error> {
        let (rows, cols) = matrix.shape();
        if rows == 0 || rows != cols || rows != constants.len() {
            return Err(linear::Error::DimensionMismatch {
                rows,
                cols,
                len: constants.len(),
            }
            .into());
        }

        // nalgebra storage is column-major; report the first offender in row-major order
        for row in 0..rows {
            let row_view = matrix.row(row);
            let mut entries = row_view.iter().chain(std::iter::once(&constants[row]));
            if let Some(col) = entries.position(|v| !v.is_finite()) {
                return Err(Error::NotFinite {
                    row: row + 1,
                    col: col + 1,
                });
            }
        }

        Ok(LinearSystem { matrix, constants })
    }

    /// Splits an `n x (n + 1)` augmented matrix `[A | b]`.
    pub(crate) fn from_augmented(augmented: DMatrix<f64>) -> Self {
        let n = augmented.nrows();
        LinearSystem {
            matrix: augmented.columns(0, n).into_owned(),
            constants: augmented.column(n).into_owned(),
        }
    }

    pub fn size(&self) -> usize {
        self.constants.len()
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn constants(&self) -> &DVector<f64> {
        &self.constants
    }

    /// Solves the system, consuming it. Clone first to keep it for [`LinearSystem::residual`].
    pub fn solve<S>(self, solver: &S) -> Result<Solution, linear::Error>
    where
        S: LSolver<f64, Dyn>,
    {
        solver.solve(self.matrix, self.constants).map(Solution::from)
    }

    /// Largest absolute entry of `A x - b`.
    pub fn residual(&self, solution: &Solution) -> f64 {
        (&self.matrix * solution.values() - &self.constants).amax()
    }
}
