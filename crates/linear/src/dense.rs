//! Direct solver for small dense systems: forward elimination with partial (row) pivoting followed
//! by back substitution.
//!
use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, Matrix, OMatrix, OVector, RealField, Storage,
    StorageMut, U1,
};

use crate::{Error, LSolver};

/// Default magnitude below which a candidate pivot is considered numerically zero.
pub const PIVOT_TOLERANCE: f64 = 1.0e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dense<T> {
    tolerance: T,
}

impl<T> Dense<T>
where
    T: RealField + Copy,
{
    /// Creates a new dense linear solver using [`PIVOT_TOLERANCE`].
    pub fn new() -> Self {
        Dense {
            tolerance: nalgebra::convert(PIVOT_TOLERANCE),
        }
    }

    /// Creates a new dense linear solver with a custom pivot tolerance.
    ///
    /// # Panics
    /// If `tolerance` is not a finite, strictly positive number. A NaN tolerance would never
    /// compare greater than a pivot, and singular systems would go undetected.
    pub fn with_tolerance(tolerance: T) -> Self {
        assert!(
            tolerance.is_finite() && tolerance > T::zero(),
            "pivot tolerance must be finite and positive, got {tolerance:?}"
        );
        Dense { tolerance }
    }
}

impl<T> Default for Dense<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D> LSolver<T, D> for Dense<T>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<T, D, D> + Allocator<T, D>,
{
    fn tolerance(&self) -> T {
        self.tolerance
    }

    fn solve(
        &self,
        mut mat_a: OMatrix<T, D, D>,
        mut b: OVector<T, D>,
    ) -> Result<OVector<T, D>, Error> {
        let (rows, cols) = mat_a.shape();
        let len = b.nrows();
        if rows == 0 || rows != cols || rows != len {
            return Err(Error::DimensionMismatch { rows, cols, len });
        }

        tracing::debug!(n = rows, tolerance = ?self.tolerance, "Dense::solve");

        forward_eliminate(&mut mat_a, &mut b, self.tolerance)
            .map_err(|index| Error::SingularMatrix { index })?;

        // b now holds the reduced right-hand side; overwrite it with the solution
        back_substitute(&mat_a, &mut b);
        Ok(b)
    }
}

/// Solves Ax = b with a [`Dense`] solver using the default [`PIVOT_TOLERANCE`].
///
/// Both inputs are consumed; clone them first if the original system is needed afterwards.
pub fn solve<T, D>(mat_a: OMatrix<T, D, D>, b: OVector<T, D>) -> Result<OVector<T, D>, Error>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<T, D, D> + Allocator<T, D>,
{
    Dense::<T>::new().solve(mat_a, b)
}

/// Returns the row in `k..n` with the largest magnitude in column `k`. Ties go to the lowest row.
fn pivot_row<T, D, S>(mat_a: &Matrix<T, D, D, S>, k: usize) -> usize
where
    T: RealField + Copy,
    D: Dim,
    S: Storage<T, D, D>,
{
    let col_k = mat_a.column(k);
    let mut l = k;
    for i in (k + 1)..mat_a.nrows() {
        if col_k[i].abs() > col_k[l].abs() {
            l = i;
        }
    }
    l
}

/// Reduces the N by N system `A x = b` to upper triangular form in place.
///
/// At elimination step k the row with the largest |a(i,k)|, i >= k, is swapped into row k (and
/// the matching entries of `b` with it), then the entries below the diagonal in column k are
/// eliminated. Entries left of the diagonal are never read again and are not updated, so only
/// the upper triangle of A is meaningful on return.
///
/// Returns `Err(k)` with the (zero-based) elimination step at which every remaining candidate
/// pivot had magnitude below `tol`. A and b are left partially reduced in that case.
fn forward_eliminate<T, D, SA, SB>(
    mat_a: &mut Matrix<T, D, D, SA>,
    b: &mut Matrix<T, D, U1, SB>,
    tol: T,
) -> Result<(), usize>
where
    T: RealField + Copy,
    D: Dim,
    SA: StorageMut<T, D, D>,
    SB: StorageMut<T, D>,
{
    let n = mat_a.nrows();

    // k-th elimination step number
    for k in 0..n {
        let l = pivot_row(mat_a, k);

        // check for a numerically zero pivot element
        if mat_a[(l, k)].abs() < tol {
            tracing::trace!(step = k, pivot = ?mat_a[(l, k)], "singular pivot");
            return Err(k);
        }

        tracing::trace!(step = k, row = l, pivot = ?mat_a[(l, k)], "forward_eliminate");

        mat_a.swap_rows(k, l);
        b.swap_rows(k, l);

        // row_i = row_i - [a(i,k)/a(k,k)] row_k, i=k+1, ..., n-1
        let a_kk = mat_a[(k, k)];
        let b_k = b[k];
        for i in (k + 1)..n {
            let factor = mat_a[(i, k)] / a_kk;
            for j in k..n {
                let a_kj = mat_a[(k, j)];
                mat_a[(i, j)] -= factor * a_kj;
            }
            b[i] -= factor * b_k;
        }
    }

    Ok(())
}

/// Solves the upper triangular system left by [`forward_eliminate`], overwriting `b` with x.
///
/// The diagonal of A was checked against the pivot tolerance during elimination, so this cannot
/// divide by zero.
fn back_substitute<T, D, SA, SB>(mat_a: &Matrix<T, D, D, SA>, b: &mut Matrix<T, D, U1, SB>)
where
    T: RealField + Copy,
    D: Dim,
    SA: Storage<T, D, D>,
    SB: StorageMut<T, D>,
{
    let n = mat_a.nrows();

    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in (i + 1)..n {
            sum += mat_a[(i, j)] * b[j];
        }
        b[i] = (b[i] - sum) / mat_a[(i, i)];
    }
}
