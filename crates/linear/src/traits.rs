use nalgebra::{allocator::Allocator, DefaultAllocator, Dim, OMatrix, OVector, Scalar};
use num_traits::Zero;

use crate::Error;

pub trait LSolver<T, D>
where
    T: Scalar + Zero,
    D: Dim,
    DefaultAllocator: Allocator<T, D, D> + Allocator<T, D>,
{
    /// The magnitude below which a candidate pivot is treated as zero.
    fn tolerance(&self) -> T;

    /// Solves the linear system Ax = b.
    ///
    /// Both `mat_a` and `b` are consumed: the solver overwrites them while eliminating, so a
    /// caller that needs the original system afterwards (e.g. to check the residual) must keep
    /// its own copy.
    ///
    /// ## Arguments
    /// * `mat_a` the square matrix A.
    /// * `b` the linear system right-hand side.
    ///
    /// ## Returns
    /// The solution x, where index `i` corresponds to column `i` of A.
    fn solve(&self, mat_a: OMatrix<T, D, D>, b: OVector<T, D>) -> Result<OVector<T, D>, Error>;
}
