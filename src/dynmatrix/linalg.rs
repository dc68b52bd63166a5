use crate::linalg::{is_row_echelon, LinalgError, RowEchelon};
use crate::traits::LinalgScalar;

use super::DynMatrix;

// ── Convenience methods on DynMatrix ────────────────────────────────

impl<T: LinalgScalar> DynMatrix<T> {
    /// Row echelon form, falling back to row reduction when Gaussian
    /// elimination meets a zero pivot.
    ///
    /// ```
    /// use echelon::DynMatrix;
    /// let a = DynMatrix::from_array([[0.0_f64, 1.0], [1.0, 0.0]]);
    /// let r = a.row_echelon();
    /// assert_eq!(r.swap_count(), 1);
    /// assert_eq!(r.reduced(), &DynMatrix::eye(2, 0.0));
    /// ```
    pub fn row_echelon(&self) -> RowEchelon<T> {
        RowEchelon::new(self)
    }

    /// Row echelon form by Gaussian elimination with partial pivoting, no fallback.
    pub fn gaussian_elimination(&self) -> Result<RowEchelon<T>, LinalgError> {
        RowEchelon::gaussian(self)
    }

    /// Row echelon form by rank-tolerant row reduction.
    pub fn row_reduction(&self) -> RowEchelon<T> {
        RowEchelon::row_reduction(self)
    }

    /// Rank, as the number of nonzero rows of the row echelon form.
    ///
    /// ```
    /// use echelon::DynMatrix;
    /// let a = DynMatrix::from_array([[1.0_f64, 2.0], [2.0, 4.0], [0.0, 1.0]]);
    /// assert_eq!(a.rank(), 2);
    /// ```
    pub fn rank(&self) -> usize {
        self.row_echelon().rank()
    }

    /// Whether this matrix is already in row echelon form.
    pub fn is_row_echelon(&self) -> bool {
        is_row_echelon(self)
    }
}
