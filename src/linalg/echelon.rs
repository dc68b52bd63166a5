use alloc::vec::Vec;

use crate::dynmatrix::DynMatrix;
use crate::linalg::gaussian::gaussian_elimination_in_place;
use crate::linalg::row_reduction::row_reduce_with_pivot_product;
use crate::linalg::{leading_column, LinalgError};
use crate::traits::LinalgScalar;

/// Which reduction produced a [`RowEchelon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchelonMethod {
    /// Partial-pivoting Gaussian elimination; pivots are left unscaled.
    GaussianElimination,
    /// Rank-tolerant row reduction; every pivot is scaled to one.
    RowReduction,
}

/// Row echelon form of a matrix, with the number of row interchanges it took.
///
/// Produced once per reduction and immutable afterwards. The swap count is
/// what a determinant needs for its sign.
///
/// # Example
///
/// ```
/// use echelon::{DynMatrix, RowEchelon};
///
/// // Second row is twice the first: Gaussian elimination hits a zero pivot
/// // and the reduction falls back to row reduction.
/// let a = DynMatrix::from_array([[2.0_f64, 1.0], [4.0, 2.0]]);
/// let r = RowEchelon::new(&a);
/// assert_eq!(r.reduced().to_rows(), vec![vec![1.0, 0.5], vec![0.0, 0.0]]);
/// assert_eq!(r.swap_count(), 0);
/// assert_eq!(r.rank(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RowEchelon<T> {
    reduced: DynMatrix<T>,
    swaps: usize,
    method: EchelonMethod,
    // Product of the pivots row reduction divided out; one otherwise
    pivot_product: T,
}

impl<T: LinalgScalar> RowEchelon<T> {
    /// Reduce `a` to row echelon form.
    ///
    /// Tries Gaussian elimination with partial pivoting first and falls back
    /// to row reduction if it meets an exactly-zero pivot, so this never
    /// fails. `a` is not modified.
    pub fn new(a: &DynMatrix<T>) -> Self {
        Self::gaussian(a).unwrap_or_else(|err| {
            tracing::debug!(
                nrows = a.nrows(),
                ncols = a.ncols(),
                error = %err,
                "gaussian elimination failed, falling back to row reduction"
            );
            Self::row_reduction(a)
        })
    }

    /// Reduce `a` by Gaussian elimination with partial pivoting only.
    ///
    /// Returns [`LinalgError::Singular`] if some column's largest-modulus
    /// pivot candidate is exactly zero.
    pub fn gaussian(a: &DynMatrix<T>) -> Result<Self, LinalgError> {
        let mut reduced = a.clone();
        let swaps = gaussian_elimination_in_place(&mut reduced)?;
        Ok(Self {
            reduced,
            swaps,
            method: EchelonMethod::GaussianElimination,
            pivot_product: T::one(),
        })
    }

    /// Reduce `a` by rank-tolerant row reduction only.
    pub fn row_reduction(a: &DynMatrix<T>) -> Self {
        let mut reduced = a.clone();
        let (swaps, pivot_product) = row_reduce_with_pivot_product(&mut reduced);
        Self {
            reduced,
            swaps,
            method: EchelonMethod::RowReduction,
            pivot_product,
        }
    }

    /// Assemble a result from an already reduced matrix and its swap count.
    ///
    /// No pivot scaling is recorded, so [`det`](Self::det) treats `reduced`
    /// as the unscaled echelon form.
    ///
    /// A negative `swaps` is rejected with [`LinalgError::InvalidArgument`].
    ///
    /// ```
    /// use echelon::{DynMatrix, EchelonMethod, RowEchelon};
    /// use echelon::linalg::LinalgError;
    ///
    /// let m = DynMatrix::eye(2, 0.0_f64);
    /// assert!(RowEchelon::from_parts(m.clone(), 0, EchelonMethod::RowReduction).is_ok());
    /// assert!(matches!(
    ///     RowEchelon::from_parts(m, -1, EchelonMethod::RowReduction),
    ///     Err(LinalgError::InvalidArgument(_))
    /// ));
    /// ```
    pub fn from_parts(
        reduced: DynMatrix<T>,
        swaps: isize,
        method: EchelonMethod,
    ) -> Result<Self, LinalgError> {
        let swaps = usize::try_from(swaps)
            .map_err(|_| LinalgError::InvalidArgument("swap count must be non-negative"))?;
        Ok(Self {
            reduced,
            swaps,
            method,
            pivot_product: T::one(),
        })
    }

    /// The matrix in row echelon form.
    #[inline]
    pub fn reduced(&self) -> &DynMatrix<T> {
        &self.reduced
    }

    /// Consume the result, keeping only the reduced matrix.
    #[inline]
    pub fn into_reduced(self) -> DynMatrix<T> {
        self.reduced
    }

    /// Number of row interchanges performed.
    #[inline]
    pub fn swap_count(&self) -> usize {
        self.swaps
    }

    /// Which reduction produced this result.
    #[inline]
    pub fn method(&self) -> EchelonMethod {
        self.method
    }

    /// `1` for an even number of swaps, `-1` for odd.
    pub fn swap_sign(&self) -> T {
        if self.swaps % 2 == 0 {
            T::one()
        } else {
            T::zero() - T::one()
        }
    }

    /// Column of each nonzero row's leading entry, top to bottom.
    pub fn pivot_columns(&self) -> Vec<usize> {
        (0..self.reduced.nrows())
            .filter_map(|row| leading_column(&self.reduced, row))
            .collect()
    }

    /// Number of nonzero rows.
    pub fn rank(&self) -> usize {
        (0..self.reduced.nrows())
            .filter(|&row| leading_column(&self.reduced, row).is_some())
            .count()
    }

    /// Determinant of the original matrix, or `None` if it is not square.
    ///
    /// The product of the reduced diagonal, times the swap sign, times the
    /// pivots row reduction divided out. A rank-deficient square matrix has a
    /// zero on the reduced diagonal, so its determinant comes out zero.
    ///
    /// ```
    /// use echelon::DynMatrix;
    /// let a = DynMatrix::from_array([[3.0_f64, 8.0], [4.0, 6.0]]);
    /// let det = a.row_echelon().det().unwrap();
    /// assert!((det - (-14.0)).abs() < 1e-12);
    /// ```
    pub fn det(&self) -> Option<T> {
        if !self.reduced.is_square() {
            return None;
        }
        let mut d = self.swap_sign() * self.pivot_product;
        for i in 0..self.reduced.nrows() {
            d = d * self.reduced[(i, i)];
        }
        Some(d)
    }
}
