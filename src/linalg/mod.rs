pub(crate) mod gaussian;
pub(crate) mod row_reduction;

#[cfg(feature = "alloc")]
pub(crate) mod echelon;

pub use gaussian::gaussian_elimination_in_place;
pub use row_reduction::row_reduce_in_place;

#[cfg(feature = "alloc")]
pub use echelon::{EchelonMethod, RowEchelon};

use crate::traits::{MatrixRef, Scalar};

/// Errors from echelon reduction.
///
/// `Singular` is the recoverable signal raised by Gaussian elimination and
/// absorbed by [`RowEchelon::new`]; `InvalidArgument` is a contract violation
/// when assembling a result by hand.
///
/// ```
/// use echelon::DynMatrix;
/// use echelon::linalg::LinalgError;
///
/// let singular = DynMatrix::from_array([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.gaussian_elimination().unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LinalgError {
    /// The largest-modulus pivot candidate in some column is exactly zero.
    #[error("matrix is singular")]
    Singular,
    /// An argument broke a constructor contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Column of the first nonzero entry in `row`, if any.
pub(crate) fn leading_column<T: Scalar>(a: &impl MatrixRef<T>, row: usize) -> Option<usize> {
    a.row_as_slice(row, 0).iter().position(|x| *x != T::zero())
}

/// Check whether `a` is in row echelon form.
///
/// Every nonzero row's leading entry must sit strictly right of the leading
/// entry of the row above, and all zero rows must come last. Entries are
/// compared to zero exactly.
///
/// ```
/// use echelon::DynMatrix;
/// use echelon::linalg::is_row_echelon;
///
/// assert!(is_row_echelon(&DynMatrix::from_array([[1.0_f64, 2.0, 3.0], [0.0, 0.0, 4.0]])));
/// assert!(!is_row_echelon(&DynMatrix::from_array([[0.0_f64, 1.0], [1.0, 0.0]])));
/// ```
pub fn is_row_echelon<T: Scalar>(a: &impl MatrixRef<T>) -> bool {
    let mut prev: Option<usize> = None;
    let mut seen_zero_row = false;
    for row in 0..a.nrows() {
        match leading_column(a, row) {
            None => seen_zero_row = true,
            Some(_) if seen_zero_row => return false,
            Some(c) => {
                if prev.is_some_and(|p| c <= p) {
                    return false;
                }
                prev = Some(c);
            }
        }
    }
    true
}
