use crate::linalg::LinalgError;
use crate::traits::{LinalgScalar, MatrixMut};

/// Reduce `a` to row echelon form by Gaussian elimination with partial
/// pivoting, in place.
///
/// For each pivot column `k < min(nrows, ncols)` the row with the largest
/// modulus in column `k` (first one wins on ties) is swapped into row `k`,
/// then every entry below the pivot is eliminated. Entries under the pivot
/// are set to exactly zero rather than left to the subtraction.
///
/// Returns the number of row interchanges performed, or
/// [`LinalgError::Singular`] as soon as a column's best pivot candidate is
/// exactly zero. On error `a` is left partially reduced.
///
/// ```
/// use echelon::DynMatrix;
/// use echelon::linalg::gaussian_elimination_in_place;
///
/// let mut a = DynMatrix::from_array([[0.0_f64, 1.0], [1.0, 0.0]]);
/// let swaps = gaussian_elimination_in_place(&mut a).unwrap();
/// assert_eq!(swaps, 1);
/// assert_eq!(a, DynMatrix::eye(2, 0.0));
/// ```
pub fn gaussian_elimination_in_place<T: LinalgScalar>(
    a: &mut impl MatrixMut<T>,
) -> Result<usize, LinalgError> {
    let m = a.nrows();
    let n = a.ncols();
    let mut swaps = 0;

    for k in 0..m.min(n) {
        // Partial pivoting: strictly greater keeps the first maximum
        let mut index = k;
        let mut max_val = a.get(k, k).modulus();
        for row in (k + 1)..m {
            let val = a.get(row, k).modulus();
            if val > max_val {
                max_val = val;
                index = row;
            }
        }

        if *a.get(index, k) == T::zero() {
            return Err(LinalgError::Singular);
        }

        if index != k {
            a.swap_rows(k, index);
            swaps += 1;
            tracing::trace!(pivot_col = k, from_row = index, "row interchange");
        }

        let diag = *a.get(k, k);
        for i in (k + 1)..m {
            // diag was checked above; the guard only keeps this total
            let scale = if diag == T::zero() {
                T::one()
            } else {
                *a.get(i, k) / diag
            };
            for j in (k + 1)..n {
                let pivot_j = *a.get(k, j);
                let x = a.get_mut(i, j);
                *x = *x - scale * pivot_j;
            }
            *a.get_mut(i, k) = T::zero();
        }
    }

    Ok(swaps)
}
