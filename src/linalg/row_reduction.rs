use crate::traits::{LinalgScalar, MatrixMut};

/// Reduce `a` to row echelon form by row reduction, in place.
///
/// Tolerates zero pivots and rank deficiency: a column with no nonzero entry
/// at or below the current row is skipped without consuming a row, so the
/// result has as many pivot rows as the matrix has rank. Each pivot row is
/// divided through by its pivot so the pivot is exactly one, and rows below
/// are eliminated across their full width.
///
/// Zero pivots are replaced by the first row below with a nonzero entry in
/// the same column. Returns the number of row interchanges performed.
///
/// ```
/// use echelon::DynMatrix;
/// use echelon::linalg::row_reduce_in_place;
///
/// let mut a = DynMatrix::from_array([[2.0_f64, 1.0], [4.0, 2.0]]);
/// let swaps = row_reduce_in_place(&mut a);
/// assert_eq!(swaps, 0);
/// assert_eq!(a.to_rows(), vec![vec![1.0, 0.5], vec![0.0, 0.0]]);
/// ```
pub fn row_reduce_in_place<T: LinalgScalar>(a: &mut impl MatrixMut<T>) -> usize {
    row_reduce_with_pivot_product(a).0
}

/// Row reduction that also returns the product of the pivots divided out.
///
/// Together with the swap parity this recovers the determinant of a
/// full-rank square input, since elimination below a pivot preserves it.
pub(crate) fn row_reduce_with_pivot_product<T: LinalgScalar>(
    a: &mut impl MatrixMut<T>,
) -> (usize, T) {
    let m = a.nrows();
    let n = a.ncols();
    let mut swaps = 0;
    let mut pivot_product = T::one();
    let mut row = 0;
    let mut col = 0;

    while row < m && col < n {
        if *a.get(row, col) == T::zero() {
            let replacement = ((row + 1)..m).find(|&r| *a.get(r, col) != T::zero());
            if let Some(r) = replacement {
                a.swap_rows(row, r);
                swaps += 1;
                tracing::trace!(pivot_col = col, from_row = r, to_row = row, "row interchange");
            }
        }

        let divisor = *a.get(row, col);
        if divisor == T::zero() {
            // Nothing nonzero at or below `row` in this column
            col += 1;
            continue;
        }

        pivot_product = pivot_product * divisor;
        if divisor != T::one() {
            for x in a.row_as_mut_slice(row, 0) {
                *x = *x / divisor;
            }
        }

        for i in (row + 1)..m {
            let scale = *a.get(i, col);
            if scale == T::zero() {
                continue;
            }
            for j in 0..n {
                let t = *a.get(row, j);
                let x = a.get_mut(i, j);
                *x = *x - scale * t;
            }
        }

        row += 1;
        col += 1;
    }

    (swaps, pivot_product)
}
