pub mod aliases;
mod linalg;

pub use aliases::*;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Shape error for validated construction from nested rows.
///
/// Returned by [`DynMatrix::try_from_rows`].
///
/// # Example
///
/// ```
/// use echelon::DynMatrix;
/// use echelon::dynmatrix::ShapeError;
///
/// let ragged = vec![vec![1.0_f64, 2.0], vec![3.0]];
/// assert_eq!(
///     DynMatrix::try_from_rows(ragged).unwrap_err(),
///     ShapeError::Ragged { row: 1, expected: 2, got: 1 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// No rows, or a first row with no columns.
    #[error("matrix must have at least one row and one column")]
    Empty,
    /// A row whose length differs from the first row.
    #[error("row {row} has {got} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Dynamically-sized heap-allocated matrix.
///
/// Row-major `Vec<T>` storage: row `i` occupies `data[i * ncols..(i + 1) * ncols]`,
/// so row interchanges are a pair of contiguous slice swaps. Implements
/// [`MatrixRef`] and [`MatrixMut`], so the generic elimination kernels work
/// with `DynMatrix` out of the box.
///
/// # Examples
///
/// ```
/// use echelon::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = DynMatrix::eye(3, 0.0_f64);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// The `_zero` parameter is only used for type inference.
    ///
    /// ```
    /// use echelon::DynMatrix;
    /// let m = DynMatrix::zeros(2, 3, 0.0_f64);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize, _zero: T) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix filled with a given value.
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use echelon::DynMatrix;
    /// let id = DynMatrix::eye(3, 0.0_f64);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn eye(n: usize, _zero: T) -> Self {
        let mut m = Self::zeros(n, n, T::zero());
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use echelon::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        Self {
            data: row_major.to_vec(),
            nrows,
            ncols,
        }
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create a matrix from a nested array literal, one inner array per row.
    ///
    /// ```
    /// use echelon::DynMatrix;
    /// let m = DynMatrix::from_array([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m[(1, 2)], 6.0);
    /// ```
    pub fn from_array<const M: usize, const N: usize>(rows: [[T; N]; M]) -> Self {
        let mut data = Vec::with_capacity(M * N);
        for row in rows.iter() {
            data.extend_from_slice(row);
        }
        Self {
            data,
            nrows: M,
            ncols: N,
        }
    }

    /// Create a matrix from nested rows, validating the shape.
    ///
    /// Fails if there are no rows, the first row is empty, or any row has a
    /// different length than the first.
    ///
    /// ```
    /// use echelon::DynMatrix;
    /// let m = DynMatrix::try_from_rows(vec![vec![1.0_f64, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn try_from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let ncols = rows.first().map_or(0, Vec::len);
        if ncols == 0 {
            return Err(ShapeError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(ShapeError::Ragged {
                row,
                expected: ncols,
                got: r.len(),
            });
        }
        Ok(Self::from_rows_unchecked(rows))
    }

    /// Create a matrix from nested rows whose shape is already known to be
    /// rectangular. Skips validation outside debug builds.
    pub fn from_rows_unchecked(rows: Vec<Vec<T>>) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == ncols), "ragged rows");
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            data.extend(row);
        }
        Self { data, nrows, ncols }
    }

    /// Export the matrix as nested rows.
    ///
    /// ```
    /// use echelon::DynMatrix;
    /// let m = DynMatrix::from_array([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    /// ```
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.nrows).map(|i| self.row(i).to_vec()).collect()
    }
}

impl<T> DynMatrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Row-major backing storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Row `i` as a mutable slice.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Exchange rows `a` and `b` in place.
    ///
    /// ```
    /// use echelon::DynMatrix;
    /// let mut m = DynMatrix::from_array([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// m.swap_rows(0, 1);
    /// assert_eq!(m.row(0), &[3.0, 4.0]);
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let n = self.ncols;
        let (head, tail) = self.data.split_at_mut(hi * n);
        head[lo * n..(lo + 1) * n].swap_with_slice(&mut tail[..n]);
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use echelon::DynMatrix;
    /// let m = DynMatrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for DynMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }

    #[inline]
    fn row_as_slice(&self, row: usize, col_start: usize) -> &[T] {
        &self.data[row * self.ncols + col_start..(row + 1) * self.ncols]
    }
}

impl<T> MatrixMut<T> for DynMatrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }

    #[inline]
    fn row_as_mut_slice(&mut self, row: usize, col_start: usize) -> &mut [T] {
        let n = self.ncols;
        &mut self.data[row * n + col_start..(row + 1) * n]
    }

    #[inline]
    fn swap_rows(&mut self, a: usize, b: usize) {
        DynMatrix::swap_rows(self, a, b);
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}
