use echelon::{DynMatrix, MatrixMut, MatrixRef};

/// Wraps a matrix and counts every row interchange actually performed.
pub struct SwapCounter {
    pub inner: DynMatrix<f64>,
    pub swaps: usize,
}

impl SwapCounter {
    pub fn new(inner: DynMatrix<f64>) -> Self {
        Self { inner, swaps: 0 }
    }
}

impl MatrixRef<f64> for SwapCounter {
    fn nrows(&self) -> usize {
        self.inner.nrows()
    }

    fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    fn get(&self, row: usize, col: usize) -> &f64 {
        self.inner.get(row, col)
    }

    fn row_as_slice(&self, row: usize, col_start: usize) -> &[f64] {
        self.inner.row_as_slice(row, col_start)
    }
}

impl MatrixMut<f64> for SwapCounter {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        self.inner.get_mut(row, col)
    }

    fn row_as_mut_slice(&mut self, row: usize, col_start: usize) -> &mut [f64] {
        self.inner.row_as_mut_slice(row, col_start)
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            self.swaps += 1;
        }
        self.inner.swap_rows(a, b);
    }
}
