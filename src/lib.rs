//! # echelon
//!
//! Row echelon form of dense numeric matrices, no-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use echelon::DynMatrix;
//!
//! // Partial pivoting picks row 1 for column 0 and swaps it up
//! let a = DynMatrix::from_array([[0.0_f64, 1.0], [1.0, 0.0]]);
//! let r = a.row_echelon();
//! assert_eq!(r.swap_count(), 1);
//! assert_eq!(r.reduced(), &DynMatrix::eye(2, 0.0));
//!
//! // Singular input falls back to row reduction instead of failing
//! let s = DynMatrix::from_array([[2.0_f64, 1.0], [4.0, 2.0]]);
//! assert_eq!(s.row_echelon().reduced().to_rows(), vec![vec![1.0, 0.5], vec![0.0, 0.0]]);
//! ```
//!
//! ## Modules
//!
//! - [`dynmatrix`] — Heap-allocated `DynMatrix<T>` with runtime dimensions
//!   (requires `alloc` feature, included with `std`). Contiguous row-major
//!   `Vec<T>` storage with O(ncols) row interchange. Implements [`MatrixRef`] /
//!   [`MatrixMut`], so the in-place kernels work on it directly.
//!
//! - [`linalg`] — The two reduction kernels and the result type:
//!   - [`linalg::gaussian_elimination_in_place`]: partial pivoting, fails with
//!     [`linalg::LinalgError::Singular`] on an exactly-zero best pivot.
//!   - [`linalg::row_reduce_in_place`]: tolerant of zero pivots and rank
//!     deficiency, never fails.
//!   - [`RowEchelon`]: reduced matrix plus swap count. [`RowEchelon::new`]
//!     tries Gaussian elimination and falls back to row reduction.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`LinalgScalar`] — real floats and complex numbers, ranked by modulus
//!   - [`MatrixRef`] / [`MatrixMut`] — generic row access for the kernels
//!
//! Zero tests in both kernels are exact comparisons; no tolerance is applied.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc`   | via std  | `DynMatrix` and `RowEchelon` (heap-allocated, runtime-sized) |
//! | `complex` | no       | `Complex<f32>` / `Complex<f64>` support via `num-complex` |
//! | `all`     | no       | All features: `std` + `complex` |
//!
//! Without `std`, float operations go through the pure-Rust `libm`, which
//! `num-traits` always has enabled.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod dynmatrix;
pub mod linalg;
pub mod traits;

#[cfg(feature = "alloc")]
pub use dynmatrix::{DynMatrix, DynMatrixf32, DynMatrixf64};
#[cfg(all(feature = "alloc", feature = "complex"))]
pub use dynmatrix::{DynMatrixz32, DynMatrixz64};
#[cfg(feature = "alloc")]
pub use linalg::{EchelonMethod, RowEchelon};
pub use traits::{FloatScalar, LinalgScalar, MatrixMut, MatrixRef, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
