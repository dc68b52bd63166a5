use approx::assert_abs_diff_eq;
mod common;

use common::SwapCounter;
use echelon::linalg::{
    gaussian_elimination_in_place, is_row_echelon, row_reduce_in_place, LinalgError,
};
use echelon::{DynMatrix, EchelonMethod, RowEchelon};

const TOL: f64 = 1e-12;

fn assert_matrix_near(got: &DynMatrix<f64>, expected: &[&[f64]]) {
    assert_eq!(got.nrows(), expected.len(), "row count");
    for (i, row) in expected.iter().enumerate() {
        assert_eq!(got.ncols(), row.len(), "column count");
        for (j, &e) in row.iter().enumerate() {
            assert_abs_diff_eq!(got[(i, j)], e, epsilon = TOL);
        }
    }
}

// ── Worked examples ──────────────────────────────────────────────────

#[test]
fn dependent_rows_fall_back_to_row_reduction() {
    let a = DynMatrix::from_array([[2.0, 1.0], [4.0, 2.0]]);
    assert_eq!(a.gaussian_elimination().unwrap_err(), LinalgError::Singular);

    let r = RowEchelon::new(&a);
    assert_eq!(r.method(), EchelonMethod::RowReduction);
    assert_eq!(r.swap_count(), 0);
    assert_matrix_near(r.reduced(), &[&[1.0, 0.5], &[0.0, 0.0]]);
}

#[test]
fn permutation_matrix_swaps_once() {
    let a = DynMatrix::from_array([[0.0, 1.0], [1.0, 0.0]]);
    let r = RowEchelon::new(&a);
    assert_eq!(r.method(), EchelonMethod::GaussianElimination);
    assert_eq!(r.swap_count(), 1);
    assert_matrix_near(r.reduced(), &[&[1.0, 0.0], &[0.0, 1.0]]);
}

#[test]
fn dominant_first_row_needs_no_swap() {
    let a = DynMatrix::from_array([[6.0, 3.0], [4.0, 3.0]]);
    let r = RowEchelon::new(&a);
    assert_eq!(r.swap_count(), 0);
    assert_matrix_near(r.reduced(), &[&[6.0, 3.0], &[0.0, 1.0]]);
}

#[test]
fn larger_pivot_below_is_swapped_up() {
    // |6| > |4|: partial pivoting moves the second row up before eliminating
    let a = DynMatrix::from_array([[4.0, 3.0], [6.0, 3.0]]);
    let r = RowEchelon::new(&a);
    assert_eq!(r.method(), EchelonMethod::GaussianElimination);
    assert_eq!(r.swap_count(), 1);
    assert_matrix_near(r.reduced(), &[&[6.0, 3.0], &[0.0, 1.0]]);
}

#[test]
fn row_reduction_keeps_nonzero_leading_pivot() {
    // No reordering: elimination leaves -1.5 in the second row, then it is scaled to one
    let a = DynMatrix::from_array([[4.0, 3.0], [6.0, 3.0]]);
    let r = a.row_reduction();
    assert_eq!(r.swap_count(), 0);
    assert_matrix_near(r.reduced(), &[&[1.0, 0.75], &[0.0, 1.0]]);
}

// ── Singular inputs ─────────────────────────────────────────────────

#[test]
fn zero_row_is_singular_but_decomposes() {
    let a = DynMatrix::from_array([[1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [4.0, 5.0, 6.0]]);
    assert!(a.gaussian_elimination().is_err());
    let r = a.row_echelon();
    assert!(is_row_echelon(r.reduced()));
    assert_eq!(r.rank(), 2);
}

#[test]
fn identical_rows_are_singular_but_decompose() {
    let a = DynMatrix::from_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [1.0, 2.0, 3.0]]);
    assert!(a.gaussian_elimination().is_err());
    let r = a.row_echelon();
    assert_eq!(r.method(), EchelonMethod::RowReduction);
    assert!(is_row_echelon(r.reduced()));
    assert_eq!(r.rank(), 2);
    assert_eq!(r.det(), Some(0.0));
}

#[test]
fn zero_matrix_decomposes_to_itself() {
    let a = DynMatrix::zeros(2, 3, 0.0);
    let r = a.row_echelon();
    assert_eq!(r.reduced(), &a);
    assert_eq!(r.swap_count(), 0);
    assert_eq!(r.rank(), 0);
    assert!(r.pivot_columns().is_empty());
}

#[test]
fn row_reduction_det_of_nonsingular_input() {
    let a = DynMatrix::from_array([[2.0, 1.0], [1.0, 3.0]]);
    let r = a.row_reduction();
    assert_eq!(r.method(), EchelonMethod::RowReduction);
    assert_abs_diff_eq!(r.det().unwrap(), 5.0, epsilon = TOL);
    assert_abs_diff_eq!(r.det().unwrap(), a.row_echelon().det().unwrap(), epsilon = TOL);
}

// ── Nonsingular inputs ──────────────────────────────────────────────

#[test]
fn nonsingular_square_is_upper_triangular() {
    let a = DynMatrix::from_array([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [2.0, 6.0, 4.0, 1.0],
        [3.0, 1.0, 9.0, 2.0],
    ]);
    let r = a.gaussian_elimination().unwrap();
    let u = r.reduced();
    for i in 0..4 {
        for j in 0..i {
            assert_eq!(u[(i, j)], 0.0, "u[({},{})] = {}", i, j, u[(i, j)]);
        }
    }
    assert_eq!(r.pivot_columns(), vec![0, 1, 2, 3]);
}

#[test]
fn det_matches_cofactor_expansion() {
    let a = DynMatrix::from_array([[2.0, -1.0, 0.0], [1.0, 3.0, 2.0], [0.0, 1.0, 4.0]]);
    // 2*(12-2) - (-1)*(4-0) + 0 = 24
    assert_abs_diff_eq!(a.row_echelon().det().unwrap(), 24.0, epsilon = 1e-10);
}

#[test]
fn swap_sign_follows_parity() {
    let a = DynMatrix::from_array([[0.0, 1.0], [1.0, 0.0]]);
    let r = a.row_echelon();
    assert_eq!(r.swap_sign(), -1.0);
    assert_abs_diff_eq!(r.det().unwrap(), -1.0, epsilon = TOL);
}

// ── Swap instrumentation ────────────────────────────────────────────

#[test]
fn gaussian_swap_count_matches_instrumented_swaps() {
    let a = DynMatrix::from_array([
        [1.0, 2.0, 0.0],
        [3.0, 1.0, 1.0],
        [0.0, 5.0, 2.0],
        [7.0, 0.0, 1.0],
    ]);
    let mut counted = SwapCounter::new(a.clone());
    let swaps = gaussian_elimination_in_place(&mut counted).unwrap();
    assert_eq!(swaps, counted.swaps);
    assert_eq!(a.row_echelon().swap_count(), counted.swaps);
    assert_eq!(counted.inner, a.row_echelon().into_reduced());
}

#[test]
fn row_reduction_swap_count_matches_instrumented_swaps() {
    let a = DynMatrix::from_array([
        [0.0, 0.0, 1.0],
        [0.0, 2.0, 1.0],
        [3.0, 0.0, 0.0],
    ]);
    let mut counted = SwapCounter::new(a.clone());
    let swaps = row_reduce_in_place(&mut counted);
    assert_eq!(swaps, counted.swaps);
    assert_eq!(a.row_reduction().swap_count(), counted.swaps);
}

// ── Idempotence ─────────────────────────────────────────────────────

#[test]
fn decomposing_row_reduced_output_changes_nothing() {
    let inputs = [
        DynMatrix::from_array([[2.0, 1.0, 0.0], [4.0, 2.0, 1.0], [0.0, 0.0, 3.0]]),
        DynMatrix::from_array([[0.0, 1.0, 2.0], [0.0, 2.0, 4.0], [1.0, 1.0, 1.0]]),
        DynMatrix::from_array([[3.0, 1.0, 4.0], [1.0, 5.0, 9.0], [2.0, 6.0, 5.0]]),
    ];
    for a in inputs.iter() {
        let once = a.row_reduction().into_reduced();
        let twice = once.row_echelon();
        assert_eq!(twice.swap_count(), 0);
        for i in 0..once.nrows() {
            for j in 0..once.ncols() {
                assert_abs_diff_eq!(twice.reduced()[(i, j)], once[(i, j)], epsilon = TOL);
            }
        }
    }
}

// ── Result contract ─────────────────────────────────────────────────

#[test]
fn negative_swap_count_is_invalid_argument() {
    for swaps in [-1isize, -2, isize::MIN] {
        let err =
            RowEchelon::from_parts(DynMatrix::eye(2, 0.0), swaps, EchelonMethod::RowReduction)
                .unwrap_err();
        assert!(matches!(err, LinalgError::InvalidArgument(_)));
    }
}

#[test]
fn nested_rows_roundtrip_through_decomposition() {
    let rows = vec![vec![0.0, 2.0], vec![1.0, 1.0], vec![2.0, 2.0]];
    let a = DynMatrix::try_from_rows(rows).unwrap();
    let r = a.row_echelon();
    let rows = r.reduced().to_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2], vec![0.0, 0.0]);
    let rebuilt = DynMatrix::from_rows_unchecked(rows);
    assert_eq!(&rebuilt, r.reduced());
}

#[test]
fn single_precision() {
    let a = DynMatrix::from_array([[0.0_f32, 2.0], [4.0, 1.0]]);
    let r = a.row_echelon();
    assert_eq!(r.swap_count(), 1);
    assert_eq!(r.reduced().row(0), &[4.0, 1.0]);
    assert_eq!(r.reduced().row(1), &[0.0, 2.0]);
}
