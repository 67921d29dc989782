//! `MatrixN`: runtime-shaped matrices with basic algebra.

use approx::assert_abs_diff_eq;
use geometry::{MatrixError, MatrixN};

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn m(rows: usize, cols: usize, data: &[f64]) -> MatrixN {
    MatrixN::from_slice(rows, cols, data).unwrap_or_else(|e| panic!("bad fixture: {e}"))
}

fn two_by_three() -> MatrixN {
    m(2, 3, &[1., 2., 3., 4., 5., 6.])
}

// ─── Construction ────────────────────────────────────────────────────────────

#[test]
fn new_is_zero_filled() {
    let z = MatrixN::new(3, 5);
    assert_eq!(z.shape(), (3, 5));
    assert_eq!(z.len(), 15);
    assert!(z.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn from_vec_checks_length() {
    assert_eq!(
        MatrixN::from_vec(2, 2, vec![1.0, 2.0, 3.0]),
        Err(MatrixError::LengthMismatch { expected: 4, actual: 3 })
    );
    assert!(MatrixN::from_vec(2, 2, vec![0.0; 4]).is_ok());
}

#[test]
fn overflowing_shape_rejected() {
    let rows = 1usize << 63;
    assert_eq!(
        MatrixN::from_vec(rows, 2, vec![]),
        Err(MatrixError::ShapeOverflow { rows, cols: 2 })
    );
    assert_eq!(
        MatrixN::from_slice(2, usize::MAX, &[]),
        Err(MatrixError::ShapeOverflow { rows: 2, cols: usize::MAX })
    );
    assert_eq!(
        MatrixN::try_new(usize::MAX, usize::MAX),
        Err(MatrixError::ShapeOverflow { rows: usize::MAX, cols: usize::MAX })
    );
}

#[test]
#[should_panic(expected = "more entries than fit in usize")]
fn new_panics_on_overflowing_shape() {
    let _m = MatrixN::new(1usize << 63, 2);
}

#[test]
fn try_new_is_zero_filled() {
    let z = MatrixN::try_new(2, 2).unwrap();
    assert_eq!(z, MatrixN::new(2, 2));
}

#[test]
fn clone_is_deep() {
    let a = two_by_three();
    let mut b = a.clone();
    b.set(0, 0, 9.0).unwrap();
    assert_eq!(a.get(0, 0), Ok(1.0));
    assert_eq!(b.get(0, 0), Ok(9.0));
}

#[test]
fn identity_rectangular() {
    let i = MatrixN::identity(3, 2);
    assert_eq!(i.as_slice(), &[1., 0., 0., 1., 0., 0.]);
}

// ─── Indexed access ──────────────────────────────────────────────────────────

#[test]
fn row_major_layout() {
    let a = two_by_three();
    assert_eq!(a[(1, 0)], 4.0);
    assert_eq!(a[4], 5.0);
    assert_eq!(a.get(0, 2), a.get_flat(2));
}

#[test]
fn out_of_range_access() {
    let mut a = two_by_three();
    assert_eq!(a.get(2, 0), Err(MatrixError::IndexOutOfRange { row: 2, col: 0, rows: 2, cols: 3 }));
    assert_eq!(a.get(0, 3), Err(MatrixError::IndexOutOfRange { row: 0, col: 3, rows: 2, cols: 3 }));
    assert_eq!(a.set_flat(6, 0.0), Err(MatrixError::FlatIndexOutOfRange { index: 6, len: 6 }));
    assert_eq!(a, two_by_three());
}

#[test]
#[should_panic(expected = "out of range")]
fn index_operator_panics() {
    let mut a = two_by_three();
    a[(0, 3)] = 1.0;
}

// ─── Algebra ─────────────────────────────────────────────────────────────────

#[test]
fn add_and_sub_same_shape() {
    let a = two_by_three();
    let b = m(2, 3, &[0.5, 0.5, 0.5, 1.0, 1.0, 1.0]);
    let sum = a.try_add(&b).unwrap();
    assert_eq!(sum.as_slice(), &[1.5, 2.5, 3.5, 5.0, 6.0, 7.0]);
    assert_abs_diff_eq!(sum.try_sub(&b).unwrap(), a, epsilon = 1e-12);
}

#[test]
fn add_shape_mismatch_fails() {
    let a = two_by_three();
    let b = MatrixN::new(3, 2);
    assert_eq!(
        a.try_add(&b),
        Err(MatrixError::DimensionMismatch { op: "add", lhs: (2, 3), rhs: (3, 2) })
    );
    assert!(matches!(a.try_sub(&b), Err(MatrixError::DimensionMismatch { .. })));
}

#[test]
fn mismatch_message_names_shapes() {
    let err = two_by_three().try_add(&MatrixN::new(3, 2)).unwrap_err();
    assert_eq!(err.to_string(), "cannot add a 2x3 matrix with a 3x2 matrix");
}

#[test]
fn scalar_multiply() {
    let a = two_by_three();
    let doubled = 2.0 * &a;
    assert_eq!(doubled, &a * 2.0);
    assert_eq!(doubled.as_slice(), &[2., 4., 6., 8., 10., 12.]);
    assert_eq!((a.clone() * 0.5)[(1, 2)], 3.0);
    assert_eq!(-a, m(2, 3, &[-1., -2., -3., -4., -5., -6.]));
}

#[test]
fn divide_rejects_only_exact_zero() {
    let a = two_by_three();
    assert_eq!(a.try_div(0.0), Err(MatrixError::DivideByZero { divisor: 0.0 }));
    assert!(a.try_div(1e-9).is_ok());
    assert_eq!(a.try_div(2.0).unwrap().as_slice(), &[0.5, 1.0, 1.5, 2.0, 2.5, 3.0]);
}

#[test]
fn matrix_product() {
    let a = two_by_three();
    let b = m(3, 2, &[7., 8., 9., 10., 11., 12.]);
    let c = a.try_mul(&b).unwrap();
    assert_eq!(c.shape(), (2, 2));
    assert_eq!(c.as_slice(), &[58., 64., 139., 154.]);
}

#[test]
fn matrix_product_inner_dimension_mismatch() {
    let a = two_by_three();
    assert_eq!(
        a.try_mul(&a),
        Err(MatrixError::DimensionMismatch { op: "multiply", lhs: (2, 3), rhs: (2, 3) })
    );
}

#[test]
fn identity_is_neutral_for_product() {
    let a = two_by_three();
    assert_eq!(MatrixN::identity(2, 2).try_mul(&a).unwrap(), a);
    assert_eq!(a.try_mul(&MatrixN::identity(3, 3)).unwrap(), a);
}

#[test]
fn transpose_swaps_shape() {
    let t = two_by_three().transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.as_slice(), &[1., 4., 2., 5., 3., 6.]);
    assert_eq!(t.transpose(), two_by_three());
}

#[test]
fn trace_uses_shorter_dimension() {
    assert_eq!(two_by_three().trace(), 6.0);
    assert_eq!(two_by_three().transpose().trace(), 6.0);
    assert_eq!(m(3, 3, &[1., 0., 0., 0., 2., 0., 0., 0., 3.]).trace(), 6.0);
}

#[test]
fn display_rows() {
    assert_eq!(two_by_three().to_string(), "[1, 2, 3]\n[4, 5, 6]");
}
