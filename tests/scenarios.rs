//! End-to-end scenarios through the public `compute_proximal` entry points.
use approx::assert_abs_diff_eq;
use ndarray::{array, Array1};
use ndarray_nonconvex_prox::prox::argmin_index;
use ndarray_nonconvex_prox::{compute_proximal, compute_proximal_legacy, ProxError, Regularizer};

#[test]
fn capl1_scenarios() {
    let x = compute_proximal(array![5.0].view(), 1, 1.0, 3.0, Regularizer::CapL1).unwrap();
    assert_eq!(x, array![5.0]);

    let x = compute_proximal(array![0.0].view(), 1, 1.0, 2.0, Regularizer::CapL1).unwrap();
    assert_eq!(x, array![0.0]);
}

#[test]
fn lsp_zero_input_with_large_lambda() {
    // lambda > theta^2 / 4 makes the discriminant negative at u = 0
    for &(lambda, theta) in [(1.0, 1.0), (0.3, 1.0), (5.0, 4.0)].iter() {
        let x = compute_proximal(array![0.0].view(), 1, lambda, theta, Regularizer::Lsp).unwrap();
        assert_eq!(x, array![0.0]);
    }
}

#[test]
fn mcp_scenario() {
    // x1 = 2 has objective 33, x2 = 10 has objective 0.5*theta*lambda^2 = 1
    let x = compute_proximal(array![10.0].view(), 1, 1.0, 2.0, Regularizer::Mcp).unwrap();
    assert_eq!(x, array![10.0]);
}

#[test]
fn dimension_mismatch_produces_no_output() {
    let d = array![1.0, 2.0, 3.0];
    for &r in [Regularizer::CapL1, Regularizer::Lsp, Regularizer::Mcp].iter() {
        assert_eq!(
            compute_proximal(d.view(), 5, 1.0, 2.0, r),
            Err(ProxError::InvalidDimension {
                expected: 5,
                found: 3
            })
        );
    }
}

#[test]
fn tie_break_prefers_first_minimum() {
    assert_eq!(argmin_index(&[2.0, 1.0, 1.0]), Some(1));
}

#[test]
fn scad_is_type_code_three() {
    use std::convert::TryFrom;

    let d = array![0.5, -1.5, 2.5, -5.0];
    let scad = Regularizer::try_from(3).unwrap();
    let x = compute_proximal(d.view(), 4, 1.0, 3.0, scad).unwrap();
    assert_abs_diff_eq!(x, array![0.0, -0.5, 2.0, -5.0], epsilon = 1e-12);
}

#[test]
fn legacy_type_three_thresholds_the_tail() {
    let d: Array1<f64> = array![4.0, -4.0, 4.0, -4.0, 0.5];
    let x = compute_proximal_legacy(d.view(), 5, 1.5, 4.0, 3).unwrap();
    assert_eq!(x, array![4.0, -4.0, 4.0, -2.5, 0.0]);

    // theta - 1 beyond the vector length is rejected, not a silent no-op
    assert!(matches!(
        compute_proximal_legacy(d.view(), 5, 1.5, 7.0, 3),
        Err(ProxError::InvalidParameter { name: "theta", .. })
    ));
}

#[test]
fn f32_vectors() {
    let d = array![5.0f32, -0.5, 2.0];
    let x = compute_proximal(d.view(), 3, 1.0, 3.0, Regularizer::CapL1).unwrap();
    assert_abs_diff_eq!(x, array![5.0f32, 0.0, 1.0]);
}
