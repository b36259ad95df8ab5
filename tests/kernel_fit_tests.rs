//! Integration tests for the public estimator API.
//!
//! ## Test Organization
//!
//! 1. **Construction** - empty, mismatched and non-positive bandwidth inputs
//! 2. **Solve** - output shape, empty queries, limit and NaN behaviour
//! 3. **Bandwidth** - dispersion and rescaling
//! 4. **Determinism** - idempotence and thread-count independence

use approx::{assert_abs_diff_eq, assert_relative_eq};

use kernel_fit::math::gaussian;
use kernel_fit::{Evaluator, KernelFit1D, KernelFit2D, KernelFitError};

fn evaluator(threads: usize) -> Evaluator {
    Evaluator::new(threads).expect("pool")
}

fn assert_invalid(result: Result<impl std::fmt::Debug, KernelFitError>, operation: &str) {
    match result {
        Err(KernelFitError::InvalidInput { operation: op, .. }) => assert_eq!(op, operation),
        other => panic!("expected InvalidInput from {operation}, got {other:?}"),
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn fit1d_rejects_invalid_samples() {
    assert_invalid(KernelFit1D::new(vec![], vec![], 1.0), "KernelFit1D::new");
    assert_invalid(KernelFit1D::new(vec![1.0], vec![], 1.0), "KernelFit1D::new");
    assert_invalid(KernelFit1D::new(vec![1.0, 2.0], vec![1.0], 1.0), "KernelFit1D::new");
}

#[test]
fn fit1d_rejects_non_positive_bandwidth() {
    for h in [0.0, -0.5, f64::NAN] {
        assert_invalid(KernelFit1D::new(vec![1.0], vec![1.0], h), "KernelFit1D::new");
    }
}

#[test]
fn fit2d_rejects_invalid_samples() {
    assert_invalid(KernelFit2D::new(vec![1.0], vec![1.0], vec![], 1.0), "KernelFit2D::new");
    assert_invalid(
        KernelFit2D::new(vec![1.0, 2.0], vec![1.0, 2.0], vec![1.0], 1.0),
        "KernelFit2D::new",
    );
    assert_invalid(KernelFit2D::new(vec![1.0], vec![1.0], vec![1.0], 0.0), "KernelFit2D::new");
}

// ============================================================================
// Solve
// ============================================================================

#[test]
fn solve_output_matches_query_shape() {
    let ev = evaluator(4);
    let x: Vec<f64> = (0..40).map(|i| i as f64 * 0.25).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let fit = KernelFit1D::new(x.clone(), y.clone(), 0.3).unwrap();

    let queries: Vec<f64> = (0..17).map(|i| i as f64 * 0.6).collect();
    assert_eq!(fit.solve(&queries, &ev).unwrap().len(), 17);

    let fit2 = KernelFit2D::new(x.clone(), y, x, 0.5).unwrap();
    let grid = fit2.solve(&queries[..5], &queries[..7], &ev).unwrap();
    assert_eq!((grid.nrows(), grid.ncols()), (5, 7));
}

#[test]
fn solve_rejects_empty_queries() {
    let ev = evaluator(1);
    let fit = KernelFit1D::new(vec![0.0, 1.0], vec![0.0, 1.0], 1.0).unwrap();
    assert_invalid(fit.solve(&[], &ev), "KernelFit1D::solve");

    let fit2 = KernelFit2D::new(vec![0.0], vec![0.0], vec![1.0], 1.0).unwrap();
    assert_invalid(fit2.solve(&[], &[1.0], &ev), "KernelFit2D::solve");
    assert_invalid(fit2.solve(&[1.0], &[], &ev), "KernelFit2D::solve");
    assert_invalid(fit2.std_dev(&[], &[], &ev), "KernelFit2D::std_dev");
}

#[test]
fn isolated_sample_is_recovered_at_small_bandwidth() {
    let ev = evaluator(2);
    let x = vec![-2.0, 0.0, 1.5, 4.0];
    let y = vec![3.0, -1.25, 8.0, 0.5];
    let fit = KernelFit1D::new(x.clone(), y.clone(), 0.01).unwrap();

    let f = fit.solve(&x, &ev).unwrap();
    for (fi, yi) in f.iter().zip(&y) {
        assert_abs_diff_eq!(*fi, *yi, epsilon = 1e-12);
    }

    let fit2 = KernelFit2D::new(vec![0.0, 3.0], vec![0.0, -1.0], vec![2.0, 9.0], 0.01).unwrap();
    let g = fit2.solve(&[3.0], &[-1.0], &ev).unwrap();
    assert_abs_diff_eq!(g[(0, 0)], 9.0, epsilon = 1e-12);
}

#[test]
fn coincident_queries_survive_a_vanishing_bandwidth() {
    let ev = evaluator(2);
    let fit = KernelFit1D::new(vec![0.0, 1.0], vec![5.0, 7.0], 1e-170).unwrap();
    assert_eq!(fit.solve(&[0.0, 1.0], &ev).unwrap(), vec![5.0, 7.0]);

    let fit2 = KernelFit2D::new(vec![0.0, 3.0], vec![0.0, -1.0], vec![2.0, 9.0], 1e-170).unwrap();
    let g = fit2.solve(&[3.0], &[-1.0], &ev).unwrap();
    assert_eq!(g[(0, 0)], 9.0);
}

#[test]
fn v_shape_centre_is_near_zero() {
    let fit = KernelFit1D::new(vec![-1.0, 0.0, 1.0], vec![1.0, 0.0, 1.0], 0.1).unwrap();
    let f = fit.solve(&[0.0], &evaluator(1)).unwrap();
    assert_abs_diff_eq!(f[0], 0.0, epsilon = 1e-12);
}

#[test]
fn query_beyond_every_sample_is_nan() {
    let ev = evaluator(2);
    let fit = KernelFit1D::new(vec![0.0, 0.5, 1.0], vec![1.0, 2.0, 3.0], 0.05).unwrap();
    let f = fit.solve(&[0.5, 250.0, -250.0], &ev).unwrap();
    assert!(f[0].is_finite());
    assert!(f[1].is_nan());
    assert!(f[2].is_nan());

    let s = fit.std_dev(&[250.0], &ev).unwrap();
    assert!(s[0].is_nan());

    let fit2 = KernelFit2D::new(vec![0.0], vec![0.0], vec![1.0], 0.05).unwrap();
    let g = fit2.solve(&[0.0, 0.0], &[0.0, 300.0], &ev).unwrap();
    assert!(g[(0, 0)].is_finite());
    assert!(g[(1, 1)].is_nan());
}

#[test]
fn kernel_is_symmetric_and_radial() {
    for d in [0.0, 0.3, 1.0, 2.5, 7.0] {
        assert_eq!(gaussian(d, 1.3), gaussian(-d, 1.3));
    }

    // Samples on a circle of radius 2 around the query get equal weight.
    let n = 8;
    let x: Vec<f64> = (0..n).map(|k| 2.0 * (k as f64 * std::f64::consts::TAU / n as f64).cos()).collect();
    let y: Vec<f64> = (0..n).map(|k| 2.0 * (k as f64 * std::f64::consts::TAU / n as f64).sin()).collect();
    let z: Vec<f64> = (0..n).map(|k| k as f64).collect();
    let fit = KernelFit2D::new(x, y, z, 0.7).unwrap();
    let g = fit.solve(&[0.0], &[0.0], &evaluator(1)).unwrap();
    assert_relative_eq!(g[(0, 0)], 3.5, max_relative = 1e-9);
}

// ============================================================================
// Bandwidth
// ============================================================================

#[test]
fn dispersion_scenario() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let mut fit = KernelFit1D::new(x.clone(), x, 0.5).unwrap();
    assert_relative_eq!(fit.dispersion(), 1.0);
    assert_eq!(fit.bandwidth(), 0.5);

    fit.set_bandwidth(2.0).unwrap();
    assert_relative_eq!(fit.bandwidth(), 2.0);
}

#[test]
fn set_bandwidth_validates_multiple() {
    let mut fit = KernelFit2D::new(vec![0.0, 1.0], vec![0.0, 0.0], vec![1.0, 1.0], 0.5).unwrap();
    assert_invalid(fit.set_bandwidth(0.0), "KernelFit2D::set_bandwidth");
    assert_invalid(fit.set_bandwidth(f64::NAN), "KernelFit2D::set_bandwidth");
    assert_eq!(fit.bandwidth(), 0.5);
}

#[test]
fn dispersion_default_bandwidth() {
    let fit = KernelFit1D::with_dispersion_bandwidth(vec![0.0, 0.5, 1.0, 1.5], vec![0.0; 4]).unwrap();
    assert_relative_eq!(fit.bandwidth(), 0.5);

    assert_invalid(
        KernelFit2D::with_dispersion_bandwidth(vec![1.0], vec![1.0], vec![1.0]),
        "KernelFit2D::with_dispersion_bandwidth",
    );
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn repeated_solves_are_identical() {
    let ev = evaluator(3);
    let x: Vec<f64> = (0..200).map(|i| (i as f64 * 0.05) - 5.0).collect();
    let y: Vec<f64> = x.iter().map(|v| (v * 1.7).cos() + 0.1 * v).collect();
    let fit = KernelFit1D::new(x, y, 0.2).unwrap();
    let queries: Vec<f64> = (0..97).map(|i| i as f64 * 0.1 - 4.8).collect();

    let a = fit.solve(&queries, &ev).unwrap();
    let b = fit.solve(&queries, &ev).unwrap();
    assert_eq!(a, b);
}

#[test]
fn thread_count_does_not_change_results() {
    let x: Vec<f64> = (0..120).map(|i| i as f64 * 0.1).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sqrt()).collect();
    let z: Vec<f64> = x.iter().zip(&y).map(|(a, b)| a - b).collect();
    let fit = KernelFit2D::new(x.clone(), y, z, 0.4).unwrap();
    let qx: Vec<f64> = (0..23).map(|i| i as f64 * 0.5).collect();
    let qy: Vec<f64> = (0..11).map(|i| i as f64 * 0.3).collect();

    let one = fit.solve(&qx, &qy, &evaluator(1)).unwrap();
    let many = fit.solve(&qx, &qy, &evaluator(6)).unwrap();
    assert_eq!(one, many);

    let fit1 = KernelFit1D::new(x.clone(), x, 0.25).unwrap();
    assert_eq!(
        fit1.std_dev(&qx, &evaluator(1)).unwrap(),
        fit1.std_dev(&qx, &evaluator(5)).unwrap()
    );
}
