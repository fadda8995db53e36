//! Descriptive statistics tests.

mod common;

use approx::assert_abs_diff_eq;
use linefit::descriptive::{correlation, mean, std_deviation, variance, DescriptiveError};

#[test]
fn test_mean_basic() {
    assert_abs_diff_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_mean_empty_fails() {
    assert_eq!(mean(&[]), Err(DescriptiveError::EmptyInput));
}

#[test]
fn test_sample_variance_uses_n_minus_one() {
    // Sample variance (n-1 divisor) of [1..5] is 2.5; the population value
    // would be 2.0
    assert_abs_diff_eq!(
        variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(),
        2.5,
        epsilon = 1e-12
    );
}

#[test]
fn test_variance_needs_two_observations() {
    assert_eq!(
        variance(&[3.0]),
        Err(DescriptiveError::InsufficientObservations { needed: 2, got: 1 })
    );
}

#[test]
fn test_std_deviation_is_sqrt_of_variance() {
    let seq = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let v = variance(&seq).unwrap();
    let s = std_deviation(&seq).unwrap();
    assert_abs_diff_eq!(s, v.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_correlation_perfect_positive_and_negative() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0];
    let b: Vec<f64> = a.iter().map(|v| 3.0 * v - 1.0).collect();
    let c: Vec<f64> = a.iter().map(|v| -2.0 * v + 10.0).collect();

    assert_abs_diff_eq!(correlation(&a, &b).unwrap(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(correlation(&a, &c).unwrap(), -1.0, epsilon = 1e-12);
}

#[test]
fn test_correlation_length_mismatch() {
    assert_eq!(
        correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(DescriptiveError::LengthMismatch { a_len: 3, b_len: 2 })
    );
}

#[test]
fn test_correlation_zero_variance() {
    assert_eq!(
        correlation(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]),
        Err(DescriptiveError::ZeroVariance)
    );
}

// ============================================================================
// Anscombe fixtures: the quartet shares its descriptive statistics
// ============================================================================

#[test]
fn test_anscombe_x_statistics() {
    assert_abs_diff_eq!(mean(&common::ANSCOMBE_X).unwrap(), 9.0, epsilon = 1e-12);
    assert_abs_diff_eq!(variance(&common::ANSCOMBE_X).unwrap(), 11.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        std_deviation(&common::ANSCOMBE_X).unwrap(),
        11.0_f64.sqrt(),
        epsilon = 1e-12
    );
}

#[test]
fn test_anscombe_shared_y_statistics() {
    for (_, y) in common::quartet() {
        assert_abs_diff_eq!(mean(&y).unwrap(), 7.50, epsilon = 0.01);
        assert_abs_diff_eq!(variance(&y).unwrap(), 4.12, epsilon = 0.01);
    }
}

#[test]
fn test_anscombe_shared_correlation() {
    for (x, y) in common::quartet() {
        assert_abs_diff_eq!(correlation(&x, &y).unwrap(), 0.816, epsilon = 0.01);
    }
}
