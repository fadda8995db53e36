//! Descriptive statistics for numeric sequences.
//!
//! All functions are pure and deterministic. Undefined statistics are
//! reported as [`DescriptiveError`] values so callers can degrade gracefully
//! (e.g. display a placeholder) instead of aborting.

use thiserror::Error;

/// Errors for statistics that are undefined on the given input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptiveError {
    #[error("input sequence is empty")]
    EmptyInput,

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("length mismatch: first sequence has {a_len} elements but second has {b_len}")]
    LengthMismatch { a_len: usize, b_len: usize },

    #[error("sequence has zero variance, correlation is undefined")]
    ZeroVariance,
}

/// Arithmetic mean of a sequence.
///
/// Fails with [`DescriptiveError::EmptyInput`] on an empty sequence.
pub fn mean(seq: &[f64]) -> Result<f64, DescriptiveError> {
    if seq.is_empty() {
        return Err(DescriptiveError::EmptyInput);
    }
    Ok(seq.iter().sum::<f64>() / seq.len() as f64)
}

/// Sample variance of a sequence (n - 1 divisor).
///
/// Fails with [`DescriptiveError::InsufficientObservations`] when the
/// sequence has fewer than 2 elements.
pub fn variance(seq: &[f64]) -> Result<f64, DescriptiveError> {
    let n = seq.len();
    if n < 2 {
        return Err(DescriptiveError::InsufficientObservations { needed: 2, got: n });
    }

    let m = seq.iter().sum::<f64>() / n as f64;
    let sum_sq: f64 = seq.iter().map(|&v| (v - m).powi(2)).sum();
    Ok(sum_sq / (n - 1) as f64)
}

/// Sample standard deviation: square root of [`variance`].
pub fn std_deviation(seq: &[f64]) -> Result<f64, DescriptiveError> {
    variance(seq).map(f64::sqrt)
}

/// Pearson product-moment correlation between two equal-length sequences.
///
/// Computed as sample covariance divided by the product of sample standard
/// deviations. Fails with [`DescriptiveError::LengthMismatch`] on unequal
/// lengths, [`DescriptiveError::InsufficientObservations`] below 2 elements,
/// and [`DescriptiveError::ZeroVariance`] when either sequence is constant.
pub fn correlation(a: &[f64], b: &[f64]) -> Result<f64, DescriptiveError> {
    if a.len() != b.len() {
        return Err(DescriptiveError::LengthMismatch {
            a_len: a.len(),
            b_len: b.len(),
        });
    }
    let n = a.len();
    if n < 2 {
        return Err(DescriptiveError::InsufficientObservations { needed: 2, got: n });
    }

    let mean_a = a.iter().sum::<f64>() / n as f64;
    let mean_b = b.iter().sum::<f64>() / n as f64;

    let mut covariance = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for i in 0..n {
        let da = a[i] - mean_a;
        let db = b[i] - mean_b;
        covariance += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    if var_a == 0.0 || var_b == 0.0 {
        return Err(DescriptiveError::ZeroVariance);
    }

    Ok(covariance / (var_a.sqrt() * var_b.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
        assert_eq!(mean(&[42.0]).unwrap(), 42.0);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), Err(DescriptiveError::EmptyInput));
    }

    #[test]
    fn test_sample_variance() {
        // Sample variance of [1..5] is 2.5, not the population value 2.0
        let v = variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((v - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_variance_insufficient() {
        assert_eq!(
            variance(&[1.0]),
            Err(DescriptiveError::InsufficientObservations { needed: 2, got: 1 })
        );
        assert_eq!(
            variance(&[]),
            Err(DescriptiveError::InsufficientObservations { needed: 2, got: 0 })
        );
    }

    #[test]
    fn test_std_deviation() {
        let s = std_deviation(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((s - 2.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_correlation_perfect() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 4.0, 6.0, 8.0];
        assert!((correlation(&a, &b).unwrap() - 1.0).abs() < 1e-12);

        let c = [8.0, 6.0, 4.0, 2.0];
        assert!((correlation(&a, &c).unwrap() + 1.0).abs() < 1e-12);
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
        assert_eq!(
            correlation(&[1.0, 2.0, 3.0], &[7.0, 7.0, 7.0]),
            Err(DescriptiveError::ZeroVariance)
        );
    }

    #[test]
    fn test_deterministic() {
        let a = [0.1, 0.7, 0.3, 0.9];
        let b = [1.3, 0.2, 0.8, 0.4];
        assert_eq!(
            correlation(&a, &b).unwrap().to_bits(),
            correlation(&a, &b).unwrap().to_bits()
        );
    }
}
