//! Residuals and coefficient of determination.

/// Compute per-point residuals for a fitted line: residualᵢ = yᵢ - (slope·xᵢ + intercept).
///
/// Length and order match the input. Assumes `x` and `y` have equal length
/// (validated by the caller); unequal lengths are a usage error.
pub fn compute_residuals(x: &[f64], y: &[f64], slope: f64, intercept: f64) -> Vec<f64> {
    debug_assert_eq!(x.len(), y.len());

    let mut residuals = Vec::with_capacity(x.len());
    for i in 0..x.len() {
        residuals.push(y[i] - (slope * x[i] + intercept));
    }
    residuals
}

/// Coefficient of determination: R² = 1 - SSR/SST.
///
/// SST is the total sum of squares of `y` around its mean and SSR the sum of
/// squared residuals. When SST is exactly zero (constant `y`) the statistic
/// is undefined and `NaN` is returned; it is deliberately not coerced to
/// 0 or 1. Empty input also yields `NaN`.
pub fn r_squared(y: &[f64], residuals: &[f64]) -> f64 {
    debug_assert_eq!(y.len(), residuals.len());

    if y.is_empty() {
        return f64::NAN;
    }

    let mean_y = y.iter().sum::<f64>() / y.len() as f64;
    let sst: f64 = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum();

    if sst == 0.0 {
        return f64::NAN;
    }

    let ssr: f64 = residuals.iter().map(|&r| r.powi(2)).sum();
    1.0 - ssr / sst
}

/// Compute standardized residuals: eᵢ / s
///
/// Where s is the residual standard error (sqrt of MSE). When MSE is zero,
/// non-positive, or non-finite, exact-zero residuals map to 0 and the rest
/// to NaN.
pub fn standardized_residuals(residuals: &[f64], mse: f64) -> Vec<f64> {
    if mse <= 0.0 || !mse.is_finite() {
        return residuals
            .iter()
            .map(|&r| if r.abs() < 1e-14 { 0.0 } else { f64::NAN })
            .collect();
    }

    let s = mse.sqrt();
    residuals.iter().map(|&r| r / s).collect()
}
