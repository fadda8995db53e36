//! Prediction interval calculations.

use crate::core::{IntervalType, PredictionResult};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Compute confidence or prediction intervals around point predictions.
///
/// For a simple regression fitted on training data with mean x̄ and centered
/// sum of squares Sxx:
///
/// - Confidence (mean response): SE² = σ²·(1/n + (x₀-x̄)²/Sxx)
/// - Prediction (new observation): SE² = σ²·(1 + 1/n + (x₀-x̄)²/Sxx)
///
/// Bounds are fit ± t_{α/2, df}·SE. When the residual degrees of freedom or
/// MSE are unusable, bounds and standard errors are NaN.
#[allow(clippy::too_many_arguments)]
pub fn compute_prediction_intervals(
    x: &[f64],
    fit: Vec<f64>,
    x_mean: f64,
    sxx: f64,
    mse: f64,
    df: f64,
    level: f64,
    interval: IntervalType,
) -> PredictionResult {
    let n_new = x.len();

    if df <= 0.0 || !mse.is_finite() || mse < 0.0 || sxx <= 0.0 {
        let nan = vec![f64::NAN; n_new];
        return PredictionResult::with_intervals(fit, nan.clone(), nan.clone(), nan);
    }

    let t_dist = StudentsT::new(0.0, 1.0, df).ok();
    let alpha = 1.0 - level;
    let t_crit = t_dist.map_or(f64::NAN, |d| d.inverse_cdf(1.0 - alpha / 2.0));

    // n of the training sample, recovered from df = n - 2
    let n_train = df + 2.0;
    let extra = match interval {
        IntervalType::Confidence => 0.0,
        IntervalType::Prediction => 1.0,
    };

    let mut lower = Vec::with_capacity(n_new);
    let mut upper = Vec::with_capacity(n_new);
    let mut se = Vec::with_capacity(n_new);

    for (i, &x0) in x.iter().enumerate() {
        let dx = x0 - x_mean;
        let se_i = (mse * (extra + 1.0 / n_train + dx * dx / sxx)).sqrt();
        let margin = t_crit * se_i;
        lower.push(fit[i] - margin);
        upper.push(fit[i] + margin);
        se.push(se_i);
    }

    PredictionResult::with_intervals(fit, lower, upper, se)
}
