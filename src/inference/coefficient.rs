//! Coefficient inference calculations.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Computes inference statistics for simple-regression coefficients.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Compute standard errors for the slope and intercept.
    ///
    /// SE(slope) = sqrt(σ² / Sxx)
    /// SE(intercept) = sqrt(σ² * (1/n + x̄²/Sxx))
    ///
    /// Returns (slope_SE, intercept_SE).
    pub fn standard_errors(n: usize, x_mean: f64, sxx: f64, mse: f64) -> (f64, f64) {
        if sxx <= 0.0 || mse < 0.0 || !mse.is_finite() {
            return (f64::NAN, f64::NAN);
        }

        let se_slope = (mse / sxx).sqrt();
        let se_intercept = (mse * (1.0 / n as f64 + x_mean * x_mean / sxx)).sqrt();
        (se_slope, se_intercept)
    }

    /// Compute a t-statistic: t = estimate / SE(estimate).
    pub fn t_statistic(estimate: f64, std_error: f64) -> f64 {
        if std_error.is_nan() || std_error == 0.0 {
            f64::NAN
        } else {
            estimate / std_error
        }
    }

    /// Compute a two-tailed p-value from a t-statistic.
    ///
    /// p = 2 * P(|T| > |t|) where T ~ t(df)
    pub fn p_value(t_statistic: f64, df: f64) -> f64 {
        if df <= 0.0 || t_statistic.is_nan() {
            return f64::NAN;
        }

        let t_dist = StudentsT::new(0.0, 1.0, df).ok();
        t_dist.map_or(f64::NAN, |d| 2.0 * (1.0 - d.cdf(t_statistic.abs())))
    }

    /// Compute a confidence interval for a coefficient.
    ///
    /// CI = estimate ± t_{α/2, df} * SE(estimate)
    pub fn confidence_interval(
        estimate: f64,
        std_error: f64,
        df: f64,
        confidence_level: f64,
    ) -> (f64, f64) {
        if df <= 0.0 || std_error.is_nan() {
            return (f64::NAN, f64::NAN);
        }

        let t_dist = StudentsT::new(0.0, 1.0, df).ok();
        let alpha = 1.0 - confidence_level;
        let t_crit = t_dist.map_or(f64::NAN, |d| d.inverse_cdf(1.0 - alpha / 2.0));

        let margin = t_crit * std_error;
        (estimate - margin, estimate + margin)
    }
}
