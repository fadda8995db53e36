//! Fit result structures.

use std::fmt;

/// Complete result from a simple linear regression fit.
///
/// Contains the fitted line, residuals, fit statistics, and optionally
/// inference statistics (standard errors, t-statistics, p-values,
/// confidence intervals).
#[derive(Debug, Clone)]
pub struct FitResult {
    // ========== Core Results ==========
    /// Estimated slope of the line ŷ = slope·x + intercept.
    pub slope: f64,

    /// Estimated intercept.
    pub intercept: f64,

    /// Residuals (y - fitted_values), same length and order as the input.
    pub residuals: Vec<f64>,

    /// Fitted values (predictions on training data).
    pub fitted_values: Vec<f64>,

    /// Number of observations.
    pub n_observations: usize,

    // ========== Fit Statistics ==========
    /// Coefficient of determination (R²).
    ///
    /// `NaN` when the response is constant (zero total sum of squares):
    /// R² is undefined in that case and is deliberately not coerced to 0 or 1.
    pub r_squared: f64,

    /// Adjusted R². `NaN` when residual degrees of freedom are zero.
    pub adj_r_squared: f64,

    /// Mean squared error (RSS / (n - 2)). `NaN` when n <= 2.
    pub mse: f64,

    /// Root mean squared error (residual standard error).
    pub rmse: f64,

    // ========== Inference Statistics (Optional) ==========
    /// Standard error of the slope.
    pub slope_std_error: Option<f64>,

    /// Standard error of the intercept.
    pub intercept_std_error: Option<f64>,

    /// t-statistic for the slope.
    pub slope_t_statistic: Option<f64>,

    /// t-statistic for the intercept.
    pub intercept_t_statistic: Option<f64>,

    /// Two-tailed p-value for the slope.
    pub slope_p_value: Option<f64>,

    /// Two-tailed p-value for the intercept.
    pub intercept_p_value: Option<f64>,

    /// Slope confidence interval (lower, upper).
    pub slope_conf_interval: Option<(f64, f64)>,

    /// Intercept confidence interval (lower, upper).
    pub intercept_conf_interval: Option<(f64, f64)>,

    /// Confidence level used for intervals.
    pub confidence_level: f64,
}

impl FitResult {
    /// Create a new empty result (used internally by solvers).
    pub(crate) fn empty(n_observations: usize) -> Self {
        Self {
            slope: 0.0,
            intercept: 0.0,
            residuals: vec![0.0; n_observations],
            fitted_values: vec![0.0; n_observations],
            n_observations,
            r_squared: f64::NAN,
            adj_r_squared: f64::NAN,
            mse: f64::NAN,
            rmse: f64::NAN,
            slope_std_error: None,
            intercept_std_error: None,
            slope_t_statistic: None,
            intercept_t_statistic: None,
            slope_p_value: None,
            intercept_p_value: None,
            slope_conf_interval: None,
            intercept_conf_interval: None,
            confidence_level: 0.95,
        }
    }

    /// Residual degrees of freedom (n - 2).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(2)
    }

    /// Residual sum of squares (RSS).
    pub fn rss(&self) -> f64 {
        self.residuals.iter().map(|&r| r.powi(2)).sum()
    }

    /// Total sum of squares (TSS), reconstructed from fitted values and residuals.
    pub fn tss(&self) -> f64 {
        let n = self.n_observations as f64;
        let y_mean = self.fitted_values.iter().sum::<f64>() / n
            + self.residuals.iter().sum::<f64>() / n;

        self.residuals
            .iter()
            .zip(self.fitted_values.iter())
            .map(|(&r, &f)| {
                let y = f + r;
                (y - y_mean).powi(2)
            })
            .sum()
    }

    /// Explained sum of squares (ESS = TSS - RSS).
    pub fn ess(&self) -> f64 {
        self.tss() - self.rss()
    }

    /// Check if the result describes a finite fitted line.
    pub fn is_valid(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite() && self.n_observations > 0
    }
}

impl fmt::Display for FitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Linear fit: y = {:.2}*x + {:.2}",
            self.slope, self.intercept
        )?;
        writeln!(f, "  Observations:       {}", self.n_observations)?;
        writeln!(f, "  R-squared:          {:.2}", self.r_squared)?;
        writeln!(f, "  Adjusted R-squared: {:.2}", self.adj_r_squared)?;
        write!(
            f,
            "  Residual SE:        {:.2} on {} degrees of freedom",
            self.rmse,
            self.residual_df()
        )?;
        if let (Some(se_slope), Some(se_int)) = (self.slope_std_error, self.intercept_std_error) {
            write!(
                f,
                "\n  Std. errors:        slope {:.2}, intercept {:.2}",
                se_slope, se_int
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = FitResult::empty(10);
        assert_eq!(result.residuals.len(), 10);
        assert_eq!(result.n_observations, 10);
        assert_eq!(result.residual_df(), 8);
        assert!(result.r_squared.is_nan());
    }

    #[test]
    fn test_residual_df_saturates() {
        let result = FitResult::empty(1);
        assert_eq!(result.residual_df(), 0);
    }

    #[test]
    fn test_tss_rss_ess() {
        let mut result = FitResult::empty(5);

        // y = [1, 2, 3, 4, 5], fitted = [1.1, 2.0, 2.9, 4.0, 5.1]
        result.fitted_values = vec![1.1, 2.0, 2.9, 4.0, 5.1];
        result.residuals = vec![-0.1, 0.0, 0.1, 0.0, -0.1];

        let rss = result.rss();
        let tss = result.tss();
        let ess = result.ess();

        // RSS = 0.01 + 0 + 0.01 + 0 + 0.01 = 0.03
        assert!((rss - 0.03).abs() < 1e-10);

        // TSS for y = [1..5] is 10
        assert!((tss - 10.0).abs() < 1e-9);

        // ESS = TSS - RSS
        assert!((ess - (tss - rss)).abs() < 1e-10);
    }

    #[test]
    fn test_is_valid() {
        let mut result = FitResult::empty(5);
        result.slope = 0.5;
        result.intercept = 3.0;
        assert!(result.is_valid());

        result.slope = f64::NAN;
        assert!(!result.is_valid());
    }

    #[test]
    fn test_display_contains_line() {
        let mut result = FitResult::empty(11);
        result.slope = 0.5;
        result.intercept = 3.0;
        let rendered = format!("{result}");
        assert!(rendered.contains("y = 0.50*x + 3.00"));
    }
}
