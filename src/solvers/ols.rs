//! Ordinary Least Squares solver for simple linear regression.

use crate::core::{FitOptions, FitOptionsBuilder, FitResult, IntervalType, PredictionResult};
use crate::diagnostics::compute_residuals;
use crate::inference::{compute_prediction_intervals, CoefficientInference};
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};

/// Ordinary Least Squares estimator for the line ŷ = slope·x + intercept.
///
/// Uses the closed-form solution: slope = Σ(xᵢ-x̄)(yᵢ-ȳ) / Σ(xᵢ-x̄)²,
/// intercept = ȳ - slope·x̄.
///
/// # Example
///
/// ```rust
/// use linefit::solvers::{FittedRegressor, OlsRegressor, Regressor};
///
/// let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
/// let y = vec![2.0, 5.0, 8.0, 11.0, 14.0];
///
/// let fitted = OlsRegressor::builder().build().fit(&x, &y)?;
///
/// assert!((fitted.slope() - 3.0).abs() < 1e-12);
/// assert!((fitted.intercept() - 2.0).abs() < 1e-12);
/// # Ok::<(), linefit::solvers::RegressionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct OlsRegressor {
    options: FitOptions,
}

impl OlsRegressor {
    /// Create a new OLS regressor with the given options.
    pub fn new(options: FitOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }
}

impl Regressor for OlsRegressor {
    type Fitted = FittedOls;

    fn fit(&self, x: &[f64], y: &[f64]) -> Result<Self::Fitted, RegressionError> {
        self.options.validate()?;

        if x.len() != y.len() {
            return Err(RegressionError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(RegressionError::EmptyInput);
        }

        let n = x.len();
        let mean_x = x.iter().sum::<f64>() / n as f64;
        let mean_y = y.iter().sum::<f64>() / n as f64;

        let mut sxy = 0.0;
        let mut sxx = 0.0;
        for i in 0..n {
            let dx = x[i] - mean_x;
            sxy += dx * (y[i] - mean_y);
            sxx += dx * dx;
        }

        // Exact comparison: identical x values produce an exact zero sum,
        // not an accumulation artifact. An epsilon check would mask
        // legitimate near-zero-variance fits.
        if sxx == 0.0 {
            return Err(RegressionError::DegenerateVariance);
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;

        let fitted_values: Vec<f64> = x.iter().map(|&xi| slope * xi + intercept).collect();
        let residuals = compute_residuals(x, y, slope, intercept);

        let result = self.compute_statistics(
            y,
            mean_x,
            mean_y,
            sxx,
            slope,
            intercept,
            residuals,
            fitted_values,
        );

        Ok(FittedOls {
            options: self.options.clone(),
            result,
            x_mean: mean_x,
            sxx,
        })
    }
}

impl OlsRegressor {
    /// Compute fit statistics and optionally inference statistics.
    #[allow(clippy::too_many_arguments)]
    fn compute_statistics(
        &self,
        y: &[f64],
        mean_x: f64,
        mean_y: f64,
        sxx: f64,
        slope: f64,
        intercept: f64,
        residuals: Vec<f64>,
        fitted_values: Vec<f64>,
    ) -> FitResult {
        let n = y.len();

        // RSS (residual sum of squares) and TSS (total sum of squares)
        let rss: f64 = residuals.iter().map(|&r| r.powi(2)).sum();
        let tss: f64 = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum();

        // R² is undefined for a constant response; report NaN rather than
        // coercing to 0 or 1.
        let r_squared = if tss > 0.0 { 1.0 - rss / tss } else { f64::NAN };

        let df_total = (n - 1) as f64;
        let df_resid = n as f64 - 2.0;

        let adj_r_squared = if df_resid > 0.0 && r_squared.is_finite() {
            1.0 - (1.0 - r_squared) * df_total / df_resid
        } else {
            f64::NAN
        };

        let mse = if df_resid > 0.0 {
            rss / df_resid
        } else {
            f64::NAN
        };
        let rmse = mse.sqrt();

        let mut result = FitResult::empty(n);
        result.slope = slope;
        result.intercept = intercept;
        result.residuals = residuals;
        result.fitted_values = fitted_values;
        result.n_observations = n;
        result.r_squared = r_squared;
        result.adj_r_squared = adj_r_squared;
        result.mse = mse;
        result.rmse = rmse;
        result.confidence_level = self.options.confidence_level;

        if self.options.compute_inference {
            self.compute_inference(mean_x, sxx, df_resid, &mut result);
        }

        result
    }

    /// Compute inference statistics (standard errors, t-stats, p-values, CIs).
    fn compute_inference(&self, mean_x: f64, sxx: f64, df: f64, result: &mut FitResult) {
        if df <= 0.0 || !result.mse.is_finite() {
            return;
        }

        let (se_slope, se_intercept) =
            CoefficientInference::standard_errors(result.n_observations, mean_x, sxx, result.mse);

        let t_slope = CoefficientInference::t_statistic(result.slope, se_slope);
        let t_intercept = CoefficientInference::t_statistic(result.intercept, se_intercept);

        let p_slope = CoefficientInference::p_value(t_slope, df);
        let p_intercept = CoefficientInference::p_value(t_intercept, df);

        let level = self.options.confidence_level;
        let ci_slope = CoefficientInference::confidence_interval(result.slope, se_slope, df, level);
        let ci_intercept =
            CoefficientInference::confidence_interval(result.intercept, se_intercept, df, level);

        result.slope_std_error = Some(se_slope);
        result.intercept_std_error = Some(se_intercept);
        result.slope_t_statistic = Some(t_slope);
        result.intercept_t_statistic = Some(t_intercept);
        result.slope_p_value = Some(p_slope);
        result.intercept_p_value = Some(p_intercept);
        result.slope_conf_interval = Some(ci_slope);
        result.intercept_conf_interval = Some(ci_intercept);
    }
}

/// A fitted simple linear regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    options: FitOptions,
    result: FitResult,
    /// Mean of the training x values, kept for interval estimation.
    x_mean: f64,
    /// Centered sum of squares of the training x values.
    sxx: f64,
}

impl FittedOls {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &FitOptions {
        &self.options
    }
}

impl FittedRegressor for FittedOls {
    fn predict(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .map(|&xi| self.result.slope * xi + self.result.intercept)
            .collect()
    }

    fn result(&self) -> &FitResult {
        &self.result
    }

    fn predict_with_interval(
        &self,
        x: &[f64],
        interval: Option<IntervalType>,
        level: f64,
    ) -> PredictionResult {
        let predictions = self.predict(x);

        match interval {
            None => PredictionResult::point_only(predictions),
            Some(interval_type) => {
                let df = self.result.residual_df() as f64;
                compute_prediction_intervals(
                    x,
                    predictions,
                    self.x_mean,
                    self.sxx,
                    self.result.mse,
                    df,
                    level,
                    interval_type,
                )
            }
        }
    }
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    builder: FitOptionsBuilder,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to compute inference statistics.
    pub fn compute_inference(mut self, compute: bool) -> Self {
        self.builder = self.builder.compute_inference(compute);
        self
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Build the OLS regressor.
    ///
    /// Option values are validated at fit time.
    pub fn build(self) -> OlsRegressor {
        OlsRegressor::new(self.builder.build_unchecked())
    }
}
