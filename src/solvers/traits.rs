//! Core traits for regression estimators.

use crate::core::{FitResult, IntervalType, PredictionResult};
use thiserror::Error;

/// Errors that can occur during regression fitting.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("length mismatch: x has {x_len} elements but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("input sequences are empty")]
    EmptyInput,

    #[error("all x values are identical, slope is undefined")]
    DegenerateVariance,

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] crate::core::OptionsError),
}

/// A regression estimator that can be fit to paired observations.
///
/// This trait follows the sklearn pattern where fitting returns a fitted model
/// that can then make predictions.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Predictor values
    /// * `y` - Response values, same length as `x`
    ///
    /// # Returns
    /// A fitted model that can make predictions.
    fn fit(&self, x: &[f64], y: &[f64]) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model that can make predictions.
pub trait FittedRegressor {
    /// Predict responses for new predictor values.
    fn predict(&self, x: &[f64]) -> Vec<f64>;

    /// Access the fit results (coefficients, residuals, statistics).
    fn result(&self) -> &FitResult;

    /// Get the slope (convenience method).
    fn slope(&self) -> f64 {
        self.result().slope
    }

    /// Get the intercept (convenience method).
    fn intercept(&self) -> f64 {
        self.result().intercept
    }

    /// Get R² (convenience method).
    fn r_squared(&self) -> f64 {
        self.result().r_squared
    }

    /// Calculate the score (R²) on new data.
    ///
    /// Returns `NaN` when `y` is constant, matching
    /// [`crate::diagnostics::r_squared`].
    fn score(&self, x: &[f64], y: &[f64]) -> f64 {
        let predictions = self.predict(x);
        let residuals: Vec<f64> = y
            .iter()
            .zip(predictions.iter())
            .map(|(&yi, &pi)| yi - pi)
            .collect();
        crate::diagnostics::r_squared(y, &residuals)
    }

    /// Make predictions with confidence or prediction intervals.
    ///
    /// This method follows R's `predict(..., interval = "confidence" | "prediction")` API.
    ///
    /// # Arguments
    /// * `x` - Predictor values
    /// * `interval` - `None` for point predictions only,
    ///   `Some(IntervalType::Confidence)` for confidence intervals on the mean response,
    ///   `Some(IntervalType::Prediction)` for prediction intervals on new observations
    /// * `level` - Confidence level (e.g., 0.95 for 95% intervals)
    fn predict_with_interval(
        &self,
        x: &[f64],
        interval: Option<IntervalType>,
        level: f64,
    ) -> PredictionResult;
}
