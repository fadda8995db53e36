//! Prediction types for interval estimation.

/// Type of interval to compute for predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalType {
    /// Confidence interval for the mean response E[Y|X=x₀].
    /// Narrower - only accounts for uncertainty in coefficient estimates.
    Confidence,

    /// Prediction interval for a new observation Y|X=x₀.
    /// Wider - also accounts for residual variance (irreducible error).
    #[default]
    Prediction,
}

/// Result of prediction with optional intervals.
#[derive(Debug, Clone)]
pub struct PredictionResult {
    /// Point predictions (fitted values).
    pub fit: Vec<f64>,
    /// Lower bounds of the interval.
    pub lower: Vec<f64>,
    /// Upper bounds of the interval.
    pub upper: Vec<f64>,
    /// Standard errors of predictions.
    pub se: Vec<f64>,
}

impl PredictionResult {
    /// Create a new prediction result with only point predictions (no intervals).
    pub fn point_only(fit: Vec<f64>) -> Self {
        let n = fit.len();
        Self {
            fit,
            lower: vec![0.0; n],
            upper: vec![0.0; n],
            se: vec![0.0; n],
        }
    }

    /// Create a new prediction result with intervals.
    pub fn with_intervals(fit: Vec<f64>, lower: Vec<f64>, upper: Vec<f64>, se: Vec<f64>) -> Self {
        Self {
            fit,
            lower,
            upper,
            se,
        }
    }

    /// Number of predictions.
    pub fn len(&self) -> usize {
        self.fit.len()
    }

    /// Returns true if there are no predictions.
    pub fn is_empty(&self) -> bool {
        self.fit.is_empty()
    }
}
