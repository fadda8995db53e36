//! Descriptive statistics and simple linear regression.
//!
//! This library computes summary statistics (mean, sample variance, standard
//! deviation, Pearson correlation) and ordinary least-squares fits over paired
//! numeric sequences, with residual diagnostics, R², and optional statistical
//! inference (standard errors, t-statistics, p-values, confidence intervals).
//!
//! # Example
//!
//! ```rust
//! use linefit::prelude::*;
//!
//! let x = vec![10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0];
//! let y = vec![8.04, 6.95, 7.58, 8.81, 8.33, 9.96, 7.24, 4.26, 10.84, 4.82, 5.68];
//!
//! let fitted = OlsRegressor::builder()
//!     .confidence_level(0.95)
//!     .build()
//!     .fit(&x, &y)?;
//!
//! let result = fitted.result();
//! println!("slope = {:.3}, intercept = {:.3}", result.slope, result.intercept);
//! println!("R² = {:.3}", result.r_squared);
//! # Ok::<(), linefit::solvers::RegressionError>(())
//! ```

pub mod core;
pub mod descriptive;
pub mod diagnostics;
pub mod inference;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        FitOptions, FitOptionsBuilder, FitResult, IntervalType, PredictionResult,
    };
    pub use crate::descriptive::{correlation, mean, std_deviation, variance, DescriptiveError};
    pub use crate::diagnostics::{compute_residuals, r_squared, standardized_residuals};
    pub use crate::solvers::{FittedOls, FittedRegressor, OlsRegressor, RegressionError, Regressor};
}

pub use crate::core::{FitOptions, FitOptionsBuilder, FitResult, IntervalType, PredictionResult};
pub use crate::solvers::{FittedOls, FittedRegressor, OlsRegressor, RegressionError, Regressor};
