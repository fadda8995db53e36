//! Core types for simple regression.

mod options;
mod prediction;
mod result;

pub use options::{FitOptions, FitOptionsBuilder, OptionsError};
pub use prediction::{IntervalType, PredictionResult};
pub use result::FitResult;
