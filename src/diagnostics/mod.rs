//! Fit diagnostics: residuals and goodness of fit.
//!
//! # Example
//!
//! ```rust
//! use linefit::diagnostics::{compute_residuals, r_squared};
//!
//! let x = [0.0, 1.0, 2.0];
//! let y = [1.1, 2.9, 5.0];
//!
//! let residuals = compute_residuals(&x, &y, 2.0, 1.0);
//! let r2 = r_squared(&y, &residuals);
//! assert!(r2 > 0.99);
//! ```

mod residuals;

pub use residuals::{compute_residuals, r_squared, standardized_residuals};
