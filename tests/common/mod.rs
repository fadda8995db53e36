//! Common test fixtures: Anscombe's quartet.

/// Shared x values for Anscombe sets I-III.
pub const ANSCOMBE_X: [f64; 11] = [10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0];

/// Anscombe set I: ordinary linear scatter.
pub const ANSCOMBE_Y1: [f64; 11] = [
    8.04, 6.95, 7.58, 8.81, 8.33, 9.96, 7.24, 4.26, 10.84, 4.82, 5.68,
];

/// Anscombe set II: curved (quadratic) relationship.
pub const ANSCOMBE_Y2: [f64; 11] = [
    9.14, 8.14, 8.74, 8.77, 9.26, 8.10, 6.13, 3.10, 9.13, 7.26, 4.74,
];

/// Anscombe set III: linear with a single vertical outlier.
pub const ANSCOMBE_Y3: [f64; 11] = [
    7.46, 6.77, 12.74, 7.11, 7.81, 8.84, 6.08, 5.39, 8.15, 6.42, 5.73,
];

/// Anscombe set IV x values: constant except one high-leverage point.
pub const ANSCOMBE_X4: [f64; 11] = [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 19.0, 8.0, 8.0, 8.0];

/// Anscombe set IV y values.
pub const ANSCOMBE_Y4: [f64; 11] = [
    6.58, 5.76, 7.71, 8.84, 8.47, 7.04, 5.25, 12.5, 5.56, 7.91, 6.89,
];

/// All four datasets as (x, y) pairs.
#[allow(dead_code)]
pub fn quartet() -> Vec<(Vec<f64>, Vec<f64>)> {
    vec![
        (ANSCOMBE_X.to_vec(), ANSCOMBE_Y1.to_vec()),
        (ANSCOMBE_X.to_vec(), ANSCOMBE_Y2.to_vec()),
        (ANSCOMBE_X.to_vec(), ANSCOMBE_Y3.to_vec()),
        (ANSCOMBE_X4.to_vec(), ANSCOMBE_Y4.to_vec()),
    ]
}
