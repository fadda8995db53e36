//! # Anscombe's Quartet
//!
//! Four datasets with nearly identical descriptive statistics and OLS fits
//! but very different shapes. Prints summary statistics, the fitted line,
//! the time taken for each fit, residuals, and R² for every dataset.
//!
//! Run with: `cargo run --example anscombe`

use linefit::descriptive::{correlation, mean, std_deviation, variance};
use linefit::solvers::{FittedRegressor, OlsRegressor, Regressor};
use std::time::Instant;

fn datasets() -> Vec<(Vec<f64>, Vec<f64>)> {
    let x = vec![10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0];
    let x4 = vec![8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 19.0, 8.0, 8.0, 8.0];

    vec![
        (
            x.clone(),
            vec![8.04, 6.95, 7.58, 8.81, 8.33, 9.96, 7.24, 4.26, 10.84, 4.82, 5.68],
        ),
        (
            x.clone(),
            vec![9.14, 8.14, 8.74, 8.77, 9.26, 8.10, 6.13, 3.10, 9.13, 7.26, 4.74],
        ),
        (
            x,
            vec![7.46, 6.77, 12.74, 7.11, 7.81, 8.84, 6.08, 5.39, 8.15, 6.42, 5.73],
        ),
        (
            x4,
            vec![6.58, 5.76, 7.71, 8.84, 8.47, 7.04, 5.25, 12.5, 5.56, 7.91, 6.89],
        ),
    ]
}

fn main() {
    for (i, (x, y)) in datasets().iter().enumerate() {
        println!("Dataset {} Descriptive Statistics:", i + 1);
        print_descriptive_stats(x, y);

        let start = Instant::now();
        let fitted = match OlsRegressor::builder().build().fit(x, y) {
            Ok(fitted) => fitted,
            Err(err) => {
                println!("Error in calculating regression for Set {}: {err}\n", i + 1);
                continue;
            }
        };
        let elapsed = start.elapsed();

        let result = fitted.result();
        println!(
            "Set {}: Slope: {:.2}, Intercept: {:.2}, Time taken: {:?}",
            i + 1,
            result.slope,
            result.intercept,
            elapsed
        );
        println!("Set {}: Residuals: {:?}", i + 1, result.residuals);
        println!("Set {}: R-squared: {:.2}\n", i + 1, result.r_squared);
    }
}

/// Print means, variances, standard deviations, and correlation.
///
/// Undefined statistics render as NaN rather than aborting the report.
fn print_descriptive_stats(x: &[f64], y: &[f64]) {
    let mean_x = mean(x).unwrap_or(f64::NAN);
    let mean_y = mean(y).unwrap_or(f64::NAN);
    let var_x = variance(x).unwrap_or(f64::NAN);
    let var_y = variance(y).unwrap_or(f64::NAN);
    let std_dev_x = std_deviation(x).unwrap_or(f64::NAN);
    let std_dev_y = std_deviation(y).unwrap_or(f64::NAN);
    let corr = correlation(x, y).unwrap_or(f64::NAN);

    println!("Mean of x: {mean_x:.2}, Mean of y: {mean_y:.2}");
    println!("Variance of x: {var_x:.2}, Variance of y: {var_y:.2}");
    println!("Standard Deviation of x: {std_dev_x:.2}, Standard Deviation of y: {std_dev_y:.2}");
    println!("Correlation between x and y: {corr:.2}\n");
}
