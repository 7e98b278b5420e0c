//! Least-squares fit primitives
//!
//! Closed-form ordinary least squares for a line and a degree-2 curve over
//! `(x, y)` point pairs. Inputs are expected to use normalized x-values
//! (year offsets from an origin) so coefficient magnitudes stay well
//! conditioned.

use predictor_spi::{PredictError, Result};
use serde::{Deserialize, Serialize};

/// A fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Trend per x unit
    pub slope: f64,
    /// Value at x = 0
    pub intercept: f64,
    /// Coefficient of determination of the fit
    pub r_squared: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    pub fn predict_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Render the fitted equation.
    pub fn equation(&self) -> String {
        format!("y = {:.4}x + {:.2}", self.slope, self.intercept)
    }
}

/// A fitted curve `y = c0 + c1*x + c2*x^2`, coefficients in ascending powers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticFit {
    /// `[c0, c1, c2]` for `y = c0 + c1*x + c2*x^2`
    pub coefficients: [f64; 3],
    /// Coefficient of determination of the fit
    pub r_squared: f64,
}

impl QuadraticFit {
    /// Evaluate the fitted curve at `x`.
    pub fn predict_at(&self, x: f64) -> f64 {
        let [c0, c1, c2] = self.coefficients;
        c0 + c1 * x + c2 * x * x
    }

    /// Render the fitted equation.
    pub fn equation(&self) -> String {
        let [c0, c1, c2] = self.coefficients;
        format!("y = {:.6}x^2 + {:.4}x + {:.2}", c2, c1, c0)
    }
}

/// Fit a line by ordinary least squares.
///
/// Fails with [`PredictError::DegenerateFit`] for fewer than 2 points or
/// when every x-value is identical.
pub fn fit_linear(points: &[(f64, f64)]) -> Result<LinearFit> {
    if points.len() < 2 {
        return Err(PredictError::DegenerateFit {
            required: 2,
            actual: points.len(),
        });
    }

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.0).sum();
    let sum_y: f64 = points.iter().map(|p| p.1).sum();
    let sum_xx: f64 = points.iter().map(|p| p.0 * p.0).sum();
    let sum_xy: f64 = points.iter().map(|p| p.0 * p.1).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator.abs() < 1e-10 {
        return Err(PredictError::DegenerateFit {
            required: 2,
            actual: distinct_x(points),
        });
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let predicted: Vec<f64> = points.iter().map(|p| intercept + slope * p.0).collect();
    let actual: Vec<f64> = points.iter().map(|p| p.1).collect();

    Ok(LinearFit {
        slope,
        intercept,
        r_squared: r_squared(&actual, &predicted),
    })
}

/// Fit a degree-2 curve by least squares on the normal equations.
///
/// The 3x3 system is solved by Gaussian elimination with partial pivoting.
/// Fails with [`PredictError::DegenerateFit`] for fewer than 3 distinct
/// x-values.
pub fn fit_quadratic(points: &[(f64, f64)]) -> Result<QuadraticFit> {
    let distinct = distinct_x(points);
    if points.len() < 3 || distinct < 3 {
        return Err(PredictError::DegenerateFit {
            required: 3,
            actual: distinct.min(points.len()),
        });
    }

    let n = points.len() as f64;
    let mut s = [0.0f64; 5]; // sums of x^0 .. x^4
    let mut t = [0.0f64; 3]; // sums of y, xy, x^2 y
    s[0] = n;
    for &(x, y) in points {
        let x2 = x * x;
        s[1] += x;
        s[2] += x2;
        s[3] += x2 * x;
        s[4] += x2 * x2;
        t[0] += y;
        t[1] += x * y;
        t[2] += x2 * y;
    }

    // Augmented normal-equation matrix.
    let mut m = [
        [s[0], s[1], s[2], t[0]],
        [s[1], s[2], s[3], t[1]],
        [s[2], s[3], s[4], t[2]],
    ];

    // Forward elimination with partial pivoting.
    for col in 0..3 {
        let mut pivot = col;
        for row in (col + 1)..3 {
            if m[row][col].abs() > m[pivot][col].abs() {
                pivot = row;
            }
        }
        if m[pivot][col].abs() < 1e-10 {
            return Err(PredictError::DegenerateFit {
                required: 3,
                actual: distinct,
            });
        }
        m.swap(col, pivot);
        for row in (col + 1)..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..4 {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    // Back substitution.
    let c2 = m[2][3] / m[2][2];
    let c1 = (m[1][3] - m[1][2] * c2) / m[1][1];
    let c0 = (m[0][3] - m[0][1] * c1 - m[0][2] * c2) / m[0][0];

    let predicted: Vec<f64> = points
        .iter()
        .map(|p| c0 + c1 * p.0 + c2 * p.0 * p.0)
        .collect();
    let actual: Vec<f64> = points.iter().map(|p| p.1).collect();

    Ok(QuadraticFit {
        coefficients: [c0, c1, c2],
        r_squared: r_squared(&actual, &predicted),
    })
}

/// Coefficient of determination `1 - SS_res / SS_tot`.
///
/// Defined as 0 when the actual series is constant (`SS_tot == 0`) to avoid
/// division by zero.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let mean = actual.iter().sum::<f64>() / actual.len() as f64;
    let ss_tot: f64 = actual.iter().map(|y| (y - mean).powi(2)).sum();
    if ss_tot < 1e-10 {
        return 0.0;
    }

    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(y, p)| (y - p).powi(2))
        .sum();

    1.0 - ss_res / ss_tot
}

fn distinct_x(points: &[(f64, f64)]) -> usize {
    let mut xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    xs.dedup();
    xs.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_linear_exact_line() {
        let points: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 10.0 + 2.0 * i as f64)).collect();
        let fit = fit_linear(&points).unwrap();

        assert!((fit.slope - 2.0).abs() < 1e-10);
        assert!((fit.intercept - 10.0).abs() < 1e-10);
        assert!((fit.r_squared - 1.0).abs() < 1e-10);
        assert!((fit.predict_at(12.0) - 34.0).abs() < 1e-10);
    }

    #[test]
    fn test_fit_linear_insufficient_points() {
        let err = fit_linear(&[(0.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            PredictError::DegenerateFit {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_fit_linear_zero_x_variance() {
        let points = vec![(3.0, 1.0), (3.0, 2.0), (3.0, 3.0)];
        let err = fit_linear(&points).unwrap_err();
        assert!(matches!(err, PredictError::DegenerateFit { .. }));
    }

    #[test]
    fn test_fit_quadratic_exact_parabola() {
        // y = 2 + 0.5x + 0.25x^2
        let points: Vec<(f64, f64)> = (0..12)
            .map(|i| {
                let x = i as f64;
                (x, 2.0 + 0.5 * x + 0.25 * x * x)
            })
            .collect();
        let fit = fit_quadratic(&points).unwrap();

        assert!((fit.coefficients[0] - 2.0).abs() < 1e-8);
        assert!((fit.coefficients[1] - 0.5).abs() < 1e-8);
        assert!((fit.coefficients[2] - 0.25).abs() < 1e-8);
        assert!((fit.r_squared - 1.0).abs() < 1e-10);
        assert!((fit.predict_at(20.0) - 112.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_quadratic_requires_three_distinct_x() {
        let points = vec![(1.0, 2.0), (1.0, 3.0), (2.0, 4.0)];
        let err = fit_quadratic(&points).unwrap_err();
        assert_eq!(
            err,
            PredictError::DegenerateFit {
                required: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_r_squared_perfect_fit() {
        let actual = vec![1.0, 2.0, 3.0, 4.0];
        assert!((r_squared(&actual, &actual) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_r_squared_constant_series_is_zero() {
        let actual = vec![26.0, 26.0, 26.0];
        let predicted = vec![26.0, 26.0, 26.0];
        assert_eq!(r_squared(&actual, &predicted), 0.0);
    }

    #[test]
    fn test_r_squared_length_mismatch_is_nan() {
        assert!(r_squared(&[1.0, 2.0], &[1.0]).is_nan());
    }

    #[test]
    fn test_equation_rendering() {
        let fit = LinearFit {
            slope: 0.0203,
            intercept: 26.41,
            r_squared: 0.9,
        };
        assert_eq!(fit.equation(), "y = 0.0203x + 26.41");
    }
}
