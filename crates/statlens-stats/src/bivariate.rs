//! Two-variable statistics: Pearson correlation and least-squares regression.
//!
//! Degenerate inputs (mismatched lengths, empty data, zero variance) resolve to
//! neutral values instead of `NaN` or infinities.

use serde::Serialize;

use crate::descriptive::{mean, min_max, sum};

/// Pearson correlation coefficient of paired samples.
///
/// Returns `0.0` when the slices differ in length, are empty, or when either
/// variable has zero variance.
///
/// # Examples
///
/// ```
/// use statlens_stats::bivariate::correlation;
///
/// let r = correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
/// assert!((r - 1.0).abs() < 1e-12);
///
/// assert_eq!(correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), 0.0);
/// assert_eq!(correlation(&[1.0, 2.0], &[1.0]), 0.0);
/// ```
#[must_use]
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut numerator = 0.0;
    let mut denom_x = 0.0;
    let mut denom_y = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator += dx * dy;
        denom_x += dx * dx;
        denom_y += dy * dy;
    }

    if denom_x == 0.0 || denom_y == 0.0 {
        tracing::debug!("correlation undefined for zero-variance input, using 0");
        return 0.0;
    }
    numerator / (denom_x * denom_y).sqrt()
}

/// Line of best fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

impl Regression {
    /// Evaluates the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least-squares fit of `y` against `x` via the normal equations.
///
/// Returns a zero line when the slices differ in length or are empty. When
/// every `x` is identical the slope is undefined; the fit then degrades to
/// the horizontal line through the mean of `y`.
///
/// # Examples
///
/// ```
/// use statlens_stats::bivariate::linear_regression;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = x.map(|x| 3.0 * x + 2.0);
/// let fit = linear_regression(&x, &y);
/// assert!((fit.slope - 3.0).abs() < 1e-9);
/// assert!((fit.intercept - 2.0).abs() < 1e-9);
/// ```
#[expect(clippy::cast_precision_loss, clippy::float_cmp)]
#[must_use]
pub fn linear_regression(x: &[f64], y: &[f64]) -> Regression {
    if x.len() != y.len() || x.is_empty() {
        return Regression::default();
    }

    let n = x.len() as f64;
    let sum_x = sum(x);
    let sum_y = sum(y);
    let sum_xy = x.iter().zip(y).map(|(xi, yi)| xi * yi).sum::<f64>();
    let sum_xx = x.iter().map(|xi| xi * xi).sum::<f64>();

    let denominator = n * sum_xx - sum_x * sum_x;
    // Rounding can leave a tiny nonzero denominator for constant x.
    let constant_x = x.iter().all(|&xi| xi == x[0]);
    if denominator == 0.0 || constant_x {
        tracing::debug!("regression slope undefined for constant x, using horizontal fit");
        return Regression {
            slope: 0.0,
            intercept: mean(y),
        };
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Regression { slope, intercept }
}

/// Truncates both sequences to the length of the shorter one.
#[must_use]
pub fn paired<'a>(x: &'a [f64], y: &'a [f64]) -> (&'a [f64], &'a [f64]) {
    let len = usize::min(x.len(), y.len());
    (&x[..len], &y[..len])
}

/// How strongly two variables move together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
}

/// Sign of a correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Direction {
    Positive,
    Negative,
    No,
}

/// Correlation of two datasets paired element-wise, with a plain-language
/// interpretation and the regression line over the same pairs.
///
/// When the datasets differ in length only the first `min(len)` pairs are
/// used and `truncated` is set.
///
/// # Examples
///
/// ```
/// use statlens_stats::bivariate::{CorrelationReport, Direction, Strength};
///
/// let report = CorrelationReport::new(&[1.0, 2.0, 3.0, 4.0, 5.0], &[10.0, 8.0, 6.0, 4.0]);
/// assert_eq!(report.pairs, 4);
/// assert!(report.truncated);
/// assert_eq!(report.strength, Strength::Strong);
/// assert_eq!(report.direction, Direction::Negative);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationReport {
    /// Pearson r, rounded to three decimals.
    pub r: f64,
    pub strength: Strength,
    pub direction: Direction,
    pub regression: Regression,
    /// Number of pairs actually used.
    pub pairs: usize,
    /// Whether the longer dataset was cut down to `pairs` values.
    pub truncated: bool,
}

impl CorrelationReport {
    #[must_use]
    pub fn new(x: &[f64], y: &[f64]) -> Self {
        let (px, py) = paired(x, y);
        let r = round_to(correlation(px, py), 3);
        Self {
            r,
            strength: classify_strength(r),
            direction: classify_direction(r),
            regression: linear_regression(px, py),
            pairs: px.len(),
            truncated: x.len() != y.len(),
        }
    }

    /// Plain-language reading such as `"Strong Positive Correlation"`.
    #[must_use]
    pub fn interpretation(&self) -> String {
        format!("{} {} Correlation", self.strength, self.direction)
    }

    /// Horizontal extent of the paired `x` values, for drawing the fitted line.
    #[must_use]
    pub fn x_extent(x: &[f64], y: &[f64]) -> Option<(f64, f64)> {
        min_max(paired(x, y).0)
    }
}

fn classify_strength(r: f64) -> Strength {
    let abs_r = r.abs();
    if abs_r > 0.7 {
        Strength::Strong
    } else if abs_r > 0.3 {
        Strength::Moderate
    } else {
        Strength::Weak
    }
}

fn classify_direction(r: f64) -> Direction {
    if r > 0.0 {
        Direction::Positive
    } else if r < 0.0 {
        Direction::Negative
    } else {
        Direction::No
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_degenerate_inputs() {
        assert_eq!(correlation(&[], &[]), 0.0);
        assert_eq!(correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0]), 0.0);
        assert_eq!(correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(correlation(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]), 0.0);
    }

    #[test]
    fn test_correlation_perfect_negative() {
        let r = correlation(&[1.0, 2.0, 3.0, 4.0], &[8.0, 6.0, 4.0, 2.0]);
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_correlation_is_bounded() {
        let x = [3.0, 7.0, 1.0, 9.0, 4.0, 6.0];
        let y = [2.0, 5.0, 4.0, 8.0, 1.0, 7.0];
        let r = correlation(&x, &y);
        assert!((-1.0..=1.0).contains(&r));
    }

    #[test]
    fn test_regression_recovers_line() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [5.0, 8.0, 11.0, 14.0];
        let fit = linear_regression(&x, &y);
        assert!((fit.slope - 3.0).abs() < 1e-9);
        assert!((fit.intercept - 2.0).abs() < 1e-9);
        assert!((fit.predict(10.0) - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_regression_degenerate_inputs() {
        assert_eq!(linear_regression(&[], &[]), Regression::default());
        assert_eq!(
            linear_regression(&[1.0, 2.0], &[1.0]),
            Regression {
                slope: 0.0,
                intercept: 0.0
            }
        );
    }

    #[test]
    fn test_regression_constant_x_is_horizontal() {
        let fit = linear_regression(&[2.0, 2.0, 2.0], &[1.0, 2.0, 6.0]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 3.0);
        assert!(fit.slope.is_finite() && fit.intercept.is_finite());

        let fit = linear_regression(&[0.1, 0.1, 0.1], &[1.0, 2.0, 3.0]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 2.0);
    }

    #[test]
    fn test_paired_truncates_to_shorter() {
        let (x, y) = paired(&[1.0, 2.0, 3.0], &[4.0, 5.0]);
        assert_eq!(x, &[1.0, 2.0]);
        assert_eq!(y, &[4.0, 5.0]);
    }

    #[test]
    fn test_report_classification() {
        assert_eq!(classify_strength(0.71), Strength::Strong);
        assert_eq!(classify_strength(-0.7), Strength::Moderate);
        assert_eq!(classify_strength(0.3), Strength::Weak);
        assert_eq!(classify_direction(0.0), Direction::No);
        assert_eq!(classify_direction(-0.2), Direction::Negative);
    }

    #[test]
    fn test_report_zero_variance() {
        let report = CorrelationReport::new(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]);
        assert_eq!(report.r, 0.0);
        assert_eq!(report.strength, Strength::Weak);
        assert_eq!(report.direction, Direction::No);
        assert!(!report.truncated);
        assert_eq!(report.interpretation(), "Weak No Correlation");
    }

    #[test]
    fn test_x_extent_uses_paired_values() {
        let extent = CorrelationReport::x_extent(&[1.0, 9.0, 100.0], &[0.0, 0.0]);
        assert_eq!(extent, Some((1.0, 9.0)));
    }
}
