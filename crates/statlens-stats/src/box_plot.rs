//! Box-and-whisker plot geometry.
//!
//! [`BoxPlotGeometry`] turns a dataset into everything a renderer needs to
//! draw a box plot: the box (Q1, median, Q3), whiskers clamped to the most
//! extreme observed values inside the 1.5 × IQR fences, the outliers beyond
//! them, and a list of "nice" axis ticks.
//!
//! # Examples
//!
//! ```
//! use statlens_stats::box_plot::BoxPlotGeometry;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
//! let geometry = BoxPlotGeometry::new(&values).unwrap();
//!
//! assert_eq!(geometry.whisker_min, 1.0);
//! assert_eq!(geometry.whisker_max, 9.0);
//! assert_eq!(geometry.outliers, vec![100.0]);
//! assert_eq!(geometry.ticks.first(), Some(&1.0));
//! assert_eq!(geometry.ticks.last(), Some(&100.0));
//! ```

use serde::Serialize;

use crate::{
    descriptive::{self, median_of_sorted},
    quartiles::Quartiles,
};

/// Approximate number of intervals the tick heuristic aims for.
pub const TARGET_TICK_COUNT: f64 = 10.0;

/// Hard upper bound on generated ticks.
const MAX_TICKS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotGeometry {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest observed value not below the lower fence.
    pub whisker_min: f64,
    /// Largest observed value not above the upper fence.
    pub whisker_max: f64,
    /// Values outside the fences, ascending.
    pub outliers: Vec<f64>,
    /// Axis tick values, ascending, starting at `data_min` and ending at `data_max`.
    pub ticks: Vec<f64>,
    /// True minimum of the data, outliers included.
    pub data_min: f64,
    /// True maximum of the data, outliers included.
    pub data_max: f64,
    /// Axis span used for coordinate mapping. Never zero.
    pub range: f64,
}

impl BoxPlotGeometry {
    /// Computes the geometry from unsorted values.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let sorted = descriptive::sorted(values);
        let quartiles = Quartiles::from_sorted(&sorted);
        Self::from_sorted(&sorted, &quartiles)
    }

    /// Computes the geometry from values sorted in ascending order and their
    /// quartiles.
    ///
    /// Returns `None` for an empty slice.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not in ascending [`f64::total_cmp`] order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], quartiles: &Quartiles) -> Option<Self> {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let data_min = *sorted_values.first()?;
        let data_max = *sorted_values.last()?;

        let lower_fence = quartiles.lower_fence();
        let upper_fence = quartiles.upper_fence();
        let inside = |v: f64| lower_fence <= v && v <= upper_fence;

        let whisker_min = sorted_values.iter().copied().find(|&v| inside(v));
        let whisker_max = sorted_values.iter().rev().copied().find(|&v| inside(v));
        let (whisker_min, whisker_max) = match whisker_min.zip(whisker_max) {
            Some(whiskers) => whiskers,
            None => {
                tracing::debug!("no values inside the fences, whiskers collapse onto the box");
                (quartiles.q1, quartiles.q3)
            }
        };

        let outliers = sorted_values
            .iter()
            .copied()
            .filter(|&v| !inside(v))
            .collect();

        Some(Self {
            q1: quartiles.q1,
            median: median_of_sorted(sorted_values),
            q3: quartiles.q3,
            whisker_min,
            whisker_max,
            outliers,
            ticks: axis_ticks(data_min, data_max),
            data_min,
            data_max,
            range: axis_range(data_min, data_max),
        })
    }

    /// Maps `value` onto `[0, 1]` along the axis, `data_min` at 0.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.data_min) / self.range
    }
}

/// Span between `min` and `max`, or `1.0` when they coincide.
#[must_use]
pub fn axis_range(min: f64, max: f64) -> f64 {
    let range = max - min;
    if range > 0.0 { range } else { 1.0 }
}

/// Rounds `range / 10` to a human-friendly step of 1, 2, 5 or 10 times a
/// power of ten.
///
/// # Examples
///
/// ```
/// use statlens_stats::box_plot::nice_step;
///
/// assert_eq!(nice_step(99.0), 10.0);
/// assert_eq!(nice_step(30.0), 5.0);
/// assert_eq!(nice_step(15.0), 2.0);
/// assert_eq!(nice_step(10.0), 1.0);
/// ```
#[must_use]
pub fn nice_step(range: f64) -> f64 {
    let rough_step = range / TARGET_TICK_COUNT;
    let magnitude = 10_f64.powf(rough_step.log10().floor());
    let normalized = rough_step / magnitude;
    let multiplier = if normalized > 5.0 {
        10.0
    } else if normalized > 2.0 {
        5.0
    } else if normalized > 1.0 {
        2.0
    } else {
        1.0
    };
    multiplier * magnitude
}

/// Axis ticks for the interval `[min, max]`.
///
/// The result always starts with `min` and ends with `max`; between them are
/// the multiples of [`nice_step`] that fall strictly inside the interval.
/// Suppressing labels that would render too close to the boundaries is left
/// to the renderer.
///
/// # Examples
///
/// ```
/// use statlens_stats::box_plot::axis_ticks;
///
/// assert_eq!(axis_ticks(3.0, 17.0), vec![3.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 17.0]);
/// assert_eq!(axis_ticks(5.0, 5.0), vec![5.0]);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
#[must_use]
pub fn axis_ticks(min: f64, max: f64) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || min > max {
        return vec![];
    }
    if min == max {
        return vec![min];
    }

    let step = nice_step(axis_range(min, max));
    // Multiples closer than this to a boundary are treated as the boundary itself.
    let epsilon = step * 1e-9;

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;

    let mut ticks = vec![min];
    ticks.extend(
        (first..=last)
            .take(MAX_TICKS)
            .map(|k| k as f64 * step)
            .filter(|&tick| tick - min > epsilon && max - tick > epsilon),
    );
    ticks.push(max);
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_geometry() {
        assert!(BoxPlotGeometry::new(&[]).is_none());
    }

    #[test]
    fn test_whiskers_stop_at_observed_values() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let geometry = BoxPlotGeometry::new(&values).unwrap();
        assert_eq!(geometry.q1, 3.0);
        assert_eq!(geometry.q3, 8.0);
        assert_eq!(geometry.median, 5.5);
        // Upper fence is 15.5; the whisker ends at 9, not at the fence.
        assert_eq!(geometry.whisker_max, 9.0);
        assert_eq!(geometry.whisker_min, 1.0);
        assert_eq!(geometry.outliers, vec![100.0]);
        assert_eq!(geometry.data_min, 1.0);
        assert_eq!(geometry.data_max, 100.0);
        assert_eq!(geometry.range, 99.0);
    }

    #[test]
    fn test_low_outliers() {
        let values = [-50.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0];
        let geometry = BoxPlotGeometry::new(&values).unwrap();
        assert_eq!(geometry.outliers, vec![-50.0]);
        assert_eq!(geometry.whisker_min, 10.0);
        assert_eq!(geometry.whisker_max, 15.0);
    }

    #[test]
    fn test_single_value() {
        let geometry = BoxPlotGeometry::new(&[4.0]).unwrap();
        assert_eq!(geometry.whisker_min, 4.0);
        assert_eq!(geometry.whisker_max, 4.0);
        assert!(geometry.outliers.is_empty());
        assert_eq!(geometry.range, 1.0);
        assert_eq!(geometry.ticks, vec![4.0]);
        assert_eq!(geometry.normalize(4.0), 0.0);
    }

    #[test]
    fn test_nan_quartiles_fall_back_to_box() {
        let quartiles = Quartiles {
            q1: f64::NAN,
            q3: f64::NAN,
            iqr: f64::NAN,
        };
        let geometry = BoxPlotGeometry::from_sorted(&[1.0, 2.0, 3.0], &quartiles).unwrap();
        assert!(geometry.whisker_min.is_nan());
        assert!(geometry.whisker_max.is_nan());
        assert_eq!(geometry.outliers, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_nan_input_does_not_panic() {
        let geometry = BoxPlotGeometry::new(&[3.0, f64::NAN, 1.0]).unwrap();
        assert_eq!(geometry.data_min, 1.0);
        assert!(geometry.data_max.is_nan());
        assert_eq!(geometry.median, 3.0);
        assert_eq!(geometry.range, 1.0);
        assert!(geometry.ticks.is_empty());
    }

    #[test]
    fn test_repeat_calls_are_identical() {
        let values = [0.3, 7.1, 0.2, 9.9, 4.4, 0.7, 31.5];
        let first = BoxPlotGeometry::new(&values).unwrap();
        let second = BoxPlotGeometry::new(&values).unwrap();
        assert_eq!(first, second);
        let bits = |g: &BoxPlotGeometry| {
            [g.q1, g.median, g.q3, g.whisker_min, g.whisker_max, g.range].map(f64::to_bits)
        };
        assert_eq!(bits(&first), bits(&second));
        assert_eq!(
            first.ticks.iter().copied().map(f64::to_bits).collect::<Vec<_>>(),
            second.ticks.iter().copied().map(f64::to_bits).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_nice_step_thresholds() {
        assert!((nice_step(1.0) - 0.1).abs() < 1e-12);
        assert_eq!(nice_step(60.0), 10.0);
        assert_eq!(nice_step(50.0), 5.0);
        assert_eq!(nice_step(21.0), 5.0);
        assert_eq!(nice_step(20.0), 2.0);
        assert_eq!(nice_step(1000.0), 100.0);
    }

    #[test]
    fn test_ticks_include_boundaries() {
        let ticks = axis_ticks(1.0, 100.0);
        assert_eq!(ticks.first(), Some(&1.0));
        assert_eq!(ticks.last(), Some(&100.0));
        // step = 10; interior multiples 10..=90
        assert_eq!(ticks.len(), 11);
        assert!(ticks.is_sorted_by(|a, b| a < b));
    }

    #[test]
    fn test_aligned_boundaries_are_not_duplicated() {
        assert_eq!(
            axis_ticks(0.0, 10.0),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
        );
    }

    #[test]
    fn test_negative_range() {
        let ticks = axis_ticks(-20.0, -3.0);
        assert_eq!(ticks.first(), Some(&-20.0));
        assert_eq!(ticks.last(), Some(&-3.0));
        assert!(ticks.contains(&-10.0));
        assert!(ticks.is_sorted_by(|a, b| a < b));
    }

    #[test]
    fn test_degenerate_tick_input() {
        assert!(axis_ticks(f64::NAN, 1.0).is_empty());
        assert!(axis_ticks(2.0, 1.0).is_empty());
    }
}
