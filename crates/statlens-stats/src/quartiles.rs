use serde::Serialize;

use crate::descriptive::{self, median_of_sorted};

/// Multiplier applied to the IQR to place the outlier fences.
pub const FENCE_FACTOR: f64 = 1.5;

/// First and third quartiles of a dataset together with their spread.
///
/// Quartiles are the medians of the two halves obtained by splitting the
/// sorted data at `mid = n / 2`. The lower half is `sorted[..mid]` and the
/// upper half is `sorted[mid..]`, so for an odd count the middle element is
/// counted in the upper half only.
///
/// # Examples
///
/// ```
/// use statlens_stats::quartiles::Quartiles;
///
/// let q = Quartiles::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
/// assert_eq!(q.q1, 2.5);
/// assert_eq!(q.q3, 6.5);
/// assert_eq!(q.iqr, 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Quartiles {
    /// First quartile (median of the lower half).
    pub q1: f64,
    /// Third quartile (median of the upper half).
    pub q3: f64,
    /// Interquartile range, `q3 - q1`.
    pub iqr: f64,
}

impl Quartiles {
    /// Computes quartiles from unsorted values.
    ///
    /// An empty slice yields all zeros.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        Self::from_sorted(&descriptive::sorted(values))
    }

    /// Computes quartiles from values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not in ascending [`f64::total_cmp`] order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        match sorted_values {
            [] => return Self::default(),
            // A lone value has no lower half; it is both quartiles.
            [value] => {
                return Self {
                    q1: *value,
                    q3: *value,
                    iqr: 0.0,
                };
            }
            _ => {}
        }

        let (lower_half, upper_half) = sorted_values.split_at(sorted_values.len() / 2);
        let q1 = median_of_sorted(lower_half);
        let q3 = median_of_sorted(upper_half);
        Self { q1, q3, iqr: q3 - q1 }
    }

    /// Lower outlier fence, `q1 - 1.5 * iqr`.
    #[must_use]
    pub fn lower_fence(&self) -> f64 {
        self.q1 - FENCE_FACTOR * self.iqr
    }

    /// Upper outlier fence, `q3 + 1.5 * iqr`.
    #[must_use]
    pub fn upper_fence(&self) -> f64 {
        self.q3 + FENCE_FACTOR * self.iqr
    }

    /// Returns `true` if `value` lies strictly outside the fences.
    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower_fence() || value > self.upper_fence()
    }
}

/// Values outside the 1.5 × IQR fences, in their original order.
///
/// # Examples
///
/// ```
/// use statlens_stats::quartiles::outliers;
///
/// assert_eq!(outliers(&[10.0, 12.0, 11.0, 13.0, 100.0]), vec![100.0]);
/// assert!(outliers(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_empty());
/// ```
#[must_use]
pub fn outliers(values: &[f64]) -> Vec<f64> {
    let quartiles = Quartiles::new(values);
    values
        .iter()
        .copied()
        .filter(|&v| quartiles.is_outlier(v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptive::median;

    #[test]
    fn test_empty() {
        assert_eq!(
            Quartiles::new(&[]),
            Quartiles {
                q1: 0.0,
                q3: 0.0,
                iqr: 0.0
            }
        );
        assert!(outliers(&[]).is_empty());
    }

    #[test]
    fn test_odd_count_puts_median_in_upper_half() {
        // lower = [1, 2], upper = [3, 4, 5]
        let q = Quartiles::new(&[5.0, 3.0, 1.0, 4.0, 2.0]);
        assert_eq!(q.q1, 1.5);
        assert_eq!(q.q3, 4.0);
        assert_eq!(q.iqr, 2.5);
    }

    #[test]
    fn test_even_count() {
        // lower = [1..5], upper = [6..9, 100]
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let q = Quartiles::new(&values);
        assert_eq!(q.q1, 3.0);
        assert_eq!(q.q3, 8.0);
        assert_eq!(q.iqr, 5.0);
        assert_eq!(q.lower_fence(), -4.5);
        assert_eq!(q.upper_fence(), 15.5);
    }

    #[test]
    fn test_single_value() {
        let q = Quartiles::new(&[-7.0]);
        assert_eq!(q.q1, -7.0);
        assert_eq!(q.q3, -7.0);
        assert_eq!(q.iqr, 0.0);
    }

    #[test]
    fn test_quartiles_bracket_median() {
        let datasets: [&[f64]; 4] = [
            &[1.0, 2.0],
            &[4.0, 4.0, 4.0],
            &[10.0, 12.0, 11.0, 13.0, 100.0],
            &[3.0, -1.0, 8.0, 8.0, 2.5, 6.0, 0.0],
        ];
        for values in datasets {
            let q = Quartiles::new(values);
            let med = median(values);
            assert!(q.q1 <= med && med <= q.q3, "{values:?}: {q:?}");
            assert_eq!(q.iqr, q.q3 - q.q1);
        }
    }

    #[test]
    fn test_outliers_keep_original_order() {
        let values = [500.0, 10.0, 11.0, 12.0, 13.0, 11.0, 12.0, -300.0];
        assert_eq!(outliers(&values), vec![500.0, -300.0]);
    }

    #[test]
    fn test_nan_sorts_into_upper_half() {
        // sorted: [1, 3, NaN]; lower = [1], upper = [3, NaN]
        let q = Quartiles::new(&[3.0, f64::NAN, 1.0]);
        assert_eq!(q.q1, 1.0);
        assert!(q.q3.is_nan());
        assert!(q.iqr.is_nan());
    }

    #[test]
    fn test_repeat_calls_are_identical() {
        let values = [0.3, 7.1, 0.2, 9.9, 4.4, 0.7];
        let first = Quartiles::new(&values);
        let second = Quartiles::new(&values);
        assert_eq!(first, second);
        assert_eq!(first.q1.to_bits(), second.q1.to_bits());
        assert_eq!(first.q3.to_bits(), second.q3.to_bits());
        assert_eq!(first.iqr.to_bits(), second.iqr.to_bits());
    }

    #[test]
    fn test_identical_values_have_no_outliers() {
        assert!(outliers(&[2.0, 2.0, 2.0, 2.0]).is_empty());
    }
}
