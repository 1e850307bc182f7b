//! Single-variable descriptive statistics.
//!
//! Every function here is total: an empty slice yields a defined neutral value
//! (`0.0` or an empty list) instead of `NaN` or a panic. Functions that need
//! ordered data sort an internal copy and never touch the caller's slice.

/// Returns an ascending copy of `values`.
///
/// Ordering uses [`f64::total_cmp`], so the result is deterministic for any input.
#[must_use]
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Arithmetic sum. `0.0` for an empty slice.
#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean.
///
/// Returns `0.0` for an empty slice so that downstream formulas stay total.
///
/// # Examples
///
/// ```
/// use statlens_stats::descriptive::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

/// Median of unsorted values.
///
/// Odd counts take the middle element, even counts average the two middle
/// elements. `0.0` for an empty slice.
///
/// # Examples
///
/// ```
/// use statlens_stats::descriptive::median;
///
/// assert_eq!(median(&[5.0, 1.0, 3.0]), 3.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// assert_eq!(median(&[]), 0.0);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    median_of_sorted(&sorted(values))
}

/// Median of values already sorted in ascending order.
///
/// # Panics
///
/// Panics in debug mode if `sorted_values` is not in ascending [`f64::total_cmp`] order.
#[must_use]
pub fn median_of_sorted(sorted_values: &[f64]) -> f64 {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
        "values must be sorted in ascending order"
    );

    let n = sorted_values.len();
    if n == 0 {
        return 0.0;
    }
    let mid = n / 2;
    if n % 2 == 0 {
        f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
    } else {
        sorted_values[mid]
    }
}

/// All values tied at the highest frequency, in ascending order.
///
/// Returns an empty list when no value repeats (every frequency is 1), which
/// is how "no mode" is represented. Several values are returned for
/// multimodal data.
///
/// # Examples
///
/// ```
/// use statlens_stats::descriptive::mode;
///
/// assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0, 3.0]), vec![1.0, 2.0]);
/// assert!(mode(&[1.0, 2.0, 3.0]).is_empty());
/// ```
#[must_use]
pub fn mode(values: &[f64]) -> Vec<f64> {
    mode_of_sorted(&sorted(values))
}

/// Like [`mode`], but for values already sorted in ascending order.
#[expect(clippy::float_cmp, reason = "mode counts exactly equal values")]
#[must_use]
pub fn mode_of_sorted(sorted_values: &[f64]) -> Vec<f64> {
    // Equal values are adjacent after sorting, so frequencies are run lengths.
    let runs = sorted_values
        .chunk_by(|a, b| a == b)
        .map(|run| (run[0], run.len()))
        .collect::<Vec<_>>();

    let max_freq = runs.iter().map(|(_, count)| *count).max().unwrap_or(0);
    if max_freq <= 1 {
        return vec![];
    }

    runs.into_iter()
        .filter_map(|(value, count)| (count == max_freq).then_some(value))
        .collect()
}

/// Difference between the largest and smallest value. `0.0` for an empty slice.
#[must_use]
pub fn range(values: &[f64]) -> f64 {
    match min_max(values) {
        Some((min, max)) => max - min,
        None => 0.0,
    }
}

/// Smallest and largest value, or `None` for an empty slice.
#[must_use]
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
    )
}

/// Population standard deviation (divides by `n`, not `n - 1`).
///
/// # Examples
///
/// ```
/// use statlens_stats::descriptive::std_dev;
///
/// assert_eq!(std_dev(&[5.0, 5.0, 5.0, 5.0]), 0.0);
/// assert!((std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]) - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let square_diffs = values.iter().map(|v| (v - avg).powi(2)).collect::<Vec<_>>();
    mean(&square_diffs).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_neutral() {
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(median(&[]), 0.0);
        assert!(mode(&[]).is_empty());
        assert_eq!(range(&[]), 0.0);
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let values = [9.0, 1.0, 5.0, 3.0];
        let _ = median(&values);
        assert_eq!(values, [9.0, 1.0, 5.0, 3.0]);
    }

    #[test]
    fn test_median_even_and_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[10.0, 2.0, 4.0, 8.0]), 6.0);
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn test_mode_multimodal_ascending() {
        assert_eq!(mode(&[3.0, 2.0, 2.0, 1.0, 1.0]), vec![1.0, 2.0]);
        assert_eq!(mode(&[4.0, 4.0, 4.0, 1.0, 1.0]), vec![4.0]);
    }

    #[test]
    fn test_mode_without_repeats() {
        assert!(mode(&[1.0, 2.0, 3.0]).is_empty());
        assert!(mode(&[42.0]).is_empty());
    }

    #[test]
    fn test_range() {
        assert_eq!(range(&[3.0, -2.0, 10.0]), 12.0);
        assert_eq!(range(&[5.0]), 0.0);
    }

    #[test]
    fn test_std_dev_is_population() {
        // Sample std dev would be sqrt(2.5); population is sqrt(2).
        let sd = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((sd - 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(std_dev(&[5.0, 5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_median_between_min_and_max() {
        let datasets: [&[f64]; 4] = [
            &[1.0],
            &[2.0, 1.0],
            &[10.0, -4.0, 7.5, 7.5, 0.0],
            &[100.0, 1.0, 50.0, 25.0, 75.0, 60.0],
        ];
        for values in datasets {
            let (min, max) = min_max(values).unwrap();
            let med = median(values);
            assert!(min <= med && med <= max, "{values:?}");
        }
    }

    #[test]
    fn test_nan_input_does_not_panic() {
        // NaN sorts after every number
        assert_eq!(median(&[1.0, f64::NAN, 0.0]), 1.0);
        assert!(median(&[1.0, f64::NAN]).is_nan());
        assert_eq!(mode(&[1.0, f64::NAN, 1.0]), vec![1.0]);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let values = [0.1, 0.7, 0.2, 0.9, 0.3];
        assert_eq!(mean(&values).to_bits(), mean(&values).to_bits());
        assert_eq!(std_dev(&values).to_bits(), std_dev(&values).to_bits());
        assert_eq!(median(&values).to_bits(), median(&values).to_bits());
    }
}
