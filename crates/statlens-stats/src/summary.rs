use serde::Serialize;

use crate::{
    descriptive::{self, mean, median_of_sorted, mode_of_sorted, std_dev},
    quartiles::Quartiles,
};

/// Every single-variable statistic of a dataset, computed together.
///
/// # Examples
///
/// ```
/// use statlens_stats::summary::Summary;
///
/// let summary = Summary::new(&[4.0, 1.0, 4.0, 2.0, 9.0]);
/// assert_eq!(summary.count, 5);
/// assert_eq!(summary.median, 4.0);
/// assert_eq!(summary.modes, vec![4.0]);
/// assert_eq!(summary.range, 8.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Most frequent values, ascending. Empty when no value repeats.
    pub modes: Vec<f64>,
    pub range: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub quartiles: Quartiles,
    /// Values beyond the 1.5 × IQR fences, in input order.
    pub outliers: Vec<f64>,
}

impl Summary {
    /// Summarizes `values`. The caller's slice is left untouched.
    ///
    /// An empty slice yields zeros and empty lists throughout.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let sorted = descriptive::sorted(values);
        let quartiles = Quartiles::from_sorted(&sorted);
        let range = match (sorted.first(), sorted.last()) {
            (Some(min), Some(max)) => max - min,
            _ => 0.0,
        };
        let outliers = values
            .iter()
            .copied()
            .filter(|&v| quartiles.is_outlier(v))
            .collect();

        Self {
            count: values.len(),
            mean: mean(values),
            median: median_of_sorted(&sorted),
            modes: mode_of_sorted(&sorted),
            range,
            std_dev: std_dev(values),
            quartiles,
            outliers,
        }
    }

    /// Whether the summary describes an empty dataset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
