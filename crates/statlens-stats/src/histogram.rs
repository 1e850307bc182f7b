use std::ops::Range;

use serde::Serialize;

use crate::descriptive::min_max;

/// Upper limit on the number of bins.
pub const MAX_BINS: usize = 10;

/// Equal-width bin layout shared by one or more histograms.
///
/// The number of bins follows the square-root rule capped at [`MAX_BINS`]:
/// `min(10, ceil(sqrt(n)))`. Computing one layout over several datasets lets
/// their histograms be compared bin by bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramLayout {
    /// Start of the first bin (the smallest value).
    pub min: f64,
    /// Width of each bin. Never zero.
    pub bin_width: f64,
    /// Number of bins. Always at least one.
    pub num_bins: usize,
}

impl HistogramLayout {
    /// Derives a layout covering every value in `values`.
    ///
    /// Returns `None` for an empty slice. When all values are equal the bin
    /// width falls back to `1.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlens_stats::histogram::HistogramLayout;
    ///
    /// let layout = HistogramLayout::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    /// assert_eq!(layout.num_bins, 3);
    /// assert!((layout.bin_width - 4.0 / 3.0).abs() < 1e-12);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (min, max) = min_max(values)?;
        let num_bins = ((values.len() as f64).sqrt().ceil() as usize).clamp(1, MAX_BINS);
        let mut bin_width = (max - min) / num_bins as f64;
        if bin_width == 0.0 || !bin_width.is_finite() {
            // Edge case: every value is identical
            bin_width = 1.0;
        }
        Some(Self {
            min,
            bin_width,
            num_bins,
        })
    }

    /// Index of the bin containing `value`.
    ///
    /// Values beyond either end are clamped into the first or last bin.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn bin_index(&self, value: f64) -> usize {
        let position = ((value - self.min) / self.bin_width).floor();
        if position <= 0.0 {
            return 0;
        }
        (position as usize).min(self.num_bins.saturating_sub(1))
    }

    /// Value range covered by the bin at `index`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn bin_range(&self, index: usize) -> Range<f64> {
        let start = self.min + index as f64 * self.bin_width;
        let end = self.min + (index + 1) as f64 * self.bin_width;
        start..end
    }
}

/// Frequency distribution of a dataset over a [`HistogramLayout`].
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end,
    /// except for the last bin which also holds its end value).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl HistogramBin {
    /// Axis label of the form `"10.0-20.0"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.1}-{:.1}", self.range.start, self.range.end)
    }
}

impl Histogram {
    /// Creates a histogram with a layout derived from `values` alone.
    ///
    /// An empty slice produces a histogram without bins.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlens_stats::histogram::Histogram;
    ///
    /// let histogram = Histogram::new(&[5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0]);
    /// assert_eq!(histogram.bins.len(), 3);
    /// assert_eq!(histogram.bins.iter().map(|bin| bin.count).sum::<u64>(), 9);
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        match HistogramLayout::from_values(values) {
            Some(layout) => Self::with_layout(values, &layout),
            None => Self { bins: vec![] },
        }
    }

    /// Counts `values` into the bins of `layout`.
    #[must_use]
    pub fn with_layout(values: &[f64], layout: &HistogramLayout) -> Self {
        let mut bins = (0..layout.num_bins)
            .map(|idx| HistogramBin {
                range: layout.bin_range(idx),
                count: 0,
            })
            .collect::<Vec<_>>();
        for &value in values {
            if let Some(bin) = bins.get_mut(layout.bin_index(value)) {
                bin.count += 1;
            }
        }
        Self { bins }
    }

    /// Largest bin count, or zero for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}
