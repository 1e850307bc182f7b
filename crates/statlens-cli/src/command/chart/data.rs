//! Chart-ready data derived from the parsed datasets.

use statlens_stats::{
    bivariate::{CorrelationReport, paired},
    box_plot::BoxPlotGeometry,
    descriptive::min_max,
    histogram::{Histogram, HistogramLayout},
};

use crate::dataset::Datasets;

pub const DATASET_LABELS: [&str; 2] = ["Dataset 1", "Dataset 2"];

#[derive(Debug)]
pub struct ChartData {
    pub histogram: HistogramData,
    pub scatter: ScatterData,
    pub box_plots: Vec<BoxPlotData>,
}

impl ChartData {
    pub fn new(datasets: &Datasets) -> Self {
        let series = series(datasets);
        Self {
            histogram: HistogramData::new(&series),
            scatter: ScatterData::new(datasets),
            box_plots: series
                .iter()
                .zip(DATASET_LABELS)
                .filter_map(|(values, label)| {
                    BoxPlotGeometry::new(values).map(|geometry| BoxPlotData { label, geometry })
                })
                .collect(),
        }
    }
}

fn series(datasets: &Datasets) -> Vec<&[f64]> {
    let mut series = vec![datasets.primary.as_slice()];
    series.extend(datasets.secondary.as_deref());
    series
}

/// One histogram per dataset, all sharing the same bins.
#[derive(Debug)]
pub struct HistogramData {
    pub histograms: Vec<Histogram>,
}

impl HistogramData {
    fn new(series: &[&[f64]]) -> Self {
        let all = series.concat();
        let histograms = match HistogramLayout::from_values(&all) {
            Some(layout) => series
                .iter()
                .map(|values| Histogram::with_layout(values, &layout))
                .collect(),
            None => vec![],
        };
        Self { histograms }
    }

    pub fn num_bins(&self) -> usize {
        self.histograms.first().map_or(0, |h| h.bins.len())
    }
}

#[derive(Debug)]
pub struct ScatterData {
    pub points: Vec<(f64, f64)>,
    /// Regression line and correlation, comparison mode only.
    pub fit: Option<ScatterFit>,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

#[derive(Debug)]
pub struct ScatterFit {
    /// Endpoints of the fitted line at the smallest and largest `x`.
    pub line: [(f64, f64); 2],
    pub report: CorrelationReport,
}

impl ScatterData {
    #[expect(clippy::cast_precision_loss)]
    fn new(datasets: &Datasets) -> Self {
        let (points, fit, x_title, y_title) = match &datasets.secondary {
            None => {
                let points = datasets
                    .primary
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| ((i + 1) as f64, v))
                    .collect::<Vec<_>>();
                (points, None, "Index", "Value")
            }
            Some(secondary) => {
                let (x, y) = paired(&datasets.primary, secondary);
                let points = x.iter().copied().zip(y.iter().copied()).collect();
                let report = CorrelationReport::new(&datasets.primary, secondary);
                let fit = min_max(x).map(|(x_min, x_max)| ScatterFit {
                    line: [
                        (x_min, report.regression.predict(x_min)),
                        (x_max, report.regression.predict(x_max)),
                    ],
                    report,
                });
                (points, fit, DATASET_LABELS[0], DATASET_LABELS[1])
            }
        };

        let line_points = fit.iter().flat_map(|fit| fit.line);
        let all_points = points.iter().copied().chain(line_points).collect::<Vec<_>>();
        let x_bounds = padded_bounds(all_points.iter().map(|p| p.0));
        let y_bounds = padded_bounds(all_points.iter().map(|p| p.1));

        Self {
            points,
            fit,
            x_title,
            y_title,
            x_bounds,
            y_bounds,
        }
    }
}

/// Smallest and largest value, widened by half a unit when they coincide.
fn padded_bounds<I>(values: I) -> [f64; 2]
where
    I: IntoIterator<Item = f64>,
{
    let values = values.into_iter().collect::<Vec<_>>();
    match min_max(&values) {
        Some((min, max)) if min < max => [min, max],
        Some((min, max)) => [min - 0.5, max + 0.5],
        None => [0.0, 1.0],
    }
}

#[derive(Debug)]
pub struct BoxPlotData {
    pub label: &'static str,
    pub geometry: BoxPlotGeometry,
}
