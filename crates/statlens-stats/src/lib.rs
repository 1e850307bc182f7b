//! Statistics engine and box-plot geometry for StatLens.
//!
//! This crate provides:
//!
//! - **Descriptive statistics**: mean, median, mode, range and population standard deviation
//! - **Quartiles**: Q1/Q3/IQR by the median-of-halves rule, Tukey fences and outliers
//! - **Bivariate analysis**: Pearson correlation and least-squares regression
//! - **Box-plot geometry**: whiskers, outliers and "nice" axis ticks ready for rendering
//! - **Histograms**: square-root-rule equal-width binning, shareable across datasets
//! - **Input handling**: tolerant number parsing and uniform random demo data
//!
//! All computations are total. Empty or degenerate input produces a defined
//! neutral value rather than `NaN`, an infinity or a panic.
//!
//! # Modules
//!
//! - [`descriptive`]: single-variable summary measures
//! - [`quartiles`]: quartiles, fences and outlier detection
//! - [`bivariate`]: correlation, regression and their interpretation
//! - [`box_plot`]: geometry for box-and-whisker plots
//! - [`histogram`]: frequency distributions
//! - [`summary`]: every single-variable statistic in one value
//! - [`parse`]: free-text to numbers
//! - [`random`]: random integer datasets
//!
//! # Examples
//!
//! ## Summarizing a dataset
//!
//! ```
//! use statlens_stats::summary::Summary;
//!
//! let summary = Summary::new(&[1.0, 2.0, 3.0, 4.0, 5.0]);
//! assert_eq!(summary.mean, 3.0);
//! assert_eq!(summary.quartiles.iqr, 2.5);
//! ```
//!
//! ## Comparing two datasets
//!
//! ```
//! use statlens_stats::bivariate::CorrelationReport;
//!
//! let report = CorrelationReport::new(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.1, 5.9, 8.0]);
//! assert_eq!(report.interpretation(), "Strong Positive Correlation");
//! ```
//!
//! ## Building box-plot geometry
//!
//! ```
//! use statlens_stats::box_plot::BoxPlotGeometry;
//!
//! let geometry = BoxPlotGeometry::new(&[12.0, 15.0, 11.0, 14.0, 60.0]).unwrap();
//! assert_eq!(geometry.outliers, vec![60.0]);
//! ```

pub mod bivariate;
pub mod box_plot;
pub mod descriptive;
pub mod histogram;
pub mod parse;
pub mod quartiles;
pub mod random;
pub mod summary;
