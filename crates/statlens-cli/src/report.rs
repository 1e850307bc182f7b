//! Text and JSON rendering of descriptive statistics.

use std::io::{self, Write};

use serde::Serialize;
use statlens_stats::{bivariate::CorrelationReport, summary::Summary};

use crate::dataset::Datasets;

/// Everything `describe` reports for the given datasets.
#[derive(Debug, Clone, Serialize)]
pub struct DescribeReport {
    pub dataset1: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset2: Option<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<CorrelationReport>,
}

impl DescribeReport {
    pub fn new(datasets: &Datasets) -> Self {
        let dataset1 = Summary::new(&datasets.primary);
        let dataset2 = datasets.secondary.as_deref().map(Summary::new);
        let correlation = datasets
            .secondary
            .as_deref()
            .map(|secondary| CorrelationReport::new(&datasets.primary, secondary));
        Self {
            dataset1,
            dataset2,
            correlation,
        }
    }

    pub fn write_text<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        match &self.dataset2 {
            None => write_summary(writer, &self.dataset1)?,
            Some(dataset2) => {
                writeln!(writer, "Dataset 1 Statistics")?;
                write_summary(writer, &self.dataset1)?;
                writeln!(writer)?;
                writeln!(writer, "Dataset 2 Statistics")?;
                write_summary(writer, dataset2)?;
            }
        }
        if let Some(correlation) = &self.correlation {
            writeln!(writer)?;
            write_correlation(writer, correlation)?;
        }
        Ok(())
    }
}

fn write_summary<W>(writer: &mut W, summary: &Summary) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let modes = if summary.modes.is_empty() {
        "No mode".to_owned()
    } else {
        join_values(&summary.modes)
    };
    let outliers = if summary.outliers.is_empty() {
        "None".to_owned()
    } else {
        join_values(&summary.outliers)
    };

    let rows = [
        ("COUNT (N)", summary.count.to_string()),
        ("MEAN", format!("{:.2}", summary.mean)),
        ("MEDIAN", summary.median.to_string()),
        ("MODE", modes),
        ("RANGE", summary.range.to_string()),
        ("STD DEV", format!("{:.2}", summary.std_dev)),
        ("Q1", summary.quartiles.q1.to_string()),
        ("Q3", summary.quartiles.q3.to_string()),
        ("IQR", summary.quartiles.iqr.to_string()),
        ("OUTLIERS", outliers),
    ];
    for (label, value) in rows {
        writeln!(writer, "  {label:<10} {value}")?;
    }
    Ok(())
}

fn write_correlation<W>(writer: &mut W, report: &CorrelationReport) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(writer, "Comparative Analysis")?;
    writeln!(writer, "  Correlation Coefficient (r): {:.3}", report.r)?;
    writeln!(writer, "  Interpretation: {}", report.interpretation())?;
    writeln!(
        writer,
        "  Regression Line: y = {:.4}x + {:.4}",
        report.regression.slope, report.regression.intercept
    )?;
    if report.truncated {
        writeln!(
            writer,
            "  Note: Datasets had different lengths. Correlation calculated using the first {} pairs.",
            report.pairs
        )?;
    }
    Ok(())
}

fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
