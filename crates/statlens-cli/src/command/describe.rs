use std::path::PathBuf;

use crate::{
    dataset::{DataSource, Datasets},
    report::DescribeReport,
    util::Output,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    /// Dataset 1 as comma or space separated numbers, or `-` for stdin
    data: DataSource,
    /// Dataset 2 to compare against Dataset 1
    #[arg(long)]
    compare: Option<DataSource>,
    /// Report format
    #[arg(long, value_enum, default_value_t)]
    format: ReportFormat,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let DescribeArg {
        data,
        compare,
        format,
        output,
    } = arg;

    let datasets = Datasets::read(data, compare.as_ref())?;
    let report = DescribeReport::new(&datasets);

    let mut output = Output::from_output_path(output.clone())?;
    match format {
        ReportFormat::Text => output.write_text(|w| report.write_text(w))?,
        ReportFormat::Json => output.write_json(&report)?,
    }
    Ok(())
}
