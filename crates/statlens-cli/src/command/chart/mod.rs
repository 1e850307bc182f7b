use crate::{
    command::chart::{app::ChartApp, data::ChartData},
    dataset::{DataSource, Datasets},
    tui::Tui,
};

mod app;
mod data;
mod screens;

/// Which chart is shown first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, derive_more::Display)]
pub(crate) enum ChartKind {
    #[default]
    #[display("Histogram")]
    Histogram,
    #[display("Scatter Plot")]
    Scatter,
    #[display("Box Plot")]
    #[value(name = "box")]
    BoxPlot,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ChartArg {
    /// Dataset 1 as comma or space separated numbers, or `-` for stdin
    data: DataSource,
    /// Dataset 2 to compare against Dataset 1
    #[arg(long)]
    compare: Option<DataSource>,
    /// Chart to show first
    #[arg(long, value_enum, default_value_t)]
    kind: ChartKind,
}

pub(crate) fn run(arg: &ChartArg) -> anyhow::Result<()> {
    let ChartArg {
        data,
        compare,
        kind,
    } = arg;

    let datasets = Datasets::read(data, compare.as_ref())?;
    let chart_data = ChartData::new(&datasets);
    tracing::debug!(bins = chart_data.histogram.num_bins(), "chart data prepared");

    let mut app = ChartApp::new(chart_data, *kind);
    Tui::new().run(&mut app)?;
    Ok(())
}
