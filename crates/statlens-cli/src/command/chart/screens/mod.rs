mod box_plot;
mod histogram;
mod scatter;

pub use self::{box_plot::BoxPlotScreen, histogram::HistogramScreen, scatter::ScatterScreen};
