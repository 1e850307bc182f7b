use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph, Widget},
};

use crate::command::chart::data::{ScatterData, ScatterFit};

pub struct ScatterScreen<'a> {
    data: &'a ScatterData,
}

impl<'a> ScatterScreen<'a> {
    pub fn new(data: &'a ScatterData) -> Self {
        Self { data }
    }
}

fn axis<'a>(title: &'a str, bounds: [f64; 2]) -> Axis<'a> {
    Axis::default()
        .title(title)
        .bounds(bounds)
        .labels([
            format!("{:.2}", bounds[0]),
            format!("{:.2}", f64::midpoint(bounds[0], bounds[1])),
            format!("{:.2}", bounds[1]),
        ])
}

fn fit_summary(fit: &ScatterFit) -> Vec<Line<'static>> {
    let report = &fit.report;
    let mut lines = vec![Line::raw(format!(
        "r = {:.3} ({})  |  y = {:.4}x + {:.4}",
        report.r,
        report.interpretation(),
        report.regression.slope,
        report.regression.intercept,
    ))];
    if report.truncated {
        lines.push(
            Line::raw(format!(
                "Datasets had different lengths; using the first {} pairs.",
                report.pairs
            ))
            .style(Style::default().fg(Color::DarkGray)),
        );
    }
    lines
}

impl Widget for ScatterScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let summary = self.data.fit.as_ref().map(fit_summary).unwrap_or_default();
        let summary_height = u16::try_from(summary.len()).unwrap_or(u16::MAX);
        let [chart_area, summary_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(summary_height)])
                .areas(area);

        let mut datasets = vec![
            Dataset::default()
                .name("Data")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Cyan))
                .data(&self.data.points),
        ];
        if let Some(fit) = &self.data.fit {
            datasets.push(
                Dataset::default()
                    .name("Regression Line")
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(Color::Red))
                    .data(&fit.line),
            );
        }

        let chart = Chart::new(datasets)
            .block(Block::bordered().title("Scatter Plot"))
            .x_axis(axis(self.data.x_title, self.data.x_bounds))
            .y_axis(axis(self.data.y_title, self.data.y_bounds));

        chart.render(chart_area, buf);
        Paragraph::new(summary).centered().render(summary_area, buf);
    }
}
