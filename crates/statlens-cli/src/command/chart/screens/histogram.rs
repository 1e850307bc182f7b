use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Direction,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Paragraph, Widget},
};
use statlens_stats::histogram::Histogram;

use crate::command::chart::data::{DATASET_LABELS, HistogramData};

const SERIES_COLORS: [Color; 2] = [Color::Cyan, Color::Magenta];

pub struct HistogramScreen<'a> {
    data: &'a HistogramData,
}

impl<'a> HistogramScreen<'a> {
    pub fn new(data: &'a HistogramData) -> Self {
        Self { data }
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::raw("Histogram")];
        if self.data.histograms.len() > 1 {
            for (label, color) in DATASET_LABELS.into_iter().zip(SERIES_COLORS) {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("■ {label}"),
                    Style::default().fg(color),
                ));
            }
        }
        Line::from(spans)
    }
}

fn bar<'a>(histogram: &Histogram, index: usize, color: Color, labelled: bool) -> Bar<'a> {
    let bin = &histogram.bins[index];
    let label = if labelled { bin.label() } else { String::new() };
    Bar::with_label(label, bin.count)
        .text_value(format!("{}", bin.count))
        .style(Style::default().fg(color))
}

impl Widget for HistogramScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered().title(self.title());

        let histograms = &self.data.histograms;
        let num_bins = self.data.num_bins();
        if num_bins == 0 {
            Paragraph::new("No data").block(block).render(area, buf);
            return;
        }

        let chart = if let [histogram] = histograms.as_slice() {
            let bars = (0..num_bins)
                .map(|idx| bar(histogram, idx, SERIES_COLORS[0], true))
                .collect::<Vec<_>>();
            BarChart::new(bars)
        } else {
            // One group per bin; the bin label sits on the first bar of the group.
            (0..num_bins).fold(BarChart::default().group_gap(1), |chart, idx| {
                let bars = histograms
                    .iter()
                    .zip(SERIES_COLORS)
                    .enumerate()
                    .map(|(series, (histogram, color))| bar(histogram, idx, color, series == 0))
                    .collect::<Vec<_>>();
                chart.data(BarGroup::default().bars(&bars))
            })
        };

        chart
            .block(block)
            .direction(Direction::Horizontal)
            .bar_gap(0)
            .render(area, buf);
    }
}
