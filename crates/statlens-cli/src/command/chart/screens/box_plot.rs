use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Paragraph, Widget,
        canvas::{Canvas, Context, Line as CanvasLine, Points},
    },
};
use statlens_stats::box_plot::BoxPlotGeometry;

use crate::command::chart::data::BoxPlotData;

/// Intermediate tick labels closer than this many cells to a boundary tick are hidden.
const MIN_LABEL_GAP: u16 = 4;

const BOX_HALF_HEIGHT: f64 = 0.6;
const CAP_HALF_HEIGHT: f64 = 0.3;

pub struct BoxPlotScreen<'a> {
    plots: &'a [BoxPlotData],
}

impl<'a> BoxPlotScreen<'a> {
    pub fn new(plots: &'a [BoxPlotData]) -> Self {
        Self { plots }
    }
}

impl Widget for BoxPlotScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let areas = Layout::vertical(self.plots.iter().map(|_| Constraint::Fill(1))).split(area);
        for (plot, area) in self.plots.iter().zip(areas.iter()) {
            BoxPlotPanel { plot }.render(*area, buf);
        }
    }
}

struct BoxPlotPanel<'a> {
    plot: &'a BoxPlotData,
}

impl Widget for BoxPlotPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let geometry = &self.plot.geometry;
        let block = Block::bordered().title(format!("Box Plot: {}", self.plot.label));
        let [canvas_area, tick_area, stats_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(block.inner(area));

        let outliers = geometry
            .outliers
            .iter()
            .map(|&v| (geometry.normalize(v), 0.0))
            .collect::<Vec<_>>();
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                paint_box(ctx, geometry);
                ctx.draw(&Points {
                    coords: &outliers,
                    color: Color::Red,
                });
            });

        let ticks = visible_ticks(geometry, tick_area.width);
        let tick_line = Line::raw(tick_label_line(&ticks, tick_area.width))
            .style(Style::default().fg(Color::Gray));

        block.render(area, buf);
        canvas.render(canvas_area, buf);
        Paragraph::new(tick_line).render(tick_area, buf);
        Paragraph::new(stats_line(geometry))
            .centered()
            .render(stats_area, buf);
    }
}

fn draw_line(ctx: &mut Context, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) {
    ctx.draw(&CanvasLine {
        x1,
        y1,
        x2,
        y2,
        color,
    });
}

fn paint_box(ctx: &mut Context, geometry: &BoxPlotGeometry) {
    let x = |v: f64| geometry.normalize(v);
    let (q1, median, q3) = (x(geometry.q1), x(geometry.median), x(geometry.q3));
    let (whisker_min, whisker_max) = (x(geometry.whisker_min), x(geometry.whisker_max));

    // Box
    draw_line(ctx, q1, -BOX_HALF_HEIGHT, q3, -BOX_HALF_HEIGHT, Color::White);
    draw_line(ctx, q1, BOX_HALF_HEIGHT, q3, BOX_HALF_HEIGHT, Color::White);
    draw_line(ctx, q1, -BOX_HALF_HEIGHT, q1, BOX_HALF_HEIGHT, Color::White);
    draw_line(ctx, q3, -BOX_HALF_HEIGHT, q3, BOX_HALF_HEIGHT, Color::White);

    // Median
    draw_line(ctx, median, -BOX_HALF_HEIGHT, median, BOX_HALF_HEIGHT, Color::Yellow);

    // Whiskers and caps
    draw_line(ctx, whisker_min, 0.0, q1, 0.0, Color::White);
    draw_line(ctx, q3, 0.0, whisker_max, 0.0, Color::White);
    for cap in [whisker_min, whisker_max] {
        draw_line(ctx, cap, -CAP_HALF_HEIGHT, cap, CAP_HALF_HEIGHT, Color::White);
    }
}

fn stats_line(geometry: &BoxPlotGeometry) -> Line<'static> {
    let outliers = if geometry.outliers.is_empty() {
        "None".to_owned()
    } else {
        geometry
            .outliers
            .iter()
            .map(|&v| format_tick(v))
            .collect::<Vec<_>>()
            .join(", ")
    };
    Line::raw(format!(
        "Q1 {}  Median {}  Q3 {}  Whiskers {} to {}  Outliers {}",
        format_tick(geometry.q1),
        format_tick(geometry.median),
        format_tick(geometry.q3),
        format_tick(geometry.whisker_min),
        format_tick(geometry.whisker_max),
        outliers,
    ))
}

/// Ticks that get a label, paired with their column in a row `width` cells wide.
///
/// The first and last ticks are always kept. Intermediate ticks that would land
/// within [`MIN_LABEL_GAP`] cells of either of them are dropped.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn visible_ticks(geometry: &BoxPlotGeometry, width: u16) -> Vec<(u16, f64)> {
    let Some(last_col) = width.checked_sub(1) else {
        return vec![];
    };
    let column =
        |tick: f64| (geometry.normalize(tick).clamp(0.0, 1.0) * f64::from(last_col)).round() as u16;

    let last_index = geometry.ticks.len().saturating_sub(1);
    geometry
        .ticks
        .iter()
        .enumerate()
        .filter_map(|(i, &tick)| {
            let col = column(tick);
            let is_boundary = i == 0 || i == last_index;
            let near_boundary = col < MIN_LABEL_GAP || last_col - col < MIN_LABEL_GAP;
            (is_boundary || !near_boundary).then_some((col, tick))
        })
        .collect()
}

/// Lays out tick labels on a single row.
///
/// Labels are centered on their column, except that the first label is
/// left-aligned and the last right-aligned. Boundary labels are placed first;
/// an intermediate label that would touch an already placed one is skipped.
fn tick_label_line(ticks: &[(u16, f64)], width: u16) -> String {
    let width = usize::from(width);
    let mut cells = vec![' '; width];
    let mut occupied = vec![false; width];

    let last_index = ticks.len().saturating_sub(1);
    let mut order = (0..ticks.len()).collect::<Vec<_>>();
    order.sort_by_key(|&i| i != 0 && i != last_index);

    for i in order {
        let (col, tick) = ticks[i];
        let label = format_tick(tick).chars().collect::<Vec<_>>();
        if label.is_empty() || label.len() > width {
            continue;
        }
        let col = usize::from(col);
        let start = if i == 0 {
            col
        } else if i == last_index {
            (col + 1).saturating_sub(label.len())
        } else {
            col.saturating_sub(label.len() / 2)
        }
        .min(width - label.len());
        let end = start + label.len();

        let guard = start.saturating_sub(1)..usize::min(end + 1, width);
        if occupied[guard].iter().any(|&o| o) {
            continue;
        }
        cells[start..end].copy_from_slice(&label);
        occupied[start..end].fill(true);
    }

    cells.into_iter().collect()
}

/// Formats a value with at most two decimals, trimming trailing zeros.
fn format_tick(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        &text
    };
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}
