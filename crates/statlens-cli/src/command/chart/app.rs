use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::{
    command::chart::{
        ChartKind,
        data::ChartData,
        screens::{BoxPlotScreen, HistogramScreen, ScatterScreen},
    },
    tui::App,
};

#[derive(Debug)]
pub struct ChartApp {
    data: ChartData,
    kind: ChartKind,
    should_exit: bool,
}

impl ChartApp {
    pub fn new(data: ChartData, kind: ChartKind) -> Self {
        Self {
            data,
            kind,
            should_exit: false,
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('h') => self.kind = ChartKind::Histogram,
            KeyCode::Char('s') => self.kind = ChartKind::Scatter,
            KeyCode::Char('b') => self.kind = ChartKind::BoxPlot,
            _ => {}
        }
    }
}

impl App for ChartApp {
    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            self.handle_key(event.code);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        match self.kind {
            ChartKind::Histogram => {
                frame.render_widget(HistogramScreen::new(&self.data.histogram), main_area);
            }
            ChartKind::Scatter => {
                frame.render_widget(ScatterScreen::new(&self.data.scatter), main_area);
            }
            ChartKind::BoxPlot => {
                frame.render_widget(BoxPlotScreen::new(&self.data.box_plots), main_area);
            }
        }

        let help_text = Text::from(format!(
            "{} | h: Histogram | s: Scatter | b: Box Plot | q/Esc: Quit",
            self.kind
        ))
        .style(Style::default().fg(Color::DarkGray))
        .centered();
        frame.render_widget(help_text, help_area);
    }
}
