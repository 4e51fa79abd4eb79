//! Full-screen chart viewer.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{Frame, Terminal};

use benchplot_core::{ChartRenderer, ChartSpec, PlotError};

use crate::chart::{render_log_plot, LogPlot};
use crate::footer::render_footer;
use crate::keymap::{map_key, KeyAction};

/// Shows one chart at a time and blocks until the user dismisses it.
pub struct ChartViewer {
    tick_rate: Duration,
    show_legend: bool,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            show_legend: true,
        }
    }
}

impl ChartViewer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a key action. Returns `true` when the chart is dismissed.
    pub fn handle_key_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Dismiss => true,
            KeyAction::ToggleLegend => {
                self.show_legend = !self.show_legend;
                false
            }
            KeyAction::None => false,
        }
    }

    /// Draw `plot` with the footer beneath it.
    pub fn draw(&self, frame: &mut Frame, plot: &LogPlot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(2)])
            .split(frame.area());
        render_log_plot(frame, chunks[0], plot, self.show_legend);
        render_footer(frame, chunks[1]);
    }

    /// Set up the terminal for full-screen mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        plot: &LogPlot,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame, plot))?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key_action(map_key(key)) {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn show(&mut self, plot: &LogPlot) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal, plot);
        Self::teardown_terminal(&mut terminal)?;
        result
    }
}

impl ChartRenderer for ChartViewer {
    fn render(&mut self, chart: &ChartSpec) -> Result<(), PlotError> {
        let plot = LogPlot::from_spec(chart);
        if plot.is_empty() {
            tracing::warn!(title = %chart.title, "no positive values to plot");
        }
        tracing::debug!(title = %chart.title, series = plot.series.len(), "showing chart");
        self.show(&plot)
            .map_err(|e| PlotError::Render(format!("{}: {e}", chart.title)))
    }
}
