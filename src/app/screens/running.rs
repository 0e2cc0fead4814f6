//! Running screen
//!
//! Shown for the whole benchmark run: the stack versions, a status line,
//! the latency readout once the measurement is ready, and the sliding panel
//! while it is mounted.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::bench::{BenchSnapshot, BenchState};
use crate::panel::TuiPanel;
use crate::APP_NAME;

const RATATUI_VERSION: &str = "0.26";
const CROSSTERM_VERSION: &str = "0.27";

/// Running screen component
#[derive(Debug, Default)]
pub struct RunningScreen {
    snapshot: BenchSnapshot,
}

impl RunningScreen {
    /// Create a new running screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed snapshot with the latest one from the harness
    pub fn update(&mut self, snapshot: BenchSnapshot) {
        self.snapshot = snapshot;
    }

    /// Lifecycle state currently displayed
    pub fn state(&self) -> BenchState {
        self.snapshot.state
    }

    /// Render the screen, drawing the panel into the remaining space
    pub fn render(&self, f: &mut Frame, panel: &TuiPanel) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // versions
                Constraint::Length(1), // status
                Constraint::Length(2), // measurement
                Constraint::Min(0),    // panel
            ])
            .split(f.size());

        let versions = Paragraph::new(vec![
            Line::from(format!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"))),
            Line::from(format!("ratatui v{}", RATATUI_VERSION)),
            Line::from(format!("crossterm v{}", CROSSTERM_VERSION)),
        ])
        .style(Style::default().fg(Color::White));
        f.render_widget(versions, chunks[0]);

        let status = match self.snapshot.state {
            BenchState::NotStarted => "waiting for mount...".to_string(),
            BenchState::Mounted => {
                format!("cycling positions ({} moves issued)", self.snapshot.moves_issued)
            }
            BenchState::Ended => "ended".to_string(),
        };
        f.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );

        if let Some(elapsed_ms) = self.snapshot.elapsed_ms {
            let measure = Paragraph::new(format!("{}ms", elapsed_ms)).style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
            f.render_widget(measure, chunks[2]);
        }

        panel.render(f, chunks[3]);
    }
}
