//! Main application controller
//!
//! Owns the TUI, the panel, and the benchmark harness, and runs the render
//! loop until the user quits. The benchmark starts as soon as the
//! application does and drives itself; the loop only observes snapshots and
//! forwards quit keys.

use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::screens::{EndedScreen, RunningScreen};
use crate::app::tui::Tui;
use crate::bench::{BenchHarness, BenchState};
use crate::config::HarnessConfig;
use crate::models::RunSummary;
use crate::panel::TuiPanel;
use crate::Result;

/// TUI application controller
pub struct App {
    tui: Tui,
    panel: TuiPanel,
    harness: Option<BenchHarness>,
    running_screen: RunningScreen,
    ended_screen: EndedScreen,
    should_quit: bool,
}

impl App {
    /// Create the application and spawn the benchmark run
    ///
    /// Must be called within a tokio runtime.
    pub fn new() -> Result<Self> {
        let config = HarnessConfig::default();
        let (panel, layout_rx) = TuiPanel::new(config.positions.clone());
        let harness = BenchHarness::spawn(config, panel.clone(), layout_rx)?;

        Ok(Self {
            tui: Tui::new()?,
            panel,
            harness: Some(harness),
            running_screen: RunningScreen::new(),
            ended_screen: EndedScreen::new(),
            should_quit: false,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Run the main application loop until the user quits
    ///
    /// Returns the run summary when a benchmark was spawned; a run still in
    /// flight at quit time is cancelled first.
    pub async fn run(&mut self) -> Result<Option<RunSummary>> {
        while !self.should_quit {
            if let Some(harness) = &self.harness {
                self.running_screen.update(harness.snapshot());
            }
            self.draw()?;
            self.handle_events()?;
        }

        match self.harness.take() {
            Some(mut harness) => {
                harness.cancel();
                Ok(Some(harness.wait().await?))
            }
            None => Ok(None),
        }
    }

    /// Draw the screen for the current benchmark state
    fn draw(&mut self) -> io::Result<()> {
        self.tui.draw(|f| match self.running_screen.state() {
            BenchState::Ended => self.ended_screen.render(f),
            _ => self.running_screen.render(f, &self.panel),
        })
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self.tui.poll_key()? {
            if Self::is_quit_key(key) {
                self.should_quit = true;
            }
        }
        Ok(())
    }

    fn is_quit_key(key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            _ => false,
        }
    }
}
