//! Terminal marker screen
//!
//! A solid red fill that replaces the panel once the run has ended.

use ratatui::{
    style::{Color, Style},
    widgets::Block,
    Frame,
};

/// Ended screen component
#[derive(Debug, Default)]
pub struct EndedScreen;

impl EndedScreen {
    /// Create a new ended screen
    pub fn new() -> Self {
        Self
    }

    /// Fill the whole frame with the terminal marker
    pub fn render(&self, f: &mut Frame) {
        let marker = Block::default().style(Style::default().bg(Color::Red));
        f.render_widget(marker, f.size());
    }
}
