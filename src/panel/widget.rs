//! TUI sliding panel
//!
//! Renders the benchmarked panel as a bottom-anchored block whose height is
//! taken from the position list, and reports the first content layout after
//! each mount. The harness task mutates the panel through [`PanelProxy`];
//! the render loop reads it once per frame.

use std::sync::{Arc, Mutex, MutexGuard};

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc;

use crate::panel::PanelProxy;

#[derive(Debug, Default)]
struct PanelState {
    mounted: bool,
    position: usize,
    laid_out: bool,
}

/// Shared handle to the on-screen sliding panel
#[derive(Debug, Clone)]
pub struct TuiPanel {
    state: Arc<Mutex<PanelState>>,
    positions: Vec<u16>,
    layout_tx: mpsc::Sender<()>,
}

impl TuiPanel {
    /// Create a panel over the given position heights, plus the receiving
    /// side of its layout notifications
    pub fn new(positions: Vec<u16>) -> (Self, mpsc::Receiver<()>) {
        let (layout_tx, layout_rx) = super::layout_channel();
        let panel = Self {
            state: Arc::new(Mutex::new(PanelState::default())),
            positions,
            layout_tx,
        };
        (panel, layout_rx)
    }

    /// Current panel height in rows, while mounted
    pub fn current_height(&self) -> Option<u16> {
        let state = self.lock();
        if state.mounted {
            self.positions.get(state.position).copied()
        } else {
            None
        }
    }

    /// Draw the panel into `area`.
    ///
    /// Emits the layout notification the first time the content area is
    /// drawn after a mount. Draws nothing while unmounted.
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let mut state = self.lock();
        if !state.mounted {
            return;
        }

        let Some(height) = self.positions.get(state.position).copied() else {
            return;
        };
        let height = height.min(area.height);

        let panel_area = Rect {
            x: area.x,
            y: area.y + area.height - height,
            width: area.width,
            height,
        };

        let content = Paragraph::new("").style(Style::default().bg(Color::White)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::Gray)),
        );
        f.render_widget(content, panel_area);

        if !state.laid_out {
            state.laid_out = true;
            self.layout_tx.try_send(()).ok();
        }
    }

    fn lock(&self) -> MutexGuard<'_, PanelState> {
        self.state.lock().expect("panel state poisoned")
    }
}

impl PanelProxy for TuiPanel {
    fn mount(&mut self) {
        let mut state = self.lock();
        state.mounted = true;
        state.position = 0;
        state.laid_out = false;
    }

    fn unmount(&mut self) {
        self.lock().mounted = false;
    }

    fn move_to(&mut self, index: usize) {
        let mut state = self.lock();
        if state.mounted {
            state.position = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn layout_is_reported_once_per_mount() {
        let (panel, mut layout_rx) = TuiPanel::new(vec![4, 8]);
        let mut proxy = panel.clone();
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();

        // unmounted: nothing drawn, nothing reported
        terminal.draw(|f| panel.render(f, f.size())).unwrap();
        assert!(layout_rx.try_recv().is_err());

        proxy.mount();
        terminal.draw(|f| panel.render(f, f.size())).unwrap();
        terminal.draw(|f| panel.render(f, f.size())).unwrap();
        assert!(layout_rx.try_recv().is_ok());
        assert!(layout_rx.try_recv().is_err());

        // a fresh mount lays out again
        proxy.unmount();
        proxy.mount();
        terminal.draw(|f| panel.render(f, f.size())).unwrap();
        assert!(layout_rx.try_recv().is_ok());
    }

    #[test]
    fn moves_change_the_height_only_while_mounted() {
        let (panel, _layout_rx) = TuiPanel::new(vec![4, 8, 12]);
        let mut proxy = panel.clone();

        assert_eq!(panel.current_height(), None);
        proxy.move_to(2);
        assert_eq!(panel.current_height(), None);

        proxy.mount();
        assert_eq!(panel.current_height(), Some(4));
        proxy.move_to(2);
        assert_eq!(panel.current_height(), Some(12));

        proxy.unmount();
        assert_eq!(panel.current_height(), None);
    }

    #[test]
    fn mounting_resets_to_the_first_position() {
        let (panel, _layout_rx) = TuiPanel::new(vec![4, 8]);
        let mut proxy = panel.clone();

        proxy.mount();
        proxy.move_to(1);
        proxy.unmount();

        proxy.mount();
        assert_eq!(panel.current_height(), Some(4));
    }
}
