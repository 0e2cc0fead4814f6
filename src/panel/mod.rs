//! Panel capability surface
//!
//! The benchmark core drives the panel through a small capability trait so
//! the same harness runs against the real TUI panel or a scripted fake with
//! no rendering. Layout notifications travel one way, from the panel to the
//! harness, over a small bounded channel.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc;

pub mod widget;

pub use widget::TuiPanel;

/// Capacity of the layout notification channel. The notification is
/// meaningful at most once per mount, so a small buffer suffices.
const LAYOUT_CHANNEL_CAPACITY: usize = 4;

/// Operations the benchmark issues against the sliding panel
///
/// Commands are fire-and-forget: a command against an unmounted panel is a
/// silent no-op, never an error.
pub trait PanelProxy: Send {
    /// Make the panel present in the UI tree
    fn mount(&mut self);
    /// Remove the panel from the UI tree
    fn unmount(&mut self);
    /// Slide the panel to the position at `index`. No-op while unmounted.
    fn move_to(&mut self, index: usize);
}

/// Create the one-way channel a panel uses to report its first content layout
pub fn layout_channel() -> (mpsc::Sender<()>, mpsc::Receiver<()>) {
    mpsc::channel(LAYOUT_CHANNEL_CAPACITY)
}

#[derive(Debug, Default)]
struct FakeInner {
    mounted: bool,
    moves: Vec<usize>,
    dropped_moves: usize,
}

/// Scripted panel for exercising the harness without a terminal
///
/// Records every command it receives. Clones share the same recording, so a
/// test can hand one clone to the harness and probe the other.
#[derive(Debug, Clone)]
pub struct FakePanel {
    inner: Arc<Mutex<FakeInner>>,
    layout_tx: Option<mpsc::Sender<()>>,
}

impl FakePanel {
    /// Fake that reports a content layout as soon as it is mounted
    pub fn with_layout_channel() -> (Self, mpsc::Receiver<()>) {
        let (layout_tx, layout_rx) = layout_channel();
        let panel = Self {
            inner: Arc::new(Mutex::new(FakeInner::default())),
            layout_tx: Some(layout_tx),
        };
        (panel, layout_rx)
    }

    /// Fake that never reports a layout on its own
    pub fn silent() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeInner::default())),
            layout_tx: None,
        }
    }

    /// Every move command received while mounted, in order
    pub fn moves(&self) -> Vec<usize> {
        self.lock().moves.clone()
    }

    /// Move commands silently dropped because the panel was unmounted
    pub fn dropped_moves(&self) -> usize {
        self.lock().dropped_moves
    }

    /// Whether the panel is currently mounted
    pub fn is_mounted(&self) -> bool {
        self.lock().mounted
    }

    fn lock(&self) -> MutexGuard<'_, FakeInner> {
        self.inner.lock().expect("fake panel state poisoned")
    }
}

impl PanelProxy for FakePanel {
    fn mount(&mut self) {
        self.lock().mounted = true;
        if let Some(layout_tx) = &self.layout_tx {
            layout_tx.try_send(()).ok();
        }
    }

    fn unmount(&mut self) {
        self.lock().mounted = false;
    }

    fn move_to(&mut self, index: usize) {
        let mut inner = self.lock();
        if inner.mounted {
            inner.moves.push(index);
        } else {
            inner.dropped_moves += 1;
        }
    }
}
