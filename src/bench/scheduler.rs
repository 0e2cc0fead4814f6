//! Delayed mount scheduling
//!
//! A one-shot timer raced against run cancellation. Once the delay elapses
//! the scheduler is consumed and can never fire again; once cancelled the
//! timer future is dropped and no side effect ever occurs.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::sleep;

/// One-shot timer that delays the panel mount
#[derive(Debug)]
pub struct MountScheduler {
    delay: Duration,
}

impl MountScheduler {
    /// Create a scheduler with the given mount delay
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Wait out the mount delay, racing it against cancellation.
    ///
    /// Returns `true` when the delay elapsed and the mount should proceed,
    /// `false` when the run was cancelled first. A dropped cancellation
    /// sender counts as cancellation, so a torn-down run never mounts.
    pub async fn wait(self, cancel_rx: &mut oneshot::Receiver<()>) -> bool {
        tokio::select! {
            _ = sleep(self.delay) => true,
            _ = cancel_rx => false,
        }
    }
}
