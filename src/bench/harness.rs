//! Benchmark run harness
//!
//! Spawns the single task that owns a run end to end: delayed mount,
//! position sequencing, latency capture, and terminal-state teardown. All
//! run state is mutated from that one task; the display layer observes it
//! through a watch channel and never feeds anything back.

use chrono::Utc;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::bench::recorder::MeasurementRecorder;
use crate::bench::scheduler::MountScheduler;
use crate::bench::sequencer::{PositionSequencer, Tick};
use crate::bench::state::{BenchState, Lifecycle};
use crate::config::HarnessConfig;
use crate::models::RunSummary;
use crate::panel::PanelProxy;
use crate::{PanelBenchError, Result};

/// Read-only view of a run, published to the display layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchSnapshot {
    /// Current lifecycle state
    pub state: BenchState,
    /// True once both timestamps of the sample exist
    pub measurement_ready: bool,
    /// Mount-to-first-layout latency, present only when ready
    pub elapsed_ms: Option<u64>,
    /// Move commands issued so far
    pub moves_issued: u64,
}

/// Handle to a running benchmark
///
/// Dropping the handle cancels the run, so a torn-down harness never leaves
/// a stale timer mutating run state behind it.
pub struct BenchHarness {
    cancel_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<RunSummary>>,
    snapshot_rx: watch::Receiver<BenchSnapshot>,
}

impl BenchHarness {
    /// Spawn the run task.
    ///
    /// `layout_rx` carries the panel's content-layout notifications; the
    /// harness owns `panel` for the whole run.
    pub fn spawn<P>(config: HarnessConfig, panel: P, layout_rx: mpsc::Receiver<()>) -> Result<Self>
    where
        P: PanelProxy + 'static,
    {
        config.validate()?;

        let (cancel_tx, cancel_rx) = oneshot::channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(BenchSnapshot::default());
        let handle = tokio::spawn(run(config, panel, layout_rx, snapshot_tx, cancel_rx));

        Ok(Self {
            cancel_tx: Some(cancel_tx),
            handle: Some(handle),
            snapshot_rx,
        })
    }

    /// Latest published view of the run
    pub fn snapshot(&self) -> BenchSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Cancel the run. Idempotent; a run that already ended is unaffected.
    pub fn cancel(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            cancel_tx.send(()).ok();
        }
    }

    /// Wait for the run task to finish and return its summary
    pub async fn wait(mut self) -> Result<RunSummary> {
        match self.handle.take() {
            Some(handle) => handle
                .await
                .map_err(|err| PanelBenchError::HarnessError(format!("run task failed: {}", err))),
            None => Err(PanelBenchError::HarnessError(
                "run task already consumed".to_string(),
            )),
        }
    }
}

impl Drop for BenchHarness {
    fn drop(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            cancel_tx.send(()).ok();
        }
    }
}

async fn run<P: PanelProxy>(
    config: HarnessConfig,
    mut panel: P,
    mut layout_rx: mpsc::Receiver<()>,
    snapshot_tx: watch::Sender<BenchSnapshot>,
    mut cancel_rx: oneshot::Receiver<()>,
) -> RunSummary {
    let mut lifecycle = Lifecycle::new();
    let mut recorder = MeasurementRecorder::new();
    let mut moves_issued: u64 = 0;

    let scheduler = MountScheduler::new(config.mount_delay);
    if !scheduler.wait(&mut cancel_rx).await {
        // cancelled before the mount fired: no timestamps, no mount
        return summarize(&lifecycle, &recorder, moves_issued);
    }

    // the start timestamp lands before the mount becomes visible
    recorder.record_mount();
    panel.mount();
    lifecycle.mount();
    publish(&snapshot_tx, &lifecycle, &recorder, moves_issued);

    let mut sequencer = PositionSequencer::new(config.positions.len(), config.pass_threshold);
    // first tick lands one full interval after the mount
    let mut ticker = interval_at(Instant::now() + config.tick_interval, config.tick_interval);

    loop {
        tokio::select! {
            _ = &mut cancel_rx => {
                panel.unmount();
                break;
            }
            Some(()) = layout_rx.recv() => {
                recorder.record_layout();
                publish(&snapshot_tx, &lifecycle, &recorder, moves_issued);
            }
            _ = ticker.tick() => {
                match sequencer.on_tick() {
                    Tick::Move(index) => {
                        panel.move_to(index);
                        moves_issued += 1;
                        publish(&snapshot_tx, &lifecycle, &recorder, moves_issued);
                    }
                    Tick::Complete => {
                        lifecycle.end();
                        panel.unmount();
                        publish(&snapshot_tx, &lifecycle, &recorder, moves_issued);
                        break;
                    }
                }
            }
        }
    }

    summarize(&lifecycle, &recorder, moves_issued)
}

fn publish(
    snapshot_tx: &watch::Sender<BenchSnapshot>,
    lifecycle: &Lifecycle,
    recorder: &MeasurementRecorder,
    moves_issued: u64,
) {
    snapshot_tx
        .send(BenchSnapshot {
            state: lifecycle.state(),
            measurement_ready: recorder.is_ready(),
            elapsed_ms: recorder.elapsed_ms(),
            moves_issued,
        })
        .ok();
}

fn summarize(lifecycle: &Lifecycle, recorder: &MeasurementRecorder, moves_issued: u64) -> RunSummary {
    RunSummary {
        completed_at: Utc::now(),
        final_state: lifecycle.state(),
        moves_issued,
        sample: recorder.sample(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_snapshot_shows_nothing() {
        let snapshot = BenchSnapshot::default();
        assert_eq!(snapshot.state, BenchState::NotStarted);
        assert!(!snapshot.measurement_ready);
        assert_eq!(snapshot.elapsed_ms, None);
        assert_eq!(snapshot.moves_issued, 0);
    }
}
