//! Mount-to-layout latency measurement
//!
//! Write-once recorder for the mount and first-layout timestamps. Both are
//! milliseconds from the recorder's creation instant; repeat notifications
//! never overwrite a recorded value.

use tokio::time::Instant;

use crate::models::LatencySample;

/// Records the mount request and first content layout of a run
#[derive(Debug)]
pub struct MeasurementRecorder {
    epoch: Instant,
    start_ms: Option<u64>,
    end_ms: Option<u64>,
}

impl MeasurementRecorder {
    /// Create a recorder whose epoch is the current instant
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            start_ms: None,
            end_ms: None,
        }
    }

    /// Record the instant the panel mount was requested. First write wins.
    pub fn record_mount(&mut self) {
        if self.start_ms.is_none() {
            self.start_ms = Some(self.now_ms());
        }
    }

    /// Record the panel's first content layout.
    ///
    /// Ignored until a mount has been recorded, and on every call after the
    /// first: the end timestamp is write-once per run.
    pub fn record_layout(&mut self) {
        if self.start_ms.is_some() && self.end_ms.is_none() {
            self.end_ms = Some(self.now_ms());
        }
    }

    /// Check whether both timestamps of the sample exist
    pub fn is_ready(&self) -> bool {
        self.start_ms.is_some() && self.end_ms.is_some()
    }

    /// Mount-to-first-layout latency, once the sample is complete
    pub fn elapsed_ms(&self) -> Option<u64> {
        self.sample().map(|sample| sample.elapsed_ms())
    }

    /// The completed sample, once both timestamps exist
    pub fn sample(&self) -> Option<LatencySample> {
        match (self.start_ms, self.end_ms) {
            (Some(start_ms), Some(end_ms)) => Some(LatencySample { start_ms, end_ms }),
            _ => None,
        }
    }

    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

impl Default for MeasurementRecorder {
    fn default() -> Self {
        Self::new()
    }
}
