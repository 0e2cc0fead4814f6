//! Measurement and run outcome models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bench::state::BenchState;

/// A completed mount-to-first-layout latency sample
///
/// Both timestamps are milliseconds from the run's measurement epoch. A
/// sample only exists once both have been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencySample {
    /// Instant the panel mount was requested
    pub start_ms: u64,
    /// Instant the panel first reported a content layout
    pub end_ms: u64,
}

impl LatencySample {
    /// Latency between the mount request and the first content layout
    pub fn elapsed_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }
}

/// Final outcome of a benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Wall-clock time the run finished or was cancelled
    pub completed_at: DateTime<Utc>,
    /// Lifecycle state the run finished in
    pub final_state: BenchState,
    /// Number of move commands issued to the panel
    pub moves_issued: u64,
    /// Latency sample, present only when the panel reported a layout
    pub sample: Option<LatencySample>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_end_minus_start() {
        let sample = LatencySample {
            start_ms: 2000,
            end_ms: 2137,
        };
        assert_eq!(sample.elapsed_ms(), 137);
    }
}
