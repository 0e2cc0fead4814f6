//! Harness configuration
//!
//! Fixed timing and sequencing parameters for a benchmark run. These are
//! compile-time constants surfaced as a struct so the core can be exercised
//! with different geometries in tests.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    PanelBenchError, Result, MOUNT_DELAY_MS, PANEL_POSITIONS, PASS_THRESHOLD, TICK_INTERVAL_MS,
};

/// Timing and sequencing parameters for a single benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Delay between run start and the panel mount
    pub mount_delay: Duration,
    /// Interval between sequencer ticks
    pub tick_interval: Duration,
    /// Number of full traversals of the position list before the run ends
    pub pass_threshold: u32,
    /// Ordered panel heights (terminal rows) the sequencer cycles over
    pub positions: Vec<u16>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            mount_delay: Duration::from_millis(MOUNT_DELAY_MS),
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            pass_threshold: PASS_THRESHOLD,
            positions: PANEL_POSITIONS.to_vec(),
        }
    }
}

impl HarnessConfig {
    /// Create a configuration with the fixed default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of move commands a run issues before self-terminating
    pub fn total_moves(&self) -> u64 {
        self.positions.len() as u64 * u64::from(self.pass_threshold)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.positions.is_empty() {
            return Err(PanelBenchError::ConfigError(
                "Position list must contain at least one position".to_string(),
            ));
        }

        if self.pass_threshold == 0 {
            return Err(PanelBenchError::ConfigError(
                "Pass threshold must be greater than 0".to_string(),
            ));
        }

        if self.tick_interval.is_zero() {
            return Err(PanelBenchError::ConfigError(
                "Tick interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
