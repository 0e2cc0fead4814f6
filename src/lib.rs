//! panelbench - Sliding Panel Mount Benchmark
//!
//! A TUI harness that mounts a sliding panel after a fixed delay, drives it
//! through a fixed cycle of positions, and displays the latency between the
//! mount request and the panel's first content layout.

use std::fmt;

// Public re-exports
pub mod app;
pub mod bench;
pub mod config;
pub mod models;
pub mod panel;

// Common error types
#[derive(Debug)]
pub enum PanelBenchError {
    /// I/O error from the terminal backend
    IoError(std::io::Error),
    /// Configuration validation error
    ConfigError(String),
    /// Benchmark run task failed or was consumed twice
    HarnessError(String),
}

impl fmt::Display for PanelBenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelBenchError::IoError(err) => write!(f, "I/O error: {}", err),
            PanelBenchError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            PanelBenchError::HarnessError(msg) => write!(f, "Harness error: {}", msg),
        }
    }
}

impl std::error::Error for PanelBenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PanelBenchError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PanelBenchError {
    fn from(err: std::io::Error) -> Self {
        PanelBenchError::IoError(err)
    }
}

/// Result type alias for panelbench operations
pub type Result<T> = std::result::Result<T, PanelBenchError>;

// Common types and constants
pub const APP_NAME: &str = "panelbench";
/// Delay between run start and the panel mount, in milliseconds
pub const MOUNT_DELAY_MS: u64 = 2_000;
/// Interval between sequencer ticks, in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1_000;
/// Number of full traversals of the position list before the run ends
pub const PASS_THRESHOLD: u32 = 4;
/// Ordered panel heights (terminal rows) the sequencer cycles over
pub const PANEL_POSITIONS: [u16; 3] = [6, 12, 18];
