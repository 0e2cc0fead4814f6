//! Benchmark core
//!
//! Lifecycle state machine, delayed mount scheduling, position sequencing,
//! latency measurement, and the harness task that ties them together.

pub mod harness;
pub mod recorder;
pub mod scheduler;
pub mod sequencer;
pub mod state;

pub use harness::{BenchHarness, BenchSnapshot};
pub use state::BenchState;
