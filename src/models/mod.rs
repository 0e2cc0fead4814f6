//! Data models for measurements and run outcomes

pub mod sample;

pub use sample::{LatencySample, RunSummary};
