//! Screen components
//!
//! One screen per visual phase: the running screen for the whole benchmark
//! and the terminal marker once the run has ended.

pub mod ended;
pub mod running;

pub use ended::EndedScreen;
pub use running::RunningScreen;
