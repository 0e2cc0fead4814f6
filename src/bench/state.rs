//! Benchmark lifecycle state machine
//!
//! Owns the run's lifecycle and guards its transitions: the mount path moves
//! the run to `Mounted` exactly once, the sequencer completion path moves it
//! to `Ended` exactly once, and nothing transitions out of `Ended`.

use serde::{Deserialize, Serialize};

/// Lifecycle states of a single benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BenchState {
    /// Mount timer armed, panel not yet present
    NotStarted,
    /// Panel mounted, sequencer driving positions
    Mounted,
    /// All passes complete; terminal
    Ended,
}

impl Default for BenchState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Guarded transition owner for the run lifecycle
#[derive(Debug, Default)]
pub struct Lifecycle {
    state: BenchState,
}

impl Lifecycle {
    /// Create a lifecycle in the initial state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state
    pub fn state(&self) -> BenchState {
        self.state
    }

    /// Apply the `NotStarted` -> `Mounted` transition
    ///
    /// Returns whether the transition applied; a request from any other
    /// state is rejected.
    pub fn mount(&mut self) -> bool {
        if self.state == BenchState::NotStarted {
            self.state = BenchState::Mounted;
            true
        } else {
            false
        }
    }

    /// Apply the `Mounted` -> `Ended` transition
    ///
    /// Returns whether the transition applied. `Ended` is terminal.
    pub fn end(&mut self) -> bool {
        if self.state == BenchState::Mounted {
            self.state = BenchState::Ended;
            true
        } else {
            false
        }
    }

    /// Check whether the run has reached the terminal state
    pub fn is_terminal(&self) -> bool {
        self.state == BenchState::Ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_started() {
        let lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.state(), BenchState::NotStarted);
        assert!(!lifecycle.is_terminal());
    }

    #[test]
    fn transitions_are_monotonic_and_apply_once() {
        let mut lifecycle = Lifecycle::new();

        assert!(lifecycle.mount());
        assert_eq!(lifecycle.state(), BenchState::Mounted);
        assert!(!lifecycle.mount());

        assert!(lifecycle.end());
        assert_eq!(lifecycle.state(), BenchState::Ended);
        assert!(!lifecycle.end());
        assert!(lifecycle.is_terminal());
    }

    #[test]
    fn end_requires_mounted() {
        let mut lifecycle = Lifecycle::new();
        assert!(!lifecycle.end());
        assert_eq!(lifecycle.state(), BenchState::NotStarted);
    }

    #[test]
    fn nothing_leaves_the_terminal_state() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.mount();
        lifecycle.end();

        assert!(!lifecycle.mount());
        assert!(!lifecycle.end());
        assert_eq!(lifecycle.state(), BenchState::Ended);
    }
}
