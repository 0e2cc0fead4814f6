//! TUI application shell
//!
//! Terminal management, the controller loop, and the screens that render
//! the benchmark's phases.

pub mod app;
pub mod screens;
pub mod tui;

pub use app::App;
