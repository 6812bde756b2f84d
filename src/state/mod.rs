//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;

pub use app_state::AppState;
