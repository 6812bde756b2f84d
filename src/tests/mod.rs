//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the full TUI through a TestBackend,
//! one module per user story.
