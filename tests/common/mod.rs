//! Shared test utilities for invoicer
//!
//! - Key and paste event builders for driving the app
//! - TUI terminal testing helpers

pub mod input;
pub mod terminal;
