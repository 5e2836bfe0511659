//! Integration tests for invoicer
//!
//! These tests drive the app and the binary the way a user would.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod form_flow;
pub mod pdf_export;
