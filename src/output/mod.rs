//! Terminal output formatting
//!
//! Display utilities for the line-based mode and drawing helpers shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::{print_result, print_round, print_verdict};
