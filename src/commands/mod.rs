//! Command implementations

pub mod simple;

pub use simple::{PlayerInput, parse_input, run_simple};
