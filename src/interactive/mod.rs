//! Interactive TUI mode
//!
//! Full-screen terminal front end: keystrokes go to the round, the round state is redrawn.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
