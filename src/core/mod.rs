//! Core game state for hangman
//!
//! Pure, rendering-agnostic types: the reveal buffer, the round state machine
//! and session statistics. Presentation layers poll these and feed letters back in.

mod reveal;
mod round;
mod stats;

pub use reveal::{DELIMITER, PLACEHOLDER, Reveal, Slot, fold_case};
pub use round::{GuessState, LetterOutcome, MAX_MISSES, RoundError, RoundStatus, Verdict};
pub use stats::Statistics;
