//! Hangman
//!
//! A terminal word-guessing game: a word is picked at random, the player guesses
//! it one letter at a time, and six wrong letters complete the gallows.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GuessState, RoundStatus};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let words = ["nar"];
//! let mut state = GuessState::new();
//! state.start_round(&words, &mut StdRng::seed_from_u64(7)).unwrap();
//!
//! for letter in ['n', 'a', 'r'] {
//!     state.submit_letter(letter);
//! }
//! assert_eq!(state.status(), RoundStatus::Won);
//! ```

// Core game state
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
