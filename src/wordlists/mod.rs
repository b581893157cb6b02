//! Word lists for hangman
//!
//! A [`WordSource`] produces the candidate words a round picks its target from.
//! The bundled list is compiled into the binary; any other list is read from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{
    EmbeddedWordSource, FileWordSource, WordListError, WordSource, load_from_file, words_from_str,
};
