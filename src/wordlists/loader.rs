//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while reading a word list
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("word list {} could not be read: {source}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Anything that can produce candidate words for a round
pub trait WordSource {
    /// Load the candidate words, in source order
    ///
    /// An unavailable source yields an empty list; callers must handle it.
    fn load(&self) -> Vec<String>;

    /// Human-readable origin, used in messages
    fn describe(&self) -> String;
}

/// Words read from a line-oriented UTF-8 file
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn load(&self) -> Vec<String> {
        match load_from_file(&self.path) {
            Ok(words) => {
                info!("Loaded {} words from {}", words.len(), self.path.display());
                words
            }
            Err(e) => {
                warn!("{e}");
                Vec::new()
            }
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Words compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedWordSource {
    words: &'static [&'static str],
}

impl EmbeddedWordSource {
    #[must_use]
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }
}

impl Default for EmbeddedWordSource {
    fn default() -> Self {
        Self::new(super::WORDS)
    }
}

impl WordSource for EmbeddedWordSource {
    fn load(&self) -> Vec<String> {
        self.words.iter().map(|&w| w.to_string()).collect()
    }

    fn describe(&self) -> String {
        "embedded word list".to_string()
    }
}

/// Load words from a file
///
/// Each line, trimmed, is one candidate. Blank lines are skipped; nothing else
/// is validated, so duplicates and phrases are kept as-is.
///
/// # Errors
///
/// Returns [`WordListError::ResourceNotFound`] if the file cannot be opened or
/// is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::load_from_file;
///
/// let words = load_from_file("data/tr-wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_str(&content))
}

/// Split in-memory text into candidate words
///
/// # Examples
/// ```
/// use hangman::wordlists::words_from_str;
///
/// let words = words_from_str("elma\n  iki kelime \n\nelma\n");
/// assert_eq!(words, ["elma", "iki kelime", "elma"]);
/// ```
#[must_use]
pub fn words_from_str(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
