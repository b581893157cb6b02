//! Reveal buffer
//!
//! Tracks which characters of the target are currently visible to the player.
//! Spaces are word separators inside a phrase: they (and any other whitespace)
//! are visible from the start and are never guessable.

use std::fmt;

/// Marker shown in place of a letter that has not been guessed yet
pub const PLACEHOLDER: char = '_';

/// Delimiter placed between slots when the buffer is rendered for display
pub const DELIMITER: char = ' ';

/// A single position of the reveal buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Not guessed yet
    Hidden,
    /// Visible character, copied from the target
    Shown(char),
}

impl Slot {
    /// Character to render for this slot
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => PLACEHOLDER,
            Self::Shown(c) => c,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Lowercase a single character for case-insensitive comparison.
///
/// Characters whose lowercase form expands to several code points keep the
/// first one.
#[inline]
#[must_use]
pub fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Per-position visibility of a target word or phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    slots: Vec<Slot>,
}

impl Reveal {
    /// Build a fully masked buffer for `target`, with whitespace pre-revealed
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Reveal;
    ///
    /// let reveal = Reveal::masked("iki kelime");
    /// assert_eq!(reveal.compact(), "___ ______");
    /// assert_eq!(reveal.hidden_count(), 9);
    /// ```
    #[must_use]
    pub fn masked(target: &str) -> Self {
        let slots = target
            .chars()
            .map(|c| if c.is_whitespace() { Slot::Shown(c) } else { Slot::Hidden })
            .collect();
        Self { slots }
    }

    /// Reveal every position of `target` whose character matches `letter`
    ///
    /// `letter` must already be case-folded. Returns how many hidden slots were
    /// uncovered by this call.
    pub fn uncover(&mut self, target: &str, letter: char) -> usize {
        let mut uncovered = 0;
        for (slot, c) in self.slots.iter_mut().zip(target.chars()) {
            if slot.is_hidden() && fold_case(c) == letter {
                *slot = Slot::Shown(c);
                uncovered += 1;
            }
        }
        uncovered
    }

    /// True once no placeholder remains
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.slots.iter().any(|s| s.is_hidden())
    }

    /// Number of positions still showing the placeholder
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_hidden()).count()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Render without delimiters, e.g. `k_l_`
    #[must_use]
    pub fn compact(&self) -> String {
        self.slots.iter().map(|s| s.symbol()).collect()
    }
}

/// Slots separated by [`DELIMITER`], e.g. `k _ l _`
impl fmt::Display for Reveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, "{DELIMITER}")?;
            }
            write!(f, "{}", slot.symbol())?;
        }
        Ok(())
    }
}
