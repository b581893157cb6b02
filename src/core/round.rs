//! Round state machine
//!
//! A [`GuessState`] moves `NotStarted -> InProgress -> Won | Lost`. Only
//! [`GuessState::start_round`] leaves a terminal state, and it always yields a
//! fresh in-progress round.

use super::reveal::{Reveal, fold_case};
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Incorrect guesses that end the round in a loss
pub const MAX_MISSES: u8 = 6;

/// Errors raised when starting a round
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("word list is empty, cannot start a round")]
    EmptyWordList,
}

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// What a single submission did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Letter occurs in the target; `revealed` positions were uncovered
    Hit { revealed: usize },
    /// Letter does not occur in the target; one miss was counted
    Miss,
    /// Letter had already been tried; nothing changed
    Repeated,
    /// No active round, or the letter is whitespace; nothing changed
    Ignored,
}

/// Result of [`GuessState::submit_letter`], enough for a caller to re-render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterOutcome {
    pub verdict: Verdict,
    pub status: RoundStatus,
    pub reveal: Reveal,
    pub miss_count: u8,
}

/// One play-through: the chosen target and everything guessed against it
#[derive(Debug, Clone)]
struct Round {
    target: String,
    reveal: Reveal,
    tried: FxHashSet<char>,
    misses: u8,
}

impl Round {
    fn new(target: String) -> Self {
        let reveal = Reveal::masked(&target);
        Self {
            target,
            reveal,
            tried: FxHashSet::default(),
            misses: 0,
        }
    }

    fn status(&self) -> RoundStatus {
        if self.reveal.is_complete() {
            RoundStatus::Won
        } else if self.misses >= MAX_MISSES {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    fn apply(&mut self, letter: char) -> Verdict {
        if !self.tried.insert(letter) {
            return Verdict::Repeated;
        }

        let revealed = self.reveal.uncover(&self.target, letter);
        if revealed > 0 {
            Verdict::Hit { revealed }
        } else {
            self.misses += 1;
            Verdict::Miss
        }
    }
}

/// The game core: owns the live round, if any
///
/// # Examples
/// ```
/// use hangman::core::{GuessState, RoundStatus, Verdict};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words = ["kale"];
/// let mut state = GuessState::new();
/// state.start_round(&words, &mut StdRng::seed_from_u64(1)).unwrap();
///
/// let outcome = state.submit_letter('K');
/// assert_eq!(outcome.verdict, Verdict::Hit { revealed: 1 });
/// assert_eq!(outcome.reveal.compact(), "k___");
/// assert_eq!(outcome.status, RoundStatus::InProgress);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GuessState {
    round: Option<Round>,
}

impl GuessState {
    #[must_use]
    pub const fn new() -> Self {
        Self { round: None }
    }

    /// Start a new round with a word chosen uniformly from `words`
    ///
    /// Entries with nothing to guess (empty or whitespace only) are never
    /// chosen, so a started round is always in progress. Any round in progress
    /// is discarded. On error the current state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyWordList`] if `words` has no entry with at
    /// least one guessable letter.
    pub fn start_round<S, R>(&mut self, words: &[S], rng: &mut R) -> Result<(), RoundError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let playable: Vec<&str> = words
            .iter()
            .map(AsRef::as_ref)
            .filter(|w| w.chars().any(|c| !c.is_whitespace()))
            .collect();
        let target = playable
            .choose(rng)
            .ok_or(RoundError::EmptyWordList)?
            .to_string();

        info!(
            "Starting round: {} characters, {} candidates",
            target.chars().count(),
            playable.len()
        );
        self.round = Some(Round::new(target));
        Ok(())
    }

    /// Apply one guessed letter, compared case-insensitively
    ///
    /// Submissions on a round that is not in progress, repeated letters and
    /// whitespace leave the state unchanged.
    pub fn submit_letter(&mut self, letter: char) -> LetterOutcome {
        let letter = fold_case(letter);
        let verdict = match self.round.as_mut() {
            Some(round) if !letter.is_whitespace() && round.status() == RoundStatus::InProgress => {
                round.apply(letter)
            }
            _ => Verdict::Ignored,
        };

        let outcome = LetterOutcome {
            verdict,
            status: self.status(),
            reveal: self.reveal().cloned().unwrap_or_else(|| Reveal::masked("")),
            miss_count: self.miss_count(),
        };
        debug!(
            "Letter {letter:?}: {verdict:?}, status {}, misses {}",
            outcome.status, outcome.miss_count
        );
        outcome
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.round
            .as_ref()
            .map_or(RoundStatus::NotStarted, Round::status)
    }

    /// The chosen word or phrase, once a round has started
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.round.as_ref().map(|r| r.target.as_str())
    }

    #[must_use]
    pub fn reveal(&self) -> Option<&Reveal> {
        self.round.as_ref().map(|r| &r.reveal)
    }

    #[must_use]
    pub fn miss_count(&self) -> u8 {
        self.round.as_ref().map_or(0, |r| r.misses)
    }

    #[must_use]
    pub fn misses_left(&self) -> u8 {
        MAX_MISSES.saturating_sub(self.miss_count())
    }

    /// Every letter submitted this round, sorted
    #[must_use]
    pub fn tried_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .round
            .as_ref()
            .map(|r| r.tried.iter().copied().collect())
            .unwrap_or_default();
        letters.sort_unstable();
        letters
    }

    /// Tried letters that do not occur in the target, sorted
    #[must_use]
    pub fn wrong_letters(&self) -> Vec<char> {
        let Some(round) = self.round.as_ref() else {
            return Vec::new();
        };
        self.tried_letters()
            .into_iter()
            .filter(|&l| !round.target.chars().any(|c| fold_case(c) == l))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn started(word: &str) -> GuessState {
        let mut state = GuessState::new();
        state
            .start_round(&[word], &mut StdRng::seed_from_u64(0))
            .unwrap();
        state
    }

    #[test]
    fn new_state_is_not_started() {
        let state = GuessState::new();
        assert_eq!(state.status(), RoundStatus::NotStarted);
        assert_eq!(state.target(), None);
        assert_eq!(state.miss_count(), 0);
        assert!(state.tried_letters().is_empty());
    }

    #[test]
    fn start_round_rejects_empty_list() {
        let mut state = GuessState::new();
        let words: Vec<String> = Vec::new();
        let result = state.start_round(words.as_slice(), &mut StdRng::seed_from_u64(0));
        assert_eq!(result, Err(RoundError::EmptyWordList));
        assert_eq!(state.status(), RoundStatus::NotStarted);
    }

    #[test]
    fn failed_start_keeps_previous_round() {
        let mut state = started("kale");
        state.submit_letter('k');
        let empty: [&str; 0] = [];
        assert!(state.start_round(&empty, &mut StdRng::seed_from_u64(0)).is_err());
        assert_eq!(state.target(), Some("kale"));
        assert_eq!(state.tried_letters(), vec!['k']);
    }

    #[test]
    fn blank_entries_are_never_chosen() {
        let words = ["", "   ", "nar", "\t"];
        for seed in 0..30 {
            let mut state = GuessState::new();
            state
                .start_round(&words, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert_eq!(state.target(), Some("nar"));
            assert_eq!(state.status(), RoundStatus::InProgress);
        }
    }

    #[test]
    fn only_blank_entries_is_empty_word_list() {
        let mut state = GuessState::new();
        let result = state.start_round(&["", "  "], &mut StdRng::seed_from_u64(0));
        assert_eq!(result, Err(RoundError::EmptyWordList));
        assert_eq!(state.status(), RoundStatus::NotStarted);
    }

    #[test]
    fn start_round_picks_member_of_list() {
        let words = ["elma", "armut", "kiraz", "iki kelime"];
        for seed in 0..50 {
            let mut state = GuessState::new();
            state
                .start_round(&words, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            let target = state.target().unwrap();
            assert!(words.contains(&target), "{target} not in list");
            assert_eq!(state.status(), RoundStatus::InProgress);
        }
    }

    #[test]
    fn start_round_is_reproducible_with_same_seed() {
        let words = ["elma", "armut", "kiraz", "karpuz", "kavun"];
        let mut a = GuessState::new();
        let mut b = GuessState::new();
        a.start_round(&words, &mut StdRng::seed_from_u64(42)).unwrap();
        b.start_round(&words, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.target(), b.target());
    }

    #[test]
    fn initial_reveal_masks_letters_and_shows_spaces() {
        let state = started("iki kelime");
        assert_eq!(state.reveal().unwrap().compact(), "___ ______");
        assert_eq!(state.miss_count(), 0);
    }

    #[test]
    fn restart_resets_round() {
        let mut state = started("kale");
        state.submit_letter('x');
        state.submit_letter('k');
        state
            .start_round(&["nar"], &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(state.target(), Some("nar"));
        assert_eq!(state.miss_count(), 0);
        assert!(state.tried_letters().is_empty());
        assert_eq!(state.reveal().unwrap().compact(), "___");
    }

    #[test]
    fn miss_increments_by_one_and_keeps_reveal() {
        let mut state = started("kale");
        let outcome = state.submit_letter('z');
        assert_eq!(outcome.verdict, Verdict::Miss);
        assert_eq!(outcome.miss_count, 1);
        assert_eq!(outcome.reveal.compact(), "____");
        assert_eq!(outcome.status, RoundStatus::InProgress);
    }

    #[test]
    fn repeated_letter_is_idempotent() {
        let mut state = started("kale");
        state.submit_letter('z');
        state.submit_letter('k');
        let before = state.reveal().cloned();

        let again_miss = state.submit_letter('z');
        let again_hit = state.submit_letter('K');
        assert_eq!(again_miss.verdict, Verdict::Repeated);
        assert_eq!(again_hit.verdict, Verdict::Repeated);
        assert_eq!(state.miss_count(), 1);
        assert_eq!(state.reveal().cloned(), before);
    }

    #[test]
    fn hit_reveals_every_occurrence() {
        let mut state = started("kaplumbağa");
        let outcome = state.submit_letter('a');
        assert_eq!(outcome.verdict, Verdict::Hit { revealed: 3 });
        assert_eq!(outcome.reveal.compact(), "_a_____a_a");
        assert_eq!(outcome.miss_count, 0);
    }

    #[test]
    fn kale_guessed_in_order_is_won() {
        let mut state = started("kale");
        let expected = ["k___", "ka__", "kal_", "kale"];
        for (letter, reveal) in ['k', 'a', 'l', 'e'].into_iter().zip(expected) {
            let outcome = state.submit_letter(letter);
            assert_eq!(outcome.miss_count, 0);
            assert_eq!(outcome.reveal.compact(), reveal);
        }
        assert_eq!(state.status(), RoundStatus::Won);
    }

    #[test]
    fn six_misses_lose_the_round() {
        let mut state = started("kale");
        let letters = ['x', 'y', 'z', 'q', 'w', 'r'];
        for (i, letter) in letters.into_iter().enumerate() {
            let outcome = state.submit_letter(letter);
            assert_eq!(outcome.miss_count as usize, i + 1);
            let expected = if i == 5 {
                RoundStatus::Lost
            } else {
                RoundStatus::InProgress
            };
            assert_eq!(outcome.status, expected);
        }
        assert_eq!(state.reveal().unwrap().compact(), "____");
        assert_eq!(state.misses_left(), 0);
    }

    #[test]
    fn win_with_misses_still_counts_as_won() {
        let mut state = started("nar");
        for letter in ['x', 'y', 'z', 'q', 'w'] {
            state.submit_letter(letter);
        }
        for letter in ['n', 'a', 'r'] {
            state.submit_letter(letter);
        }
        assert_eq!(state.miss_count(), 5);
        assert_eq!(state.status(), RoundStatus::Won);
    }

    #[test]
    fn terminal_round_ignores_further_letters() {
        let mut state = started("kale");
        for letter in ['x', 'y', 'z', 'q', 'w', 'r'] {
            state.submit_letter(letter);
        }
        let outcome = state.submit_letter('k');
        assert_eq!(outcome.verdict, Verdict::Ignored);
        assert_eq!(outcome.status, RoundStatus::Lost);
        assert_eq!(outcome.miss_count, 6);
        assert_eq!(outcome.reveal.compact(), "____");
        assert!(!state.tried_letters().contains(&'k'));
    }

    #[test]
    fn not_started_ignores_letters() {
        let mut state = GuessState::new();
        let outcome = state.submit_letter('a');
        assert_eq!(outcome.verdict, Verdict::Ignored);
        assert_eq!(outcome.status, RoundStatus::NotStarted);
        assert!(outcome.reveal.is_empty());
    }

    #[test]
    fn space_is_never_a_guess() {
        let mut state = started("iki kelime");
        let outcome = state.submit_letter(' ');
        assert_eq!(outcome.verdict, Verdict::Ignored);
        assert_eq!(outcome.miss_count, 0);
        assert_eq!(outcome.reveal.hidden_count(), 9);
        assert!(state.tried_letters().is_empty());
    }

    #[test]
    fn phrase_is_won_without_guessing_space() {
        let mut state = started("iki kelime");
        for letter in ['i', 'k', 'e', 'l', 'm'] {
            state.submit_letter(letter);
        }
        assert_eq!(state.status(), RoundStatus::Won);
        assert_eq!(state.miss_count(), 0);
        assert_eq!(state.reveal().unwrap().to_string(), "i k i   k e l i m e");
    }

    #[test]
    fn uppercase_input_is_stored_lowercase() {
        let mut state = started("kale");
        state.submit_letter('K');
        state.submit_letter('Z');
        assert_eq!(state.tried_letters(), vec!['k', 'z']);
        assert_eq!(state.wrong_letters(), vec!['z']);
    }

    #[test]
    fn status_display() {
        assert_eq!(RoundStatus::Won.to_string(), "won");
        assert_eq!(RoundStatus::NotStarted.to_string(), "not started");
        assert!(RoundStatus::Lost.is_terminal());
        assert!(!RoundStatus::InProgress.is_terminal());
    }
}
