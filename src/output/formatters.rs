//! Formatting utilities for terminal output

use crate::core::MAX_MISSES;

/// Rows of the gallows drawing
pub const GALLOWS_HEIGHT: usize = 7;

/// Draw the gallows with the figure filled in up to `misses` stages
///
/// Stages, in order: head, body, left arm, right arm, left leg, right leg.
/// The frame is always drawn.
#[must_use]
pub fn gallows(misses: u8) -> [String; GALLOWS_HEIGHT] {
    let part = |stage: u8, c: char| if misses >= stage { c } else { ' ' };

    [
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, 'O')),
        format!(" {}{}{}  |", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!(" {} {}  |", part(5, '/'), part(6, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Format letters as a space-separated list, or a dash when there are none
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Misses drawn as a bar, one cell per allowed miss
#[must_use]
pub fn misses_bar(misses: u8) -> String {
    let max = usize::from(MAX_MISSES);
    create_progress_bar(usize::from(misses), max, max)
}
