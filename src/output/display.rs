//! Display functions for the line-based game mode

use super::formatters::{gallows, letter_list, misses_bar};
use crate::core::{GuessState, MAX_MISSES, RoundStatus, Verdict};
use colored::Colorize;
use std::io::{self, Write};

/// Print the gallows, the reveal buffer and the letters tried so far
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round(out: &mut impl Write, state: &GuessState) -> io::Result<()> {
    writeln!(out)?;
    for row in gallows(state.miss_count()) {
        writeln!(out, "    {}", row.bright_black())?;
    }
    writeln!(out)?;

    if let Some(reveal) = state.reveal() {
        writeln!(out, "  Word:    {}", reveal.to_string().bright_white().bold())?;
    }
    writeln!(
        out,
        "  Misses:  [{}] {}/{MAX_MISSES}",
        misses_bar(state.miss_count()).red(),
        state.miss_count()
    )?;
    writeln!(
        out,
        "  Wrong:   {}",
        letter_list(&state.wrong_letters()).red()
    )?;
    writeln!(out)
}

/// Print a one-line reaction to the last submitted letter
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_verdict(out: &mut impl Write, letter: char, verdict: Verdict) -> io::Result<()> {
    match verdict {
        Verdict::Hit { revealed } => {
            let noun = if revealed == 1 { "position" } else { "positions" };
            writeln!(
                out,
                "{}",
                format!("✓ '{letter}' is in the word ({revealed} {noun})").green()
            )
        }
        Verdict::Miss => writeln!(
            out,
            "{}",
            format!("✗ '{letter}' is not in the word").red()
        ),
        Verdict::Repeated => writeln!(
            out,
            "{}",
            format!("'{letter}' was already tried").yellow()
        ),
        Verdict::Ignored => Ok(()),
    }
}

/// Print the end-of-round banner, if the round is over
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_result(out: &mut impl Write, state: &GuessState) -> io::Result<()> {
    let target = state.target().unwrap_or_default();
    match state.status() {
        RoundStatus::Won => {
            writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
            writeln!(
                out,
                "  {}",
                "🎉 Congratulations! You found the word!".bright_green().bold()
            )?;
            writeln!(out, "  Word: {}", target.bright_yellow().bold())?;
            writeln!(out, "{}", "═".repeat(50).bright_cyan())
        }
        RoundStatus::Lost => {
            writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
            writeln!(out, "  {}", "💀 Game over!".bright_red().bold())?;
            writeln!(out, "  Word: {}", target.bright_yellow().bold())?;
            writeln!(out, "{}", "═".repeat(50).bright_cyan())
        }
        RoundStatus::NotStarted | RoundStatus::InProgress => Ok(()),
    }
}
