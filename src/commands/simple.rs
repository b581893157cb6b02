//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. Input and output are injected so the loop
//! can be driven from tests.

use crate::core::{GuessState, Statistics};
use crate::output::{print_result, print_round, print_verdict};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// What the player typed at the letter prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Letter(char),
    NewRound,
    Quit,
    Invalid,
}

/// Interpret one line of input
///
/// A guess must be exactly one alphabetic character; everything else is a
/// command or invalid.
#[must_use]
pub fn parse_input(line: &str) -> PlayerInput {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "quit" | "exit" => return PlayerInput::Quit,
        "new" => return PlayerInput::NewRound,
        _ => {}
    }

    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => PlayerInput::Letter(c),
        _ => PlayerInput::Invalid,
    }
}

/// Run the simple interactive CLI mode
///
/// Returns the statistics of the finished rounds when the player quits or
/// input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<G, R, W>(
    words: &[String],
    rng: &mut G,
    mut input: R,
    mut out: W,
) -> Result<Statistics>
where
    G: Rng + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║                H A N G M A N                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the word one letter at a time.")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new word\n")?;

    let mut stats = Statistics::default();
    let mut state = GuessState::new();

    if let Err(e) = state.start_round(words, rng) {
        writeln!(out, "{}", format!("❌ {e}").red().bold())?;
        return Ok(stats);
    }

    loop {
        print_round(&mut out, &state)?;

        let Some(line) = read_line(&mut input, &mut out, "Enter a letter")? else {
            break;
        };

        match parse_input(&line) {
            PlayerInput::Quit => break,
            PlayerInput::NewRound => {
                state.start_round(words, rng)?;
                writeln!(out, "\n🔄 New word chosen!")?;
                continue;
            }
            PlayerInput::Invalid => {
                writeln!(out, "{}", "Please enter exactly one letter.".yellow())?;
                continue;
            }
            PlayerInput::Letter(letter) => {
                let outcome = state.submit_letter(letter);
                print_verdict(&mut out, letter, outcome.verdict)?;

                if !outcome.status.is_terminal() {
                    continue;
                }
            }
        }

        stats.record(state.status());
        print_round(&mut out, &state)?;
        print_result(&mut out, &state)?;
        writeln!(
            out,
            "  Rounds: {} | Won: {}\n",
            stats.rounds_played, stats.rounds_won
        )?;

        let again = read_line(&mut input, &mut out, "Play again? (yes/no)")?;
        let again = again.as_deref().unwrap_or_default();
        if !(again.eq_ignore_ascii_case("yes") || again.eq_ignore_ascii_case("y")) {
            break;
        }
        state.start_round(words, rng)?;
        writeln!(out, "\n🔄 New word chosen!")?;
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

/// Prompt and read one line; `None` at end of input
fn read_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
