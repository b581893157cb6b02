//! Hangman - CLI
//!
//! Word-guessing game with TUI and plain text modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    interactive::{App, run_tui},
    wordlists::{EmbeddedWordSource, FileWordSource, WordSource},
};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, bundled Turkish list) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for word selection (random when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Resolve the -w flag to a word source
fn word_source(wordlist: &str) -> Box<dyn WordSource> {
    match wordlist {
        "embedded" => Box::new(EmbeddedWordSource::default()),
        path => Box::new(FileWordSource::new(path)),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let source = word_source(&cli.wordlist);
    let words = source.load();
    info!("{} candidate words from {}", words.len(), source.describe());

    let mut rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(words, source.describe(), rng)),
        Commands::Simple => {
            let stdin = io::stdin();
            let stats = run_simple(&words, &mut rng, stdin.lock(), io::stdout())?;
            info!(
                "Session finished: {} played, {} won",
                stats.rounds_played, stats.rounds_won
            );
            Ok(())
        }
    }
}
