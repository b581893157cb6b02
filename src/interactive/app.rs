//! TUI application state and logic

use crate::core::{GuessState, RoundStatus, Statistics, Verdict};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub state: GuessState,
    pub words: Vec<String>,
    pub source: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

/// Which keys the app currently accepts, derived from the round status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// No round could be started; only quitting is possible
    Unavailable,
    /// Letters are forwarded to the round
    Guessing,
    /// Input disabled; end-of-round controls shown
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app; call [`App::new_game`] to start the first round
    #[must_use]
    pub fn new(words: Vec<String>, source: impl Into<String>, rng: StdRng) -> Self {
        Self {
            state: GuessState::new(),
            words,
            source: source.into(),
            messages: vec![Message {
                text: "Welcome! Guess the word one letter at a time.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match self.state.status() {
            RoundStatus::NotStarted => InputMode::Unavailable,
            RoundStatus::InProgress => InputMode::Guessing,
            RoundStatus::Won | RoundStatus::Lost => InputMode::RoundOver,
        }
    }

    pub fn new_game(&mut self) {
        match self.state.start_round(self.words.as_slice(), &mut self.rng) {
            Ok(()) => {
                self.messages.clear();
                self.add_message("New game started! Type a letter.", MessageStyle::Info);
            }
            Err(e) => {
                warn!("Cannot start a round from {}: {e}", self.source);
                self.add_message(
                    &format!("Word list could not be loaded from {}.", self.source),
                    MessageStyle::Error,
                );
                self.add_message(&format!("{e}. Press 'q' to quit."), MessageStyle::Error);
            }
        }
    }

    pub fn handle_letter(&mut self, letter: char) {
        let outcome = self.state.submit_letter(letter);

        match outcome.verdict {
            Verdict::Hit { revealed } => self.add_message(
                &format!("'{letter}' is in the word ({revealed}x)"),
                MessageStyle::Success,
            ),
            Verdict::Miss => self.add_message(
                &format!(
                    "'{letter}' is not in the word, {} misses left",
                    self.state.misses_left()
                ),
                MessageStyle::Error,
            ),
            Verdict::Repeated => {
                self.add_message(&format!("'{letter}' was already tried"), MessageStyle::Info);
            }
            Verdict::Ignored => return,
        }

        let target = self.state.target().unwrap_or_default().to_string();
        match outcome.status {
            RoundStatus::Won => {
                self.stats.record(outcome.status);
                self.add_message(
                    &format!("🎉 Congratulations! You found the word: {target}"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            RoundStatus::Lost => {
                self.stats.record(outcome.status);
                self.add_message(
                    &format!("💀 Game over! The word was: {target}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            RoundStatus::NotStarted | RoundStatus::InProgress => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.input_mode() {
            InputMode::Guessing => match key.code {
                KeyCode::Char(c) if c.is_alphabetic() => self.handle_letter(c),
                KeyCode::Char(_) => {
                    self.add_message("Only letters can be guessed", MessageStyle::Error);
                }
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            InputMode::Unavailable => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
