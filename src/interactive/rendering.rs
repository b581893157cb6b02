//! TUI rendering with ratatui
//!
//! Draws the gallows, the reveal buffer and the round status for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{MAX_MISSES, RoundStatus};
use crate::output::formatters::{gallows, letter_list};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word, letters, messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_round_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.state.status() {
        RoundStatus::Lost => Color::Red,
        RoundStatus::Won => Color::Green,
        RoundStatus::NotStarted | RoundStatus::InProgress => Color::White,
    };

    // Rows differ in width, so pad instead of centering to keep the figure aligned
    let lines: Vec<Line> = gallows(app.state.miss_count())
        .into_iter()
        .map(|row| Line::from(format!("   {row}")))
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_round_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Word
            Constraint::Length(4), // Letters
            Constraint::Length(3), // Misses gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_letters(f, app, chunks[1]);
    render_misses(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let word_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut content = match app.state.reveal() {
        Some(reveal) => vec![Line::from(Span::styled(reveal.to_string(), word_style))],
        None => vec![Line::from("No word selected")],
    };

    if app.state.status().is_terminal() {
        content.push(Line::from(vec![
            Span::raw("Word: "),
            Span::styled(
                app.state.target().unwrap_or_default().to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]));
    }

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Tried: "),
            Span::raw(letter_list(&app.state.tried_letters())),
        ]),
        Line::from(vec![
            Span::raw("Wrong: "),
            Span::styled(
                letter_list(&app.state.wrong_letters()),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_misses(f: &mut Frame, app: &App, area: Rect) {
    let misses = app.state.miss_count();
    let percent = u16::from(misses.min(MAX_MISSES)) * 100 / u16::from(MAX_MISSES);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Misses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .percent(percent)
        .label(format!(
            "{misses}/{MAX_MISSES} | {} left",
            app.state.misses_left()
        ));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode() {
        InputMode::Guessing => (
            " Type a letter to guess ",
            "Letters only, one key per guess",
            Color::Yellow,
        ),
        InputMode::RoundOver => (
            " Round over ",
            "Press 'n' for new game or 'q' to quit",
            Color::Green,
        ),
        InputMode::Unavailable => (
            " Cannot start ",
            "No words available. Press 'q' to quit",
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let words = Paragraph::new(format!("Words: {}", app.words.len())).alignment(Alignment::Center);
    f.render_widget(words, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.rounds_played,
        app.stats.rounds_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc / Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app_with(words: &[&str]) -> App {
        let words = words.iter().map(ToString::to_string).collect();
        let mut app = App::new(words, "test list", StdRng::seed_from_u64(0));
        app.new_game();
        app
    }

    #[test]
    fn renders_masked_word() {
        let mut app = app_with(&["kale"]);
        app.handle_letter('a');
        let screen = draw(&app);
        assert!(screen.contains("_ a _ _"));
        assert!(screen.contains("Type a letter to guess"));
    }

    #[test]
    fn renders_gallows_stages() {
        let mut app = app_with(&["kale"]);
        for letter in ['x', 'y', 'z'] {
            app.handle_letter(letter);
        }
        let screen = draw(&app);
        assert!(screen.contains("/|"));
        assert!(screen.contains("3/6"));
    }

    #[test]
    fn renders_round_over_controls() {
        let mut app = app_with(&["nar"]);
        for letter in ['n', 'a', 'r'] {
            app.handle_letter(letter);
        }
        let screen = draw(&app);
        assert!(screen.contains("Press 'n' for new game"));
        assert!(screen.contains("Word: nar"));
    }

    #[test]
    fn renders_unavailable_state() {
        let app = app_with(&[]);
        let screen = draw(&app);
        assert!(screen.contains("No word selected"));
        assert!(screen.contains("Cannot start"));
    }
}
