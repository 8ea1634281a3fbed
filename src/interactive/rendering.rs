//! TUI rendering with ratatui
//!
//! Board, keyboard, stats panel and popups for the daily puzzle.

use super::app::{App, Message, MessageStyle, Overlay};
use crate::core::{Outcome, WORD_LENGTH, evaluate};
use crate::schedule::Schedule;
use crate::state::MAX_GUESSES;
use crate::storage::Storage;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::time::Instant;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S: Storage>(f: &mut Frame, app: &App<S>, instant: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Stats and messages
        ])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0], instant);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if let Some(overlay) = &app.overlay {
        render_overlay(f, app, overlay);
    }
}

fn outcome_style(outcome: Option<Outcome>) -> Style {
    match outcome {
        Some(Outcome::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Outcome::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Outcome::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_header<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = &app.session;
    let sound = if session.state().preferences().sound_enabled {
        "🔊"
    } else {
        "🔇"
    };
    let title = format!(
        "🧩 ED'S WORDLE - Day {}/{}  {sound}",
        Schedule::day_number(session.day()).max(0),
        session.schedule().total_words()
    );

    let header = Paragraph::new(title)
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

fn render_game_panel<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect, instant: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_GUESSES as u16 * 2 + 2), // Board
            Constraint::Min(5),                              // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0], instant);
    render_keyboard(f, app, chunks[1]);
}

fn render_board<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect, instant: Instant) {
    let session = &app.session;
    let guesses = session.state().current_guesses();
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let spans: Vec<Span> = if let Some(guess) = guesses.get(row) {
            let shown = app.revealed_tiles(row, instant);
            let evaluation = session.target().map(|target| evaluate(guess, target));
            guess
                .text()
                .chars()
                .enumerate()
                .map(|(i, letter)| {
                    let outcome = evaluation
                        .as_ref()
                        .filter(|_| i < shown)
                        .map(|e| e.at(i));
                    Span::styled(format!(" {letter} "), outcome_style(outcome))
                })
                .collect()
        } else if row == guesses.len() && session.accepts_input() {
            let mut letters: Vec<char> = session.input().chars().collect();
            letters.resize(WORD_LENGTH, '_');
            letters
                .into_iter()
                .map(|c| {
                    Span::styled(
                        format!(" {c} "),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                })
                .collect()
        } else {
            vec![Span::styled(
                " · ".repeat(WORD_LENGTH),
                Style::default().fg(Color::DarkGray),
            )]
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.bytes()
                    .map(|b| {
                        Span::styled(
                            format!(" {} ", char::from(b)),
                            outcome_style(app.keyboard.get(b)),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(14), // Stats
            Constraint::Length(3),  // Countdown
            Constraint::Min(3),     // Messages
        ])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_countdown(f, app, chunks[1]);
    render_messages(f, &app.messages, chunks[2]);
}

fn render_stats<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stats = app.session.state().stats();
    let max = stats.max_bucket().max(1);
    let bar_width = 16;

    let mut lines = vec![
        Line::from(format!(
            "Played {}  Win % {}",
            stats.games_played,
            stats.win_percentage()
        )),
        Line::from(format!(
            "Streak {}  Best {}",
            stats.current_streak, stats.best_streak
        )),
        Line::from(format!(
            "Solved {}/{}",
            stats.words_solved(),
            app.session.schedule().total_words()
        )),
        Line::from(""),
    ];

    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let filled = (count as usize * bar_width / max as usize).max(usize::from(count > 0));
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
            Span::styled(
                "░".repeat(bar_width - filled),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_countdown<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let countdown = app.session.countdown(app.now);
    let paragraph = Paragraph::new(format!("⏳ Next word in {countdown}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, messages: &[Message], area: Rect) {
    let items: Vec<ListItem> = messages
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

    let list = List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_status<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let finished = app.session.state().current_state().is_finished();
    let help_text = if finished {
        "r: Retry | s: Share | q: Quit | ?: Help | Ctrl-S: Sound"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | ?: Help | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

#[allow(clippy::too_many_lines)] // One arm per popup
fn render_overlay<S: Storage>(f: &mut Frame, app: &App<S>, overlay: &Overlay) {
    let session = &app.session;
    let stats = session.state().stats();

    let (title, lines, color): (&str, Vec<Line>, Color) = match overlay {
        Overlay::Won => (
            " 🎉 SOLVED ",
            vec![
                Line::from(format!(
                    "GUESSED IN {}/{MAX_GUESSES}",
                    session.state().current_guesses().len()
                )),
                Line::from(""),
                Line::from("s: Share results | r: Play again | Enter: Close"),
            ],
            Color::Green,
        ),
        Overlay::Lost => (
            " GAME OVER ",
            vec![
                Line::from(format!(
                    "The word was {}",
                    session.target().map_or("?????", |t| t.text())
                )),
                Line::from(""),
                Line::from("r: Retry | s: Share | Enter: Close"),
            ],
            Color::Red,
        ),
        Overlay::Help => (
            " HOW TO PLAY ",
            vec![
                Line::from("Guess the five-letter word in six tries."),
                Line::from(vec![
                    Span::styled(" S ", outcome_style(Some(Outcome::Correct))),
                    Span::raw(" right letter, right spot"),
                ]),
                Line::from(vec![
                    Span::styled(" S ", outcome_style(Some(Outcome::Present))),
                    Span::raw(" right letter, wrong spot"),
                ]),
                Line::from(vec![
                    Span::styled(" S ", outcome_style(Some(Outcome::Absent))),
                    Span::raw(" not in the word"),
                ]),
                Line::from(""),
                Line::from("A new word arrives every day at 6 AM Eastern."),
            ],
            Color::Cyan,
        ),
        Overlay::Share(text) => (
            " SHARE ",
            text.lines().map(|l| Line::from(l.to_string())).collect(),
            Color::Cyan,
        ),
        Overlay::NewWord => (
            " NEW WORD ",
            vec![
                Line::from("A new word is available!"),
                Line::from(""),
                Line::from("Enter: Load it | Esc: Quit"),
            ],
            Color::Yellow,
        ),
        Overlay::Complete => (
            " ALL DONE ",
            vec![
                Line::from(format!(
                    "WORDS SOLVED: {}/{}",
                    stats.words_solved(),
                    session.schedule().total_words()
                )),
                Line::from(format!("BEST STREAK: {}", stats.best_streak)),
                Line::from(""),
                Line::from("q: Quit"),
            ],
            Color::Green,
        ),
        Overlay::NotLaunched => (
            " COMING SOON ",
            vec![
                Line::from("The first word has not been released yet."),
                Line::from(format!("Check back in {}", session.countdown(app.now))),
                Line::from(""),
                Line::from("q: Quit"),
            ],
            Color::Yellow,
        ),
    };

    let area = centered_rect(60, lines.len() as u16 + 2, f.area());
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::storage::MemoryStorage;
    use chrono::{DateTime, Utc};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_header_and_pending_input() {
        let now: DateTime<Utc> = "2026-02-09T12:00:00Z".parse().unwrap();
        let session = Session::start(Schedule::embedded().unwrap(), MemoryStorage::new(), now);
        let instant = Instant::now();
        let mut app = App::new(session, now, instant);
        app.session.add_letter('L');

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app, instant)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("ED'S WORDLE - Day 2/10"));
        assert!(text.contains(" L  _  _  _  _ "));
        // 07:00 local, next word at 06:00 tomorrow
        assert!(text.contains("Next word in 23:00:00"));
    }
}
