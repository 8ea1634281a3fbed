//! TUI application state and logic

use crate::commands::share_current_game;
use crate::core::{KeyboardState, WORD_LENGTH};
use crate::session::{Availability, Session, SessionError};
use crate::state::GameStatus;
use crate::storage::Storage;
use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Delay between tiles flipping during a reveal
pub const TILE_STEP: Duration = Duration::from_millis(150);
/// Pause after the last tile before input is accepted again
pub const REVEAL_SETTLE: Duration = Duration::from_millis(300);

const TICK_IDLE: Duration = Duration::from_millis(250);
const TICK_REVEALING: Duration = Duration::from_millis(30);
const ROLLOVER_CHECK: Duration = Duration::from_secs(60);
const MAX_MESSAGES: usize = 5;

/// Progress of the row currently being revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub row: usize,
    started: Instant,
}

impl Reveal {
    #[must_use]
    pub const fn new(row: usize, started: Instant) -> Self {
        Self { row, started }
    }

    /// Tiles showing their colour after `elapsed`
    #[must_use]
    pub fn tiles_shown(elapsed: Duration) -> usize {
        let steps = elapsed.as_millis() / TILE_STEP.as_millis();
        (steps as usize).min(WORD_LENGTH)
    }

    /// True once every tile is shown and the settle pause has passed
    #[must_use]
    pub fn is_done(elapsed: Duration) -> bool {
        elapsed >= TILE_STEP * WORD_LENGTH as u32 + REVEAL_SETTLE
    }

    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }
}

/// Popup drawn over the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Won,
    Lost,
    Help,
    Share(String),
    NewWord,
    Complete,
    NotLaunched,
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

/// Application state
pub struct App<S: Storage> {
    pub session: Session<S>,
    pub overlay: Option<Overlay>,
    pub reveal: Option<Reveal>,
    /// Keyboard colours as of the last finished reveal
    pub keyboard: KeyboardState,
    pub messages: Vec<Message>,
    pub now: DateTime<Utc>,
    pub should_quit: bool,
    last_rollover_check: Instant,
}

impl<S: Storage> App<S> {
    #[must_use]
    pub fn new(session: Session<S>, now: DateTime<Utc>, instant: Instant) -> Self {
        let keyboard = session.keyboard();
        let overlay = match session.availability() {
            Availability::BeforeLaunch => Some(Overlay::NotLaunched),
            Availability::Exhausted => Some(Overlay::Complete),
            Availability::Active => match session.state().current_state() {
                GameStatus::Won => Some(Overlay::Won),
                GameStatus::Lost => Some(Overlay::Lost),
                GameStatus::Playing => None,
            },
        };

        let mut app = Self {
            session,
            overlay,
            reveal: None,
            keyboard,
            messages: Vec::new(),
            now,
            should_quit: false,
            last_rollover_check: instant,
        };
        app.add_message(
            "Guess the word in six tries. Press ? for help.",
            MessageStyle::Info,
        );
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Advance timers: reveal pacing, countdown clock and rollover polling
    pub fn tick(&mut self, now: DateTime<Utc>, instant: Instant) {
        self.now = now;

        if let Some(reveal) = self.reveal
            && Reveal::is_done(reveal.elapsed(instant))
        {
            self.finish_reveal();
        }

        if instant.saturating_duration_since(self.last_rollover_check) >= ROLLOVER_CHECK {
            self.last_rollover_check = instant;
            self.check_rollover();
        }
    }

    fn check_rollover(&mut self) {
        if self.session.has_rolled_over(self.now) && self.overlay != Some(Overlay::NewWord) {
            tracing::info!("New word available, prompting to refresh");
            self.overlay = Some(Overlay::NewWord);
        }
    }

    fn finish_reveal(&mut self) {
        self.reveal = None;
        self.session.finish_reveal();
        self.keyboard = self.session.keyboard();

        match self.session.state().current_state() {
            GameStatus::Won => {
                let count = self.session.state().current_guesses().len();
                self.add_message(celebration(count), MessageStyle::Success);
                self.overlay = Some(Overlay::Won);
            }
            GameStatus::Lost => self.overlay = Some(Overlay::Lost),
            GameStatus::Playing => {}
        }
    }

    /// Tiles of row `row` that should show their colour right now
    #[must_use]
    pub fn revealed_tiles(&self, row: usize, instant: Instant) -> usize {
        match self.reveal {
            Some(reveal) if reveal.row == row => Reveal::tiles_shown(reveal.elapsed(instant)),
            _ => WORD_LENGTH,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, instant: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.toggle_sound();
            return;
        }

        match self.overlay.clone() {
            Some(overlay) => self.handle_overlay_key(&overlay, key.code),
            None => self.handle_board_key(key.code, instant),
        }
    }

    fn handle_overlay_key(&mut self, overlay: &Overlay, code: KeyCode) {
        match (overlay, code) {
            (Overlay::NewWord, KeyCode::Enter) => {
                self.session.refresh(self.now);
                self.reveal = None;
                self.keyboard = self.session.keyboard();
                self.overlay = match self.session.availability() {
                    Availability::Exhausted => Some(Overlay::Complete),
                    _ => None,
                };
                self.add_message("A new word is ready!", MessageStyle::Success);
            }
            (Overlay::Won | Overlay::Lost, KeyCode::Char('s' | 'S')) => self.share(),
            (Overlay::Won | Overlay::Lost, KeyCode::Char('r' | 'R')) => self.retry(),
            (Overlay::Complete | Overlay::NotLaunched, KeyCode::Char('q') | KeyCode::Esc) => {
                self.should_quit = true;
            }
            (Overlay::Complete | Overlay::NotLaunched, _) => {}
            (Overlay::NewWord, KeyCode::Esc) => self.should_quit = true,
            (Overlay::NewWord, _) => {}
            _ => self.overlay = None,
        }
    }

    fn handle_board_key(&mut self, code: KeyCode, instant: Instant) {
        let finished = self.session.state().current_state().is_finished();

        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.overlay = Some(Overlay::Help),
            KeyCode::Char('q') if finished => self.should_quit = true,
            KeyCode::Char('r') if finished => self.retry(),
            KeyCode::Char('s') if finished => self.share(),
            KeyCode::Char(c) => {
                self.session.add_letter(c);
            }
            KeyCode::Backspace => {
                self.session.delete_letter();
            }
            KeyCode::Enter => self.submit(instant),
            _ => {}
        }
    }

    fn submit(&mut self, instant: Instant) {
        let row = self.session.state().current_guesses().len();
        match self.session.submit() {
            Ok(_) => self.reveal = Some(Reveal::new(row, instant)),
            Err(SessionError::Busy) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn retry(&mut self) {
        match self.session.retry() {
            Ok(()) => {
                self.overlay = None;
                self.keyboard = self.session.keyboard();
                self.add_message(
                    "Starting over. Streaks are not counted on a retry.",
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn share(&mut self) {
        match share_current_game(&self.session) {
            Ok(text) => self.overlay = Some(Overlay::Share(text)),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn toggle_sound(&mut self) {
        let enabled = self.session.toggle_sound();
        let text = if enabled { "Sound on" } else { "Sound off" };
        self.add_message(text, MessageStyle::Info);
    }
}

fn celebration(guess_count: usize) -> &'static str {
    match guess_count {
        1 => "🎯 HOLE IN ONE!",
        2 => "🔥 MAGNIFICENT!",
        3 => "✨ SPLENDID!",
        4 => "👏 GREAT!",
        5 => "🎉 NICE!",
        _ => "😅 PHEW!",
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Storage>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("TUI exited with error: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: Storage>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        app.tick(Utc::now(), Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app, Instant::now()))?;

        let timeout = if app.reveal.is_some() {
            TICK_REVEALING
        } else {
            TICK_IDLE
        };

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::schedule::Schedule;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn launch() -> DateTime<Utc> {
        "2026-02-08T12:00:00Z".parse().unwrap()
    }

    fn app_at(now: DateTime<Utc>, start: Instant) -> App<MemoryStorage> {
        let session = Session::start(Schedule::embedded().unwrap(), MemoryStorage::new(), now);
        App::new(session, now, start)
    }

    fn press(app: &mut App<MemoryStorage>, code: KeyCode, at: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), at);
    }

    fn type_word(app: &mut App<MemoryStorage>, word: &str, at: Instant) {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch), at);
        }
        press(app, KeyCode::Enter, at);
    }

    #[test]
    fn reveal_timing() {
        assert_eq!(Reveal::tiles_shown(Duration::ZERO), 0);
        assert_eq!(Reveal::tiles_shown(Duration::from_millis(149)), 0);
        assert_eq!(Reveal::tiles_shown(Duration::from_millis(150)), 1);
        assert_eq!(Reveal::tiles_shown(Duration::from_millis(5000)), WORD_LENGTH);
        assert!(!Reveal::is_done(Duration::from_millis(1049)));
        assert!(Reveal::is_done(Duration::from_millis(1050)));
    }

    #[test]
    fn guess_is_revealed_then_unlocks_input() {
        let start = Instant::now();
        let mut app = app_at(launch(), start);

        type_word(&mut app, "spain", start);
        assert!(app.reveal.is_some());
        assert!(app.session.is_revealing());
        assert_eq!(app.revealed_tiles(0, start), 0);
        // Keyboard waits for the reveal to finish
        assert!(app.keyboard.is_empty());

        press(&mut app, KeyCode::Char('a'), start);
        assert_eq!(app.session.input(), "");

        let later = start + Duration::from_secs(2);
        app.tick(launch(), later);
        assert!(app.reveal.is_none());
        assert!(!app.session.is_revealing());
        assert_eq!(app.keyboard.get(b'S'), Some(Outcome::Correct));
        assert_eq!(app.revealed_tiles(0, later), WORD_LENGTH);
    }

    #[test]
    fn win_opens_popup_and_share() {
        let start = Instant::now();
        let mut app = app_at(launch(), start);

        type_word(&mut app, "SPICY", start);
        app.tick(launch(), start + Duration::from_secs(2));
        assert_eq!(app.overlay, Some(Overlay::Won));

        press(&mut app, KeyCode::Char('s'), start);
        let Some(Overlay::Share(text)) = &app.overlay else {
            panic!("expected share overlay, got {:?}", app.overlay);
        };
        assert!(text.contains("Guessed in 1/6"));

        press(&mut app, KeyCode::Enter, start);
        assert_eq!(app.overlay, None);
    }

    #[test]
    fn retry_from_lost_popup() {
        let start = Instant::now();
        let mut app = app_at(launch(), start);

        let mut at = start;
        for word in ["RALPH", "REYVA", "RUGBY", "SCOUT", "BAGEL", "LABOR"] {
            type_word(&mut app, word, at);
            at += Duration::from_secs(2);
            app.tick(launch(), at);
        }
        assert_eq!(app.overlay, Some(Overlay::Lost));

        press(&mut app, KeyCode::Char('r'), at);
        assert_eq!(app.overlay, None);
        assert!(app.session.state().is_retry());
        assert!(app.keyboard.is_empty());
    }

    #[test]
    fn invalid_submission_reports_message() {
        let start = Instant::now();
        let mut app = app_at(launch(), start);

        type_word(&mut app, "SPI", start);
        assert!(app.reveal.is_none());
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn rollover_prompts_then_refreshes() {
        let start = Instant::now();
        let mut app = app_at(launch(), start);

        let next_day = "2026-02-09T12:00:00Z".parse().unwrap();
        app.tick(next_day, start + Duration::from_secs(30));
        assert_eq!(app.overlay, None);

        app.tick(next_day, start + ROLLOVER_CHECK);
        assert_eq!(app.overlay, Some(Overlay::NewWord));

        press(&mut app, KeyCode::Enter, start + ROLLOVER_CHECK);
        assert_eq!(app.overlay, None);
        assert_eq!(app.session.day(), 1);
    }

    #[test]
    fn exhausted_vocabulary_shows_completion() {
        let now = "2026-05-01T12:00:00Z".parse().unwrap();
        let app = app_at(now, Instant::now());
        assert_eq!(app.overlay, Some(Overlay::Complete));
    }

    #[test]
    fn ctrl_s_toggles_sound() {
        let start = Instant::now();
        let mut app = app_at(launch(), start);
        app.handle_key(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            start,
        );
        assert!(!app.session.state().preferences().sound_enabled);
        assert_eq!(app.session.input(), "");
    }
}
