//! Session controller
//!
//! Holds everything a front-end needs between key presses: the schedule, the
//! loaded player state, today's target, the partially typed guess and the
//! reveal flag. The state machine mutates immediately on submit; the host
//! paces the display and calls [`Session::finish_reveal`] when it is done.

use crate::core::{KeyboardState, WORD_LENGTH, Word, keyboard_states};
use crate::schedule::{Countdown, Schedule};
use crate::state::{GameStatus, PlayerState, RetryError, SubmitError, Submission};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a guess is still being revealed")]
    Busy,

    #[error("no word is scheduled for today")]
    NoWord,

    #[error("not enough letters")]
    Incomplete,

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Retry(#[from] RetryError),
}

/// What the display needs after an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub submission: Submission,
    pub keyboard: KeyboardState,
}

/// Where today sits relative to the vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    BeforeLaunch,
    Active,
    Exhausted,
}

pub struct Session<S: Storage> {
    schedule: Schedule,
    storage: S,
    state: PlayerState,
    target: Option<Word>,
    input: String,
    revealing: bool,
    day: i64,
}

impl<S: Storage> Session<S> {
    /// Load the player's state for the day active at `now`
    ///
    /// Nothing is written until the player changes something, so a failed
    /// read never overwrites the stored record.
    #[must_use]
    pub fn start(schedule: Schedule, storage: S, now: DateTime<Utc>) -> Self {
        let day = schedule.day_index(now);
        let mut state = storage.load(day);
        let target = schedule.word_for_day(day).cloned();
        if let Some(target) = &target {
            state.reconcile(target);
        }

        tracing::info!(
            "Session started on day {day} ({} guesses restored, {})",
            state.current_guesses().len(),
            state.current_state()
        );

        Self {
            schedule,
            storage,
            state,
            target,
            input: String::new(),
            revealing: false,
            day,
        }
    }

    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    #[must_use]
    pub const fn state(&self) -> &PlayerState {
        &self.state
    }

    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub const fn day(&self) -> i64 {
        self.day
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.revealing
    }

    #[must_use]
    pub fn availability(&self) -> Availability {
        if self.target.is_some() {
            Availability::Active
        } else if self.day < 0 {
            Availability::BeforeLaunch
        } else {
            Availability::Exhausted
        }
    }

    /// True while letters can be typed and submitted
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        !self.revealing
            && self.target.is_some()
            && self.state.current_state() == GameStatus::Playing
    }

    /// Append a letter to the pending guess
    ///
    /// Ignored (returns false) for non-letters, a full buffer, or when input
    /// is not accepted.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if !self.accepts_input()
            || !letter.is_ascii_alphabetic()
            || self.input.len() >= WORD_LENGTH
        {
            return false;
        }
        self.input.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last letter of the pending guess
    pub fn delete_letter(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.input.pop().is_some()
    }

    /// Submit the pending guess
    ///
    /// On success the state is already updated and saved; the session stays
    /// busy until [`Session::finish_reveal`]. On error nothing changes and the
    /// pending input is kept.
    ///
    /// # Errors
    /// - `SessionError::Busy` while a previous guess is being revealed
    /// - `SessionError::NoWord` when no word is scheduled today
    /// - `SessionError::Incomplete` when fewer than five letters are typed
    /// - `SessionError::Submit` when the state machine rejects the guess
    pub fn submit(&mut self) -> Result<Turn, SessionError> {
        if self.revealing {
            return Err(SessionError::Busy);
        }
        let target = self.target.as_ref().ok_or(SessionError::NoWord)?;
        if self.input.len() != WORD_LENGTH {
            return Err(SessionError::Incomplete);
        }

        let submission = self.state.submit_guess(&self.input, target)?;
        let keyboard = keyboard_states(self.state.current_guesses(), target);

        self.input.clear();
        self.revealing = true;
        self.persist();

        Ok(Turn {
            submission,
            keyboard,
        })
    }

    /// Release the busy flag once the host has shown the last guess
    pub fn finish_reveal(&mut self) {
        self.revealing = false;
    }

    /// Start today's word over after a finished game
    ///
    /// # Errors
    /// Returns `SessionError::Retry` if the game is still in progress.
    pub fn retry(&mut self) -> Result<(), SessionError> {
        if self.revealing {
            return Err(SessionError::Busy);
        }
        self.state.retry()?;
        self.input.clear();
        self.persist();
        Ok(())
    }

    /// Keyboard feedback for the guesses made so far
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        self.target.as_ref().map_or_else(KeyboardState::new, |target| {
            keyboard_states(self.state.current_guesses(), target)
        })
    }

    #[must_use]
    pub fn countdown(&self, now: DateTime<Utc>) -> Countdown {
        self.schedule.time_until_next_rollover(now)
    }

    /// True once `now` falls in a later rollover period than the session's day
    #[must_use]
    pub fn has_rolled_over(&self, now: DateTime<Utc>) -> bool {
        self.schedule.day_index(now) != self.day
    }

    /// Move the session to the day active at `now`
    ///
    /// Applies the rollover transition to the in-memory state, so stats
    /// survive even when storage is unavailable. Returns false when the day
    /// has not changed.
    pub fn refresh(&mut self, now: DateTime<Utc>) -> bool {
        let day = self.schedule.day_index(now);
        if day == self.day {
            return false;
        }

        self.state.roll_over(day);
        self.target = self.schedule.word_for_day(day).cloned();
        self.input.clear();
        self.revealing = false;
        self.day = day;
        self.persist();
        true
    }

    pub fn set_sound(&mut self, enabled: bool) {
        self.state.set_sound_enabled(enabled);
        self.persist();
    }

    /// Flip the sound preference, returning the new value
    pub fn toggle_sound(&mut self) -> bool {
        let enabled = !self.state.preferences().sound_enabled;
        self.set_sound(enabled);
        enabled
    }

    /// Drop the pending guess
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Best-effort save; failures are logged and play continues
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.state) {
            tracing::warn!("Could not save state: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Evaluation, Outcome};
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    // Day 0 word is SPICY, day 1 is LEGAL
    fn launch() -> DateTime<Utc> {
        "2026-02-08T12:00:00Z".parse().unwrap()
    }

    fn next_day() -> DateTime<Utc> {
        "2026-02-09T12:00:00Z".parse().unwrap()
    }

    fn session() -> Session<MemoryStorage> {
        Session::start(Schedule::embedded().unwrap(), MemoryStorage::new(), launch())
    }

    fn type_word(session: &mut Session<MemoryStorage>, word: &str) {
        for ch in word.chars() {
            session.add_letter(ch);
        }
    }

    fn play(session: &mut Session<MemoryStorage>, word: &str) -> Turn {
        type_word(session, word);
        let turn = session.submit().unwrap();
        session.finish_reveal();
        turn
    }

    #[test]
    fn starts_on_todays_word() {
        let session = session();
        assert_eq!(session.day(), 0);
        assert_eq!(session.target().map(Word::text), Some("SPICY"));
        assert_eq!(session.availability(), Availability::Active);
        assert!(session.accepts_input());
    }

    #[test]
    fn input_buffer_editing() {
        let mut session = session();
        assert!(session.add_letter('s'));
        assert!(session.add_letter('P'));
        assert!(!session.add_letter('1'));
        assert_eq!(session.input(), "SP");

        assert!(session.delete_letter());
        assert_eq!(session.input(), "S");
        assert!(session.delete_letter());
        assert!(!session.delete_letter());

        type_word(&mut session, "LABORS");
        assert_eq!(session.input(), "LABOR");
    }

    #[test]
    fn incomplete_guess_is_rejected() {
        let mut session = session();
        type_word(&mut session, "SPI");
        assert_eq!(session.submit(), Err(SessionError::Incomplete));
        assert_eq!(session.input(), "SPI");
        assert!(session.state().current_guesses().is_empty());
    }

    #[test]
    fn submit_saves_and_blocks_until_revealed() {
        let mut session = session();
        type_word(&mut session, "SPAIN");
        let turn = session.submit().unwrap();

        assert_eq!(turn.submission.guess_count, 1);
        assert_eq!(turn.keyboard.get(b'S'), Some(Outcome::Correct));
        assert_eq!(turn.keyboard.get(b'N'), Some(Outcome::Absent));
        assert!(session.input().is_empty());
        assert!(session.is_revealing());

        assert!(!session.add_letter('A'));
        assert_eq!(session.submit(), Err(SessionError::Busy));

        let saved = session.storage.load(0);
        assert_eq!(&saved, session.state());

        session.finish_reveal();
        assert!(session.add_letter('A'));
    }

    #[test]
    fn winning_locks_input_until_retry() {
        let mut session = session();
        let turn = play(&mut session, "SPICY");
        assert_eq!(turn.submission.evaluation, Evaluation::PERFECT);
        assert_eq!(session.state().current_state(), GameStatus::Won);
        assert!(!session.accepts_input());
        assert!(!session.add_letter('A'));

        session.retry().unwrap();
        assert!(session.accepts_input());
        assert!(session.state().is_retry());
        assert!(session.keyboard().is_empty());
    }

    #[test]
    fn retry_while_playing_is_rejected() {
        let mut session = session();
        assert_eq!(
            session.retry(),
            Err(SessionError::Retry(RetryError::StillPlaying))
        );
    }

    #[test]
    fn resumes_saved_game() {
        let storage = MemoryStorage::new();
        let mut first = Session::start(Schedule::embedded().unwrap(), storage, launch());
        play(&mut first, "LEGAL");

        let resumed = Session::start(Schedule::embedded().unwrap(), first.storage, launch());
        assert_eq!(resumed.state().current_guesses().len(), 1);
        assert_eq!(resumed.keyboard().get(b'L'), Some(Outcome::Absent));
    }

    #[test]
    fn rollover_is_detected_and_applied() {
        let mut session = session();
        play(&mut session, "SPICY");
        let stats = session.state().stats().clone();

        assert!(!session.has_rolled_over(launch()));
        assert!(session.has_rolled_over(next_day()));

        assert!(session.refresh(next_day()));
        assert_eq!(session.day(), 1);
        assert_eq!(session.target().map(Word::text), Some("LEGAL"));
        assert_eq!(session.state().current_state(), GameStatus::Playing);
        assert!(session.state().current_guesses().is_empty());
        assert_eq!(session.state().stats(), &stats);

        assert!(!session.refresh(next_day()));
    }

    #[test]
    fn exhausted_vocabulary_has_no_word() {
        let after_end = "2026-03-01T12:00:00Z".parse().unwrap();
        let mut session =
            Session::start(Schedule::embedded().unwrap(), MemoryStorage::new(), after_end);

        assert_eq!(session.availability(), Availability::Exhausted);
        assert!(!session.accepts_input());
        assert_eq!(session.submit(), Err(SessionError::NoWord));
    }

    #[test]
    fn before_launch_has_no_word() {
        let early = "2026-02-01T12:00:00Z".parse().unwrap();
        let session = Session::start(Schedule::embedded().unwrap(), MemoryStorage::new(), early);
        assert_eq!(session.availability(), Availability::BeforeLaunch);
    }

    #[test]
    fn storage_failure_does_not_stop_play() {
        let mut session = Session::start(
            Schedule::embedded().unwrap(),
            MemoryStorage::unavailable(),
            launch(),
        );
        let turn = play(&mut session, "SPICY");
        assert_eq!(turn.submission.status, GameStatus::Won);
    }

    #[test]
    fn start_does_not_overwrite_unreadable_record() {
        let raw = r#"{"version":1,"currentDay":0,"stats":{"gamesPlayed":40}}"#;
        let session = Session::start(
            Schedule::embedded().unwrap(),
            MemoryStorage::unreadable(raw),
            launch(),
        );

        assert_eq!(session.state().stats().games_played, 0);
        assert_eq!(session.storage.raw().as_deref(), Some(raw));
    }

    #[test]
    fn stuck_saved_game_is_playable_again() {
        let raw = r#"{
            "version": 1,
            "currentDay": 0,
            "currentGuesses": ["RALPH", "REYVA", "RUGBY", "SCOUT", "BAGEL", "SPAIN", "SUSHI"],
            "currentState": "playing"
        }"#;
        let mut session = Session::start(
            Schedule::embedded().unwrap(),
            MemoryStorage::with_raw(raw),
            launch(),
        );

        assert!(session.state().current_guesses().is_empty());
        let turn = play(&mut session, "SPICY");
        assert_eq!(turn.submission.status, GameStatus::Won);
    }

    #[test]
    fn saved_win_on_wrong_word_is_discarded() {
        let raw = r#"{"version":1,"currentDay":0,"currentGuesses":["LEGAL"],"currentState":"won"}"#;
        let session = Session::start(
            Schedule::embedded().unwrap(),
            MemoryStorage::with_raw(raw),
            launch(),
        );

        assert_eq!(session.state().current_state(), GameStatus::Playing);
        assert!(session.state().current_guesses().is_empty());
        assert!(session.state().is_retry());
    }

    #[test]
    fn toggle_sound_persists() {
        let mut session = session();
        assert!(!session.toggle_sound());
        assert!(!session.storage.load(0).preferences().sound_enabled);
        assert!(session.toggle_sound());
    }
}
