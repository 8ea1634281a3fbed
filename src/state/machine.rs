//! State transitions for the active day's game

use super::MAX_GUESSES;
use super::player::{GameStatus, PlayerState};
use crate::core::{Evaluation, Word, WordError, evaluate, is_winning_guess};
use thiserror::Error;

/// Reasons a submission is rejected without touching state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("invalid guess: {0}")]
    InvalidShape(#[from] WordError),

    #[error("game is already {0}")]
    NotPlaying(GameStatus),

    #[error("no guesses left")]
    NoGuessesLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RetryError {
    #[error("retry is only available once the game has ended")]
    StillPlaying,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub guess: Word,
    pub evaluation: Evaluation,
    /// Status after the guess was applied
    pub status: GameStatus,
    /// Number of guesses made so far, including this one
    pub guess_count: usize,
}

impl PlayerState {
    /// Submit raw guess text against today's target
    ///
    /// The text must already be normalized (exactly five `A`-`Z` letters).
    /// Rejected guesses leave the state untouched.
    ///
    /// # Errors
    /// - `SubmitError::InvalidShape` if the text fails shape validation
    /// - `SubmitError::NotPlaying` if the game has already been won or lost
    /// - `SubmitError::NoGuessesLeft` if the guess list is already full
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Word;
    /// use daily_wordle::state::{GameStatus, PlayerState};
    ///
    /// let target = Word::new("SPICY").unwrap();
    /// let mut state = PlayerState::new(0);
    ///
    /// assert!(state.submit_guess("spicy", &target).is_err());
    /// let submission = state.submit_guess("SPICY", &target).unwrap();
    /// assert_eq!(submission.status, GameStatus::Won);
    /// assert_eq!(state.stats().games_won, 1);
    /// ```
    pub fn submit_guess(&mut self, input: &str, target: &Word) -> Result<Submission, SubmitError> {
        self.ensure_playing()?;
        let guess = Word::new(input)?;
        Ok(self.apply_guess(guess, target))
    }

    /// Submit an already-validated word
    ///
    /// # Errors
    /// Same as [`PlayerState::submit_guess`], minus shape validation.
    pub fn submit_word(&mut self, guess: Word, target: &Word) -> Result<Submission, SubmitError> {
        self.ensure_playing()?;
        Ok(self.apply_guess(guess, target))
    }

    fn ensure_playing(&self) -> Result<(), SubmitError> {
        if self.current_state != GameStatus::Playing {
            return Err(SubmitError::NotPlaying(self.current_state));
        }
        if self.current_guesses.len() >= MAX_GUESSES {
            return Err(SubmitError::NoGuessesLeft);
        }
        Ok(())
    }

    fn apply_guess(&mut self, guess: Word, target: &Word) -> Submission {
        let evaluation = evaluate(&guess, target);
        let won = is_winning_guess(&guess, target);

        self.current_guesses.push(guess.clone());
        let guess_count = self.current_guesses.len();

        if won {
            self.stats
                .record_win(self.current_day, guess_count, self.is_retry);
            self.current_state = GameStatus::Won;
            tracing::info!(
                "Day {} won in {guess_count}/{MAX_GUESSES} (retry: {})",
                self.current_day,
                self.is_retry
            );
        } else if guess_count >= MAX_GUESSES {
            self.stats.record_loss();
            self.current_state = GameStatus::Lost;
            tracing::info!("Day {} lost", self.current_day);
        } else {
            tracing::debug!(
                "Guess {guess_count}/{MAX_GUESSES} for day {}: {guess}",
                self.current_day
            );
        }

        Submission {
            guess,
            evaluation,
            status: self.current_state,
            guess_count,
        }
    }

    /// Reset the finished game for another attempt at the same word
    ///
    /// Stats are untouched; later wins on this day do not count toward streaks.
    ///
    /// # Errors
    /// Returns `RetryError::StillPlaying` if the game has not ended.
    pub fn retry(&mut self) -> Result<(), RetryError> {
        if !self.current_state.is_finished() {
            return Err(RetryError::StillPlaying);
        }

        self.current_guesses.clear();
        self.current_state = GameStatus::Playing;
        self.is_retry = true;
        tracing::info!("Retrying day {}", self.current_day);
        Ok(())
    }

    /// Adopt a new day index, discarding the active game
    ///
    /// Returns false (and changes nothing) when `day` is already current.
    pub fn roll_over(&mut self, day: i64) -> bool {
        if day == self.current_day {
            return false;
        }

        tracing::info!("Rolling over from day {} to day {day}", self.current_day);
        self.current_day = day;
        self.current_guesses.clear();
        self.current_state = GameStatus::Playing;
        self.is_retry = false;
        true
    }
}
