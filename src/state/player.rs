//! Persisted player state
//!
//! One versioned record per player holding the active day's game, cumulative
//! stats and preferences. The load path never fails: absent or corrupt data
//! yields a fresh state, older versions are coerced forward, and a stale day
//! triggers the rollover transition.

use super::stats::{Preferences, Stats};
use super::{CURRENT_VERSION, MAX_GUESSES};
use crate::core::Word;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Status of the active day's game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True once the game has ended in a win or loss
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// The single persisted record for a player
///
/// Mutated only through the transition methods in the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    #[serde(default)]
    pub(super) version: u32,
    #[serde(default)]
    pub(super) current_day: i64,
    #[serde(default, deserialize_with = "lenient_guesses")]
    pub(super) current_guesses: Vec<Word>,
    #[serde(default)]
    pub(super) current_state: GameStatus,
    #[serde(default)]
    pub(super) is_retry: bool,
    #[serde(default)]
    pub(super) stats: Stats,
    #[serde(default)]
    pub(super) preferences: Preferences,
}

impl PlayerState {
    /// Fresh state for a day
    #[must_use]
    pub fn new(day: i64) -> Self {
        Self {
            version: CURRENT_VERSION,
            current_day: day,
            current_guesses: Vec::new(),
            current_state: GameStatus::Playing,
            is_retry: false,
            stats: Stats::default(),
            preferences: Preferences::default(),
        }
    }

    /// Rebuild a valid state from raw persisted data
    ///
    /// - `None` or unparsable input yields [`PlayerState::new`]
    /// - a version mismatch is coerced to [`CURRENT_VERSION`]
    /// - structural damage (extra guesses, bad distribution) is repaired
    /// - a status that cannot match the guess count discards the active game
    /// - a stored day different from `day` rolls the game over, keeping stats
    #[must_use]
    pub fn restore(raw: Option<&str>, day: i64) -> Self {
        let Some(raw) = raw else {
            tracing::debug!("No saved state, starting fresh for day {day}");
            return Self::new(day);
        };

        let mut state: Self = match serde_json::from_str(raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Discarding unreadable saved state: {e}");
                return Self::new(day);
            }
        };

        if state.version != CURRENT_VERSION {
            tracing::info!(
                "Migrating saved state from version {} to {CURRENT_VERSION}",
                state.version
            );
            state.version = CURRENT_VERSION;
        }

        if state.repair() {
            tracing::warn!("Repaired inconsistent saved state for day {}", state.current_day);
        }

        state.roll_over(day);
        state
    }

    fn repair(&mut self) -> bool {
        let mut changed = self.stats.repair();

        if self.current_guesses.len() > MAX_GUESSES {
            self.current_guesses.truncate(MAX_GUESSES);
            changed = true;
        }

        let count = self.current_guesses.len();
        let consistent = match self.current_state {
            GameStatus::Playing => count < MAX_GUESSES,
            GameStatus::Won => count > 0,
            GameStatus::Lost => count == MAX_GUESSES,
        };
        if !consistent {
            self.discard_game();
            changed = true;
        }

        changed
    }

    /// Check the stored game against the day's target
    ///
    /// Replays the guesses: a game must be won exactly at the first guess equal
    /// to `target`, lost after a full list without it, and playing otherwise.
    /// A game that disagrees is discarded. Returns true if anything changed.
    pub fn reconcile(&mut self, target: &Word) -> bool {
        let count = self.current_guesses.len();
        let expected = match self.current_guesses.iter().position(|g| g == target) {
            Some(i) if i + 1 == count => GameStatus::Won,
            Some(_) => {
                self.discard_game();
                return true;
            }
            None if count >= MAX_GUESSES => GameStatus::Lost,
            None => GameStatus::Playing,
        };

        if expected == self.current_state {
            return false;
        }
        self.discard_game();
        true
    }

    /// Clear the active game after finding it inconsistent
    ///
    /// A game that had already finished was counted in stats, so the replay is
    /// marked as a retry.
    fn discard_game(&mut self) {
        tracing::warn!(
            "Discarding inconsistent game for day {} ({} with {} guesses)",
            self.current_day,
            self.current_state,
            self.current_guesses.len()
        );
        if self.current_state.is_finished() {
            self.is_retry = true;
        }
        self.current_guesses.clear();
        self.current_state = GameStatus::Playing;
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    #[must_use]
    pub const fn current_day(&self) -> i64 {
        self.current_day
    }

    #[must_use]
    pub fn current_guesses(&self) -> &[Word] {
        &self.current_guesses
    }

    #[must_use]
    pub const fn current_state(&self) -> GameStatus {
        self.current_state
    }

    #[must_use]
    pub const fn is_retry(&self) -> bool {
        self.is_retry
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.preferences.sound_enabled = enabled;
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.current_guesses.len())
    }
}

fn lenient_guesses<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Word>, D::Error> {
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|guess| match Word::new(&guess) {
            Ok(word) => Some(word),
            Err(e) => {
                tracing::warn!("Dropping malformed saved guess {guess:?}: {e}");
                None
            }
        })
        .collect())
}
