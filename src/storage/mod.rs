//! Persistence contract for the player record
//!
//! Backends only move raw text. Parsing, migration and rollover live in
//! [`PlayerState::restore`], so every backend gets the same recovery rules.
//!
//! `load` never fails: any read error falls back to a fresh state. `save`
//! reports failure, but callers treat it as best-effort and keep playing.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::state::PlayerState;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(&'static str),
}

/// Load/save contract consumed by the session
pub trait Storage {
    /// Read the stored record, `None` if nothing has been saved yet
    ///
    /// # Errors
    /// Returns `StorageError` if the backend cannot be read.
    fn read_raw(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored record
    ///
    /// # Errors
    /// Returns `StorageError` if the backend cannot be written.
    fn write_raw(&self, data: &str) -> Result<(), StorageError>;

    /// Load the player state for `day`, falling back to a fresh one on any error
    fn load(&self, day: i64) -> PlayerState {
        match self.read_raw() {
            Ok(raw) => PlayerState::restore(raw.as_deref(), day),
            Err(e) => {
                tracing::warn!("Could not read saved state, starting fresh: {e}");
                PlayerState::new(day)
            }
        }
    }

    /// Persist the player state
    ///
    /// # Errors
    /// Returns `StorageError` if serialization or the write fails.
    fn save(&self, state: &PlayerState) -> Result<(), StorageError> {
        let json = serde_json::to_string(state)?;
        self.write_raw(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::state::GameStatus;
    use pretty_assertions::assert_eq;

    fn played_state(day: i64) -> PlayerState {
        let target = Word::new("RUGBY").unwrap();
        let mut state = PlayerState::new(day);
        state.submit_guess("RALPH", &target).unwrap();
        state.submit_guess("RUGBY", &target).unwrap();
        state.set_sound_enabled(false);
        state
    }

    #[test]
    fn load_after_save_reproduces_state() {
        let storage = MemoryStorage::new();
        let state = played_state(2);

        storage.save(&state).unwrap();
        assert_eq!(storage.load(state.current_day()), state);
    }

    #[test]
    fn load_on_new_day_keeps_stats_only() {
        let storage = MemoryStorage::new();
        let state = played_state(2);
        storage.save(&state).unwrap();

        let next = storage.load(3);
        assert_eq!(next.current_day(), 3);
        assert!(next.current_guesses().is_empty());
        assert_eq!(next.current_state(), GameStatus::Playing);
        assert_eq!(next.stats(), state.stats());
        assert!(!next.preferences().sound_enabled);
    }

    #[test]
    fn unreadable_backend_falls_back_to_default() {
        let storage = MemoryStorage::unavailable();
        assert_eq!(storage.load(5), PlayerState::new(5));
        assert!(storage.save(&PlayerState::new(5)).is_err());
    }
}
