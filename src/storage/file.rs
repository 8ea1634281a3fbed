//! File-based storage backend
//!
//! The record is stored as a single JSON file. Writes go to a temp file first
//! and are moved into place with a rename, so a crash mid-write leaves the
//! previous record intact.

use super::{Storage, StorageError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.json";

/// JSON file storage rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage using `state.json` inside `data_dir`
    ///
    /// The directory is created on first write.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STATE_FILE),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn read_raw(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                tracing::debug!("Loaded state from {}", self.path.display());
                Ok(Some(raw))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_raw(&self, data: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, data)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved state to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::state::PlayerState;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.read_raw().unwrap().is_none());
        assert_eq!(storage.load(0), PlayerState::new(0));
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("data"));

        let target = Word::new("LABOR").unwrap();
        let mut state = PlayerState::new(7);
        state.submit_guess("LEGAL", &target).unwrap();

        storage.save(&state).unwrap();
        assert!(storage.path().exists());
        assert!(!storage.path().with_extension("json.tmp").exists());
        assert_eq!(storage.load(7), state);
    }

    #[test]
    fn corrupt_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        fs::write(storage.path(), "{\"version\": 1, \"currentDay\": ").unwrap();

        assert_eq!(storage.load(3), PlayerState::new(3));
    }

    #[test]
    fn save_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.save(&PlayerState::new(1)).unwrap();
        let mut second = PlayerState::new(2);
        second.set_sound_enabled(false);
        storage.save(&second).unwrap();

        assert_eq!(storage.load(2), second);
    }
}
