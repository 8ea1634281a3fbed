//! In-memory storage backend

use super::{Storage, StorageError};
use std::cell::RefCell;

/// Storage held in process memory
///
/// Used for tests and for sessions that run without a data directory.
#[derive(Debug)]
pub struct MemoryStorage {
    data: RefCell<Option<String>>,
    readable: bool,
    writable: bool,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: RefCell::new(None),
            readable: true,
            writable: true,
        }
    }

    /// Storage pre-filled with a raw record
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            data: RefCell::new(Some(raw.into())),
            readable: true,
            writable: true,
        }
    }

    /// Storage holding `raw` that fails every read but accepts writes
    #[must_use]
    pub fn unreadable(raw: impl Into<String>) -> Self {
        Self {
            data: RefCell::new(Some(raw.into())),
            readable: false,
            writable: true,
        }
    }

    /// Storage that fails every read and write
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            data: RefCell::new(None),
            readable: false,
            writable: false,
        }
    }

    /// Current raw contents
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.data.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn read_raw(&self) -> Result<Option<String>, StorageError> {
        if !self.readable {
            return Err(StorageError::Unavailable("memory storage not readable"));
        }
        Ok(self.data.borrow().clone())
    }

    fn write_raw(&self, data: &str) -> Result<(), StorageError> {
        if !self.writable {
            return Err(StorageError::Unavailable("memory storage not writable"));
        }
        *self.data.borrow_mut() = Some(data.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PlayerState;

    #[test]
    fn empty_storage_reads_none() {
        assert_eq!(MemoryStorage::new().read_raw().unwrap(), None);
    }

    #[test]
    fn write_then_read() {
        let storage = MemoryStorage::new();
        storage.write_raw("{}").unwrap();
        assert_eq!(storage.raw().as_deref(), Some("{}"));
    }

    #[test]
    fn default_storage_is_usable() {
        let storage = MemoryStorage::default();
        storage.write_raw("{}").unwrap();
        assert_eq!(storage.read_raw().unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn unreadable_storage_still_accepts_writes() {
        let storage = MemoryStorage::unreadable("old");
        assert!(storage.read_raw().is_err());
        storage.write_raw("new").unwrap();
        assert_eq!(storage.raw().as_deref(), Some("new"));
    }

    #[test]
    fn corrupt_record_loads_default() {
        let storage = MemoryStorage::with_raw("{oops");
        assert_eq!(storage.load(1), PlayerState::new(1));
    }
}
