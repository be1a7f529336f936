//! # Local Storage
//!
//! The durable key-value store behind the session flag and the worker list.
//! It plays the role the browser's local storage played for the dashboard:
//! string keys, string values, last writer wins.

use std::collections::HashMap;
use std::sync::Mutex;

/// Errors raised by local storage backends
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Trait defining the interface for key-value persistence
///
/// Implementations must make `set` all-or-nothing: a reader never sees a
/// partially written value.
pub trait LocalStorage: Send + Sync {
    /// Retrieve a value by its key
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store a value, overwriting any existing value for the same key
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value by its key
    /// Returns true if the key existed
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}

/// Keys are used as file names by the file backend, so they are restricted
/// to a portable character set in every backend.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// In-memory storage, used by tests and when running without a data directory
#[derive(Default)]
pub struct MemoryLocalStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryLocalStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryLocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(values.remove(key).is_some())
    }
}
