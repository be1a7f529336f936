//! # File Local Storage
//!
//! Stores each key as its own file under `{data_directory}/local_storage/`.
//!
//! ```text
//! data/
//! ├── farm_config.yaml
//! └── local_storage/
//!     ├── isLoggedIn
//!     ├── username
//!     └── workers        ← JSON array of worker records
//! ```
//!
//! Writes go to a temp file first and are renamed into place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::local_storage::{validate_key, LocalStorage, StorageError};

const STORAGE_DIRECTORY: &str = "local_storage";

/// File-backed local storage rooted in the data directory
#[derive(Clone)]
pub struct FileLocalStorage {
    directory: PathBuf,
}

impl FileLocalStorage {
    /// Open (creating if needed) the storage directory inside `data_directory`
    pub fn new<P: AsRef<Path>>(data_directory: P) -> Result<Self, StorageError> {
        let directory = data_directory.as_ref().join(STORAGE_DIRECTORY);

        if !directory.exists() {
            fs::create_dir_all(&directory)?;
            info!("Created local storage directory: {}", directory.display());
        }

        Ok(Self { directory })
    }

    /// Directory holding the key files
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.directory.join(key))
    }
}

impl LocalStorage for FileLocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;

        // Use atomic write pattern: write to temp file, then rename.
        // Keys never start with '.', so the temp name cannot shadow a key.
        let temp_path = self.directory.join(format!(".{}.tmp", key));
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved key '{}' ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let path = self.key_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
