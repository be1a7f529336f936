//! Test utilities for storage-backed tests
//!
//! `TestEnvironment` owns a `TempDir`, so test data is removed even if a
//! test panics.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tempfile::TempDir;

use super::file_storage::FileLocalStorage;
use super::local_storage::LocalStorage;

pub struct TestEnvironment {
    /// Kept alive to prevent cleanup until drop
    _temp_dir: TempDir,
    pub storage: Arc<dyn LocalStorage>,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let storage: Arc<dyn LocalStorage> = Arc::new(FileLocalStorage::new(&base_path)?);

        Ok(Self {
            _temp_dir: temp_dir,
            storage,
            base_path,
        })
    }

    /// A fresh handle onto the same directory, as a restarted process would get
    pub fn reopen_storage(&self) -> Result<Arc<dyn LocalStorage>> {
        Ok(Arc::new(FileLocalStorage::new(&self.base_path)?))
    }
}
