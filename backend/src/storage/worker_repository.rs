//! # Worker Repository
//!
//! Persists the full worker list as a JSON array under the `workers` key.
//!
//! ```json
//! [{"id":"1700000000000","name":"Kamau","role":"Milker","hoursWorked":8,"wage":2.5,"notes":"","date":"2024-01-01"}]
//! ```
//!
//! There is no version field. A payload that does not parse as the current
//! worker shape is copied to `workers.unreadable` (or `workers.unreadable.N`
//! when earlier payloads are already there) and the list starts empty, so
//! the next save cannot silently destroy it. Numbers stored as `null` read
//! as zero and do not make the list unreadable.

use std::sync::Arc;

use anyhow::Result;
use shared::Worker;
use tracing::{debug, info, warn};

use super::local_storage::LocalStorage;

pub const WORKERS_KEY: &str = "workers";
pub const UNREADABLE_WORKERS_KEY: &str = "workers.unreadable";

#[derive(Clone)]
pub struct WorkerRepository {
    storage: Arc<dyn LocalStorage>,
}

impl WorkerRepository {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    /// Load the worker list, empty if nothing has been stored yet
    pub fn load_workers(&self) -> Result<Vec<Worker>> {
        let Some(payload) = self.storage.get(WORKERS_KEY)? else {
            info!("No stored worker list, starting empty");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Worker>>(&payload) {
            Ok(workers) => {
                info!("Loaded {} workers from local storage", workers.len());
                Ok(workers)
            }
            Err(e) => {
                let key = self.free_unreadable_key()?;
                warn!(
                    "Stored worker list does not match the worker schema ({}); moving it to '{}'",
                    e, key
                );
                self.storage.set(&key, &payload)?;
                self.storage.remove(WORKERS_KEY)?;
                Ok(Vec::new())
            }
        }
    }

    /// First set-aside key not already holding an earlier payload
    fn free_unreadable_key(&self) -> Result<String> {
        let mut key = UNREADABLE_WORKERS_KEY.to_string();
        let mut suffix = 0u32;
        while self.storage.get(&key)?.is_some() {
            suffix += 1;
            key = format!("{}.{}", UNREADABLE_WORKERS_KEY, suffix);
        }
        Ok(key)
    }

    /// Replace the stored worker list
    pub fn save_workers(&self, workers: &[Worker]) -> Result<()> {
        let payload = serde_json::to_string(workers)?;
        self.storage.set(WORKERS_KEY, &payload)?;
        debug!("Saved {} workers to local storage", workers.len());
        Ok(())
    }
}
