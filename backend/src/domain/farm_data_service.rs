use std::sync::{Arc, Mutex};

use anyhow::Result;
use shared::{MutationOutcome, RecordListResponse};
use tracing::{info, warn};

use super::farm_data_store::{FarmDataStore, FarmRecord};

/// Shared handle onto the farm data store.
///
/// Built once at start-up and cloned into every consumer. Clones share the
/// same underlying store.
#[derive(Clone)]
pub struct FarmDataService {
    store: Arc<Mutex<FarmDataStore>>,
}

impl FarmDataService {
    pub fn new(store: FarmDataStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Run a read-only computation against the current store contents
    pub fn read<R>(&self, f: impl FnOnce(&FarmDataStore) -> R) -> Result<R> {
        let store = self
            .store
            .lock()
            .map_err(|_| anyhow::anyhow!("Farm data store lock poisoned"))?;
        Ok(f(&store))
    }

    fn write<R>(&self, f: impl FnOnce(&mut FarmDataStore) -> R) -> Result<R> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| anyhow::anyhow!("Farm data store lock poisoned"))?;
        Ok(f(&mut store))
    }

    /// Current records of one kind with the list revision
    pub fn list<T: FarmRecord>(&self) -> Result<RecordListResponse<T>> {
        self.read(|store| {
            let list = store.list::<T>();
            RecordListResponse {
                records: list.records().to_vec(),
                revision: list.revision(),
            }
        })
    }

    pub fn get<T: FarmRecord>(&self, id: &str) -> Result<Option<T>> {
        self.read(|store| store.list::<T>().get(id).cloned())
    }

    pub fn add<T: FarmRecord>(&self, fields: T::Fields) -> Result<T> {
        let record = self.write(|store| store.add::<T>(fields))?;
        info!("Added {} with ID: {}", T::KIND, record.id());
        Ok(record)
    }

    pub fn update<T: FarmRecord>(&self, id: &str, patch: T::Patch) -> Result<MutationOutcome> {
        Ok(match self.update_record::<T>(id, patch)? {
            Some(_) => MutationOutcome::Updated,
            None => MutationOutcome::NotFound,
        })
    }

    /// Apply `patch` and return the record as it stands afterwards, read
    /// under the same lock. `None` when no record has `id`.
    pub fn update_record<T: FarmRecord>(&self, id: &str, patch: T::Patch) -> Result<Option<T>> {
        let updated = self.write(|store| match store.update::<T>(id, patch) {
            MutationOutcome::NotFound => None,
            _ => store.list::<T>().get(id).cloned(),
        })?;
        match updated {
            Some(_) => info!("Updated {} with ID: {}", T::KIND, id),
            None => warn!("Cannot update {}: ID {} not found", T::KIND, id),
        }
        Ok(updated)
    }

    pub fn delete<T: FarmRecord>(&self, id: &str) -> Result<MutationOutcome> {
        let outcome = self.write(|store| store.delete::<T>(id))?;
        match outcome {
            MutationOutcome::NotFound => warn!("Cannot delete {}: ID {} not found", T::KIND, id),
            _ => info!("Deleted {} with ID: {}", T::KIND, id),
        }
        Ok(outcome)
    }
}
