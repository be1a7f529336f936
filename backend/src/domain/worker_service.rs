//! # Worker Service
//!
//! Worker records with the same add / update / delete contract as the farm
//! data store, backed by local storage. The list is loaded once when the
//! service is built. Each applied mutation writes the whole list before the
//! in-memory copy is replaced, so a failed write leaves both unchanged.

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use shared::{CreateWorkerRequest, MutationOutcome, RecordListResponse, UpdateWorkerRequest, Worker};
use tracing::{error, info, warn};

use crate::storage::WorkerRepository;

use super::id_generator::IdGenerator;
use super::record_list::RecordList;

#[derive(Clone)]
pub struct WorkerService {
    workers: Arc<Mutex<RecordList<Worker>>>,
    repository: WorkerRepository,
    ids: Arc<IdGenerator>,
}

impl WorkerService {
    /// Build the service from whatever the repository currently holds
    pub fn load(repository: WorkerRepository, ids: Arc<IdGenerator>) -> Result<Self> {
        let stored = repository.load_workers()?;
        let workers = RecordList::from_records(stored, &ids);
        info!("Worker service ready with {} workers", workers.len());

        Ok(Self {
            workers: Arc::new(Mutex::new(workers)),
            repository,
            ids,
        })
    }

    pub fn list(&self) -> Result<RecordListResponse<Worker>> {
        let workers = self.lock()?;
        Ok(RecordListResponse {
            records: workers.records().to_vec(),
            revision: workers.revision(),
        })
    }

    pub fn get(&self, id: &str) -> Result<Option<Worker>> {
        Ok(self.lock()?.get(id).cloned())
    }

    pub fn add(&self, fields: CreateWorkerRequest) -> Result<Worker> {
        info!("Adding worker: name={}, role={}", fields.name, fields.role);
        let ids = Arc::clone(&self.ids);
        let worker = self.mutate(|workers| {
            let worker = workers.add(&ids, fields).clone();
            (worker, true)
        })?;
        info!("Added worker with ID: {}", worker.id);
        Ok(worker)
    }

    pub fn update(&self, id: &str, patch: UpdateWorkerRequest) -> Result<MutationOutcome> {
        Ok(match self.update_record(id, patch)? {
            Some(_) => MutationOutcome::Updated,
            None => MutationOutcome::NotFound,
        })
    }

    /// Apply `patch` and return the saved worker, `None` when no worker has `id`
    pub fn update_record(&self, id: &str, patch: UpdateWorkerRequest) -> Result<Option<Worker>> {
        let updated = self.mutate(|workers| match workers.update(id, patch) {
            MutationOutcome::NotFound => (None, false),
            _ => (workers.get(id).cloned(), true),
        })?;
        match updated {
            Some(_) => info!("Updated worker with ID: {}", id),
            None => warn!("Cannot update worker: ID {} not found", id),
        }
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<MutationOutcome> {
        let outcome = self.mutate(|workers| {
            let outcome = workers.delete(id);
            (outcome, outcome.is_applied())
        })?;
        match outcome {
            MutationOutcome::NotFound => warn!("Cannot delete worker: ID {} not found", id),
            _ => info!("Deleted worker with ID: {}", id),
        }
        Ok(outcome)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, RecordList<Worker>>> {
        self.workers
            .lock()
            .map_err(|_| anyhow::anyhow!("Worker list lock poisoned"))
    }

    /// Apply `f` to a copy of the list; persist and commit the copy only if
    /// `f` reports a change.
    fn mutate<R>(&self, f: impl FnOnce(&mut RecordList<Worker>) -> (R, bool)) -> Result<R> {
        let mut current = self.lock()?;
        let mut next = current.clone();

        let (result, changed) = f(&mut next);
        if changed {
            if let Err(e) = self.repository.save_workers(next.records()) {
                error!("Failed to persist worker list: {}", e);
                return Err(e).context("Worker list could not be saved; no changes were made");
            }
            *current = next;
        }

        Ok(result)
    }
}
