//! One CRUD contract over every record list, whether it lives in the
//! in-memory farm data store or in the persisted worker list.

use anyhow::Result;
use shared::{MutationOutcome, RecordListResponse, Worker};

use super::farm_data_service::FarmDataService;
use super::farm_data_store::FarmRecord;
use super::record_list::Record;
use super::worker_service::WorkerService;

pub trait RecordStore<T: Record>: Send + Sync {
    fn list(&self) -> Result<RecordListResponse<T>>;

    fn get(&self, id: &str) -> Result<Option<T>>;

    fn add(&self, fields: T::Fields) -> Result<T>;

    fn update(&self, id: &str, patch: T::Patch) -> Result<MutationOutcome>;

    /// Update and return the record as it stands afterwards in one step.
    /// `None` when no record has `id`.
    fn update_record(&self, id: &str, patch: T::Patch) -> Result<Option<T>>;

    fn delete(&self, id: &str) -> Result<MutationOutcome>;
}

impl<T: FarmRecord> RecordStore<T> for FarmDataService {
    fn list(&self) -> Result<RecordListResponse<T>> {
        FarmDataService::list::<T>(self)
    }

    fn get(&self, id: &str) -> Result<Option<T>> {
        FarmDataService::get::<T>(self, id)
    }

    fn add(&self, fields: T::Fields) -> Result<T> {
        FarmDataService::add::<T>(self, fields)
    }

    fn update(&self, id: &str, patch: T::Patch) -> Result<MutationOutcome> {
        FarmDataService::update::<T>(self, id, patch)
    }

    fn update_record(&self, id: &str, patch: T::Patch) -> Result<Option<T>> {
        FarmDataService::update_record::<T>(self, id, patch)
    }

    fn delete(&self, id: &str) -> Result<MutationOutcome> {
        FarmDataService::delete::<T>(self, id)
    }
}

impl RecordStore<Worker> for WorkerService {
    fn list(&self) -> Result<RecordListResponse<Worker>> {
        WorkerService::list(self)
    }

    fn get(&self, id: &str) -> Result<Option<Worker>> {
        WorkerService::get(self, id)
    }

    fn add(&self, fields: shared::CreateWorkerRequest) -> Result<Worker> {
        WorkerService::add(self, fields)
    }

    fn update(&self, id: &str, patch: shared::UpdateWorkerRequest) -> Result<MutationOutcome> {
        WorkerService::update(self, id, patch)
    }

    fn update_record(
        &self,
        id: &str,
        patch: shared::UpdateWorkerRequest,
    ) -> Result<Option<Worker>> {
        WorkerService::update_record(self, id, patch)
    }

    fn delete(&self, id: &str) -> Result<MutationOutcome> {
        WorkerService::delete(self, id)
    }
}
