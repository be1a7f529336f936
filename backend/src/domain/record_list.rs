//! Insertion-ordered record lists with add / update / delete.
//!
//! Every entity list in the dashboard, persisted or not, is a
//! [`RecordList`]. The list owns the invariants: ids are unique, order is
//! insertion order, updates keep position, deletes keep the relative order
//! of what remains, and a missing id changes nothing.

use std::collections::HashSet;

use shared::MutationOutcome;
use tracing::warn;

use super::id_generator::IdGenerator;

/// An entity stored in a [`RecordList`]
pub trait Record: Clone {
    /// Everything except the id, supplied on creation
    type Fields;
    /// Partial field set, `None` means "leave as is"
    type Patch;

    /// Short lowercase name used in log lines ("cow", "worker")
    const KIND: &'static str;

    fn from_fields(id: String, fields: Self::Fields) -> Self;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Merge the supplied fields into this record. Must not touch the id.
    fn apply_patch(&mut self, patch: Self::Patch);
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordList<T> {
    records: Vec<T>,
    revision: u64,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            revision: 0,
        }
    }
}

impl<T: Record> RecordList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from existing records, e.g. seed data or a stored list.
    ///
    /// Records repeating an earlier id are kept but given a fresh id.
    pub fn from_records(records: Vec<T>, ids: &IdGenerator) -> Self {
        let mut seen = HashSet::new();
        let mut deduplicated = Vec::with_capacity(records.len());

        for mut record in records {
            if !seen.insert(record.id().to_string()) {
                let mut fresh = ids.next_id();
                while seen.contains(&fresh) {
                    fresh = ids.next_id();
                }
                warn!("Duplicate {} id '{}', reassigned to '{}'", T::KIND, record.id(), fresh);
                seen.insert(fresh.clone());
                record.set_id(fresh);
            }
            deduplicated.push(record);
        }

        Self {
            records: deduplicated,
            revision: 0,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Incremented on every applied mutation. Lets consumers detect change
    /// without comparing contents.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Append a new record with a generated id and return it
    pub fn add(&mut self, ids: &IdGenerator, fields: T::Fields) -> &T {
        let mut id = ids.next_id();
        while self.contains(&id) {
            id = ids.next_id();
        }

        self.records.push(T::from_fields(id, fields));
        self.revision += 1;

        let last = self.records.len() - 1;
        &self.records[last]
    }

    /// Merge `patch` into the record with `id`, in place
    pub fn update(&mut self, id: &str, patch: T::Patch) -> MutationOutcome {
        match self.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                record.apply_patch(patch);
                self.revision += 1;
                MutationOutcome::Updated
            }
            None => MutationOutcome::NotFound,
        }
    }

    /// Remove the record with `id`
    pub fn delete(&mut self, id: &str) -> MutationOutcome {
        match self.records.iter().position(|record| record.id() == id) {
            Some(index) => {
                self.records.remove(index);
                self.revision += 1;
                MutationOutcome::Deleted
            }
            None => MutationOutcome::NotFound,
        }
    }
}
