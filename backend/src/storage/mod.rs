//! # Storage Module
//!
//! Durable state for the farm dashboard. Only two things are persisted:
//! the session flag with its display name, and the worker list. Cattle,
//! expenses, income and milk records live in memory for the process
//! lifetime.
//!
//! Everything sits on the [`LocalStorage`] key-value trait so the domain
//! layer never touches the file system directly.

pub mod file_storage;
pub mod local_storage;
pub mod session_repository;
pub mod worker_repository;

#[cfg(test)]
pub mod test_utils;

pub use file_storage::FileLocalStorage;
pub use local_storage::{LocalStorage, MemoryLocalStorage, StorageError};
pub use session_repository::SessionRepository;
pub use worker_repository::WorkerRepository;
