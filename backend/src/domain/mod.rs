//! # Domain Module
//!
//! Business logic for the farm dashboard.
//!
//! ## Module Organization
//!
//! - **record_list / id_generator**: the ordered, revisioned record list
//!   every entity lives in, and the id source it draws from
//! - **record_store**: the CRUD contract the REST layer drives
//! - **farm_data_store / farm_data_service**: cattle, expenses, income and
//!   milk records held in memory for the lifetime of the process
//! - **worker_service**: the worker list, written through to local storage
//!   on every change
//! - **session_service / routing**: login, logout and the route gate
//! - **form_validation**: text forms from the add/edit dialogs into typed
//!   requests
//! - **milk_production / reports / feeds**: read-only views for the
//!   dashboard pages
//!
//! ## Business Rules
//!
//! - Record ids are unique within their list and never reused while the
//!   process runs
//! - Updates and deletes on a missing id change nothing and say so
//! - A worker change that cannot be persisted is not applied

pub mod farm_data_service;
pub mod farm_data_store;
pub mod feeds;
pub mod form_validation;
pub mod id_generator;
pub mod milk_production;
pub mod models;
pub mod record_list;
pub mod record_store;
pub mod reports;
pub mod routing;
pub mod sample_data;
pub mod session_service;
pub mod worker_service;

pub use farm_data_service::*;
pub use farm_data_store::*;
pub use feeds::*;
pub use form_validation::*;
pub use id_generator::*;
pub use milk_production::*;
pub use record_list::*;
pub use record_store::*;
pub use reports::*;
pub use routing::*;
pub use session_service::*;
pub use worker_service::*;
