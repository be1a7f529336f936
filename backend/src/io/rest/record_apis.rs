//! # REST API for Record Lists
//!
//! One set of handlers serves cattle, expenses, income, milk records and
//! workers. `POST` and `PUT` take the text form the add/edit dialogs submit;
//! `PATCH` takes a typed partial update.

use std::fmt::Debug;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, put},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    Cow, CowForm, ErrorResponse, Expense, ExpenseForm, Income, IncomeForm, MilkRecord,
    MilkRecordForm, MutationOutcome, RecordResponse, Worker, WorkerForm,
};
use tracing::{info, warn};

use super::{error_response, bad_request};
use crate::domain::{FarmDataService, Record, RecordForm, RecordStore, WorkerService};
use crate::AppState;

/// A record kind exposed over REST
pub trait RecordResource: Record + Serialize + Send + Sync + 'static {
    type Form: RecordForm<Target = Self> + DeserializeOwned + Debug + Send + 'static;
    type Store: RecordStore<Self>;

    /// Capitalized name used in response messages
    const LABEL: &'static str;

    fn store(state: &AppState) -> &Self::Store;
}

impl RecordResource for Cow {
    type Form = CowForm;
    type Store = FarmDataService;
    const LABEL: &'static str = "Cow";

    fn store(state: &AppState) -> &FarmDataService {
        &state.farm_data_service
    }
}

impl RecordResource for Expense {
    type Form = ExpenseForm;
    type Store = FarmDataService;
    const LABEL: &'static str = "Expense";

    fn store(state: &AppState) -> &FarmDataService {
        &state.farm_data_service
    }
}

impl RecordResource for Income {
    type Form = IncomeForm;
    type Store = FarmDataService;
    const LABEL: &'static str = "Income";

    fn store(state: &AppState) -> &FarmDataService {
        &state.farm_data_service
    }
}

impl RecordResource for MilkRecord {
    type Form = MilkRecordForm;
    type Store = FarmDataService;
    const LABEL: &'static str = "Milk record";

    fn store(state: &AppState) -> &FarmDataService {
        &state.farm_data_service
    }
}

impl RecordResource for Worker {
    type Form = WorkerForm;
    type Store = WorkerService;
    const LABEL: &'static str = "Worker";

    fn store(state: &AppState) -> &WorkerService {
        &state.worker_service
    }
}

/// Create a router for one record kind
pub fn router<T: RecordResource>() -> Router<AppState>
where
    T::Patch: DeserializeOwned + Debug + Send + 'static,
{
    Router::new()
        .route("/", get(list_records::<T>).post(create_record::<T>))
        .route(
            "/:id",
            put(edit_record::<T>)
                .patch(patch_record::<T>)
                .delete(delete_record::<T>),
        )
}

pub async fn list_records<T: RecordResource>(State(state): State<AppState>) -> Response {
    info!("GET {} list", T::KIND);

    match T::store(&state).list() {
        Ok(list) => (StatusCode::OK, Json(list)).into_response(),
        Err(e) => error_response(&format!("Failed to list {} records", T::KIND), e),
    }
}

pub async fn create_record<T: RecordResource>(
    State(state): State<AppState>,
    Json(form): Json<T::Form>,
) -> Response {
    info!("POST {} - form: {:?}", T::KIND, form);

    let fields = match form.to_fields() {
        Ok(fields) => fields,
        Err(e) => return bad_request(e.to_string()),
    };

    match T::store(&state).add(fields) {
        Ok(record) => {
            let response = RecordResponse {
                record: Some(record),
                outcome: None,
                success_message: format!("{} added successfully", T::LABEL),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response(&format!("Failed to add {}", T::KIND), e),
    }
}

/// Replace every field from the edit dialog
pub async fn edit_record<T: RecordResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<T::Form>,
) -> Response {
    info!("PUT {} {} - form: {:?}", T::KIND, id, form);

    match form.to_patch() {
        Ok(patch) => apply_update::<T>(&state, &id, patch),
        Err(e) => bad_request(e.to_string()),
    }
}

/// Change only the fields present in the body
pub async fn patch_record<T: RecordResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<T::Patch>,
) -> Response
where
    T::Patch: Debug,
{
    info!("PATCH {} {} - patch: {:?}", T::KIND, id, patch);
    apply_update::<T>(&state, &id, patch)
}

pub async fn delete_record<T: RecordResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    info!("DELETE {} {}", T::KIND, id);

    match T::store(&state).delete(&id) {
        Ok(MutationOutcome::NotFound) => not_found::<T>(&id),
        Ok(outcome) => {
            let response: RecordResponse<T> = RecordResponse {
                record: None,
                outcome: Some(outcome),
                success_message: format!("{} deleted successfully", T::LABEL),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(&format!("Failed to delete {}", T::KIND), e),
    }
}

fn apply_update<T: RecordResource>(state: &AppState, id: &str, patch: T::Patch) -> Response {
    match T::store(state).update_record(id, patch) {
        Ok(None) => not_found::<T>(id),
        Ok(Some(record)) => {
            let response = RecordResponse {
                record: Some(record),
                outcome: Some(MutationOutcome::Updated),
                success_message: format!("{} updated successfully", T::LABEL),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(&format!("Failed to update {}", T::KIND), e),
    }
}

fn not_found<T: RecordResource>(id: &str) -> Response {
    warn!("No {} with ID {}", T::KIND, id);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(format!("No {} with ID {}", T::KIND, id))),
    )
        .into_response()
}
