//! # REST API Interface Layer
//!
//! HTTP endpoints under `/api`.
//!
//! ## Endpoints
//!
//! - `GET /session`, `POST /session/login`, `POST /session/logout`
//! - `GET /routes/resolve?path=`
//! - `/cattle`, `/expenses`, `/income`, `/milk-records`, `/workers`:
//!   `GET /`, `POST /` (form), `PUT /:id` (form), `PATCH /:id`, `DELETE /:id`
//! - `GET /milk-records/totals?date=&year=&month=`
//! - `GET /reports?year=&month=`
//! - `GET /feeds`
//!
//! Everything except the session and route endpoints requires a logged-in
//! session; see [`session_gate`].
//!
//! ## Status Codes
//!
//! - **400**: form validation failed or the query does not make sense
//! - **401**: no session, body carries `redirect: "/login"`
//! - **404**: the record id does not exist
//! - **500**: storage failures

pub mod record_apis;
pub mod report_apis;
pub mod route_apis;
pub mod session_apis;
pub mod session_gate;

#[cfg(test)]
pub mod test_utils;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use tracing::{error, warn};

use crate::domain::FormValidationError;

pub(crate) fn bad_request(message: impl Into<String>) -> Response {
    let message = message.into();
    warn!("Rejected request: {}", message);
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}

/// Map a domain failure to a response. Validation failures are the
/// caller's fault; anything else is ours.
pub(crate) fn error_response(context: &str, e: anyhow::Error) -> Response {
    if let Some(validation) = e.downcast_ref::<FormValidationError>() {
        return bad_request(validation.to_string());
    }

    error!("{}: {:#}", context, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(format!("{}: {}", context, e))),
    )
        .into_response()
}
