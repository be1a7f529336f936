//! Lets the client ask where a path should take it given the current session.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::info;

use super::error_response;
use crate::domain::resolve_route;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    pub path: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/resolve", get(resolve))
}

pub async fn resolve(State(state): State<AppState>, Query(query): Query<ResolveQuery>) -> Response {
    let logged_in = match state.session_service.is_logged_in() {
        Ok(logged_in) => logged_in,
        Err(e) => return error_response("Failed to read session", e),
    };

    let decision = resolve_route(&query.path, logged_in);
    info!("Resolved '{}' (logged in: {}) to {:?}", query.path, logged_in, decision);
    (StatusCode::OK, Json(decision)).into_response()
}
