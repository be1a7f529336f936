use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use shared::{LoginRequest, SessionStatus};
use tracing::info;

use super::error_response;
use crate::AppState;

/// Create the session API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

pub async fn get_session(State(state): State<AppState>) -> Response {
    match state.session_service.status() {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err(e) => error_response("Failed to read session", e),
    }
}

/// A wrong password is still a 200; the body says whether it worked
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Response {
    info!("POST /api/session/login - username: {}", request.username);

    match state.session_service.login(request).await {
        Ok(response) => {
            info!("Login result: success={}", response.success);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("Failed to log in", e),
    }
}

pub async fn logout(State(state): State<AppState>) -> Response {
    info!("POST /api/session/logout");

    match state.session_service.logout() {
        Ok(()) => (StatusCode::OK, Json(SessionStatus::default())).into_response(),
        Err(e) => error_response("Failed to log out", e),
    }
}
