//! Middleware that turns away requests without a logged-in session.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use tracing::{error, warn};

use crate::domain::LOGIN_PATH;
use crate::AppState;

/// Let the request through only when the session flag is set.
///
/// Otherwise answer 401 and point the client at the login page.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match state.session_service.is_logged_in() {
        Ok(true) => next.run(request).await,
        Ok(false) => {
            warn!("{} {} refused: not logged in", request.method(), request.uri());
            let body = ErrorResponse {
                error: "Login required".to_string(),
                redirect: Some(LOGIN_PATH.to_string()),
            };
            (StatusCode::UNAUTHORIZED, Json(body)).into_response()
        }
        Err(e) => {
            error!("Failed to read session: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to read session")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_utils::{send, setup_test_app, setup_test_state};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_gated_endpoints_refuse_without_session() {
        let app = setup_test_app(setup_test_state());

        for uri in [
            "/api/cattle",
            "/api/expenses",
            "/api/income",
            "/api/milk-records",
            "/api/milk-records/totals?date=2023-12-19",
            "/api/workers",
            "/api/reports",
            "/api/feeds",
        ] {
            let (status, body) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "uri '{}'", uri);
            assert_eq!(body["redirect"], "/login");
        }
    }

    #[tokio::test]
    async fn test_mutations_refused_without_session() {
        let state = setup_test_state();
        let app = setup_test_app(state.clone());

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/expenses",
            Some(json!({"name": "Fuel", "amount": "20", "date": "2024-01-01"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, Method::DELETE, "/api/cattle/1", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        assert_eq!(state.farm_data_service.list::<shared::Expense>().unwrap().records.len(), 4);
        assert_eq!(state.farm_data_service.list::<shared::Cow>().unwrap().records.len(), 3);
    }
}
