//! Helpers for driving the full router in tests.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use shared::LoginRequest;
use tower::util::ServiceExt; // for `oneshot`

use crate::config::FarmConfig;
use crate::storage::MemoryLocalStorage;
use crate::{create_router, AppState};

/// App state over in-memory storage with the sample records and no login delay
pub fn setup_test_state() -> AppState {
    let config = FarmConfig {
        login_delay_ms: 0,
        ..Default::default()
    };
    AppState::new(Arc::new(MemoryLocalStorage::new()), &config).unwrap()
}

pub fn setup_test_app(state: AppState) -> Router {
    create_router(state, &FarmConfig::default()).unwrap()
}

/// Router whose session is already logged in as "farmer"
pub async fn setup_logged_in_app() -> (Router, AppState) {
    let state = setup_test_state();
    let response = state
        .session_service
        .login(LoginRequest {
            username: "farmer".to_string(),
            password: "admin".to_string(),
        })
        .await
        .unwrap();
    assert!(response.success);

    (setup_test_app(state.clone()), state)
}

/// Send one request and decode the JSON body (`Value::Null` when empty)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}
