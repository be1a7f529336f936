//! # Farm Dashboard Backend
//!
//! All non-UI logic for the farm dashboard.
//!
//! ## Architecture
//!
//! ```text
//! UI (dashboard pages)
//!     ↓
//! IO Layer (REST API, session gate)
//!     ↓
//! Domain Layer (record lists, session, reports)
//!     ↓
//! Storage Layer (local key-value storage)
//! ```
//!
//! Cattle, expenses, income and milk records live in memory for the
//! lifetime of the process. Workers and the login session are kept in
//! local storage under the data directory.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use shared::{Cow, Expense, Income, MilkRecord, Worker};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::FarmConfig;
use crate::domain::{
    FarmDataService, FarmDataStore, IdGenerator, MilkProductionService, ReportService,
    SessionService, StaticPasswordVerifier, WorkerService,
};
use crate::io::rest::{record_apis, report_apis, route_apis, session_apis, session_gate};
use crate::storage::{FileLocalStorage, LocalStorage, SessionRepository, WorkerRepository};

/// Services shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub farm_data_service: FarmDataService,
    pub worker_service: WorkerService,
    pub session_service: SessionService,
    pub milk_production_service: MilkProductionService,
    pub report_service: ReportService,
}

impl AppState {
    /// Wire up the services over the given local storage
    pub fn new(storage: Arc<dyn LocalStorage>, config: &FarmConfig) -> Result<Self> {
        let ids = Arc::new(IdGenerator::new());

        let store = if config.seed_sample_data {
            FarmDataStore::with_sample_data(Arc::clone(&ids))
        } else {
            FarmDataStore::new(Arc::clone(&ids))
        };
        let farm_data_service = FarmDataService::new(store);

        let worker_service = WorkerService::load(WorkerRepository::new(Arc::clone(&storage)), ids)?;

        let session_service = SessionService::new(
            SessionRepository::new(storage),
            Arc::new(StaticPasswordVerifier::new(config.login_password.clone())),
            config.login_delay(),
        );

        Ok(Self {
            milk_production_service: MilkProductionService::new(farm_data_service.clone()),
            report_service: ReportService::new(farm_data_service.clone()),
            farm_data_service,
            worker_service,
            session_service,
        })
    }
}

/// Initialize the backend against the data directory
pub fn initialize_backend(data_directory: &Path, config: &FarmConfig) -> Result<AppState> {
    info!("Opening local storage in {:?}", data_directory);
    let storage = FileLocalStorage::new(data_directory)?;

    info!("Setting up application state");
    AppState::new(Arc::new(storage), config)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &FarmConfig) -> Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any);

    // Everything here needs a logged-in session
    let gated_routes = Router::new()
        .nest("/cattle", record_apis::router::<Cow>())
        .nest("/expenses", record_apis::router::<Expense>())
        .nest("/income", record_apis::router::<Income>())
        .nest(
            "/milk-records",
            record_apis::router::<MilkRecord>().merge(report_apis::milk_router()),
        )
        .nest("/workers", record_apis::router::<Worker>())
        .route("/reports", get(report_apis::get_report))
        .route("/feeds", get(report_apis::list_feeds))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            session_gate::require_session,
        ));

    let api_routes = Router::new()
        .nest("/session", session_apis::router())
        .nest("/routes", route_apis::router())
        .merge(gated_routes);

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state))
}
