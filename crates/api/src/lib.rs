//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes for monthly reports and their spreadsheet export
//! - A health check
//! - Error to status-code mapping

pub mod routes;

use axum::Router;
use chrono_tz::Tz;
use fieldreport_core::report::ReportService;
use fieldreport_db::ReportRepository;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Report service backed by Postgres.
    pub reports: Arc<ReportService<ReportRepository>>,
}

impl AppState {
    /// Wires the repository and service over `db`, stamping times in `timezone`.
    #[must_use]
    pub fn new(db: DatabaseConnection, timezone: Tz) -> Self {
        let repository = Arc::new(ReportRepository::new(db));
        Self {
            reports: Arc::new(ReportService::new(repository, timezone)),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
