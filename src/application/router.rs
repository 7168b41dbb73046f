// src/application/router.rs
//
// Shared router builder used by the binary and the integration tests so both
// exercise the same routes and middleware.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::application::commands::*;
use crate::application::state::AppState;
use crate::db::get_connection;
use crate::error::{AppError, AppResult};

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health -- service and database health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = get_connection(&state.pool)
        .and_then(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(AppError::from)
        })
        .is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Build the full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/dramas", get(list_dramas).post(add_drama))
        .route("/api/dramas/stream", get(stream_dramas))
        .route("/api/dramas/{id}", get(get_drama).delete(delete_drama))
        .route("/api/dramas/{id}/stream", get(stream_drama))
        .route("/api/dramas/{id}/progress", put(update_progress))
        .route("/api/dramas/{id}/rating", put(update_rating))
        .route("/api/dramas/{id}/status", put(update_status))
        .route("/api/search", get(search_shows))
        .route("/api/shows/{external_id}", get(get_show_details))
        .route("/api/statistics", get(get_statistics))
        .layer(cors)
        .with_state(state)
}

/// Build the CORS layer from the configured origins.
///
/// An unparseable origin is a configuration error.
pub fn build_cors_layer(origins: &[String]) -> AppResult<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|e| AppError::Config(format!("Invalid CORS origin '{}': {}", o, e)))
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]))
}
