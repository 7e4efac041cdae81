use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::{instrument, warn};
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// Liveness text
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Server is running", body = String)),
    tag = "Health"
)]
pub async fn root() -> &'static str {
    "Sports Plus is Running"
}

/// Readiness with a database round trip
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "All dependencies reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    ),
    tag = "Health"
)]
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database, code) = match sportsplus_db::ping(&state.db).await {
        Ok(()) => ("ok", "up", StatusCode::OK),
        Err(e) => {
            warn!(error = %e, "database health check failed");
            ("degraded", "down", StatusCode::SERVICE_UNAVAILABLE)
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
