//! Liveness, status and error demonstration routes.
use axum::{extract::State, response::Json};
use quote_common::Tier;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok`.
    pub status: String,
}

/// Process status response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// Always `running`.
    pub status: String,
    /// Deployment environment name.
    pub environment: String,
    /// Port the listener is bound to.
    pub port: u16,
    /// Crate version.
    pub version: String,
    /// RFC 3339 start time.
    pub started_at: String,
    /// Seconds since start.
    pub uptime_seconds: u64,
    /// Tiers the calculator can price.
    pub tiers: Vec<Tier>,
}

/// GET /health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /status - Environment, port, uptime and priced tiers
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let info = &state.info;
    Json(StatusResponse {
        status: "running".to_string(),
        environment: info.environment.clone(),
        port: info.port,
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: info.started_at.to_rfc3339(),
        uptime_seconds: info.uptime_seconds(),
        tiers: state.pricing.entries().map(|(tier, _)| tier).collect(),
    })
}

/// GET /error - Always fails, to exercise the server-error path
pub async fn trigger_error() -> Result<Json<HealthResponse>, ApiError> {
    Err(ApiError::Internal(
        "deliberate failure from the error demonstration route".to_string(),
    ))
}
