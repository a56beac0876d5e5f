//! Route table, request logging and the JSON fallbacks.
//!
//! Unknown paths and known paths hit with the wrong method both answer with
//! the shared error envelope.
use std::time::Instant;

use axum::{
    Router,
    extract::Request,
    http::{Method, Uri},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use log::info;

use crate::error::ApiError;
use crate::handlers::{
    calc_residential, health, list_agents, region_average, status, submit_contact, trigger_error,
};
use crate::state::AppState;

/// Route table. State is applied by the caller with `.with_state(...)`.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/status", get(status))
        .route("/error", get(trigger_error))
        .route("/agents", get(list_agents))
        .route("/region-avg", get(region_average))
        .route("/calc-residential", get(calc_residential))
        .route("/contact", post(submit_contact))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(log_requests))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Log method, path, status and latency of every request.
async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} in {}ms",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}
