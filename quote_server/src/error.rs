//! Error types used across the quote server crate.
//!
//! - `ApiError` is what handlers return. It wraps domain rejections from
//!   `quote_common` and renders every failure as the shared JSON envelope
//!   `ErrorResponse` with a matching status code.
//! - `ServerError` covers startup failures (binding, address parsing) and is
//!   returned from `main`.

use std::io;
use std::net::AddrParseError;

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use log::{error, warn};
use quote_common::QuoteError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body shared by every failing route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable snake_case error kind.
    pub error: String,
    /// Human-readable explanation.
    pub message: String,
    /// Unix timestamp (seconds) of the failure.
    pub timestamp: i64,
}

/// Failure of a single request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rejected by the domain layer.
    #[error(transparent)]
    Domain(#[from] QuoteError),

    /// Query string could not be read into the expected parameters.
    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    /// No route matches the path.
    #[error("no route for {0}")]
    NotFound(String),

    /// The path exists but not for this method.
    #[error("method {method} not allowed for {path}")]
    MethodNotAllowed {
        /// Request method.
        method: String,
        /// Request path.
        path: String,
    },

    /// Unexpected server-side failure. The detail is logged, not returned.
    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(QuoteError::UnknownRegion(_)) => StatusCode::NOT_FOUND,
            ApiError::Domain(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Domain(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Value of the `error` field in the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Domain(e) => e.kind(),
            ApiError::InvalidQuery(_) => "invalid_query",
            ApiError::NotFound(_) => "not_found",
            ApiError::MethodNotAllowed { .. } => "method_not_allowed",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!("Request failed: {}", self);
            String::from("The server encountered an internal error")
        } else {
            warn!("Request rejected ({}): {}", self.kind(), self);
            self.to_string()
        };

        let body = ErrorResponse {
            error: self.kind().to_string(),
            message,
            timestamp: chrono::Utc::now().timestamp(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

/// Failure while starting or running the server process.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Socket bind/accept failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configured host is not an IP address.
    #[error("Invalid bind host: {0}")]
    InvalidHost(#[from] AddrParseError),
}
