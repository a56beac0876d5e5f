//! HTTP boundary of the residential quote service.
//!
//! The server exposes mock-data-backed routes over the pure logic in
//! `quote_common`:
//!
//! - `GET /calc-residential` — elevator count and total cost for a building.
//! - `GET /agents`, `GET /region-avg` — static agent roster and region means.
//! - `POST /contact` — contact form validation and echo.
//! - `GET /health`, `GET /status`, `GET /error` — liveness, process status and
//!   an always-failing route that demonstrates the error envelope.
//!
//! Modules:
//! - `config` — `Settings` from CLI flags and environment variables.
//! - `state` — immutable `AppState` shared by all handlers.
//! - `handlers` — one module per route family.
//! - `router` — route table, request logging and the 404/405 fallbacks.
//! - `error` — `ApiError` to HTTP mapping and startup `ServerError`.
//! - `server` — binds the listener and builds the state for it.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use router::create_router;
pub use state::AppState;
