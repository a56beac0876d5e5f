//! Residential quote HTTP server.
//!
//! Reads `Settings` from flags and environment, builds the immutable
//! `AppState` (pricing table, agent roster, process metadata) and serves the
//! router until Ctrl+C. Every request is independent; handlers only read the
//! shared state, so no locking is involved.
//!
//! Bind address: `0.0.0.0:3004` unless overridden by `--host`/`BIND_HOST` and
//! `--port`/`PORT`.
#![warn(missing_docs)]
use clap::Parser;
use log::{error, info};
use quote_server::config::Settings;
use quote_server::error::ServerError;
use quote_server::create_router;
use quote_server::server::bind;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    init_logger();
    let settings = Settings::parse();
    let (listener, state) = bind(&settings).await?;
    let app = create_router().with_state(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
