//! Listener setup.
//!
//! The state is built after binding so that `/status` reports the port the OS
//! actually assigned, which differs from the configured one when it is `0`.
use log::info;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::error::ServerError;
use crate::state::AppState;

/// Bind the configured address and build the state for that listener.
pub async fn bind(settings: &Settings) -> Result<(TcpListener, AppState), ServerError> {
    let listener = TcpListener::bind(settings.bind_addr()?).await?;
    let local_addr = listener.local_addr()?;
    info!(
        "Quote server listening on {} ({} environment)",
        local_addr, settings.environment
    );

    let state = AppState::new(&settings.environment, local_addr.port());
    Ok((listener, state))
}
