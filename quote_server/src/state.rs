//! Application state shared across handlers.
//!
//! Everything here is built once at startup and only read afterwards, so the
//! state is cloned per request without any locking.
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use quote_common::PricingTable;
use quote_common::agents::AgentDirectory;

/// Process metadata reported by `/status`.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    /// Deployment environment name.
    pub environment: String,
    /// Port the listener is bound to.
    pub port: u16,
    /// Wall-clock start time.
    pub started_at: DateTime<Utc>,
    started: Instant,
}

impl ServiceInfo {
    /// Record the start of the service now.
    pub fn new(environment: &str, port: u16) -> Self {
        Self {
            environment: environment.to_string(),
            port,
            started_at: Utc::now(),
            started: Instant::now(),
        }
    }

    /// Whole seconds since start.
    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Residential price list.
    pub pricing: Arc<PricingTable>,
    /// Agent roster.
    pub agents: Arc<AgentDirectory>,
    /// Process metadata.
    pub info: Arc<ServiceInfo>,
}

impl AppState {
    /// State with the built-in pricing table and agent roster, for a listener
    /// bound to `port`.
    pub fn new(environment: &str, port: u16) -> Self {
        Self::with_parts(
            PricingTable::residential(),
            AgentDirectory::seeded(),
            ServiceInfo::new(environment, port),
        )
    }

    /// State from explicit parts.
    pub fn with_parts(pricing: PricingTable, agents: AgentDirectory, info: ServiceInfo) -> Self {
        Self {
            pricing: Arc::new(pricing),
            agents: Arc::new(agents),
            info: Arc::new(info),
        }
    }
}
