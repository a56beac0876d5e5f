//! Agent roster routes.
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Json;
use quote_common::agents::{AgentRecord, RegionAverage};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Optional `?region=` filter.
#[derive(Debug, Default, Deserialize)]
pub struct RegionQuery {
    /// Region name, matched case-insensitively.
    pub region: Option<String>,
}

/// GET /agents - All agents, or those of one region
pub async fn list_agents(
    State(state): State<AppState>,
    query: Result<Query<RegionQuery>, QueryRejection>,
) -> Result<Json<Vec<AgentRecord>>, ApiError> {
    let Query(query) = query?;
    let agents = match query.region.as_deref().map(str::trim) {
        Some(region) if !region.is_empty() => state.agents.in_region(region).cloned().collect(),
        _ => state.agents.all().to_vec(),
    };
    Ok(Json(agents))
}

/// GET /region-avg - Mean rating and fee of a region's agents
pub async fn region_average(
    State(state): State<AppState>,
    query: Result<Query<RegionQuery>, QueryRejection>,
) -> Result<Json<RegionAverage>, ApiError> {
    let Query(query) = query?;
    let average = state.agents.region_average(query.region.as_deref())?;
    Ok(Json(average))
}
