//! Residential quote route.
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Json;
use log::info;
use quote_common::{QuoteCalculator, QuoteRequest, QuoteResult};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of `/calc-residential`.
///
/// Values stay as raw text so the calculator reports malformed numbers itself
/// instead of the extractor rejecting the whole query.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteQuery {
    /// Number of apartments, unparsed.
    pub apartments: Option<String>,
    /// Number of floors, unparsed.
    pub floors: Option<String>,
    /// Tier name, unparsed.
    pub tier: Option<String>,
}

/// GET /calc-residential - Price a residential building
pub async fn calc_residential(
    State(state): State<AppState>,
    query: Result<Query<QuoteQuery>, QueryRejection>,
) -> Result<Json<QuoteResult>, ApiError> {
    let Query(query) = query?;
    let request = QuoteRequest::parse(
        query.apartments.as_deref(),
        query.floors.as_deref(),
        query.tier.as_deref(),
    )?;
    let result = QuoteCalculator::new(&state.pricing).compute_quote(&request)?;

    info!(
        "Quoted {} {} elevators for {} apartments on {} floors: {}",
        result.elevators_required,
        request.tier(),
        request.apartments(),
        request.floors(),
        result.total_cost
    );
    Ok(Json(result))
}
