//! Route handlers. Every handler only reads the shared dataset.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::analyzers::{precipitation_by_date, temperature_summary};
use crate::models::{StationRow, TemperatureSummary, TobsRow};
use crate::server::error::ApiError;
use crate::server::pages::render_index;
use crate::server::state::SharedState;
use crate::utils::dates::parse_iso_date;

#[derive(Debug, Serialize)]
pub struct PrecipitationResponse {
    pub precipitation_data: BTreeMap<String, Option<f64>>,
}

/// GET / - route listing
pub async fn index(State(state): State<SharedState>) -> Html<String> {
    Html(render_index(&state))
}

/// GET /api/v1.0/precipitation - mean precipitation per date
pub async fn precipitation(State(state): State<SharedState>) -> Json<PrecipitationResponse> {
    let precipitation_data = precipitation_by_date(&state.dataset);
    debug!(dates = precipitation_data.len(), "Precipitation computed");
    Json(PrecipitationResponse { precipitation_data })
}

/// GET /api/v1.0/stations - station listing
pub async fn stations(State(state): State<SharedState>) -> Json<Vec<StationRow>> {
    Json(state.dataset.station_rows().to_vec())
}

/// GET /api/v1.0/tobs - observed temperatures for the trailing year
pub async fn tobs(State(state): State<SharedState>) -> Json<Vec<TobsRow>> {
    Json(state.dataset.last_12_months().to_vec())
}

/// GET /api/v1.0/:start - summary from `start` to the last date in the dataset
pub async fn summary_from(
    State(state): State<SharedState>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureSummary>>, ApiError> {
    info!(start = %start, "Temperature summary request");

    let start = parse_iso_date(&start)?;
    let summary = temperature_summary(&state.dataset, start, state.dataset.last_date());

    debug!(rows = summary.count, "Temperature summary computed");
    Ok(Json(vec![summary]))
}

/// GET /api/v1.0/:start/:end - summary over `start..=end`
pub async fn summary_between(
    State(state): State<SharedState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureSummary>>, ApiError> {
    info!(start = %start, end = %end, "Temperature summary request");

    let start = parse_iso_date(&start)?;
    let end = parse_iso_date(&end)?;
    let summary = temperature_summary(&state.dataset, start, end);

    debug!(rows = summary.count, "Temperature summary computed");
    Ok(Json(vec![summary]))
}
