use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{index, precipitation, stations, summary_between, summary_from, tobs};
use super::state::SharedState;
use crate::utils::constants::{PRECIPITATION_ROUTE, STATIONS_ROUTE, TOBS_ROUTE};

/// Build the API router
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(PRECIPITATION_ROUTE, get(precipitation))
        .route(STATIONS_ROUTE, get(stations))
        .route(TOBS_ROUTE, get(tobs))
        // Static routes above take priority over these captures
        .route("/api/v1.0/:start", get(summary_from))
        .route("/api/v1.0/:start/:end", get(summary_between))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
