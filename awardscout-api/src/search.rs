use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use awardscout_core::{Flight, SearchMetadata, SearchRequest, SearchResponse, SearchResult};
use std::time::Instant;
use tracing::{info, warn};
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/search", post(search_flights))
}

/// POST /api/search
///
/// Every outcome past body parsing is reported inside the envelope with a
/// 200 status, including validation and source failures.
pub async fn search_flights(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let started = Instant::now();

    let request = match req.normalized() {
        Ok(request) => request,
        Err(e) => {
            warn!("Invalid search {} -> {}: {}", req.origin, req.destination, e);
            return Ok(Json(SearchResponse::failed(e.to_string(), elapsed(started))));
        }
    };

    info!(
        "Searching {} -> {} on {} for {} passenger(s)",
        request.origin, request.destination, request.date, request.passengers
    );

    let flights: Vec<Flight> = match state.flights.search(&request).await {
        Ok(flights) => flights.into_iter().map(Flight::with_derived_cpp).collect(),
        Err(e) => {
            warn!("Flight source failed: {}", e);
            return Ok(Json(SearchResponse::failed(e.to_string(), elapsed(started))));
        }
    };

    let mut metadata = SearchMetadata::from(&request);
    metadata.search_timestamp = Some(chrono::Utc::now().to_rfc3339());
    let result = SearchResult::new(metadata, flights);

    info!(
        "Found {} flights ({} with CPP)",
        result.total_results,
        result.cpp_count()
    );
    Ok(Json(SearchResponse::ok(result, elapsed(started))))
}

fn elapsed(started: Instant) -> f64 {
    started.elapsed().as_secs_f64()
}
