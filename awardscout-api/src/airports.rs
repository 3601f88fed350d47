use axum::{extract::State, routing::get, Json, Router};
use awardscout_core::Airport;
use serde::Serialize;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AirportsResponse {
    pub airports: Vec<Airport>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/airports", get(list_airports))
}

/// GET /api/airports
pub async fn list_airports(State(state): State<AppState>) -> Json<AirportsResponse> {
    Json(AirportsResponse {
        airports: state.airports.list().to_vec(),
    })
}
