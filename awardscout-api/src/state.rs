use std::sync::Arc;
use awardscout_core::FlightSource;
use awardscout_store::AirportDirectory;

#[derive(Clone)]
pub struct AppState {
    pub airports: Arc<AirportDirectory>,
    pub flights: Arc<dyn FlightSource>,
    pub allowed_origins: Vec<String>,
}
