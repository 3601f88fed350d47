use awardscout_core::Airport;
use serde::Deserialize;
use tracing::info;
use crate::{read_json, StoreResult};

/// Read-only list of airports offered to search clients.
#[derive(Debug, Clone)]
pub struct AirportDirectory {
    airports: Vec<Airport>,
}

#[derive(Deserialize)]
struct AirportFile {
    airports: Vec<Airport>,
}

impl AirportDirectory {
    pub fn new(airports: Vec<Airport>) -> Self {
        Self { airports }
    }

    /// Load from a JSON file shaped like `{ "airports": [...] }`.
    pub async fn load(path: &str) -> StoreResult<Self> {
        let file: AirportFile = read_json(path).await?;
        info!("Loaded {} airports from {}", file.airports.len(), path);
        Ok(Self::new(file.airports))
    }

    pub fn list(&self) -> &[Airport] {
        &self.airports
    }
}

impl Default for AirportDirectory {
    /// Major US hubs.
    fn default() -> Self {
        Self::new(vec![
            Airport::new("LAX", "Los Angeles International", "Los Angeles"),
            Airport::new("JFK", "John F. Kennedy International", "New York"),
            Airport::new("SFO", "San Francisco International", "San Francisco"),
            Airport::new("MIA", "Miami International", "Miami"),
            Airport::new("BOS", "Logan International", "Boston"),
            Airport::new("ORD", "O'Hare International", "Chicago"),
            Airport::new("DFW", "Dallas/Fort Worth International", "Dallas"),
            Airport::new("ATL", "Hartsfield-Jackson Atlanta International", "Atlanta"),
            Airport::new("DEN", "Denver International", "Denver"),
            Airport::new("SEA", "Seattle-Tacoma International", "Seattle"),
            Airport::new("LAS", "McCarran International", "Las Vegas"),
            Airport::new("PHX", "Phoenix Sky Harbor International", "Phoenix"),
            Airport::new("IAH", "George Bush Intercontinental", "Houston"),
            Airport::new("MCO", "Orlando International", "Orlando"),
            Airport::new("CLT", "Charlotte Douglas International", "Charlotte"),
        ])
    }
}
