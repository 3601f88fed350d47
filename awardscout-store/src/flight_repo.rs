use async_trait::async_trait;
use awardscout_core::pricing::{match_flights, AwardFare, CashFare};
use awardscout_core::{Flight, FlightSource, SearchRequest, SourceError};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};
use crate::{read_json, StoreError, StoreResult};

#[derive(Debug, Clone, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    routes: Vec<FixtureRoute>,
}

/// Priced flights for one origin/destination pair.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureRoute {
    pub origin: String,
    pub destination: String,
    /// Matches every date when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub flights: Vec<Flight>,
    #[serde(default)]
    pub award: Vec<AwardFare>,
    #[serde(default)]
    pub cash: Vec<CashFare>,
}

impl FixtureRoute {
    fn matches(&self, request: &SearchRequest) -> bool {
        self.origin.eq_ignore_ascii_case(&request.origin)
            && self.destination.eq_ignore_ascii_case(&request.destination)
            && self.date.map_or(true, |d| d == request.date)
    }

    fn priced_flights(&self) -> Vec<Flight> {
        let mut flights: Vec<Flight> = self
            .flights
            .iter()
            .cloned()
            .map(Flight::with_derived_cpp)
            .collect();
        flights.extend(match_flights(&self.award, &self.cash));
        flights
    }
}

/// Flight source backed by a static route file instead of a live airline.
#[derive(Debug, Clone, Default)]
pub struct FixtureFlightSource {
    routes: Vec<FixtureRoute>,
}

impl FixtureFlightSource {
    pub fn new(routes: Vec<FixtureRoute>) -> Self {
        Self { routes }
    }

    pub async fn load(path: &str) -> StoreResult<Self> {
        let file: FixtureFile = read_json(path).await?;
        info!("Loaded {} fixture routes from {}", file.routes.len(), path);
        Ok(Self::new(file.routes))
    }

    pub fn from_json(raw: &str) -> StoreResult<Self> {
        let file: FixtureFile = serde_json::from_str(raw).map_err(|source| StoreError::Parse {
            path: "<inline>".to_string(),
            source,
        })?;
        Ok(Self::new(file.routes))
    }
}

#[async_trait]
impl FlightSource for FixtureFlightSource {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Flight>, SourceError> {
        let flights: Vec<Flight> = self
            .routes
            .iter()
            .filter(|r| r.matches(request))
            .flat_map(FixtureRoute::priced_flights)
            .collect();

        debug!(
            "Fixture search {} -> {} on {}: {} flights",
            request.origin,
            request.destination,
            request.date,
            flights.len()
        );
        Ok(flights)
    }
}
