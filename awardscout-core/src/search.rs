use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::airport::normalize_code;
use crate::flight::Flight;
use crate::{CoreError, CoreResult, MAX_PASSENGERS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    /// Any integer is accepted on the wire; the 1 to 8 range is checked by
    /// [`SearchRequest::normalized`] so it can be answered in the envelope.
    #[serde(default = "default_passengers")]
    pub passengers: i64,
}

fn default_passengers() -> i64 { 1 }

impl SearchRequest {
    pub fn new(origin: &str, destination: &str, date: NaiveDate, passengers: i64) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            date,
            passengers,
        }
    }

    /// Exchange origin and destination. Applying it twice is a no-op.
    pub fn swap_airports(&mut self) {
        std::mem::swap(&mut self.origin, &mut self.destination);
    }

    /// Checked, uppercased copy of the request.
    ///
    /// Origin equal to destination is allowed through.
    pub fn normalized(&self) -> CoreResult<Self> {
        if self.origin.trim().is_empty() || self.destination.trim().is_empty() {
            return Err(CoreError::MissingAirport);
        }
        let origin = normalize_code(&self.origin)?;
        let destination = normalize_code(&self.destination)?;

        if !(1..=MAX_PASSENGERS).contains(&self.passengers) {
            return Err(CoreError::InvalidPassengers(self.passengers));
        }

        Ok(Self {
            origin,
            destination,
            date: self.date,
            passengers: self.passengers,
        })
    }
}

/// Echo of the request that produced a result.
///
/// `search_timestamp` is kept as the raw ISO 8601 text the server sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMetadata {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub passengers: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_timestamp: Option<String>,
}

impl From<&SearchRequest> for SearchMetadata {
    fn from(req: &SearchRequest) -> Self {
        Self {
            origin: req.origin.clone(),
            destination: req.destination.clone(),
            date: req.date,
            passengers: req.passengers,
            search_timestamp: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub search_metadata: SearchMetadata,
    pub total_results: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flights_with_cpp: Option<usize>,
    #[serde(default)]
    pub flights: Vec<Flight>,
}

impl SearchResult {
    pub fn new(search_metadata: SearchMetadata, flights: Vec<Flight>) -> Self {
        let flights_with_cpp = flights.iter().filter(|f| f.has_cpp()).count();
        Self {
            search_metadata,
            total_results: flights.len(),
            flights_with_cpp: Some(flights_with_cpp),
            flights,
        }
    }

    /// Flights carrying a CPP value, counted locally when the server omitted it.
    pub fn cpp_count(&self) -> usize {
        self.flights_with_cpp
            .unwrap_or_else(|| self.flights.iter().filter(|f| f.has_cpp()).count())
    }
}

/// Envelope wrapping every `/api/search` answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SearchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Seconds spent serving the search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
}

impl SearchResponse {
    pub fn ok(data: SearchResult, execution_time: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            execution_time: Some(execution_time),
        }
    }

    pub fn failed(error: impl Into<String>, execution_time: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            execution_time: Some(execution_time),
        }
    }
}
