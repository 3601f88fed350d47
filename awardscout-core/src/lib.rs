pub mod airport;
pub mod flight;
pub mod pricing;
pub mod search;
pub mod source;

pub use airport::Airport;
pub use flight::Flight;
pub use search::{SearchMetadata, SearchRequest, SearchResponse, SearchResult};
pub use source::{FlightSource, SourceError};

/// Largest party a single search may price.
pub const MAX_PASSENGERS: i64 = 8;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Origin and destination are required")]
    MissingAirport,
    #[error("Airport codes must be 3 characters")]
    InvalidAirportLength,
    #[error("Invalid airport code: {0}")]
    InvalidAirportCode(String),
    #[error("Passenger count must be between 1 and {max}, got {0}", max = MAX_PASSENGERS)]
    InvalidPassengers(i64),
}

pub type CoreResult<T> = Result<T, CoreError>;
