use async_trait::async_trait;
use crate::flight::Flight;
use crate::search::SearchRequest;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Flight source unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can price flights for a route and date.
#[async_trait]
pub trait FlightSource: Send + Sync {
    /// Flights for an already normalized request, in display order.
    /// An empty list means nothing matched; it is not an error.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Flight>, SourceError>;
}
