use awardscout_core::SearchRequest;
use tracing::{info, warn};
use crate::api::{ClientError, SearchApi};
use crate::state::{Action, Effect, Outcome, SearchState};

/// Drives a [`SearchState`] against a [`SearchApi`].
pub struct SearchController<A> {
    api: A,
    state: SearchState,
}

impl<A: SearchApi> SearchController<A> {
    pub fn new(api: A, form: SearchRequest) -> Self {
        Self {
            api,
            state: SearchState::new(form),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> Effect {
        self.state.apply(action)
    }

    /// One-shot fetch of the airport list. Failure is logged and recorded as
    /// a notice; it never blocks searching.
    pub async fn load_airports(&mut self) {
        match self.api.airports().await {
            Ok(airports) => {
                info!("Loaded {} airports", airports.len());
                self.dispatch(Action::AirportsLoaded(airports));
            }
            Err(e) => {
                warn!("Failed to load airports: {}", e);
                self.dispatch(Action::AirportsFailed(e.to_string()));
            }
        }
    }

    /// Submit the current form and wait for it to settle.
    pub async fn submit(&mut self) -> Result<&SearchState, ClientError> {
        let (ticket, request) = match self.dispatch(Action::Submit) {
            Effect::Search { ticket, request } => (ticket, request),
            Effect::Invalid(message) => return Err(ClientError::InvalidForm(message)),
            Effect::None => return Ok(&self.state),
        };

        info!(
            "Search #{}: {} -> {} on {}",
            ticket, request.origin, request.destination, request.date
        );

        let outcome = match self.api.search(&request).await {
            Ok(envelope) => Outcome::Envelope(envelope),
            Err(e) => {
                warn!("Search #{} failed: {}", ticket, e);
                Outcome::Transport(Some(e.to_string()))
            }
        };
        self.dispatch(Action::Settled { ticket, outcome });
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use awardscout_core::{Airport, SearchMetadata, SearchResponse, SearchResult};
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubApi {
        airports: Option<Vec<Airport>>,
        response: Option<SearchResponse>,
        sent: Mutex<Vec<SearchRequest>>,
    }

    #[async_trait]
    impl SearchApi for StubApi {
        async fn airports(&self) -> Result<Vec<Airport>, ClientError> {
            self.airports.clone().ok_or_else(|| ClientError::Status {
                status: 502,
                message: "Request failed with status code 502".to_string(),
            })
        }

        async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError> {
            self.sent.lock().unwrap().push(request.clone());
            self.response.clone().ok_or_else(|| ClientError::Status {
                status: 500,
                message: "Backend exploded".to_string(),
            })
        }
    }

    fn form() -> SearchRequest {
        SearchRequest::new("LAX", "JFK", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), 2)
    }

    #[tokio::test]
    async fn test_submit_reaches_results() {
        let data = SearchResult::new(SearchMetadata::from(&form()), vec![]);
        let api = StubApi {
            response: Some(SearchResponse::ok(data, 0.2)),
            ..Default::default()
        };
        let mut controller = SearchController::new(api, form());

        let state = controller.submit().await.unwrap();
        assert!(!state.is_loading());
        assert!(state.results().is_some());
        assert!(state.error().is_none());
        assert_eq!(controller.api.sent.lock().unwrap().as_slice(), &[form()]);
    }

    #[tokio::test]
    async fn test_transport_error_reaches_error_state() {
        let mut controller = SearchController::new(StubApi::default(), form());

        let state = controller.submit().await.unwrap();
        assert!(!state.is_loading());
        assert!(state.results().is_none());
        assert_eq!(state.error(), Some("Backend exploded"));
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let mut controller = SearchController::new(StubApi::default(), form());
        controller.dispatch(Action::EditDestination(" ".to_string()));

        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidForm(_)));
        assert!(controller.api.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_airport_load_failure_is_a_notice() {
        let mut controller = SearchController::new(StubApi::default(), form());
        controller.load_airports().await;

        let state = controller.state();
        assert!(state.airports.is_empty());
        assert_eq!(
            state.airports_notice.as_deref(),
            Some("Request failed with status code 502")
        );
    }

    #[tokio::test]
    async fn test_airport_load_populates_list() {
        let api = StubApi {
            airports: Some(vec![Airport::new("MIA", "Miami International", "Miami")]),
            ..Default::default()
        };
        let mut controller = SearchController::new(api, form());
        controller.load_airports().await;

        assert_eq!(controller.state().airports[0].code, "MIA");
    }
}
