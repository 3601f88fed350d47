//! Search screen state and the closed set of transitions that mutate it.
//!
//! Every submission is stamped with a ticket. Only the response carrying the
//! latest ticket may settle the search; anything older is dropped, so a slow
//! earlier search can never overwrite a newer one.

use awardscout_core::{Airport, SearchRequest, SearchResponse, SearchResult};
use chrono::NaiveDate;
use tracing::{debug, warn};

pub const SEARCH_FAILED: &str = "Search failed";
pub const NETWORK_ERROR: &str = "Network error";

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Loading { ticket: u64 },
    Results(SearchResult),
    Failed(String),
}

/// How an outstanding search ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The backend answered with a search envelope.
    Envelope(SearchResponse),
    /// The request never produced an envelope. Carries whatever message could
    /// be extracted, if any.
    Transport(Option<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    EditOrigin(String),
    EditDestination(String),
    EditDate(NaiveDate),
    EditPassengers(u8),
    SwapAirports,
    AirportsLoaded(Vec<Airport>),
    AirportsFailed(String),
    Submit,
    Settled { ticket: u64, outcome: Outcome },
}

/// What the caller must do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Send `request`, then report back with `Action::Settled { ticket, .. }`.
    Search { ticket: u64, request: SearchRequest },
    /// Submission blocked by a missing required field; state is unchanged.
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub form: SearchRequest,
    pub airports: Vec<Airport>,
    /// Set when the airport list could not be fetched. Searching still works.
    pub airports_notice: Option<String>,
    pub phase: Phase,
    last_ticket: u64,
}

impl SearchState {
    pub fn new(form: SearchRequest) -> Self {
        Self {
            form,
            airports: Vec::new(),
            airports_notice: None,
            phase: Phase::Idle,
            last_ticket: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn results(&self) -> Option<&SearchResult> {
        match &self.phase {
            Phase::Results(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::EditOrigin(code) => self.form.origin = code,
            Action::EditDestination(code) => self.form.destination = code,
            Action::EditDate(date) => self.form.date = date,
            Action::EditPassengers(count) => self.form.passengers = count.into(),
            Action::SwapAirports => {
                if self.is_loading() {
                    debug!("Swap ignored while a search is in flight");
                } else {
                    self.form.swap_airports();
                }
            }
            Action::AirportsLoaded(airports) => {
                self.airports = airports;
                self.airports_notice = None;
            }
            Action::AirportsFailed(message) => {
                self.airports.clear();
                self.airports_notice = Some(message);
            }
            Action::Submit => return self.submit(),
            Action::Settled { ticket, outcome } => self.settle(ticket, outcome),
        }
        Effect::None
    }

    fn submit(&mut self) -> Effect {
        if self.form.origin.trim().is_empty() || self.form.destination.trim().is_empty() {
            return Effect::Invalid("Origin and destination are required".to_string());
        }

        if let Phase::Loading { ticket } = self.phase {
            debug!("Superseding search #{}", ticket);
        }

        self.last_ticket += 1;
        self.phase = Phase::Loading { ticket: self.last_ticket };
        Effect::Search {
            ticket: self.last_ticket,
            request: self.form.clone(),
        }
    }

    fn settle(&mut self, ticket: u64, outcome: Outcome) {
        match self.phase {
            Phase::Loading { ticket: current } if current == ticket => {}
            _ => {
                debug!("Dropping stale response for search #{}", ticket);
                return;
            }
        }

        self.phase = match outcome {
            Outcome::Envelope(SearchResponse { success: true, data: Some(data), .. }) => {
                Phase::Results(data)
            }
            Outcome::Envelope(SearchResponse { success: true, data: None, .. }) => {
                warn!("Search #{} succeeded without data", ticket);
                Phase::Failed(SEARCH_FAILED.to_string())
            }
            Outcome::Envelope(SearchResponse { error, .. }) => {
                Phase::Failed(non_empty(error).unwrap_or_else(|| SEARCH_FAILED.to_string()))
            }
            Outcome::Transport(message) => {
                Phase::Failed(non_empty(message).unwrap_or_else(|| NETWORK_ERROR.to_string()))
            }
        };
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use awardscout_core::{Flight, SearchMetadata};

    fn form() -> SearchRequest {
        SearchRequest::new("LAX", "JFK", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), 2)
    }

    fn result(flights: Vec<Flight>) -> SearchResult {
        SearchResult::new(SearchMetadata::from(&form()), flights)
    }

    fn ok(data: SearchResult) -> Outcome {
        Outcome::Envelope(SearchResponse::ok(data, 0.1))
    }

    fn submit(state: &mut SearchState) -> u64 {
        match state.apply(Action::Submit) {
            Effect::Search { ticket, .. } => ticket,
            other => panic!("expected a search, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_enters_loading_with_form() {
        let mut state = SearchState::new(form());
        let effect = state.apply(Action::Submit);

        assert_eq!(effect, Effect::Search { ticket: 1, request: form() });
        assert!(state.is_loading());
        assert!(state.results().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_success_settles_into_results() {
        let mut state = SearchState::new(form());
        let ticket = submit(&mut state);

        state.apply(Action::Settled { ticket, outcome: ok(result(vec![])) });

        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.results().map(|r| r.total_results), Some(0));
    }

    #[test]
    fn test_backend_failure_is_surfaced_verbatim() {
        let mut state = SearchState::new(form());
        let ticket = submit(&mut state);

        let outcome = Outcome::Envelope(SearchResponse::failed("CAPTCHA detected", 2.0));
        state.apply(Action::Settled { ticket, outcome });

        assert!(!state.is_loading());
        assert!(state.results().is_none());
        assert_eq!(state.error(), Some("CAPTCHA detected"));
    }

    #[test]
    fn test_failure_fallbacks() {
        let mut state = SearchState::new(form());
        let ticket = submit(&mut state);
        let outcome = Outcome::Envelope(SearchResponse {
            success: false,
            data: None,
            error: None,
            execution_time: None,
        });
        state.apply(Action::Settled { ticket, outcome });
        assert_eq!(state.error(), Some(SEARCH_FAILED));

        let ticket = submit(&mut state);
        state.apply(Action::Settled { ticket, outcome: Outcome::Transport(Some(String::new())) });
        assert_eq!(state.error(), Some(NETWORK_ERROR));

        let ticket = submit(&mut state);
        let outcome = Outcome::Transport(Some("connection refused".to_string()));
        state.apply(Action::Settled { ticket, outcome });
        assert_eq!(state.error(), Some("connection refused"));
    }

    #[test]
    fn test_success_without_data_is_an_error() {
        let mut state = SearchState::new(form());
        let ticket = submit(&mut state);
        let outcome = Outcome::Envelope(SearchResponse {
            success: true,
            data: None,
            error: None,
            execution_time: None,
        });
        state.apply(Action::Settled { ticket, outcome });
        assert_eq!(state.error(), Some(SEARCH_FAILED));
        assert!(state.results().is_none());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = SearchState::new(form());
        let first = submit(&mut state);
        let second = submit(&mut state);
        assert!(second > first);

        let stale = Outcome::Envelope(SearchResponse::failed("slow failure", 9.0));
        state.apply(Action::Settled { ticket: first, outcome: stale });
        assert_eq!(state.phase, Phase::Loading { ticket: second });

        state.apply(Action::Settled { ticket: second, outcome: ok(result(vec![])) });
        assert!(state.results().is_some());

        // A late duplicate cannot clobber the settled state either.
        let late = Outcome::Transport(None);
        state.apply(Action::Settled { ticket: second, outcome: late });
        assert!(state.results().is_some());
    }

    #[test]
    fn test_resubmit_clears_previous_outcome() {
        let mut state = SearchState::new(form());
        let ticket = submit(&mut state);
        state.apply(Action::Settled { ticket, outcome: Outcome::Transport(None) });
        assert!(state.error().is_some());

        submit(&mut state);
        assert!(state.error().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn test_swap_twice_restores_pair() {
        let mut state = SearchState::new(form());
        state.apply(Action::SwapAirports);
        assert_eq!((state.form.origin.as_str(), state.form.destination.as_str()), ("JFK", "LAX"));

        state.apply(Action::SwapAirports);
        assert_eq!(state.form, form());
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn test_swap_disabled_while_loading() {
        let mut state = SearchState::new(form());
        submit(&mut state);
        state.apply(Action::SwapAirports);
        assert_eq!(state.form.origin, "LAX");
    }

    #[test]
    fn test_submit_requires_airports() {
        let mut state = SearchState::new(form());
        state.apply(Action::EditOrigin(String::new()));

        let effect = state.apply(Action::Submit);
        assert!(matches!(effect, Effect::Invalid(_)));
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn test_airport_failure_leaves_list_empty() {
        let mut state = SearchState::new(form());
        state.apply(Action::AirportsFailed("Network error".to_string()));
        assert!(state.airports.is_empty());
        assert_eq!(state.airports_notice.as_deref(), Some("Network error"));

        let airports = vec![Airport::new("LAX", "Los Angeles International", "Los Angeles")];
        state.apply(Action::AirportsLoaded(airports));
        assert_eq!(state.airports.len(), 1);
        assert!(state.airports_notice.is_none());
    }

    #[test]
    fn test_edits_update_form() {
        let mut state = SearchState::new(form());
        state.apply(Action::EditOrigin("SFO".to_string()));
        state.apply(Action::EditDestination("BOS".to_string()));
        state.apply(Action::EditDate(NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()));
        state.apply(Action::EditPassengers(4));

        assert_eq!(state.form.origin, "SFO");
        assert_eq!(state.form.destination, "BOS");
        assert_eq!(state.form.date.to_string(), "2025-12-15");
        assert_eq!(state.form.passengers, 4);
    }
}
