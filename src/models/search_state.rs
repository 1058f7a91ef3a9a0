use crate::error::SearchError;

use super::SearchResult;

pub const MOUNT_TRANSPORT_MESSAGE: &str =
    "An error occurred while fetching the movies. Please try again later.";
pub const SUBMIT_TRANSPORT_MESSAGE: &str =
    "An error occurred while searching for movies. Please try again later.";

/// Where a request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrigin {
    /// Default query issued when the widget mounts
    Mount,
    /// Query submitted through the search input
    Submit,
}

impl SearchOrigin {
    /// Fixed message shown when a request from this origin fails in transport
    pub fn transport_message(self) -> &'static str {
        match self {
            SearchOrigin::Mount => MOUNT_TRANSPORT_MESSAGE,
            SearchOrigin::Submit => SUBMIT_TRANSPORT_MESSAGE,
        }
    }
}

/// The UI's current knowledge of the latest query outcome
///
/// Exactly one variant holds at a time. Every transition replaces the whole
/// value; results from different requests are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Loading,
    Success(Vec<SearchResult>),
    Failure(String),
}

impl SearchState {
    /// Pure transition from a settled request to the next state
    pub fn from_outcome(
        origin: SearchOrigin,
        outcome: Result<Vec<SearchResult>, SearchError>,
    ) -> Self {
        match outcome {
            Ok(results) => SearchState::Success(results),
            Err(SearchError::Domain(message)) => SearchState::Failure(message),
            Err(SearchError::Transport(_)) => {
                SearchState::Failure(origin.transport_message().to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// Results to render; empty unless the state is `Success`
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchState::Success(results) => results,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SearchState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImdbId, Poster};

    fn result(id: &str, title: &str) -> SearchResult {
        SearchResult {
            id: ImdbId::new(id),
            title: title.to_string(),
            year: "2005".to_string(),
            media_type: "movie".to_string(),
            poster: Poster::Missing,
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        assert!(SearchState::default().is_loading());
        assert!(SearchState::default().results().is_empty());
        assert_eq!(SearchState::default().error_message(), None);
    }

    #[test]
    fn test_success_keeps_provider_order() {
        let outcome = Ok(vec![
            result("tt2", "Zeta"),
            result("tt1", "Alpha"),
        ]);
        let state = SearchState::from_outcome(SearchOrigin::Submit, outcome);

        let ids: Vec<&str> = state.results().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["tt2", "tt1"]);
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_domain_error_message_verbatim() {
        let outcome = Err(SearchError::Domain("Movie not found!".to_string()));
        let state = SearchState::from_outcome(SearchOrigin::Submit, outcome);

        assert_eq!(state, SearchState::Failure("Movie not found!".to_string()));
        assert!(state.results().is_empty());
    }

    #[test]
    fn test_transport_error_hides_cause() {
        let outcome = Err(SearchError::Transport("connection refused (os error 111)".to_string()));
        let state = SearchState::from_outcome(SearchOrigin::Submit, outcome);

        assert_eq!(state.error_message(), Some(SUBMIT_TRANSPORT_MESSAGE));
        assert!(state.results().is_empty());
    }

    #[test]
    fn test_transport_message_depends_on_origin() {
        let outcome = Err(SearchError::Transport("dns failure".to_string()));
        let state = SearchState::from_outcome(SearchOrigin::Mount, outcome);

        assert_eq!(state.error_message(), Some(MOUNT_TRANSPORT_MESSAGE));
    }

    #[test]
    fn test_empty_success_renders_nothing() {
        let state = SearchState::from_outcome(SearchOrigin::Mount, Ok(Vec::new()));
        assert_eq!(state, SearchState::Success(Vec::new()));
        assert!(state.results().is_empty());
    }
}
