use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::{
    error::SearchError,
    models::{SearchOrigin, SearchResult, SearchState},
    services::{providers::MovieProvider, title_search},
};

/// How responses to overlapping requests are applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Every response is applied in the order it arrives; the last to arrive wins
    #[default]
    ArrivalOrder,
    /// Responses to anything but the newest request are discarded
    LatestSubmission,
}

#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub default_query: String,
    pub ordering: ResponseOrdering,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            default_query: "batman".to_string(),
            ordering: ResponseOrdering::ArrivalOrder,
        }
    }
}

/// A settled request, sent back to the controller by its task
#[derive(Debug)]
pub struct SearchCompletion {
    pub ticket: u64,
    pub origin: SearchOrigin,
    pub query: String,
    pub outcome: Result<Vec<SearchResult>, SearchError>,
}

/// Owns the search lifecycle and the single `SearchState`
///
/// Each submission moves the state to `Loading` and spawns one task against
/// the provider. Nothing is cancelled: tasks report back over a channel and
/// the controller applies their outcomes when it drains it.
pub struct SearchController {
    provider: Arc<dyn MovieProvider>,
    settings: ControllerSettings,
    state: SearchState,
    latest_ticket: u64,
    in_flight: usize,
    completions_tx: UnboundedSender<SearchCompletion>,
    completions_rx: UnboundedReceiver<SearchCompletion>,
}

impl SearchController {
    pub fn new(provider: Arc<dyn MovieProvider>, settings: ControllerSettings) -> Self {
        let (completions_tx, completions_rx) = unbounded_channel();

        Self {
            provider,
            settings,
            state: SearchState::Loading,
            latest_ticket: 0,
            in_flight: 0,
            completions_tx,
            completions_rx,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Requests dispatched whose outcome has not been applied yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Issues the default query. Must run inside a tokio runtime.
    pub fn mount(&mut self) -> u64 {
        let query = self.settings.default_query.clone();
        self.dispatch(SearchOrigin::Mount, query)
    }

    /// Issues a user-submitted query. Must run inside a tokio runtime.
    pub fn submit(&mut self, query: impl Into<String>) -> u64 {
        self.dispatch(SearchOrigin::Submit, query.into())
    }

    fn dispatch(&mut self, origin: SearchOrigin, query: String) -> u64 {
        self.latest_ticket += 1;
        let ticket = self.latest_ticket;

        self.state = SearchState::Loading;
        self.in_flight += 1;

        tracing::info!(
            ticket,
            query = %query,
            origin = ?origin,
            provider = self.provider.name(),
            "Dispatching title search"
        );

        let provider = Arc::clone(&self.provider);
        let completions_tx = self.completions_tx.clone();

        tokio::spawn(async move {
            let search = tokio::spawn({
                let query = query.clone();
                async move { title_search::search_titles(provider, &query).await }
            });

            // A panicking provider still settles the request
            let outcome = match search.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(ticket, query = %query, error = %e, "Title search task join error");
                    Err(SearchError::Transport(e.to_string()))
                }
            };

            if let Err(SearchError::Transport(detail)) = &outcome {
                tracing::warn!(ticket, query = %query, error = %detail, "Title search failed");
            }

            // The receiver only goes away with the controller itself
            let _ = completions_tx.send(SearchCompletion {
                ticket,
                origin,
                query,
                outcome,
            });
        });

        ticket
    }

    /// Applies every completion that has already arrived, in arrival order.
    /// Returns how many changed the state.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            if self.apply(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Waits for the next completion and applies it, returning its ticket.
    /// Returns `None` when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<u64> {
        if self.in_flight == 0 {
            return None;
        }

        let completion = self.completions_rx.recv().await?;
        let ticket = completion.ticket;
        self.apply(completion);
        Some(ticket)
    }

    fn apply(&mut self, completion: SearchCompletion) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.settings.ordering == ResponseOrdering::LatestSubmission
            && completion.ticket < self.latest_ticket
        {
            tracing::debug!(
                ticket = completion.ticket,
                latest = self.latest_ticket,
                query = %completion.query,
                "Discarding response to superseded query"
            );
            return false;
        }

        self.state = SearchState::from_outcome(completion.origin, completion.outcome);

        tracing::debug!(
            ticket = completion.ticket,
            query = %completion.query,
            results = self.state.results().len(),
            failed = self.state.error_message().is_some(),
            "Search state replaced"
        );

        true
    }
}
