use crate::{error::SearchError, models::SearchResult, services::providers::MovieProvider};
use std::sync::Arc;
use std::time::Instant;

/// Service function for title search
///
/// Delegates to the configured MovieProvider and records how long the
/// provider took, whatever the outcome.
#[tracing::instrument(skip(provider), fields(provider_name = provider.name()))]
pub async fn search_titles(
    provider: Arc<dyn MovieProvider>,
    query: &str,
) -> Result<Vec<SearchResult>, SearchError> {
    let started = Instant::now();
    let outcome = provider.search(query).await;

    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        ok = outcome.is_ok(),
        "Provider lookup settled"
    );

    outcome
}
