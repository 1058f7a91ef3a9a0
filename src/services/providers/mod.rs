/// Movie metadata provider abstraction
///
/// The search controller only depends on this trait, so the HTTP client can be
/// swapped for a fake in tests or for a different metadata source.
use crate::{error::SearchError, models::SearchResult};

pub mod omdb;

pub use omdb::OmdbProvider;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Search for titles by name
    ///
    /// Results come back in the provider's order. The query is forwarded as-is,
    /// including when it is empty.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
