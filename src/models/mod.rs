use serde::Deserialize;

use crate::error::SearchError;

pub mod search_state;
pub mod title;

pub use search_state::{SearchOrigin, SearchState};
pub use title::{ImdbId, Poster, SearchResult};

// ============================================================================
// OMDb API Types
// ============================================================================

/// Envelope returned by OMDb's `?s=` title search
///
/// The same shape carries both outcomes: `Response` is the string "True" with
/// a `Search` list, or "False" with an `Error` message.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<OmdbTitle>>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbSearchEnvelope {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }

    /// Converts the envelope into search results, preserving provider order
    pub fn into_results(self) -> Result<Vec<SearchResult>, SearchError> {
        if !self.is_success() {
            return Err(SearchError::Domain(
                self.error
                    .unwrap_or_else(|| "Provider returned no error message".to_string()),
            ));
        }

        let records = self.search.ok_or_else(|| {
            SearchError::Transport("success envelope is missing the Search list".to_string())
        })?;

        Ok(records.into_iter().map(SearchResult::from).collect())
    }
}

/// A single record in an OMDb search envelope
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbTitle {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Type")]
    pub title_type: String,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

impl From<OmdbTitle> for SearchResult {
    fn from(record: OmdbTitle) -> Self {
        SearchResult {
            id: ImdbId(record.imdb_id),
            title: record.title,
            year: record.year,
            media_type: record.title_type,
            poster: Poster::from_raw(record.poster),
        }
    }
}
