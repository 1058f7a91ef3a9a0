/// OMDb API provider
///
/// API Flow:
/// 1. Title Search: GET /?apikey={key}&s={query} → envelope with `Response`
///    set to "True" (results under `Search`) or "False" (message under `Error`)
use crate::{
    error::SearchError,
    models::{OmdbSearchEnvelope, SearchResult},
    services::providers::MovieProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self::with_client(HttpClient::new(), api_key, api_url)
    }

    pub fn with_client(http_client: HttpClient, api_key: String, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/", self.api_url)
    }
}

#[async_trait::async_trait]
impl MovieProvider for OmdbProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let response = self
            .http_client
            .get(self.search_url())
            .query(&[("apikey", self.api_key.as_str()), ("s", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Transport(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw OMDb API response");

        let envelope: OmdbSearchEnvelope = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize OMDb response"
            );
            SearchError::from(e)
        })?;

        let outcome = envelope.into_results();

        match &outcome {
            Ok(results) => tracing::info!(
                query = %query,
                results = results.len(),
                provider = self.name(),
                "Title search completed"
            ),
            Err(e) => tracing::info!(
                query = %query,
                error = %e,
                provider = self.name(),
                "Title search rejected by provider"
            ),
        }

        outcome
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let provider = OmdbProvider::new(
            "test_key".to_string(),
            "http://test.local/".to_string(),
        );
        assert_eq!(provider.search_url(), "http://test.local/");
    }

    #[test]
    fn test_name() {
        let provider = OmdbProvider::new("k".to_string(), "http://test.local".to_string());
        assert_eq!(provider.name(), "omdb");
    }
}
