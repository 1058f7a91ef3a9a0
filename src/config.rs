use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::search_controller::{ControllerSettings, ResponseOrdering};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Query issued when the widget first mounts
    #[serde(default = "default_query")]
    pub default_query: String,

    /// How overlapping responses are applied to the search state
    #[serde(default)]
    pub response_ordering: ResponseOrdering,

    /// File that receives tracing output while the terminal is in use
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_query() -> String {
    "batman".to_string()
}

fn default_log_file() -> String {
    "movie-search.log".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.omdb_api_key.trim().is_empty() {
            return Err(AppError::Config("OMDB_API_KEY must not be empty".to_string()));
        }
        reqwest::Url::parse(&self.omdb_api_url).map_err(|e| {
            AppError::Config(format!("Invalid OMDB_API_URL '{}': {}", self.omdb_api_url, e))
        })?;
        Ok(())
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            default_query: self.default_query.clone(),
            ordering: self.response_ordering,
        }
    }
}
