use std::fmt::Display;

/// URL template for a title's external reference page
const IMDB_TITLE_URL: &str = "https://www.imdb.com/title/";

/// Sentinel OMDb uses for fields it has no value for
pub const NOT_AVAILABLE: &str = "N/A";

/// Opaque provider identifier for a title (an IMDb ID such as "tt0372784")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImdbId(pub String);

impl ImdbId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// External reference page for this title
    pub fn reference_url(&self) -> String {
        format!("{}{}", IMDB_TITLE_URL, self.0)
    }
}

impl Display for ImdbId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Poster reference for a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poster {
    Url(String),
    Missing,
}

impl Poster {
    /// Maps the provider's raw poster field, treating the "N/A" sentinel as missing
    pub fn from_raw(raw: Option<String>) -> Self {
        match raw {
            Some(url) if !url.trim().is_empty() && url != NOT_AVAILABLE => Poster::Url(url),
            _ => Poster::Missing,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Poster::Url(url) => Some(url),
            Poster::Missing => None,
        }
    }
}

/// One movie, series or episode returned by a title search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: ImdbId,
    pub title: String,
    pub year: String,
    pub media_type: String,
    pub poster: Poster,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_url() {
        let id = ImdbId::new("tt0372784");
        assert_eq!(id.reference_url(), "https://www.imdb.com/title/tt0372784");
    }

    #[test]
    fn test_imdb_id_display() {
        let id = ImdbId::new("tt0096895");
        assert_eq!(format!("{}", id), "tt0096895");
    }

    #[test]
    fn test_poster_sentinel_is_missing() {
        assert_eq!(Poster::from_raw(Some("N/A".to_string())), Poster::Missing);
        assert_eq!(Poster::from_raw(Some(String::new())), Poster::Missing);
        assert_eq!(Poster::from_raw(None), Poster::Missing);
    }

    #[test]
    fn test_poster_url_kept() {
        let poster = Poster::from_raw(Some("https://m.media-amazon.com/images/x.jpg".to_string()));
        assert_eq!(poster.url(), Some("https://m.media-amazon.com/images/x.jpg"));
    }
}
