//! Result type definitions

use serde::{Deserialize, Serialize};
use url::Url;

/// A single search result returned by a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The URL of the result
    pub url: String,
    /// The title of the result
    pub title: String,
    /// Content snippet/description
    pub content: Option<String>,
    /// Engine that returned this result
    pub engine: String,
    /// Position in the provider's result list (1-indexed)
    #[serde(default)]
    pub position: u32,
    /// Additional metadata
    #[serde(default)]
    pub metadata: ResultMetadata,
}

impl SearchResult {
    /// Create a new result
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        engine: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            content: None,
            engine: engine.into(),
            position: 0,
            metadata: ResultMetadata::default(),
        }
    }

    /// Add a content snippet
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the position
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }

    /// Get the hostname from the URL
    pub fn hostname(&self) -> Option<String> {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }
}

/// Additional result metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultMetadata {
    /// Author names (scholarly results)
    pub author: Option<String>,
    /// Published date
    pub published_date: Option<String>,
    /// Direct PDF link (scholarly results)
    pub pdf_url: Option<String>,
    /// Subject categories (scholarly results)
    #[serde(default)]
    pub categories: Vec<String>,
    /// Provider relevance score
    pub score: Option<f64>,
    /// Full page content, when the provider returns it
    pub raw_content: Option<String>,
}

/// An image result with an optional description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResult {
    /// Image URL
    pub url: String,
    /// Description of the image, when the provider generates one
    pub description: Option<String>,
}

/// The complete response of a single tool invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query that was executed
    pub query: String,
    /// Search results
    pub results: Vec<SearchResult>,
    /// Image results (providers that support them)
    #[serde(default)]
    pub images: Vec<ImageResult>,
    /// Direct answer, when the provider generates one
    pub answer: Option<String>,
}

impl SearchResponse {
    /// Create an empty response for a query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Number of search results
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.images.is_empty() && self.answer.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_builder() {
        let result = SearchResult::new("https://example.org/page", "Example", "searx")
            .with_content("A snippet")
            .with_position(3);

        assert_eq!(result.position, 3);
        assert_eq!(result.content.as_deref(), Some("A snippet"));
        assert_eq!(result.hostname().as_deref(), Some("example.org"));
    }

    #[test]
    fn test_empty_response() {
        let response = SearchResponse::new("rust");
        assert!(response.is_empty());
        assert_eq!(response.result_count(), 0);
    }
}
