//! Brave Search tool implementation
//!
//! Uses the official Brave Search API. The subscription token may be empty;
//! construction always succeeds and authentication errors surface at query
//! time.

use super::traits::*;
use crate::network::HttpClient;
use crate::results::{SearchResponse, SearchResult};
use anyhow::Result;
use serde::Deserialize;

const BRAVE_API_URL: &str = "https://api.search.brave.com/res/v1/web/search";

/// Brave web search tool
pub struct BraveTool {
    api_key: String,
    count: usize,
    api_url: String,
    client: HttpClient,
}

impl BraveTool {
    pub fn new(api_key: impl Into<String>, count: usize, client: HttpClient) -> Self {
        Self {
            api_key: api_key.into(),
            count,
            api_url: BRAVE_API_URL.to_string(),
            client,
        }
    }

    /// Override the API endpoint (used by tests)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    fn build_request(&self, query: &str) -> ToolRequest {
        ToolRequest::get(&self.api_url)
            .header("X-Subscription-Token", &self.api_key)
            .header("Accept", "application/json")
            .param("q", query)
            .param("count", self.count.to_string())
    }

    fn parse_response(&self, query: &str, response: &ToolResponse) -> Result<SearchResponse> {
        let parsed: BraveResponse = response.json()?;

        let mut out = SearchResponse::new(query);
        for (i, result) in parsed.web.results.into_iter().enumerate() {
            let mut r =
                SearchResult::new(result.url, result.title, self.name()).with_position((i + 1) as u32);
            if let Some(description) = result.description {
                r = r.with_content(description);
            }
            r.metadata.published_date = result.page_age;
            out.results.push(r);
        }

        Ok(out)
    }
}

#[async_trait::async_trait]
impl SearchTool for BraveTool {
    fn name(&self) -> &str {
        "brave_search"
    }

    async fn run(&self, query: &str) -> Result<SearchResponse> {
        let request = self.build_request(query);
        let response = self.client.execute(request).await?;

        if !response.is_success() {
            anyhow::bail!("Brave Search API error: HTTP {}", response.status);
        }

        self.parse_response(query, &response)
    }
}

#[derive(Debug, Deserialize)]
struct BraveResponse {
    #[serde(default)]
    web: BraveWeb,
}

#[derive(Debug, Default, Deserialize)]
struct BraveWeb {
    #[serde(default)]
    results: Vec<BraveResult>,
}

#[derive(Debug, Deserialize)]
struct BraveResult {
    title: String,
    url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    page_age: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tool(count: usize) -> BraveTool {
        BraveTool::new("brave-key", count, HttpClient::new().unwrap())
    }

    #[test]
    fn test_build_request() {
        let request = tool(4).build_request("rust");

        assert_eq!(request.url, BRAVE_API_URL);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.params.get("q"), Some(&"rust".to_string()));
        assert_eq!(request.params.get("count"), Some(&"4".to_string()));
        assert_eq!(
            request.headers.get("X-Subscription-Token"),
            Some(&"brave-key".to_string())
        );
    }

    #[test]
    fn test_empty_api_key_is_allowed() {
        let tool = BraveTool::new("", 3, HttpClient::new().unwrap());
        let request = tool.build_request("rust");
        assert_eq!(
            request.headers.get("X-Subscription-Token"),
            Some(&String::new())
        );
    }

    #[tokio::test]
    async fn test_run_against_mock_server() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("q", "rust"))
            .and(query_param("count", "2"))
            .and(header("X-Subscription-Token", "brave-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "web": {
                    "results": [
                        {
                            "title": "Rust",
                            "url": "https://www.rust-lang.org/",
                            "description": "The Rust language",
                            "page_age": "2024-01-01T00:00:00"
                        }
                    ]
                }
            })))
            .mount(&server)
            .await;

        let tool = tool(2).with_api_url(server.uri());
        let response = tool.run("rust").await.unwrap();

        assert_eq!(response.result_count(), 1);
        assert_eq!(response.results[0].engine, "brave_search");
        assert_eq!(
            response.results[0].metadata.published_date.as_deref(),
            Some("2024-01-01T00:00:00")
        );
    }
}
