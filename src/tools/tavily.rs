//! Tavily search tool implementation
//!
//! Uses the Tavily API, a search service built for AI agents. Supports raw
//! page content, image results, and AI-generated image descriptions.

use super::traits::*;
use crate::network::HttpClient;
use crate::results::{ImageResult, ResultMetadata, SearchResponse, SearchResult};
use anyhow::Result;
use serde::Deserialize;
use serde_json::json;

const TAVILY_API_URL: &str = "https://api.tavily.com/search";

/// Tavily web search tool
pub struct TavilyTool {
    api_key: String,
    max_results: usize,
    include_raw_content: bool,
    include_images: bool,
    include_image_descriptions: bool,
    api_url: String,
    client: HttpClient,
}

impl TavilyTool {
    pub fn new(api_key: impl Into<String>, max_results: usize, client: HttpClient) -> Self {
        Self {
            api_key: api_key.into(),
            max_results,
            include_raw_content: true,
            include_images: true,
            include_image_descriptions: true,
            api_url: TAVILY_API_URL.to_string(),
            client,
        }
    }

    /// Toggle raw page content in results
    pub fn with_raw_content(mut self, include: bool) -> Self {
        self.include_raw_content = include;
        self
    }

    /// Toggle image results and their descriptions
    pub fn with_images(mut self, include: bool) -> Self {
        self.include_images = include;
        self.include_image_descriptions = include;
        self
    }

    /// Override the API endpoint (used by tests)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    fn build_request(&self, query: &str) -> ToolRequest {
        ToolRequest::post(&self.api_url)
            .header("Content-Type", "application/json")
            .json(json!({
                "api_key": self.api_key,
                "query": query,
                "max_results": self.max_results,
                "include_raw_content": self.include_raw_content,
                "include_images": self.include_images,
                "include_image_descriptions": self.include_image_descriptions,
            }))
    }

    fn parse_response(&self, query: &str, response: &ToolResponse) -> Result<SearchResponse> {
        let parsed: TavilyResponse = response.json()?;

        let mut out = SearchResponse::new(query);
        out.answer = parsed.answer.filter(|a| !a.is_empty());

        for (i, result) in parsed.results.into_iter().enumerate() {
            let mut r = SearchResult::new(result.url, result.title, self.name())
                .with_content(result.content)
                .with_position((i + 1) as u32);
            r.metadata = ResultMetadata {
                score: result.score,
                raw_content: result.raw_content,
                ..Default::default()
            };
            out.results.push(r);
        }

        for image in parsed.images {
            out.images.push(match image {
                TavilyImage::Url(url) => ImageResult {
                    url,
                    description: None,
                },
                TavilyImage::Described { url, description } => ImageResult { url, description },
            });
        }

        Ok(out)
    }
}

#[async_trait::async_trait]
impl SearchTool for TavilyTool {
    fn name(&self) -> &str {
        "tavily"
    }

    async fn run(&self, query: &str) -> Result<SearchResponse> {
        let request = self.build_request(query);
        let response = self.client.execute(request).await?;

        if !response.is_success() {
            anyhow::bail!("Tavily API error: HTTP {}", response.status);
        }

        self.parse_response(query, &response)
    }
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    results: Vec<TavilyResult>,
    #[serde(default)]
    images: Vec<TavilyImage>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    title: String,
    url: String,
    content: String,
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    raw_content: Option<String>,
}

/// Images come back as bare URLs unless descriptions were requested
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TavilyImage {
    Described {
        url: String,
        #[serde(default)]
        description: Option<String>,
    },
    Url(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tool(max_results: usize) -> TavilyTool {
        TavilyTool::new("test-key", max_results, HttpClient::new().unwrap())
    }

    #[test]
    fn test_build_request() {
        let request = tool(7).build_request("rust async");

        assert_eq!(request.url, TAVILY_API_URL);
        assert_eq!(request.method, HttpMethod::Post);
        let RequestBody::Json(body) = request.body.unwrap() else {
            panic!("expected JSON body");
        };
        assert_eq!(body["query"], "rust async");
        assert_eq!(body["max_results"], 7);
        assert_eq!(body["include_raw_content"], true);
        assert_eq!(body["include_images"], true);
        assert_eq!(body["include_image_descriptions"], true);
    }

    #[test]
    fn test_parse_response() {
        let payload = serde_json::json!({
            "answer": "Rust is a systems programming language.",
            "results": [
                {
                    "title": "Rust Programming Language",
                    "url": "https://www.rust-lang.org/",
                    "content": "A language empowering everyone.",
                    "score": 0.98,
                    "raw_content": "Full page text"
                }
            ],
            "images": [
                {"url": "https://example.org/ferris.png", "description": "The Rust mascot"},
                "https://example.org/logo.png"
            ]
        });

        let response = ToolResponse {
            status: 200,
            text: payload.to_string(),
            url: TAVILY_API_URL.to_string(),
        };

        let parsed = tool(5).parse_response("rust", &response).unwrap();
        assert_eq!(parsed.answer.as_deref(), Some("Rust is a systems programming language."));
        assert_eq!(parsed.result_count(), 1);
        assert_eq!(parsed.results[0].metadata.raw_content.as_deref(), Some("Full page text"));
        assert_eq!(parsed.images.len(), 2);
        assert_eq!(parsed.images[0].description.as_deref(), Some("The Rust mascot"));
        assert!(parsed.images[1].description.is_none());
    }

    #[tokio::test]
    async fn test_run_against_mock_server() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_partial_json(serde_json::json!({"query": "rust"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {"title": "Result", "url": "https://example.org", "content": "Snippet"}
                ],
                "images": []
            })))
            .mount(&server)
            .await;

        let tool = tool(3).with_api_url(format!("{}/search", server.uri()));
        let response = tool.run("rust").await.unwrap();

        assert_eq!(response.result_count(), 1);
        assert_eq!(response.results[0].engine, "tavily");
    }

    #[tokio::test]
    async fn test_run_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let tool = tool(3).with_api_url(format!("{}/search", server.uri()));
        let err = tool.run("rust").await.unwrap_err();
        assert!(err.to_string().contains("401"));
    }
}
