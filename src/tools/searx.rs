//! SearX search tool implementation
//!
//! Queries a self-hosted SearX/SearXNG instance. The instance must have the
//! JSON output format enabled in its settings.

use super::traits::*;
use crate::network::HttpClient;
use crate::results::{SearchResponse, SearchResult};
use anyhow::Result;
use serde::Deserialize;

/// SearX metasearch tool
pub struct SearxTool {
    host: String,
    language: String,
    max_results: usize,
    client: HttpClient,
}

impl SearxTool {
    pub fn new(
        host: impl Into<String>,
        language: impl Into<String>,
        max_results: usize,
        client: HttpClient,
    ) -> Self {
        Self {
            host: host.into().trim_end_matches('/').to_string(),
            language: language.into(),
            max_results,
            client,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    fn build_request(&self, query: &str) -> ToolRequest {
        ToolRequest::get(format!("{}/search", self.host))
            .header("Accept", "application/json")
            .param("q", query)
            .param("format", "json")
            .param("language", &self.language)
    }

    fn parse_response(&self, query: &str, response: &ToolResponse) -> Result<SearchResponse> {
        let parsed: SearxResponse = response.json()?;

        let mut out = SearchResponse::new(query);
        out.answer = parsed.answers.into_iter().next();

        for (i, result) in parsed
            .results
            .into_iter()
            .take(self.max_results)
            .enumerate()
        {
            let mut r =
                SearchResult::new(result.url, result.title, self.name()).with_position((i + 1) as u32);
            if let Some(content) = result.content {
                r = r.with_content(content);
            }
            r.metadata.published_date = result.published_date;
            r.metadata.score = result.score;
            out.results.push(r);
        }

        Ok(out)
    }
}

#[async_trait::async_trait]
impl SearchTool for SearxTool {
    fn name(&self) -> &str {
        "searx"
    }

    async fn run(&self, query: &str) -> Result<SearchResponse> {
        let request = self.build_request(query);
        let response = self.client.execute(request).await?;

        if !response.is_success() {
            anyhow::bail!("SearX instance error: HTTP {}", response.status);
        }

        self.parse_response(query, &response)
    }
}

#[derive(Debug, Deserialize)]
struct SearxResponse {
    #[serde(default)]
    results: Vec<SearxResult>,
    #[serde(default)]
    answers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SearxResult {
    title: String,
    url: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default, rename = "publishedDate")]
    published_date: Option<String>,
    #[serde(default)]
    score: Option<f64>,
}
