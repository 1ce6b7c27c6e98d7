//! DuckDuckGo search tool implementation
//!
//! Queries the HTML endpoint and parses results out of the page, since
//! DuckDuckGo has no official search API.

use super::traits::*;
use crate::network::HttpClient;
use crate::results::{SearchResponse, SearchResult};
use anyhow::Result;
use scraper::{Html, Selector};
use std::collections::HashMap;

const DDG_HTML_URL: &str = "https://html.duckduckgo.com/html/";

/// DuckDuckGo web search tool
pub struct DuckDuckGoTool {
    max_results: usize,
    html_url: String,
    client: HttpClient,
}

impl DuckDuckGoTool {
    pub fn new(max_results: usize, client: HttpClient) -> Self {
        Self {
            max_results,
            html_url: DDG_HTML_URL.to_string(),
            client,
        }
    }

    /// Override the HTML endpoint (used by tests)
    pub fn with_html_url(mut self, url: impl Into<String>) -> Self {
        self.html_url = url.into();
        self
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    fn build_request(&self, query: &str) -> ToolRequest {
        let mut form_data = HashMap::new();
        form_data.insert("q".to_string(), query.to_string());
        form_data.insert("b".to_string(), String::new());

        ToolRequest::post(&self.html_url).form(form_data)
    }

    fn parse_results(&self, html: &str) -> Vec<SearchResult> {
        let document = Html::parse_document(html);
        let mut results = Vec::new();

        let result_selector = Selector::parse("div.result").unwrap();
        let title_selector = Selector::parse("a.result__a").unwrap();
        let snippet_selector = Selector::parse("a.result__snippet").unwrap();

        let mut position = 1u32;

        for element in document.select(&result_selector) {
            if results.len() >= self.max_results {
                break;
            }

            let Some(title_elem) = element.select(&title_selector).next() else {
                continue;
            };

            let title = title_elem.text().collect::<String>().trim().to_string();
            if title.is_empty() {
                continue;
            }

            let url = title_elem
                .value()
                .attr("href")
                .map(|h| h.to_string())
                .unwrap_or_default();

            // Skip ads and internal links
            if url.is_empty() || url.contains("duckduckgo.com") {
                continue;
            }

            let snippet = element
                .select(&snippet_selector)
                .next()
                .map(|s| s.text().collect::<String>().trim().to_string());

            let mut result = SearchResult::new(url, title, self.name()).with_position(position);
            if let Some(content) = snippet {
                result = result.with_content(content);
            }
            position += 1;

            results.push(result);
        }

        results
    }
}

#[async_trait::async_trait]
impl SearchTool for DuckDuckGoTool {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn run(&self, query: &str) -> Result<SearchResponse> {
        let request = self.build_request(query);
        let response = self.client.execute(request).await?;

        if !response.is_success() {
            anyhow::bail!("DuckDuckGo error: HTTP {}", response.status);
        }

        let mut out = SearchResponse::new(query);
        out.results = self.parse_results(&response.text);
        Ok(out)
    }
}
