//! arXiv search tool implementation
//!
//! Queries the arXiv API for scholarly articles. The feed comes back as Atom
//! XML; entries are extracted with lightweight tag scanning rather than a
//! full XML parser.

use super::traits::*;
use crate::network::HttpClient;
use crate::results::{SearchResponse, SearchResult};
use anyhow::Result;

const ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";

/// arXiv search tool for scientific papers
pub struct ArxivTool {
    top_k_results: usize,
    load_max_docs: usize,
    load_all_available_meta: bool,
    api_url: String,
    client: HttpClient,
}

impl ArxivTool {
    pub fn new(top_k_results: usize, load_max_docs: usize, client: HttpClient) -> Self {
        Self {
            top_k_results,
            load_max_docs,
            load_all_available_meta: true,
            api_url: ARXIV_API_URL.to_string(),
            client,
        }
    }

    /// Toggle parsing of authors, dates, categories, and PDF links
    pub fn with_all_meta(mut self, load: bool) -> Self {
        self.load_all_available_meta = load;
        self
    }

    /// Override the API endpoint (used by tests)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn top_k_results(&self) -> usize {
        self.top_k_results
    }

    pub fn load_max_docs(&self) -> usize {
        self.load_max_docs
    }

    fn build_request(&self, query: &str) -> ToolRequest {
        ToolRequest::get(&self.api_url)
            .param("search_query", format!("all:{}", query))
            .param("start", "0")
            .param("max_results", self.top_k_results.to_string())
    }

    fn parse_feed(&self, xml: &str) -> Vec<SearchResult> {
        let mut results = Vec::new();
        let mut position = 1u32;

        for entry_block in xml.split("<entry>").skip(1) {
            if results.len() >= self.load_max_docs {
                break;
            }

            let Some(entry_end) = entry_block.find("</entry>") else {
                continue;
            };
            let entry = &entry_block[..entry_end];

            let title = extract_tag(entry, "title")
                .map(|t| normalize_whitespace(&t))
                .unwrap_or_default();
            let url = extract_tag(entry, "id").unwrap_or_default();

            if title.is_empty() || url.is_empty() {
                continue;
            }

            let mut result = SearchResult::new(url, title, self.name()).with_position(position);

            if let Some(summary) = extract_tag(entry, "summary") {
                result = result.with_content(normalize_whitespace(&summary));
            }

            if self.load_all_available_meta {
                let authors: Vec<String> = entry
                    .split("<author>")
                    .skip(1)
                    .filter_map(|block| extract_tag(block, "name"))
                    .collect();
                if !authors.is_empty() {
                    result.metadata.author = Some(authors.join(", "));
                }

                result.metadata.published_date = extract_tag(entry, "published");
                result.metadata.pdf_url = extract_pdf_link(entry);
                result.metadata.categories = entry
                    .split("<category term=\"")
                    .skip(1)
                    .filter_map(|cat| cat.find('"').map(|end| cat[..end].to_string()))
                    .collect();
            }

            results.push(result);
            position += 1;
        }

        results
    }
}

#[async_trait::async_trait]
impl SearchTool for ArxivTool {
    fn name(&self) -> &str {
        "arxiv"
    }

    async fn run(&self, query: &str) -> Result<SearchResponse> {
        let request = self.build_request(query);
        let response = self.client.execute(request).await?;

        if !response.is_success() {
            anyhow::bail!("arXiv API error: HTTP {}", response.status);
        }

        let mut out = SearchResponse::new(query);
        out.results = self.parse_feed(&response.text);
        Ok(out)
    }
}

/// Extract the text content of an XML tag
fn extract_tag(xml: &str, tag: &str) -> Option<String> {
    let start_tag = format!("<{}", tag);
    let end_tag = format!("</{}>", tag);

    let start = xml.find(&start_tag)?;
    let content_start = xml[start..].find('>')? + start + 1;
    let end = xml[content_start..].find(&end_tag)? + content_start;

    Some(xml[content_start..end].to_string())
}

/// Find the href of the link element titled "pdf"
fn extract_pdf_link(entry: &str) -> Option<String> {
    let marker = entry.find("title=\"pdf\"")?;
    let before = &entry[..marker];
    let href_start = before.rfind("href=\"")? + 6;
    let href_rest = &before[href_start..];
    let href_end = href_rest.find('"')?;
    Some(href_rest[..href_end].to_string())
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
