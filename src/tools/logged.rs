//! Logging decorator for search tools

use super::traits::SearchTool;
use crate::results::SearchResponse;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

/// Wraps a search tool so every invocation is logged.
///
/// Inputs are logged before the inner tool runs and the outcome after it
/// completes; the inner result is returned unchanged either way.
pub struct LoggedTool<T: SearchTool> {
    inner: T,
}

impl<T: SearchTool> LoggedTool<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Unwrap the decorator
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[async_trait]
impl<T: SearchTool> SearchTool for LoggedTool<T> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn run(&self, query: &str) -> Result<SearchResponse> {
        info!(tool = self.inner.name(), query, "running web search");

        let result = self.inner.run(query).await;

        match &result {
            Ok(response) => info!(
                tool = self.inner.name(),
                results = response.result_count(),
                images = response.images.len(),
                has_answer = response.answer.is_some(),
                "web search completed"
            ),
            Err(e) => warn!(tool = self.inner.name(), error = %e, "web search failed"),
        }

        result
    }
}
