//! Error types for tool construction

use thiserror::Error;

/// Errors raised while building a search tool.
///
/// Failures that happen once a tool is running (network errors, bad
/// credentials, malformed provider responses) are not translated into this
/// type; they propagate as [`anyhow::Error`] from [`SearchTool::run`].
///
/// [`SearchTool::run`]: crate::tools::SearchTool::run
#[derive(Debug, Error)]
pub enum ToolError {
    /// The configured engine selector matched none of the known providers.
    #[error("unsupported search engine: {0}")]
    UnsupportedEngine(String),

    /// The requested result limit is not a positive integer.
    #[error("max_search_results must be positive, got {0}")]
    InvalidMaxResults(usize),

    /// The shared HTTP client could not be built from the outgoing settings.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] anyhow::Error),
}
