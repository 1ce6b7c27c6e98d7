//! WebSearch-RS: configurable web search tools for AI agents
//!
//! Provides a factory that builds one of five search provider tools (Tavily,
//! DuckDuckGo, Brave Search, arXiv, SearX) from configuration, wrapped in a
//! logging decorator. Tools expose a single async `run(query)` operation
//! returning a common result model.

pub mod config;
pub mod error;
pub mod network;
pub mod results;
pub mod tools;

pub use config::Settings;
pub use error::ToolError;
pub use results::{ImageResult, SearchResponse, SearchResult};
pub use tools::{get_web_search_tool, LoggedTool, SearchEngine, SearchTool};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
