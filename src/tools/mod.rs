//! Search tools module
//!
//! Defines the SearchTool trait, the five provider implementations, the
//! logging decorator, and the factory that wires them together.

mod factory;
mod logged;
mod traits;

// Provider implementations
pub mod arxiv;
pub mod brave;
pub mod duckduckgo;
pub mod searx;
pub mod tavily;

pub use factory::{get_web_search_tool, SearchEngine};
pub use logged::LoggedTool;
pub use traits::*;
