//! HTTP networking module
//!
//! Provides the shared HTTP client search tools use to reach providers.

mod client;
mod user_agent;

pub use client::HttpClient;
pub use user_agent::generate_user_agent;
