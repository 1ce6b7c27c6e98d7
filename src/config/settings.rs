//! Settings structures for WebSearch-RS configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default SearX instance used when no host is configured
pub const DEFAULT_SEARX_HOST: &str = "http://localhost:2304";

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SEARCH_ENGINE") {
            self.search.engine = val;
        }
        if let Ok(val) = std::env::var("SEARCH_MAX_RESULTS") {
            if let Ok(n) = val.parse() {
                self.search.max_results = n;
            }
        }
        if let Ok(val) = std::env::var("TAVILY_API_KEY") {
            self.search.tavily_api_key = Some(val);
        }
        if let Ok(val) = std::env::var("BRAVE_SEARCH_API_KEY") {
            self.search.brave_api_key = Some(val);
        }
        if let Ok(val) = std::env::var("SEARX_HOST") {
            self.search.searx_host = Some(val);
        }
    }

    /// Effective SearX host, falling back to the default instance
    pub fn searx_host(&self) -> &str {
        self.search
            .searx_host
            .as_deref()
            .unwrap_or(DEFAULT_SEARX_HOST)
    }
}

/// Search tool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Selected search engine identifier
    /// (tavily, duckduckgo, brave_search, arxiv, searx)
    pub engine: String,
    /// Default number of results per query
    pub max_results: usize,
    /// Language code sent to providers that accept one
    pub language: String,
    /// Tavily API key
    pub tavily_api_key: Option<String>,
    /// Brave Search API key
    pub brave_api_key: Option<String>,
    /// SearX instance URL
    pub searx_host: Option<String>,
    /// Skip certificate verification for the SearX instance
    pub searx_unsecure: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            engine: "tavily".to_string(),
            max_results: 5,
            language: "en".to_string(),
            tavily_api_key: None,
            brave_api_key: None,
            searx_host: None,
            searx_unsecure: false,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Default request timeout in seconds
    pub request_timeout: f64,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}
