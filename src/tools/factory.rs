//! Search tool factory
//!
//! Selects a provider from the configured engine identifier and returns a
//! ready-to-invoke tool wrapped in the logging decorator.

use super::arxiv::ArxivTool;
use super::brave::BraveTool;
use super::duckduckgo::DuckDuckGoTool;
use super::logged::LoggedTool;
use super::searx::SearxTool;
use super::tavily::TavilyTool;
use super::traits::SearchTool;
use crate::config::{OutgoingSettings, Settings, DEFAULT_SEARX_HOST};
use crate::error::ToolError;
use crate::network::HttpClient;
use std::fmt;
use std::str::FromStr;

/// The supported search engines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    Tavily,
    DuckDuckGo,
    BraveSearch,
    Arxiv,
    Searx,
}

impl FromStr for SearchEngine {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tavily" => Ok(Self::Tavily),
            "duckduckgo" => Ok(Self::DuckDuckGo),
            "brave_search" => Ok(Self::BraveSearch),
            "arxiv" => Ok(Self::Arxiv),
            "searx" => Ok(Self::Searx),
            other => Err(ToolError::UnsupportedEngine(other.to_string())),
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Tavily => "tavily",
            Self::DuckDuckGo => "duckduckgo",
            Self::BraveSearch => "brave_search",
            Self::Arxiv => "arxiv",
            Self::Searx => "searx",
        };
        write!(f, "{}", s)
    }
}

/// Build the configured web search tool.
///
/// Reads the engine selector from `settings.search.engine`, constructs the
/// matching provider with `max_search_results` threaded through, and wraps
/// it in [`LoggedTool`]. No network I/O happens here.
pub fn get_web_search_tool(
    settings: &Settings,
    max_search_results: usize,
) -> Result<Box<dyn SearchTool>, ToolError> {
    if max_search_results == 0 {
        return Err(ToolError::InvalidMaxResults(max_search_results));
    }

    let engine = SearchEngine::from_str(&settings.search.engine)?;
    let client = build_client(&settings.outgoing, &settings.search.language)?;

    let tool: Box<dyn SearchTool> = match engine {
        SearchEngine::Tavily => {
            let api_key = settings
                .search
                .tavily_api_key
                .clone()
                .or_else(|| std::env::var("TAVILY_API_KEY").ok())
                .unwrap_or_default();
            Box::new(LoggedTool::new(
                TavilyTool::new(api_key, max_search_results, client)
                    .with_raw_content(true)
                    .with_images(true),
            ))
        }
        SearchEngine::DuckDuckGo => Box::new(LoggedTool::new(DuckDuckGoTool::new(
            max_search_results,
            client,
        ))),
        SearchEngine::BraveSearch => {
            let api_key = settings
                .search
                .brave_api_key
                .clone()
                .or_else(|| std::env::var("BRAVE_SEARCH_API_KEY").ok())
                .unwrap_or_default();
            Box::new(LoggedTool::new(BraveTool::new(
                api_key,
                max_search_results,
                client,
            )))
        }
        SearchEngine::Arxiv => Box::new(LoggedTool::new(
            ArxivTool::new(max_search_results, max_search_results, client).with_all_meta(true),
        )),
        SearchEngine::Searx => {
            let host = settings
                .search
                .searx_host
                .clone()
                .or_else(|| std::env::var("SEARX_HOST").ok())
                .unwrap_or_else(|| DEFAULT_SEARX_HOST.to_string());

            // The instance may run with a self-signed certificate
            let client = if settings.search.searx_unsecure {
                let outgoing = OutgoingSettings {
                    verify_ssl: false,
                    ..settings.outgoing.clone()
                };
                build_client(&outgoing, &settings.search.language)?
            } else {
                client
            };

            Box::new(LoggedTool::new(SearxTool::new(
                host,
                settings.search.language.clone(),
                max_search_results,
                client,
            )))
        }
    };

    Ok(tool)
}

fn build_client(outgoing: &OutgoingSettings, language: &str) -> Result<HttpClient, ToolError> {
    Ok(HttpClient::with_settings(outgoing)
        .map_err(ToolError::HttpClient)?
        .with_language(language))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_for(engine: &str) -> Settings {
        let mut settings = Settings::default();
        settings.search.engine = engine.to_string();
        settings
    }

    #[test]
    fn test_engine_from_str() {
        assert_eq!(
            SearchEngine::from_str("duckduckgo").unwrap(),
            SearchEngine::DuckDuckGo
        );
        assert_eq!(
            SearchEngine::from_str("brave_search").unwrap(),
            SearchEngine::BraveSearch
        );
        assert!(matches!(
            SearchEngine::from_str("not_a_real_engine"),
            Err(ToolError::UnsupportedEngine(v)) if v == "not_a_real_engine"
        ));
    }

    #[test]
    fn test_engine_display_round_trips() {
        for engine in [
            SearchEngine::Tavily,
            SearchEngine::DuckDuckGo,
            SearchEngine::BraveSearch,
            SearchEngine::Arxiv,
            SearchEngine::Searx,
        ] {
            assert_eq!(
                SearchEngine::from_str(&engine.to_string()).unwrap(),
                engine
            );
        }
    }

    #[test]
    fn test_factory_builds_each_known_engine() {
        for (engine, expected_name) in [
            ("tavily", "tavily"),
            ("duckduckgo", "duckduckgo"),
            ("brave_search", "brave_search"),
            ("arxiv", "arxiv"),
            ("searx", "searx"),
        ] {
            let tool = get_web_search_tool(&settings_for(engine), 5).unwrap();
            assert_eq!(tool.name(), expected_name);
        }
    }

    #[test]
    fn test_factory_rejects_unknown_engine() {
        let err = get_web_search_tool(&settings_for("not_a_real_engine"), 5).unwrap_err();
        assert!(matches!(
            err,
            ToolError::UnsupportedEngine(v) if v == "not_a_real_engine"
        ));
    }

    #[test]
    fn test_factory_rejects_zero_results() {
        let err = get_web_search_tool(&settings_for("tavily"), 0).unwrap_err();
        assert!(matches!(err, ToolError::InvalidMaxResults(0)));
    }

    #[test]
    fn test_arxiv_limits_thread_through() {
        let client = HttpClient::new().unwrap();
        let tool = ArxivTool::new(5, 5, client);
        assert_eq!(tool.top_k_results(), 5);
        assert_eq!(tool.load_max_docs(), 5);
    }

    #[test]
    fn test_brave_key_from_config_wins() {
        let mut settings = settings_for("brave_search");
        settings.search.brave_api_key = Some("from-config".to_string());

        let client = HttpClient::new().unwrap();
        let tool = BraveTool::new(
            settings.search.brave_api_key.clone().unwrap_or_default(),
            3,
            client,
        );
        assert_eq!(tool.api_key(), "from-config");
    }

    #[test]
    fn test_brave_missing_key_defaults_to_empty() {
        // No config value and no env var set in this test
        let settings = settings_for("brave_search");
        assert!(settings.search.brave_api_key.is_none());
        let tool = get_web_search_tool(&settings, 3);
        assert!(tool.is_ok());
    }

    #[test]
    fn test_searx_host_defaults_when_unset() {
        let client = HttpClient::new().unwrap();
        let tool = SearxTool::new(DEFAULT_SEARX_HOST, "en", 5, client);
        assert_eq!(tool.host(), "http://localhost:2304");
    }
}
