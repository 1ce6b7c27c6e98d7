//! WebSearch-RS: configurable web search tools for AI agents
//!
//! One-shot CLI entry point: builds the configured tool and runs a single
//! query, printing the response as JSON.

use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use websearch_rs::{config::Settings, get_web_search_tool};

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args[0] == "-h" || args[0] == "--help" {
        print_usage();
        return Ok(());
    }
    let query = args.join(" ");

    let settings = load_settings()?;
    info!(
        engine = %settings.search.engine,
        max_results = settings.search.max_results,
        "building search tool"
    );

    let tool = get_web_search_tool(&settings, settings.search.max_results)?;
    let response = tool.run(&query).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    let paths = [
        PathBuf::from("websearch.yml"),
        PathBuf::from("config/websearch.yml"),
        dirs::config_dir()
            .map(|p| p.join("websearch-rs/websearch.yml"))
            .unwrap_or_default(),
    ];

    if let Ok(path) = std::env::var("WEBSEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

fn print_usage() {
    println!(
        r#"WebSearch-RS v{}

USAGE:
    websearch-rs <QUERY>

ENVIRONMENT VARIABLES:
    WEBSEARCH_SETTINGS_PATH  Path to websearch.yml
    SEARCH_ENGINE            tavily | duckduckgo | brave_search | arxiv | searx
    SEARCH_MAX_RESULTS       Number of results per query
    TAVILY_API_KEY           Tavily API key
    BRAVE_SEARCH_API_KEY     Brave Search API key
    SEARX_HOST               SearX instance URL
"#,
        websearch_rs::VERSION
    );
}
