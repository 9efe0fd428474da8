//! Crawl-Scraper: a breadth-first, same-scope page title crawler
//!
//! This crate walks the hyperlinks reachable from a seed URL, level by level,
//! records the title of every page it dispatches, and writes the results as
//! text, CSV and JSON reports.

pub mod config;
pub mod crawler;
pub mod output;
pub mod shell;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for crawl runs
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidState {
        from: state::EngineState,
        to: state::EngineState,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Start URL is not set")]
    MissingStartUrl,

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{Crawler, FrontierEntry, PageResult};
pub use state::EngineState;
