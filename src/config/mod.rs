//! Configuration module for Crawl-Scraper
//!
//! A [`CrawlConfig`] can come from a TOML file, from command-line flags, or
//! from `set` commands in the interactive shell. Every run gets its own
//! value; there is no shared global configuration.
//!
//! # Example
//!
//! ```no_run
//! use crawl_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.max_depth);
//! ```

mod parser;
mod settings;
mod types;
mod validation;

pub use types::{
    ConfigFile, CrawlConfig, DEFAULT_DELAY_SECS, DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_DEPTH,
    DEFAULT_OUTPUT_PREFIX, DEFAULT_TIMEOUT_SECS,
};

pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use settings::SETTING_NAMES;
pub use validation::{validate, validate_for_run};
