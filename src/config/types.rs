use serde::Deserialize;
use std::time::Duration;

/// Default crawl depth below the seed page
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Default number of pages fetched concurrently per batch
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

/// Default pause after each page, in seconds
pub const DEFAULT_DELAY_SECS: f64 = 0.5;

/// Default prefix of the report files
pub const DEFAULT_OUTPUT_PREFIX: &str = "hasil";

/// Default total request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 15.0;

/// Top-level layout of a TOML configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub crawler: CrawlConfig,
}

/// Settings for a single crawl run
///
/// A value is built once (from a file, CLI flags or the shell) and handed to
/// the crawler, which owns it for the whole run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlConfig {
    /// Seed URL; also the literal prefix every followed link must start with
    #[serde(rename = "url")]
    pub start_url: Option<String>,

    /// Maximum number of link hops from the seed
    #[serde(rename = "depth")]
    pub max_depth: u32,

    /// Maximum number of pages dispatched per batch
    #[serde(rename = "threads")]
    pub max_concurrency: usize,

    /// Pause after each processed page (seconds)
    #[serde(rename = "delay")]
    pub delay_secs: f64,

    /// Prefix for the report file names
    #[serde(rename = "output")]
    pub output_prefix: String,

    /// Accepted for compatibility; never consulted
    pub ignore_robots: bool,

    /// Total timeout for a single request (seconds)
    #[serde(rename = "timeout")]
    pub timeout_secs: f64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            start_url: None,
            max_depth: DEFAULT_MAX_DEPTH,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            delay_secs: DEFAULT_DELAY_SECS,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            ignore_robots: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CrawlConfig {
    /// Creates a default configuration seeded with `start_url`
    pub fn with_start_url(start_url: impl Into<String>) -> Self {
        Self {
            start_url: Some(start_url.into()),
            ..Self::default()
        }
    }

    /// Returns the seed URL, treating an empty string as unset
    pub fn start_url(&self) -> Option<&str> {
        self.start_url.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Per-page delay as a `Duration`
    ///
    /// Negative or non-finite values collapse to zero; `validate` rejects them
    /// before a run starts.
    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_secs).unwrap_or_default()
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs)
            .unwrap_or_else(|_| Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS))
    }

    /// Name/value pairs in display order, used by the shell's `show` command
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("url", self.start_url.clone().unwrap_or_else(|| "None".to_string())),
            ("depth", self.max_depth.to_string()),
            ("threads", self.max_concurrency.to_string()),
            ("delay", self.delay_secs.to_string()),
            ("output", self.output_prefix.clone()),
            ("ignore_robots", self.ignore_robots.to_string()),
            ("timeout", self.timeout_secs.to_string()),
            ("user_agent", self.user_agent.clone()),
        ]
    }
}
