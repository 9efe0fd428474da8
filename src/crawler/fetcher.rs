//! HTTP fetcher implementation
//!
//! A fetch never fails its caller: network errors, timeouts and undecodable
//! bodies all come back as an empty body, which the crawler records as a page
//! with no title and no links.

use crate::config::CrawlConfig;
use reqwest::Client;

/// Outcome of a single GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// A response body was read (whatever the status code)
    Success {
        /// Response body decoded as text
        body: String,
    },

    /// Request or body read failed
    Failure {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns the body text, or an empty string for a failed fetch
    pub fn into_body(self) -> String {
        match self {
            Self::Success { body, .. } => body,
            Self::Failure { .. } => String::new(),
        }
    }
}

/// Builds the HTTP client shared by every fetch of a run
///
/// The timeout covers the whole request, body included.
///
/// # Example
///
/// ```no_run
/// use crawl_scraper::config::CrawlConfig;
/// use crawl_scraper::crawler::build_http_client;
///
/// let config = CrawlConfig::with_start_url("https://example.com/");
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &CrawlConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET request
///
/// The status code is not inspected: an error page still yields its body.
/// There are no retries.
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                e.to_string()
            };
            tracing::debug!("Fetch of {} failed: {}", url, error);
            return FetchResult::Failure { error };
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::debug!("{} answered HTTP {}", url, status.as_u16());
    }

    match response.text().await {
        Ok(body) => FetchResult::Success { body },
        Err(e) => {
            tracing::debug!("Reading body of {} failed: {}", url, e);
            FetchResult::Failure {
                error: e.to_string(),
            }
        }
    }
}

/// Fetches a URL and returns its body, or an empty string on any failure
pub async fn fetch_text(client: &Client, url: &str) -> String {
    fetch_url(client, url).await.into_body()
}
