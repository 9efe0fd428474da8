//! URL handling module for Crawl-Scraper
//!
//! This module resolves hyperlinks against the page they appear on, decides
//! whether a resolved link is inside the crawl scope, and derives the host
//! slug used in report file names.

mod domain;
mod resolve;

pub use domain::{extract_netloc, report_host_slug};
pub use resolve::resolve_link;

/// Returns true if `candidate` falls inside the crawl scope of `start_url`
///
/// The scope test is a literal string prefix check on the resolved URL, not
/// a comparison of URL authorities. A seed of `https://example.com/docs`
/// therefore admits `https://example.com/docs-archive` but rejects
/// `https://example.com/blog`, and a seed of `https://example.com` admits
/// `https://example.com.evil.test/`.
///
/// # Examples
///
/// ```
/// use crawl_scraper::url::is_in_scope;
///
/// assert!(is_in_scope("https://example.com/a", "https://example.com/"));
/// assert!(!is_in_scope("https://other.com/a", "https://example.com/"));
/// ```
pub fn is_in_scope(candidate: &str, start_url: &str) -> bool {
    candidate.starts_with(start_url)
}
