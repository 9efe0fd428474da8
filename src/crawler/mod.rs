//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic:
//! - HTTP fetching that degrades to an empty body on failure
//! - HTML parsing for the title and in-scope links
//! - The FIFO frontier with its visited set
//! - Batched, concurrency-bounded crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod result;

pub use coordinator::{run_crawl, Crawler};
pub use fetcher::{build_http_client, fetch_text, fetch_url, FetchResult};
pub use frontier::{Frontier, FrontierEntry};
pub use parser::{extract_page, ExtractedPage};
pub use result::PageResult;

use crate::config::CrawlConfig;
use crate::output::{summarize, write_reports, CrawlSummary, ReportFiles};
use crate::CrawlError;
use chrono::Utc;

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Page results in the order they were recorded
    pub results: Vec<PageResult>,

    /// Paths of the written report files
    pub files: ReportFiles,

    /// Run statistics
    pub summary: CrawlSummary,
}

/// Runs a complete crawl and writes its reports
///
/// This is the main entry point for a run. It will:
/// 1. Validate the configuration and start the engine
/// 2. Crawl until the frontier is empty
/// 3. Hand the finished results to the reporter, once
///
/// A run whose pages all failed to fetch still succeeds and reports them.
///
/// # Arguments
///
/// * `config` - Settings of the run, including the seed URL and report prefix
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Results, written report paths and run statistics
/// * `Err(CrawlError)` - The configuration was rejected or a report could
///   not be written
pub async fn crawl(config: CrawlConfig) -> Result<CrawlReport, CrawlError> {
    let started_at = Utc::now();

    let mut crawler = Crawler::new(config);
    let results = crawler.run().await?;
    let finished_at = Utc::now();

    let config = crawler.config();
    let start_url = config.start_url().unwrap_or_default();
    let files = write_reports(&results, &config.output_prefix, start_url)?;
    let summary = summarize(&results, started_at, finished_at);

    Ok(CrawlReport {
        results,
        files,
        summary,
    })
}
