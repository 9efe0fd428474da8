//! Run statistics computed from the final result list

use crate::crawler::PageResult;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Summary statistics for a finished crawl
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Pages dispatched, including ones whose fetch failed
    pub total_pages: usize,

    /// Pages with a non-empty title
    pub titled_pages: usize,

    /// Page count per depth, ascending
    pub pages_by_depth: BTreeMap<u32, usize>,
}

impl CrawlSummary {
    /// Pages recorded with an empty title
    pub fn untitled_pages(&self) -> usize {
        self.total_pages - self.titled_pages
    }

    /// Wall-clock duration of the run in seconds
    pub fn duration_seconds(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }

    /// Deepest level reached, if any page was visited
    pub fn max_depth_reached(&self) -> Option<u32> {
        self.pages_by_depth.keys().next_back().copied()
    }
}

/// Computes statistics for a result list
pub fn summarize(
    results: &[PageResult],
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
) -> CrawlSummary {
    let mut pages_by_depth = BTreeMap::new();
    for result in results {
        *pages_by_depth.entry(result.depth).or_insert(0) += 1;
    }

    CrawlSummary {
        started_at,
        finished_at,
        total_pages: results.len(),
        titled_pages: results.iter().filter(|r| r.has_title()).count(),
        pages_by_depth,
    }
}

/// Writes statistics in a formatted manner
pub fn write_summary(summary: &CrawlSummary, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "=== Crawl Statistics ===\n")?;

    writeln!(out, "Overview:")?;
    writeln!(out, "  Total pages found: {}", summary.total_pages)?;
    writeln!(out, "  With title: {}", summary.titled_pages)?;
    writeln!(out, "  Without title: {}", summary.untitled_pages())?;
    writeln!(
        out,
        "  Duration: {:.2}s ({} -> {})",
        summary.duration_seconds(),
        summary.started_at.format("%Y-%m-%d %H:%M:%S"),
        summary.finished_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(out)?;

    if let Some(deepest) = summary.max_depth_reached() {
        writeln!(out, "Pages by Depth (deepest: {}):", deepest)?;
        for (depth, count) in &summary.pages_by_depth {
            let percentage = (*count as f64 / summary.total_pages as f64) * 100.0;
            writeln!(out, "  {}: {} ({:.1}%)", depth, count, percentage)?;
        }
        writeln!(out)?;
    }

    Ok(())
}
