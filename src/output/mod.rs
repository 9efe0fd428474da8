//! Output module for crawl reports
//!
//! This module handles:
//! - Writing the finished result list as text, CSV and JSON files
//! - Reading a JSON report back
//! - Computing and formatting run statistics
//!
//! All three files share the base name `<prefix>_report_<host>`, where
//! `<host>` is the seed URL's host (and port) with dots replaced by
//! underscores.

mod csv_report;
mod json;
pub mod stats;
mod text;
mod traits;

pub use csv_report::CsvReport;
pub use json::{read_json_report, JsonReport};
pub use stats::{summarize, write_summary, CrawlSummary};
pub use text::TextReport;
pub use traits::{OutputError, OutputResult, ReportWriter};

use crate::crawler::PageResult;
use crate::url::report_host_slug;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Paths of the files written for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    pub txt: PathBuf,
    pub csv: PathBuf,
    pub json: PathBuf,
}

impl ReportFiles {
    /// Returns the paths in write order
    pub fn paths(&self) -> [&PathBuf; 3] {
        [&self.txt, &self.csv, &self.json]
    }
}

/// Returns the shared base name of the report files
///
/// # Examples
///
/// ```
/// use crawl_scraper::output::report_base_name;
///
/// assert_eq!(
///     report_base_name("hasil", "https://www.example.com/blog"),
///     "hasil_report_www_example_com"
/// );
/// ```
pub fn report_base_name(output_prefix: &str, start_url: &str) -> String {
    format!("{}_report_{}", output_prefix, report_host_slug(start_url))
}

/// Writes one report with the given writer to `<base>.<extension>`
pub fn write_report_file(
    writer: &dyn ReportWriter,
    results: &[PageResult],
    base: &str,
) -> OutputResult<PathBuf> {
    let path = PathBuf::from(format!("{}.{}", base, writer.extension()));
    let mut file = BufWriter::new(File::create(&path)?);
    writer.write_report(results, &mut file)?;
    tracing::debug!("Wrote {} results to {}", results.len(), path.display());
    Ok(path)
}

/// Writes the text, CSV and JSON reports for a finished run
///
/// `output_prefix` may contain a directory part; the directory must exist.
///
/// # Arguments
///
/// * `results` - The finished result list, in recorded order
/// * `output_prefix` - Leading part of every report file name
/// * `start_url` - Seed URL whose host names the files
///
/// # Returns
///
/// * `Ok(ReportFiles)` - Paths of the text, CSV and JSON reports
/// * `Err(OutputError)` - A file could not be created or encoded
pub fn write_reports(
    results: &[PageResult],
    output_prefix: &str,
    start_url: &str,
) -> OutputResult<ReportFiles> {
    let base = report_base_name(output_prefix, start_url);

    let txt = write_report_file(&TextReport, results, &base)?;
    let csv = write_report_file(&CsvReport, results, &base)?;
    let json = write_report_file(&JsonReport, results, &base)?;

    tracing::info!("Reports written to {}.{{txt,csv,json}}", base);
    Ok(ReportFiles { txt, csv, json })
}
