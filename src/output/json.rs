//! Structured report: a pretty-printed JSON array of `{url, title, depth}`

use crate::crawler::PageResult;
use crate::output::traits::{OutputResult, ReportWriter};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// JSON report; every field is present even when the title is empty
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReport;

impl ReportWriter for JsonReport {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn write_report(&self, results: &[PageResult], out: &mut dyn Write) -> OutputResult<()> {
        serde_json::to_writer_pretty(&mut *out, results)?;
        out.flush()?;
        Ok(())
    }
}

/// Reads a JSON report back into page results
pub fn read_json_report(path: &Path) -> OutputResult<Vec<PageResult>> {
    let file = File::open(path)?;
    let results = serde_json::from_reader(BufReader::new(file))?;
    Ok(results)
}
