//! Line-delimited text report: `url<TAB>title<TAB>depth` per page

use crate::crawler::PageResult;
use crate::output::traits::{OutputResult, ReportWriter};
use std::io::Write;

/// Tab-separated text report without a header
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReport;

impl ReportWriter for TextReport {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn write_report(&self, results: &[PageResult], out: &mut dyn Write) -> OutputResult<()> {
        for result in results {
            writeln!(out, "{}\t{}\t{}", result.url, result.title, result.depth)?;
        }
        out.flush()?;
        Ok(())
    }
}
