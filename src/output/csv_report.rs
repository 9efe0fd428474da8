//! Tabular report: CSV with a `url,title,depth` header

use crate::crawler::PageResult;
use crate::output::traits::{OutputResult, ReportWriter};
use std::io::Write;

const HEADER: [&str; 3] = ["url", "title", "depth"];

/// CSV report; the header is written even when there are no results
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReport;

impl ReportWriter for CsvReport {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write_report(&self, results: &[PageResult], out: &mut dyn Write) -> OutputResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(out);

        writer.write_record(HEADER)?;
        for result in results {
            writer.write_record([
                result.url.as_str(),
                result.title.as_str(),
                result.depth.to_string().as_str(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
