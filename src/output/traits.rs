//! Report writer trait and error types

use crate::crawler::PageResult;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A serialization of the final result list
///
/// Each implementation owns one file format. Writers receive the complete,
/// finished result list and must not reorder it.
pub trait ReportWriter {
    /// File extension of this format, without the dot
    fn extension(&self) -> &'static str;

    /// Writes every result to `out`
    fn write_report(&self, results: &[PageResult], out: &mut dyn Write) -> OutputResult<()>;

    /// Renders the report into a string
    fn render(&self, results: &[PageResult]) -> OutputResult<String> {
        let mut buf = Vec::new();
        self.write_report(results, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
