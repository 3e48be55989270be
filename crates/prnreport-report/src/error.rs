//! Error types for prnreport-report

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing the report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Workbook could not be built
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Report file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
