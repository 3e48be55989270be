//! prnreport-report: spreadsheet rendering of printer records
//!
//! Pure serialization: records arrive sorted and are written one per row
//! below a dated title and a fixed seven-column header.

pub mod error;
pub mod layout;
pub mod writer;

pub use error::ReportError;
pub use layout::{ReportRow, file_name};
pub use writer::ReportWriter;
