//! xlsx report writer

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use prnreport_inventory::PrinterRecord;
use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use tracing::{debug, info, instrument};

use crate::error::ReportError;
use crate::layout::{
    CellRole, DEFAULT_MAX_COLUMN_WIDTH, LAST_COLUMN, ReportRow, SHEET_NAME, column_widths,
    file_name, place_cells,
};

/// Renders printer records into a single-sheet workbook
#[derive(Debug, Clone)]
pub struct ReportWriter {
    max_column_width: usize,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
        }
    }

    /// Set the column width cap
    #[must_use]
    pub fn with_max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = width;
        self
    }

    /// Render the workbook into memory
    ///
    /// Layout: merged title row, bold header row, one row per record in the
    /// given order.
    ///
    /// # Errors
    /// Returns an error if the workbook cannot be assembled.
    pub fn render(
        &self,
        records: &[PrinterRecord],
        date: NaiveDate,
    ) -> Result<Vec<u8>, ReportError> {
        let rows: Vec<ReportRow> = records.iter().map(ReportRow::from).collect();

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        let title_format = Format::new()
            .set_bold()
            .set_font_size(14)
            .set_align(FormatAlign::Center);
        let header_format = Format::new().set_bold();

        for cell in place_cells(&rows, date) {
            match cell.role {
                CellRole::Title => {
                    sheet.merge_range(
                        cell.row,
                        cell.col,
                        cell.row,
                        LAST_COLUMN,
                        &cell.text,
                        &title_format,
                    )?;
                }
                CellRole::Header => {
                    sheet.write_string_with_format(cell.row, cell.col, &cell.text, &header_format)?;
                }
                CellRole::Data => {
                    sheet.write_string(cell.row, cell.col, &cell.text)?;
                }
            }
        }

        for (col, width) in (0..).zip(column_widths(&rows, self.max_column_width)) {
            #[allow(clippy::cast_precision_loss)]
            sheet.set_column_width(col, width as f64)?;
        }

        debug!(rows = rows.len(), "workbook rendered");
        Ok(workbook.save_to_buffer()?)
    }

    /// Write the dated report file into `dir`
    ///
    /// The workbook is fully rendered before the file is created, so a
    /// failure never leaves a partial report behind.
    ///
    /// # Errors
    /// Returns an error if rendering fails or the file cannot be written.
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub fn write(
        &self,
        dir: &Path,
        records: &[PrinterRecord],
        date: NaiveDate,
    ) -> Result<PathBuf, ReportError> {
        let buffer = self.render(records, date)?;
        let path = dir.join(file_name(date));

        std::fs::write(&path, buffer).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "report saved");
        Ok(path)
    }
}
