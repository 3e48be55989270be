//! Fixed report layout

use chrono::NaiveDate;
use prnreport_inventory::{Metric, PrinterRecord};
use rust_xlsxwriter::{ColNum, RowNum};

/// Number of report columns
pub const COLUMN_COUNT: usize = 7;

/// Header row, in column order
pub const HEADERS: [&str; COLUMN_COUNT] = [
    "Technical name",
    "Display name",
    "IP address",
    "Vendor",
    "Model",
    "Serial number",
    "Total pages",
];

/// Worksheet name
pub const SHEET_NAME: &str = "Printer report";

/// Default upper bound for column widths, in characters
pub const DEFAULT_MAX_COLUMN_WIDTH: usize = 50;

/// Padding added to the longest cell of a column
const COLUMN_PADDING: usize = 2;

/// Row holding the merged title
pub const TITLE_ROW: RowNum = 0;
/// Row holding the column headers
pub const HEADER_ROW: RowNum = 1;
/// Row of the first record
pub const FIRST_DATA_ROW: RowNum = 2;
/// Last column the title is merged across
#[allow(clippy::cast_possible_truncation)]
pub const LAST_COLUMN: ColNum = (COLUMN_COUNT - 1) as ColNum;

/// One printer flattened into report columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub cells: [String; COLUMN_COUNT],
}

impl From<&PrinterRecord> for ReportRow {
    fn from(record: &PrinterRecord) -> Self {
        Self {
            cells: [
                record.technical_name.clone(),
                record.display_name.clone(),
                record.ip_address.to_string(),
                record.vendor.clone(),
                record.metric(Metric::Model).to_string(),
                record.metric(Metric::SerialNumber).to_string(),
                record.metric(Metric::PageCount).to_string(),
            ],
        }
    }
}

/// Title row text
#[must_use]
pub fn title(date: NaiveDate) -> String {
    format!("Printer page counters as of {}", date.format("%d.%m.%Y"))
}

/// Report file name for a generation date
#[must_use]
pub fn file_name(date: NaiveDate) -> String {
    format!("printers_report_{}.xlsx", date.format("%Y-%m-%d"))
}

/// What a placed cell holds, which decides its format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    /// Dated title, merged across every column
    Title,
    /// Column header
    Header,
    /// Record value
    Data,
}

/// One worksheet cell with its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedCell {
    pub row: RowNum,
    pub col: ColNum,
    pub text: String,
    pub role: CellRole,
}

/// Every cell of the sheet, in write order
///
/// Title first, then the header row, then one row per record in the given
/// order.
#[must_use]
pub fn place_cells(rows: &[ReportRow], date: NaiveDate) -> Vec<PlacedCell> {
    let mut cells = Vec::with_capacity(1 + COLUMN_COUNT * (rows.len() + 1));

    cells.push(PlacedCell {
        row: TITLE_ROW,
        col: 0,
        text: title(date),
        role: CellRole::Title,
    });

    cells.extend((0..).zip(HEADERS).map(|(col, header)| PlacedCell {
        row: HEADER_ROW,
        col,
        text: header.to_string(),
        role: CellRole::Header,
    }));

    for (row, report_row) in (FIRST_DATA_ROW..).zip(rows) {
        cells.extend((0..).zip(&report_row.cells).map(|(col, text)| PlacedCell {
            row,
            col,
            text: text.clone(),
            role: CellRole::Data,
        }));
    }

    cells
}

/// Column widths sized to the header and data cells
///
/// The merged title row is not measured.
#[must_use]
pub fn column_widths(rows: &[ReportRow], max_width: usize) -> [usize; COLUMN_COUNT] {
    let mut widths = HEADERS.map(|h| h.chars().count());

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    widths.map(|w| (w + COLUMN_PADDING).min(max_width))
}
