//! First-sheet XLSX decoding.
//!
//! `decode` turns raw container bytes into a [`Table`]: the first sheet in
//! declared order is read as a 2-D grid, grid row 0 becomes the header, and
//! every remaining row is zipped positionally against it. Subsequent sheets
//! are ignored by contract.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader as _, Xlsx};
use tracing::{debug, info};

use sheetmap_model::{CellValue, Table};

use crate::detection;
use crate::error::{DecodeError, Result};

/// Decode an in-memory XLSX payload into a table.
///
/// Fails with [`DecodeError::Corrupt`] when the bytes are not a parseable
/// workbook, [`DecodeError::NoSheets`] when the workbook declares no sheets,
/// and [`DecodeError::EmptySheet`] when the first sheet has no header row.
pub fn decode(bytes: &[u8]) -> Result<Table> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    let sheet_names = workbook.sheet_names();
    let first_sheet = sheet_names.first().ok_or(DecodeError::NoSheets)?.clone();
    if sheet_names.len() > 1 {
        debug!(
            skipped = sheet_names.len() - 1,
            "workbook has multiple sheets, reading only the first"
        );
    }
    let range = workbook.worksheet_range(&first_sheet)?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .ok_or(DecodeError::EmptySheet)?
        .iter()
        .map(header_name)
        .collect();

    let mut table = Table::new(header);
    for row in rows {
        table.push_row(row.iter().map(cell_value).collect());
    }

    info!(
        sheet = %first_sheet,
        rows = table.row_count(),
        columns = table.width(),
        "decoded spreadsheet"
    );
    Ok(table)
}

/// Detection plus decode for an on-disk file.
///
/// The extension and container signature are checked before any parsing, so
/// a wrong file type never reaches the decoder.
pub fn decode_file(path: &Path) -> Result<Table> {
    detection::check_file_type(path)?;
    let bytes = std::fs::read(path)?;
    detection::check_signature(&bytes)?;
    decode(&bytes)
}

/// A blank header cell still names a column; the key is the empty string.
fn header_name(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => cell_value(other).render(),
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Float(number) => CellValue::Number(*number),
        Data::Int(number) => CellValue::Number(*number as f64),
        // Datetimes stay as the serial number the container encodes; no
        // coercion beyond the format's own.
        Data::DateTime(datetime) => CellValue::Number(datetime.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::Text(text.clone()),
        Data::Bool(flag) => CellValue::Text(flag.to_string()),
        Data::Error(code) => CellValue::Text(code.to_string()),
    }
}
