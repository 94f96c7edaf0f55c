//! Spreadsheet export of SOP records.
//!
//! - `columns`: record → cell conversion and column sizing
//! - `xlsx`: the `.xlsx` package writer

mod columns;
mod xlsx;

use std::{
    fs::File,
    io::{BufWriter, Seek, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};

pub use columns::{CellValue, DATE_FORMAT, HEADERS, MAX_COLUMN_WIDTH, column_widths, record_rows};

use crate::core::SopRecord;

/// Characters a worksheet name may not contain.
const INVALID_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];
const MAX_SHEET_NAME_LEN: usize = 31;

/// Check that `name` is accepted as a worksheet name by spreadsheet applications.
pub fn validate_sheet_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Sheet name must not be empty");
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        bail!(
            "Sheet name \"{}\" is longer than {} characters",
            name,
            MAX_SHEET_NAME_LEN
        );
    }
    if let Some(c) = name.chars().find(|c| INVALID_SHEET_CHARS.contains(c)) {
        bail!("Sheet name \"{}\" contains invalid character '{}'", name, c);
    }
    Ok(())
}

/// Write `records` as a one-sheet workbook: a header row, then one row per record.
pub fn write_workbook<W: Write + Seek>(
    target: W,
    sheet_name: &str,
    records: &[SopRecord],
) -> Result<W> {
    validate_sheet_name(sheet_name)?;

    let mut rows = vec![
        HEADERS
            .iter()
            .map(|h| CellValue::Text(h.to_string()))
            .collect::<Vec<_>>(),
    ];
    let body = record_rows(records);
    let widths = column_widths(&HEADERS, &body);
    rows.extend(body);

    xlsx::write_package(target, sheet_name, &rows, &widths)
}

/// Write `records` to an `.xlsx` file at `path`, replacing any existing file.
pub fn export_to_file(path: &Path, sheet_name: &str, records: &[SopRecord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create spreadsheet: {}", path.display()))?;
    let mut writer = write_workbook(BufWriter::new(file), sheet_name, records)
        .with_context(|| format!("Failed to write spreadsheet: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write spreadsheet: {}", path.display()))?;
    Ok(())
}
