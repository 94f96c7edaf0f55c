use unicode_width::UnicodeWidthStr;

use crate::core::SopRecord;

/// Header row of the SOP sheet.
pub const HEADERS: [&str; 5] = [
    "Department",
    "Number",
    "File Name/Title",
    "Link to documents",
    "Last Revision Date",
];

/// Widest a column may get. Hyperlink columns would otherwise span screens.
pub const MAX_COLUMN_WIDTH: usize = 111;

/// Date format of the "Last Revision Date" column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Empty,
    Text(String),
    /// A formula, stored without its leading `=`, with a precomputed result.
    Formula { formula: String, cached: String },
}

impl CellValue {
    /// Text or formula depending on whether the value starts with `=`.
    pub fn from_input(value: &str, cached: impl Into<String>) -> Self {
        match value.strip_prefix('=') {
            Some(formula) => CellValue::Formula {
                formula: formula.to_string(),
                cached: cached.into(),
            },
            None => CellValue::Text(value.to_string()),
        }
    }

    /// The text a user typed to produce this cell.
    fn input_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(text) => text.clone(),
            CellValue::Formula { formula, .. } => format!("={}", formula),
        }
    }
}

/// One sheet row per record, in record order.
pub fn record_rows(records: &[SopRecord]) -> Vec<Vec<CellValue>> {
    records
        .iter()
        .map(|record| {
            vec![
                CellValue::Text(record.department.clone()),
                CellValue::Text(record.number.clone()),
                CellValue::Text(record.title.clone()),
                CellValue::from_input(&record.link, record.path.display().to_string()),
                record
                    .last_revision_date
                    .map_or(CellValue::Empty, |date| {
                        CellValue::Text(date.format(DATE_FORMAT).to_string())
                    }),
            ]
        })
        .collect()
}

/// Width of each column: the widest entry, header included, plus one, capped
/// at [`MAX_COLUMN_WIDTH`]. Formulas are measured by their formula text.
pub fn column_widths(headers: &[&str], rows: &[Vec<CellValue>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let widest = rows
                .iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| UnicodeWidthStr::width(cell.input_text().as_str()))
                .chain(std::iter::once(UnicodeWidthStr::width(*header)))
                .max()
                .unwrap_or(0);
            (widest + 1).min(MAX_COLUMN_WIDTH)
        })
        .collect()
}
