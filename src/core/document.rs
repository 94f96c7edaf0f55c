//! In-memory table model of a parsed document.
//!
//! Only the parts the date resolver looks at are kept: the tables of the
//! document body and the tables of the first section's footer. Everything
//! outside a table is dropped by the reader.

use std::path::Path;

use thiserror::Error;

/// A parsed document reduced to its tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub body: Vec<Table>,
    pub footer: Vec<Table>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// A table cell with its direct paragraphs. Tables nested inside the cell are
/// not part of the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub paragraphs: Vec<String>,
}

impl Document {
    pub fn has_tables(&self) -> bool {
        !self.body.is_empty() || !self.footer.is_empty()
    }
}

impl Table {
    /// Iterate over every paragraph of the table, row by row, cell by cell.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .flat_map(|cell| cell.paragraphs.iter())
            .map(String::as_str)
    }
}

/// Failure to turn a file into a [`Document`].
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a valid document archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("malformed XML in {part}: {message}")]
    Xml { part: String, message: String },
    #[error("missing document part: {0}")]
    MissingPart(String),
}

/// Source of parsed documents.
///
/// The extractor only sees this trait, so tests can hand it prepared tables
/// instead of real files on disk.
pub trait DocumentReader {
    fn read(&self, path: &Path) -> Result<Document, DocumentError>;
}
