use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use super::dates::DateStatus;

/// One indexed SOP document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SopRecord {
    pub department: String,
    pub number: String,
    pub title: String,
    /// `=HYPERLINK(...)` formula pointing at the document.
    pub link: String,
    pub last_revision_date: Option<NaiveDate>,
    pub path: PathBuf,
    pub date_status: DateStatus,
}

/// A candidate file that produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: Option<PathBuf>,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file sits above the folder level that names its department.
    PathTooShallow { depth: usize, required: usize },
    /// The walker could not read an entry.
    Inaccessible(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::PathTooShallow { depth, required } => write!(
                f,
                "path is {} folder(s) deep, department folder needs at least {}",
                depth, required
            ),
            SkipReason::Inaccessible(message) => write!(f, "cannot access path: {}", message),
        }
    }
}

/// A document whose content could not be read. Its record has no date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    pub path: PathBuf,
    pub message: String,
}
