//! SOP naming conventions.
//!
//! File names look like `1200a - Onboarding Policy.docx`: a 4-digit code, an
//! optional letter, an optional space, a hyphen, then the title. Department
//! folders follow the same shape, e.g. `1200-Finance`.

use std::{path::Path, sync::LazyLock};

use regex::Regex;

/// Default pattern a file name must match to be treated as an SOP.
pub const DEFAULT_FILE_PATTERN: &str = r"^\d{4}\w?\s?-.+";

static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}\w?").unwrap());

// Code prefix of a department folder: "1200-", "1200a - ", ...
static CODE_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}\w?\s?-\s?").unwrap());

/// Number and title parsed from a file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SopName {
    pub number: String,
    pub title: String,
}

impl SopName {
    /// Split a file stem into its leading code and its title.
    ///
    /// The title is everything after the first hyphen that follows the code.
    /// Returns `None` when the stem doesn't start with a code or has no hyphen.
    ///
    /// ```
    /// use sopscan::core::SopName;
    ///
    /// let name = SopName::parse("1200a HR - Onboarding Policy").unwrap();
    /// assert_eq!(name.number, "1200a");
    /// assert_eq!(name.title, "Onboarding Policy");
    /// ```
    pub fn parse(stem: &str) -> Option<Self> {
        let number = NUMBER_REGEX.find(stem)?;
        let rest = &stem[number.end()..];
        let (_, title) = rest.split_once('-')?;

        Some(Self {
            number: number.as_str().to_string(),
            title: title.trim().to_string(),
        })
    }
}

/// Department name of a folder: the folder name with its code prefix removed.
///
/// A folder without a code prefix keeps its whole name.
pub fn department_from_folder(folder: &str) -> String {
    CODE_PREFIX_REGEX.replace(folder, "").trim().to_string()
}

/// Spreadsheet formula that renders as a clickable link showing the path.
pub fn hyperlink_formula(path: &Path) -> String {
    let target = path.display().to_string().replace('"', "\"\"");
    format!("=HYPERLINK(\"{target}\", \"{target}\")")
}
