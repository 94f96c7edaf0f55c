use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

// Matches M/D/YY, MM/DD/YYYY and the mixed forms in between, not preceded by a
// digit. Letters may touch the date. Group 1 is the date itself.
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])((?:0?[1-9]|1[0-2])/(?:0?[1-9]|[12][0-9]|3[01])/(?:(?:19|20)[0-9]{2}|[0-9]{2}))")
        .unwrap()
});

const EXCLUSION_WORD: &str = "supersedes";

/// A date-like fragment found in a table paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCandidate {
    pub date: NaiveDate,
    /// The containing paragraph refers to a prior version of the document.
    pub superseded: bool,
}

/// Expand a 2-digit year to `20YY`. Anything else is returned unchanged.
///
/// ```
/// use sopscan::core::dates::normalize_date_text;
///
/// assert_eq!(normalize_date_text("3/4/21"), "3/4/2021");
/// assert_eq!(normalize_date_text("3/4/2021"), "3/4/2021");
/// ```
pub fn normalize_date_text(text: &str) -> String {
    let mut parts: Vec<&str> = text.split('/').collect();
    let expanded;
    if parts.len() == 3 && parts[2].len() == 2 {
        expanded = format!("20{}", parts[2]);
        parts[2] = &expanded;
    }
    parts.join("/")
}

/// Parse an `M/D/YY` or `M/D/YYYY` fragment into a calendar date.
///
/// Returns `None` for strings that don't describe a real day, e.g. `2/30/2023`.
pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&normalize_date_text(text), "%m/%d/%Y").ok()
}

/// Find every date in a paragraph, in order of appearance.
pub fn find_dates(paragraph: &str) -> Vec<DateCandidate> {
    let superseded = paragraph.to_lowercase().contains(EXCLUSION_WORD);

    DATE_REGEX
        .captures_iter(paragraph)
        .filter_map(|caps| caps.get(1))
        .filter(|m| !followed_by_digit(paragraph, m.end()))
        .filter_map(|m| parse_date_text(m.as_str()))
        .map(|date| DateCandidate { date, superseded })
        .collect()
}

fn followed_by_digit(text: &str, end: usize) -> bool {
    text[end..].starts_with(|c: char| c.is_ascii_digit())
}
