use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::pattern::find_dates;
use crate::core::document::{Document, Table};

/// How to choose one date when a document has several qualifying ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionPolicy {
    /// The chronologically latest date wins.
    #[default]
    Latest,
    /// The last date in table scan order wins.
    LastSeen,
}

/// Where the resolved date came from, or why there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DateStatus {
    Body,
    Footer,
    /// The document has tables, but none of them holds a qualifying date.
    NoMatch,
    /// The document has no tables at all.
    NoTables,
    /// The document could not be opened or parsed.
    Unreadable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub date: Option<NaiveDate>,
    pub status: DateStatus,
}

impl Resolution {
    pub fn unreadable() -> Self {
        Self {
            date: None,
            status: DateStatus::Unreadable,
        }
    }
}

/// Pick the last revision date of a document.
///
/// Body tables are searched first. Footer tables are consulted only when the
/// body has no qualifying date. Dates in a paragraph mentioning "supersedes"
/// never qualify.
pub fn resolve(document: &Document, policy: ResolutionPolicy) -> Resolution {
    if !document.has_tables() {
        return Resolution {
            date: None,
            status: DateStatus::NoTables,
        };
    }

    if let Some(date) = pick(qualifying_dates(&document.body), policy) {
        return Resolution {
            date: Some(date),
            status: DateStatus::Body,
        };
    }

    if let Some(date) = pick(qualifying_dates(&document.footer), policy) {
        return Resolution {
            date: Some(date),
            status: DateStatus::Footer,
        };
    }

    Resolution {
        date: None,
        status: DateStatus::NoMatch,
    }
}

fn qualifying_dates(tables: &[Table]) -> Vec<NaiveDate> {
    tables
        .iter()
        .flat_map(Table::paragraphs)
        .flat_map(find_dates)
        .filter(|candidate| !candidate.superseded)
        .map(|candidate| candidate.date)
        .collect()
}

fn pick(dates: Vec<NaiveDate>, policy: ResolutionPolicy) -> Option<NaiveDate> {
    match policy {
        ResolutionPolicy::Latest => dates.into_iter().max(),
        ResolutionPolicy::LastSeen => dates.into_iter().last(),
    }
}
