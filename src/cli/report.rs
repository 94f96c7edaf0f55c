//! Report formatting and printing utilities.
//!
//! Record output goes to stdout, diagnostics go to stderr. Kept separate from
//! the core so sopscan can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ScanSummary};
use crate::core::{DateStatus, SkipReason};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Scan(summary) => print_scan(summary, verbose, out, err),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
}

fn print_init<O: Write>(summary: &InitSummary, out: &mut O) {
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

fn print_scan<O: Write, E: Write>(
    summary: &ScanSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    let outcome = &summary.outcome;

    for failure in &outcome.read_failures {
        let _ = writeln!(
            err,
            "{} Could not open file {}: {}",
            "warning:".bold().yellow(),
            failure.path.display(),
            failure.message
        );
    }

    let mut inaccessible = 0;
    for skipped in &outcome.skipped {
        match (&skipped.reason, &skipped.path) {
            (SkipReason::Inaccessible(_), _) => {
                inaccessible += 1;
                if verbose {
                    let _ = writeln!(err, "{} {}", "warning:".bold().yellow(), skipped.reason);
                }
            }
            (reason, Some(path)) => {
                let _ = writeln!(
                    err,
                    "{} Skipped {}: {}",
                    "warning:".bold().yellow(),
                    path.display(),
                    reason
                );
            }
            (reason, None) => {
                let _ = writeln!(err, "{} {}", "warning:".bold().yellow(), reason);
            }
        }
    }
    if inaccessible > 0 && !verbose {
        let _ = writeln!(
            err,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            inaccessible,
            "-v".cyan()
        );
    }

    if verbose {
        for record in &outcome.records {
            let note = match record.date_status {
                DateStatus::NoTables => "document has no tables",
                DateStatus::NoMatch => "no revision date found",
                _ => continue,
            };
            let _ = writeln!(
                err,
                "{} {}: {}",
                "note:".bold(),
                record.path.display(),
                note
            );
        }
    }

    if summary.json {
        if let Ok(json) = serde_json::to_string_pretty(&outcome.records) {
            let _ = writeln!(out, "{}", json);
        }
        return;
    }

    if outcome.records.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            FAILURE_MARK.red(),
            format!("No SOP documents found under {}", summary.root.display()).red()
        );
        return;
    }

    let count = outcome.records.len();
    let undated = outcome
        .records
        .iter()
        .filter(|r| r.last_revision_date.is_none())
        .count();
    let mut message = format!(
        "Indexed {} SOP {} into {} (sheet \"{}\")",
        count,
        if count == 1 { "document" } else { "documents" },
        summary.output.display(),
        summary.sheet_name
    );
    if undated > 0 {
        message.push_str(&format!(", {} without a revision date", undated));
    }
    let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), message.green());
}
