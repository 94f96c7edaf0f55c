use std::path::PathBuf;

use crate::core::ExtractOutcome;

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub root: PathBuf,
    pub output: PathBuf,
    pub sheet_name: String,
    pub outcome: ExtractOutcome,
    /// Print records as JSON instead of a summary line.
    pub json: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running sopscan commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    /// Number of records written by a scan. 0 for other commands.
    pub fn record_count(&self) -> usize {
        match &self.summary {
            CommandSummary::Scan(summary) => summary.outcome.records.len(),
            CommandSummary::Init(_) => 0,
        }
    }
}
