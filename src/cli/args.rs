//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Index SOP documents under a root directory into a spreadsheet
//! - `init`: Initialize a sopscan configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::ResolutionPolicy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Directory to scan for SOP documents (overrides config file)
    #[arg(long, env = "SOPSCAN_ROOT")]
    pub root: Option<PathBuf>,

    /// Spreadsheet file to write (overrides config file)
    #[arg(short, long, env = "SOPSCAN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Worksheet name (overrides config file)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Regex a file name must match to count as an SOP (overrides config file)
    #[arg(long)]
    pub pattern: Option<String>,

    /// How to pick one date when a document has several (overrides config file)
    #[arg(long, value_enum)]
    pub policy: Option<ResolutionPolicy>,

    /// Print the records as JSON to stdout
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan a directory tree for SOP documents and export them to a spreadsheet
    Scan(ScanCommand),
    /// Initialize a new .sopscanrc.json configuration file
    Init,
}
