use std::{
    env,
    path::{self, Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, ScanSummary};
use crate::{
    cli::args::{ScanArgs, ScanCommand},
    config::{ConfigLoadResult, load_config},
    core::{FsWalker, extract},
    docx::DocxReader,
    export::{export_to_file, validate_sheet_name},
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    scan_in(&cwd, cmd.args)
}

/// Run a scan with `cwd` as the working directory.
///
/// Relative paths given on the command line resolve against `cwd`. Relative
/// paths from a config file resolve against the directory holding that file.
pub fn scan_in(cwd: &Path, args: ScanArgs) -> Result<CommandResult> {
    let ConfigLoadResult {
        mut config,
        path: config_path,
    } = load_config(cwd)?;
    let config_dir = config_path
        .as_deref()
        .and_then(Path::parent)
        .unwrap_or(cwd)
        .to_path_buf();

    if let Some(pattern) = args.pattern {
        config.file_pattern = pattern;
    }
    if let Some(policy) = args.policy {
        config.policy = policy;
    }
    if let Some(sheet) = args.sheet {
        config.sheet_name = sheet;
    }

    let root = match args.root {
        Some(root) => cwd.join(root),
        None => config_dir.join(&config.root),
    };
    let output = match args.output {
        Some(output) => cwd.join(output),
        None => config_dir.join(&config.output),
    };

    let options = config.extract_options()?;
    validate_sheet_name(&config.sheet_name)?;

    let root = absolute_dir(&root)?;
    let outcome = extract(&root, &options, &FsWalker, &DocxReader);

    export_to_file(&output, &config.sheet_name, &outcome.records)?;

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            root,
            output,
            sheet_name: config.sheet_name,
            outcome,
            json: args.json,
        }),
    })
}

fn absolute_dir(root: &Path) -> Result<PathBuf> {
    if !root.exists() {
        bail!("Root directory does not exist: {}", root.display());
    }
    if !root.is_dir() {
        bail!("Root path is not a directory: {}", root.display());
    }
    path::absolute(root)
        .with_context(|| format!("Failed to resolve root directory: {}", root.display()))
}
