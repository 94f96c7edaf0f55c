//! Directory walk → SOP records.

use std::path::{Component, Path};

use glob::Pattern;
use regex::Regex;

use super::{
    dates::{Resolution, ResolutionPolicy, resolve},
    document::DocumentReader,
    naming::{SopName, department_from_folder, hyperlink_formula},
    record::{ReadFailure, SkipReason, SkippedFile, SopRecord},
    walker::{FileWalker, WalkEntry},
};

/// Rules deciding which files are SOPs and how to read them.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Matched against the file name, extension included.
    pub file_pattern: Regex,
    /// Folder names that exclude everything below them, e.g. `Archive`.
    pub exclude_dirs: Vec<String>,
    /// Accepted extensions, compared case-insensitively and without the dot.
    pub extensions: Vec<String>,
    /// Index of the department folder, counted from the first folder below the root.
    pub department_depth: usize,
    /// Glob patterns matched against the path relative to the root.
    pub ignores: Vec<Pattern>,
    pub policy: ResolutionPolicy,
}

#[derive(Debug, Default)]
pub struct ExtractOutcome {
    pub records: Vec<SopRecord>,
    pub skipped: Vec<SkippedFile>,
    pub read_failures: Vec<ReadFailure>,
}

/// Walk `root` and build one record per qualifying file, in walk order.
///
/// Unreadable documents still produce a record, without a date, and are listed
/// in `read_failures`. Files too shallow to have a department folder are listed
/// in `skipped`.
pub fn extract(
    root: &Path,
    options: &ExtractOptions,
    walker: &dyn FileWalker,
    reader: &dyn DocumentReader,
) -> ExtractOutcome {
    let mut outcome = ExtractOutcome::default();

    for entry in walker.walk(root) {
        let path = match entry {
            WalkEntry::File(path) => path,
            WalkEntry::Other(_) => continue,
            WalkEntry::Error(message) => {
                outcome.skipped.push(SkippedFile {
                    path: None,
                    reason: SkipReason::Inaccessible(message),
                });
                continue;
            }
        };

        let Some(name) = qualifying_name(root, &path, options) else {
            continue;
        };

        let folders = folder_names(root, &path);
        let Some(folder) = folders.get(options.department_depth) else {
            outcome.skipped.push(SkippedFile {
                path: Some(path),
                reason: SkipReason::PathTooShallow {
                    depth: folders.len(),
                    required: options.department_depth + 1,
                },
            });
            continue;
        };
        let department = department_from_folder(folder);

        let resolution = match reader.read(&path) {
            Ok(document) => resolve(&document, options.policy),
            Err(err) => {
                outcome.read_failures.push(ReadFailure {
                    path: path.clone(),
                    message: err.to_string(),
                });
                Resolution::unreadable()
            }
        };

        outcome.records.push(SopRecord {
            department,
            number: name.number,
            title: name.title,
            link: hyperlink_formula(&path),
            last_revision_date: resolution.date,
            path,
            date_status: resolution.status,
        });
    }

    outcome
}

/// Parse the SOP name of `path` if the file qualifies for indexing.
fn qualifying_name(root: &Path, path: &Path, options: &ExtractOptions) -> Option<SopName> {
    let file_name = path.file_name()?.to_str()?;
    if !has_accepted_extension(path, &options.extensions) {
        return None;
    }
    if !options.file_pattern.is_match(file_name) {
        return None;
    }

    let relative = path.strip_prefix(root).unwrap_or(path);
    let excluded = relative.components().any(|c| match c {
        Component::Normal(segment) => options
            .exclude_dirs
            .iter()
            .any(|marker| segment.to_str() == Some(marker.as_str())),
        _ => false,
    });
    if excluded {
        return None;
    }
    if options.ignores.iter().any(|p| p.matches_path(relative)) {
        return None;
    }

    SopName::parse(path.file_stem()?.to_str()?)
}

fn has_accepted_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions.iter().any(|accepted| accepted.eq_ignore_ascii_case(ext))
}

/// Names of the folders between `root` and the file, outermost first.
fn folder_names(root: &Path, path: &Path) -> Vec<String> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let Some(parent) = relative.parent() else {
        return Vec::new();
    };
    parent
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
