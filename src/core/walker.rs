use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// One entry produced by a directory walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEntry {
    /// A regular file.
    File(PathBuf),
    /// A directory, symlink or other non-file entry.
    Other(PathBuf),
    /// An entry that could not be read.
    Error(String),
}

/// Recursive enumeration of the entries under a root directory.
pub trait FileWalker {
    fn walk(&self, root: &Path) -> Box<dyn Iterator<Item = WalkEntry> + '_>;
}

/// Walks the real file system, sorted by file name so runs are reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWalker;

impl FileWalker for FsWalker {
    fn walk(&self, root: &Path) -> Box<dyn Iterator<Item = WalkEntry> + '_> {
        let entries = WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| match entry {
                Ok(e) if e.path().is_file() => WalkEntry::File(e.into_path()),
                Ok(e) => WalkEntry::Other(e.into_path()),
                Err(e) => WalkEntry::Error(e.to_string()),
            });
        Box::new(entries)
    }
}
