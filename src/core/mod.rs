//! Core extraction engine.
//!
//! Turns a directory of SOP documents into [`SopRecord`]s without touching the
//! console or the spreadsheet. File system access and document parsing come in
//! through the [`FileWalker`] and [`DocumentReader`] traits.
//!
//! ## Module Structure
//!
//! - `dates`: last revision date detection in document tables
//! - `document`: table model shared by readers and the date resolver
//! - `extract`: directory walk and record assembly
//! - `naming`: file and folder naming conventions
//! - `record`: extraction output types
//! - `walker`: file system enumeration

pub mod dates;
pub mod document;
pub mod extract;
pub mod naming;
pub mod record;
pub mod walker;

pub use dates::{DateStatus, ResolutionPolicy};
pub use document::{Document, DocumentError, DocumentReader};
pub use extract::{ExtractOptions, ExtractOutcome, extract};
pub use naming::SopName;
pub use record::{ReadFailure, SkipReason, SkippedFile, SopRecord};
pub use walker::{FileWalker, FsWalker, WalkEntry};
