//! sopscan - SOP document indexer
//!
//! sopscan is a CLI tool and library that walks a directory of Standard
//! Operating Procedure documents, reads the department, number and title from
//! folder and file names, finds each document's last revision date in its
//! tables, and exports everything to a spreadsheet.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and console reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (naming rules, date resolution, directory walk)
//! - `docx`: `.docx` table reader
//! - `export`: `.xlsx` spreadsheet export

pub mod cli;
pub mod config;
pub mod core;
pub mod docx;
pub mod export;
