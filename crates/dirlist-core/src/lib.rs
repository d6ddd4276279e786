//! Core types for dirlist.
//!
//! This crate provides the data model shared by the listing engine and the
//! command-line front end: listing options, directory entries, mode
//! strings, and the error/report types.

mod entry;
mod error;
mod mode;
mod options;
mod report;

pub use entry::{DirectoryEntry, EntryInfo};
pub use error::{ListError, ListWarning, WarningKind};
pub use mode::{format_mode, mode_string};
pub use options::{HIDDEN_MARKER, ListingOptions, ListingOptionsBuilder, is_hidden};
pub use report::{ListReport, ListStatus};
