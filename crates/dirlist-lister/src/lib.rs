//! Directory listing engine for dirlist.
//!
//! [`DirectoryLister`] reads a directory, sorts its entries, writes them
//! plain or detailed, and optionally walks subdirectories depth-first in
//! pre-order (a directory's own entries come before any descendant's).
//!
//! # Example
//!
//! ```rust,no_run
//! use dirlist_lister::{DirectoryLister, ListingOptions};
//!
//! let options = ListingOptions::builder()
//!     .detailed(true)
//!     .recursive(true)
//!     .build()
//!     .unwrap();
//!
//! let lister = DirectoryLister::new(options);
//! let report = lister.list(".", &mut std::io::stdout()).unwrap();
//!
//! println!("{} directories, {} warnings", report.dirs_listed, report.warnings.len());
//! ```
//!
//! Failures to read a directory or an entry's metadata never abort the
//! walk. They are written inline as `Error reading directory: ...` or
//! `Error getting file info: ...` lines and collected in the returned
//! [`ListReport`].

mod format;
mod lister;
mod sort;

pub use format::{
    DisplayZone, RFC822_FORMAT, RFC822Z_FORMAT, detailed_line, format_timestamp,
};
pub use lister::{DirectoryLister, ROOT_HEADER};
pub use sort::sort_entries;

// Re-export core types for convenience
pub use dirlist_core::{
    DirectoryEntry, EntryInfo, ListError, ListReport, ListStatus, ListWarning, ListingOptions,
    WarningKind,
};
