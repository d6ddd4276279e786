//! Structured result of a listing.

use crate::error::{ListWarning, WarningKind};

/// Overall outcome of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// Everything was listed.
    Complete,
    /// Some directories or entries could not be read.
    Partial,
    /// The starting directory itself could not be read.
    Failed,
}

/// Summary of a completed listing.
#[derive(Debug, Clone, Default)]
pub struct ListReport {
    /// Directories successfully read.
    pub dirs_listed: u64,
    /// Entries written to the output.
    pub entries_listed: u64,
    /// Non-fatal failures, in the order they were reported.
    pub warnings: Vec<ListWarning>,
    root_failed: bool,
}

impl ListReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully read directory.
    pub fn record_dir(&mut self) {
        self.dirs_listed += 1;
    }

    /// Record an entry that was written out.
    pub fn record_entry(&mut self) {
        self.entries_listed += 1;
    }

    /// Record a warning. `is_root` marks a failure of the starting directory.
    pub fn record_warning(&mut self, warning: ListWarning, is_root: bool) {
        if is_root && warning.kind == WarningKind::ReadError {
            self.root_failed = true;
        }
        self.warnings.push(warning);
    }

    /// Whether any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Overall outcome: failed if the starting directory was unreadable,
    /// partial if anything else went wrong.
    pub fn status(&self) -> ListStatus {
        if self.root_failed {
            ListStatus::Failed
        } else if self.has_warnings() {
            ListStatus::Partial
        } else {
            ListStatus::Complete
        }
    }
}
