//! Directory entry types.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use compact_str::CompactString;

use crate::mode::mode_string;

/// One item produced by reading a directory.
///
/// Metadata is not captured at read time; [`DirectoryEntry::info`] stats
/// the entry on every call, so it can fail if the entry disappeared since
/// the directory was read.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Raw file name, used for ordering and path joins.
    pub file_name: OsString,
    /// Display name (lossy UTF-8).
    pub name: CompactString,
    /// Full path of the entry.
    pub path: PathBuf,
    /// Whether the entry itself is a directory. Symlinks are not followed.
    pub is_dir: bool,
}

impl DirectoryEntry {
    /// Create an entry for `file_name` inside `parent`.
    pub fn new(parent: &Path, file_name: impl Into<OsString>, is_dir: bool) -> Self {
        let file_name = file_name.into();
        Self {
            name: CompactString::new(file_name.to_string_lossy()),
            path: parent.join(&file_name),
            file_name,
            is_dir,
        }
    }

    /// Raw file name.
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// Retrieve metadata without following symlinks.
    pub fn info(&self) -> std::io::Result<EntryInfo> {
        let metadata = std::fs::symlink_metadata(&self.path)?;
        Ok(EntryInfo::from_metadata(&metadata))
    }

    /// Modification time, or the Unix epoch when it cannot be read.
    pub fn modified_or_epoch(&self) -> SystemTime {
        self.info().map(|info| info.modified).unwrap_or(UNIX_EPOCH)
    }
}

/// Detailed metadata for an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Mode string, e.g. `-rw-r--r--`.
    pub mode: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    pub modified: SystemTime,
}

impl EntryInfo {
    /// Build from filesystem metadata.
    pub fn from_metadata(metadata: &std::fs::Metadata) -> Self {
        Self {
            mode: mode_string(metadata),
            size: metadata.len(),
            modified: metadata.modified().unwrap_or(UNIX_EPOCH),
        }
    }
}
