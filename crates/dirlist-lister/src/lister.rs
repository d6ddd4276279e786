//! Depth-first directory lister.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use dirlist_core::{DirectoryEntry, ListError, ListReport, ListWarning, ListingOptions};

use crate::format::{DisplayZone, detailed_line};
use crate::sort::sort_entries;

/// Header printed before the root directory in recursive mode.
pub const ROOT_HEADER: &str = ".:";

/// Lists directories to a writer according to [`ListingOptions`].
#[derive(Debug, Clone)]
pub struct DirectoryLister {
    options: ListingOptions,
    zone: DisplayZone,
}

/// A directory waiting to be listed.
struct Visit {
    path: PathBuf,
    is_root: bool,
}

impl DirectoryLister {
    /// Create a lister that renders times in the process's time zone.
    pub fn new(options: ListingOptions) -> Self {
        Self {
            options,
            zone: DisplayZone::system(),
        }
    }

    /// Render modification times in the given zone.
    pub fn with_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    /// List `path` (and, when recursive, its subdirectories) into `out`.
    ///
    /// Read and metadata failures are written inline and collected in the
    /// returned report; only a failure to write to `out` is returned as an
    /// error.
    pub fn list<W: Write>(
        &self,
        path: impl AsRef<Path>,
        out: &mut W,
    ) -> Result<ListReport, ListError> {
        let mut report = ListReport::new();
        let mut pending = vec![Visit {
            path: path.as_ref().to_path_buf(),
            is_root: true,
        }];

        while let Some(visit) = pending.pop() {
            let subdirs = self.list_dir(&visit.path, visit.is_root, out, &mut report)?;

            // Stack is LIFO: push backwards so the first subdirectory is next
            pending.extend(
                subdirs
                    .into_iter()
                    .rev()
                    .map(|path| Visit { path, is_root: false }),
            );
        }

        out.flush()?;
        Ok(report)
    }

    /// List a single directory, returning the subdirectories to visit next.
    fn list_dir<W: Write>(
        &self,
        path: &Path,
        is_root: bool,
        out: &mut W,
        report: &mut ListReport,
    ) -> Result<Vec<PathBuf>, ListError> {
        debug!(path = %path.display(), is_root, "listing directory");

        let mut entries = match read_entries(path) {
            Ok(entries) => entries,
            Err(err) => {
                let warning = ListWarning::read_error(path, err);
                warn!(path = %path.display(), "{}", warning.message);
                writeln!(out, "{warning}")?;
                report.record_warning(warning, is_root);
                return Ok(Vec::new());
            }
        };
        report.record_dir();

        sort_entries(&mut entries, &self.options);

        if is_root && self.options.recursive {
            writeln!(out, "{ROOT_HEADER}")?;
        }
        if !is_root {
            write!(out, "\n{}:\n", path.display())?;
        }

        let mut subdirs = Vec::new();

        for entry in entries {
            if self.options.should_skip_hidden(&entry.name) {
                continue;
            }

            if self.options.detailed {
                match entry.info() {
                    Ok(info) => {
                        writeln!(out, "{}", detailed_line(&info, &entry.name, self.zone))?;
                    }
                    Err(err) => {
                        let warning = ListWarning::metadata_error(&entry.path, err);
                        warn!(path = %entry.path.display(), "{}", warning.message);
                        writeln!(out, "{warning}")?;
                        report.record_warning(warning, false);
                        continue;
                    }
                }
            } else {
                write!(out, "{}  ", entry.name)?;
            }
            report.record_entry();

            if self.options.recursive && entry.is_dir {
                subdirs.push(entry.path);
            }
        }

        if !self.options.detailed {
            writeln!(out)?;
        }

        // Reversed again: under reverse order, descents run opposite to
        // the displayed order.
        if self.options.reverse_order {
            subdirs.reverse();
        }

        if !subdirs.is_empty() {
            debug!(path = %path.display(), count = subdirs.len(), "descending");
        }

        Ok(subdirs)
    }
}

/// Read every entry of a directory. The handle is closed on return.
fn read_entries(path: &Path) -> std::io::Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        entries.push(DirectoryEntry::new(path, entry.file_name(), is_dir));
    }
    Ok(entries)
}
