//! Entry ordering.

use std::cmp::Reverse;

use dirlist_core::{DirectoryEntry, ListingOptions};

/// Sort entries in display order.
///
/// By name (raw bytes, ascending), or newest first when sorting by
/// modification time. Unreadable modification times count as the epoch.
/// Equal times keep name order. `reverse_order` flips the final sequence.
pub fn sort_entries(entries: &mut [DirectoryEntry], options: &ListingOptions) {
    entries.sort_by(|a, b| a.file_name().cmp(b.file_name()));

    if options.sort_by_mod_time {
        entries.sort_by_cached_key(|entry| Reverse(entry.modified_or_epoch()));
    }

    if options.reverse_order {
        entries.reverse();
    }
}
