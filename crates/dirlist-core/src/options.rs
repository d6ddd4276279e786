//! Listing configuration types.

use derive_builder::Builder;

/// Marker character that makes an entry hidden.
pub const HIDDEN_MARKER: char = '.';

/// Options controlling a directory listing.
///
/// The value is immutable once built and is handed unchanged to every
/// subdirectory visited during a recursive listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct ListingOptions {
    /// Include entries whose name starts with `.`.
    pub show_hidden: bool,

    /// Print mode, size and modification time alongside each name.
    pub detailed: bool,

    /// Reverse the sorted order.
    pub reverse_order: bool,

    /// Sort by modification time, newest first, instead of by name.
    pub sort_by_mod_time: bool,

    /// Descend into subdirectories.
    pub recursive: bool,
}

impl ListingOptions {
    /// Create a new options builder.
    pub fn builder() -> ListingOptionsBuilder {
        ListingOptionsBuilder::default()
    }

    /// Check if an entry with this name should be left out entirely.
    pub fn should_skip_hidden(&self, name: &str) -> bool {
        !self.show_hidden && is_hidden(name)
    }
}

/// Check whether a name denotes a hidden entry.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}
