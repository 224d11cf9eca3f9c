//! Core domain types for the API catalog.

use std::collections::HashSet;

/// Title shown when an entry has neither a title nor an identifier.
pub const UNKNOWN_TITLE: &str = "Unknown";

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One catalog listing, as loaded from the input file.
///
/// Entries are never mutated after loading; every display value is derived.
/// Empty strings in the source are stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Unique listing name (`name` in the source).
    pub identifier: Option<String>,
    /// Publishing account (`username` in the source).
    pub owner: Option<String>,
    /// Human-facing title.
    pub title: Option<String>,
    /// Free-text description, empty when absent.
    pub description: String,
    /// Target link (`affiliate_url`, else `url`), empty when absent.
    pub link: String,
    /// Category labels in source order.
    pub categories: Vec<String>,
}

impl Entry {
    /// Title used for sorting and display: `title`, else `identifier`.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.identifier.as_deref())
            .unwrap_or(UNKNOWN_TITLE)
    }

    /// Deduplication key for category membership.
    pub fn key(&self) -> EntryKey {
        EntryKey {
            identifier: self.identifier.clone(),
            owner: self.owner.clone(),
        }
    }
}

/// `(identifier, owner)` pair identifying an entry inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub identifier: Option<String>,
    pub owner: Option<String>,
}

// ---------------------------------------------------------------------------
// CategoryGroup
// ---------------------------------------------------------------------------

/// A category label and the entries tagged with it.
///
/// Members are indices into the loaded catalog, kept in insertion order.
/// A key set makes the "already present" check O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    /// Raw label as it appears in the source (`e_commerce`).
    pub label: String,
    members: Vec<usize>,
    keys: HashSet<EntryKey>,
}

impl CategoryGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            members: Vec::new(),
            keys: HashSet::new(),
        }
    }

    /// Add the entry at `index` unless an entry with the same key is already
    /// a member. Returns `true` when the entry was added.
    pub fn insert(&mut self, index: usize, key: EntryKey) -> bool {
        if !self.keys.insert(key) {
            return false;
        }
        self.members.push(index);
        true
    }

    /// Catalog indices of the members, in insertion order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Toc
// ---------------------------------------------------------------------------

/// A single line in the index's table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Display title (`Real Estate`).
    pub title: String,
    /// Relative link target (`./real-estate-apis-12/` or `#uncategorized`).
    pub href: String,
    /// Number of entries behind the link.
    pub count: usize,
}

/// Root structure for the index table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toc {
    /// Top-level sections, in output order.
    pub sections: Vec<TocEntry>,
}
