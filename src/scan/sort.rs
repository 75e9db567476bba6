//! Deterministic ordering of the collected result set

use std::cmp::Ordering;

use super::config::{SortKey, SortOrder};
use super::metadata::FileEntry;

/// Stable sort by the configured key. Ties keep traversal order, so the
/// descending direction reverses the comparator rather than the slice.
pub fn sort_entries(entries: &mut [FileEntry], key: SortKey, order: SortOrder) {
    if key == SortKey::None {
        return;
    }
    entries.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &FileEntry, b: &FileEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::None => Ordering::Equal,
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::Date => a.modified.cmp(&b.modified),
    }
}
