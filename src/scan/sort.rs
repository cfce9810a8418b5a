//! Sibling ordering

use std::cmp::{Ordering, Reverse};

use super::entry::DirEntryRecord;

/// Sort siblings by size descending, then name ascending.
///
/// Names compare by code point. Equal lossy names (non-UTF-8 on disk) fall
/// back to the full path, so no two distinct entries compare equal.
pub fn sort_entries(entries: &mut [DirEntryRecord]) {
    entries.sort_by(compare);
}

fn compare(a: &DirEntryRecord, b: &DirEntryRecord) -> Ordering {
    Reverse(a.size)
        .cmp(&Reverse(b.size))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.path.cmp(&b.path))
}
