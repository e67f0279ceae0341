// file_comparator.rs — Entry sorting
//
// Entries are ordered by name, compared byte-wise and case-sensitively.  The
// descending order is the ascending comparator reversed, so the two are exact
// mirrors of each other.

use std::cmp::Ordering;

use tracing::trace;

use crate::file_info::DirectoryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse { SortDirection::Descending } else { SortDirection::Ascending }
    }
}

/// Sort entries in place by name.
pub fn sort_entries(entries: &mut [DirectoryEntry], direction: SortDirection) {
    trace!(count = entries.len(), ?direction, "sorting entries");

    match direction {
        SortDirection::Ascending  => entries.sort_by(compare_name),
        SortDirection::Descending => entries.sort_by(|a, b| compare_name(a, b).reverse()),
    }
}

/// Compare by raw name bytes, so 'B' sorts before 'a'.
fn compare_name(lhs: &DirectoryEntry, rhs: &DirectoryEntry) -> Ordering {
    lhs.name_bytes().cmp(rhs.name_bytes())
}
