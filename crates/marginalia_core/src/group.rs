//! Grouping of flat highlight records into per-book buckets.

use crate::{BookKey, Highlight};
use indexmap::IndexMap;
use tracing::debug;

/// Partition records into per-book buckets keyed by [`BookKey`].
///
/// Iterates the records once, appending each to the bucket for its
/// (effective title, book id) pair and creating the bucket on first sight.
/// Bucket order reflects the first occurrence of each key in the input, not
/// any alphabetical order. No record is dropped or duplicated: bucket sizes
/// always sum to the input length.
pub fn group_by_book(records: Vec<Highlight>) -> IndexMap<BookKey, Vec<Highlight>> {
    let mut groups: IndexMap<BookKey, Vec<Highlight>> = IndexMap::new();

    for record in records {
        groups.entry(record.book_key()).or_default().push(record);
    }

    debug!(books = groups.len(), "Grouped highlights by book");
    groups
}
