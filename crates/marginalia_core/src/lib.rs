//! Core highlight processing for marginalia.
//!
//! This crate holds the pure pipeline that turns a flat list of exported
//! highlight records into per-book markdown notes:
//!
//! - [`group_by_book`] partitions records into per-book buckets keyed by
//!   [`BookKey`], in first-seen order
//! - [`reading_order`] sorts one bucket into reading sequence, by position
//!   token when any id carries one, otherwise by last-modified timestamp
//! - [`render_note`] renders an ordered bucket into a markdown document
//! - [`sanitize_file_name`] derives a safe note file name from a book title
//!
//! Nothing here performs I/O; persistence lives behind the vault trait in
//! `marginalia_vault` and orchestration in `marginalia_import`.
//!
//! # Example
//!
//! ```
//! use marginalia_core::{HighlightBuilder, group_by_book, reading_order, render_note};
//!
//! let records = vec![
//!     HighlightBuilder::default()
//!         .id("9781000000001:20")
//!         .quote("Second passage")
//!         .chapter_url("https://example.com/book/ch02.html")
//!         .book_id("9781000000001")
//!         .book_title("Example Book")
//!         .build()
//!         .unwrap(),
//!     HighlightBuilder::default()
//!         .id("9781000000001:10")
//!         .quote("First passage")
//!         .chapter_url("https://example.com/book/ch01.html")
//!         .book_id("9781000000001")
//!         .book_title("Example Book")
//!         .build()
//!         .unwrap(),
//! ];
//!
//! for (key, bucket) in group_by_book(records) {
//!     let ordered = reading_order(bucket);
//!     let note = render_note(&key.title, &key.book_id, &ordered);
//!     assert!(note.starts_with("# Example Book"));
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod group;
mod highlight;
mod render;
mod sanitize;
mod sequence;

pub use group::group_by_book;
pub use highlight::{BookKey, Highlight, HighlightBuilder, UNKNOWN_CHAPTER, UNTITLED_BOOK};
pub use render::{book_url_from_chapter, render_note};
pub use sanitize::sanitize_file_name;
pub use sequence::reading_order;
