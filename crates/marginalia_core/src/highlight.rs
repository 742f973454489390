//! Highlight records and book identity.

use serde::{Deserialize, Serialize};

/// Fallback title for books whose export carries no usable title.
pub const UNTITLED_BOOK: &str = "Untitled Book";

/// Fallback chapter label for highlights with no chapter title.
pub const UNKNOWN_CHAPTER: &str = "Unknown Chapter";

/// One highlight-plus-optional-note record tied to a book and chapter.
///
/// Records arrive from an export file and are immutable once received.
/// Every field except `id`, `quote`, and `chapter_url` is optional; absent
/// or blank values have defined fallbacks rather than runtime coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into, strip_option), default)]
pub struct Highlight {
    /// Unique identifier; may encode a reading position after a `:`
    pub id: String,
    /// The highlighted passage
    pub quote: String,
    /// User-authored comment on the highlight
    pub note: Option<String>,
    /// Human-readable chapter label
    pub chapter_title: Option<String>,
    /// URL of the chapter containing the highlight
    pub chapter_url: String,
    /// Cover artwork URL
    pub cover_url: Option<String>,
    /// Stable identifier for the book, displayed as the ISBN
    pub book_id: String,
    /// Display title of the book; untrusted and possibly missing
    pub book_title: Option<String>,
    /// Last-modified timestamp, used as a fallback ordering key
    pub last_modified: Option<String>,
    /// Highlight color, carried through but unused by rendering
    pub color: Option<String>,
    /// Alternate location field, carried through but unused
    pub location: Option<String>,
}

impl Highlight {
    /// Display title for this record's book, falling back to [`UNTITLED_BOOK`].
    pub fn effective_title(&self) -> &str {
        match &self.book_title {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED_BOOK,
        }
    }

    /// Chapter label for this record, falling back to [`UNKNOWN_CHAPTER`].
    pub fn chapter_label(&self) -> &str {
        match &self.chapter_title {
            Some(chapter) if !chapter.is_empty() => chapter,
            _ => UNKNOWN_CHAPTER,
        }
    }

    /// The second `:`-delimited segment of the id, when the id carries one.
    ///
    /// This raw segment is what sequencing parses numerically and what the
    /// rendered location line emits verbatim.
    pub fn position_token(&self) -> Option<&str> {
        self.id.split(':').nth(1)
    }

    /// Composite grouping key for this record's book.
    pub fn book_key(&self) -> BookKey {
        BookKey::new(self.effective_title().to_string(), self.book_id.clone())
    }
}

/// Composite identity for a book group.
///
/// Title and source identifier together identify a book. A struct key keeps
/// titles containing a delimiter character from colliding with a different
/// book, which a concatenated `title|id` string key would allow.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, derive_new::new, derive_more::Display, Serialize, Deserialize,
)]
#[display("{} ({})", title, book_id)]
pub struct BookKey {
    /// Effective display title, [`UNTITLED_BOOK`] when the record had none
    pub title: String,
    /// Stable source identifier for the book
    pub book_id: String,
}
