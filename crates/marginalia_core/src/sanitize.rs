//! File name sanitization for vault note names.

use crate::UNTITLED_BOOK;

/// Characters that common filesystems reject in file names.
const ILLEGAL_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Normalize a book title into a safe note file name.
///
/// Empty input and the literal `"undefined"` (how the upstream export
/// serializes a missing title) both yield [`UNTITLED_BOOK`]. Otherwise the
/// characters `< > : " / \ | ? *` are stripped and surrounding whitespace
/// trimmed. The result is never empty: a title that strips down to nothing
/// also yields the fallback.
///
/// # Examples
///
/// ```
/// use marginalia_core::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("A/B:C"), "ABC");
/// assert_eq!(sanitize_file_name(""), "Untitled Book");
/// ```
pub fn sanitize_file_name(title: &str) -> String {
    if title.is_empty() || title == "undefined" {
        return UNTITLED_BOOK.to_string();
    }

    let cleaned: String = title
        .chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c))
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        UNTITLED_BOOK.to_string()
    } else {
        cleaned.to_string()
    }
}
