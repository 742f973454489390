//! Markdown rendering of an ordered highlight bucket.

use crate::Highlight;

/// Path marker separating a book's base URL from its chapter pages.
const CHAPTER_MARKER: &str = "/ch";

/// Derive the book-level URL from a chapter URL.
///
/// Everything before the first `/ch` marker is the book's canonical URL.
/// When the marker is absent the book URL is empty.
///
/// # Examples
///
/// ```
/// use marginalia_core::book_url_from_chapter;
///
/// assert_eq!(
///     book_url_from_chapter("https://x.test/book/ch03.html"),
///     "https://x.test/book"
/// );
/// assert_eq!(book_url_from_chapter("https://x.test/other"), "");
/// ```
pub fn book_url_from_chapter(chapter_url: &str) -> String {
    match chapter_url.find(CHAPTER_MARKER) {
        Some(idx) => chapter_url[..idx].to_string(),
        None => String::new(),
    }
}

/// Render one book's ordered highlights into a markdown document.
///
/// The document is a pure function of its inputs: title heading, optional
/// cover embed from the first highlight, an ISBN and book URL metadata
/// block, then a highlights section. Chapter subheadings are emitted once
/// per contiguous run in sequence order, so a chapter whose highlights are
/// non-contiguous repeats its heading. Missing optional fields omit their
/// lines; rendering never fails.
pub fn render_note(title: &str, isbn: &str, ordered: &[Highlight]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}", title));
    lines.push(String::new());

    if let Some(cover) = ordered
        .first()
        .and_then(|h| h.cover_url.as_deref())
        .filter(|c| !c.is_empty())
    {
        lines.push(format!("![Cover]({})", cover));
        lines.push(String::new());
    }

    let book_url = ordered
        .first()
        .map(|h| book_url_from_chapter(&h.chapter_url))
        .unwrap_or_default();

    lines.push(format!("**ISBN:** {}", isbn));
    lines.push(format!("**URL:** [View on O'Reilly]({})", book_url));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push("## Highlights".to_string());
    lines.push(String::new());

    let mut current_chapter = String::new();

    for highlight in ordered {
        let chapter = highlight.chapter_label();
        if chapter != current_chapter {
            lines.push(format!("### {}", chapter));
            lines.push(String::new());
            current_chapter = chapter.to_string();
        }

        let quote = highlight.quote.trim();
        if !highlight.id.is_empty() && !highlight.chapter_url.is_empty() {
            lines.push(format!(
                "{} - [link]({}#{})",
                quote, highlight.chapter_url, highlight.id
            ));
        } else {
            lines.push(quote.to_string());
        }
        lines.push(String::new());

        if let Some(note) = highlight.note.as_deref().map(str::trim)
            && !note.is_empty()
        {
            lines.push(format!("**Note:** {}", note));
            lines.push(String::new());
        }

        if let Some(token) = highlight.position_token() {
            lines.push(format!("**Location:** {}", token));
            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}
