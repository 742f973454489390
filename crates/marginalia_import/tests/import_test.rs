//! End-to-end tests for the import pipeline against the in-memory vault.

use marginalia_core::{Highlight, HighlightBuilder};
use marginalia_error::MarginaliaResult;
use marginalia_import::{ExportFile, Importer};
use marginalia_vault::{InMemoryVault, NoteHandle, NoteVault, VaultError, VaultErrorKind};
use std::sync::atomic::{AtomicUsize, Ordering};

fn highlight(id: &str, quote: &str, title: &str, book_id: &str, chapter: &str) -> Highlight {
    HighlightBuilder::default()
        .id(id)
        .quote(quote)
        .book_title(title)
        .book_id(book_id)
        .chapter_title(chapter)
        .chapter_url(format!(
            "https://learning.example.com/library/view/x/{}/ch01.html",
            book_id
        ))
        .build()
        .unwrap()
}

/// Vault wrapper that fails note creation after a set number of writes.
struct FailingVault {
    inner: InMemoryVault,
    writes_allowed: usize,
    writes_seen: AtomicUsize,
}

#[async_trait::async_trait]
impl NoteVault for FailingVault {
    async fn folder_exists(&self, path: &str) -> MarginaliaResult<bool> {
        self.inner.folder_exists(path).await
    }

    async fn create_folder(&self, path: &str) -> MarginaliaResult<()> {
        self.inner.create_folder(path).await
    }

    async fn find_note(&self, path: &str) -> MarginaliaResult<Option<NoteHandle>> {
        self.inner.find_note(path).await
    }

    async fn overwrite(&self, handle: &NoteHandle, content: &str) -> MarginaliaResult<()> {
        self.inner.overwrite(handle, content).await
    }

    async fn create_note(&self, path: &str, content: &str) -> MarginaliaResult<()> {
        if self.writes_seen.fetch_add(1, Ordering::SeqCst) >= self.writes_allowed {
            return Err(
                VaultError::new(VaultErrorKind::NoteWrite("disk full".to_string())).into(),
            );
        }
        self.inner.create_note(path, content).await
    }
}

#[tokio::test]
async fn test_import_writes_per_book_notes() {
    let vault = InMemoryVault::new();
    let importer = Importer::new(vault.clone());

    let records = vec![
        highlight(
            "9781000000001:5",
            "Second passage",
            "Book One",
            "9781000000001",
            "Ch1",
        ),
        highlight(
            "9781000000001:2",
            "First passage",
            "Book One",
            "9781000000001",
            "Ch1",
        ),
        highlight(
            "9781000000002:1",
            "Other book",
            "Book Two",
            "9781000000002",
            "Intro",
        ),
    ];

    let summary = importer.import_all(records).await.unwrap();
    assert_eq!(*summary.total_highlights(), 3);
    assert_eq!(*summary.book_count(), 2);

    let note = vault
        .note_content("oreilly-highlights/Book One.md")
        .await
        .unwrap();

    // Position order puts :2 before :5 regardless of input order.
    let first = note.find("First passage").unwrap();
    let second = note.find("Second passage").unwrap();
    assert!(first < second);

    // Contiguous chapter run gets a single heading.
    assert_eq!(note.matches("### Ch1").count(), 1);

    let location_two = note.find("**Location:** 2").unwrap();
    let location_five = note.find("**Location:** 5").unwrap();
    assert!(location_two < location_five);

    assert!(
        vault
            .note_content("oreilly-highlights/Book Two.md")
            .await
            .is_some()
    );
}

#[tokio::test]
async fn test_reimport_is_idempotent() {
    let vault = InMemoryVault::new();
    let importer = Importer::new(vault.clone());

    let records = vec![
        highlight("9781000000001:1", "A passage", "Book One", "9781000000001", "Ch1"),
        highlight("9781000000001:2", "Another", "Book One", "9781000000001", "Ch1"),
    ];

    importer.import_all(records.clone()).await.unwrap();
    let first = vault
        .note_content("oreilly-highlights/Book One.md")
        .await
        .unwrap();

    importer.import_all(records).await.unwrap();
    let second = vault
        .note_content("oreilly-highlights/Book One.md")
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(vault.len().await, 1);
}

#[tokio::test]
async fn test_failed_write_aborts_remaining_books() {
    let inner = InMemoryVault::new();
    let vault = FailingVault {
        inner: inner.clone(),
        writes_allowed: 1,
        writes_seen: AtomicUsize::new(0),
    };
    let importer = Importer::new(vault);

    let records = vec![
        highlight("a:1", "one", "Book A", "111", "Ch1"),
        highlight("b:1", "two", "Book B", "222", "Ch1"),
        highlight("c:1", "three", "Book C", "333", "Ch1"),
    ];

    assert!(importer.import_all(records).await.is_err());

    // The book written before the failure stays; later books were never
    // attempted.
    assert!(
        inner
            .note_content("oreilly-highlights/Book A.md")
            .await
            .is_some()
    );
    assert!(
        inner
            .note_content("oreilly-highlights/Book B.md")
            .await
            .is_none()
    );
    assert!(
        inner
            .note_content("oreilly-highlights/Book C.md")
            .await
            .is_none()
    );
}

#[tokio::test]
async fn test_folder_created_when_missing() {
    let vault = InMemoryVault::new();
    let importer = Importer::new(vault.clone()).with_folder("reading/highlights");

    importer
        .import_all(vec![highlight(
            "9781000000001:1",
            "A passage",
            "Book One",
            "9781000000001",
            "Ch1",
        )])
        .await
        .unwrap();

    assert!(vault.folder_exists("reading/highlights").await.unwrap());
    assert!(
        vault
            .note_content("reading/highlights/Book One.md")
            .await
            .is_some()
    );
}

#[tokio::test]
async fn test_untitled_records_share_one_note() {
    let vault = InMemoryVault::new();
    let importer = Importer::new(vault.clone());

    let mut missing = highlight("a:1", "no title", "x", "9781", "Ch1");
    missing.book_title = None;
    let mut blank = highlight("a:2", "blank title", "x", "9781", "Ch1");
    blank.book_title = Some(String::new());

    let summary = importer.import_all(vec![missing, blank]).await.unwrap();
    assert_eq!(*summary.book_count(), 1);

    let note = vault
        .note_content("oreilly-highlights/Untitled Book.md")
        .await
        .unwrap();
    assert!(note.starts_with("# Untitled Book"));
    assert!(note.contains("no title"));
    assert!(note.contains("blank title"));
}

#[tokio::test]
async fn test_import_from_export_json() {
    let json = r#"{
        "count": 2,
        "results": [
            {
                "pk": "9781000000001:12",
                "quote": "Later passage.",
                "chapter_title": "Chapter 2",
                "chapter_url": "https://learning.example.com/library/view/book-one/9781000000001/ch02.html",
                "epub_identifier": "9781000000001",
                "epub_title": "Book One"
            },
            {
                "pk": "9781000000001:3",
                "quote": "Early passage.",
                "text": "important",
                "chapter_title": "Chapter 1",
                "chapter_url": "https://learning.example.com/library/view/book-one/9781000000001/ch01.html",
                "epub_identifier": "9781000000001",
                "epub_title": "Book One"
            }
        ]
    }"#;

    let export: ExportFile = json.parse().unwrap();
    let vault = InMemoryVault::new();
    let importer = Importer::new(vault.clone());

    let summary = importer.import_all(export.into_highlights()).await.unwrap();
    assert_eq!(*summary.total_highlights(), 2);
    assert_eq!(*summary.book_count(), 1);

    let note = vault
        .note_content("oreilly-highlights/Book One.md")
        .await
        .unwrap();
    assert!(note.starts_with("# Book One"));
    assert!(note.contains(
        "**URL:** [View on O'Reilly](https://learning.example.com/library/view/book-one/9781000000001)"
    ));

    // Position order holds across chapters.
    let early = note.find("Early passage.").unwrap();
    let later = note.find("Later passage.").unwrap();
    assert!(early < later);
    assert!(note.contains("**Note:** important"));
}

#[tokio::test]
async fn test_empty_import_reports_zero_counts() {
    let vault = InMemoryVault::new();
    let importer = Importer::new(vault.clone());

    let summary = importer.import_all(Vec::new()).await.unwrap();
    assert_eq!(*summary.total_highlights(), 0);
    assert_eq!(*summary.book_count(), 0);
    assert!(vault.is_empty().await);
}
