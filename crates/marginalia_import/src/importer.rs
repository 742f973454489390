//! Import orchestration: group, order, render, and write per-book notes.

use marginalia_core::{Highlight, group_by_book, reading_order, render_note, sanitize_file_name};
use marginalia_error::MarginaliaResult;
use marginalia_vault::NoteVault;

/// Vault folder that receives the generated notes unless overridden.
pub const DEFAULT_FOLDER: &str = "oreilly-highlights";

/// Counts reported after a completed import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct ImportSummary {
    /// Highlights across all books.
    total_highlights: usize,
    /// Books that received a note.
    book_count: usize,
}

/// Imports highlight records into per-book vault notes.
///
/// Books are processed in first-seen order, one note written per book
/// before the next begins. A failed write aborts the remaining books so
/// the caller never believes more was written than actually was.
pub struct Importer<V: NoteVault> {
    vault: V,
    folder: String,
}

impl<V: NoteVault> Importer<V> {
    /// Create a new importer writing into [`DEFAULT_FOLDER`].
    pub fn new(vault: V) -> Self {
        Self {
            vault,
            folder: DEFAULT_FOLDER.to_string(),
        }
    }

    /// Use a different vault folder for generated notes.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let importer = Importer::new(vault).with_folder("reading/highlights");
    /// ```
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Folder that receives the generated notes.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Process a full export: group highlights into books and write one
    /// markdown note per book.
    ///
    /// The destination folder is created if missing. A book whose note
    /// already exists is overwritten, otherwise the note is created.
    ///
    /// # Errors
    ///
    /// Returns the first vault error encountered. Books already written
    /// stay in the vault; remaining books are not attempted.
    #[tracing::instrument(skip(self, records), fields(record_count = records.len(), folder = %self.folder))]
    pub async fn import_all(&self, records: Vec<Highlight>) -> MarginaliaResult<ImportSummary> {
        if !self.vault.folder_exists(&self.folder).await? {
            self.vault.create_folder(&self.folder).await?;
            tracing::info!(folder = %self.folder, "Created vault folder");
        }

        let total_highlights = records.len();
        let groups = group_by_book(records);
        let book_count = groups.len();

        for (key, bucket) in groups {
            let ordered = reading_order(bucket);
            let content = render_note(&key.title, &key.book_id, &ordered);
            let path = format!("{}/{}.md", self.folder, sanitize_file_name(&key.title));

            match self.vault.find_note(&path).await? {
                Some(handle) => {
                    self.vault.overwrite(&handle, &content).await?;
                    tracing::debug!(book = %key, path = %path, "Overwrote existing note");
                }
                None => {
                    self.vault.create_note(&path, &content).await?;
                    tracing::debug!(book = %key, path = %path, "Created note");
                }
            }
        }

        tracing::info!(
            highlights = total_highlights,
            books = book_count,
            "Import complete"
        );

        Ok(ImportSummary {
            total_highlights,
            book_count,
        })
    }
}
