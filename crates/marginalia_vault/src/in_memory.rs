//! In-memory implementation of NoteVault for testing.
//!
//! This module provides a simple HashMap-based vault that stores notes in
//! memory. Useful for unit tests and demonstrating the trait interface.

use crate::{NoteHandle, NoteVault};
use marginalia_error::{MarginaliaResult, VaultError, VaultErrorKind};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory vault for notes.
///
/// Stores folders and note contents in maps protected by RwLocks for
/// thread-safe access. All data is lost when the vault is dropped.
///
/// # Example
/// ```no_run
/// use marginalia_vault::{InMemoryVault, NoteVault};
///
/// #[tokio::main]
/// async fn main() {
///     let vault = InMemoryVault::new();
///     // Use vault.create_folder(), create_note(), etc.
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryVault {
    /// Folder paths known to the vault.
    folders: Arc<RwLock<HashSet<String>>>,
    /// Note contents, keyed by vault-relative path.
    notes: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryVault {
    /// Create a new empty in-memory vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored notes (for testing).
    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    /// Check if the vault holds no notes (for testing).
    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }

    /// Clear all folders and notes (for testing).
    pub async fn clear(&self) {
        self.folders.write().await.clear();
        self.notes.write().await.clear();
    }

    /// Get the content of a stored note (for testing).
    pub async fn note_content(&self, path: &str) -> Option<String> {
        self.notes.read().await.get(path).cloned()
    }
}

#[async_trait::async_trait]
impl NoteVault for InMemoryVault {
    async fn folder_exists(&self, path: &str) -> MarginaliaResult<bool> {
        Ok(self.folders.read().await.contains(path))
    }

    async fn create_folder(&self, path: &str) -> MarginaliaResult<()> {
        self.folders.write().await.insert(path.to_string());
        Ok(())
    }

    async fn find_note(&self, path: &str) -> MarginaliaResult<Option<NoteHandle>> {
        let notes = self.notes.read().await;
        Ok(notes.contains_key(path).then(|| NoteHandle {
            path: path.to_string(),
        }))
    }

    async fn overwrite(&self, handle: &NoteHandle, content: &str) -> MarginaliaResult<()> {
        let mut notes = self.notes.write().await;
        notes
            .get_mut(&handle.path)
            .map(|stored| *stored = content.to_string())
            .ok_or_else(|| VaultError::new(VaultErrorKind::NotFound(handle.path.clone())).into())
    }

    async fn create_note(&self, path: &str, content: &str) -> MarginaliaResult<()> {
        self.notes
            .write()
            .await
            .insert(path.to_string(), content.to_string());
        Ok(())
    }
}
