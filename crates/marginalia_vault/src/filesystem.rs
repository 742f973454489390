//! Filesystem-backed note vault implementation.
//!
//! Notes are plain UTF-8 markdown files under a base directory, and vault
//! folders map directly onto subdirectories.

use crate::{NoteHandle, NoteVault};
use marginalia_error::{MarginaliaResult, VaultError, VaultErrorKind};
use std::path::{Component, Path, PathBuf};

/// Filesystem vault backend.
///
/// Resolves vault-relative paths against a base directory and rejects paths
/// that would escape it.
pub struct FileSystemVault {
    base_path: PathBuf,
}

impl FileSystemVault {
    /// Create a new filesystem vault rooted at `base_path`.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> MarginaliaResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            VaultError::new(VaultErrorKind::FolderCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened filesystem vault");
        Ok(Self { base_path })
    }

    /// Resolve a vault-relative path against the base directory.
    ///
    /// Absolute paths and `..` components are rejected so callers cannot
    /// reach outside the vault root.
    fn resolve(&self, path: &str) -> MarginaliaResult<PathBuf> {
        let relative = Path::new(path);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(VaultError::new(VaultErrorKind::InvalidPath(path.to_string())).into());
        }

        Ok(self.base_path.join(relative))
    }
}

#[async_trait::async_trait]
impl NoteVault for FileSystemVault {
    #[tracing::instrument(skip(self))]
    async fn folder_exists(&self, path: &str) -> MarginaliaResult<bool> {
        let full = self.resolve(path)?;

        match tokio::fs::metadata(&full).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(VaultError::new(VaultErrorKind::NoteRead(format!(
                "{}: {}",
                full.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn create_folder(&self, path: &str) -> MarginaliaResult<()> {
        let full = self.resolve(path)?;

        tokio::fs::create_dir_all(&full).await.map_err(|e| {
            VaultError::new(VaultErrorKind::FolderCreation(format!(
                "{}: {}",
                full.display(),
                e
            )))
        })?;

        tracing::debug!(path = %full.display(), "Created vault folder");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_note(&self, path: &str) -> MarginaliaResult<Option<NoteHandle>> {
        let full = self.resolve(path)?;

        match tokio::fs::metadata(&full).await {
            Ok(meta) if meta.is_file() => Ok(Some(NoteHandle {
                path: path.to_string(),
            })),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(VaultError::new(VaultErrorKind::NoteRead(format!(
                "{}: {}",
                full.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, handle, content), fields(path = %handle.path, size = content.len()))]
    async fn overwrite(&self, handle: &NoteHandle, content: &str) -> MarginaliaResult<()> {
        let full = self.resolve(&handle.path)?;

        tokio::fs::write(&full, content).await.map_err(|e| {
            VaultError::new(VaultErrorKind::NoteWrite(format!(
                "{}: {}",
                full.display(),
                e
            )))
        })?;

        tracing::debug!(path = %full.display(), "Overwrote note");
        Ok(())
    }

    #[tracing::instrument(skip(self, content), fields(size = content.len()))]
    async fn create_note(&self, path: &str, content: &str) -> MarginaliaResult<()> {
        let full = self.resolve(path)?;

        tokio::fs::write(&full, content).await.map_err(|e| {
            VaultError::new(VaultErrorKind::NoteWrite(format!(
                "{}: {}",
                full.display(),
                e
            )))
        })?;

        tracing::info!(path = %full.display(), "Created note");
        Ok(())
    }
}
