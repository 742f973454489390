//! Vault-backed note storage for marginalia.
//!
//! This crate provides pluggable vault backends for markdown notes. The
//! abstraction separates what gets written (rendered markdown produced by
//! `marginalia_core`) from where it lives (a directory on disk, an in-memory
//! map for tests, or any other backend).
//!
//! # Features
//!
//! - **Pluggable backends**: Trait-based abstraction over folder and note operations
//! - **Vault-relative paths**: Backends address notes by forward-slash relative paths
//! - **Test double included**: [`InMemoryVault`] records writes without touching disk
//!
//! # Example
//!
//! ```rust
//! use marginalia_vault::{FileSystemVault, NoteVault};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let vault = FileSystemVault::new("/tmp/vault")?;
//!
//! if !vault.folder_exists("highlights").await? {
//!     vault.create_folder("highlights").await?;
//! }
//!
//! match vault.find_note("highlights/book.md").await? {
//!     Some(handle) => vault.overwrite(&handle, "# Book\n").await?,
//!     None => vault.create_note("highlights/book.md", "# Book\n").await?,
//! }
//! # Ok(())
//! # }
//! ```

use marginalia_error::MarginaliaResult;

mod filesystem;
mod in_memory;

pub use filesystem::FileSystemVault;
pub use in_memory::InMemoryVault;
pub use marginalia_error::{VaultError, VaultErrorKind};

/// Handle to an existing note inside a vault.
///
/// Returned by [`NoteVault::find_note`], so callers can only overwrite
/// notes the vault has confirmed to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteHandle {
    /// Vault-relative path of the note.
    pub path: String,
}

/// Trait for pluggable note vault backends.
///
/// Paths are vault-relative and use forward slashes regardless of platform.
/// Implementations resolve them against their own root.
#[async_trait::async_trait]
pub trait NoteVault: Send + Sync {
    /// Check whether a folder exists at the given path.
    ///
    /// # Returns
    ///
    /// `true` only when a folder exists at the path. A note occupying the
    /// path counts as absent.
    async fn folder_exists(&self, path: &str) -> MarginaliaResult<bool>;

    /// Create a folder at the given path.
    ///
    /// Missing intermediate folders are created as well.
    async fn create_folder(&self, path: &str) -> MarginaliaResult<()>;

    /// Look up a note by path.
    ///
    /// # Returns
    ///
    /// `Some(handle)` when a note exists at the path, `None` when nothing
    /// exists there or the path refers to a folder.
    async fn find_note(&self, path: &str) -> MarginaliaResult<Option<NoteHandle>>;

    /// Replace the content of an existing note.
    async fn overwrite(&self, handle: &NoteHandle, content: &str) -> MarginaliaResult<()>;

    /// Create a new note with the given content.
    ///
    /// The parent folder must already exist.
    async fn create_note(&self, path: &str, content: &str) -> MarginaliaResult<()>;
}
