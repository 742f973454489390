//! Vault error types.

/// Kinds of vault storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum VaultErrorKind {
    /// Failed to create a folder in the vault
    #[display("Failed to create folder: {}", _0)]
    FolderCreation(String),
    /// Failed to write a note file
    #[display("Failed to write note: {}", _0)]
    NoteWrite(String),
    /// Failed to read a note file or its metadata
    #[display("Failed to read note: {}", _0)]
    NoteRead(String),
    /// Note not found at the specified location
    #[display("Note not found: {}", _0)]
    NotFound(String),
    /// Path is absolute or escapes the vault root
    #[display("Invalid vault path: {}", _0)]
    InvalidPath(String),
}

/// Vault error with location tracking.
///
/// # Examples
///
/// ```
/// use marginalia_error::{VaultError, VaultErrorKind};
///
/// let err = VaultError::new(VaultErrorKind::NotFound("notes/missing.md".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Vault Error: {} at line {} in {}", kind, line, file)]
pub struct VaultError {
    /// The kind of error that occurred
    pub kind: VaultErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl VaultError {
    /// Create a new vault error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VaultErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
