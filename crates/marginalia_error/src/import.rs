//! Import error types.

/// Specific error conditions for export parsing and import runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImportErrorKind {
    /// Failed to read the export file
    #[display("Failed to read export file: {}", _0)]
    FileRead(String),
    /// Export JSON is invalid or missing the results array
    #[display("Failed to parse export JSON: {}", _0)]
    JsonParse(String),
}

/// Error type for import operations.
///
/// # Examples
///
/// ```
/// use marginalia_error::{ImportError, ImportErrorKind};
///
/// let err = ImportError::new(ImportErrorKind::JsonParse("missing field `results`".to_string()));
/// assert!(format!("{}", err).contains("results"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Import Error: {} at line {} in {}", kind, line, file)]
pub struct ImportError {
    /// The specific error condition
    pub kind: ImportErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ImportError {
    /// Create a new import error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
