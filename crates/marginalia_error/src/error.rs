//! Top-level error wrapper types.

use crate::{ConfigError, ImportError, VaultError};

/// Foundation error enum collecting the per-domain error types.
///
/// # Examples
///
/// ```
/// use marginalia_error::{MarginaliaError, VaultError, VaultErrorKind};
///
/// let vault_err = VaultError::new(VaultErrorKind::FolderCreation("notes".to_string()));
/// let err: MarginaliaError = vault_err.into();
/// assert!(format!("{}", err).contains("Vault Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MarginaliaErrorKind {
    /// Vault storage error
    #[from(VaultError)]
    Vault(VaultError),
    /// Export parsing or import error
    #[from(ImportError)]
    Import(ImportError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Marginalia error with kind discrimination.
///
/// # Examples
///
/// ```
/// use marginalia_error::{ConfigError, ConfigErrorKind, MarginaliaResult};
///
/// fn might_fail() -> MarginaliaResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::MissingVaultPath))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Marginalia Error: {}", _0)]
pub struct MarginaliaError(Box<MarginaliaErrorKind>);

impl MarginaliaError {
    /// Create a new error from a kind.
    pub fn new(kind: MarginaliaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MarginaliaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MarginaliaErrorKind
impl<T> From<T> for MarginaliaError
where
    T: Into<MarginaliaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for marginalia operations.
///
/// # Examples
///
/// ```
/// use marginalia_error::{ImportError, ImportErrorKind, MarginaliaResult};
///
/// fn read_export() -> MarginaliaResult<String> {
///     Err(ImportError::new(ImportErrorKind::FileRead("no such file".to_string())))?
/// }
/// ```
pub type MarginaliaResult<T> = std::result::Result<T, MarginaliaError>;
