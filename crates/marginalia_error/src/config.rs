//! Configuration error types.

/// Specific error conditions for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Failed to read the config file
    #[display("Failed to read config file: {}", _0)]
    FileRead(String),
    /// Config TOML is invalid
    #[display("Failed to parse config TOML: {}", _0)]
    TomlParse(String),
    /// No vault path available from flags or config
    #[display("No vault path configured (pass --vault or set vault_path in the config file)")]
    MissingVaultPath,
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use marginalia_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingVaultPath);
/// assert!(format!("{}", err).contains("vault path"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific error condition
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new config error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
