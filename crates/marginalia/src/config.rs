//! Configuration types and loading for the marginalia binary.

use derive_getters::Getters;
use marginalia_error::{ConfigError, ConfigErrorKind, MarginaliaResult};
use marginalia_import::DEFAULT_FOLDER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the marginalia binary, read from a TOML file.
///
/// Nothing here is required. An absent file or an empty table yields a
/// usable default configuration, with the vault path supplied on the
/// command line instead.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct MarginaliaConfig {
    /// Vault root directory that receives notes.
    #[serde(default)]
    vault_path: Option<PathBuf>,

    /// Vault folder for generated notes.
    #[serde(default = "default_folder")]
    folder: String,
}

fn default_folder() -> String {
    DEFAULT_FOLDER.to_string()
}

impl Default for MarginaliaConfig {
    fn default() -> Self {
        Self {
            vault_path: None,
            folder: default_folder(),
        }
    }
}

impl MarginaliaConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is invalid.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> MarginaliaResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from file");

        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::new(ConfigErrorKind::TomlParse(e.to_string())))?;

        tracing::info!(
            vault = ?config.vault_path,
            folder = %config.folder,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Default location of the config file, under the platform config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("marginalia").join("config.toml"))
    }

    /// Loads the config file from its default location when present,
    /// otherwise returns defaults.
    pub fn load_default() -> MarginaliaResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Check the configuration for suspicious values.
    ///
    /// Returns warnings rather than failing, since every problem here has
    /// a command-line override.
    #[tracing::instrument(skip(self))]
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(vault) = &self.vault_path
            && !vault.exists()
        {
            warnings.push(format!("vault_path {} does not exist", vault.display()));
        }

        if self.folder.is_empty() {
            warnings.push("folder is empty, imports will fail".to_string());
        }

        tracing::debug!(warnings = warnings.len(), "Configuration validated");
        warnings
    }
}
