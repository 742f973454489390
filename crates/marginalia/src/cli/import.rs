//! Import command handler.

use marginalia::{
    ConfigError, ConfigErrorKind, ExportFile, FileSystemVault, Importer, MarginaliaConfig,
    MarginaliaResult,
};
use std::path::{Path, PathBuf};

/// Read an export file and write its books into the vault.
///
/// Configuration comes from `--config` when given, otherwise from the
/// default config location. Command-line flags override the config file.
pub async fn run_import(
    file: &Path,
    vault: Option<PathBuf>,
    folder: Option<String>,
    config: Option<PathBuf>,
) -> MarginaliaResult<()> {
    let config = match config {
        Some(path) => MarginaliaConfig::from_file(path)?,
        None => MarginaliaConfig::load_default()?,
    };

    for warning in config.validate() {
        tracing::warn!("{}", warning);
    }

    let vault_path = vault
        .or_else(|| config.vault_path().clone())
        .ok_or_else(|| ConfigError::new(ConfigErrorKind::MissingVaultPath))?;
    let folder = folder.unwrap_or_else(|| config.folder().clone());

    let export = ExportFile::from_file(file)?;

    let vault = FileSystemVault::new(vault_path)?;
    let importer = Importer::new(vault).with_folder(folder);
    let summary = importer.import_all(export.into_highlights()).await?;

    println!(
        "Imported {} highlights from {} books",
        summary.total_highlights(),
        summary.book_count()
    );

    Ok(())
}
