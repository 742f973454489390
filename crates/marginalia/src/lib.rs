//! Marginalia - e-book highlight exports to markdown notes.
//!
//! Marginalia converts highlight annotation exports from a reading platform
//! into one markdown note per book inside a knowledge-base vault. Each note
//! carries the book's metadata, its highlights in reading order, and
//! per-chapter subheadings.
//!
//! # Features
//!
//! - **Deterministic notes**: The same export always renders the same markdown
//! - **Reading order**: Position-aware ordering with a timestamp fallback
//! - **Pluggable vaults**: Filesystem vault for real use, in-memory vault for tests
//! - **Idempotent imports**: Re-importing overwrites notes instead of duplicating them
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use marginalia::{ExportFile, FileSystemVault, Importer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let export = ExportFile::from_file("annotations.json")?;
//!     let vault = FileSystemVault::new("/home/reader/vault")?;
//!
//!     let importer = Importer::new(vault);
//!     let summary = importer.import_all(export.into_highlights()).await?;
//!     println!(
//!         "Imported {} highlights from {} books",
//!         summary.total_highlights(),
//!         summary.book_count()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Marginalia is organized as a workspace with focused crates:
//!
//! - `marginalia_error` - Error types
//! - `marginalia_core` - Grouping, reading order, and markdown rendering
//! - `marginalia_vault` - Note vault backends
//! - `marginalia_import` - Export parsing and import orchestration
//!
//! This crate (`marginalia`) re-exports everything for convenience and
//! provides the command-line binary.

mod config;

pub use config::MarginaliaConfig;
pub use marginalia_core::*;
pub use marginalia_error::*;
pub use marginalia_import::*;
pub use marginalia_vault::*;
