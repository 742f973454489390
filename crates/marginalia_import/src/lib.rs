//! Export parsing and import orchestration for marginalia.
//!
//! This crate reads the reading platform's JSON export and turns it into
//! per-book markdown notes in a vault:
//!
//! 1. Parse the export ([`ExportFile`]) into domain [`Highlight`](marginalia_core::Highlight)s
//! 2. Group them into books, order each book, render its note
//! 3. Write the notes through a [`NoteVault`](marginalia_vault::NoteVault) backend
//!
//! # Example
//!
//! ```rust
//! use marginalia_import::{ExportFile, Importer};
//! use marginalia_vault::InMemoryVault;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let export: ExportFile = r#"{"results": []}"#.parse()?;
//!
//! let importer = Importer::new(InMemoryVault::new());
//! let summary = importer.import_all(export.into_highlights()).await?;
//! assert_eq!(*summary.total_highlights(), 0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod export;
mod importer;

pub use export::{ExportFile, RawHighlight};
pub use importer::{DEFAULT_FOLDER, ImportSummary, Importer};
pub use marginalia_error::{ImportError, ImportErrorKind};
