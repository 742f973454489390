//! Error types for the marginalia workspace.
//!
//! This crate provides the foundation error types used throughout the
//! marginalia crates.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use marginalia_error::{MarginaliaResult, VaultError, VaultErrorKind};
//!
//! fn write_note() -> MarginaliaResult<()> {
//!     Err(VaultError::new(VaultErrorKind::NoteWrite(
//!         "disk full".to_string(),
//!     )))?
//! }
//!
//! match write_note() {
//!     Ok(()) => println!("Written"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod import;
mod vault;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{MarginaliaError, MarginaliaErrorKind, MarginaliaResult};
pub use import::{ImportError, ImportErrorKind};
pub use vault::{VaultError, VaultErrorKind};
