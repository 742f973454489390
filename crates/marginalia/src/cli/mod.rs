//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the marginalia binary.

mod commands;
mod import;
mod inspect;

pub use commands::{Cli, Commands};
pub use import::run_import;
pub use inspect::run_inspect;
