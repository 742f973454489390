//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Marginalia - convert e-book highlight exports into per-book markdown notes
#[derive(Parser, Debug)]
#[command(name = "marginalia")]
#[command(about = "Convert e-book highlight exports into per-book markdown notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a highlight export into the vault
    Import {
        /// Path to the exported annotations JSON file
        file: PathBuf,

        /// Vault root directory (overrides the config file)
        #[arg(long)]
        vault: Option<PathBuf>,

        /// Vault folder for generated notes (overrides the config file)
        #[arg(long)]
        folder: Option<String>,

        /// Path to a config file (defaults to the platform config dir)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Inspect an export without writing anything
    Inspect {
        /// Path to the exported annotations JSON file
        file: PathBuf,
    },
}
