//! Marginalia CLI binary.
//!
//! This binary provides command-line access to marginalia's functionality:
//! - Import a highlight export into a vault as per-book markdown notes
//! - Inspect an export without writing anything

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_import, run_inspect};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Import {
            file,
            vault,
            folder,
            config,
        } => {
            run_import(&file, vault, folder, config).await?;
        }

        Commands::Inspect { file } => {
            run_inspect(&file)?;
        }
    }

    Ok(())
}
