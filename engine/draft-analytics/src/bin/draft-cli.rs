//! # Draft CLI Binary
//!
//! Command-line interface for the draft analytics reports.

use anyhow::Result;
use clap::Parser;
use draft_analytics::cli::{init_logging, resolve_config, Cli, CliHandler};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Configuration decides the log level, so it comes first
    let config = resolve_config(&cli)?;
    init_logging(&config.logging);

    // Create CLI handler
    let handler = CliHandler::new(config, cli.json).await?;

    // Handle command
    handler.handle_command(cli.command)?;

    Ok(())
}
