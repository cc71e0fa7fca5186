//! ctradeconf CLI
//!
//! Command-line front end for the ctrade configuration file.

use anyhow::Result;
use clap::Parser;
use ctrade_config::cli::{commands, Cli};

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    // Execute the command
    commands::config::execute(cli.file.as_deref(), cli.config)
}
