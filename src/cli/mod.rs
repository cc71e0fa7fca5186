//! Command-line interface for ctrade-config

use clap::Parser;
use std::path::PathBuf;

pub mod commands;

/// ctradeconf - inspect and edit the ctrade configuration file
#[derive(Parser, Debug)]
#[command(
    name = "ctradeconf",
    version,
    about = "Inspect and edit the ctrade configuration file",
    long_about = "Reads and writes settings in ~/.ctradeconf, creating it with defaults on first use."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this configuration file instead of ~/.ctradeconf (must exist)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub config: commands::config::ConfigArgs,
}
