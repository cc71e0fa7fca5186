//! CLI command implementations

pub mod config;

use anyhow::{Context, Result};
use crate::config::ConfigStore;
use std::path::Path;

/// Open the store named on the command line, or the default one
pub fn open_store(file: Option<&Path>) -> Result<ConfigStore> {
    match file {
        Some(path) => ConfigStore::open_from(path)
            .with_context(|| format!("Failed to open configuration file {}", path.display())),
        None => ConfigStore::open_default().context("Failed to open default configuration file"),
    }
}
