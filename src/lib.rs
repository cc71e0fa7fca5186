//! ctrade-config - per-user configuration store for the ctrade tools
//!
//! Settings are plain string key/value pairs kept in a single TOML file,
//! `~/.ctradeconf` by default. The store is created with a default entry on
//! first use and written back to disk only when asked.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use ctrade_config::ConfigStore;
//!
//! // Load ~/.ctradeconf, creating it if needed
//! let mut config = ConfigStore::open_default()?;
//!
//! // Update a setting and write it out
//! config.set("electrumBin", "/usr/bin/electrum");
//! config.persist()?;
//!
//! assert_eq!(config.get("electrumBin"), Some("/usr/bin/electrum"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use core::error::{ConfigError, ErrorKind, Result};

pub use config::{
    config_store::{ConfigStore, CONFIG_FILE_NAME, ELECTRUM_BIN_KEY},
    environment::{Environment, FixedHome, SystemEnvironment},
};

/// Current version of ctrade-config
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
