//! Configuration file management for ctrade
//!
//! This module provides the per-user settings store, kept in ~/.ctradeconf,
//! and the environment lookup used to locate it.

pub mod config_store;
pub mod environment;

// Re-export commonly used items
pub use config_store::{ConfigStore, CONFIG_FILE_NAME, ELECTRUM_BIN_KEY};
pub use environment::{Environment, FixedHome, SystemEnvironment};
