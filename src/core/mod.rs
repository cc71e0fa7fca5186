//! Core types for ctrade-config
//!
//! Error handling shared by the library and the command-line front end.

pub mod error;

// Re-export commonly used items
pub use error::{ConfigError, ErrorKind, Result};
