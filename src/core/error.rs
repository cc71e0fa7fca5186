//! Error types for ctrade-config

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for configuration store operations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A caller-supplied configuration file does not exist
    #[error("Bad configuration file: {path} does not exist")]
    InvalidArgument { path: PathBuf },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// I/O errors
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Failed to serialize configuration for {path}: {reason}")]
    Serialize { path: PathBuf, reason: String },
}

/// Coarse classification of a [`ConfigError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a path that does not exist
    InvalidArgument,
    /// Creating, reading, parsing or writing the backing file failed
    Io,
}

impl ConfigError {
    /// Create a new invalid argument error
    pub fn invalid_argument(path: impl Into<PathBuf>) -> Self {
        Self::InvalidArgument { path: path.into() }
    }

    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a new parse error
    pub fn parse(path: &Path, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialize(path: &Path, reason: impl Into<String>) -> Self {
        Self::Serialize {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            ConfigError::HomeDirectoryNotFound
            | ConfigError::Io { .. }
            | ConfigError::Parse { .. }
            | ConfigError::Serialize { .. } => ErrorKind::Io,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn is_io_failure(&self) -> bool {
        self.kind() == ErrorKind::Io
    }
}

/// Result type alias for configuration store operations
pub type Result<T> = std::result::Result<T, ConfigError>;
