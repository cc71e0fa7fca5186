//! Access to the hosting environment
//!
//! The default store location depends on the user's home directory. Reading it
//! goes through [`Environment`] so callers and tests can substitute a fixed
//! directory instead of the live process state.

use directories::UserDirs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

/// Source of the user's home directory
#[cfg_attr(test, mockall::automock)]
pub trait Environment {
    /// Home directory of the current user, if one can be determined
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Reads the home directory from the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}

/// Environment with a fixed home directory
#[derive(Debug, Clone)]
pub struct FixedHome(pub PathBuf);

impl FixedHome {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self(home.into())
    }
}

impl Environment for FixedHome {
    fn home_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Rewrites forward slashes in `home` to the host separator.
///
/// Non UTF-8 paths are returned untouched.
pub fn normalize_separators(home: &Path) -> PathBuf {
    match home.to_str() {
        Some(s) => PathBuf::from(s.replace('/', MAIN_SEPARATOR_STR)),
        None => home.to_path_buf(),
    }
}
