//! Per-user configuration file
//!
//! Provides a flat string-to-string settings store persisted in ~/.ctradeconf

use super::environment::{normalize_separators, Environment, SystemEnvironment};
use crate::core::error::{ConfigError, Result};
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the default configuration file inside the home directory
pub const CONFIG_FILE_NAME: &str = ".ctradeconf";

/// Key holding the path to the Electrum binary
pub const ELECTRUM_BIN_KEY: &str = "electrumBin";

/// Settings store backed by a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    /// Backing file
    path: PathBuf,
    /// Settings, ordered by key
    entries: BTreeMap<String, String>,
}

impl ConfigStore {
    /// Open the default configuration file, creating it on first use
    pub fn open_default() -> Result<Self> {
        Self::open_default_in(&SystemEnvironment)
    }

    /// Open `<home>/.ctradeconf` for the home directory reported by `env`.
    ///
    /// An existing file is loaded as is. A missing file is created with the
    /// single default entry `electrumBin = ""` and written out immediately.
    pub fn open_default_in(env: &impl Environment) -> Result<Self> {
        let path = Self::default_path_in(env)?;

        if path.exists() {
            let entries = read_entries(&path)?;
            debug!(path = %path.display(), entries = entries.len(), "loaded configuration");
            return Ok(Self { path, entries });
        }

        // Fails if the home directory itself is missing; parents are not created.
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| ConfigError::io(&path, e))?;

        let mut store = Self {
            path,
            entries: BTreeMap::new(),
        };
        store.set(ELECTRUM_BIN_KEY, "");
        store.persist()?;

        info!(path = %store.path.display(), "created default configuration file");
        Ok(store)
    }

    /// Open an existing configuration file at `path`
    pub fn open_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::invalid_argument(path));
        }

        let entries = read_entries(path)?;
        debug!(path = %path.display(), entries = entries.len(), "loaded configuration");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Get the location of the default configuration file
    pub fn default_path_in(env: &impl Environment) -> Result<PathBuf> {
        let home = env.home_dir().ok_or(ConfigError::HomeDirectoryNotFound)?;
        Ok(normalize_separators(&home).join(CONFIG_FILE_NAME))
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point the store at another existing file.
    ///
    /// The in-memory settings are kept; call [`ConfigStore::reload`] to read
    /// the new file.
    pub fn set_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::invalid_argument(path));
        }
        self.path = path.to_path_buf();
        Ok(())
    }

    /// Get a setting
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a setting in memory, returning the previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove a setting in memory, returning its value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all settings in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Path to the Electrum binary, if configured
    pub fn electrum_bin(&self) -> Option<&str> {
        self.get(ELECTRUM_BIN_KEY)
    }

    pub fn set_electrum_bin(&mut self, value: impl Into<String>) -> Option<String> {
        self.set(ELECTRUM_BIN_KEY, value)
    }

    /// Replace the in-memory settings with the contents of the backing file.
    ///
    /// On error the current settings are left untouched.
    pub fn reload(&mut self) -> Result<()> {
        self.entries = read_entries(&self.path)?;
        debug!(path = %self.path.display(), entries = self.entries.len(), "reloaded configuration");
        Ok(())
    }

    /// Write all settings to the backing file and sync it to disk
    pub fn persist(&self) -> Result<()> {
        let content = toml::to_string(&self.entries)
            .map_err(|e| ConfigError::serialize(&self.path, e.to_string()))?;

        let file = File::create(&self.path).map_err(|e| ConfigError::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(content.as_bytes())
            .map_err(|e| ConfigError::io(&self.path, e))?;
        writer.flush().map_err(|e| ConfigError::io(&self.path, e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| ConfigError::io(&self.path, e))?;

        debug!(path = %self.path.display(), entries = self.entries.len(), "persisted configuration");
        Ok(())
    }
}

/// Read and parse a configuration file
fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    toml::from_str(&content).map_err(|e| ConfigError::parse(path, e.to_string()))
}
