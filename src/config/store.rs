//! Configuration snapshot for one invocation.
//!
//! Loaded once at start, mutated in memory, written back by an explicit
//! `save()`. Nothing is written unless something changed.

use std::path::{Path, PathBuf};

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// In-memory config with the path it was loaded from.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config: Config,
    path: PathBuf,
    dirty: bool,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            config,
            path,
            dirty: false,
        }
    }

    /// Load the config at `path` (defaults if the file is missing).
    pub fn open(path: PathBuf) -> Result<Self, ConfigError> {
        let config = Config::load_from(&path)?;
        Ok(Self::new(config, path))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access; marks the snapshot as changed.
    pub fn config_mut(&mut self) -> &mut Config {
        self.dirty = true;
        &mut self.config
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the snapshot if it changed. Returns whether a write happened.
    pub fn save(&mut self) -> Result<bool, ConfigError> {
        if !self.dirty {
            return Ok(false);
        }
        self.config.save_to(&self.path)?;
        self.dirty = false;
        Ok(true)
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
