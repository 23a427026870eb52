//! Checker configuration
//!
//! Configuration is read from TOML. Lookup order:
//! 1. an explicit `--config` path
//! 2. `slotlint.toml` in the current directory
//! 3. built-in defaults
//!
//! ```toml
//! weapon_base = "5422acb9af1c889c16000029"
//! equipment_base = "543be5f84bdc2dd4348b456a"
//! magazine_slots = ["mod_magazine"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::json::BaseNodes;
use crate::core::models::{DEFAULT_MAGAZINE_SLOT, SlotRules};

/// Config filename looked up in the current directory
pub const CONFIG_FILE: &str = "slotlint.toml";

/// Default weapon base node ID
pub const DEFAULT_WEAPON_BASE: &str = "5422acb9af1c889c16000029";

/// Default equipment base node ID
pub const DEFAULT_EQUIPMENT_BASE: &str = "543be5f84bdc2dd4348b456a";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Checker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Parent node ID that marks an item as a weapon
    pub weapon_base: String,
    /// Parent node ID that marks an item as equipment
    pub equipment_base: String,
    /// Slot names whose children must declare a magazine capacity
    pub magazine_slots: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            weapon_base: DEFAULT_WEAPON_BASE.to_string(),
            equipment_base: DEFAULT_EQUIPMENT_BASE.to_string(),
            magazine_slots: vec![DEFAULT_MAGAZINE_SLOT.to_string()],
        }
    }
}

impl CheckerConfig {
    /// Load from an explicit path, else `slotlint.toml` in `dir`, else defaults
    ///
    /// An explicit path must exist; the implicit one may be absent.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let implicit = dir.join(CONFIG_FILE);
        if implicit.is_file() {
            return Self::from_file(&implicit);
        }

        log::debug!("No {CONFIG_FILE} found, using defaults");
        Ok(Self::default())
    }

    /// Read and parse one config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Slot rules for the checker
    #[must_use]
    pub fn slot_rules(&self) -> SlotRules {
        SlotRules::new(self.magazine_slots.iter().cloned())
    }

    /// Base node IDs for the catalog loader
    #[must_use]
    pub fn base_nodes(&self) -> BaseNodes<'_> {
        BaseNodes {
            weapon: &self.weapon_base,
            equipment: &self.equipment_base,
        }
    }
}
