//! Configuration management
//!
//! Config is stored at `<home>/config.toml` (see [`crate::paths`]).
//!
//! ```toml
//! [store]
//! path = "/var/lib/homeguard/state.json"
//!
//! [listeners]
//! log_events = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// homeguard configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Security store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Listener settings
    #[serde(default)]
    pub listeners: ListenerConfig,
}

/// Security store settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// State file; defaults to `<home>/state.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Listener settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerConfig {
    /// Register the logging listener
    #[serde(default = "default_log_events")]
    pub log_events: bool,
}

const fn default_log_events() -> bool {
    true
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            log_events: default_log_events(),
        }
    }
}

impl Config {
    /// Load config from the default location, or defaults if absent
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&paths::config_file())
    }

    /// Load config from `path`
    ///
    /// A missing or unparseable file yields the default config.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map_err(anyhow::Error::from).and_then(|content| {
            toml::from_str(&content).map_err(anyhow::Error::from)
        }) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring unreadable config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolved state file path
    #[must_use]
    pub fn state_file(&self) -> PathBuf {
        self.store.path.clone().unwrap_or_else(paths::default_state_file)
    }
}
