//! Centralized path definitions for homeguard
//!
//! This module provides a single source of truth for all filesystem paths
//! used by homeguard.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.homeguard/                 # or $HOMEGUARD_HOME
//! ├── config.toml               # User configuration
//! └── state.json                # Default security store
//! ```

use std::path::PathBuf;

/// Environment variable overriding the homeguard directory
pub const HOME_ENV: &str = "HOMEGUARD_HOME";

/// Default directory name under the user's home
const HOME_DIR: &str = ".homeguard";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Default state filename
const STATE_FILE: &str = "state.json";

/// Get the homeguard directory.
///
/// Returns `$HOMEGUARD_HOME` if set and non-empty, otherwise `~/.homeguard/`.
#[must_use]
pub fn home_dir() -> PathBuf {
    match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(HOME_DIR),
    }
}

/// Get the config file path.
///
/// Returns `<home>/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    home_dir().join(CONFIG_FILE)
}

/// Get the default state file path.
///
/// Returns `<home>/state.json`. Used when the config names no store path.
#[must_use]
pub fn default_state_file() -> PathBuf {
    home_dir().join(STATE_FILE)
}
