//! JSON file security store
//!
//! The whole [`SecurityState`] is loaded when the store is opened and written
//! back after every mutation. Writes go to a sibling temp file first and are
//! then renamed over the state file.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::adapters::memory::SecurityState;
use crate::core::models::{AlarmStatus, ArmingStatus, Sensor};
use crate::core::ports::SecurityStore;

/// Errors from reading or writing the state file
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error
    #[error("io error on {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// State file exists but is not valid JSON state
    #[error("corrupt state file {path}: {source}")]
    Corrupt {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
}

/// Security store persisted as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSecurityStore {
    path: PathBuf,
    state: SecurityState,
}

impl JsonFileSecurityStore {
    /// Open the store at `path`
    ///
    /// A missing file yields the default state; nothing is written until the
    /// first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?
        } else {
            debug!("No state file at {}, starting fresh", path.display());
            SecurityState::default()
        };
        Ok(Self { path, state })
    }

    /// Path of the state file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current in-memory state
    #[must_use]
    pub const fn state(&self) -> &SecurityState {
        &self.state
    }

    fn save(&self, state: &SecurityState) -> Result<(), StoreError> {
        let io = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io)?;
        }

        let content = serde_json::to_string_pretty(state).map_err(|source| {
            StoreError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(io)?;
        fs::rename(&tmp, &self.path).map_err(io)?;
        Ok(())
    }

    /// Apply `f` to a copy of the state and adopt it once it is on disk
    fn mutate(&mut self, f: impl FnOnce(&mut SecurityState)) -> anyhow::Result<()> {
        let mut next = self.state.clone();
        f(&mut next);
        self.save(&next)?;
        self.state = next;
        Ok(())
    }
}

impl SecurityStore for JsonFileSecurityStore {
    fn add_sensor(&mut self, sensor: Sensor) -> anyhow::Result<()> {
        self.mutate(|s| s.add_sensor(sensor))
    }

    fn remove_sensor(&mut self, sensor: &Sensor) -> anyhow::Result<()> {
        self.mutate(|s| s.remove_sensor(sensor))
    }

    fn update_sensor(&mut self, sensor: &Sensor) -> anyhow::Result<()> {
        let mut next = self.state.clone();
        if next.update_sensor(sensor) {
            self.save(&next)?;
            self.state = next;
        }
        Ok(())
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) -> anyhow::Result<()> {
        self.mutate(|s| s.alarm_status = status)
    }

    fn set_arming_status(&mut self, status: ArmingStatus) -> anyhow::Result<()> {
        self.mutate(|s| s.arming_status = status)
    }

    fn set_cat_detected(&mut self, detected: bool) -> anyhow::Result<()> {
        self.mutate(|s| s.cat_detected = detected)
    }

    fn sensors(&self) -> anyhow::Result<BTreeSet<Sensor>> {
        Ok(self.state.sensors.clone())
    }

    fn alarm_status(&self) -> anyhow::Result<AlarmStatus> {
        Ok(self.state.alarm_status)
    }

    fn arming_status(&self) -> anyhow::Result<ArmingStatus> {
        Ok(self.state.arming_status)
    }

    fn cat_detected(&self) -> anyhow::Result<bool> {
        Ok(self.state.cat_detected)
    }
}
