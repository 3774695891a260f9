//! In-memory security store
//!
//! Implements `SecurityStore` over a plain [`SecurityState`] value. Also the
//! building block of the JSON file store, which persists the same state.

use std::collections::BTreeSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::models::{AlarmStatus, ArmingStatus, Sensor};
use crate::core::ports::SecurityStore;

/// The complete system state held by a store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityState {
    /// Registered sensors
    #[serde(default)]
    pub sensors: BTreeSet<Sensor>,
    /// Current alarm status
    #[serde(default)]
    pub alarm_status: AlarmStatus,
    /// Current arming status
    #[serde(default)]
    pub arming_status: ArmingStatus,
    /// Result of the last image analysis
    #[serde(default)]
    pub cat_detected: bool,
}

impl SecurityState {
    pub(crate) fn add_sensor(&mut self, sensor: Sensor) {
        self.sensors.replace(sensor);
    }

    pub(crate) fn remove_sensor(&mut self, sensor: &Sensor) {
        self.sensors.remove(sensor);
    }

    /// Returns false if the sensor is not registered
    pub(crate) fn update_sensor(&mut self, sensor: &Sensor) -> bool {
        if !self.sensors.contains(sensor) {
            warn!("Ignoring update for unknown sensor {sensor}");
            return false;
        }
        self.sensors.replace(sensor.clone());
        true
    }
}

/// Security store that keeps everything in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySecurityStore {
    state: SecurityState,
}

impl MemorySecurityStore {
    /// Create an empty store: disarmed, no alarm, no sensors
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an existing state
    #[must_use]
    pub const fn from_state(state: SecurityState) -> Self {
        Self { state }
    }

    /// Create a store pre-populated with sensors
    #[must_use]
    pub fn with_sensors(sensors: impl IntoIterator<Item = Sensor>) -> Self {
        let mut store = Self::new();
        for sensor in sensors {
            store.state.add_sensor(sensor);
        }
        store
    }

    /// Set the initial alarm status
    #[must_use]
    pub const fn with_alarm_status(mut self, status: AlarmStatus) -> Self {
        self.state.alarm_status = status;
        self
    }

    /// Set the initial arming status
    #[must_use]
    pub const fn with_arming_status(mut self, status: ArmingStatus) -> Self {
        self.state.arming_status = status;
        self
    }

    /// Set the initial cat-detection flag
    #[must_use]
    pub const fn with_cat_detected(mut self, detected: bool) -> Self {
        self.state.cat_detected = detected;
        self
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &SecurityState {
        &self.state
    }
}

impl SecurityStore for MemorySecurityStore {
    fn add_sensor(&mut self, sensor: Sensor) -> anyhow::Result<()> {
        self.state.add_sensor(sensor);
        Ok(())
    }

    fn remove_sensor(&mut self, sensor: &Sensor) -> anyhow::Result<()> {
        self.state.remove_sensor(sensor);
        Ok(())
    }

    fn update_sensor(&mut self, sensor: &Sensor) -> anyhow::Result<()> {
        self.state.update_sensor(sensor);
        Ok(())
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) -> anyhow::Result<()> {
        self.state.alarm_status = status;
        Ok(())
    }

    fn set_arming_status(&mut self, status: ArmingStatus) -> anyhow::Result<()> {
        self.state.arming_status = status;
        Ok(())
    }

    fn set_cat_detected(&mut self, detected: bool) -> anyhow::Result<()> {
        self.state.cat_detected = detected;
        Ok(())
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
