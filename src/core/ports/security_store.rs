//! Security store port
//!
//! Defines the interface for the state the alarm engine operates on.

use std::collections::BTreeSet;

use crate::core::models::{AlarmStatus, ArmingStatus, Sensor};

/// Holds the full system state: sensors, alarm status, arming status and
/// the last cat-detection result
///
/// The alarm engine keeps no state of its own; every decision starts from a
/// read here and ends with a write here. Implementations decide how (and
/// whether) the state is persisted.
pub trait SecurityStore: Send + Sync {
    /// Register a sensor
    fn add_sensor(&mut self, sensor: Sensor) -> anyhow::Result<()>;

    /// Forget a sensor
    fn remove_sensor(&mut self, sensor: &Sensor) -> anyhow::Result<()>;

    /// Persist the activation flag of an already registered sensor
    fn update_sensor(&mut self, sensor: &Sensor) -> anyhow::Result<()>;

    /// Store the alarm status
    fn set_alarm_status(&mut self, status: AlarmStatus) -> anyhow::Result<()>;

    /// Store the arming status
    fn set_arming_status(&mut self, status: ArmingStatus) -> anyhow::Result<()>;

    /// Store the result of the last image analysis
    fn set_cat_detected(&mut self, detected: bool) -> anyhow::Result<()>;

    /// Snapshot of all registered sensors
    fn sensors(&self) -> anyhow::Result<BTreeSet<Sensor>>;

    /// Current alarm status
    fn alarm_status(&self) -> anyhow::Result<AlarmStatus>;

    /// Current arming status
    fn arming_status(&self) -> anyhow::Result<ArmingStatus>;

    /// Result of the last image analysis
    fn cat_detected(&self) -> anyhow::Result<bool>;

    /// Look up a registered sensor by name
    fn find_sensor(&self, name: &str) -> anyhow::Result<Option<Sensor>> {
        Ok(self.sensors()?.into_iter().find(|s| s.name() == name))
    }
}
