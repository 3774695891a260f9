//! Alarm engine - the security policy
//!
//! Derives the alarm status from sensor activity, the arming mode and the
//! camera's cat detection. The engine holds no status of its own: every
//! operation reads the current state from the [`SecurityStore`], applies the
//! transition rules, writes the results back and notifies listeners.
//!
//! Operations take `&mut self` and run to completion before returning. The
//! read-modify-write sequences are not atomic against interleaved callers, so
//! concurrent use requires wrapping the engine in a lock.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, info};

use crate::core::models::{AlarmStatus, ArmingStatus, Image, Sensor};
use crate::core::ports::{CatDetector, SecurityStore, StatusListener};

use super::listeners::ListenerRegistry;

/// Confidence (percent) the cat detector must reach for a frame to count
pub const CAT_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// Applies the alarm policy over an injected store and cat detector
#[derive(Debug)]
pub struct AlarmEngine<S, D> {
    store: S,
    detector: D,
    listeners: ListenerRegistry,
}

impl<S, D> AlarmEngine<S, D>
where
    S: SecurityStore,
    D: CatDetector,
{
    /// Create an engine with no listeners
    pub fn new(store: S, detector: D) -> Self {
        Self::with_listeners(store, detector, ListenerRegistry::new())
    }

    /// Create an engine with a pre-populated listener registry
    pub const fn with_listeners(store: S, detector: D, listeners: ListenerRegistry) -> Self {
        Self {
            store,
            detector,
            listeners,
        }
    }

    /// Register a listener for status updates
    pub fn add_status_listener(&mut self, listener: Arc<dyn StatusListener>) {
        self.listeners.add(listener);
    }

    /// Deregister a listener
    pub fn remove_status_listener(&mut self, listener: &Arc<dyn StatusListener>) {
        self.listeners.remove(listener);
    }

    /// Registered listeners
    pub const fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// The underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The underlying cat detector
    pub const fn detector(&self) -> &D {
        &self.detector
    }

    /// Take the store and detector back
    pub fn into_parts(self) -> (S, D) {
        (self.store, self.detector)
    }

    /// Set the arming status
    ///
    /// Disarming clears any alarm. Arming resets every active sensor to
    /// inactive, and arming at home while a cat was last seen raises the
    /// alarm immediately. The new arming status is stored last.
    pub fn set_arming_status(&mut self, status: ArmingStatus) -> anyhow::Result<()> {
        debug!("Arming status requested: {status}");

        match status {
            ArmingStatus::Disarmed => self.set_alarm_status(AlarmStatus::NoAlarm)?,
            ArmingStatus::ArmedHome | ArmingStatus::ArmedAway => {
                self.reset_sensors()?;
                if status == ArmingStatus::ArmedHome && self.store.cat_detected()? {
                    debug!("Cat seen while arming at home");
                    self.set_alarm_status(AlarmStatus::Alarm)?;
                }
            },
        }

        self.store.set_arming_status(status)
    }

    /// Change the activation state of a sensor and update the alarm status
    ///
    /// Requesting the state a sensor is already in never persists the sensor.
    /// Re-activating an active sensor can still escalate a pending alarm.
    pub fn change_sensor_activation_status(
        &mut self,
        sensor: &mut Sensor,
        active: bool,
    ) -> anyhow::Result<()> {
        match (sensor.is_active(), active) {
            (false, true) => self.handle_sensor_activated()?,
            (true, false) => self.handle_sensor_deactivated(sensor)?,
            (true, true) => return self.handle_active_sensor_activated(),
            (false, false) => return Ok(()),
        }

        debug!("Sensor {sensor} -> {}", if active { "active" } else { "inactive" });
        sensor.set_active(active);
        self.store.update_sensor(sensor)
    }

    /// Analyze a camera frame for cats and update the alarm status
    ///
    /// The raw detection result is stored and forwarded to every listener,
    /// whether or not the alarm status changed.
    pub fn process_image(&mut self, image: &Image) -> anyhow::Result<()> {
        let cat = self.detector.image_contains_cat(image, CAT_CONFIDENCE_THRESHOLD)?;
        debug!("Image analyzed, cat detected: {cat}");
        self.store.set_cat_detected(cat)?;

        if cat && self.store.arming_status()? == ArmingStatus::ArmedHome {
            self.set_alarm_status(AlarmStatus::Alarm)?;
        } else if self.all_sensors_inactive(None)? {
            self.set_alarm_status(AlarmStatus::NoAlarm)?;
        }

        self.listeners.cat_detected(cat);
        Ok(())
    }

    /// Store an alarm status and notify every listener
    ///
    /// All alarm-status changes go through here, so listeners see exactly one
    /// notification per call.
    pub fn set_alarm_status(&mut self, status: AlarmStatus) -> anyhow::Result<()> {
        info!("Alarm status: {status}");
        self.store.set_alarm_status(status)?;
        self.listeners.alarm_status_changed(status);
        Ok(())
    }

    /// Current alarm status
    pub fn alarm_status(&self) -> anyhow::Result<AlarmStatus> {
        self.store.alarm_status()
    }

    /// Current arming status
    pub fn arming_status(&self) -> anyhow::Result<ArmingStatus> {
        self.store.arming_status()
    }

    /// Result of the last image analysis
    pub fn cat_detected(&self) -> anyhow::Result<bool> {
        self.store.cat_detected()
    }

    /// Snapshot of all registered sensors
    pub fn sensors(&self) -> anyhow::Result<BTreeSet<Sensor>> {
        self.store.sensors()
    }

    /// Register a sensor. No policy rule runs.
    pub fn add_sensor(&mut self, sensor: Sensor) -> anyhow::Result<()> {
        self.store.add_sensor(sensor)
    }

    /// Forget a sensor. No policy rule runs.
    pub fn remove_sensor(&mut self, sensor: &Sensor) -> anyhow::Result<()> {
        self.store.remove_sensor(sensor)
    }

    fn reset_sensors(&mut self) -> anyhow::Result<()> {
        for mut sensor in self.store.sensors()? {
            if sensor.is_active() {
                debug!("Resetting sensor {sensor} on arming");
                sensor.set_active(false);
                self.store.update_sensor(&sensor)?;
            }
        }
        self.listeners.sensor_status_changed();
        Ok(())
    }

    fn handle_sensor_activated(&mut self) -> anyhow::Result<()> {
        if self.store.arming_status()? == ArmingStatus::Disarmed {
            debug!("Sensor activated while disarmed, ignoring");
            return Ok(());
        }

        match self.store.alarm_status()? {
            AlarmStatus::NoAlarm => self.set_alarm_status(AlarmStatus::PendingAlarm),
            // Snapshot predates the activation, so the triggering sensor still reads inactive
            AlarmStatus::PendingAlarm if self.all_sensors_inactive(None)? => {
                self.set_alarm_status(AlarmStatus::Alarm)
            },
            AlarmStatus::PendingAlarm | AlarmStatus::Alarm => Ok(()),
        }
    }

    fn handle_sensor_deactivated(&mut self, sensor: &Sensor) -> anyhow::Result<()> {
        if self.store.alarm_status()? == AlarmStatus::PendingAlarm
            && self.all_sensors_inactive(Some(sensor))?
        {
            self.set_alarm_status(AlarmStatus::NoAlarm)?;
        }
        Ok(())
    }

    fn handle_active_sensor_activated(&mut self) -> anyhow::Result<()> {
        if self.store.alarm_status()? == AlarmStatus::PendingAlarm {
            self.set_alarm_status(AlarmStatus::Alarm)?;
        }
        Ok(())
    }

    /// True if every stored sensor, other than `except`, is inactive
    fn all_sensors_inactive(&self, except: Option<&Sensor>) -> anyhow::Result<bool> {
        Ok(self
            .store
            .sensors()?
            .iter()
            .filter(|s| except.is_none_or(|e| *s != e))
            .all(|s| !s.is_active()))
    }
}
