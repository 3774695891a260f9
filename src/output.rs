//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::{AlarmStatus, ArmingStatus, Sensor, SensorType};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Snapshot of the whole system
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Current arming status
    pub arming_status: ArmingStatus,
    /// Current alarm status
    pub alarm_status: AlarmStatus,
    /// Result of the last image analysis
    pub cat_detected: bool,
    /// All registered sensors
    pub sensors: Vec<SensorInfo>,
}

/// Information about a sensor
#[derive(Debug, Serialize)]
pub struct SensorInfo {
    /// Sensor name
    pub name: String,
    /// Sensor type
    pub sensor_type: SensorType,
    /// Whether the sensor is active
    pub active: bool,
}

impl From<&Sensor> for SensorInfo {
    fn from(sensor: &Sensor) -> Self {
        Self {
            name: sensor.name().to_string(),
            sensor_type: sensor.sensor_type(),
            active: sensor.is_active(),
        }
    }
}

/// Result of a sensor list operation
#[derive(Debug, Serialize)]
pub struct SensorListResult {
    /// List of sensors
    pub sensors: Vec<SensorInfo>,
}

/// Generic operation result (for simple success/failure messages)
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Result message
    pub message: String,
    /// Alarm status after the operation, if it ran the alarm policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_status: Option<AlarmStatus>,
}

impl OperationResult {
    /// Successful result with a message
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            alarm_status: None,
        }
    }

    /// Attach the resulting alarm status
    #[must_use]
    pub const fn with_alarm_status(mut self, status: AlarmStatus) -> Self {
        self.alarm_status = Some(status);
        self
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match self.alarm_status {
                Some(status) => println!("{}\nAlarm: {status}", self.message),
                None => println!("{}", self.message),
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl StatusReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Arming: {}", self.arming_status);
        println!("Alarm:  {}", self.alarm_status);
        println!("Cat:    {}", if self.cat_detected { "detected" } else { "none" });
        println!();
        render_sensors(&self.sensors);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl SensorListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => render_sensors(&self.sensors),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

fn render_sensors(sensors: &[SensorInfo]) {
    if sensors.is_empty() {
        println!("No sensors registered.");
        return;
    }

    println!("Sensors:");
    for s in sensors {
        println!(
            "  [{}] {} ({})",
            if s.active { "ACTIVE" } else { "inactive" },
            s.name,
            s.sensor_type
        );
    }
}
