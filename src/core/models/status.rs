//! Alarm and arming status
//!
//! Both statuses are independent fields of the system state held by the
//! security store. Only the alarm engine moves them between values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a status or sensor type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unknown alarm status name
    #[error("invalid alarm status: {0}. Use: no_alarm, pending_alarm, alarm")]
    AlarmStatus(String),

    /// Unknown arming status name
    #[error("invalid arming status: {0}. Use: disarmed, home, away")]
    ArmingStatus(String),

    /// Unknown sensor type name
    #[error("invalid sensor type: {0}. Use: door, window, motion")]
    SensorType(String),
}

/// Normalize user input so `ARMED_HOME`, `armed-home` and `armed_home` parse alike
pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace('-', "_")
}

/// Overall alarm status of the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmStatus {
    /// Quiescent
    #[default]
    NoAlarm,
    /// One violation observed, awaiting confirmation or resolution
    PendingAlarm,
    /// Active alarm
    Alarm,
}

impl AlarmStatus {
    /// Upper-case name used in displays and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoAlarm => "NO_ALARM",
            Self::PendingAlarm => "PENDING_ALARM",
            Self::Alarm => "ALARM",
        }
    }
}

impl std::fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AlarmStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "no_alarm" => Ok(Self::NoAlarm),
            "pending_alarm" | "pending" => Ok(Self::PendingAlarm),
            "alarm" => Ok(Self::Alarm),
            _ => Err(ParseError::AlarmStatus(s.to_string())),
        }
    }
}

/// Whether the system is monitoring, and in which mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmingStatus {
    /// Not monitoring
    #[default]
    Disarmed,
    /// Monitoring with occupants at home
    ArmedHome,
    /// Monitoring with the house empty
    ArmedAway,
}

impl ArmingStatus {
    /// Upper-case name used in displays and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disarmed => "DISARMED",
            Self::ArmedHome => "ARMED_HOME",
            Self::ArmedAway => "ARMED_AWAY",
        }
    }

    /// True for either armed mode
    #[must_use]
    pub const fn is_armed(self) -> bool {
        matches!(self, Self::ArmedHome | Self::ArmedAway)
    }
}

impl std::fmt::Display for ArmingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArmingStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "disarmed" => Ok(Self::Disarmed),
            "armed_home" | "home" => Ok(Self::ArmedHome),
            "armed_away" | "away" => Ok(Self::ArmedAway),
            _ => Err(ParseError::ArmingStatus(s.to_string())),
        }
    }
}
