//! Sensor model
//!
//! A sensor is a binary device reporting active or inactive. Identity is the
//! `(name, sensor_type)` pair: two values with the same name and type are the
//! same sensor regardless of their `active` flag.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::status::{ParseError, normalize};

/// Kind of physical sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    /// Door contact
    Door,
    /// Window contact
    Window,
    /// Motion detector
    Motion,
}

impl std::fmt::Display for SensorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Door => write!(f, "DOOR"),
            Self::Window => write!(f, "WINDOW"),
            Self::Motion => write!(f, "MOTION"),
        }
    }
}

impl std::str::FromStr for SensorType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "door" => Ok(Self::Door),
            "window" => Ok(Self::Window),
            "motion" => Ok(Self::Motion),
            _ => Err(ParseError::SensorType(s.to_string())),
        }
    }
}

/// A physical sensor and its current activation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    /// Human-readable name, unique per sensor type
    name: String,

    /// What kind of sensor this is
    sensor_type: SensorType,

    /// Whether the sensor is currently triggered
    #[serde(default)]
    active: bool,
}

impl Sensor {
    /// Create a new, inactive sensor
    #[must_use]
    pub fn new(name: impl Into<String>, sensor_type: SensorType) -> Self {
        Self {
            name: name.into(),
            sensor_type,
            active: false,
        }
    }

    /// Sensor name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sensor type
    #[must_use]
    pub const fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    /// Whether the sensor is currently active
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Set the activation flag
    pub const fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn identity(&self) -> (&str, SensorType) {
        (&self.name, self.sensor_type)
    }
}

impl PartialEq for Sensor {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Sensor {}

impl Hash for Sensor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl PartialOrd for Sensor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sensor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl std::fmt::Display for Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.sensor_type)
    }
}
