//! Domain models for homeguard
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Sensor`] - A binary door/window/motion device
//! - [`AlarmStatus`] - Quiescent, pending or active alarm
//! - [`ArmingStatus`] - Whether and how the system is monitoring
//! - [`Image`] - A camera frame handed to the cat detector

mod image;
mod sensor;
mod status;

pub use image::Image;
pub use sensor::{Sensor, SensorType};
pub use status::{AlarmStatus, ArmingStatus, ParseError};
