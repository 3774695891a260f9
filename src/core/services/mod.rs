//! Business logic services
//!
//! Policy that operates on the port traits only. These services never touch
//! files, clocks or devices directly.
//!
//! - [`alarm_engine`] - Alarm state machine over sensors, arming and cat detection
//! - [`listeners`] - Ordered fan-out of status notifications

pub mod alarm_engine;
pub mod listeners;

pub use alarm_engine::{AlarmEngine, CAT_CONFIDENCE_THRESHOLD};
pub use listeners::ListenerRegistry;
