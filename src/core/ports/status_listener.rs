//! Status listener port
//!
//! Observers registered with the alarm engine receive these callbacks
//! synchronously on the caller's thread. Keep them fast: a blocking listener
//! stalls the operation that triggered it.

use crate::core::models::AlarmStatus;

/// Receives alarm engine notifications
pub trait StatusListener: Send + Sync {
    /// The alarm status was set (fired even if the value is unchanged)
    fn alarm_status_changed(&self, status: AlarmStatus);

    /// Sensors were reset as a batch after the system was armed
    fn sensor_status_changed(&self);

    /// An image was analyzed
    fn cat_detected(&self, detected: bool);
}
