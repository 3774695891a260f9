//! Listener that reports engine events through the `log` facade

use log::{info, warn};

use crate::core::models::AlarmStatus;
use crate::core::ports::StatusListener;

/// Logs every status notification
#[derive(Debug, Clone, Copy, Default)]
pub struct LogListener;

impl StatusListener for LogListener {
    fn alarm_status_changed(&self, status: AlarmStatus) {
        match status {
            AlarmStatus::Alarm => warn!("ALARM raised"),
            AlarmStatus::PendingAlarm => warn!("Alarm pending"),
            AlarmStatus::NoAlarm => info!("No alarm"),
        }
    }

    fn sensor_status_changed(&self) {
        info!("Sensors reset");
    }

    fn cat_detected(&self, detected: bool) {
        if detected {
            info!("Cat detected on camera");
        } else {
            info!("No cat on camera");
        }
    }
}
