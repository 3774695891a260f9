//! Status command - show overview of the system state

use homeguard::adapters::ThresholdCatDetector;
use homeguard::output::{OutputMode, SensorInfo, StatusReport};

use super::open_engine;

/// Show current system status
pub fn status(output_mode: OutputMode) -> anyhow::Result<()> {
    let engine = open_engine(ThresholdCatDetector::default())?;

    let report = StatusReport {
        arming_status: engine.arming_status()?,
        alarm_status: engine.alarm_status()?,
        cat_detected: engine.cat_detected()?,
        sensors: engine.sensors()?.iter().map(SensorInfo::from).collect(),
    };
    report.render(output_mode);
    Ok(())
}
