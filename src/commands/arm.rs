//! Arm/disarm command

use homeguard::adapters::ThresholdCatDetector;
use homeguard::core::models::ArmingStatus;
use homeguard::output::{OperationResult, OutputMode};

use super::open_engine;

/// Set the arming status
pub fn arm(status: ArmingStatus, output_mode: OutputMode) -> anyhow::Result<()> {
    let mut engine = open_engine(ThresholdCatDetector::default())?;
    engine.set_arming_status(status)?;

    let message = if status.is_armed() {
        format!("System armed: {status}")
    } else {
        "System disarmed".to_string()
    };
    OperationResult::ok(message)
        .with_alarm_status(engine.alarm_status()?)
        .render(output_mode);
    Ok(())
}
