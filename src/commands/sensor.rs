//! Sensor command - register, list, remove and toggle sensors

use homeguard::adapters::ThresholdCatDetector;
use homeguard::core::models::Sensor;
use homeguard::core::ports::SecurityStore;
use homeguard::output::{OperationResult, OutputMode, SensorInfo, SensorListResult};

use super::{Engine, open_engine};
use crate::cli::{SensorAction, SensorState};

/// Handle sensor subcommands
pub fn sensor_cmd(action: SensorAction, output_mode: OutputMode) -> anyhow::Result<()> {
    let mut engine = open_engine(ThresholdCatDetector::default())?;

    match action {
        SensorAction::Add { name, sensor_type } => {
            if engine.store().find_sensor(&name)?.is_some() {
                anyhow::bail!("Sensor already exists: {name}");
            }
            let sensor = Sensor::new(name, sensor_type);
            let message = format!("Added sensor {sensor}");
            engine.add_sensor(sensor)?;
            OperationResult::ok(message).render(output_mode);
        },
        SensorAction::List => {
            let sensors = engine.sensors()?.iter().map(SensorInfo::from).collect();
            SensorListResult { sensors }.render(output_mode);
        },
        SensorAction::Remove { name } => {
            let sensor = find(&engine, &name)?;
            engine.remove_sensor(&sensor)?;
            OperationResult::ok(format!("Removed sensor {sensor}")).render(output_mode);
        },
        SensorAction::Set { name, state } => {
            let mut sensor = find(&engine, &name)?;
            engine.change_sensor_activation_status(&mut sensor, state == SensorState::On)?;
            let label = if sensor.is_active() { "active" } else { "inactive" };
            OperationResult::ok(format!("Sensor {sensor} is {label}"))
                .with_alarm_status(engine.alarm_status()?)
                .render(output_mode);
        },
    }

    Ok(())
}

fn find(engine: &Engine, name: &str) -> anyhow::Result<Sensor> {
    engine
        .store()
        .find_sensor(name)?
        .ok_or_else(|| anyhow::anyhow!("Sensor not found: {name}"))
}
