//! Tests for the engine running over the concrete store adapters

use std::sync::Arc;

use homeguard::adapters::{
    JsonFileSecurityStore, LogListener, MemorySecurityStore, SecurityState, ThresholdCatDetector,
};
use homeguard::core::models::{AlarmStatus, ArmingStatus, Image, Sensor, SensorType};
use homeguard::core::ports::SecurityStore;
use homeguard::core::services::AlarmEngine;
use tempfile::TempDir;

#[test]
fn test_file_store_persists_engine_decisions() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.json");

    {
        let mut store = JsonFileSecurityStore::open(&path).unwrap();
        store.add_sensor(Sensor::new("front", SensorType::Door)).unwrap();
        let mut engine = AlarmEngine::new(store, ThresholdCatDetector::default());
        engine.add_status_listener(Arc::new(LogListener));

        engine.set_arming_status(ArmingStatus::ArmedAway).unwrap();
        let mut front = engine.store().find_sensor("front").unwrap().unwrap();
        engine.change_sensor_activation_status(&mut front, true).unwrap();
    }

    let reopened = JsonFileSecurityStore::open(&path).unwrap();
    assert_eq!(reopened.arming_status().unwrap(), ArmingStatus::ArmedAway);
    assert_eq!(reopened.alarm_status().unwrap(), AlarmStatus::PendingAlarm);
    assert!(reopened.find_sensor("front").unwrap().unwrap().is_active());
}

#[test]
fn test_file_store_state_is_readable_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.json");

    let mut store = JsonFileSecurityStore::open(&path).unwrap();
    store.set_arming_status(ArmingStatus::ArmedHome).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"arming_status\": \"armed_home\""));
    assert!(content.contains("\"alarm_status\": \"no_alarm\""));
}

#[test]
fn test_memory_store_full_cycle() {
    let store = MemorySecurityStore::with_sensors([
        Sensor::new("front", SensorType::Door),
        Sensor::new("hall", SensorType::Motion),
    ]);
    let mut engine = AlarmEngine::new(store, ThresholdCatDetector::new(75.0));

    engine.set_arming_status(ArmingStatus::ArmedHome).unwrap();
    let mut front = engine.store().find_sensor("front").unwrap().unwrap();
    engine.change_sensor_activation_status(&mut front, true).unwrap();
    let mut hall = engine.store().find_sensor("hall").unwrap().unwrap();
    engine.change_sensor_activation_status(&mut hall, true).unwrap();
    // Pending with another sensor active: no escalation
    assert_eq!(engine.alarm_status().unwrap(), AlarmStatus::PendingAlarm);

    engine.change_sensor_activation_status(&mut hall, true).unwrap();
    assert_eq!(engine.alarm_status().unwrap(), AlarmStatus::Alarm);

    engine.process_image(&Image::default()).unwrap();
    assert!(engine.cat_detected().unwrap());
    assert_eq!(engine.alarm_status().unwrap(), AlarmStatus::Alarm);

    engine.set_arming_status(ArmingStatus::Disarmed).unwrap();
    let (store, _) = engine.into_parts();
    assert_eq!(store.state().alarm_status, AlarmStatus::NoAlarm);
    assert_eq!(store.state().arming_status, ArmingStatus::Disarmed);
}

#[test]
fn test_engine_sensor_registration_runs_no_rules() {
    let store = MemorySecurityStore::from_state(SecurityState {
        arming_status: ArmingStatus::ArmedAway,
        ..SecurityState::default()
    });
    let mut engine = AlarmEngine::new(store, ThresholdCatDetector::default());

    let mut sensor = Sensor::new("garage", SensorType::Door);
    sensor.set_active(true);
    engine.add_sensor(sensor.clone()).unwrap();
    assert_eq!(engine.alarm_status().unwrap(), AlarmStatus::NoAlarm);
    assert_eq!(engine.sensors().unwrap().len(), 1);

    engine.remove_sensor(&sensor).unwrap();
    assert!(engine.sensors().unwrap().is_empty());
}
