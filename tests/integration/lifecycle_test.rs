//! Integration tests for the full alarm lifecycle
//!
//! Tests the complete flow:
//! 1. Sensors are registered while disarmed
//! 2. The system is armed, which resets tripped sensors
//! 3. A sensor trips (pending), a second report escalates (alarm)
//! 4. Disarming clears the alarm

use std::path::Path;

use tempfile::TempDir;

use super::homeguard;

fn status_json(home: &Path) -> serde_json::Value {
    let output = homeguard(home).args(["status", "--json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn sensor_active(status: &serde_json::Value, name: &str) -> bool {
    status["sensors"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["name"] == name)
        .map(|s| s["active"].as_bool().unwrap())
        .unwrap()
}

#[test]
fn test_intrusion_then_disarm() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    homeguard(home).args(["sensor", "add", "front", "-t", "door"]).assert().success();
    homeguard(home).args(["sensor", "add", "hall", "-t", "motion"]).assert().success();

    // Tripping a sensor while disarmed changes nothing but the sensor
    homeguard(home).args(["sensor", "set", "front", "on"]).assert().success();
    let status = status_json(home);
    assert_eq!(status["alarm_status"], "no_alarm");
    assert!(sensor_active(&status, "front"));

    // Arming resets every sensor
    homeguard(home).args(["arm", "away"]).assert().success();
    let status = status_json(home);
    assert_eq!(status["arming_status"], "armed_away");
    assert!(!sensor_active(&status, "front"));

    homeguard(home).args(["sensor", "set", "hall", "on"]).assert().success();
    assert_eq!(status_json(home)["alarm_status"], "pending_alarm");

    // Reporting an already active sensor escalates
    homeguard(home).args(["sensor", "set", "hall", "on"]).assert().success();
    assert_eq!(status_json(home)["alarm_status"], "alarm");

    homeguard(home).arg("disarm").assert().success();
    let status = status_json(home);
    assert_eq!(status["alarm_status"], "no_alarm");
    assert_eq!(status["arming_status"], "disarmed");
}

#[test]
fn test_pending_resolves_when_sensor_clears() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    homeguard(home).args(["sensor", "add", "window", "-t", "window"]).assert().success();
    homeguard(home).args(["arm", "home"]).assert().success();

    homeguard(home).args(["sensor", "set", "window", "on"]).assert().success();
    assert_eq!(status_json(home)["alarm_status"], "pending_alarm");

    homeguard(home).args(["sensor", "set", "window", "off"]).assert().success();
    assert_eq!(status_json(home)["alarm_status"], "no_alarm");
}

#[test]
fn test_cat_seen_before_arming_home() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    let frame = home.join("frame.png");
    std::fs::write(&frame, b"\x89PNG").unwrap();

    homeguard(home).arg("image").arg(&frame).args(["-c", "95"]).assert().success();
    assert_eq!(status_json(home)["cat_detected"], true);

    homeguard(home).args(["arm", "home"]).assert().success();
    assert_eq!(status_json(home)["alarm_status"], "alarm");
}
