//! Integration tests for the homeguard CLI
//!
//! These tests drive the binary against a temporary homeguard directory,
//! testing full cycles of: sensor add → arm → sensor set → image → disarm

mod lifecycle_test;

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a homeguard command bound to `home`
fn homeguard(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("homeguard"));
    cmd.env("HOMEGUARD_HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Helper to write a dummy camera frame
fn write_frame(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("frame.jpg");
    fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
    path
}

// =============================================================================
// BASIC COMMANDS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    homeguard(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("homeguard v"));
}

#[test]
fn test_fresh_status_is_disarmed() {
    let temp = TempDir::new().unwrap();
    homeguard(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Arming: DISARMED"))
        .stdout(predicate::str::contains("Alarm:  NO_ALARM"))
        .stdout(predicate::str::contains("No sensors registered."));
}

#[test]
fn test_status_json() {
    let temp = TempDir::new().unwrap();
    let output = homeguard(temp.path()).args(["status", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["arming_status"], "disarmed");
    assert_eq!(json["alarm_status"], "no_alarm");
    assert_eq!(json["cat_detected"], false);
}

// =============================================================================
// SENSOR MANAGEMENT
// =============================================================================

#[test]
fn test_sensor_add_list_remove() {
    let temp = TempDir::new().unwrap();

    homeguard(temp.path())
        .args(["sensor", "add", "front", "--type", "door"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added sensor front (DOOR)"));

    homeguard(temp.path())
        .args(["sensor", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[inactive] front (DOOR)"));

    homeguard(temp.path())
        .args(["sensor", "remove", "front"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed sensor front"));

    homeguard(temp.path())
        .args(["sensor", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sensors registered."));
}

#[test]
fn test_duplicate_sensor_rejected() {
    let temp = TempDir::new().unwrap();
    homeguard(temp.path()).args(["sensor", "add", "front"]).assert().success();

    homeguard(temp.path())
        .args(["sensor", "add", "front", "-t", "window"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sensor already exists: front"));
}

#[test]
fn test_unknown_sensor_fails() {
    let temp = TempDir::new().unwrap();
    homeguard(temp.path())
        .args(["sensor", "set", "ghost", "on"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sensor not found: ghost"));
}

#[test]
fn test_invalid_sensor_type_rejected() {
    let temp = TempDir::new().unwrap();
    homeguard(temp.path())
        .args(["sensor", "add", "garage", "--type", "laser"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid sensor type"));
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_config_store_path_is_used() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("elsewhere/custom.json");
    fs::write(
        temp.path().join("config.toml"),
        format!("[store]\npath = {:?}\n", state.to_string_lossy()),
    )
    .unwrap();

    homeguard(temp.path()).args(["arm", "away"]).assert().success();

    assert!(state.exists());
    assert!(!temp.path().join("state.json").exists());
}

// =============================================================================
// ALARM FLOWS
// =============================================================================

#[test]
fn test_image_with_cat_while_armed_home_raises_alarm() {
    let temp = TempDir::new().unwrap();
    let frame = write_frame(temp.path());

    homeguard(temp.path()).args(["arm", "home"]).assert().success();

    homeguard(temp.path())
        .arg("image")
        .arg(&frame)
        .args(["--confidence", "87.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cat detected"))
        .stdout(predicate::str::contains("Alarm: ALARM"));
}

#[test]
fn test_image_below_threshold_is_no_cat() {
    let temp = TempDir::new().unwrap();
    let frame = write_frame(temp.path());

    homeguard(temp.path()).args(["arm", "home"]).assert().success();

    homeguard(temp.path())
        .arg("image")
        .arg(&frame)
        .args(["--confidence", "49.9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cat"))
        .stdout(predicate::str::contains("Alarm: NO_ALARM"));
}

#[test]
fn test_missing_image_fails() {
    let temp = TempDir::new().unwrap();
    homeguard(temp.path())
        .args(["image", "does-not-exist.jpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read image"));
}
