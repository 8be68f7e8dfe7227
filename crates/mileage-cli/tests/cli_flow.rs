//! End-to-end tests for the `mileage` binary.
//!
//! Each test writes a vehicle file into a temp directory and runs the binary
//! with `HOME` pointed there, so no user configuration leaks in.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const SCENARIO_A: &str = r#"{
    "vrm": "AB51 DVL",
    "make": "Ford",
    "model": "Focus",
    "registration_date": "2017-06-01",
    "events": [
        {"date": "2020-01-01", "type": "mot_test", "mileage": 30000, "result": "pass"},
        {"date": "2020-01-01", "type": "vrm_change", "from_vrm": "AB51 DVL", "to_vrm": "XYZ 789"},
        {"date": "2018-01-01", "type": "mot_test", "mileage": 10000, "result": "pass"}
    ]
}"#;

fn mileage_binary() -> String {
    env!("CARGO_BIN_EXE_mileage").to_string()
}

fn write_vehicle(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("vehicle.json");
    std::fs::write(&path, content).unwrap();
    path
}

fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(mileage_binary())
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("MILEAGE_DEFAULT_ANNUAL_MILEAGE")
        .env_remove("MILEAGE_YEAR_BASIS")
        .args(args)
        .output()
        .expect("failed to run mileage")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "mileage should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_rate_for_two_mot_tests() {
    let temp = TempDir::new().unwrap();
    let file = write_vehicle(temp.path(), SCENARIO_A);

    let output = run(temp.path(), &["rate", file.to_str().unwrap()]);
    let out = stdout(&output);

    assert!(out.contains("Annual mileage: 10,000 miles/year"), "{out}");
}

#[test]
fn test_project_to_fixed_date() {
    let temp = TempDir::new().unwrap();
    let file = write_vehicle(temp.path(), SCENARIO_A);

    let output = run(
        temp.path(),
        &["project", file.to_str().unwrap(), "--at", "2021-01-01"],
    );
    let out = stdout(&output);

    assert!(
        out.contains("Projected mileage on 2021-01-01: 40,000 miles"),
        "{out}"
    );
}

#[test]
fn test_project_json_defaults_to_today() {
    let temp = TempDir::new().unwrap();
    let file = write_vehicle(temp.path(), SCENARIO_A);

    let output = run(temp.path(), &["project", file.to_str().unwrap(), "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(json["kind"], "projected_mileage");
    assert_eq!(json["anchor"]["date"], "2020-01-01");
    assert!(json["mileage"].as_f64().unwrap() > 30_000.0);
}

#[test]
fn test_rate_reads_stdin() {
    let temp = TempDir::new().unwrap();

    let mut child = Command::new(mileage_binary())
        .env("HOME", temp.path())
        .env_remove("XDG_CONFIG_HOME")
        .args(["rate", "-", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn mileage");

    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(SCENARIO_A.as_bytes()).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["kind"], "rate");
    assert_eq!(json["miles_per_year"], 10_000.0);
}

#[test]
fn test_config_file_sets_default_rate() {
    let temp = TempDir::new().unwrap();
    let file = write_vehicle(
        temp.path(),
        r#"{"vrm": "AB51 DVL", "make": "Ford", "model": "Focus", "registration_date": "2017-06-01"}"#,
    );
    let config = temp.path().join("mileage.toml");
    std::fs::write(&config, "default_annual_mileage = 6500.0\n").unwrap();

    let output = run(
        temp.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "rate",
            file.to_str().unwrap(),
        ],
    );
    let out = stdout(&output);

    assert!(out.contains("Annual mileage: 6,500 miles/year"), "{out}");
}

#[test]
fn test_env_overrides_default_rate() {
    let temp = TempDir::new().unwrap();
    let file = write_vehicle(
        temp.path(),
        r#"{"vrm": "AB51 DVL", "make": "Ford", "model": "Focus", "registration_date": "2017-06-01"}"#,
    );

    let output = Command::new(mileage_binary())
        .env("HOME", temp.path())
        .env_remove("XDG_CONFIG_HOME")
        .env("MILEAGE_DEFAULT_ANNUAL_MILEAGE", "11000")
        .args(["rate", file.to_str().unwrap()])
        .output()
        .unwrap();
    let out = stdout(&output);

    assert!(out.contains("Annual mileage: 11,000 miles/year"), "{out}");
}

#[test]
fn test_timeline_lists_events_in_order() {
    let temp = TempDir::new().unwrap();
    let file = write_vehicle(temp.path(), SCENARIO_A);

    let output = run(temp.path(), &["timeline", file.to_str().unwrap()]);
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().skip(2).collect();

    assert_eq!(lines.len(), 3, "{out}");
    assert!(lines[0].starts_with("2018-01-01"), "{out}");
    assert!(lines[1].starts_with("2020-01-01  MOT test"), "{out}");
    assert!(lines[2].starts_with("2020-01-01  VRM change"), "{out}");
}

#[test]
fn test_invalid_event_date_fails() {
    let temp = TempDir::new().unwrap();
    let file = write_vehicle(
        temp.path(),
        r#"{
            "vrm": "AB51 DVL", "make": "Ford", "model": "Focus", "registration_date": "2017-06-01",
            "events": [{"date": "2018-02-30", "type": "mot_test", "mileage": 1, "result": "pass"}]
        }"#,
    );

    let output = run(temp.path(), &["rate", file.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid date"), "{stderr}");
}

#[test]
fn test_project_without_readings_fails() {
    let temp = TempDir::new().unwrap();
    let file = write_vehicle(
        temp.path(),
        r#"{
            "vrm": "AB51 DVL", "make": "Ford", "model": "Focus", "registration_date": "2017-06-01",
            "events": [{"date": "2018-02-01", "type": "vrm_change", "from_vrm": "AB51 DVL", "to_vrm": "XYZ 789"}]
        }"#,
    );

    let output = run(
        temp.path(),
        &["project", file.to_str().unwrap(), "--at", "2021-01-01"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no mileage reading to project from"), "{stderr}");
}

#[test]
fn test_same_day_readings_fail() {
    let temp = TempDir::new().unwrap();
    let file = write_vehicle(
        temp.path(),
        r#"{
            "vrm": "AB51 DVL", "make": "Ford", "model": "Focus", "registration_date": "2017-06-01",
            "events": [
                {"date": "2019-05-05", "type": "mot_test", "mileage": 15000, "result": "pass"},
                {"date": "2019-05-05", "type": "advertised_for_sale", "price_pence": 650000, "mileage": 15010}
            ]
        }"#,
    );

    let output = run(temp.path(), &["rate", file.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("both dated 2019-05-05"), "{stderr}");
}
