//! End-to-end tests for the `beam` binary.
//!
//! Every test runs inside its own temporary directory so no stray
//! `beam.toml` or output folder leaks between runs.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `beam` command rooted in `dir` with a clean environment.
fn beam(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("beam").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("BEAM_SAMPLES")
        .env_remove("BEAM_FORMAT")
        .env_remove("BEAM_OUTPUT_DIR")
        .env_remove("BEAM_PRECISION");
    cmd
}

fn write_definition(dir: &TempDir, file: &str, json: &str) {
    std::fs::write(dir.path().join(file), json).unwrap();
}

const MIDSPAN: &str = r#"{
    "name": "B-1",
    "length": 10.0,
    "point_loads": [{ "position": 5.0, "magnitude": 1000.0 }],
    "udls": [{ "start": 0.0, "end": 10.0, "intensity": 100.0 }]
}"#;

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// demo
// ---------------------------------------------------------------------------

#[test]
fn demo_prints_reference_reactions() {
    let tmp = TempDir::new().unwrap();
    beam(&tmp)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Beam: Beam A"))
        .stdout(predicate::str::contains("left = -12.067, right = -17.933"))
        .stdout(predicate::str::contains("Diagram (500 points)"));
}

#[test]
fn demo_json_report() {
    let tmp = TempDir::new().unwrap();
    let report = json_stdout(beam(&tmp).args(["demo", "--json", "--samples", "31"]));

    let left = report["reactions"]["left"].as_f64().unwrap();
    let right = report["reactions"]["right"].as_f64().unwrap();
    assert!((right - (-269.0 / 15.0)).abs() < 1e-9);
    assert!((left + right - (-30.0)).abs() < 1e-9);

    let diagram = report["diagram"].as_array().unwrap();
    assert_eq!(diagram.len(), 31);
    assert_eq!(diagram[30]["x"].as_f64().unwrap(), 15.0);
    assert!(diagram[30]["moment"].as_f64().unwrap().abs() < 1e-9);
    assert!(report["generated"].is_string());
}

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

#[test]
fn analyze_definition_as_csv() {
    let tmp = TempDir::new().unwrap();
    write_definition(&tmp, "b1.json", MIDSPAN);

    let output = beam(&tmp)
        .args(["analyze", "b1.json", "--samples", "11", "--format", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "x,shear,moment");
    assert_eq!(lines[1], "0.0,1000.0,0.0");
}

#[test]
fn analyze_reports_critical_points() {
    let tmp = TempDir::new().unwrap();
    write_definition(&tmp, "b1.json", MIDSPAN);

    let report = json_stdout(beam(&tmp).args(["analyze", "b1.json", "--json", "-n", "11"]));
    let xs: Vec<f64> = report["critical_points"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["x"].as_f64().unwrap())
        .collect();
    assert_eq!(xs, vec![0.0, 5.0, 10.0]);

    let max_moment = report["extremes"]["max_moment"].as_f64().unwrap();
    assert!((max_moment - 3750.0).abs() < 1e-6);
}

#[test]
fn analyze_save_writes_csv() {
    let tmp = TempDir::new().unwrap();
    write_definition(&tmp, "b1.json", MIDSPAN);

    beam(&tmp)
        .args(["analyze", "b1.json", "--samples", "5", "--save"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved diagram to"));

    let saved = tmp.path().join("Beam_Outputs").join("B-1.csv");
    let text = std::fs::read_to_string(saved).unwrap();
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn analyze_rejects_reversed_udl() {
    let tmp = TempDir::new().unwrap();
    write_definition(
        &tmp,
        "bad.json",
        r#"{"length": 10.0, "udls": [{"start": 8.0, "end": 2.0, "intensity": 1.0}]}"#,
    );

    beam(&tmp)
        .args(["analyze", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid UDL"));
}

#[test]
fn analyze_error_as_json() {
    let tmp = TempDir::new().unwrap();
    write_definition(
        &tmp,
        "bad.json",
        r#"{"length": 4.0, "point_loads": [{"position": 9.0, "magnitude": 1.0}]}"#,
    );

    let output = beam(&tmp)
        .args(["analyze", "bad.json", "--json"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["code"], "OUT_OF_RANGE_LOAD");
}

#[test]
fn analyze_rejects_single_sample() {
    let tmp = TempDir::new().unwrap();
    write_definition(&tmp, "b1.json", MIDSPAN);

    beam(&tmp)
        .args(["analyze", "b1.json", "--samples", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sample count must be at least 2"));
}

#[test]
fn analyze_missing_file() {
    let tmp = TempDir::new().unwrap();
    beam(&tmp)
        .args(["analyze", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_file_sets_defaults() {
    let tmp = TempDir::new().unwrap();
    write_definition(&tmp, "b1.json", MIDSPAN);
    std::fs::write(tmp.path().join("beam.toml"), "samples = 3\nformat = \"csv\"\n").unwrap();

    let output = beam(&tmp).args(["analyze", "b1.json"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 4);

    // flags win over the file
    let output = beam(&tmp)
        .args(["analyze", "b1.json", "--samples", "6"])
        .output()
        .unwrap();
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 7);
}

#[test]
fn env_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("beam.toml"), "format = \"csv\"\n").unwrap();

    let output = beam(&tmp)
        .args(["demo"])
        .env("BEAM_SAMPLES", "4")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 5);
}

#[test]
fn missing_explicit_config() {
    let tmp = TempDir::new().unwrap();
    beam(&tmp)
        .args(["demo", "--config", "other.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

// ---------------------------------------------------------------------------
// interactive
// ---------------------------------------------------------------------------

#[test]
fn interactive_session() {
    let tmp = TempDir::new().unwrap();
    beam(&tmp)
        .args(["interactive", "--samples", "3"])
        .write_stdin("10\nB-1\n5 1000\n\n0 10 100\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("left = 1000.000, right = 1000.000"));
}

#[test]
fn interactive_recovers_from_bad_input() {
    let tmp = TempDir::new().unwrap();
    beam(&tmp)
        .args(["interactive", "--samples", "3"])
        .write_stdin("0\nx\n10\nB-2\n11 5\n5 100\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Beam length must be positive"))
        .stdout(predicate::str::contains("Load out of range"))
        .stdout(predicate::str::contains("left = 50.000, right = 50.000"));
}

#[test]
fn interactive_without_input_fails() {
    let tmp = TempDir::new().unwrap();
    beam(&tmp)
        .arg("interactive")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended"));
}
