use std::fs;
use std::process::Command;

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_agrigeo-shield");

fn workspace(input: &str, config: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("districts.json"), input).unwrap();
    if let Some(config) = config {
        fs::write(dir.path().join("agrigeo.toml"), config).unwrap();
    }
    dir
}

const MADURAI: &str =
    r#"{"districts": [{"state": "Tamil Nadu", "district": "Madurai", "target_year": 2024}]}"#;

#[test]
fn test_rejects_unknown_format() {
    let dir = workspace(MADURAI, None);
    let output = Command::new(BIN)
        .arg(dir.path().join("districts.json"))
        .args(["--format", "jsn"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid value"));
}

#[test]
fn test_score_output() {
    let dir = workspace(MADURAI, None);
    let output = Command::new(BIN)
        .arg(dir.path().join("districts.json"))
        .arg("--config")
        .arg(dir.path())
        .args(["--score", "-q"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Madurai\t90\n");
}

#[test]
fn test_fail_below_sets_exit_code() {
    let dir = workspace(MADURAI, Some("[ci]\nfail_below = 95\n"));
    let output = Command::new(BIN)
        .arg(dir.path().join("districts.json"))
        .arg("--config")
        .arg(dir.path())
        .args(["--format", "json", "-q"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["summary"]["failing"][0], "Madurai");
}

#[test]
fn test_unknown_preset_reports_error() {
    let dir = workspace(MADURAI, None);
    let output = Command::new(BIN)
        .arg(dir.path().join("districts.json"))
        .arg("--config")
        .arg(dir.path())
        .args(["--preset", "monsoon"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: unknown preset `monsoon`"));
}
