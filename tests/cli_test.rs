use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Command pointed at a config path inside a temp dir so the user's real
/// config never leaks into a test.
fn owl(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("owl").unwrap();
    cmd.arg("--config").arg(dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_calc_text_output() {
    let dir = TempDir::new().unwrap();
    owl(&dir)
        .args(["calc", "--wake", "08:00", "--now", "2026-01-08T23:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current time:  11:30 PM"))
        .stdout(predicate::str::contains("Wake-up time:  8:00 AM"))
        .stdout(predicate::str::contains(
            "You'll get 8 hours and 30 minutes of sleep",
        ))
        .stdout(predicate::str::contains("Healthy sleep!"));
}

#[test]
fn test_calc_omits_zero_minutes() {
    let dir = TempDir::new().unwrap();
    owl(&dir)
        .args(["calc", "--wake", "6:00 AM", "--now", "2026-01-08T02:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You'll get 4 hours of sleep"))
        .stdout(predicate::str::contains("Try sleeping earlier."));
}

#[test]
fn test_calc_json_contract() {
    let dir = TempDir::new().unwrap();
    let output = owl(&dir)
        .args([
            "calc",
            "--wake",
            "08:00",
            "--now",
            "2026-01-08T07:00",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["now"], "2026-01-08T07:00:00");
    assert_eq!(json["wake_at"], "2026-01-08T08:00:00");
    assert_eq!(json["wake_time"], "08:00");
    assert_eq!(json["duration"]["hours"], 1);
    assert_eq!(json["duration"]["minutes"], 0);
    assert_eq!(json["category"], "insufficient");
    assert_eq!(json["message"], "Fix your damn schedule!");
}

#[test]
fn test_calc_equal_times_roll_over() {
    let dir = TempDir::new().unwrap();
    owl(&dir)
        .args(["calc", "--wake", "8am", "--now", "2026-01-08T08:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You'll get 24 hours of sleep"));
}

#[test]
fn test_calc_uses_config_default_wake() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[wake]\ndefault = \"06:30\"\n",
    )
    .unwrap();

    owl(&dir)
        .args(["calc", "--now", "2026-01-08T22:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wake-up time:  6:30 AM"))
        .stdout(predicate::str::contains(
            "You'll get 8 hours and 30 minutes of sleep",
        ));
}

#[test]
fn test_calc_rejects_invalid_wake() {
    let dir = TempDir::new().unwrap();
    owl(&dir)
        .args(["calc", "--wake", "25:00", "--now", "2026-01-08T22:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hour 25 is out of range"));

    owl(&dir)
        .args(["calc", "--wake", "07:32", "--now", "2026-01-08T22:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a multiple of 5"));
}

#[test]
fn test_calc_rejects_invalid_now() {
    let dir = TempDir::new().unwrap();
    owl(&dir)
        .args(["calc", "--now", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time 'yesterday'"));
}

#[test]
fn test_times_lists_picker_values() {
    let dir = TempDir::new().unwrap();
    owl(&dir)
        .args(["times", "--step", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12:00 AM"))
        .stdout(predicate::str::contains("11:30 PM"))
        .stdout(predicate::str::contains("7:15 AM").not());
}

#[test]
fn test_times_json() {
    let dir = TempDir::new().unwrap();
    let output = owl(&dir)
        .args(["times", "--step", "15", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 96);
    assert_eq!(items[0], "00:00");
    assert_eq!(items[95], "23:45");
}

#[test]
fn test_config_init_then_get() {
    let dir = TempDir::new().unwrap();
    owl(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(dir.path().join("config.toml").exists());

    owl(&dir)
        .args(["config", "get", "wake.default"])
        .assert()
        .success()
        .stdout("08:00\n");

    owl(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    owl(&dir).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn test_config_list_shows_sections() {
    let dir = TempDir::new().unwrap();
    owl(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[wake]"))
        .stdout(predicate::str::contains("[refresh]"))
        .stdout(predicate::str::contains("interval_secs = 60"));
}
