use crate::support::{plagiscan, setup_snapshot, stdout_json, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Config command and config resolution tests
// ============================================================================

#[test]
fn test_config_defaults() {
    let dir = tempdir().unwrap();

    plagiscan(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("# source: defaults"))
        .stdout(predicate::str::contains("cluster_threshold = 70"))
        .stdout(predicate::str::contains("flag_threshold = 50"))
        .stdout(predicate::str::contains("ignore_same_student = true"));
}

#[test]
fn test_config_explicit_file() {
    let dir = tempdir().unwrap();
    write_file(
        dir.path(),
        "strict.toml",
        "cluster_threshold = 85\nignore_same_student = false\n",
    );

    let output = plagiscan(dir.path())
        .args(["--format", "json", "--config", "strict.toml", "config"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["source"], "strict.toml");
    assert_eq!(json["config"]["cluster_threshold"], 85);
    assert_eq!(json["config"]["flag_threshold"], 50);
    assert_eq!(json["config"]["ignore_same_student"], false);
}

#[test]
fn test_global_config_drives_cluster_threshold() {
    let (dir, _) = setup_snapshot();
    // The support helper points the global config dir at the temp dir
    write_file(dir.path(), "config.toml", "cluster_threshold = 100\n");

    let output = plagiscan(dir.path())
        .args(["--format", "json", "cluster", "-s", "subs.json", "-a", "a1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["threshold"], 100);
    assert_eq!(
        json["clusters"][0]["student_names"],
        serde_json::json!(["Ana", "Ben"])
    );
}

#[test]
fn test_config_out_of_range_is_usage_error() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "bad.toml", "flag_threshold = 120\n");

    plagiscan(dir.path())
        .args(["--config", "bad.toml", "config"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid flag_threshold"));
}

#[test]
fn test_config_malformed_is_failure() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "bad.toml", "cluster_threshold = \"high\"\n");

    plagiscan(dir.path())
        .args(["--config", "bad.toml", "config"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_config_missing_explicit_file() {
    let dir = tempdir().unwrap();

    plagiscan(dir.path())
        .args(["--config", "absent.toml", "config"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}
