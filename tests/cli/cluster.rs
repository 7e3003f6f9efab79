use crate::support::{plagiscan, setup_snapshot, stderr_json, stdout_json, write_file};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Cluster command tests
// ============================================================================

#[test]
fn test_cluster_human() {
    let (dir, _) = setup_snapshot();

    plagiscan(dir.path())
        .args(["cluster", "-s", "subs.json", "-a", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cluster 1 - 100% similar, 3 submissions",
        ))
        .stdout(predicate::str::contains("Students: Ana, Ben, Dee"))
        .stdout(predicate::str::contains("Cy").not());
}

#[test]
fn test_cluster_json() {
    let (dir, _) = setup_snapshot();

    let output = plagiscan(dir.path())
        .args(["--format", "json", "cluster", "-s", "subs.json", "-a", "a1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["assignment_id"], "a1");
    assert_eq!(json["threshold"], 70);

    let clusters = json["clusters"].as_array().unwrap();
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0]["score"], 100);
    assert_eq!(
        clusters[0]["student_names"],
        serde_json::json!(["Ana", "Ben", "Dee"])
    );
    // s4 differs from s1/s2, so the members do not share one fingerprint
    assert!(clusters[0].get("fingerprint").is_none());
}

#[test]
fn test_cluster_exact_match_has_fingerprint() {
    let (dir, _) = setup_snapshot();

    let output = plagiscan(dir.path())
        .args([
            "--format", "json", "cluster", "-s", "subs.json", "-a", "a1", "-t", "100",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    let clusters = json["clusters"].as_array().unwrap();
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0]["members"].as_array().unwrap().len(), 2);
    assert_eq!(clusters[0]["fingerprint"].as_str().unwrap().len(), 64);
}

#[test]
fn test_cluster_records() {
    let (dir, _) = setup_snapshot();

    plagiscan(dir.path())
        .args(["--format", "records", "cluster", "-s", "subs.json", "-a", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H plagiscan=1 records=1 mode=cluster assignment=a1 threshold=70",
        ))
        .stdout(predicate::str::contains(
            "C cluster=1 score=100 similarity=100.00 size=3 fingerprint=-",
        ))
        .stdout(predicate::str::contains(
            "M cluster=1 id=s4 student=st4 name=Dee",
        ));
}

#[test]
fn test_cluster_threshold_out_of_range() {
    let (dir, _) = setup_snapshot();

    let output = plagiscan(dir.path())
        .args([
            "--format", "json", "cluster", "-s", "subs.json", "-a", "a1", "--threshold", "150",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let err = stderr_json(&output);
    assert_eq!(err["error"]["code"], 2);
    assert_eq!(err["error"]["type"], "invalid_value");
    assert!(err["error"]["message"]
        .as_str()
        .unwrap()
        .contains("150 (expected 0-100)"));
}

#[test]
fn test_cluster_threshold_not_a_number() {
    let (dir, _) = setup_snapshot();

    let output = plagiscan(dir.path())
        .args([
            "--format", "json", "cluster", "-s", "subs.json", "-a", "a1", "--threshold", "high",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr_json(&output)["error"]["type"], "usage_error");
}

#[test]
fn test_cluster_unknown_assignment_is_data_error() {
    let (dir, _) = setup_snapshot();

    plagiscan(dir.path())
        .args(["cluster", "-s", "subs.json", "-a", "a9"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("assignment not found: a9"));
}

#[test]
fn test_cluster_malformed_snapshot() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "subs.json", r#"{"students": []}"#);

    plagiscan(dir.path())
        .args(["cluster", "-s", "subs.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid snapshot"));
}

#[test]
fn test_cluster_duplicate_ids_rejected() {
    let dir = tempdir().unwrap();
    write_file(
        dir.path(),
        "subs.json",
        r#"[
          {"id": "s1", "assignmentId": "a1", "studentId": "st1", "studentName": "Ana", "fileContent": "x y"},
          {"id": "s1", "assignmentId": "a1", "studentId": "st2", "studentName": "Ben", "fileContent": "x y"}
        ]"#,
    );

    plagiscan(dir.path())
        .args(["cluster", "-s", "subs.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("duplicate submission id 's1'"));
}

#[test]
fn test_cluster_directory_snapshot() {
    let dir = tempdir().unwrap();
    let essays = dir.path().join("essay-1");
    fs::create_dir(&essays).unwrap();
    write_file(&essays, "alice.txt", "The water cycle moves water around Earth.");
    write_file(&essays, "bob.txt", "the water cycle moves water around earth.");
    write_file(&essays, "carol.txt", "Volcanoes form at plate boundaries.");
    fs::write(essays.join("dan.pdf"), b"%PDF-1.4").unwrap();

    let output = plagiscan(dir.path())
        .args(["--format", "json", "cluster", "-s", "essay-1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["assignment_id"], "essay-1");
    let clusters = json["clusters"].as_array().unwrap();
    assert_eq!(clusters.len(), 1);
    assert_eq!(
        clusters[0]["student_names"],
        serde_json::json!(["alice", "bob"])
    );
    assert!(clusters[0]["fingerprint"].is_string());
}

#[test]
fn test_cluster_same_student_flag() {
    let dir = tempdir().unwrap();
    write_file(
        dir.path(),
        "subs.json",
        r#"[
          {"id": "s1", "assignmentId": "a1", "studentId": "st1", "studentName": "Ana", "fileContent": "draft one text"},
          {"id": "s2", "assignmentId": "a1", "studentId": "st1", "studentName": "Ana", "fileContent": "draft one text"}
        ]"#,
    );

    plagiscan(dir.path())
        .args(["--format", "json", "cluster", "-s", "subs.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"clusters\": []"));

    plagiscan(dir.path())
        .args([
            "--format",
            "json",
            "cluster",
            "-s",
            "subs.json",
            "--include-same-student",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"submission_id\": \"s2\""));
}

#[test]
fn test_cluster_directory_with_shared_stems() {
    let dir = tempdir().unwrap();
    let essays = dir.path().join("essay-2");
    fs::create_dir_all(essays.join("late")).unwrap();
    write_file(&essays, "alice.txt", "rivers carve deep valleys");
    write_file(&essays, "alice.md", "notes about glaciers");
    write_file(&essays, "bob.txt", "rivers carve deep valleys");
    write_file(&essays.join("late"), "alice.txt", "more notes on rivers");

    let output = plagiscan(dir.path())
        .args(["--format", "json", "cluster", "-s", "essay-2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    let clusters = json["clusters"].as_array().unwrap();
    assert_eq!(clusters.len(), 1);
    let ids: Vec<&str> = clusters[0]["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["submission_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["alice.txt", "bob.txt"]);
}
