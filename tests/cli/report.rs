use crate::support::{plagiscan, setup_snapshot, stdout_json, write_file};
use tempfile::tempdir;
use predicates::prelude::*;

// ============================================================================
// Report command tests
// ============================================================================

#[test]
fn test_report_json() {
    let (dir, _) = setup_snapshot();

    let output = plagiscan(dir.path())
        .args(["--format", "json", "report", "-s", "subs.json", "-a", "a1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["assignment_id"], "a1");
    assert_eq!(json["total"], 4);
    assert_eq!(json["with_content"], 4);
    assert_eq!(json["high"], 2);

    let distribution = &json["distribution"];
    assert_eq!(distribution["0-20"], 2);
    assert_eq!(distribution["21-40"], 0);
    assert_eq!(distribution["61-80"], 1);
    assert_eq!(distribution["81-100"], 1);

    let flagged = json["flagged"].as_array().unwrap();
    let ids: Vec<&str> = flagged
        .iter()
        .map(|f| f["submission_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["s2", "s4"]);
    assert_eq!(flagged[0]["risk"], "high");
    assert_eq!(flagged[0]["roll_number"], "R02");

    assert_eq!(json["clusters"].as_array().unwrap().len(), 1);
}

#[test]
fn test_report_human() {
    let (dir, _) = setup_snapshot();

    plagiscan(dir.path())
        .args(["report", "-s", "subs.json", "-a", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Submissions: 4 (4 with text content)"))
        .stdout(predicate::str::contains("High plagiarism (> 50%): 2"))
        .stdout(predicate::str::contains("100%  Ben [R02] (s2, high risk)"))
        .stdout(predicate::str::contains("Students: Ana, Ben, Dee"));
}

#[test]
fn test_report_flag_threshold_override() {
    let (dir, _) = setup_snapshot();

    let output = plagiscan(dir.path())
        .args([
            "--format",
            "json",
            "report",
            "-s",
            "subs.json",
            "-a",
            "a1",
            "--flag-threshold",
            "80",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["flag_threshold"], 80);
    assert_eq!(json["flagged"].as_array().unwrap().len(), 1);
}

#[test]
fn test_report_records() {
    let (dir, _) = setup_snapshot();

    plagiscan(dir.path())
        .args(["--format", "records", "report", "-s", "subs.json", "-a", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H plagiscan=1 records=1 mode=report assignment=a1 total=4 with_content=4 high=2",
        ))
        .stdout(predicate::str::contains("D bucket=0-20 count=2"))
        .stdout(predicate::str::contains(
            "F id=s4 name=Dee roll=R04 score=71 risk=high",
        ));
}

#[test]
fn test_report_rejects_stored_score_above_100() {
    let dir = tempdir().unwrap();
    write_file(
        dir.path(),
        "subs.json",
        r#"[{"id": "s1", "assignmentId": "a1", "studentId": "st1", "studentName": "Ana",
             "fileContent": "text", "plagiarismScore": 180}]"#,
    );

    plagiscan(dir.path())
        .args(["report", "-s", "subs.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("plagiarismScore 180 (expected 0-100)"));
}
