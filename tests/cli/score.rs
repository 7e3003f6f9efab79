use crate::support::{plagiscan, setup_snapshot, stderr_json, stdout_json, write_file};
use predicates::prelude::*;

// ============================================================================
// Score command tests
// ============================================================================

#[test]
fn test_score_copy_of_prior_submission() {
    let (dir, _) = setup_snapshot();
    write_file(
        dir.path(),
        "new.txt",
        "Photosynthesis turns light into chemical energy",
    );

    plagiscan(dir.path())
        .args([
            "score", "-s", "subs.json", "-a", "a1", "--student", "st9", "new.txt",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plagiarism score: 100% (high risk)"))
        .stdout(predicate::str::contains(
            "Closest match: s1 (compared against 4 submissions)",
        ));
}

#[test]
fn test_score_skips_own_submissions() {
    let (dir, _) = setup_snapshot();
    write_file(
        dir.path(),
        "new.txt",
        "photosynthesis turns light into chemical energy",
    );

    let output = plagiscan(dir.path())
        .args([
            "--format",
            "json",
            "score",
            "--snapshot",
            "subs.json",
            "--assignment",
            "a1",
            "--student",
            "st1",
            "new.txt",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["score"], 100);
    assert_eq!(json["best_match"], "s2");
    assert_eq!(json["compared"], 3);
    assert_eq!(json["risk"], "high");
}

#[test]
fn test_score_first_submission_of_assignment() {
    let (dir, _) = setup_snapshot();
    write_file(dir.path(), "new.txt", "anything at all");

    let output = plagiscan(dir.path())
        .args([
            "--format", "json", "score", "-s", "subs.json", "-a", "a9", "--student", "st1",
            "new.txt",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["score"], 0);
    assert!(json["best_match"].is_null());
    assert_eq!(json["compared"], 0);
}

#[test]
fn test_score_partial_overlap() {
    let (dir, _) = setup_snapshot();
    write_file(dir.path(), "new.txt", "cellular respiration releases energy");

    // Best match is s3: 4 shared of 6 distinct words
    plagiscan(dir.path())
        .args([
            "--format", "records", "score", "-s", "subs.json", "-a", "a1", "--student", "st9",
            "new.txt",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H plagiscan=1 records=1 mode=score assignment=a1",
        ))
        .stdout(predicate::str::contains(
            "S student=st9 score=67 similarity=66.67 risk=high compared=4 best=s3",
        ));
}

#[test]
fn test_score_needs_assignment_when_ambiguous() {
    let (dir, _) = setup_snapshot();
    write_file(dir.path(), "new.txt", "text");

    let output = plagiscan(dir.path())
        .args([
            "--format", "json", "score", "-s", "subs.json", "--student", "st9", "new.txt",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let err = stderr_json(&output);
    assert_eq!(err["error"]["type"], "usage_error");
    assert!(err["error"]["message"]
        .as_str()
        .unwrap()
        .contains("pass --assignment"));
}

#[test]
fn test_score_blank_student_is_invalid_input() {
    let (dir, _) = setup_snapshot();
    write_file(dir.path(), "new.txt", "text");

    plagiscan(dir.path())
        .args([
            "score", "-s", "subs.json", "-a", "a1", "--student", "  ", "new.txt",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn test_score_missing_snapshot() {
    let (dir, _) = setup_snapshot();
    write_file(dir.path(), "new.txt", "text");

    plagiscan(dir.path())
        .args([
            "score", "-s", "nope.json", "-a", "a1", "--student", "st9", "new.txt",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("snapshot not found"));
}
