use crate::support::{plagiscan, setup_snapshot, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Pairs command tests
// ============================================================================

#[test]
fn test_pairs_json_sorted_by_similarity() {
    let (dir, _) = setup_snapshot();

    let output = plagiscan(dir.path())
        .args(["--format", "json", "pairs", "-s", "subs.json", "-a", "a1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["threshold"], 70);

    let pairs = json["pairs"].as_array().unwrap();
    let ids: Vec<(&str, &str)> = pairs
        .iter()
        .map(|p| (p["first"].as_str().unwrap(), p["second"].as_str().unwrap()))
        .collect();
    assert_eq!(ids, vec![("s1", "s2"), ("s1", "s4"), ("s2", "s4")]);

    assert_eq!(pairs[0]["score"], 100);
    assert_eq!(pairs[1]["score"], 71);
    assert_eq!(pairs[0]["first_student"], "Ana");
    assert_eq!(pairs[0]["second_student"], "Ben");
}

#[test]
fn test_pairs_threshold_override() {
    let (dir, _) = setup_snapshot();

    plagiscan(dir.path())
        .args([
            "--format", "records", "pairs", "-s", "subs.json", "-a", "a1", "--threshold", "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H plagiscan=1 records=1 mode=pairs assignment=a1 threshold=100",
        ))
        .stdout(predicate::str::contains(
            "P first=s1 second=s2 score=100 similarity=100.00",
        ))
        .stdout(predicate::str::contains("s4").not());
}

#[test]
fn test_pairs_human_none_found() {
    let (dir, _) = setup_snapshot();

    plagiscan(dir.path())
        .args(["pairs", "-s", "subs.json", "-a", "a2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No pairs at or above 70% similarity in a2",
        ));
}
