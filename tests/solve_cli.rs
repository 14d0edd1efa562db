use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

fn solve_cmd() -> Command {
    Command::cargo_bin("solve").expect("binary exists")
}

#[test]
fn test_solve_writes_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = dir.path().join("results.csv");

    solve_cmd()
        .args(["1E3425786", "--strategy", "bfs", "--output"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Search successful!"))
        .stdout(predicate::str::contains("Search Depth: 3"));

    let text = fs::read_to_string(&report).expect("report written");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Starting State: 1E3425786");
    assert_eq!(lines[1], "Final State: 12345678E");
    assert_eq!(lines.last().copied(), Some("Start, 2 to 5, 5 to 6, 6 to 9"));
}

#[test]
fn test_solve_accepts_every_strategy_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    for name in ["breadth-first", "depth-first", "a-star-misplaced", "a-star-manhattan"] {
        solve_cmd()
            .args(["12345670 8", "-s", name, "-o"])
            .arg(dir.path().join(format!("{}.csv", name)))
            .assert()
            .success()
            .stdout(predicate::str::contains("Final State: 12345678E"));
    }
}

#[test]
fn test_solve_refuses_unsolvable_board() {
    solve_cmd()
        .arg("213456780")
        .assert()
        .failure()
        .stdout(predicate::str::contains("is not solvable!"));
}

#[test]
fn test_solve_reports_goal_start_as_no_op() {
    let dir = tempfile::tempdir().expect("tempdir");
    solve_cmd()
        .args(["12345678E", "-o"])
        .arg(dir.path().join("results.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Solution was not found"))
        .stdout(predicate::str::contains("already equals the goal"));
}

#[test]
fn test_solve_rejects_malformed_board() {
    solve_cmd()
        .arg("12345678X")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized character 'X'"));
}
