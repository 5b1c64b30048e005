//! Integration tests for the pmc-board CLI
//!
//! These tests run the binary against a temporary project with real state
//! files and inspect the generated board.

use assert_cmd::cargo;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a pmc-board command
fn pmc_board() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("pmc-board"))
}

/// Helper to write a JSON state file
fn write_data(root: &Path, name: &str, value: &serde_json::Value) {
    let dir = root.join(".obpmc/data");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// Helper to seed a project with three students
///
/// Ranked order is alice, carol, bob.
fn seed_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write_data(
        root,
        "students.json",
        &json!({
            "people": {
                "alice": {"id": "alice", "registered": true, "tasks": [
                    {"name": "task1", "completed": true, "rewardable": true},
                    {"name": "task2", "completed": false, "rewardable": true}
                ]},
                "bob": {"id": "bob", "registered": false, "tasks": [
                    {"name": "task1", "completed": false, "rewardable": true},
                    {"name": "task2", "completed": false, "rewardable": true}
                ]},
                "carol": {"id": "carol", "registered": true, "tasks": [
                    {"name": "task1", "completed": false, "rewardable": true},
                    {"name": "task2", "completed": true, "rewardable": false}
                ]}
            },
            "sequence": ["bob", "carol", "alice"]
        }),
    );
    write_data(root, "rewards.json", &json!({"alice": {"total": 35}}));
    write_data(root, "unmerged.json", &json!({"alice": {"task2": true}}));
    write_data(root, "metadata.json", &json!({"task": {"rewardDeadline": 1_719_763_200_000_i64}}));

    temp
}

fn board(root: &Path) -> String {
    fs::read_to_string(root.join("members/readme.md")).unwrap()
}

// =============================================================================
// GENERATE
// =============================================================================

#[test]
fn test_generate_without_arguments() {
    let temp = seed_project();

    pmc_board()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let text = board(temp.path());
    assert!(text.starts_with("# 学员信息\n"));
    assert!(text.contains("超过有奖截止日期（2024-07-01 00:00:00）的。"));
    assert!(text.contains(
        "| 1 | [`alice`](alice) | 🟢 | 🟢 | 🟡 | 35 |\n\
         | 2 | [`carol`](carol) | 🟢 | 🔴 | 🔵 | 0 |\n\
         | 3 | [`bob`](bob) | 🔴 | 🔴 | 🔴 | 0 |\n\n## 其他奖励"
    ));
}

#[test]
fn test_generate_overwrites_previous_board() {
    let temp = seed_project();
    fs::create_dir_all(temp.path().join("members")).unwrap();
    fs::write(temp.path().join("members/readme.md"), "stale board\n".repeat(100)).unwrap();

    pmc_board().arg("--root").arg(temp.path()).assert().success();

    let text = board(temp.path());
    assert!(!text.contains("stale board"));
}

#[test]
fn test_generate_is_deterministic() {
    let temp = seed_project();

    pmc_board().current_dir(temp.path()).assert().success();
    let first = board(temp.path());
    pmc_board().current_dir(temp.path()).assert().success();

    assert_eq!(first, board(temp.path()));
}

#[test]
fn test_stdout_prints_board_without_writing() {
    let temp = seed_project();

    pmc_board()
        .arg("--stdout")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# 学员信息"))
        .stdout(predicate::str::contains("Wrote").not());

    assert!(!temp.path().join("members/readme.md").exists());
}

#[test]
fn test_generate_json_summary() {
    let temp = seed_project();

    let output = pmc_board()
        .args(["--json", "generate"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["students"], 3);
    assert_eq!(summary["registered"], 2);
    assert_eq!(summary["task_columns"], 2);
    assert_eq!(summary["deadline"], "2024-07-01 00:00:00");
    assert_eq!(summary["utc_offset"], "+08:00");
}

#[test]
fn test_generate_summary_prints_applied_offset() {
    let temp = seed_project();
    fs::write(temp.path().join(".obpmc/report.toml"), "utc_offset = \"-04:00\"\n").unwrap();

    pmc_board()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Reward deadline: 2024-06-30 12:00:00 (UTC-04:00)"));

    assert!(board(temp.path()).contains("超过有奖截止日期（2024-06-30 12:00:00）的。"));
}

#[test]
fn test_timezone_key_is_rejected() {
    let temp = seed_project();
    fs::write(
        temp.path().join(".obpmc/report.toml"),
        "timezone = \"America/New_York\"\n",
    )
    .unwrap();

    pmc_board()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("report.toml"));

    assert!(!temp.path().join("members/readme.md").exists());
}

#[test]
fn test_null_reward_entry_renders_zero() {
    let temp = seed_project();
    write_data(temp.path(), "rewards.json", &json!({"alice": null, "carol": {"total": -0.0}}));

    pmc_board().current_dir(temp.path()).assert().success();

    let text = board(temp.path());
    assert!(text.contains("| 1 | [`alice`](alice) | 🟢 | 🟢 | 🟡 | 0 |"));
    assert!(text.contains("| 2 | [`carol`](carol) | 🟢 | 🔴 | 🔵 | 0 |"));
    assert!(!text.contains("-0 |"));
}

#[test]
fn test_config_moves_output() {
    let temp = seed_project();
    fs::write(
        temp.path().join(".obpmc/report.toml"),
        "output = \"docs/board.md\"\nutc_offset = \"+00:00\"\n",
    )
    .unwrap();

    pmc_board().current_dir(temp.path()).assert().success();

    let text = fs::read_to_string(temp.path().join("docs/board.md")).unwrap();
    assert!(text.contains("超过有奖截止日期（2024-06-30 16:00:00）的。"));
    assert!(!temp.path().join("members/readme.md").exists());
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_missing_state_file_fails_without_output() {
    let temp = seed_project();
    fs::remove_file(temp.path().join(".obpmc/data/unmerged.json")).unwrap();

    pmc_board()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unmerged.json"));

    assert!(!temp.path().join("members/readme.md").exists());
}

#[test]
fn test_malformed_state_file_fails() {
    let temp = seed_project();
    fs::write(temp.path().join(".obpmc/data/rewards.json"), "{ not json").unwrap();

    let assert = pmc_board()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("key must be a string").count(), 1);
}

#[test]
fn test_misaligned_tasks_fail() {
    let temp = seed_project();
    write_data(
        temp.path(),
        "students.json",
        &json!({
            "people": {
                "a": {"registered": true, "tasks": [{"name": "task1", "completed": true}]},
                "b": {"registered": true, "tasks": [{"name": "task2", "completed": true}]}
            },
            "sequence": ["a", "b"]
        }),
    );

    pmc_board()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected \"task1\""));

    assert!(!temp.path().join("members/readme.md").exists());
}

#[test]
fn test_missing_deadline_fails() {
    let temp = seed_project();
    write_data(temp.path(), "metadata.json", &json!({"task": {}}));

    pmc_board().current_dir(temp.path()).assert().failure();
}

// =============================================================================
// STATUS
// =============================================================================

#[test]
fn test_status_lists_ranked_students() {
    let temp = seed_project();

    let output = pmc_board()
        .args(["status", "--json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = result["students"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["alice", "carol", "bob"]);
    assert_eq!(result["students"][1]["tasks"], json!(["pending", "late"]));

    assert!(!temp.path().join("members/readme.md").exists());
}

#[test]
fn test_version() {
    pmc_board()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pmc-board"));
}
