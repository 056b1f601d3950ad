use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn tempo_cmd(db_path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tempo").expect("Failed to find tempo binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Create a default-ledger goal that started on 2024-03-01.
fn create_backdated_goal(db_path: &std::path::Path) {
    tempo_cmd(db_path)
        .args([
            "goal",
            "create",
            "Learn Rust",
            "--level",
            "beginner",
            "--minutes",
            "45",
            "--start",
            "2024-03-01",
            "--deadline",
            "2024-03-31",
            "--no-roadmap",
        ])
        .assert()
        .success();
}

fn complete(db_path: &std::path::Path, task_ids: &[u32]) {
    for id in task_ids {
        tempo_cmd(db_path)
            .args(["task", "complete", &id.to_string()])
            .assert()
            .success();
    }
}

#[test]
fn test_cli_create_goal_with_default_ledger() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tempo_cmd(&db_path)
        .args(["goal", "create", "Learn Rust", "--no-roadmap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created goal with ID: 1 (30 tasks)"))
        .stdout(predicate::str::contains("# 1. Learn Rust"))
        .stdout(predicate::str::contains("Day 30: Learning Module"));
}

#[test]
fn test_cli_create_goal_with_roadmap() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tempo_cmd(&db_path)
        .args(["goal", "create", "Learn Rust", "--level", "intermediate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("with a generated roadmap"))
        .stdout(predicate::str::contains("Day 1: Learn Rust - Phase 1"));
}

#[test]
fn test_cli_create_goal_rejects_bad_input() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tempo_cmd(&db_path)
        .args(["goal", "create", "Learn Rust", "--level", "expert"])
        .assert()
        .failure();

    tempo_cmd(&db_path)
        .args(["goal", "create", "Learn Rust", "--deadline", "31/03/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));

    tempo_cmd(&db_path)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No goals found."));
}

#[test]
fn test_cli_complete_and_reopen_task() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_backdated_goal(&db_path);

    tempo_cmd(&db_path)
        .args(["task", "complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: pending -> completed"))
        .stdout(predicate::str::contains("Goal 1 is now 3.33% complete, streak 0 (longest 1)."));

    tempo_cmd(&db_path)
        .args(["task", "reopen", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: completed -> pending"))
        .stdout(predicate::str::contains("Goal 1 is now 0% complete, streak 0 (longest 1)."));

    tempo_cmd(&db_path)
        .args(["task", "complete", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task with ID 999 not found"));
}

#[test]
fn test_cli_missed_days_with_explicit_today() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_backdated_goal(&db_path);
    complete(&db_path, &[1, 2, 3, 4, 5, 7]);

    tempo_cmd(&db_path)
        .args(["--today", "2024-03-07", "stats", "missed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Day 6: Day 6: Learning Module (due 2024-03-06)",
        ))
        .stdout(predicate::str::contains("Day 8").not());

    tempo_cmd(&db_path)
        .args(["--today", "2024-03-07", "stats", "summary", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Completion: 20% (6/30 tasks, 24 pending)"))
        .stdout(predicate::str::contains("- Current streak: 0"))
        .stdout(predicate::str::contains("- Longest streak: 5"))
        .stdout(predicate::str::contains("- Days remaining: 24"));

    tempo_cmd(&db_path)
        .args(["--today", "2024-03-07", "stats", "catchup", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. **Day 6** (high priority): Complete today: Day 6: Learning Module",
        ));
}

#[test]
fn test_cli_json_output() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_backdated_goal(&db_path);
    complete(&db_path, &[1, 2, 3]);

    let output = tempo_cmd(&db_path)
        .args(["--json", "--today", "2024-03-03", "stats", "summary", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("summary should be valid JSON");
    assert_eq!(json["goal_id"], 1);
    assert_eq!(json["completion_percentage"], 10.0);
    assert_eq!(json["current_streak"], 0);
    assert_eq!(json["longest_streak"], 3);
    assert_eq!(json["current_pace"], "ahead");
}

#[test]
fn test_cli_weekly_and_daily_tables() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_backdated_goal(&db_path);
    complete(&db_path, &[1]);

    tempo_cmd(&db_path)
        .args(["stats", "weekly", "1", "--weeks", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Week | Dates | Completed |"))
        .stdout(predicate::str::contains(" | 1 |"));

    tempo_cmd(&db_path)
        .args(["stats", "daily", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| 1 | Day 1: Learning Module | ✓ Completed |"))
        .stdout(predicate::str::contains("| 2 | Day 2: Learning Module | ○ Pending |  |"));
}

#[test]
fn test_cli_delete_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_backdated_goal(&db_path);

    tempo_cmd(&db_path)
        .args(["goal", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Goal 1 was not deleted"));

    tempo_cmd(&db_path)
        .args(["goal", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted goal 'Learn Rust' (ID: 1) and its 30 tasks",
        ));

    tempo_cmd(&db_path)
        .args(["stats", "summary", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal with ID 1 not found"));
}

#[test]
fn test_cli_dashboard_is_default() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tempo_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No goals yet"));

    create_backdated_goal(&db_path);
    complete(&db_path, &[1, 2]);

    tempo_cmd(&db_path)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Goals: 1"))
        .stdout(predicate::str::contains("- Tasks completed: 2/30"))
        .stdout(predicate::str::contains("## Learn Rust (ID: 1) (2/30)"));
}

#[test]
fn test_cli_compare_single_goal() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_backdated_goal(&db_path);

    tempo_cmd(&db_path)
        .args(["stats", "compare", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Comparison for goal 1"))
        .stdout(predicate::str::contains("- Streak difference: +0"));
}
