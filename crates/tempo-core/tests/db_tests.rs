use jiff::civil::date;
use tempfile::NamedTempFile;
use tempo_core::{
    models::{GoalFilter, GoalLevel, GoalSort, SortOrder},
    params::NewGoal,
    roadmap::{default_ledger, TaskSeed},
    Database, TaskStatus,
};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn new_goal(title: &str) -> NewGoal {
    NewGoal {
        title: title.to_string(),
        description: Some("Thirty days".to_string()),
        level: GoalLevel::Intermediate,
        time_per_day: 60,
        deadline: Some(date(2030, 1, 31)),
        started_on: None,
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert_eq!(db.count_goals().unwrap(), 0);
}

#[test]
fn test_create_goal_persists_ledger() {
    let (_temp_file, mut db) = create_test_db();

    let goal = db
        .create_goal(&new_goal("Learn Rust"), &default_ledger(30), false)
        .expect("Failed to create goal");

    assert!(goal.id > 0);
    assert_eq!(goal.level, GoalLevel::Intermediate);
    assert_eq!(goal.deadline, Some(date(2030, 1, 31)));
    assert_eq!(goal.tasks.len(), 30);
    let days: Vec<u32> = goal.tasks.iter().map(|t| t.day_number).collect();
    assert_eq!(days, (1..=30).collect::<Vec<_>>());

    let reloaded = db
        .get_goal(goal.id)
        .expect("Failed to get goal")
        .expect("Goal should exist");
    assert_eq!(reloaded.title, "Learn Rust");
    assert_eq!(reloaded.description.as_deref(), Some("Thirty days"));
    assert!(reloaded.progress.is_some());
}

#[test]
fn test_backdated_goal_starts_at_midnight_utc() {
    let (_temp_file, mut db) = create_test_db();
    let mut params = new_goal("Backdated");
    params.started_on = Some(date(2024, 3, 1));

    let goal = db
        .create_goal(&params, &default_ledger(30), false)
        .expect("Failed to create goal");
    assert_eq!(goal.created_at.to_string(), "2024-03-01T00:00:00Z");
    assert_eq!(goal.start_date(), date(2024, 3, 1));
}

#[test]
fn test_task_status_round_trip_keeps_progress_in_step() {
    let (_temp_file, mut db) = create_test_db();
    let goal = db
        .create_goal(&new_goal("Learn Rust"), &default_ledger(30), false)
        .unwrap();
    let first = goal.tasks[0].id;

    let change = db
        .set_task_status(first, TaskStatus::Completed)
        .unwrap()
        .expect("Task should exist");
    assert_eq!(change.previous_status, TaskStatus::Pending);
    assert!(change.task.completed_at.is_some());
    assert_eq!(change.progress.streak, 0);
    assert_eq!(change.progress.longest_streak, 1);

    let stored = db.get_progress(goal.id).unwrap().expect("progress row");
    assert_eq!(stored.completion_percentage, 3.33);
    assert_eq!(stored.last_completion_date, change.task.completed_on());

    let reverted = db
        .set_task_status(first, TaskStatus::Pending)
        .unwrap()
        .expect("Task should exist");
    assert!(reverted.task.completed_at.is_none());
    assert_eq!(reverted.progress.streak, 0);
    assert_eq!(reverted.progress.longest_streak, 1);
    assert_eq!(reverted.progress.completion_percentage, 0.0);
}

#[test]
fn test_missing_rows_return_none() {
    let (_temp_file, mut db) = create_test_db();
    assert!(db.get_goal(1).unwrap().is_none());
    assert!(db.get_task(1).unwrap().is_none());
    assert!(db.set_task_status(1, TaskStatus::Completed).unwrap().is_none());
    assert!(db.recompute_progress(1).unwrap().is_none());
    assert!(db.delete_goal(1).unwrap().is_none());
}

#[test]
fn test_delete_cascades_to_tasks_and_progress() {
    let (_temp_file, mut db) = create_test_db();
    let goal = db
        .create_goal(&new_goal("Learn Rust"), &default_ledger(30), false)
        .unwrap();

    let deleted = db.delete_goal(goal.id).unwrap().expect("Goal should exist");
    assert_eq!(deleted.tasks.len(), 30);

    assert!(db.get_tasks(goal.id).unwrap().is_empty());
    assert!(db.get_progress(goal.id).unwrap().is_none());
    assert_eq!(db.count_goals().unwrap(), 0);
}

#[test]
fn test_list_goals_sorts_and_pages() {
    let (_temp_file, mut db) = create_test_db();
    for title in ["Gamma", "Alpha", "Beta"] {
        db.create_goal(&new_goal(title), &default_ledger(30), false)
            .unwrap();
    }

    let filter = GoalFilter {
        page: 1,
        per_page: 2,
        sort: GoalSort::Title,
        order: SortOrder::Asc,
    };
    let titles: Vec<String> = db
        .list_goals(&filter)
        .unwrap()
        .into_iter()
        .map(|g| g.title)
        .collect();
    assert_eq!(titles, vec!["Alpha", "Beta"]);

    let second = GoalFilter { page: 2, ..filter };
    let rest = db.list_goals(&second).unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].title, "Gamma");
    assert_eq!(rest[0].total_tasks, 30);
    assert_eq!(rest[0].completion_percentage, 0.0);
}

#[test]
fn test_roadmap_descriptions_are_stored() {
    let (_temp_file, mut db) = create_test_db();
    let seeds = vec![
        TaskSeed {
            topic: "Ownership".to_string(),
            description: Some("Estimated time: 30 minutes".to_string()),
        },
        TaskSeed {
            topic: "Borrowing".to_string(),
            description: None,
        },
    ];

    let goal = db.create_goal(&new_goal("Short"), &seeds, true).unwrap();
    assert!(goal.roadmap_generated);
    assert_eq!(goal.tasks[0].topic, "Ownership");
    assert_eq!(
        goal.tasks[0].description.as_deref(),
        Some("Estimated time: 30 minutes")
    );
    assert_eq!(goal.tasks[1].day_number, 2);
    assert_eq!(goal.tasks[1].description, None);
}
