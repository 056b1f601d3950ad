use jiff::civil::Date;
use tempfile::TempDir;
use tempo_core::{params::CreateGoal, TrackerBuilder};

/// Helper function to create a test tracker
pub async fn create_test_tracker() -> (TempDir, tempo_core::Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Parameters for a default-ledger goal, optionally backdated.
#[allow(dead_code)]
pub fn goal_params(title: &str, started_on: Option<Date>) -> CreateGoal {
    CreateGoal {
        title: title.to_string(),
        description: None,
        level: "beginner".to_string(),
        time_per_day: 45,
        deadline: None,
        started_on: started_on.map(|d| d.to_string()),
        generate_roadmap: false,
    }
}
