//! High-level tracker API for goals, tasks and progress analytics.
//!
//! [`Tracker`] is the async facade the interfaces talk to. Each call opens a
//! fresh SQLite connection on a blocking worker thread, so the tracker itself
//! is cheap to clone and share.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (display       │───▶│ (goal_ops,      │───▶│   (via db/)     │
//! │   wrappers)     │    │  task_ops, ...) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`builder`]: [`TrackerBuilder`], database path and roadmap source
//! - [`goal_ops`]: create, show, list and delete goals
//! - [`task_ops`]: the task ledger and status changes
//! - [`analytics_ops`]: read models computed for an explicit "today"
//! - [`handlers`]: the same operations returning display wrappers
//!
//! Analytics never sample the clock themselves. Every analytics call takes
//! an optional `today`; when it is absent the tracker reads the current UTC
//! date once, before loading anything, and passes it down.
//!
//! ```rust
//! use tempo_core::{params::CreateGoal, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("tempo.db"))
//!     .build()
//!     .await?;
//!
//! let goal = tracker
//!     .create_goal(&CreateGoal {
//!         title: "Learn Rust".to_string(),
//!         description: None,
//!         level: "beginner".to_string(),
//!         time_per_day: 45,
//!         deadline: Some("2030-01-31".to_string()),
//!         started_on: None,
//!         generate_roadmap: true,
//!     })
//!     .await?;
//! assert_eq!(goal.tasks.len(), 30);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, TrackerError},
    roadmap::RoadmapSource,
};

pub mod analytics_ops;
pub mod builder;
pub mod goal_ops;
pub mod handlers;
pub mod task_ops;


pub use builder::TrackerBuilder;

/// Main tracker interface.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) roadmap: Arc<dyn RoadmapSource>,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf, roadmap: Arc<dyn RoadmapSource>) -> Self {
        Self { db_path, roadmap }
    }

    /// Runs `op` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(TrackerError::join)?
    }
}
