//! Core library for the Tempo learning-plan tracker.
//!
//! A goal is a 30-day plan: one task per day, each either pending or
//! completed. This crate stores goals and their task ledgers in SQLite and
//! derives progress analytics from them: completion percentage, current and
//! longest streaks, missed days, a catch-up plan and pacing against a
//! deadline.
//!
//! # Layout
//!
//! - **Analytics** ([`analytics`]): pure calculators over a ledger and an
//!   explicit "today"
//! - **Storage** ([`db`]): SQLite schema, queries and the cached progress
//!   snapshot, kept in step with the ledger inside one transaction
//! - **Tracker** ([`tracker`]): the async facade interfaces talk to
//! - **Display** ([`display`]): markdown rendering of models and results
//!
//! # Quick Start
//!
//! ```rust
//! use tempo_core::{
//!     params::{AnalyticsQuery, CreateGoal, UpdateTaskStatus},
//!     TaskStatus, TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let goal = tracker
//!     .create_goal(&CreateGoal {
//!         title: "Learn Rust".to_string(),
//!         description: None,
//!         level: "beginner".to_string(),
//!         time_per_day: 45,
//!         deadline: None,
//!         started_on: None,
//!         generate_roadmap: false,
//!     })
//!     .await?;
//!
//! tracker
//!     .update_task_status(&UpdateTaskStatus {
//!         task_id: goal.tasks[0].id,
//!         status: TaskStatus::Completed,
//!     })
//!     .await?;
//!
//! let snapshot = tracker
//!     .goal_analytics(&AnalyticsQuery { goal_id: goal.id, today: None })
//!     .await?;
//! println!("{snapshot}");
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod calendar;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod roadmap;
pub mod tracker;

// Re-export commonly used types
pub use analytics::{AnalyticsSnapshot, CatchupPlan, Insights, MissedDay, Pace};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, UpdateResult};
pub use error::{Result, TrackerError};
pub use models::{Goal, GoalLevel, GoalSummary, Progress, Task, TaskStatus};
pub use roadmap::{PlaceholderRoadmap, RoadmapItem, RoadmapSource};
pub use tracker::{Tracker, TrackerBuilder};
