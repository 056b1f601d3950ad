//! Data models for goals, tasks and progress snapshots.
//!
//! A [`Goal`] owns an ordered ledger of [`Task`]s, one per plan day, and at
//! most one cached [`Progress`] snapshot. The models carry data only; every
//! derived value (percentages, streaks, pacing) is computed by
//! [`crate::analytics`], and markdown formatting lives in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use tempo_core::models::{Goal, GoalLevel};
//! use jiff::Timestamp;
//!
//! let goal = Goal {
//!     id: 1,
//!     title: "Learn Rust".to_string(),
//!     description: None,
//!     level: GoalLevel::Beginner,
//!     time_per_day: 45,
//!     deadline: None,
//!     roadmap_generated: false,
//!     created_at: "2024-03-01T09:00:00Z".parse::<Timestamp>().unwrap(),
//!     updated_at: "2024-03-01T09:00:00Z".parse::<Timestamp>().unwrap(),
//!     tasks: vec![],
//!     progress: None,
//! };
//! assert_eq!(goal.start_date().to_string(), "2024-03-01");
//! ```

pub mod filters;
pub mod goal;
pub mod progress;
pub mod status;
pub mod summary;
pub mod task;


pub use filters::{GoalFilter, GoalSort, SortOrder};
pub use goal::Goal;
pub use progress::Progress;
pub use status::{GoalLevel, TaskStatus};
pub use summary::GoalSummary;
pub use task::{Task, TaskStatusChange};
