//! Task model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::TaskStatus;
use crate::calendar::utc_date;

/// One day's unit of work within a goal.
///
/// Day numbers are 1-based and contiguous within a goal. The ledger that owns
/// a set of tasks guarantees this; calculators assume it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the parent goal
    pub goal_id: u64,

    /// 1-based position of the task in the plan
    pub day_number: u32,

    /// What to study on this day
    pub topic: String,

    /// Optional free-form notes (e.g. estimated time)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Current status of the task
    pub status: TaskStatus,

    /// When the task was completed; only set while status is completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Task {
    /// Whether the task counts as done.
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// UTC date the task was completed on, if it is completed.
    pub fn completed_on(&self) -> Option<Date> {
        if self.is_completed() {
            self.completed_at.map(utc_date)
        } else {
            None
        }
    }
}

/// Outcome of a status change: the updated task and the goal's progress
/// snapshot recomputed in the same transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskStatusChange {
    pub task: Task,
    /// Status before the change
    pub previous_status: TaskStatus,
    pub progress: super::Progress,
}
