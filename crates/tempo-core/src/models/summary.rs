//! Goal summary types and functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Goal, GoalLevel};
use crate::analytics::{completion_percentage, TaskCounts};

/// Summary information about a goal with task statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSummary {
    /// Goal ID
    pub id: u64,
    /// Title of the goal
    pub title: String,
    /// Declared level
    pub level: GoalLevel,
    /// Daily time budget in minutes
    pub time_per_day: u32,
    /// Optional deadline
    pub deadline: Option<Date>,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Total number of tasks
    pub total_tasks: u32,
    /// Number of completed tasks
    pub completed_tasks: u32,
    /// Number of pending tasks
    pub pending_tasks: u32,
    /// Completion percentage derived from the tasks
    pub completion_percentage: f64,
}

impl From<&Goal> for GoalSummary {
    fn from(goal: &Goal) -> Self {
        let counts = TaskCounts::from_tasks(&goal.tasks);

        Self {
            id: goal.id,
            title: goal.title.clone(),
            level: goal.level,
            time_per_day: goal.time_per_day,
            deadline: goal.deadline,
            created_at: goal.created_at,
            total_tasks: counts.total,
            completed_tasks: counts.completed,
            pending_tasks: counts.pending,
            completion_percentage: completion_percentage(&goal.tasks),
        }
    }
}
