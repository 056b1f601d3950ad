//! Progress snapshot: a cached, re-derivable view of a goal's ledger.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::Task;
use crate::analytics::{completion_percentage, compute_streak, sorted_by_day};

/// Materialized calculator outputs for one goal.
///
/// The snapshot is never authoritative. [`Progress::derive`] reproduces every
/// field except `longest_streak` from the task ledger alone; `longest_streak`
/// is a high-water mark merged in by [`Progress::carry_forward`] whenever a
/// new snapshot replaces a stored one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Progress {
    /// ID of the goal this snapshot belongs to
    pub goal_id: u64,

    /// Completed share of tasks in [0, 100], rounded to 2 decimals
    pub completion_percentage: f64,

    /// Trailing run of completed tasks in day order
    pub streak: u32,

    /// Highest run ever recorded for this goal
    pub longest_streak: u32,

    /// Completion date of the last completed task in day order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_completion_date: Option<Date>,

    /// When the snapshot was computed
    pub updated_at: Timestamp,
}

impl Progress {
    /// Recompute a snapshot from the ledger, ignoring any stored state.
    pub fn derive(goal_id: u64, tasks: &[Task], now: Timestamp) -> Self {
        let streak = compute_streak(tasks);

        let mut last_completion_date = None;
        for task in sorted_by_day(tasks) {
            if task.is_completed() {
                last_completion_date = task.completed_on();
            }
        }

        Self {
            goal_id,
            completion_percentage: completion_percentage(tasks),
            streak: streak.current,
            longest_streak: streak.longest,
            last_completion_date,
            updated_at: now,
        }
    }

    /// Merge the stored snapshot's high-water mark into a freshly derived one.
    ///
    /// `longest_streak` never drops below a previously recorded value, even
    /// when tasks were reverted to pending since.
    #[must_use]
    pub fn carry_forward(mut self, previous: Option<&Progress>) -> Self {
        if let Some(previous) = previous {
            self.longest_streak = self.longest_streak.max(previous.longest_streak);
        }
        self
    }
}
