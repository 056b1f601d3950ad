//! Goal model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{GoalLevel, Progress, Task};
use crate::calendar::utc_date;

/// A learning goal: a fixed-length, ordered sequence of daily tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Unique identifier for the goal
    pub id: u64,

    /// Title of the goal
    pub title: String,

    /// Detailed multi-line description of the goal
    pub description: Option<String>,

    /// Declared difficulty level
    pub level: GoalLevel,

    /// Daily time budget in minutes
    pub time_per_day: u32,

    /// Optional date by which the goal should be finished
    pub deadline: Option<Date>,

    /// Whether the tasks came from the roadmap source rather than the
    /// default ledger
    #[serde(default)]
    pub roadmap_generated: bool,

    /// Timestamp when the goal was created (UTC); its date is the plan start
    pub created_at: Timestamp,

    /// Timestamp when the goal was last modified (UTC)
    pub updated_at: Timestamp,

    /// Associated tasks ordered by day number
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Cached progress snapshot, if one has been recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
}

impl Goal {
    /// The plan start date: the UTC date the goal was created on.
    pub fn start_date(&self) -> Date {
        utc_date(self.created_at)
    }
}
