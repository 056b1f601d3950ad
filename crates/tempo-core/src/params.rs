//! Parameter structures for tracker operations.
//!
//! These are interface-agnostic: the CLI defines its own clap-derived
//! argument structs and converts them into these with `From`, so the core
//! carries no framework dependencies.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │
//! │  (clap derives) │    │ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! Inputs that arrive as free text (levels, dates) stay as strings here and
//! are checked by [`CreateGoal::validate`], so every interface reports the
//! same validation errors.

use jiff::civil::Date;

use crate::{
    error::{Result, TrackerError},
    models::{GoalLevel, GoalSort, SortOrder, TaskStatus},
};

/// Parameters for operations that take only an ID.
#[derive(Debug, Clone, Copy)]
pub struct Id {
    pub id: u64,
}

/// Parameters for creating a new goal.
#[derive(Debug, Clone)]
pub struct CreateGoal {
    pub title: String,
    pub description: Option<String>,
    /// One of beginner, intermediate, advanced (case-insensitive)
    pub level: String,
    /// Daily time budget in minutes
    pub time_per_day: u32,
    /// Optional deadline as `YYYY-MM-DD`
    pub deadline: Option<String>,
    /// Backdate the plan start to this `YYYY-MM-DD` date
    pub started_on: Option<String>,
    /// Ask the roadmap source for topics instead of the default ledger
    pub generate_roadmap: bool,
}

/// A goal that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub level: GoalLevel,
    pub time_per_day: u32,
    pub deadline: Option<Date>,
    pub started_on: Option<Date>,
}

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<Date>> {
    value
        .map(|raw| {
            raw.trim().parse::<Date>().map_err(|_| {
                TrackerError::invalid_input(field)
                    .with_reason(format!("Invalid date '{raw}'. Use YYYY-MM-DD"))
            })
        })
        .transpose()
}

impl CreateGoal {
    /// Check required fields and parse the free-text ones.
    pub fn validate(&self) -> Result<NewGoal> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TrackerError::invalid_input("title").with_reason("Title cannot be empty"));
        }

        let level = self
            .level
            .parse::<GoalLevel>()
            .map_err(|reason| TrackerError::invalid_input("level").with_reason(reason))?;

        if self.time_per_day == 0 {
            return Err(TrackerError::invalid_input("time_per_day")
                .with_reason("Daily time must be at least one minute"));
        }

        Ok(NewGoal {
            title: title.to_string(),
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(String::from),
            level,
            time_per_day: self.time_per_day,
            deadline: parse_date("deadline", self.deadline.as_deref())?,
            started_on: parse_date("started_on", self.started_on.as_deref())?,
        })
    }
}

/// Parameters for listing goals.
#[derive(Debug, Clone, Default)]
pub struct ListGoals {
    /// 1-based page, defaults to the first
    pub page: Option<u32>,
    /// Page size, defaults to 10 and is capped at 100
    pub per_page: Option<u32>,
    pub sort: GoalSort,
    pub order: SortOrder,
}

/// Parameters for deleting a goal.
#[derive(Debug, Clone, Copy)]
pub struct DeleteGoal {
    pub id: u64,
    /// Deletion is refused unless this is set
    pub confirmed: bool,
}

/// Parameters for changing a task's status.
#[derive(Debug, Clone, Copy)]
pub struct UpdateTaskStatus {
    pub task_id: u64,
    pub status: TaskStatus,
}

/// Parameters for per-goal analytics.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsQuery {
    pub goal_id: u64,
    /// Reference date; the current UTC date when absent
    pub today: Option<Date>,
}

/// Parameters for the weekly chart.
#[derive(Debug, Clone, Copy)]
pub struct WeeklyQuery {
    pub goal_id: u64,
    pub today: Option<Date>,
    /// Number of weeks, current week included
    pub weeks: Option<u32>,
}
