//! Status and level enumerations for goals and tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task statuses.
///
/// A task is binary: either still pending or completed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task has not been completed yet
    #[default]
    Pending,

    /// Task has been completed
    Completed,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl TaskStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use tempo_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(TaskStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "✓ Completed",
            TaskStatus::Pending => "○ Pending",
        }
    }
}

/// Declared difficulty level of a goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum GoalLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FromStr for GoalLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(GoalLevel::Beginner),
            "intermediate" => Ok(GoalLevel::Intermediate),
            "advanced" => Ok(GoalLevel::Advanced),
            _ => Err(format!(
                "Level must be beginner, intermediate, or advanced (got '{s}')"
            )),
        }
    }
}

impl GoalLevel {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalLevel::Beginner => "beginner",
            GoalLevel::Intermediate => "intermediate",
            GoalLevel::Advanced => "advanced",
        }
    }
}
