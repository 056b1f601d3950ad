//! Completion percentage and task counts.

use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Completed share of the ledger as a percentage in [0, 100].
///
/// An empty ledger is 0.0, never NaN.
///
/// ```rust
/// use tempo_core::analytics::completion_percentage;
///
/// assert_eq!(completion_percentage(&[]), 0.0);
/// ```
pub fn completion_percentage(tasks: &[Task]) -> f64 {
    let counts = TaskCounts::from_tasks(tasks);
    percentage_of(counts.completed, counts.total)
}

/// `completed` as a rounded share of `total`; 0.0 when `total` is 0.
pub fn percentage_of(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(f64::from(completed) / f64::from(total) * 100.0)
}

/// Completed, pending and total task counts for a ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub completed: u32,
    pub pending: u32,
    pub total: u32,
}

impl TaskCounts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len() as u32;
        let completed = tasks.iter().filter(|t| t.is_completed()).count() as u32;
        Self {
            completed,
            pending: total - completed,
            total,
        }
    }
}
