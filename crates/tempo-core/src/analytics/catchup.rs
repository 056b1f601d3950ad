//! Catch-up planning for overdue tasks.

use serde::{Deserialize, Serialize};

use super::MissedDay;

/// Number of overdue tasks turned into detailed suggestions.
pub const CATCHUP_DETAIL_LIMIT: usize = 3;

/// Urgency of a catch-up suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}

/// One prioritized remediation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchupItem {
    pub day: u32,
    pub topic: String,
    pub priority: Priority,
    pub suggestion: String,
}

/// Remediation plan for a goal's overdue tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchupPlan {
    pub needs_catchup: bool,
    pub message: String,
    /// All overdue tasks, including those not detailed in `items`
    pub missed_count: usize,
    pub items: Vec<CatchupItem>,
}

/// Turn detector output into a prioritized plan.
///
/// The first overdue task is due today at high priority; the next two are
/// medium priority, spread over the following days. Anything beyond
/// [`CATCHUP_DETAIL_LIMIT`] only counts toward `missed_count`.
pub fn build_catchup_plan(missed: &[MissedDay]) -> CatchupPlan {
    if missed.is_empty() {
        return CatchupPlan {
            needs_catchup: false,
            message: "Great! You are on track.".to_string(),
            missed_count: 0,
            items: Vec::new(),
        };
    }

    let items = missed
        .iter()
        .take(CATCHUP_DETAIL_LIMIT)
        .enumerate()
        .map(|(position, day)| {
            let (priority, suggestion) = if position == 0 {
                (Priority::High, format!("Complete today: {}", day.topic))
            } else {
                (
                    Priority::Medium,
                    format!("Complete in {position} days: {}", day.topic),
                )
            };
            CatchupItem {
                day: day.day_number,
                topic: day.topic.clone(),
                priority,
                suggestion,
            }
        })
        .collect();

    CatchupPlan {
        needs_catchup: true,
        message: format!("You have {} task(s) to catch up on", missed.len()),
        missed_count: missed.len(),
        items,
    }
}
