//! Cross-goal views: the dashboard totals and per-goal comparison.

use serde::{Deserialize, Serialize};

use super::{completion_percentage, compute_streak, round2, TaskCounts};
use crate::models::Goal;

/// Totals across every goal in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub total_goals: usize,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    /// Mean completion percentage over all goals
    pub average_completion: f64,
    /// Highest current streak held by any goal
    pub best_streak: u32,
}

pub fn dashboard_overview(goals: &[Goal]) -> DashboardOverview {
    if goals.is_empty() {
        return DashboardOverview::default();
    }

    let mut overview = DashboardOverview {
        total_goals: goals.len(),
        ..DashboardOverview::default()
    };
    let mut completion_sum = 0.0;

    for goal in goals {
        let counts = TaskCounts::from_tasks(&goal.tasks);
        overview.total_tasks += counts.total;
        overview.completed_tasks += counts.completed;
        completion_sum += completion_percentage(&goal.tasks);
        overview.best_streak = overview.best_streak.max(compute_streak(&goal.tasks).current);
    }

    overview.average_completion = round2(completion_sum / goals.len() as f64);
    overview
}

/// One goal measured against the mean of all goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalComparison {
    pub goal_id: u64,
    pub completion_percentage: f64,
    pub current_streak: u32,
    /// Zero unless there is more than one goal
    pub average_completion: f64,
    /// Zero unless there is more than one goal
    pub average_streak: f64,
    pub completion_difference: f64,
    /// Current streak minus the average streak rounded to a whole day
    pub streak_difference: i64,
}

/// Compare `goal` with the averages over `all_goals`.
///
/// `all_goals` is expected to include `goal` itself.
pub fn compare_goal(goal: &Goal, all_goals: &[Goal]) -> GoalComparison {
    let completion = completion_percentage(&goal.tasks);
    let streak = compute_streak(&goal.tasks).current;

    let (average_completion, average_streak) = if all_goals.len() > 1 {
        let n = all_goals.len() as f64;
        let completion_sum: f64 = all_goals
            .iter()
            .map(|g| completion_percentage(&g.tasks))
            .sum();
        let streak_sum: f64 = all_goals
            .iter()
            .map(|g| f64::from(compute_streak(&g.tasks).current))
            .sum();
        (completion_sum / n, streak_sum / n)
    } else {
        (0.0, 0.0)
    };

    GoalComparison {
        goal_id: goal.id,
        completion_percentage: completion,
        current_streak: streak,
        average_completion: round2(average_completion),
        average_streak: round2(average_streak),
        completion_difference: round2(completion - average_completion),
        streak_difference: i64::from(streak) - average_streak.round() as i64,
    }
}
