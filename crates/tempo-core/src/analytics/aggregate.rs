//! Read models composed from the individual calculators.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{classify_pace, completion_percentage, compute_streak, sorted_by_day, Pace, TaskCounts};
use crate::{
    calendar::{add_days, days_between},
    models::{Goal, GoalLevel, Task, TaskStatus},
};

/// Length of the trailing completion window, today included.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Weekly buckets returned when the caller does not ask for a count:
/// the current week plus the eight before it.
pub const DEFAULT_WEEKS: u32 = 9;

/// Longest weekly chart that can be built.
pub const MAX_WEEKS: u32 = 52;

/// Everything a progress dashboard needs for one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub goal_id: u64,
    pub goal_title: String,
    pub goal_level: GoalLevel,
    pub completion_percentage: f64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completed_tasks: u32,
    pub pending_tasks: u32,
    pub total_tasks: u32,
    /// Tasks completed within the last seven calendar days
    pub weekly_completed: u32,
    /// Days until the deadline, floored at 0; `None` without a deadline
    pub days_remaining: Option<i64>,
    pub current_pace: Pace,
}

/// Compose every calculator into a single read model.
///
/// Pure: the same goal and `today` always produce the same snapshot. The
/// stored progress snapshot only contributes its `longest_streak` high-water
/// mark; everything else is recomputed from the ledger.
pub fn aggregate(goal: &Goal, today: Date) -> AnalyticsSnapshot {
    let counts = TaskCounts::from_tasks(&goal.tasks);
    let completion = completion_percentage(&goal.tasks);
    let recorded_longest = goal.progress.as_ref().map_or(0, |p| p.longest_streak);
    let streak = compute_streak(&goal.tasks).with_floor(recorded_longest);

    let current_pace = if goal.tasks.is_empty() {
        Pace::OnTrack
    } else {
        classify_pace(goal.start_date(), goal.deadline, today, completion)
    };

    AnalyticsSnapshot {
        goal_id: goal.id,
        goal_title: goal.title.clone(),
        goal_level: goal.level,
        completion_percentage: completion,
        current_streak: streak.current,
        longest_streak: streak.longest,
        completed_tasks: counts.completed,
        pending_tasks: counts.pending,
        total_tasks: counts.total,
        weekly_completed: completed_in_window(&goal.tasks, today),
        days_remaining: days_remaining(goal.deadline, today),
        current_pace,
    }
}

/// Completed tasks whose completion date falls in `[today - 6, today]`.
pub fn completed_in_window(tasks: &[Task], today: Date) -> u32 {
    let window_start = add_days(today, -(RECENT_WINDOW_DAYS - 1));
    count_completed_between(tasks, window_start, today)
}

/// Whole days until `deadline`, never negative.
pub fn days_remaining(deadline: Option<Date>, today: Date) -> Option<i64> {
    deadline.map(|deadline| days_between(today, deadline).max(0))
}

fn count_completed_between(tasks: &[Task], first: Date, last: Date) -> u32 {
    tasks
        .iter()
        .filter_map(Task::completed_on)
        .filter(|day| first <= *day && *day <= last)
        .count() as u32
}

/// Completions within one Monday-to-Sunday week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    pub week_start: Date,
    pub week_end: Date,
    pub completed: u32,
    /// ISO 8601 week number of `week_start`
    pub week_number: i8,
}

/// Weekly completion counts for charting, oldest week first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyProgress {
    pub goal_id: u64,
    pub weeks: Vec<WeekBucket>,
}

/// Split completions into `weeks` calendar weeks ending with the week that
/// contains `today`.
///
/// `weeks` is capped at [`MAX_WEEKS`].
pub fn weekly_buckets(tasks: &[Task], today: Date, weeks: u32) -> Vec<WeekBucket> {
    let current_week_start = add_days(
        today,
        -i64::from(today.weekday().to_monday_zero_offset()),
    );

    (0..weeks.min(MAX_WEEKS))
        .rev()
        .map(|offset| {
            let week_start = add_days(current_week_start, -7 * i64::from(offset));
            let week_end = add_days(week_start, 6);
            WeekBucket {
                week_start,
                week_end,
                completed: count_completed_between(tasks, week_start, week_end),
                week_number: week_start.iso_week_date().week(),
            }
        })
        .collect()
}

/// One row per plan day, for a flat progress table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRow {
    pub day: u32,
    pub topic: String,
    pub status: TaskStatus,
    pub completed_at: Option<Timestamp>,
}

/// Flat per-day breakdown for a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBreakdown {
    pub goal_id: u64,
    pub days: Vec<DailyRow>,
}

/// Ledger rows in day order.
pub fn daily_breakdown(tasks: &[Task]) -> Vec<DailyRow> {
    sorted_by_day(tasks)
        .into_iter()
        .map(|task| DailyRow {
            day: task.day_number,
            topic: task.topic.clone(),
            status: task.status,
            completed_at: task.completed_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::analytics::test_support::{goal_with, ledger, task_completed_on, START};

    #[test]
    fn test_scenario_gap_on_day_six() {
        let goal = goal_with(ledger("cccccpc"), Some(date(2024, 3, 31)));
        let snapshot = aggregate(&goal, date(2024, 3, 8));

        assert_eq!(snapshot.current_streak, 1);
        assert_eq!(snapshot.longest_streak, 5);
        assert_eq!(snapshot.completion_percentage, 85.71);
        assert_eq!(snapshot.completed_tasks, 6);
        assert_eq!(snapshot.pending_tasks, 1);
        assert_eq!(snapshot.total_tasks, 7);
        assert_eq!(snapshot.days_remaining, Some(23));
        assert_eq!(snapshot.current_pace, Pace::Ahead);
    }

    #[test]
    fn test_scenario_nothing_done() {
        let goal = goal_with(ledger(&"p".repeat(30)), Some(date(2024, 3, 31)));
        let snapshot = aggregate(&goal, date(2024, 3, 11));

        assert_eq!(snapshot.completion_percentage, 0.0);
        assert_eq!(snapshot.current_streak, 0);
        assert_eq!(snapshot.longest_streak, 0);
        assert_eq!(snapshot.weekly_completed, 0);
        assert_eq!(snapshot.current_pace, Pace::Behind);
    }

    #[test]
    fn test_scenario_everything_done() {
        let goal = goal_with(ledger(&"c".repeat(30)), Some(date(2024, 3, 31)));
        for today in [START, date(2024, 3, 15), date(2024, 4, 30)] {
            let snapshot = aggregate(&goal, today);
            assert_eq!(snapshot.completion_percentage, 100.0);
            assert_eq!(snapshot.current_streak, 30);
            assert_eq!(snapshot.longest_streak, 30);
            assert_ne!(snapshot.current_pace, Pace::Behind);
        }
    }

    #[test]
    fn test_empty_goal_is_zero_valued_and_on_track() {
        let goal = goal_with(Vec::new(), Some(date(2024, 3, 31)));
        let snapshot = aggregate(&goal, date(2024, 3, 20));
        assert_eq!(snapshot.total_tasks, 0);
        assert_eq!(snapshot.completion_percentage, 0.0);
        assert_eq!(snapshot.current_pace, Pace::OnTrack);
    }

    #[test]
    fn test_no_deadline_has_no_days_remaining() {
        let goal = goal_with(ledger("cp"), None);
        let snapshot = aggregate(&goal, date(2024, 3, 20));
        assert_eq!(snapshot.days_remaining, None);
        assert_eq!(snapshot.current_pace, Pace::OnTrack);
    }

    #[test]
    fn test_days_remaining_floors_at_zero() {
        assert_eq!(days_remaining(Some(date(2024, 3, 1)), date(2024, 3, 9)), Some(0));
        assert_eq!(days_remaining(Some(date(2024, 3, 9)), date(2024, 3, 9)), Some(0));
        assert_eq!(days_remaining(Some(date(2024, 3, 10)), date(2024, 3, 9)), Some(1));
    }

    #[test]
    fn test_recorded_longest_streak_is_carried() {
        let mut goal = goal_with(ledger("cpc"), None);
        goal.progress = Some(crate::models::Progress {
            goal_id: goal.id,
            completion_percentage: 66.67,
            streak: 1,
            longest_streak: 4,
            last_completion_date: None,
            updated_at: goal.created_at,
        });
        let snapshot = aggregate(&goal, date(2024, 3, 5));
        assert_eq!(snapshot.longest_streak, 4);
        assert_eq!(snapshot.current_streak, 1);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let goal = goal_with(ledger("ccpcp"), Some(date(2024, 3, 31)));
        let today = date(2024, 3, 6);
        assert_eq!(aggregate(&goal, today), aggregate(&goal, today));
    }

    #[test]
    fn test_trailing_window_includes_both_ends() {
        let tasks = vec![
            task_completed_on(1, date(2024, 3, 3)),
            task_completed_on(2, date(2024, 3, 4)),
            task_completed_on(3, date(2024, 3, 10)),
            task_completed_on(4, date(2024, 3, 11)),
        ];
        // Window for 2024-03-10 is 03-04 ..= 03-10.
        assert_eq!(completed_in_window(&tasks, date(2024, 3, 10)), 2);
    }

    #[test]
    fn test_pending_tasks_with_stale_timestamp_are_ignored() {
        let mut task = task_completed_on(1, date(2024, 3, 10));
        task.status = TaskStatus::Pending;
        assert_eq!(completed_in_window(&[task], date(2024, 3, 10)), 0);
    }

    #[test]
    fn test_weekly_buckets_align_to_monday() {
        // 2024-03-13 is a Wednesday.
        let tasks = vec![
            task_completed_on(1, date(2024, 3, 4)),
            task_completed_on(2, date(2024, 3, 10)),
            task_completed_on(3, date(2024, 3, 11)),
            task_completed_on(4, date(2024, 3, 13)),
        ];
        let buckets = weekly_buckets(&tasks, date(2024, 3, 13), 3);

        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].week_start, date(2024, 2, 26));
        assert_eq!(buckets[1].week_start, date(2024, 3, 4));
        assert_eq!(buckets[1].week_end, date(2024, 3, 10));
        assert_eq!(buckets[2].week_start, date(2024, 3, 11));
        assert_eq!(buckets[2].week_end, date(2024, 3, 17));

        let counts: Vec<u32> = buckets.iter().map(|b| b.completed).collect();
        assert_eq!(counts, vec![0, 2, 2]);
        assert_eq!(buckets[2].week_number, 11);
    }

    #[test]
    fn test_weekly_buckets_default_window() {
        let buckets = weekly_buckets(&[], date(2024, 3, 13), DEFAULT_WEEKS);
        assert_eq!(buckets.len(), 9);
        assert!(buckets.windows(2).all(|w| w[0].week_start < w[1].week_start));
        assert_eq!(weekly_buckets(&[], date(2024, 3, 13), 0), Vec::new());
    }

    #[test]
    fn test_weekly_buckets_capped_at_a_year() {
        let today = date(2024, 3, 13);
        let buckets = weekly_buckets(&ledger("cc"), today, u32::MAX);
        assert_eq!(buckets.len(), MAX_WEEKS as usize);
        assert_eq!(buckets.last().map(|b| b.week_start), Some(date(2024, 3, 11)));
        assert_eq!(buckets[0].week_start, date(2023, 3, 20));
    }

    #[test]
    fn test_daily_breakdown_in_day_order() {
        let mut tasks = ledger("cpc");
        tasks.swap(0, 2);
        let rows = daily_breakdown(&tasks);
        let days: Vec<u32> = rows.iter().map(|r| r.day).collect();
        assert_eq!(days, vec![1, 2, 3]);
        assert_eq!(rows[1].status, TaskStatus::Pending);
        assert!(rows[1].completed_at.is_none());
        assert!(rows[2].completed_at.is_some());
    }
}
