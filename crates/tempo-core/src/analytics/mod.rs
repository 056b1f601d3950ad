//! Pure progress calculators over a goal's task ledger.
//!
//! Nothing in this module touches storage or the clock. Every function takes
//! the ledger (or a goal carrying it) plus an explicit `today`, so the same
//! inputs always give the same answer. Dates are UTC calendar dates.
//!
//! - [`completion`]: completion percentage and task counts
//! - [`streak`]: current and longest streaks in day order
//! - [`missed`]: pending tasks whose scheduled day has arrived
//! - [`catchup`]: a prioritized plan for the overdue tasks
//! - [`pace`]: ahead / on-track / behind against the deadline
//! - [`aggregate`]: the composed per-goal snapshot, weekly and daily views
//! - [`insights`]: reminder, velocity and recommendations
//! - [`overview`]: totals and comparisons across goals

pub mod aggregate;
pub mod catchup;
pub mod completion;
pub mod insights;
pub mod missed;
pub mod overview;
pub mod pace;
pub mod streak;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::{
    aggregate, completed_in_window, daily_breakdown, days_remaining, weekly_buckets,
    AnalyticsSnapshot, DailyBreakdown, DailyRow, WeekBucket, WeeklyProgress, DEFAULT_WEEKS,
    MAX_WEEKS, RECENT_WINDOW_DAYS,
};
pub use catchup::{build_catchup_plan, CatchupItem, CatchupPlan, Priority, CATCHUP_DETAIL_LIMIT};
pub use completion::{completion_percentage, percentage_of, round2, TaskCounts};
pub use insights::{
    daily_reminder, insights, recommendations, velocity, DailyReminder, Insights, Recommendation,
    RecommendationKind, Velocity,
};
pub use missed::{detect_missed, expected_date, MissedDay};
pub use overview::{compare_goal, dashboard_overview, DashboardOverview, GoalComparison};
pub use pace::{classify_pace, Pace, ON_TRACK_RATIO};
pub use streak::{compute_streak, sorted_by_day, Streak};
