//! Analytics read models for the Tracker.
//!
//! Each operation resolves "today" once, loads the goal with its ledger on
//! the blocking pool and hands both to the pure calculators in
//! [`crate::analytics`].

use jiff::civil::Date;
use log::debug;

use super::Tracker;
use crate::{
    analytics::{
        self, AnalyticsSnapshot, CatchupPlan, DailyBreakdown, DashboardOverview, GoalComparison,
        Insights, MissedDay, WeeklyProgress, DEFAULT_WEEKS, MAX_WEEKS,
    },
    calendar,
    error::{Result, TrackerError},
    models::{Goal, Progress},
    params::{AnalyticsQuery, Id, WeeklyQuery},
};

fn resolve_today(today: Option<Date>) -> Date {
    today.unwrap_or_else(calendar::today_utc)
}

impl Tracker {
    async fn load_goal(&self, goal_id: u64) -> Result<Goal> {
        self.with_db(move |db| {
            db.get_goal(goal_id)?
                .ok_or(TrackerError::GoalNotFound { id: goal_id })
        })
        .await
    }

    /// The composed per-goal snapshot: completion, streaks, recent activity,
    /// days remaining and pace.
    pub async fn goal_analytics(&self, params: &AnalyticsQuery) -> Result<AnalyticsSnapshot> {
        let today = resolve_today(params.today);
        let goal = self.load_goal(params.goal_id).await?;
        debug!("analytics for goal {} as of {today}", goal.id);
        Ok(analytics::aggregate(&goal, today))
    }

    /// Pending tasks whose scheduled day is on or before today, in day order.
    pub async fn missed_days(&self, params: &AnalyticsQuery) -> Result<Vec<MissedDay>> {
        let today = resolve_today(params.today);
        let goal = self.load_goal(params.goal_id).await?;
        Ok(analytics::detect_missed(
            &goal.tasks,
            goal.start_date(),
            today,
        ))
    }

    pub async fn catchup_plan(&self, params: &AnalyticsQuery) -> Result<CatchupPlan> {
        let missed = self.missed_days(params).await?;
        Ok(analytics::build_catchup_plan(&missed))
    }

    /// Reminder, catch-up, velocity and recommendations in one read.
    pub async fn goal_insights(&self, params: &AnalyticsQuery) -> Result<Insights> {
        let today = resolve_today(params.today);
        let goal = self.load_goal(params.goal_id).await?;
        Ok(analytics::insights(&goal, today))
    }

    /// Completions per calendar week, ending with the week holding today.
    ///
    /// `weeks` defaults to [`DEFAULT_WEEKS`] and must lie in `1..=MAX_WEEKS`.
    pub async fn weekly_progress(&self, params: &WeeklyQuery) -> Result<WeeklyProgress> {
        let weeks = params.weeks.unwrap_or(DEFAULT_WEEKS);
        if !(1..=MAX_WEEKS).contains(&weeks) {
            return Err(TrackerError::invalid_input("weeks")
                .with_reason(format!("Weeks must be between 1 and {MAX_WEEKS}")));
        }

        let today = resolve_today(params.today);
        let goal = self.load_goal(params.goal_id).await?;
        Ok(WeeklyProgress {
            goal_id: goal.id,
            weeks: analytics::weekly_buckets(&goal.tasks, today, weeks),
        })
    }

    pub async fn daily_breakdown(&self, params: &Id) -> Result<DailyBreakdown> {
        let goal = self.load_goal(params.id).await?;
        Ok(DailyBreakdown {
            goal_id: goal.id,
            days: analytics::daily_breakdown(&goal.tasks),
        })
    }

    /// The stored progress snapshot as last written.
    ///
    /// A goal without a stored snapshot gets one computed and saved.
    pub async fn stored_progress(&self, params: &Id) -> Result<Progress> {
        let goal_id = params.id;
        let stored = self.with_db(move |db| db.get_progress(goal_id)).await?;
        match stored {
            Some(progress) => Ok(progress),
            None => self.refresh_progress(params).await,
        }
    }

    /// Rebuilds and saves the progress snapshot from the ledger.
    pub async fn refresh_progress(&self, params: &Id) -> Result<Progress> {
        let goal_id = params.id;
        self.with_db(move |db| {
            db.recompute_progress(goal_id)?
                .ok_or(TrackerError::GoalNotFound { id: goal_id })
        })
        .await
    }

    /// One goal against the averages over every goal.
    pub async fn compare_goal(&self, params: &Id) -> Result<GoalComparison> {
        let goal_id = params.id;
        let goals = self.all_goals().await?;
        let goal = goals
            .iter()
            .find(|g| g.id == goal_id)
            .ok_or(TrackerError::GoalNotFound { id: goal_id })?;
        Ok(analytics::compare_goal(goal, &goals))
    }

    /// Totals across every goal.
    pub async fn dashboard_overview(&self) -> Result<DashboardOverview> {
        let goals = self.all_goals().await?;
        Ok(analytics::dashboard_overview(&goals))
    }
}
