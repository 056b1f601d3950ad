//! Markdown rendering of the analytics read models.

use std::fmt;

use serde::Serialize;

use crate::{
    analytics::{
        AnalyticsSnapshot, CatchupPlan, DailyBreakdown, DailyReminder, DashboardOverview,
        GoalComparison, Insights, MissedDay, Velocity, WeeklyProgress, RECENT_WINDOW_DAYS,
    },
    models::GoalSummary,
};

impl fmt::Display for AnalyticsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Progress: {} (ID: {})", self.goal_title, self.goal_id)?;
        writeln!(f)?;
        writeln!(f, "- Level: {}", self.goal_level)?;
        writeln!(
            f,
            "- Completion: {}% ({}/{} tasks, {} pending)",
            self.completion_percentage, self.completed_tasks, self.total_tasks, self.pending_tasks
        )?;
        writeln!(f, "- Current streak: {}", self.current_streak)?;
        writeln!(f, "- Longest streak: {}", self.longest_streak)?;
        writeln!(
            f,
            "- Completed in the last {RECENT_WINDOW_DAYS} days: {}",
            self.weekly_completed
        )?;
        match self.days_remaining {
            Some(days) => writeln!(f, "- Days remaining: {days}")?,
            None => writeln!(f, "- Days remaining: no deadline")?,
        }
        writeln!(f, "- Pace: {}", self.current_pace)
    }
}

/// Overdue tasks for one goal.
#[derive(Debug, Clone, Serialize)]
pub struct MissedDays {
    pub goal_id: u64,
    pub days: Vec<MissedDay>,
}

impl fmt::Display for MissedDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Missed tasks for goal {}", self.goal_id)?;
        writeln!(f)?;
        if self.days.is_empty() {
            return writeln!(f, "No missed tasks.");
        }
        for day in &self.days {
            writeln!(
                f,
                "- Day {}: {} (due {})",
                day.day_number, day.topic, day.expected_date
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for CatchupPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Catch-up plan")?;
        writeln!(f)?;
        writeln!(f, "{}", self.message)?;

        if !self.items.is_empty() {
            writeln!(f)?;
            for (n, item) in self.items.iter().enumerate() {
                writeln!(
                    f,
                    "{}. **Day {}** ({} priority): {}",
                    n + 1,
                    item.day,
                    item.priority.as_str(),
                    item.suggestion
                )?;
            }
        }

        let unlisted = self.missed_count.saturating_sub(self.items.len());
        if unlisted > 0 {
            writeln!(f)?;
            writeln!(f, "_{unlisted} more missed task(s) not listed._")?;
        }
        Ok(())
    }
}

impl fmt::Display for DailyReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.topic, self.should_remind) {
            (Some(topic), true) => {
                write!(f, "Day {}: {topic}", self.day_number)?;
                if let Some(minutes) = self.time_required {
                    write!(f, " ({minutes} minutes)")?;
                }
                writeln!(f)?;
                if let Some(desc) = &self.description {
                    writeln!(f)?;
                    writeln!(f, "{desc}")?;
                }
                Ok(())
            }
            _ => writeln!(f, "Day {}: today's task is done.", self.day_number),
        }
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} tasks per day over {} day(s)",
            self.tasks_per_day, self.days_elapsed
        )?;
        match self.estimated_completion_days {
            Some(days) => writeln!(f, "- At this rate the plan takes {days} days"),
            None => writeln!(f, "- No completions yet to estimate from"),
        }
    }
}

impl fmt::Display for Insights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Insights: {} (ID: {})", self.goal_title, self.goal_id)?;

        writeln!(f, "\n## Today")?;
        writeln!(f)?;
        match &self.daily_reminder {
            Some(reminder) => write!(f, "{reminder}")?,
            None => writeln!(f, "Today is outside the plan.")?,
        }

        writeln!(f, "\n## Catch-up")?;
        writeln!(f)?;
        writeln!(f, "{}", self.catchup_plan.message)?;
        for item in &self.catchup_plan.items {
            writeln!(f, "- {} ({})", item.suggestion, item.priority.as_str())?;
        }

        writeln!(f, "\n## Velocity")?;
        writeln!(f)?;
        write!(f, "{}", self.velocity)?;

        writeln!(f, "\n## Recommendations")?;
        writeln!(f)?;
        if self.recommendations.is_empty() {
            writeln!(f, "Nothing to add. Keep going.")?;
        }
        for rec in &self.recommendations {
            writeln!(f, "- **{}**: {} {}", rec.kind.as_str(), rec.message, rec.action)?;
        }
        Ok(())
    }
}

impl fmt::Display for WeeklyProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Weekly progress for goal {}", self.goal_id)?;
        writeln!(f)?;
        writeln!(f, "| Week | Dates | Completed |")?;
        writeln!(f, "|---|---|---|")?;
        for week in &self.weeks {
            writeln!(
                f,
                "| W{} | {} to {} | {} |",
                week.week_number, week.week_start, week.week_end, week.completed
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for DailyBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Daily breakdown for goal {}", self.goal_id)?;
        writeln!(f)?;
        if self.days.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        writeln!(f, "| Day | Topic | Status | Completed on |")?;
        writeln!(f, "|---|---|---|---|")?;
        for row in &self.days {
            let completed = row
                .completed_at
                .map(|ts| crate::calendar::utc_date(ts).to_string())
                .unwrap_or_default();
            writeln!(
                f,
                "| {} | {} | {} | {completed} |",
                row.day,
                row.topic,
                row.status.with_icon()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for DashboardOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Goals: {}", self.total_goals)?;
        writeln!(
            f,
            "- Tasks completed: {}/{}",
            self.completed_tasks, self.total_tasks
        )?;
        writeln!(f, "- Average completion: {}%", self.average_completion)?;
        writeln!(f, "- Best current streak: {}", self.best_streak)
    }
}

/// The landing view: cross-goal totals followed by recent goals.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub overview: DashboardOverview,
    pub recent_goals: Vec<GoalSummary>,
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Dashboard")?;
        writeln!(f)?;
        if self.overview.total_goals == 0 {
            return writeln!(f, "No goals yet. Create one with `tempo goal create`.");
        }
        write!(f, "{}", self.overview)?;
        writeln!(f)?;
        for goal in &self.recent_goals {
            write!(f, "{goal}")?;
        }
        Ok(())
    }
}

impl fmt::Display for GoalComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Comparison for goal {}", self.goal_id)?;
        writeln!(f)?;
        writeln!(f, "| | This goal | Average |")?;
        writeln!(f, "|---|---|---|")?;
        writeln!(
            f,
            "| Completion | {}% | {}% |",
            self.completion_percentage, self.average_completion
        )?;
        writeln!(
            f,
            "| Current streak | {} | {} |",
            self.current_streak, self.average_streak
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- Completion difference: {:+}%",
            self.completion_difference
        )?;
        writeln!(f, "- Streak difference: {:+}", self.streak_difference)
    }
}
