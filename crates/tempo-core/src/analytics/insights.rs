//! Coaching read model: catch-up plan, reminder, velocity and advice.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{
    build_catchup_plan, completion_percentage, compute_streak, detect_missed, round2, CatchupPlan,
    MissedDay, TaskCounts,
};
use crate::{calendar::days_between, models::Goal};

/// Today's task, if the plan is running and it is still open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReminder {
    pub day_number: u32,
    pub should_remind: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The goal's daily time budget in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_required: Option<u32>,
}

/// Reminder for the plan day `today` falls on.
///
/// `None` before the start date and after the last plan day.
pub fn daily_reminder(goal: &Goal, today: Date) -> Option<DailyReminder> {
    let day_number = days_between(goal.start_date(), today) + 1;
    let plan_length = goal.tasks.len() as i64;
    if day_number < 1 || day_number > plan_length {
        return None;
    }
    let day_number = u32::try_from(day_number).ok()?;

    let reminder = match goal.tasks.iter().find(|t| t.day_number == day_number) {
        Some(task) if !task.is_completed() => DailyReminder {
            day_number,
            should_remind: true,
            topic: Some(task.topic.clone()),
            description: task.description.clone(),
            time_required: Some(goal.time_per_day),
        },
        _ => DailyReminder {
            day_number,
            should_remind: false,
            topic: None,
            description: None,
            time_required: None,
        },
    };
    Some(reminder)
}

/// Completion rate since the plan started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub tasks_per_day: f64,
    /// Days since the start date, at least 1
    pub days_elapsed: i64,
    /// Days the whole plan would take at this rate
    pub estimated_completion_days: Option<u64>,
}

pub fn velocity(goal: &Goal, today: Date) -> Velocity {
    let days_elapsed = days_between(goal.start_date(), today).max(1);
    let counts = TaskCounts::from_tasks(&goal.tasks);
    let rate = f64::from(counts.completed) / days_elapsed as f64;

    Velocity {
        tasks_per_day: round2(rate),
        days_elapsed,
        estimated_completion_days: (rate > 0.0)
            .then(|| (f64::from(counts.total) / rate).round() as u64),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Urgency,
    Motivation,
    Celebration,
    DeadlineWarning,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Urgency => "urgency",
            RecommendationKind::Motivation => "motivation",
            RecommendationKind::Celebration => "celebration",
            RecommendationKind::DeadlineWarning => "deadline_warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
    pub action: String,
}

impl Recommendation {
    fn new(kind: RecommendationKind, message: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: action.into(),
        }
    }
}

/// Advice derived from completion, current streak and the deadline.
pub fn recommendations(
    completion: f64,
    current_streak: u32,
    deadline: Option<Date>,
    today: Date,
) -> Vec<Recommendation> {
    let mut advice = Vec::new();

    if completion < 50.0 {
        advice.push(Recommendation::new(
            RecommendationKind::Urgency,
            "You're less than 50% complete. It's time to pick up the pace!",
            "Complete at least 5 tasks today",
        ));
    }

    if current_streak == 0 {
        advice.push(Recommendation::new(
            RecommendationKind::Motivation,
            "Start a streak by completing today's task!",
            "Complete today's task",
        ));
    } else if current_streak > 7 {
        advice.push(Recommendation::new(
            RecommendationKind::Celebration,
            format!("Amazing! You have a {current_streak}-day streak!"),
            "Keep it going!",
        ));
    }

    if let Some(deadline) = deadline {
        let days_left = days_between(today, deadline);
        if (1..7).contains(&days_left) {
            advice.push(Recommendation::new(
                RecommendationKind::DeadlineWarning,
                format!("Only {days_left} days left to finish this goal!"),
                "Accelerate your progress",
            ));
        }
    }

    advice
}

/// Everything the coaching view shows for one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub goal_id: u64,
    pub goal_title: String,
    pub catchup_plan: CatchupPlan,
    pub missed_days: usize,
    pub missed_tasks: Vec<MissedDay>,
    pub daily_reminder: Option<DailyReminder>,
    pub velocity: Velocity,
    pub recommendations: Vec<Recommendation>,
}

pub fn insights(goal: &Goal, today: Date) -> Insights {
    let missed_tasks = detect_missed(&goal.tasks, goal.start_date(), today);
    let streak = compute_streak(&goal.tasks);

    Insights {
        goal_id: goal.id,
        goal_title: goal.title.clone(),
        catchup_plan: build_catchup_plan(&missed_tasks),
        missed_days: missed_tasks.len(),
        daily_reminder: daily_reminder(goal, today),
        velocity: velocity(goal, today),
        recommendations: recommendations(
            completion_percentage(&goal.tasks),
            streak.current,
            goal.deadline,
            today,
        ),
        missed_tasks,
    }
}
