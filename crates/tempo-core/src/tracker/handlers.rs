//! Operations that return display wrappers.
//!
//! Same semantics as the plain operations; the results carry the context an
//! interface needs to print them.

use super::Tracker;
use crate::{
    display::{CreateResult, Dashboard, DeleteResult, GoalPage, MissedDays, Tasks, UpdateResult},
    error::{Result, TrackerError},
    models::{Goal, GoalFilter, GoalSort, SortOrder, TaskStatusChange},
    params::{AnalyticsQuery, CreateGoal, DeleteGoal, Id, ListGoals, UpdateTaskStatus},
};

/// Goals shown on the dashboard below the totals.
pub const DASHBOARD_RECENT_GOALS: u32 = 5;

impl Tracker {
    pub async fn create_goal_with_result(&self, params: &CreateGoal) -> Result<CreateResult<Goal>> {
        let goal = self.create_goal(params).await?;
        Ok(CreateResult::new(goal))
    }

    /// Like [`Tracker::get_goal`] but a missing goal is an error.
    pub async fn show_goal(&self, params: &Id) -> Result<Goal> {
        self.get_goal(params)
            .await?
            .ok_or(TrackerError::GoalNotFound { id: params.id })
    }

    /// One page of goals together with the total count.
    pub async fn list_goals_page(&self, params: &ListGoals) -> Result<GoalPage> {
        let filter = GoalFilter::from(params);
        self.with_db(move |db| {
            let goals = db.list_goals(&filter)?;
            let total = db.count_goals()?;
            Ok(GoalPage {
                goals,
                page: filter.page,
                per_page: filter.per_page,
                total,
            })
        })
        .await
    }

    pub async fn delete_goal_with_result(&self, params: &DeleteGoal) -> Result<DeleteResult<Goal>> {
        self.delete_goal(params)
            .await?
            .map(DeleteResult::new)
            .ok_or(TrackerError::GoalNotFound { id: params.id })
    }

    pub async fn list_tasks_with_result(&self, params: &Id) -> Result<Tasks> {
        Ok(Tasks(self.list_tasks(params).await?))
    }

    /// Changes a task's status and describes what changed.
    pub async fn update_task_status_with_result(
        &self,
        params: &UpdateTaskStatus,
    ) -> Result<UpdateResult<TaskStatusChange>> {
        let change = self.update_task_status(params).await?;

        let line = if change.previous_status == change.task.status {
            format!("Status unchanged ({})", change.task.status)
        } else {
            format!("Status: {} -> {}", change.previous_status, change.task.status)
        };

        Ok(UpdateResult::with_changes(change, vec![line]))
    }

    pub async fn missed_days_with_result(&self, params: &AnalyticsQuery) -> Result<MissedDays> {
        let days = self.missed_days(params).await?;
        Ok(MissedDays {
            goal_id: params.goal_id,
            days,
        })
    }

    /// Cross-goal totals plus the most recently created goals.
    pub async fn dashboard(&self) -> Result<Dashboard> {
        let overview = self.dashboard_overview().await?;
        let recent = ListGoals {
            page: Some(1),
            per_page: Some(DASHBOARD_RECENT_GOALS),
            sort: GoalSort::CreatedAt,
            order: SortOrder::Desc,
        };
        let recent_goals = self.list_goals(&recent).await?;

        Ok(Dashboard {
            overview,
            recent_goals,
        })
    }
}
