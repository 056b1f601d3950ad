//! Task ledger operations for the Tracker.

use log::debug;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{Task, TaskStatusChange},
    params::{Id, UpdateTaskStatus},
};

impl Tracker {
    /// Retrieves a goal's tasks in day order.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::GoalNotFound` if the goal doesn't exist.
    pub async fn list_tasks(&self, params: &Id) -> Result<Vec<Task>> {
        let goal_id = params.id;
        self.with_db(move |db| {
            db.get_goal(goal_id)?
                .map(|goal| goal.tasks)
                .ok_or(TrackerError::GoalNotFound { id: goal_id })
        })
        .await
    }

    /// Retrieves a single task by its ID.
    pub async fn get_task(&self, params: &Id) -> Result<Option<Task>> {
        let task_id = params.id;
        self.with_db(move |db| db.get_task(task_id)).await
    }

    /// Marks a task completed or pending and recomputes the goal's progress
    /// snapshot in the same transaction.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::TaskNotFound` if the task doesn't exist.
    pub async fn update_task_status(&self, params: &UpdateTaskStatus) -> Result<TaskStatusChange> {
        let UpdateTaskStatus { task_id, status } = *params;
        debug!("update_task_status: {params:?}");

        self.with_db(move |db| {
            db.set_task_status(task_id, status)?
                .ok_or(TrackerError::TaskNotFound { id: task_id })
        })
        .await
    }
}
