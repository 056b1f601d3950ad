//! Task ledger queries and status changes.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use super::rows::{get_id, get_u32, parse_optional_text, parse_text};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Task, TaskStatus, TaskStatusChange},
};

const TASK_COLUMNS: &str =
    "id, goal_id, day_number, topic, description, status, completed_at, created_at, updated_at";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (goal_id, day_number, topic, description, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)";
const UPDATE_TASK_STATUS_SQL: &str = "UPDATE tasks SET status = ?1, completed_at = CASE WHEN ?1 = 'completed' THEN COALESCE(completed_at, ?2) ELSE NULL END, updated_at = ?2 WHERE id = ?3";
const UPDATE_GOAL_TIMESTAMP_SQL: &str = "UPDATE goals SET updated_at = ?1 WHERE id = ?2";

impl super::Database {
    /// Helper function to construct a Task from a database row
    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: get_id(row, 0)?,
            goal_id: get_id(row, 1)?,
            day_number: get_u32(row, 2)?,
            topic: row.get(3)?,
            description: row.get(4)?,
            status: parse_text::<TaskStatus>(row, 5)?,
            completed_at: parse_optional_text::<Timestamp>(row, 6)?,
            created_at: parse_text::<Timestamp>(row, 7)?,
            updated_at: parse_text::<Timestamp>(row, 8)?,
        })
    }

    /// Loads a goal's ledger in day order on any connection or transaction.
    pub(super) fn load_tasks(conn: &Connection, goal_id: u64) -> Result<Vec<Task>> {
        let mut stmt = conn
            .prepare_cached(&format!(
                "SELECT {TASK_COLUMNS} FROM tasks WHERE goal_id = ?1 ORDER BY day_number"
            ))
            .db_context("Failed to prepare query")?;

        let tasks = stmt
            .query_map(params![goal_id as i64], Self::build_task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tasks")?;

        Ok(tasks)
    }

    fn load_task(conn: &Connection, task_id: u64) -> Result<Option<Task>> {
        conn.query_row(
            &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
            params![task_id as i64],
            Self::build_task_from_row,
        )
        .optional()
        .db_context("Failed to get task")
    }

    /// Inserts tasks numbered 1..=N in the given order.
    pub(super) fn insert_tasks<'a, I>(
        conn: &Connection,
        goal_id: u64,
        topics: I,
        now: Timestamp,
    ) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let now_str = now.to_string();
        let mut stmt = conn
            .prepare_cached(INSERT_TASK_SQL)
            .db_context("Failed to prepare task insert")?;

        for (day_number, (topic, description)) in (1u32..).zip(topics) {
            stmt.execute(params![
                goal_id as i64,
                day_number,
                topic,
                description,
                TaskStatus::Pending.as_str(),
                &now_str,
            ])
            .db_context("Failed to insert task")?;
        }

        Ok(())
    }

    /// Retrieves all tasks for a goal, ordered by day number.
    pub fn get_tasks(&self, goal_id: u64) -> Result<Vec<Task>> {
        Self::load_tasks(&self.connection, goal_id)
    }

    /// Retrieves a single task by its ID.
    pub fn get_task(&self, task_id: u64) -> Result<Option<Task>> {
        Self::load_task(&self.connection, task_id)
    }

    /// Sets a task's status and recomputes its goal's progress snapshot in
    /// the same transaction.
    ///
    /// Completing stamps `completed_at` unless the task was already
    /// completed; reverting to pending clears it. Returns `None` if the task
    /// doesn't exist.
    pub fn set_task_status(
        &mut self,
        task_id: u64,
        status: TaskStatus,
    ) -> Result<Option<TaskStatusChange>> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let Some(before) = Self::load_task(&tx, task_id)? else {
            return Ok(None);
        };

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            UPDATE_TASK_STATUS_SQL,
            params![status.as_str(), &now_str, task_id as i64],
        )
        .db_context("Failed to update task status")?;

        tx.execute(
            UPDATE_GOAL_TIMESTAMP_SQL,
            params![&now_str, before.goal_id as i64],
        )
        .db_context("Failed to update goal timestamp")?;

        let progress = Self::recompute_in(&tx, before.goal_id, now)?;

        let previous_status = before.status;
        let task = Self::load_task(&tx, task_id)?.unwrap_or(before);

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(TaskStatusChange {
            task,
            previous_status,
            progress,
        }))
    }
}
