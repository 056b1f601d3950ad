//! Goal CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use super::rows::{get_id, get_u32, parse_optional_text, parse_text};
use crate::{
    analytics::percentage_of,
    calendar::start_of_day,
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Goal, GoalFilter, GoalLevel, GoalSummary},
    params::NewGoal,
    roadmap::TaskSeed,
};

const GOAL_COLUMNS: &str = "id, title, description, level, time_per_day, deadline, roadmap_generated, created_at, updated_at";
const INSERT_GOAL_SQL: &str = "INSERT INTO goals (title, description, level, time_per_day, deadline, roadmap_generated, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SUMMARY_COLUMNS: &str =
    "id, title, level, time_per_day, deadline, created_at, total_tasks, completed_tasks";
const COUNT_GOALS_SQL: &str = "SELECT COUNT(*) FROM goals";
const DELETE_GOAL_SQL: &str = "DELETE FROM goals WHERE id = ?1";

impl super::Database {
    fn build_goal_from_row(row: &rusqlite::Row) -> rusqlite::Result<Goal> {
        Ok(Goal {
            id: get_id(row, 0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            level: parse_text::<GoalLevel>(row, 3)?,
            time_per_day: get_u32(row, 4)?,
            deadline: parse_optional_text::<Date>(row, 5)?,
            roadmap_generated: row.get(6)?,
            created_at: parse_text::<Timestamp>(row, 7)?,
            updated_at: parse_text::<Timestamp>(row, 8)?,
            tasks: Vec::new(),
            progress: None,
        })
    }

    fn build_summary_from_row(row: &rusqlite::Row) -> rusqlite::Result<GoalSummary> {
        let total_tasks = get_u32(row, 6)?;
        let completed_tasks = get_u32(row, 7)?;

        Ok(GoalSummary {
            id: get_id(row, 0)?,
            title: row.get(1)?,
            level: parse_text::<GoalLevel>(row, 2)?,
            time_per_day: get_u32(row, 3)?,
            deadline: parse_optional_text::<Date>(row, 4)?,
            created_at: parse_text::<Timestamp>(row, 5)?,
            total_tasks,
            completed_tasks,
            pending_tasks: total_tasks.saturating_sub(completed_tasks),
            completion_percentage: percentage_of(completed_tasks, total_tasks),
        })
    }

    /// Loads a goal with its ledger and progress snapshot.
    fn load_goal(conn: &Connection, id: u64) -> Result<Option<Goal>> {
        let goal = conn
            .query_row(
                &format!("SELECT {GOAL_COLUMNS} FROM goals WHERE id = ?1"),
                params![id as i64],
                Self::build_goal_from_row,
            )
            .optional()
            .db_context("Failed to query goal")?;

        let Some(mut goal) = goal else {
            return Ok(None);
        };
        goal.tasks = Self::load_tasks(conn, goal.id)?;
        goal.progress = Self::read_progress(conn, goal.id)?;
        Ok(Some(goal))
    }

    /// Creates a goal together with its ledger and an initial progress
    /// snapshot, all in one transaction.
    ///
    /// Tasks are numbered from 1 in the order given. When
    /// `goal.started_on` is set the goal is backdated to midnight UTC of
    /// that day, which makes it the plan start date.
    pub fn create_goal(
        &mut self,
        goal: &NewGoal,
        seeds: &[TaskSeed],
        roadmap_generated: bool,
    ) -> Result<Goal> {
        let now = Timestamp::now();
        let created_at = match goal.started_on {
            Some(day) => start_of_day(day).map_err(|e| {
                TrackerError::invalid_input("started_on").with_reason(e.to_string())
            })?,
            None => now,
        };

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_GOAL_SQL,
            params![
                &goal.title,
                goal.description.as_deref(),
                goal.level.as_str(),
                goal.time_per_day,
                goal.deadline.map(|d| d.to_string()),
                roadmap_generated,
                created_at.to_string(),
                now.to_string(),
            ],
        )
        .db_context("Failed to insert goal")?;

        let id = tx.last_insert_rowid() as u64;

        Self::insert_tasks(
            &tx,
            id,
            seeds
                .iter()
                .map(|seed| (seed.topic.as_str(), seed.description.as_deref())),
            now,
        )?;
        Self::recompute_in(&tx, id, now)?;

        let created = Self::load_goal(&tx, id)?.ok_or(TrackerError::GoalNotFound { id })?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(created)
    }

    /// Retrieves a goal by its ID, with tasks and progress eagerly loaded.
    pub fn get_goal(&self, id: u64) -> Result<Option<Goal>> {
        Self::load_goal(&self.connection, id)
    }

    /// Lists one page of goal summaries.
    pub fn list_goals(&self, filter: &GoalFilter) -> Result<Vec<GoalSummary>> {
        let order = filter.order.as_sql();
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM goal_summaries ORDER BY {} {order}, id {order} LIMIT ?1 OFFSET ?2",
            filter.sort.column()
        );

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map(
                params![i64::from(filter.per_page), filter.offset() as i64],
                Self::build_summary_from_row,
            )
            .db_context("Failed to query goals")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch goals")?;

        Ok(summaries)
    }

    /// Total number of goals, for paging.
    pub fn count_goals(&self) -> Result<u64> {
        let count: i64 = self
            .connection
            .query_row(COUNT_GOALS_SQL, [], |row| row.get(0))
            .db_context("Failed to count goals")?;
        Ok(count as u64)
    }

    /// Every goal with its ledger and progress, oldest first.
    pub fn get_all_goals(&self) -> Result<Vec<Goal>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {GOAL_COLUMNS} FROM goals ORDER BY id"))
            .db_context("Failed to prepare query")?;

        let mut goals = stmt
            .query_map([], Self::build_goal_from_row)
            .db_context("Failed to query goals")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch goals")?;

        for goal in &mut goals {
            goal.tasks = Self::load_tasks(&self.connection, goal.id)?;
            goal.progress = Self::read_progress(&self.connection, goal.id)?;
        }

        Ok(goals)
    }

    /// Deletes a goal; its tasks and progress go with it.
    ///
    /// Returns the goal as it was before deletion, or `None` if it doesn't
    /// exist.
    pub fn delete_goal(&mut self, id: u64) -> Result<Option<Goal>> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let Some(goal) = Self::load_goal(&tx, id)? else {
            return Ok(None);
        };

        tx.execute(DELETE_GOAL_SQL, params![id as i64])
            .db_context("Failed to delete goal")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(goal))
    }
}
