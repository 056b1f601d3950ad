//! Progress snapshot persistence.

use jiff::{civil::Date, Timestamp};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use super::rows::{get_id, get_u32, parse_optional_text, parse_text};
use crate::{
    error::{DatabaseResultExt, Result},
    models::Progress,
};

const SELECT_PROGRESS_SQL: &str = "SELECT goal_id, completion_percentage, streak, longest_streak, last_completion_date, updated_at FROM progress WHERE goal_id = ?1";
// longest_streak only ever grows, even if two writers race
const UPSERT_PROGRESS_SQL: &str = "INSERT INTO progress (goal_id, completion_percentage, streak, longest_streak, last_completion_date, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
    ON CONFLICT(goal_id) DO UPDATE SET completion_percentage = excluded.completion_percentage, streak = excluded.streak, \
    longest_streak = MAX(progress.longest_streak, excluded.longest_streak), \
    last_completion_date = excluded.last_completion_date, updated_at = excluded.updated_at";
const CHECK_GOAL_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM goals WHERE id = ?1)";

impl super::Database {
    fn build_progress_from_row(row: &rusqlite::Row) -> rusqlite::Result<Progress> {
        Ok(Progress {
            goal_id: get_id(row, 0)?,
            completion_percentage: row.get(1)?,
            streak: get_u32(row, 2)?,
            longest_streak: get_u32(row, 3)?,
            last_completion_date: parse_optional_text::<Date>(row, 4)?,
            updated_at: parse_text::<Timestamp>(row, 5)?,
        })
    }

    pub(super) fn read_progress(conn: &Connection, goal_id: u64) -> Result<Option<Progress>> {
        conn.query_row(
            SELECT_PROGRESS_SQL,
            params![goal_id as i64],
            Self::build_progress_from_row,
        )
        .optional()
        .db_context("Failed to get progress")
    }

    fn write_progress(conn: &Connection, progress: &Progress) -> Result<()> {
        conn.execute(
            UPSERT_PROGRESS_SQL,
            params![
                progress.goal_id as i64,
                progress.completion_percentage,
                progress.streak,
                progress.longest_streak,
                progress.last_completion_date.map(|d| d.to_string()),
                progress.updated_at.to_string(),
            ],
        )
        .db_context("Failed to store progress")?;
        Ok(())
    }

    /// Re-derives a goal's snapshot from its ledger and stores it, carrying
    /// the stored `longest_streak` forward.
    ///
    /// Callers run this inside the transaction that changed the ledger.
    pub(super) fn recompute_in(conn: &Connection, goal_id: u64, now: Timestamp) -> Result<Progress> {
        let tasks = Self::load_tasks(conn, goal_id)?;
        let previous = Self::read_progress(conn, goal_id)?;

        let progress = Progress::derive(goal_id, &tasks, now).carry_forward(previous.as_ref());
        Self::write_progress(conn, &progress)?;

        debug!(
            "recomputed progress for goal {goal_id}: {}% complete, streak {} (longest {})",
            progress.completion_percentage, progress.streak, progress.longest_streak
        );

        Ok(progress)
    }

    /// Retrieves the stored progress snapshot for a goal.
    pub fn get_progress(&self, goal_id: u64) -> Result<Option<Progress>> {
        Self::read_progress(&self.connection, goal_id)
    }

    /// Rebuilds a goal's snapshot from its ledger.
    ///
    /// Returns `None` if the goal doesn't exist.
    pub fn recompute_progress(&mut self, goal_id: u64) -> Result<Option<Progress>> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_GOAL_EXISTS_SQL, params![goal_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check goal existence")?;
        if !exists {
            return Ok(None);
        }

        let progress = Self::recompute_in(&tx, goal_id, Timestamp::now())?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(progress))
    }
}
