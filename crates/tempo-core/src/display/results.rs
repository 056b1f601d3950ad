//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Goal, TaskStatusChange};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Goal> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = if self.resource.roadmap_generated {
            " with a generated roadmap"
        } else {
            ""
        };
        writeln!(
            f,
            "Created goal with ID: {} ({} tasks{source})",
            self.resource.id,
            self.resource.tasks.len()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Carries a list of human-readable changes shown above the resource.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<TaskStatusChange> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let change = &self.resource;
        writeln!(f, "Updated task with ID: {}", change.task.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for line in &self.changes {
                writeln!(f, "- {line}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", change.task)?;
        writeln!(
            f,
            "Goal {} is now {}% complete, streak {} (longest {}).",
            change.progress.goal_id,
            change.progress.completion_percentage,
            change.progress.streak,
            change.progress.longest_streak
        )
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Goal> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted goal '{}' (ID: {}) and its {} tasks",
            self.resource.title,
            self.resource.id,
            self.resource.tasks.len()
        )
    }
}
