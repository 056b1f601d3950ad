//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay plain data. All
//! output is markdown: headers, bullet metadata and status icons.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Goal, GoalLevel, GoalSummary, Progress, Task, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for GoalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Level: {}", self.level)?;
        writeln!(f, "- Daily time: {} minutes", self.time_per_day)?;
        writeln!(f, "- Started: {}", self.start_date())?;
        match self.deadline {
            Some(deadline) => writeln!(f, "- Deadline: {deadline}")?,
            None => writeln!(f, "- Deadline: none")?,
        }
        writeln!(
            f,
            "- Roadmap: {}",
            if self.roadmap_generated {
                "generated"
            } else {
                "default"
            }
        )?;
        if let Some(progress) = &self.progress {
            writeln!(
                f,
                "- Progress: {}%, streak {} (longest {})",
                progress.completion_percentage, progress.streak, progress.longest_streak
            )?;
        }
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.tasks.is_empty() {
            writeln!(f, "\nNo tasks in this goal.")?;
        } else {
            writeln!(f, "\n## Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                writeln!(
                    f,
                    "- **#{}** {} ({})",
                    task.id,
                    task.topic,
                    task.status.with_icon()
                )?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.topic,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Goal: {}", self.goal_id)?;
        writeln!(f, "- Day: {}", self.day_number)?;
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed_at))?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for GoalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/{})",
            self.title, self.id, self.completed_tasks, self.total_tasks
        )?;
        writeln!(f)?;
        writeln!(f, "- **Level**: {}", self.level)?;
        writeln!(f, "- **Completion**: {}%", self.completion_percentage)?;
        writeln!(f, "- **Daily time**: {} minutes", self.time_per_day)?;
        if let Some(deadline) = self.deadline {
            writeln!(f, "- **Deadline**: {deadline}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Stored progress for goal {}", self.goal_id)?;
        writeln!(f)?;
        writeln!(f, "- Completion: {}%", self.completion_percentage)?;
        writeln!(f, "- Current streak: {}", self.streak)?;
        writeln!(f, "- Longest streak: {}", self.longest_streak)?;
        match self.last_completion_date {
            Some(date) => writeln!(f, "- Last completion: {date}")?,
            None => writeln!(f, "- Last completion: never")?,
        }
        writeln!(f, "- Recorded: {}", LocalDateTime(&self.updated_at))
    }
}
