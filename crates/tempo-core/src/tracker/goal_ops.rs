//! Goal operations for the Tracker.

use std::sync::Arc;

use log::{info, warn};

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{Goal, GoalFilter, GoalSummary},
    params::{CreateGoal, DeleteGoal, Id, ListGoals, NewGoal},
    roadmap::{default_ledger, validate_roadmap, RoadmapSource, TaskSeed, ROADMAP_DAYS},
};

/// Pick the ledger for a new goal and report whether it came from the
/// roadmap source.
fn seed_tasks(
    roadmap: &dyn RoadmapSource,
    goal: &NewGoal,
    generate_roadmap: bool,
) -> (Vec<TaskSeed>, bool) {
    if !generate_roadmap {
        return (default_ledger(ROADMAP_DAYS), false);
    }

    let drafted = roadmap
        .generate(&goal.title, goal.level, ROADMAP_DAYS)
        .and_then(|items| validate_roadmap(&items, ROADMAP_DAYS).map(|()| items));

    match drafted {
        Ok(items) => (items.into_iter().map(TaskSeed::from).collect(), true),
        Err(e) => {
            warn!(
                "Roadmap for '{}' rejected, using the default ledger: {e}",
                goal.title
            );
            (default_ledger(ROADMAP_DAYS), false)
        }
    }
}

impl Tracker {
    /// Validates the parameters and creates a goal with its 30-day ledger
    /// and initial progress snapshot.
    ///
    /// With `generate_roadmap` set, topics come from the configured
    /// [`RoadmapSource`]; a failing or malformed roadmap falls back to the
    /// default ledger instead of failing the request.
    pub async fn create_goal(&self, params: &CreateGoal) -> Result<Goal> {
        let new_goal = params.validate()?;
        let generate_roadmap = params.generate_roadmap;
        let roadmap = Arc::clone(&self.roadmap);

        let goal = self
            .with_db(move |db| {
                let (seeds, roadmap_generated) =
                    seed_tasks(roadmap.as_ref(), &new_goal, generate_roadmap);
                db.create_goal(&new_goal, &seeds, roadmap_generated)
            })
            .await?;

        info!(
            "Created goal {} '{}' with {} tasks (roadmap: {})",
            goal.id,
            goal.title,
            goal.tasks.len(),
            goal.roadmap_generated
        );
        Ok(goal)
    }

    /// Retrieves a goal with its tasks and stored progress.
    pub async fn get_goal(&self, params: &Id) -> Result<Option<Goal>> {
        let goal_id = params.id;
        self.with_db(move |db| db.get_goal(goal_id)).await
    }

    /// Lists one page of goal summaries.
    pub async fn list_goals(&self, params: &ListGoals) -> Result<Vec<GoalSummary>> {
        let filter = GoalFilter::from(params);
        self.with_db(move |db| db.list_goals(&filter)).await
    }

    /// Every goal with its ledger, oldest first.
    pub async fn all_goals(&self) -> Result<Vec<Goal>> {
        self.with_db(|db| db.get_all_goals()).await
    }

    /// Deletes a goal and everything that belongs to it.
    ///
    /// Refuses with `InvalidInput` unless `params.confirmed` is set; returns
    /// `None` if the goal doesn't exist.
    pub async fn delete_goal(&self, params: &DeleteGoal) -> Result<Option<Goal>> {
        let goal_id = params.id;
        if !params.confirmed {
            return Err(TrackerError::invalid_input("confirmed")
                .with_reason(format!("Deleting goal {goal_id} requires confirmation")));
        }

        let deleted = self.with_db(move |db| db.delete_goal(goal_id)).await?;
        if let Some(goal) = &deleted {
            info!("Deleted goal {} '{}'", goal.id, goal.title);
        }
        Ok(deleted)
    }
}
