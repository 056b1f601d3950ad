//! Roadmap sources that seed a new goal's task ledger.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::GoalLevel,
};

/// Number of days in a generated plan.
pub const ROADMAP_DAYS: u32 = 30;

/// One planned day as produced by a [`RoadmapSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub day: u32,
    pub topic: String,
    /// Expected effort in minutes
    pub estimated_minutes: u32,
}

impl RoadmapItem {
    /// Task description stored for this item.
    pub fn description(&self) -> String {
        format!("Estimated time: {} minutes", self.estimated_minutes)
    }
}

/// Something that can draft a day-by-day plan for a goal.
///
/// Implementations may call out to external generators; the tracker
/// validates the result and falls back to [`default_ledger`] when it is
/// unusable.
pub trait RoadmapSource: Send + Sync + fmt::Debug {
    fn generate(&self, title: &str, level: GoalLevel, days: u32) -> Result<Vec<RoadmapItem>>;
}

/// Offline roadmap split into ten-day phases.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRoadmap;

impl PlaceholderRoadmap {
    fn minutes_for(level: GoalLevel) -> u32 {
        match level {
            GoalLevel::Beginner => 30,
            GoalLevel::Intermediate => 60,
            GoalLevel::Advanced => 90,
        }
    }
}

impl RoadmapSource for PlaceholderRoadmap {
    fn generate(&self, title: &str, level: GoalLevel, days: u32) -> Result<Vec<RoadmapItem>> {
        let estimated_minutes = Self::minutes_for(level);
        Ok((1..=days)
            .map(|day| RoadmapItem {
                day,
                topic: format!("Day {day}: {title} - Phase {}", (day - 1) / 10 + 1),
                estimated_minutes,
            })
            .collect())
    }
}

/// A task to insert when a goal is created; its position gives the day
/// number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSeed {
    pub topic: String,
    pub description: Option<String>,
}

impl From<RoadmapItem> for TaskSeed {
    fn from(item: RoadmapItem) -> Self {
        Self {
            description: Some(item.description()),
            topic: item.topic,
        }
    }
}

/// The plain ledger used when no roadmap is requested or the roadmap was
/// rejected.
pub fn default_ledger(days: u32) -> Vec<TaskSeed> {
    (1..=days)
        .map(|day| TaskSeed {
            topic: format!("Day {day}: Learning Module"),
            description: None,
        })
        .collect()
}

/// Check that a roadmap covers exactly days `1..=days`, in order.
pub fn validate_roadmap(items: &[RoadmapItem], days: u32) -> Result<()> {
    if items.len() != days as usize {
        return Err(TrackerError::roadmap(format!(
            "expected {days} roadmap items, got {}",
            items.len()
        )));
    }

    for (expected, item) in (1..=days).zip(items) {
        if item.day != expected {
            return Err(TrackerError::roadmap(format!(
                "roadmap day {} found where day {expected} was expected",
                item.day
            )));
        }
        if item.topic.trim().is_empty() {
            return Err(TrackerError::roadmap(format!(
                "roadmap day {expected} has an empty topic"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_phases() {
        let items = PlaceholderRoadmap
            .generate("Rust", GoalLevel::Intermediate, ROADMAP_DAYS)
            .unwrap();
        assert_eq!(items.len(), 30);
        assert_eq!(items[0].topic, "Day 1: Rust - Phase 1");
        assert_eq!(items[9].topic, "Day 10: Rust - Phase 1");
        assert_eq!(items[10].topic, "Day 11: Rust - Phase 2");
        assert_eq!(items[29].topic, "Day 30: Rust - Phase 3");
        assert!(items.iter().all(|i| i.estimated_minutes == 60));
        assert!(validate_roadmap(&items, ROADMAP_DAYS).is_ok());
    }

    #[test]
    fn test_minutes_per_level() {
        for (level, minutes) in [
            (GoalLevel::Beginner, 30),
            (GoalLevel::Intermediate, 60),
            (GoalLevel::Advanced, 90),
        ] {
            let items = PlaceholderRoadmap.generate("x", level, 1).unwrap();
            assert_eq!(items[0].estimated_minutes, minutes);
            assert_eq!(
                items[0].description(),
                format!("Estimated time: {minutes} minutes")
            );
        }
    }

    #[test]
    fn test_default_ledger_topics() {
        let seeds = default_ledger(ROADMAP_DAYS);
        assert_eq!(seeds.len(), 30);
        assert_eq!(seeds[0].topic, "Day 1: Learning Module");
        assert_eq!(seeds[29].topic, "Day 30: Learning Module");
        assert!(seeds.iter().all(|s| s.description.is_none()));
    }

    #[test]
    fn test_seed_from_roadmap_item() {
        let item = RoadmapItem {
            day: 4,
            topic: "Ownership".to_string(),
            estimated_minutes: 45,
        };
        let seed = TaskSeed::from(item);
        assert_eq!(seed.topic, "Ownership");
        assert_eq!(seed.description.as_deref(), Some("Estimated time: 45 minutes"));
    }

    #[test]
    fn test_validate_rejects_wrong_length() {
        let items = PlaceholderRoadmap
            .generate("Rust", GoalLevel::Beginner, 29)
            .unwrap();
        assert!(matches!(
            validate_roadmap(&items, ROADMAP_DAYS),
            Err(TrackerError::Roadmap { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_gapped_days() {
        let mut items = PlaceholderRoadmap
            .generate("Rust", GoalLevel::Beginner, 3)
            .unwrap();
        items[1].day = 5;
        assert!(validate_roadmap(&items, 3).is_err());
    }
}
