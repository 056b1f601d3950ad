//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::{GoalSummary, Task};

/// One page of goal summaries plus the paging context it came from.
///
/// # Examples
///
/// ```rust
/// use tempo_core::display::GoalPage;
///
/// let page = GoalPage { goals: vec![], page: 1, per_page: 10, total: 0 };
/// assert_eq!(page.to_string(), "No goals found.\n");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct GoalPage {
    pub goals: Vec<GoalSummary>,
    pub page: u32,
    pub per_page: u32,
    /// Goals across all pages
    pub total: u64,
}

impl GoalPage {
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Number of pages at the current page size.
    pub fn page_count(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.per_page))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GoalSummary> {
        self.goals.iter()
    }
}

impl Index<usize> for GoalPage {
    type Output = GoalSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.goals[index]
    }
}

impl<'a> IntoIterator for &'a GoalPage {
    type Item = &'a GoalSummary;
    type IntoIter = std::slice::Iter<'a, GoalSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.goals.iter()
    }
}

impl fmt::Display for GoalPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.goals.is_empty() {
            return writeln!(f, "No goals found.");
        }

        for goal in &self.goals {
            write!(f, "{goal}")?;
        }
        writeln!(
            f,
            "_Page {} of {} ({} goals)_",
            self.page,
            self.page_count(),
            self.total
        )
    }
}

/// Newtype wrapper for displaying a goal's ledger.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}
