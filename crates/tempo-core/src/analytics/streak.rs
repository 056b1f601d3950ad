//! Current and longest streak of consecutive completed tasks.
//!
//! Streaks are anchored to ledger position, not to the calendar: tasks are
//! walked in ascending day order, a completed task extends the running
//! count and any pending task resets it. The current streak is whatever run
//! is left after the last pending task, so completing days 1-5, skipping 6
//! and completing 7 yields a current streak of 1 and a longest of 5, no
//! matter what today's date is.

use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Result of a single streak pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Trailing run of completed tasks ending at the highest day number
    pub current: u32,
    /// Longest run seen during the pass; always `>= current`
    pub longest: u32,
}

impl Streak {
    /// Raise `longest` to a previously recorded high-water mark.
    #[must_use]
    pub fn with_floor(self, recorded_longest: u32) -> Self {
        Self {
            current: self.current,
            longest: self.longest.max(recorded_longest),
        }
    }
}

/// Tasks ordered by ascending day number.
pub fn sorted_by_day(tasks: &[Task]) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by_key(|t| t.day_number);
    sorted
}

/// Compute `(current, longest)` streaks over the ledger.
pub fn compute_streak(tasks: &[Task]) -> Streak {
    let mut run = 0;
    let mut longest = 0;

    for task in sorted_by_day(tasks) {
        if task.is_completed() {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    Streak {
        current: run,
        longest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::ledger;

    #[test]
    fn test_empty_ledger_has_no_streak() {
        assert_eq!(compute_streak(&[]), Streak::default());
    }

    #[test]
    fn test_gap_resets_current_but_keeps_longest() {
        let streak = compute_streak(&ledger("cccccpc"));
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 5);
    }

    #[test]
    fn test_trailing_pending_zeroes_current() {
        let streak = compute_streak(&ledger("ccp"));
        assert_eq!(streak.current, 0);
        assert_eq!(streak.longest, 2);
    }

    #[test]
    fn test_all_completed() {
        let streak = compute_streak(&ledger(&"c".repeat(30)));
        assert_eq!(streak, Streak { current: 30, longest: 30 });
    }

    #[test]
    fn test_all_pending() {
        let streak = compute_streak(&ledger(&"p".repeat(30)));
        assert_eq!(streak, Streak::default());
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let mut tasks = ledger("ccpccc");
        tasks.reverse();
        let streak = compute_streak(&tasks);
        assert_eq!(streak.current, 3);
        assert_eq!(streak.longest, 3);
    }

    #[test]
    fn test_longest_never_below_current() {
        for pattern in ["", "c", "p", "cpc", "pcc", "ccpcccp", "pppccc"] {
            let streak = compute_streak(&ledger(pattern));
            assert!(streak.longest >= streak.current, "pattern {pattern:?}");
        }
    }

    #[test]
    fn test_with_floor_only_raises() {
        let streak = Streak { current: 2, longest: 4 };
        assert_eq!(streak.with_floor(6).longest, 6);
        assert_eq!(streak.with_floor(1).longest, 4);
        assert_eq!(streak.with_floor(6).current, 2);
    }
}
