//! Overdue task detection.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::sorted_by_day;
use crate::{calendar::add_days, models::Task};

/// A pending task whose scheduled day has arrived or passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedDay {
    pub day_number: u32,
    pub topic: String,
    pub expected_date: Date,
}

/// Date a task is scheduled for: day 1 is the start date itself.
pub fn expected_date(start_date: Date, day_number: u32) -> Date {
    add_days(start_date, i64::from(day_number) - 1)
}

/// Every pending task scheduled on or before `today`, in day order.
///
/// Stateless: each call rescans the full ledger, so a task appears at most
/// once and never when its expected date is still in the future.
pub fn detect_missed(tasks: &[Task], start_date: Date, today: Date) -> Vec<MissedDay> {
    sorted_by_day(tasks)
        .into_iter()
        .filter(|task| !task.is_completed())
        .filter_map(|task| {
            let expected = expected_date(start_date, task.day_number);
            (expected <= today).then(|| MissedDay {
                day_number: task.day_number,
                topic: task.topic.clone(),
                expected_date: expected,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::analytics::test_support::{ledger, START};

    #[test]
    fn test_day_one_is_start_date() {
        assert_eq!(expected_date(START, 1), START);
        assert_eq!(expected_date(START, 31), date(2024, 3, 31));
    }

    #[test]
    fn test_pending_task_due_today_is_missed() {
        let missed = detect_missed(&ledger("ccp"), START, date(2024, 3, 3));
        assert_eq!(missed.len(), 1);
        assert_eq!(missed[0].day_number, 3);
        assert_eq!(missed[0].expected_date, date(2024, 3, 3));
        assert_eq!(missed[0].topic, "Topic 3");
    }

    #[test]
    fn test_future_tasks_are_never_reported() {
        let today = date(2024, 3, 2);
        let missed = detect_missed(&ledger(&"p".repeat(30)), START, today);
        assert_eq!(missed.len(), 2);
        assert!(missed.iter().all(|m| m.expected_date <= today));
    }

    #[test]
    fn test_before_start_reports_nothing() {
        let missed = detect_missed(&ledger("ppp"), START, date(2024, 2, 28));
        assert!(missed.is_empty());
    }

    #[test]
    fn test_results_are_in_day_order() {
        let mut tasks = ledger("pcpcp");
        tasks.reverse();
        let days: Vec<u32> = detect_missed(&tasks, START, date(2024, 4, 1))
            .iter()
            .map(|m| m.day_number)
            .collect();
        assert_eq!(days, vec![1, 3, 5]);
    }

    #[test]
    fn test_gap_day_six_reported_once_due() {
        let tasks = ledger("cccccpc");
        assert!(detect_missed(&tasks, START, date(2024, 3, 5)).is_empty());
        let due = detect_missed(&tasks, START, date(2024, 3, 6));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].day_number, 6);
    }
}
