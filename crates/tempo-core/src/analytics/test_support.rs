//! Ledger fixtures shared by the calculator tests.

use jiff::{
    civil::{date, Date},
    tz::TimeZone,
    Timestamp,
};

use crate::{
    calendar::add_days,
    models::{Goal, GoalLevel, Task, TaskStatus},
};

pub const START: Date = date(2024, 3, 1);

const GOAL_ID: u64 = 7;

fn at(day: Date, hour: i8) -> Timestamp {
    day.at(hour, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap()
        .timestamp()
}

fn task(day_number: u32, status: TaskStatus, completed_at: Option<Timestamp>) -> Task {
    Task {
        id: u64::from(day_number),
        goal_id: GOAL_ID,
        day_number,
        topic: format!("Topic {day_number}"),
        description: None,
        status,
        completed_at,
        created_at: at(START, 9),
        updated_at: completed_at.unwrap_or_else(|| at(START, 9)),
    }
}

/// Build a ledger from a pattern: `c` is completed on its scheduled day,
/// anything else is pending.
pub fn ledger(pattern: &str) -> Vec<Task> {
    pattern
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let day_number = i as u32 + 1;
            if c == 'c' {
                let scheduled = add_days(START, i as i64);
                task(day_number, TaskStatus::Completed, Some(at(scheduled, 12)))
            } else {
                task(day_number, TaskStatus::Pending, None)
            }
        })
        .collect()
}

pub fn task_completed_on(day_number: u32, on: Date) -> Task {
    task(day_number, TaskStatus::Completed, Some(at(on, 12)))
}

pub fn goal_with(tasks: Vec<Task>, deadline: Option<Date>) -> Goal {
    Goal {
        id: GOAL_ID,
        title: "Learn Rust".to_string(),
        description: None,
        level: GoalLevel::Beginner,
        time_per_day: 60,
        deadline,
        roadmap_generated: false,
        created_at: at(START, 9),
        updated_at: at(START, 9),
        tasks,
        progress: None,
    }
}
