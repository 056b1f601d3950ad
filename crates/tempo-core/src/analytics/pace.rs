//! Pace classification: actual progress against elapsed time.

use std::{fmt, str::FromStr};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::calendar::days_between;

/// Share of the expected progress that still counts as on track.
pub const ON_TRACK_RATIO: f64 = 0.8;

/// How a goal's completion compares with the time already spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pace {
    Ahead,
    OnTrack,
    Behind,
}

impl Pace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Ahead => "ahead",
            Pace::OnTrack => "on-track",
            Pace::Behind => "behind",
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ahead" => Ok(Pace::Ahead),
            "on-track" | "on_track" | "ontrack" => Ok(Pace::OnTrack),
            "behind" => Ok(Pace::Behind),
            _ => Err(format!("Invalid pace: {s}")),
        }
    }
}

/// Classify `actual_percentage` against linear expected progress.
///
/// Without a deadline, or when the deadline falls on the start date, the goal
/// is on track. A deadline before the start date is not corrected: the
/// result follows the same formula with a negative duration.
pub fn classify_pace(
    start_date: Date,
    deadline: Option<Date>,
    today: Date,
    actual_percentage: f64,
) -> Pace {
    let Some(deadline) = deadline else {
        return Pace::OnTrack;
    };

    let total_days = days_between(start_date, deadline);
    if total_days == 0 {
        return Pace::OnTrack;
    }

    let elapsed_days = days_between(start_date, today);
    let expected = elapsed_days as f64 / total_days as f64 * 100.0;

    if actual_percentage >= expected {
        Pace::Ahead
    } else if actual_percentage >= expected * ON_TRACK_RATIO {
        Pace::OnTrack
    } else {
        Pace::Behind
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    const START: Date = date(2024, 3, 1);
    const DEADLINE: Date = date(2024, 3, 31);

    #[test]
    fn test_no_deadline_is_on_track() {
        assert_eq!(classify_pace(START, None, date(2024, 6, 1), 0.0), Pace::OnTrack);
    }

    #[test]
    fn test_zero_length_plan_is_on_track() {
        assert_eq!(classify_pace(START, Some(START), START, 0.0), Pace::OnTrack);
    }

    #[test]
    fn test_thresholds() {
        // 15 of 30 days elapsed: expected 50%
        let today = date(2024, 3, 16);
        assert_eq!(classify_pace(START, Some(DEADLINE), today, 50.0), Pace::Ahead);
        assert_eq!(classify_pace(START, Some(DEADLINE), today, 40.0), Pace::OnTrack);
        assert_eq!(classify_pace(START, Some(DEADLINE), today, 39.99), Pace::Behind);
    }

    #[test]
    fn test_zero_progress_falls_behind_once_time_passes() {
        assert_eq!(classify_pace(START, Some(DEADLINE), START, 0.0), Pace::Ahead);
        assert_eq!(
            classify_pace(START, Some(DEADLINE), date(2024, 3, 9), 0.0),
            Pace::Behind
        );
    }

    #[test]
    fn test_full_completion_is_never_behind() {
        for today in [START, date(2024, 3, 20), DEADLINE] {
            assert_ne!(classify_pace(START, Some(DEADLINE), today, 100.0), Pace::Behind);
        }
    }

    #[test]
    fn test_deadline_before_start_follows_formula() {
        // Negative duration flips the sign of expected progress.
        let pace = classify_pace(START, Some(date(2024, 2, 20)), date(2024, 3, 5), 0.0);
        assert_eq!(pace, Pace::Ahead);
    }

    #[test]
    fn test_pace_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&Pace::OnTrack).unwrap(), "\"on-track\"");
        assert_eq!("on-track".parse::<Pace>(), Ok(Pace::OnTrack));
    }
}
