//! Civil-date helpers shared by the calculators.
//!
//! All derivations work on UTC calendar dates. A [`Timestamp`] is bucketed by
//! the UTC day it falls on, and "today" is always supplied by the caller;
//! [`today_utc`] exists only for interface layers that need a default.

use jiff::{civil::Date, tz::TimeZone, Span, Timestamp};

/// UTC calendar date of an instant.
pub fn utc_date(timestamp: Timestamp) -> Date {
    timestamp.to_zoned(TimeZone::UTC).date()
}

/// The current UTC date. Sample once at the boundary and pass it down.
pub fn today_utc() -> Date {
    utc_date(Timestamp::now())
}

/// The instant a UTC date begins.
pub fn start_of_day(date: Date) -> Result<Timestamp, jiff::Error> {
    date.to_zoned(TimeZone::UTC).map(|zoned| zoned.timestamp())
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: Date, to: Date) -> i64 {
    i64::from((to - from).get_days())
}

/// `date` shifted by `days`, saturating at the representable range.
pub fn add_days(date: Date, days: i64) -> Date {
    match Span::new().try_days(days) {
        Ok(span) => date.saturating_add(span),
        Err(_) if days < 0 => Date::MIN,
        Err(_) => Date::MAX,
    }
}
