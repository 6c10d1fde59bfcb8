//! Explicit `YYYY-MM-DD` calendar date handling.
//!
//! Activity dates are stored as raw strings and parsed here on demand.
//! Day-of-week and day differences are computed with integer
//! calendar-day (Julian day) arithmetic. Millisecond subtraction is
//! deliberately avoided: it misbehaves around daylight-saving
//! transitions, and nothing in this domain needs sub-day resolution.

use time::{Date, Month, Weekday};

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// Returns `None` for anything that is not a real calendar date
/// (`2024-02-30`, `2024-13-01`, free text, empty strings). Callers that
/// aggregate over history skip such records; callers that accept user
/// input reject them.
pub fn parse_iso(s: &str) -> Option<Date> {
    let mut parts = s.splitn(3, '-');
    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u8 = parts.next()?.trim().parse().ok()?;
    let day: u8 = parts.next()?.trim().parse().ok()?;
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Render a calendar date back to its `YYYY-MM-DD` form.
pub fn format_iso(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Whether the date falls on a Saturday or Sunday.
pub fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Signed number of calendar days from `a` to `b`.
pub fn days_between(a: Date, b: Date) -> i64 {
    i64::from(b.to_julian_day()) - i64::from(a.to_julian_day())
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
