//! Pure aggregates over the full activity history.
//!
//! Every function here recomputes from scratch on each call. Several of
//! the aggregates (streak length in particular) are order-sensitive and
//! cannot be maintained incrementally without drifting when history is
//! edited or records are deleted, so nothing in this module caches.

use std::collections::{BTreeMap, BTreeSet};

use time::{Date, Month};

use crate::activity::{Activity, ActivityType};
use crate::date;

/// Number of activities of one kind.
pub fn count_of_type(activities: &[Activity], kind: ActivityType) -> usize {
    activities.iter().filter(|a| a.kind == kind).count()
}

/// Number of distinct kinds present in the history.
pub fn distinct_types(activities: &[Activity]) -> usize {
    activities
        .iter()
        .map(|a| a.kind)
        .collect::<BTreeSet<_>>()
        .len()
}

/// Number of distinct counting partner strings.
///
/// Distinctness keys on the raw stored string; only references whose
/// trimmed form is non-empty participate.
pub fn distinct_partners(activities: &[Activity]) -> usize {
    activities
        .iter()
        .filter_map(Activity::counting_partner)
        .collect::<BTreeSet<_>>()
        .len()
}

/// The largest number of activities sharing one counting partner
/// string. Zero when no activity has a counting partner.
pub fn max_partner_count(activities: &[Activity]) -> usize {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for partner in activities.iter().filter_map(Activity::counting_partner) {
        *counts.entry(partner).or_insert(0) += 1;
    }
    counts.values().copied().max().unwrap_or(0)
}

/// Number of activities whose date falls on a Saturday or Sunday.
/// Records with unparseable dates do not contribute.
pub fn weekend_count(activities: &[Activity]) -> usize {
    activities
        .iter()
        .filter_map(|a| date::parse_iso(&a.date))
        .filter(|d| date::is_weekend(*d))
        .count()
}

/// Number of distinct raw `date` string values.
pub fn distinct_days(activities: &[Activity]) -> usize {
    activities
        .iter()
        .map(|a| a.date.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Whether any activity of `kind` falls on the given month and day of
/// any year. Records with unparseable dates do not contribute.
pub fn any_on_calendar_day(
    activities: &[Activity],
    kind: ActivityType,
    month: Month,
    day: u8,
) -> bool {
    activities
        .iter()
        .filter(|a| a.kind == kind)
        .filter_map(|a| date::parse_iso(&a.date))
        .any(|d| d.month() == month && d.day() == day)
}

/// Length of the longest run of calendar-consecutive distinct dates.
///
/// The distinct parseable dates are sorted ascending and walked
/// pairwise: a gap of exactly one calendar day extends the current run,
/// anything else resets it to one. An empty history (or one with no
/// parseable date) has a streak of zero.
pub fn longest_streak(activities: &[Activity]) -> u32 {
    let dates: BTreeSet<Date> = activities
        .iter()
        .filter_map(|a| date::parse_iso(&a.date))
        .collect();

    let mut max_run: u32 = 0;
    let mut run: u32 = 0;
    let mut prev: Option<Date> = None;
    for d in dates {
        run = match prev {
            Some(p) if date::days_between(p, d) == 1 => run + 1,
            _ => 1,
        };
        max_run = max_run.max(run);
        prev = Some(d);
    }
    max_run
}

/// Activity counts per kind, with every kind present (zero-filled).
pub fn counts_by_type(activities: &[Activity]) -> BTreeMap<ActivityType, usize> {
    let mut counts: BTreeMap<ActivityType, usize> =
        ActivityType::ALL.iter().map(|k| (*k, 0)).collect();
    for a in activities {
        *counts.entry(a.kind).or_insert(0) += 1;
    }
    counts
}

/// Activity counts per raw date string, the heatmap feed.
pub fn counts_by_date(activities: &[Activity]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for a in activities {
        *counts.entry(a.date.clone()).or_insert(0) += 1;
    }
    counts
}

/// A one-pass summary of the history, for the stats view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Stats {
    pub total: usize,
    pub by_type: BTreeMap<ActivityType, usize>,
    pub distinct_partners: usize,
    pub distinct_days: usize,
    pub weekend_count: usize,
    pub longest_streak: u32,
}

impl Stats {
    pub fn collect(activities: &[Activity]) -> Self {
        Stats {
            total: activities.len(),
            by_type: counts_by_type(activities),
            distinct_partners: distinct_partners(activities),
            distinct_days: distinct_days(activities),
            weekend_count: weekend_count(activities),
            longest_streak: longest_streak(activities),
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
