//! Evaluator conformance suite.
//!
//! End-to-end scenarios over the public API: empty histories, count
//! thresholds, partner rules, streak walks, malformed dates, and the
//! progress surface. Each scenario pins the exact id list so a catalog
//! reordering or a threshold drift fails loudly.

use std::collections::BTreeSet;

use intimetrics_core::{Activity, ActivityType, Partner};
use intimetrics_engine::{check_achievements, progress, CATALOG};

fn no_unlocks() -> BTreeSet<String> {
    BTreeSet::new()
}

fn all_unlocked() -> BTreeSet<String> {
    CATALOG.iter().map(|d| d.id.to_string()).collect()
}

/// One activity per day over an inclusive range of January 2024 days.
fn daily(kind: ActivityType, days: std::ops::RangeInclusive<u8>) -> Vec<Activity> {
    days.map(|day| Activity::new(kind, format!("2024-01-{:02}", day)))
        .collect()
}

#[test]
fn empty_history_unlocks_nothing() {
    let newly = check_achievements(&[], &[], &no_unlocks());
    assert!(newly.is_empty());

    // Partners alone change nothing; rules derive partner information
    // from the activities.
    let partners = vec![Partner::new("Alex"), Partner::new("Robin")];
    assert!(check_achievements(&[], &partners, &no_unlocks()).is_empty());
}

#[test]
fn single_new_years_sex_activity() {
    let history = vec![Activity::new(ActivityType::Sex, "2024-01-01")];
    let newly = check_achievements(&history, &[], &no_unlocks());
    assert_eq!(newly, vec!["first_time", "best_start_of_the_year"]);
}

#[test]
fn ten_solo_sessions_on_distinct_days() {
    let history = daily(ActivityType::Masturbation, 1..=10);
    let newly = check_achievements(&history, &[], &no_unlocks());
    assert_eq!(
        newly,
        vec!["first_time", "double_digits", "self_love", "frequent_user"]
    );
    assert!(!newly.contains(&"century_club"));
}

#[test]
fn twenty_five_activities_with_one_partner() {
    let history: Vec<Activity> = (0..25)
        .map(|i| {
            Activity::new(ActivityType::Cuddle, "2024-05-01")
                .with_partner("Alex")
                .with_description(format!("entry {i}"))
        })
        .collect();
    let newly = check_achievements(&history, &[], &no_unlocks());
    assert_eq!(
        newly,
        vec![
            "first_time",
            "double_digits",
            "first_time_with_partner",
            "cuddle_master",
            "committed",
        ]
    );
    assert!(!newly.contains(&"social_butterfly"));
}

#[test]
fn thirty_consecutive_days_earn_the_streak() {
    let history = daily(ActivityType::Other, 1..=30);
    let newly = check_achievements(&history, &[], &no_unlocks());
    assert_eq!(
        newly,
        vec![
            "first_time",
            "double_digits",
            "frequent_user",
            "activity_streak",
        ]
    );
}

#[test]
fn a_gap_breaks_the_streak() {
    let mut history = daily(ActivityType::Other, 1..=15);
    history.extend(daily(ActivityType::Other, 17..=31));
    let newly = check_achievements(&history, &[], &no_unlocks());
    assert!(!newly.contains(&"activity_streak"));
    assert!(newly.contains(&"frequent_user"));
}

#[test]
fn sixty_nine_day_streak_ignores_activity_kind() {
    // 2024-01-01 through 2024-03-09 is 69 consecutive days, none of
    // them sex.
    let mut history = daily(ActivityType::Cuddle, 1..=31);
    history.extend(
        (1..=29).map(|day| Activity::new(ActivityType::Cuddle, format!("2024-02-{:02}", day))),
    );
    history.extend(
        (1..=9).map(|day| Activity::new(ActivityType::Cuddle, format!("2024-03-{:02}", day))),
    );
    let newly = check_achievements(&history, &[], &no_unlocks());
    assert!(newly.contains(&"69_day_streak"));
    assert!(newly.contains(&"activity_streak"));
    // A cuddle on January 1st is not a New Year's sex activity.
    assert!(!newly.contains(&"best_start_of_the_year"));
    assert!(!newly.contains(&"69_sex_activities"));
}

#[test]
fn three_distinct_partners_spread_their_wings() {
    let history = vec![
        Activity::new(ActivityType::Sex, "2024-04-01").with_partner("Alex"),
        Activity::new(ActivityType::Sex, "2024-04-02").with_partner("Robin"),
        Activity::new(ActivityType::Sex, "2024-04-03").with_partner("Sam"),
    ];
    let newly = check_achievements(&history, &[], &no_unlocks());
    assert!(newly.contains(&"social_butterfly"));
    assert!(!newly.contains(&"committed"));
}

#[test]
fn blank_partner_strings_never_count() {
    let history = vec![
        Activity::new(ActivityType::Sex, "2024-04-01").with_partner("  "),
        Activity::new(ActivityType::Sex, "2024-04-02").with_partner(""),
    ];
    let newly = check_achievements(&history, &[], &no_unlocks());
    assert!(!newly.contains(&"first_time_with_partner"));
    assert!(newly.contains(&"first_time"));
}

#[test]
fn weekend_warrior_needs_ten_weekend_days() {
    // Ten consecutive weekends: Saturdays and Sundays of January and
    // February 2024, five of each.
    let weekend_dates = [
        "2024-01-06", "2024-01-07", "2024-01-13", "2024-01-14", "2024-01-20",
        "2024-01-21", "2024-01-27", "2024-01-28", "2024-02-03", "2024-02-04",
    ];
    let history: Vec<Activity> = weekend_dates
        .iter()
        .map(|d| Activity::new(ActivityType::Sex, *d))
        .collect();
    let newly = check_achievements(&history, &[], &no_unlocks());
    assert!(newly.contains(&"weekend_warrior"));

    // One fewer weekend day and it stays locked.
    let short = &history[..9];
    let newly = check_achievements(short, &[], &no_unlocks());
    assert!(!newly.contains(&"weekend_warrior"));
}

#[test]
fn valentines_day_requires_the_right_kind() {
    let cuddle = vec![Activity::new(ActivityType::Cuddle, "2024-02-14")];
    assert!(!check_achievements(&cuddle, &[], &no_unlocks()).contains(&"valentines_day"));

    let sex = vec![Activity::new(ActivityType::Sex, "2025-02-14")];
    assert!(check_achievements(&sex, &[], &no_unlocks()).contains(&"valentines_day"));
}

#[test]
fn malformed_dates_only_mute_date_based_rules() {
    let history: Vec<Activity> = (0..10)
        .map(|i| {
            Activity::new(ActivityType::Sex, "whenever").with_description(format!("entry {i}"))
        })
        .collect();
    let newly = check_achievements(&history, &[], &no_unlocks());
    // Count thresholds still fire.
    assert!(newly.contains(&"first_time"));
    assert!(newly.contains(&"double_digits"));
    assert!(newly.contains(&"intimacy_expert"));
    // Calendar rules see no usable dates.
    assert!(!newly.contains(&"weekend_warrior"));
    assert!(!newly.contains(&"activity_streak"));
    assert!(!newly.contains(&"best_start_of_the_year"));
}

#[test]
fn unlocked_ids_are_excluded_no_matter_what() {
    let history = daily(ActivityType::Sex, 1..=31);
    let newly = check_achievements(&history, &[], &all_unlocked());
    assert!(newly.is_empty());
}

#[test]
fn result_order_is_catalog_order_not_input_order() {
    // Input deliberately ends with the activity that satisfies the
    // first catalog entry.
    let history = vec![
        Activity::new(ActivityType::Oral, "2024-06-03"),
        Activity::new(ActivityType::Cuddle, "2024-06-02"),
        Activity::new(ActivityType::Sex, "2024-06-01"),
    ];
    let newly = check_achievements(&history, &[], &no_unlocks());
    assert_eq!(newly, vec!["first_time", "explorer"]);
}

#[test]
fn adventurer_needs_every_kind() {
    let six: Vec<Activity> = ActivityType::ALL[..6]
        .iter()
        .enumerate()
        .map(|(i, kind)| Activity::new(*kind, format!("2024-07-{:02}", i + 1)))
        .collect();
    let newly = check_achievements(&six, &[], &no_unlocks());
    assert!(newly.contains(&"explorer"));
    assert!(!newly.contains(&"adventurer"));

    let seven: Vec<Activity> = ActivityType::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| Activity::new(*kind, format!("2024-07-{:02}", i + 1)))
        .collect();
    let newly = check_achievements(&seven, &[], &no_unlocks());
    assert!(newly.contains(&"adventurer"));
}

#[test]
fn progress_surface_matches_the_rules() {
    let four_solo: Vec<Activity> = daily(ActivityType::Masturbation, 1..=4);
    assert_eq!(progress("self_love", &four_solo, &[]), 0.8);

    // Unknown ids and entries without a progress function report zero.
    assert_eq!(progress("not_an_achievement", &four_solo, &[]), 0.0);
    assert_eq!(progress("valentines_day", &four_solo, &[]), 0.0);

    // Streak progress counts calendar-consecutive distinct days.
    let fifteen = daily(ActivityType::Other, 1..=15);
    assert_eq!(progress("activity_streak", &fifteen, &[]), 0.5);
    assert_eq!(progress("activity_streak", &[], &[]), 0.0);

    // The on/off secret reports only zero or one.
    let jan1 = vec![Activity::new(ActivityType::Sex, "2023-01-01")];
    assert_eq!(progress("best_start_of_the_year", &jan1, &[]), 1.0);
    assert_eq!(progress("best_start_of_the_year", &four_solo, &[]), 0.0);
}
