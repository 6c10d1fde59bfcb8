//! The achievement catalog.
//!
//! Each achievement pairs a stable id with a pure condition over the
//! full history and, where a numeric target exists, a progress
//! function reporting `min(current / target, 1)`. The catalog is a
//! static table: defined once, ordered, never mutated, no runtime
//! registration. Ids are persisted externally as unlock records and
//! must never be reused or renumbered.
//!
//! Conditions recompute from scratch on every call. Order-sensitive
//! aggregates like streak length cannot be maintained incrementally
//! without drifting when history is edited, so nothing here is cached.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Month;

use intimetrics_core::history;
use intimetrics_core::{Activity, ActivityType, Partner, UnknownVariant};

/// Achievement grouping shown as tabs in a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Milestone,
    Activity,
    Streak,
    Variety,
    Social,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Milestone,
        Category::Activity,
        Category::Streak,
        Category::Variety,
        Category::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Milestone => "milestone",
            Category::Activity => "activity",
            Category::Streak => "streak",
            Category::Variety => "variety",
            Category::Social => "social",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// A qualification predicate over the full history.
pub type Condition = fn(&[Activity], &[Partner]) -> bool;

/// A completion fraction in `[0, 1]` over the full history.
pub type Progress = fn(&[Activity], &[Partner]) -> f64;

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    /// Stable key, persisted in unlock records. Never reused.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: Category,
    /// Display-only numeric target, where one exists.
    pub target: Option<u32>,
    /// Hidden by front ends until unlocked. Masking is a presentation
    /// concern; the evaluator treats secret entries like any other.
    pub secret: bool,
    pub condition: Condition,
    pub progress: Option<Progress>,
}

fn ratio(count: usize, target: usize) -> f64 {
    (count as f64 / target as f64).min(1.0)
}

// ── Condition and progress functions ──────────────────────────────────────────

fn total_at_least<const N: usize>(activities: &[Activity], _: &[Partner]) -> bool {
    activities.len() >= N
}

fn total_progress<const N: usize>(activities: &[Activity], _: &[Partner]) -> f64 {
    ratio(activities.len(), N)
}

fn first_time_with_partner(activities: &[Activity], _: &[Partner]) -> bool {
    !activities.is_empty() && activities.iter().any(|a| a.counting_partner().is_some())
}

fn self_love(activities: &[Activity], _: &[Partner]) -> bool {
    history::count_of_type(activities, ActivityType::Masturbation) >= 5
}

fn self_love_progress(activities: &[Activity], _: &[Partner]) -> f64 {
    ratio(history::count_of_type(activities, ActivityType::Masturbation), 5)
}

fn intimacy_expert(activities: &[Activity], _: &[Partner]) -> bool {
    history::count_of_type(activities, ActivityType::Sex) >= 10
}

fn intimacy_expert_progress(activities: &[Activity], _: &[Partner]) -> f64 {
    ratio(history::count_of_type(activities, ActivityType::Sex), 10)
}

fn cuddle_master(activities: &[Activity], _: &[Partner]) -> bool {
    history::count_of_type(activities, ActivityType::Cuddle) >= 20
}

fn cuddle_master_progress(activities: &[Activity], _: &[Partner]) -> f64 {
    ratio(history::count_of_type(activities, ActivityType::Cuddle), 20)
}

fn explorer(activities: &[Activity], _: &[Partner]) -> bool {
    history::distinct_types(activities) >= 3
}

fn explorer_progress(activities: &[Activity], _: &[Partner]) -> f64 {
    ratio(history::distinct_types(activities), 3)
}

fn adventurer(activities: &[Activity], _: &[Partner]) -> bool {
    history::distinct_types(activities) >= ActivityType::ALL.len()
}

fn adventurer_progress(activities: &[Activity], _: &[Partner]) -> f64 {
    ratio(history::distinct_types(activities), ActivityType::ALL.len())
}

fn social_butterfly(activities: &[Activity], _: &[Partner]) -> bool {
    history::distinct_partners(activities) >= 3
}

fn social_butterfly_progress(activities: &[Activity], _: &[Partner]) -> f64 {
    ratio(history::distinct_partners(activities), 3)
}

fn committed(activities: &[Activity], _: &[Partner]) -> bool {
    history::max_partner_count(activities) >= 25
}

fn committed_progress(activities: &[Activity], _: &[Partner]) -> f64 {
    ratio(history::max_partner_count(activities), 25)
}

fn weekend_warrior(activities: &[Activity], _: &[Partner]) -> bool {
    history::weekend_count(activities) >= 10
}

fn weekend_warrior_progress(activities: &[Activity], _: &[Partner]) -> f64 {
    ratio(history::weekend_count(activities), 10)
}

fn frequent_user(activities: &[Activity], _: &[Partner]) -> bool {
    history::distinct_days(activities) >= 7
}

fn frequent_user_progress(activities: &[Activity], _: &[Partner]) -> f64 {
    ratio(history::distinct_days(activities), 7)
}

fn best_start_of_the_year(activities: &[Activity], _: &[Partner]) -> bool {
    history::any_on_calendar_day(activities, ActivityType::Sex, Month::January, 1)
}

fn best_start_of_the_year_progress(activities: &[Activity], partners: &[Partner]) -> f64 {
    if best_start_of_the_year(activities, partners) {
        1.0
    } else {
        0.0
    }
}

fn valentines_day(activities: &[Activity], _: &[Partner]) -> bool {
    history::any_on_calendar_day(activities, ActivityType::Sex, Month::February, 14)
}

// Both streak achievements run over ALL activity dates. The 69-day one
// is described in terms of sex, but its qualifying walk has never
// filtered by kind; existing unlock records depend on that reading.
fn sixty_nine_day_streak(activities: &[Activity], _: &[Partner]) -> bool {
    history::longest_streak(activities) >= 69
}

fn sixty_nine_day_streak_progress(activities: &[Activity], _: &[Partner]) -> f64 {
    ratio(history::longest_streak(activities) as usize, 69)
}

fn activity_streak(activities: &[Activity], _: &[Partner]) -> bool {
    history::longest_streak(activities) >= 30
}

fn activity_streak_progress(activities: &[Activity], _: &[Partner]) -> f64 {
    ratio(history::longest_streak(activities) as usize, 30)
}

fn sixty_nine_sex_activities(activities: &[Activity], _: &[Partner]) -> bool {
    history::count_of_type(activities, ActivityType::Sex) >= 69
}

fn sixty_nine_sex_activities_progress(activities: &[Activity], _: &[Partner]) -> f64 {
    ratio(history::count_of_type(activities, ActivityType::Sex), 69)
}

// ── The catalog ───────────────────────────────────────────────────────────────

/// The fixed, ordered achievement catalog. Evaluation and all listing
/// views preserve this order.
pub static CATALOG: &[AchievementDef] = &[
    AchievementDef {
        id: "first_time",
        title: "First Steps",
        description: "Log your first activity",
        icon: "🎉",
        category: Category::Milestone,
        target: Some(1),
        secret: false,
        condition: total_at_least::<1>,
        progress: Some(total_progress::<1>),
    },
    AchievementDef {
        id: "double_digits",
        title: "Double Digits",
        description: "Log 10 activities",
        icon: "🔟",
        category: Category::Milestone,
        target: Some(10),
        secret: false,
        condition: total_at_least::<10>,
        progress: Some(total_progress::<10>),
    },
    AchievementDef {
        id: "half_century",
        title: "Half Century",
        description: "Log 50 activities",
        icon: "🏆",
        category: Category::Milestone,
        target: Some(50),
        secret: false,
        condition: total_at_least::<50>,
        progress: Some(total_progress::<50>),
    },
    AchievementDef {
        id: "century_club",
        title: "Century Club",
        description: "Log 100 activities",
        icon: "💯",
        category: Category::Milestone,
        target: Some(100),
        secret: false,
        condition: total_at_least::<100>,
        progress: Some(total_progress::<100>),
    },
    AchievementDef {
        id: "first_time_with_partner",
        title: "First Time With Partner",
        description: "Log your first activity with a partner",
        icon: "💑",
        category: Category::Activity,
        target: Some(1),
        secret: false,
        condition: first_time_with_partner,
        progress: None,
    },
    AchievementDef {
        id: "self_love",
        title: "Self Love",
        description: "Log 5 masturbation sessions",
        icon: "💖",
        category: Category::Activity,
        target: Some(5),
        secret: false,
        condition: self_love,
        progress: Some(self_love_progress),
    },
    AchievementDef {
        id: "intimacy_expert",
        title: "Intimacy Expert",
        description: "Log 10 sex activities",
        icon: "🔥",
        category: Category::Activity,
        target: Some(10),
        secret: false,
        condition: intimacy_expert,
        progress: Some(intimacy_expert_progress),
    },
    AchievementDef {
        id: "cuddle_master",
        title: "Cuddle Master",
        description: "Log 20 cuddle sessions",
        icon: "🤗",
        category: Category::Activity,
        target: Some(20),
        secret: false,
        condition: cuddle_master,
        progress: Some(cuddle_master_progress),
    },
    AchievementDef {
        id: "explorer",
        title: "Explorer",
        description: "Try 3 different activity types",
        icon: "🗺️",
        category: Category::Variety,
        target: Some(3),
        secret: false,
        condition: explorer,
        progress: Some(explorer_progress),
    },
    AchievementDef {
        id: "adventurer",
        title: "Adventurer",
        description: "Try all 7 activity types",
        icon: "🌟",
        category: Category::Variety,
        target: Some(7),
        secret: false,
        condition: adventurer,
        progress: Some(adventurer_progress),
    },
    AchievementDef {
        id: "social_butterfly",
        title: "Social Butterfly",
        description: "Log activities with 3 different partners",
        icon: "🦋",
        category: Category::Social,
        target: Some(3),
        secret: false,
        condition: social_butterfly,
        progress: Some(social_butterfly_progress),
    },
    AchievementDef {
        id: "committed",
        title: "Committed",
        description: "Log 25 activities with the same partner",
        icon: "💑",
        category: Category::Social,
        target: Some(25),
        secret: false,
        condition: committed,
        progress: Some(committed_progress),
    },
    AchievementDef {
        id: "weekend_warrior",
        title: "Weekend Warrior",
        description: "Log 10 weekend activities",
        icon: "🗓️",
        category: Category::Streak,
        target: Some(10),
        secret: false,
        condition: weekend_warrior,
        progress: Some(weekend_warrior_progress),
    },
    AchievementDef {
        id: "frequent_user",
        title: "Frequent User",
        description: "Log activities on 7 different days",
        icon: "📅",
        category: Category::Streak,
        target: Some(7),
        secret: false,
        condition: frequent_user,
        progress: Some(frequent_user_progress),
    },
    AchievementDef {
        id: "best_start_of_the_year",
        title: "Best Start of the Year",
        description: "Have sex on January 1st",
        icon: "🎄",
        category: Category::Milestone,
        target: Some(1),
        secret: true,
        condition: best_start_of_the_year,
        progress: Some(best_start_of_the_year_progress),
    },
    AchievementDef {
        id: "valentines_day",
        title: "Valentines Day",
        description: "Have sex on Valentine's Day",
        icon: "💖",
        category: Category::Milestone,
        target: Some(1),
        secret: true,
        condition: valentines_day,
        progress: None,
    },
    AchievementDef {
        id: "69_day_streak",
        title: "69 Day Streak",
        description: "Have sex for 69 consecutive days",
        icon: "🔥",
        category: Category::Milestone,
        target: Some(69),
        secret: false,
        condition: sixty_nine_day_streak,
        progress: Some(sixty_nine_day_streak_progress),
    },
    AchievementDef {
        id: "activity_streak",
        title: "Activity Streak",
        description: "Log activities for 30 consecutive days",
        icon: "🔥",
        category: Category::Streak,
        target: Some(30),
        secret: false,
        condition: activity_streak,
        progress: Some(activity_streak_progress),
    },
    AchievementDef {
        id: "69_sex_activities",
        title: "69 Sex Activities",
        description: "Have sex 69 times",
        icon: "🔥",
        category: Category::Milestone,
        target: Some(69),
        secret: false,
        condition: sixty_nine_sex_activities,
        progress: Some(sixty_nine_sex_activities_progress),
    },
];

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
