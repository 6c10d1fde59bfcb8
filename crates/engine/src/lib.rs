//! Intimetrics achievement engine -- accepts a snapshot of the
//! activity/partner history plus the already-unlocked id set, produces
//! the newly qualified achievement ids.
//!
//! The catalog is a static table of pure predicates; evaluation
//! recomputes every aggregate from scratch on each call, so editing or
//! deleting history can never leave a stale intermediate behind.
//! Unlocking is monotonic: once an id has been persisted it stays
//! unlocked even if the history that earned it is later deleted.

pub mod catalog;
pub mod evaluate;
pub mod unlock;

pub use catalog::{AchievementDef, Category, CATALOG};
pub use evaluate::{achievement_by_id, achievements_by_category, check_achievements, progress};
pub use unlock::check_and_unlock;

// ──────────────────────────────────────────────
// Integration tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod integration_tests {
    use std::collections::BTreeSet;

    use super::*;
    use intimetrics_core::{Activity, ActivityType};

    /// A history rich enough to unlock several categories at once.
    fn varied_history() -> Vec<Activity> {
        let mut history = Vec::new();
        for day in 1..=10 {
            history.push(
                Activity::new(ActivityType::Sex, format!("2024-01-{:02}", day))
                    .with_partner("Alex"),
            );
        }
        history.push(Activity::new(ActivityType::Cuddle, "2024-01-11"));
        history.push(Activity::new(ActivityType::Oral, "2024-01-12"));
        history
    }

    #[test]
    fn result_order_follows_the_catalog() {
        let newly = check_achievements(&varied_history(), &[], &BTreeSet::new());
        assert_eq!(
            newly,
            vec![
                "first_time",
                "double_digits",
                "first_time_with_partner",
                "intimacy_expert",
                "explorer",
                "frequent_user",
                "best_start_of_the_year",
            ]
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let history = varied_history();
        let unlocked = BTreeSet::new();
        let first = check_achievements(&history, &[], &unlocked);
        let second = check_achievements(&history, &[], &unlocked);
        assert_eq!(first, second);
    }

    #[test]
    fn extending_the_unlocked_set_never_re_reports() {
        let history = varied_history();
        let first = check_achievements(&history, &[], &BTreeSet::new());
        let grown: BTreeSet<String> = first.iter().map(|s| s.to_string()).collect();
        let second = check_achievements(&history, &[], &grown);
        assert!(second.iter().all(|id| !first.contains(id)));
        assert!(second.is_empty());
    }
}
