//! Catalog evaluation.
//!
//! The evaluator is a pure function over a snapshot of history: no
//! caching, no persistence, no shared state. Callers re-run it after
//! any write and persist whatever comes back; because persistence is
//! insert-if-absent, concurrent passes over the same snapshot can at
//! worst duplicate work, never unlock records.

use std::collections::BTreeSet;

use intimetrics_core::{Activity, Partner};

use crate::catalog::{AchievementDef, Category, CATALOG};

/// Determine which achievements newly qualify.
///
/// Walks the catalog in its defined order, skips ids already present in
/// `unlocked`, and collects the ids whose condition holds over the full
/// history. The result preserves catalog order, never input order.
pub fn check_achievements(
    activities: &[Activity],
    partners: &[Partner],
    unlocked: &BTreeSet<String>,
) -> Vec<&'static str> {
    let mut newly = Vec::new();
    for def in CATALOG {
        if unlocked.contains(def.id) {
            continue;
        }
        if (def.condition)(activities, partners) {
            newly.push(def.id);
        }
    }
    newly
}

/// Look up a catalog entry by its stable id.
pub fn achievement_by_id(id: &str) -> Option<&'static AchievementDef> {
    CATALOG.iter().find(|d| d.id == id)
}

/// All entries in one category, preserving catalog order.
pub fn achievements_by_category(category: Category) -> Vec<&'static AchievementDef> {
    CATALOG.iter().filter(|d| d.category == category).collect()
}

/// Completion fraction for one achievement.
///
/// Returns `0.0` for unknown ids and for entries without a progress
/// function; never panics.
pub fn progress(id: &str, activities: &[Activity], partners: &[Partner]) -> f64 {
    match achievement_by_id(id).and_then(|d| d.progress) {
        Some(f) => f(activities, partners),
        None => 0.0,
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
