//! The unlock service: evaluation coupled to a store.
//!
//! Loads the full history and the already-unlocked id set, runs the
//! pure evaluator, and persists each new id through the store's
//! insert-if-absent unlock operation. Callers invoke this after every
//! write; invoking it concurrently duplicates work but cannot
//! duplicate unlock rows.

use std::collections::BTreeSet;

use tracing::debug;

use intimetrics_core::{Activity, Partner};
use intimetrics_storage::{StorageError, TrackerStore};

use crate::evaluate::check_achievements;

/// Run one unlock pass against the store. Returns the newly unlocked
/// achievement ids, in catalog order.
pub async fn check_and_unlock<S>(store: &S) -> Result<Vec<&'static str>, StorageError>
where
    S: TrackerStore + ?Sized,
{
    let activities: Vec<Activity> = store
        .list_activities()
        .await?
        .iter()
        .map(|r| r.to_activity())
        .collect();
    let partners: Vec<Partner> = store
        .list_partners()
        .await?
        .iter()
        .map(|p| p.to_partner())
        .collect();
    let unlocked: BTreeSet<String> = store
        .list_unlocks()
        .await?
        .into_iter()
        .map(|u| u.achievement_id)
        .collect();

    let newly = check_achievements(&activities, &partners, &unlocked);
    for id in &newly {
        store.record_unlock(id).await?;
    }
    if !newly.is_empty() {
        debug!(count = newly.len(), ids = ?newly, "unlocked achievements");
    }
    Ok(newly)
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
