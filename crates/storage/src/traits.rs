use async_trait::async_trait;

use intimetrics_core::{ActivityType, RelationshipType};

use crate::error::StorageError;
use crate::record::{Archive, ActivityRecord, NewActivity, PartnerSummary, UnlockRecord};

/// The storage trait for tracker backends.
///
/// A `TrackerStore` holds three tables: activities, partners, and
/// achievement unlocks. Implementations must be `Send + Sync + 'static`
/// so a store can be shared across async task boundaries.
///
/// ## Ordering
///
/// Listing methods return newest-first: activities by `(date,
/// created_at, id)` descending, partners by `(created_at, id)`
/// descending, unlocks by `(unlocked_at, id)` descending. Date and
/// timestamp ordering is lexicographic on the stored strings, which
/// matches chronological order for well-formed values.
///
/// ## Unlock idempotency
///
/// [`record_unlock`](TrackerStore::record_unlock) is insert-if-absent:
/// at most one row per achievement id ever exists, so concurrent unlock
/// passes may duplicate work but never duplicate rows.
#[async_trait]
pub trait TrackerStore: Send + Sync + 'static {
    // ── Activities ────────────────────────────────────────────────────────────

    /// Insert a new activity row. Returns the assigned id.
    async fn add_activity(&self, new: NewActivity) -> Result<i64, StorageError>;

    /// Delete one activity row.
    ///
    /// Returns `Err(StorageError::ActivityNotFound)` if no row has the id.
    async fn remove_activity(&self, id: i64) -> Result<(), StorageError>;

    /// Delete all activity rows.
    async fn clear_activities(&self) -> Result<(), StorageError>;

    /// All activities, newest first.
    async fn list_activities(&self) -> Result<Vec<ActivityRecord>, StorageError>;

    /// Activities whose raw date string lies in `start..=end`.
    async fn activities_between(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<ActivityRecord>, StorageError>;

    /// Activities of one kind, newest first.
    async fn activities_of_type(
        &self,
        kind: ActivityType,
    ) -> Result<Vec<ActivityRecord>, StorageError>;

    // ── Partners ──────────────────────────────────────────────────────────────

    /// Insert a new partner. Returns the assigned id.
    ///
    /// Returns `Err(StorageError::PartnerExists)` when the name is taken.
    async fn add_partner(
        &self,
        name: &str,
        relationship: Option<RelationshipType>,
    ) -> Result<i64, StorageError>;

    /// Rename a partner and/or change its relationship.
    ///
    /// Returns `Err(StorageError::PartnerNotFound)` for an unknown id and
    /// `Err(StorageError::PartnerExists)` when renaming onto a taken name.
    async fn update_partner(
        &self,
        id: i64,
        name: &str,
        relationship: Option<RelationshipType>,
    ) -> Result<(), StorageError>;

    /// Delete one partner row.
    async fn remove_partner(&self, id: i64) -> Result<(), StorageError>;

    /// Delete all partner rows.
    async fn clear_partners(&self) -> Result<(), StorageError>;

    /// All partners with their activity counts, newest first.
    async fn list_partners(&self) -> Result<Vec<PartnerSummary>, StorageError>;

    // ── Unlocks ───────────────────────────────────────────────────────────────

    /// Insert an unlock row if one does not already exist for the id.
    ///
    /// Returns `true` when a row was inserted, `false` when the
    /// achievement was already unlocked.
    async fn record_unlock(&self, achievement_id: &str) -> Result<bool, StorageError>;

    /// All unlock rows, newest first.
    async fn list_unlocks(&self) -> Result<Vec<UnlockRecord>, StorageError>;

    /// Delete all unlock rows.
    async fn clear_unlocks(&self) -> Result<(), StorageError>;

    // ── Archive ───────────────────────────────────────────────────────────────

    /// A full copy of all three tables as an export document.
    async fn snapshot(&self) -> Result<Archive, StorageError>;

    /// Replace all three tables with the archive's contents.
    ///
    /// Returns `Err(StorageError::UnsupportedArchive)` when the version
    /// field is not recognized.
    async fn restore(&self, archive: Archive) -> Result<(), StorageError>;
}
