//! In-memory backend. Used by tests and anywhere durability is not
//! wanted; contents are lost when the store is dropped.

use async_trait::async_trait;
use tokio::sync::RwLock;

use intimetrics_core::{ActivityType, RelationshipType};

use crate::error::StorageError;
use crate::record::{Archive, ActivityRecord, NewActivity, PartnerSummary, UnlockRecord};
use crate::tables::Tables;
use crate::traits::TrackerStore;

/// A `TrackerStore` backed by nothing but process memory.
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            tables: RwLock::new(Tables::new()),
        }
    }
}

#[async_trait]
impl TrackerStore for MemoryStore {
    async fn add_activity(&self, new: NewActivity) -> Result<i64, StorageError> {
        Ok(self.tables.write().await.add_activity(new))
    }

    async fn remove_activity(&self, id: i64) -> Result<(), StorageError> {
        self.tables.write().await.remove_activity(id)
    }

    async fn clear_activities(&self) -> Result<(), StorageError> {
        self.tables.write().await.clear_activities();
        Ok(())
    }

    async fn list_activities(&self) -> Result<Vec<ActivityRecord>, StorageError> {
        Ok(self.tables.read().await.list_activities())
    }

    async fn activities_between(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<ActivityRecord>, StorageError> {
        Ok(self.tables.read().await.activities_between(start, end))
    }

    async fn activities_of_type(
        &self,
        kind: ActivityType,
    ) -> Result<Vec<ActivityRecord>, StorageError> {
        Ok(self.tables.read().await.activities_of_type(kind))
    }

    async fn add_partner(
        &self,
        name: &str,
        relationship: Option<RelationshipType>,
    ) -> Result<i64, StorageError> {
        self.tables.write().await.add_partner(name, relationship)
    }

    async fn update_partner(
        &self,
        id: i64,
        name: &str,
        relationship: Option<RelationshipType>,
    ) -> Result<(), StorageError> {
        self.tables
            .write()
            .await
            .update_partner(id, name, relationship)
    }

    async fn remove_partner(&self, id: i64) -> Result<(), StorageError> {
        self.tables.write().await.remove_partner(id)
    }

    async fn clear_partners(&self) -> Result<(), StorageError> {
        self.tables.write().await.clear_partners();
        Ok(())
    }

    async fn list_partners(&self) -> Result<Vec<PartnerSummary>, StorageError> {
        Ok(self.tables.read().await.list_partners())
    }

    async fn record_unlock(&self, achievement_id: &str) -> Result<bool, StorageError> {
        Ok(self.tables.write().await.record_unlock(achievement_id))
    }

    async fn list_unlocks(&self) -> Result<Vec<UnlockRecord>, StorageError> {
        Ok(self.tables.read().await.list_unlocks())
    }

    async fn clear_unlocks(&self) -> Result<(), StorageError> {
        self.tables.write().await.clear_unlocks();
        Ok(())
    }

    async fn snapshot(&self) -> Result<Archive, StorageError> {
        Ok(self.tables.read().await.to_archive())
    }

    async fn restore(&self, archive: Archive) -> Result<(), StorageError> {
        let restored = Tables::from_archive(archive)?;
        *self.tables.write().await = restored;
        Ok(())
    }
}
