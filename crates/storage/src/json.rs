//! JSON-file backend.
//!
//! The whole store is one archive document on disk: loaded once at
//! open, rewritten after every mutation. The on-disk shape is exactly
//! the export/import format, so a data file can be shared, inspected,
//! or restored with a text editor.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use intimetrics_core::{ActivityType, RelationshipType};

use crate::error::StorageError;
use crate::record::{Archive, ActivityRecord, NewActivity, PartnerSummary, UnlockRecord};
use crate::tables::Tables;
use crate::traits::TrackerStore;

/// A `TrackerStore` persisted as a single JSON document.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    tables: RwLock<Tables>,
}

impl JsonStore {
    /// Open the store at `path`, creating an empty one if the file does
    /// not exist yet. The file is not written until the first mutation.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let tables = if path.exists() {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| StorageError::Backend(e.to_string()))?;
            let archive: Archive =
                serde_json::from_str(&raw).map_err(|e| StorageError::Backend(e.to_string()))?;
            let tables = Tables::from_archive(archive)?;
            debug!(path = %path.display(), "loaded data file");
            tables
        } else {
            debug!(path = %path.display(), "data file absent, starting empty");
            Tables::new()
        };
        Ok(JsonStore {
            path,
            tables: RwLock::new(tables),
        })
    }

    /// The path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, tables: &Tables) -> Result<(), StorageError> {
        let doc = serde_json::to_string_pretty(&tables.to_archive())
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        tokio::fs::write(&self.path, doc)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        debug!(path = %self.path.display(), "wrote data file");
        Ok(())
    }
}

#[async_trait]
impl TrackerStore for JsonStore {
    async fn add_activity(&self, new: NewActivity) -> Result<i64, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.add_activity(new);
        self.persist(&tables).await?;
        Ok(id)
    }

    async fn remove_activity(&self, id: i64) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        tables.remove_activity(id)?;
        self.persist(&tables).await
    }

    async fn clear_activities(&self) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        tables.clear_activities();
        self.persist(&tables).await
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
        let mut tables = self.tables.write().await;
        let id = tables.add_partner(name, relationship)?;
        self.persist(&tables).await?;
        Ok(id)
    }

    async fn update_partner(
        &self,
        id: i64,
        name: &str,
        relationship: Option<RelationshipType>,
    ) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        tables.update_partner(id, name, relationship)?;
        self.persist(&tables).await
    }

    async fn remove_partner(&self, id: i64) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        tables.remove_partner(id)?;
        self.persist(&tables).await
    }

    async fn clear_partners(&self) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        tables.clear_partners();
        self.persist(&tables).await
    }

    async fn list_partners(&self) -> Result<Vec<PartnerSummary>, StorageError> {
        Ok(self.tables.read().await.list_partners())
    }

    async fn record_unlock(&self, achievement_id: &str) -> Result<bool, StorageError> {
        let mut tables = self.tables.write().await;
        let inserted = tables.record_unlock(achievement_id);
        if inserted {
            self.persist(&tables).await?;
        }
        Ok(inserted)
    }

    async fn list_unlocks(&self) -> Result<Vec<UnlockRecord>, StorageError> {
        Ok(self.tables.read().await.list_unlocks())
    }

    async fn clear_unlocks(&self) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        tables.clear_unlocks();
        self.persist(&tables).await
    }

    async fn snapshot(&self) -> Result<Archive, StorageError> {
        Ok(self.tables.read().await.to_archive())
    }

    async fn restore(&self, archive: Archive) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        *tables = Tables::from_archive(archive)?;
        self.persist(&tables).await
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
