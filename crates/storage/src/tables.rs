//! The in-memory table set shared by both backends.
//!
//! All mutation and query logic lives here as synchronous methods; the
//! backends wrap a `Tables` in a lock and differ only in whether a
//! mutation is followed by a write to disk.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use intimetrics_core::{ActivityType, RelationshipType};

use crate::error::StorageError;
use crate::record::{
    Archive, ActivityRecord, NewActivity, PartnerRecord, PartnerSummary, UnlockRecord,
    ARCHIVE_VERSION,
};

/// Current UTC time as an RFC 3339 string.
pub(crate) fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

#[derive(Debug, Default)]
pub(crate) struct Tables {
    activities: Vec<ActivityRecord>,
    partners: Vec<PartnerRecord>,
    unlocks: Vec<UnlockRecord>,
    next_activity_id: i64,
    next_partner_id: i64,
    next_unlock_id: i64,
}

impl Tables {
    pub(crate) fn new() -> Self {
        Tables {
            next_activity_id: 1,
            next_partner_id: 1,
            next_unlock_id: 1,
            ..Tables::default()
        }
    }

    /// Rebuild the table set from an archive document. Id counters
    /// resume above the largest restored id.
    pub(crate) fn from_archive(archive: Archive) -> Result<Self, StorageError> {
        if archive.version != ARCHIVE_VERSION {
            return Err(StorageError::UnsupportedArchive {
                version: archive.version,
            });
        }
        let next = |max: Option<i64>| max.unwrap_or(0) + 1;
        Ok(Tables {
            next_activity_id: next(archive.activities.iter().map(|a| a.id).max()),
            next_partner_id: next(archive.partners.iter().map(|p| p.id).max()),
            next_unlock_id: next(archive.achievements.iter().map(|u| u.id).max()),
            activities: archive.activities,
            partners: archive.partners,
            unlocks: archive.achievements,
        })
    }

    pub(crate) fn to_archive(&self) -> Archive {
        Archive {
            version: ARCHIVE_VERSION.to_string(),
            export_date: now_rfc3339(),
            activities: self.activities.clone(),
            partners: self.partners.clone(),
            achievements: self.unlocks.clone(),
        }
    }

    // ── Activities ────────────────────────────────────────────────────────────

    pub(crate) fn add_activity(&mut self, new: NewActivity) -> i64 {
        let id = self.next_activity_id;
        self.next_activity_id += 1;
        self.activities.push(ActivityRecord {
            id,
            kind: new.kind,
            date: new.date,
            description: new.description,
            partner: new.partner,
            created_at: now_rfc3339(),
        });
        id
    }

    pub(crate) fn remove_activity(&mut self, id: i64) -> Result<(), StorageError> {
        let before = self.activities.len();
        self.activities.retain(|a| a.id != id);
        if self.activities.len() == before {
            return Err(StorageError::ActivityNotFound { id });
        }
        Ok(())
    }

    pub(crate) fn clear_activities(&mut self) {
        self.activities.clear();
    }

    pub(crate) fn list_activities(&self) -> Vec<ActivityRecord> {
        let mut rows = self.activities.clone();
        rows.sort_by(|a, b| {
            (b.date.as_str(), b.created_at.as_str(), b.id)
                .cmp(&(a.date.as_str(), a.created_at.as_str(), a.id))
        });
        rows
    }

    pub(crate) fn activities_between(&self, start: &str, end: &str) -> Vec<ActivityRecord> {
        self.list_activities()
            .into_iter()
            .filter(|a| a.date.as_str() >= start && a.date.as_str() <= end)
            .collect()
    }

    pub(crate) fn activities_of_type(&self, kind: ActivityType) -> Vec<ActivityRecord> {
        self.list_activities()
            .into_iter()
            .filter(|a| a.kind == kind)
            .collect()
    }

    // ── Partners ──────────────────────────────────────────────────────────────

    pub(crate) fn add_partner(
        &mut self,
        name: &str,
        relationship: Option<RelationshipType>,
    ) -> Result<i64, StorageError> {
        if self.partners.iter().any(|p| p.name == name) {
            return Err(StorageError::PartnerExists {
                name: name.to_string(),
            });
        }
        let id = self.next_partner_id;
        self.next_partner_id += 1;
        self.partners.push(PartnerRecord {
            id,
            name: name.to_string(),
            relationship,
            created_at: now_rfc3339(),
        });
        Ok(id)
    }

    pub(crate) fn update_partner(
        &mut self,
        id: i64,
        name: &str,
        relationship: Option<RelationshipType>,
    ) -> Result<(), StorageError> {
        if self.partners.iter().any(|p| p.name == name && p.id != id) {
            return Err(StorageError::PartnerExists {
                name: name.to_string(),
            });
        }
        let partner = self
            .partners
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StorageError::PartnerNotFound { id })?;
        partner.name = name.to_string();
        partner.relationship = relationship;
        Ok(())
    }

    pub(crate) fn remove_partner(&mut self, id: i64) -> Result<(), StorageError> {
        let before = self.partners.len();
        self.partners.retain(|p| p.id != id);
        if self.partners.len() == before {
            return Err(StorageError::PartnerNotFound { id });
        }
        Ok(())
    }

    pub(crate) fn clear_partners(&mut self) {
        self.partners.clear();
    }

    pub(crate) fn list_partners(&self) -> Vec<PartnerSummary> {
        let mut rows = self.partners.clone();
        rows.sort_by(|a, b| (b.created_at.as_str(), b.id).cmp(&(a.created_at.as_str(), a.id)));
        rows.iter()
            .map(|p| PartnerSummary {
                id: p.id,
                name: p.name.clone(),
                relationship: p.relationship,
                activity_count: self
                    .activities
                    .iter()
                    .filter(|a| a.partner.as_deref() == Some(p.name.as_str()))
                    .count(),
            })
            .collect()
    }

    // ── Unlocks ───────────────────────────────────────────────────────────────

    pub(crate) fn record_unlock(&mut self, achievement_id: &str) -> bool {
        if self
            .unlocks
            .iter()
            .any(|u| u.achievement_id == achievement_id)
        {
            return false;
        }
        let id = self.next_unlock_id;
        self.next_unlock_id += 1;
        self.unlocks.push(UnlockRecord {
            id,
            achievement_id: achievement_id.to_string(),
            unlocked_at: now_rfc3339(),
        });
        true
    }

    pub(crate) fn list_unlocks(&self) -> Vec<UnlockRecord> {
        let mut rows = self.unlocks.clone();
        rows.sort_by(|a, b| (b.unlocked_at.as_str(), b.id).cmp(&(a.unlocked_at.as_str(), a.id)));
        rows
    }

    pub(crate) fn clear_unlocks(&mut self) {
        self.unlocks.clear();
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
