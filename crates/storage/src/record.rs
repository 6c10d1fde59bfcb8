use serde::{Deserialize, Serialize};

use intimetrics_core::{Activity, ActivityType, Partner, RelationshipType};

/// Version string written to (and accepted from) archive documents.
pub const ARCHIVE_VERSION: &str = "1.0.0";

/// A stored activity row.
///
/// Field names serialize in the archive's camelCase convention, with
/// `kind` appearing as `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub partner: Option<String>,
    /// ISO 8601 / RFC 3339 timestamp string.
    pub created_at: String,
}

impl ActivityRecord {
    /// Project the row down to the evaluator's input shape.
    pub fn to_activity(&self) -> Activity {
        Activity {
            kind: self.kind,
            date: self.date.clone(),
            partner: self.partner.clone(),
            description: self.description.clone(),
        }
    }
}

/// Insert payload for a new activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub kind: ActivityType,
    pub date: String,
    pub description: Option<String>,
    pub partner: Option<String>,
}

/// A stored partner row. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRecord {
    pub id: i64,
    pub name: String,
    #[serde(default, rename = "relationshipType")]
    pub relationship: Option<RelationshipType>,
    /// ISO 8601 / RFC 3339 timestamp string.
    pub created_at: String,
}

impl PartnerRecord {
    pub fn to_partner(&self) -> Partner {
        Partner {
            name: self.name.clone(),
            relationship: self.relationship,
        }
    }
}

/// A partner row joined with its activity count, the list view shape.
///
/// The count joins on raw name equality with `ActivityRecord::partner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerSummary {
    pub id: i64,
    pub name: String,
    #[serde(default, rename = "relationshipType")]
    pub relationship: Option<RelationshipType>,
    pub activity_count: usize,
}

impl PartnerSummary {
    pub fn to_partner(&self) -> Partner {
        Partner {
            name: self.name.clone(),
            relationship: self.relationship,
        }
    }
}

/// A persisted achievement unlock. At most one row per achievement id
/// ever exists; unlocking is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockRecord {
    pub id: i64,
    pub achievement_id: String,
    /// ISO 8601 / RFC 3339 timestamp string.
    pub unlocked_at: String,
}

/// The export/import document. Also the on-disk shape of [`crate::JsonStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    pub version: String,
    /// ISO 8601 / RFC 3339 timestamp string.
    pub export_date: String,
    pub activities: Vec<ActivityRecord>,
    pub partners: Vec<PartnerRecord>,
    pub achievements: Vec<UnlockRecord>,
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
