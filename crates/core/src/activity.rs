//! Activity and partner domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown enum value from text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value: {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

/// The closed set of activity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Sex,
    Cuddle,
    Oral,
    Anal,
    Vaginal,
    Masturbation,
    Other,
}

impl ActivityType {
    /// All kinds, in their fixed declaration order.
    pub const ALL: [ActivityType; 7] = [
        ActivityType::Sex,
        ActivityType::Cuddle,
        ActivityType::Oral,
        ActivityType::Anal,
        ActivityType::Vaginal,
        ActivityType::Masturbation,
        ActivityType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Sex => "sex",
            ActivityType::Cuddle => "cuddle",
            ActivityType::Oral => "oral",
            ActivityType::Anal => "anal",
            ActivityType::Vaginal => "vaginal",
            ActivityType::Masturbation => "masturbation",
            ActivityType::Other => "other",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// How a partner relates to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipType {
    Friend,
    Partner,
    Casual,
    OneNightStand,
    LongTerm,
    Other,
}

impl RelationshipType {
    pub const ALL: [RelationshipType; 6] = [
        RelationshipType::Friend,
        RelationshipType::Partner,
        RelationshipType::Casual,
        RelationshipType::OneNightStand,
        RelationshipType::LongTerm,
        RelationshipType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Friend => "friend",
            RelationshipType::Partner => "partner",
            RelationshipType::Casual => "casual",
            RelationshipType::OneNightStand => "one-night-stand",
            RelationshipType::LongTerm => "long-term",
            RelationshipType::Other => "other",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RelationshipType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationshipType::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// One logged activity.
///
/// `date` is kept as the raw `YYYY-MM-DD` string the caller supplied.
/// Aggregates that need calendar semantics parse it on demand and skip
/// records whose date does not parse (see [`crate::history`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub date: String,
    #[serde(default)]
    pub partner: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Activity {
    pub fn new(kind: ActivityType, date: impl Into<String>) -> Self {
        Activity {
            kind,
            date: date.into(),
            partner: None,
            description: None,
        }
    }

    pub fn with_partner(mut self, partner: impl Into<String>) -> Self {
        self.partner = Some(partner.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The partner string, if it counts as a partner reference.
    ///
    /// A reference counts only when its trimmed form is non-empty; the
    /// RAW string is returned so that distinctness and per-partner
    /// counting key on exactly what was stored.
    pub fn counting_partner(&self) -> Option<&str> {
        match &self.partner {
            Some(p) if !p.trim().is_empty() => Some(p.as_str()),
            _ => None,
        }
    }
}

/// A known partner. Accepted by the evaluator for interface symmetry;
/// current rules derive partner information from `Activity::partner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
    #[serde(default)]
    pub relationship: Option<RelationshipType>,
}

impl Partner {
    pub fn new(name: impl Into<String>) -> Self {
        Partner {
            name: name.into(),
            relationship: None,
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
