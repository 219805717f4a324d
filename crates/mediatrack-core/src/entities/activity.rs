//! Activity record entity - one immutable audit-trail entry per mutating action

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::DomainError;

/// Kind of mutation recorded in the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Create,
    Update,
    Delete,
    Import,
    Export,
}

impl ActivityType {
    /// All members of the enumeration, in wire order
    pub const ALL: [ActivityType; 5] = [
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Import,
        Self::Export,
    ];

    /// Wire token used in the database and over HTTP
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Import => "import",
            Self::Export => "export",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "import" => Ok(Self::Import),
            "export" => Ok(Self::Export),
            other => Err(DomainError::InvalidActivityType(other.to_string())),
        }
    }
}

/// Tracked entity kinds - the tables whose mutations are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    MediaContact,
    Outlet,
    Publisher,
    Beat,
    Category,
    Country,
    Language,
    Region,
}

impl EntityKind {
    /// Wire token used in the database and over HTTP
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MediaContact => "media_contact",
            Self::Outlet => "outlet",
            Self::Publisher => "publisher",
            Self::Beat => "beat",
            Self::Category => "category",
            Self::Country => "country",
            Self::Language => "language",
            Self::Region => "region",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "media_contact" => Ok(Self::MediaContact),
            "outlet" => Ok(Self::Outlet),
            "publisher" => Ok(Self::Publisher),
            "beat" => Ok(Self::Beat),
            "category" => Ok(Self::Category),
            "country" => Ok(Self::Country),
            "language" => Ok(Self::Language),
            "region" => Ok(Self::Region),
            other => Err(DomainError::InvalidEntityKind(other.to_string())),
        }
    }
}

/// Immutable audit-trail entry for one mutating action on a tracked entity.
///
/// Records are append-only: no update or delete exists from application logic.
/// `entity_name` is a denormalized snapshot captured at write time so history
/// survives later deletion or renaming of the referenced row.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub id: Uuid,
    pub activity_type: ActivityType,
    pub entity: EntityKind,
    /// Identifier of the affected row. Not enforced as a live foreign key;
    /// the referenced entity may be deleted after logging.
    pub entity_id: String,
    /// Display name snapshot taken at write time
    pub entity_name: String,
    pub user_id: Uuid,
    /// Free-form structured payload describing the change; opaque to queries
    pub details: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
}

impl ActivityRecord {
    /// Create a new activity record with a fresh id
    pub fn new(
        activity_type: ActivityType,
        entity: EntityKind,
        entity_id: impl Into<String>,
        entity_name: impl Into<String>,
        user_id: Uuid,
        details: Option<JsonValue>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            activity_type,
            entity,
            entity_id: entity_id.into(),
            entity_name: entity_name.into(),
            user_id,
            details,
            created_at,
        }
    }
}

/// Query-time filters over the activity log. All present predicates AND together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFilters {
    pub activity_type: Option<ActivityType>,
    pub entity: Option<EntityKind>,
    pub user_id: Option<Uuid>,
    /// Inclusive lower bound on `created_at`
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`
    pub end_date: Option<DateTime<Utc>>,
}

impl ActivityFilters {
    /// True when no predicate is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activity_type.is_none()
            && self.entity.is_none()
            && self.user_id.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Check whether a record satisfies every present predicate
    #[must_use]
    pub fn matches(&self, record: &ActivityRecord) -> bool {
        if let Some(t) = self.activity_type {
            if record.activity_type != t {
                return false;
            }
        }
        if let Some(e) = self.entity {
            if record.entity != e {
                return false;
            }
        }
        if let Some(u) = self.user_id {
            if record.user_id != u {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if record.created_at < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if record.created_at > end {
                return false;
            }
        }
        true
    }
}
