//! Response DTOs for API endpoints
//!
//! All response DTOs serialize to camelCase JSON for the dashboard frontend.
//! They also implement `Deserialize` because computed aggregates are memoized
//! in the cache and read back as typed values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use mediatrack_core::{ActivityRecord, ActivityType, EntityKind, TypeCount};

// ============================================================================
// Activity Responses
// ============================================================================

/// One activity record as exposed to the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub entity: EntityKind,
    pub entity_id: String,
    pub entity_name: String,
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
    pub timestamp: DateTime<Utc>,
}

impl From<ActivityRecord> for ActivityResponse {
    fn from(record: ActivityRecord) -> Self {
        Self {
            id: record.id,
            activity_type: record.activity_type,
            entity: record.entity,
            entity_id: record.entity_id,
            entity_name: record.entity_name,
            user_id: record.user_id,
            details: record.details,
            timestamp: record.created_at,
        }
    }
}

/// One page of activity records.
///
/// An empty page (`activities: [], totalCount: 0, hasMore: false`) is a valid
/// result, distinct from an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityListResponse {
    pub activities: Vec<ActivityResponse>,
    pub total_count: i64,
    pub has_more: bool,
}

/// Per-type activity counts. All five enumeration members are always
/// present, defaulting to 0, so chart legends never lose a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTypeBreakdown {
    pub create: i64,
    pub update: i64,
    pub delete: i64,
    pub import: i64,
    pub export: i64,
}

impl ActivityTypeBreakdown {
    /// Zero-filled breakdown updated from grouped counts
    #[must_use]
    pub fn from_counts(counts: &[TypeCount]) -> Self {
        let mut breakdown = Self::default();
        for tc in counts {
            match tc.activity_type {
                ActivityType::Create => breakdown.create = tc.count,
                ActivityType::Update => breakdown.update = tc.count,
                ActivityType::Delete => breakdown.delete = tc.count,
                ActivityType::Import => breakdown.import = tc.count,
                ActivityType::Export => breakdown.export = tc.count,
            }
        }
        breakdown
    }

    /// Sum over all five types. Equals the windowed total since every record
    /// has exactly one type.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.create + self.update + self.delete + self.import + self.export
    }
}

/// One entry in the top-users ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUserResponse {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub activity_count: i64,
}

/// Time-windowed activity statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStatsResponse {
    pub total: i64,
    pub by_type: ActivityTypeBreakdown,
    pub top_users: Vec<TopUserResponse>,
}

/// All-time activity summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummaryResponse {
    pub total_activities: i64,
    pub distinct_users: i64,
    /// None when the log is empty
    pub last_activity_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

/// One bucket of a dashboard chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPointResponse {
    pub label: String,
    pub value: i64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "not_ready" }.to_string(),
            database,
        }
    }
}
