//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Services depend only on these traits, which
//! keeps aggregation logic testable against in-memory implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{ActivityFilters, ActivityRecord, ActivityType, UserDisplay};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// One page of activity records together with the total count for the same
/// predicate. The two must come from an equivalent query so `has_more` math
/// stays consistent with the returned rows.
#[derive(Debug, Clone)]
pub struct ActivityPage {
    pub records: Vec<ActivityRecord>,
    pub total: i64,
}

/// Windowed activity count for one activity type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCount {
    pub activity_type: ActivityType,
    pub count: i64,
}

/// Windowed activity count for one user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserActivityCount {
    pub user_id: Uuid,
    pub count: i64,
}

/// One (contact, dimension value) membership pair within a chart window.
///
/// A contact with three categories produces three rows; counting rows per
/// label yields the multi-membership aggregate directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionRow {
    pub contact_id: Uuid,
    pub label: String,
    /// Stored display color of the dimension value, if any
    pub color: Option<String>,
}

// ============================================================================
// Activity Repository
// ============================================================================

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Append exactly one immutable record. No uniqueness constraint applies;
    /// duplicate logical events produce duplicate records.
    async fn append(&self, record: &ActivityRecord) -> RepoResult<()>;

    /// Fetch one page ordered by `created_at DESC, id DESC`, with the total
    /// count computed from the same filter predicate.
    async fn find_page(
        &self,
        filters: &ActivityFilters,
        limit: i64,
        offset: i64,
    ) -> RepoResult<ActivityPage>;

    /// Count records per activity type since the cutoff. Types with no
    /// records in the window are absent from the result.
    async fn count_by_type(&self, since: DateTime<Utc>) -> RepoResult<Vec<TypeCount>>;

    /// Top users by activity count since the cutoff, ordered by count
    /// descending then `user_id` ascending.
    async fn top_users(
        &self,
        since: DateTime<Utc>,
        limit: i64,
    ) -> RepoResult<Vec<UserActivityCount>>;

    /// All-time record count
    async fn total_count(&self) -> RepoResult<i64>;

    /// Count of distinct `user_id` values ever seen
    async fn distinct_user_count(&self) -> RepoResult<i64>;

    /// Timestamp of the most recent record, or None when the log is empty
    async fn last_activity_at(&self) -> RepoResult<Option<DateTime<Utc>>>;
}

// ============================================================================
// Contact Repository
// ============================================================================

/// Read access to contact-dimension relationships for dashboard charts.
/// Rows are ordered by contact creation time then label so bucket insertion
/// order is deterministic.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// (contact, category) pairs for contacts created on/after `since`
    async fn category_rows_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<DimensionRow>>;

    /// (contact, country) pairs for contacts created on/after `since`
    async fn country_rows_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<DimensionRow>>;

    /// (contact, beat) pairs for contacts created on/after `since`
    async fn beat_rows_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<DimensionRow>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Resolve display info for the given user ids. Ids with no live user are
    /// simply absent from the result; callers substitute placeholders.
    async fn find_display(&self, ids: &[Uuid]) -> RepoResult<Vec<UserDisplay>>;
}
