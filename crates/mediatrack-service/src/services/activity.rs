//! Activity service
//!
//! Appends audit-trail records and answers paginated, filtered, and
//! aggregated queries over the activity log.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use mediatrack_cache::keys;
use mediatrack_core::{ActivityFilters, ActivityRecord, ActivityType, EntityKind, TimeRange};

use crate::dto::{
    ActivityListResponse, ActivityResponse, ActivityStatsResponse, ActivitySummaryResponse,
    ActivityTypeBreakdown, LogActivityRequest, TopUserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Number of entries in the top-users ranking
const TOP_USERS_LIMIT: i64 = 5;

/// Display placeholders for users deleted since their activity was logged.
/// History keeps the row; only the live display lookup fails.
const UNKNOWN_USER_NAME: &str = "Unknown";
const UNKNOWN_USER_EMAIL: &str = "unknown@example.com";

/// Activity tracking service
pub struct ActivityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActivityService<'a> {
    /// Create a new ActivityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append one immutable activity record.
    ///
    /// Storage failure propagates to the caller. For mutation flows whose
    /// primary write already succeeded, the recommended policy is to log the
    /// failure and continue rather than roll back the mutation.
    #[instrument(skip(self, request))]
    pub async fn log_activity(
        &self,
        user_id: Uuid,
        request: LogActivityRequest,
    ) -> ServiceResult<ActivityResponse> {
        let activity_type: ActivityType = request.activity_type.parse()?;
        let entity: EntityKind = request.entity.parse()?;

        let record = ActivityRecord::new(
            activity_type,
            entity,
            request.entity_id,
            request.entity_name,
            user_id,
            request.details,
            self.ctx.clock().now(),
        );

        self.ctx.activity_repo().append(&record).await?;

        info!(
            activity_id = %record.id,
            %activity_type,
            %entity,
            "Activity logged"
        );

        // Every cached activity aggregate is stale now
        self.ctx.cache().clear_by_prefix(keys::ACTIVITY_PREFIX);

        Ok(ActivityResponse::from(record))
    }

    /// Fetch one page of the activity log, newest first.
    ///
    /// The page and its `total_count` come from an equivalent predicate, so
    /// `has_more == (offset + limit < total_count)` always holds.
    #[instrument(skip(self))]
    pub async fn get_recent_activities(
        &self,
        limit: i64,
        offset: i64,
        filters: ActivityFilters,
    ) -> ServiceResult<ActivityListResponse> {
        if limit < 0 {
            return Err(ServiceError::validation("limit must be non-negative"));
        }
        if offset < 0 {
            return Err(ServiceError::validation("offset must be non-negative"));
        }

        let page = self
            .ctx
            .activity_repo()
            .find_page(&filters, limit, offset)
            .await?;

        let has_more = offset + limit < page.total;

        Ok(ActivityListResponse {
            activities: page.records.into_iter().map(ActivityResponse::from).collect(),
            total_count: page.total,
            has_more,
        })
    }

    /// Time-windowed statistics: total, per-type breakdown, top users.
    ///
    /// All-or-nothing: a failure in any sub-query fails the whole call, since
    /// partial dashboard data is more misleading than an explicit error.
    #[instrument(skip(self))]
    pub async fn get_activity_stats(
        &self,
        range: TimeRange,
    ) -> ServiceResult<ActivityStatsResponse> {
        // The stats window is intentionally narrower than the chart window
        if range == TimeRange::LastYear {
            return Err(ServiceError::validation(
                "stats range must be one of 7d, 30d, 3m",
            ));
        }

        let cache_key = keys::activity_stats(range);
        if let Some(cached) = self.ctx.cache().get_as::<ActivityStatsResponse>(&cache_key) {
            return Ok(cached);
        }

        let since = range.since(self.ctx.clock().now());

        let by_type =
            ActivityTypeBreakdown::from_counts(&self.ctx.activity_repo().count_by_type(since).await?);
        let top = self
            .ctx
            .activity_repo()
            .top_users(since, TOP_USERS_LIMIT)
            .await?;

        // Resolve display info in one lookup; deleted users fall back to
        // placeholders instead of failing the query
        let ids: Vec<Uuid> = top.iter().map(|u| u.user_id).collect();
        let display: HashMap<Uuid, _> = self
            .ctx
            .user_repo()
            .find_display(&ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let top_users = top
            .into_iter()
            .map(|entry| match display.get(&entry.user_id) {
                Some(user) => TopUserResponse {
                    user_id: entry.user_id,
                    name: user.name.clone(),
                    email: user.email.clone(),
                    activity_count: entry.count,
                },
                None => TopUserResponse {
                    user_id: entry.user_id,
                    name: UNKNOWN_USER_NAME.to_string(),
                    email: UNKNOWN_USER_EMAIL.to_string(),
                    activity_count: entry.count,
                },
            })
            .collect();

        let response = ActivityStatsResponse {
            total: by_type.total(),
            by_type,
            top_users,
        };

        self.memoize(&cache_key, &response, self.ctx.cache_config().stats_ttl_secs);

        Ok(response)
    }

    /// All-time summary: total count, distinct users, last activity timestamp
    #[instrument(skip(self))]
    pub async fn get_activity_summary(&self) -> ServiceResult<ActivitySummaryResponse> {
        let cache_key = keys::activity_summary();
        if let Some(cached) = self
            .ctx
            .cache()
            .get_as::<ActivitySummaryResponse>(&cache_key)
        {
            return Ok(cached);
        }

        let repo = self.ctx.activity_repo();
        let response = ActivitySummaryResponse {
            total_activities: repo.total_count().await?,
            distinct_users: repo.distinct_user_count().await?,
            last_activity_at: repo.last_activity_at().await?,
        };

        self.memoize(
            &cache_key,
            &response,
            self.ctx.cache_config().summary_ttl_secs,
        );

        Ok(response)
    }

    /// Cache writes are best-effort; a failure degrades to recomputing later
    fn memoize<T: serde::Serialize>(&self, key: &str, value: &T, ttl_secs: u64) {
        if let Err(e) = self
            .ctx
            .cache()
            .set(key, value, Duration::from_secs(ttl_secs))
        {
            warn!(key, error = %e, "Failed to cache aggregation result");
        }
    }
}
