//! Activity handlers
//!
//! Endpoints for logging activities and querying the activity log.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use mediatrack_core::TimeRange;
use mediatrack_service::{
    ActivityListResponse, ActivityResponse, ActivityService, ActivityStatsResponse,
    ActivitySummaryResponse, LogActivityRequest,
};

use crate::extractors::{ActivityFilterQuery, AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get recent activities with optional filters
///
/// GET /activities
pub async fn list_activities(
    State(state): State<AppState>,
    _auth: AuthUser,
    pagination: Pagination,
    filters: ActivityFilterQuery,
) -> ApiResult<Json<ActivityListResponse>> {
    let service = ActivityService::new(state.service_context());
    let response = service
        .get_recent_activities(pagination.limit, pagination.offset, filters.0)
        .await?;
    Ok(Json(response))
}

/// Log an activity
///
/// POST /activities
pub async fn log_activity(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<LogActivityRequest>,
) -> ApiResult<Created<Json<ActivityResponse>>> {
    let service = ActivityService::new(state.service_context());
    let response = service.log_activity(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Stats range query parameter
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde(default = "default_stats_range")]
    pub range: String,
}

fn default_stats_range() -> String {
    "30d".to_string()
}

/// Get windowed activity statistics
///
/// GET /activities/stats
pub async fn activity_stats(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<StatsQuery>,
) -> ApiResult<Json<ActivityStatsResponse>> {
    let range: TimeRange = query.range.parse()?;

    let service = ActivityService::new(state.service_context());
    let response = service.get_activity_stats(range).await?;
    Ok(Json(response))
}

/// Get the all-time activity summary
///
/// GET /activities/summary
pub async fn activity_summary(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<ActivitySummaryResponse>> {
    let service = ActivityService::new(state.service_context());
    let response = service.get_activity_summary().await?;
    Ok(Json(response))
}
