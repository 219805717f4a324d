//! Activity filter extractor
//!
//! Parses the optional filter query parameters of the activity list endpoint
//! into typed domain filters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use mediatrack_core::{ActivityFilters, ActivityType, EntityKind};

use crate::response::ApiError;

/// Raw filter query parameters for GET /activities
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    pub entity: Option<String>,
    pub user_id: Option<Uuid>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Typed activity filters parsed from the query string.
///
/// Unknown `type` or `entity` tokens reject the request; an unknown filter
/// should fail loudly instead of silently matching nothing.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilterQuery(pub ActivityFilters);

impl TryFrom<FilterParams> for ActivityFilterQuery {
    type Error = ApiError;

    fn try_from(params: FilterParams) -> Result<Self, Self::Error> {
        let activity_type = params
            .activity_type
            .map(|s| s.parse::<ActivityType>())
            .transpose()?;
        let entity = params.entity.map(|s| s.parse::<EntityKind>()).transpose()?;

        if let (Some(start), Some(end)) = (params.start_date, params.end_date) {
            if start > end {
                return Err(ApiError::invalid_query(
                    "'startDate' must not be after 'endDate'",
                ));
            }
        }

        Ok(Self(ActivityFilters {
            activity_type,
            entity,
            user_id: params.user_id,
            start_date: params.start_date,
            end_date: params.end_date,
        }))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ActivityFilterQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<FilterParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        ActivityFilterQuery::try_from(params)
    }
}
