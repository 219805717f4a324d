//! Dashboard handlers
//!
//! Endpoints for chart aggregation data.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use mediatrack_core::{ChartType, TimeRange};
use mediatrack_service::{ChartPointResponse, DashboardService};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Chart query parameters
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// Dimension to group by: category, country, or beat
    #[serde(rename = "type")]
    pub chart_type: String,
    #[serde(default = "default_chart_range")]
    pub range: String,
}

fn default_chart_range() -> String {
    "3m".to_string()
}

/// Get one chart series
///
/// GET /dashboard/charts
pub async fn chart_data(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ChartQuery>,
) -> ApiResult<Json<Vec<ChartPointResponse>>> {
    let chart: ChartType = query.chart_type.parse()?;
    let range: TimeRange = query.range.parse()?;

    let service = DashboardService::new(state.service_context());
    let response = service.get_chart_data(chart, range).await?;
    Ok(Json(response))
}
