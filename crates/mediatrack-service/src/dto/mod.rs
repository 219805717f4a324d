//! Data transfer objects for the HTTP boundary

mod requests;
mod responses;

pub use requests::LogActivityRequest;
pub use responses::{
    ActivityListResponse, ActivityResponse, ActivityStatsResponse, ActivitySummaryResponse,
    ActivityTypeBreakdown, ChartPointResponse, HealthResponse, ReadinessResponse, TopUserResponse,
};
