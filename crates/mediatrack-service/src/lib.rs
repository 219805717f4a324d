//! # mediatrack-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ActivityListResponse, ActivityResponse, ActivityStatsResponse, ActivitySummaryResponse,
    ActivityTypeBreakdown, ChartPointResponse, HealthResponse, LogActivityRequest,
    ReadinessResponse, TopUserResponse,
};
pub use services::{
    ActivityService, ContextBuildError, DashboardService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
