//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{activities, dashboard, health};
use crate::state::AppState;

/// Create the main API router (excluding health, which bypasses rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(activity_routes())
        .merge(dashboard_routes())
}

/// Activity log routes
fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(activities::list_activities))
        .route("/activities", post(activities::log_activity))
        .route("/activities/stats", get(activities::activity_stats))
        .route("/activities/summary", get(activities::activity_summary))
}

/// Dashboard routes
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard/charts", get(dashboard::chart_data))
}
