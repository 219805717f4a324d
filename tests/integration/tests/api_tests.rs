//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the shared application schema
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Boundary Tests
// ============================================================================

#[tokio::test]
async fn test_activities_require_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/activities").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post("/api/v1/activities", &LogActivityRequest::contact_created())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_auth("/api/v1/activities", "not-a-real-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Activity Log Tests
// ============================================================================

#[tokio::test]
async fn test_log_activity_returns_created() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = Uuid::new_v4();
    let token = server.token_for(user_id).unwrap();

    let request = LogActivityRequest::contact_created();
    let response = server
        .post_auth("/api/v1/activities", &token, &request)
        .await
        .unwrap();
    let activity: ActivityResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(activity.activity_type, "create");
    assert_eq!(activity.entity, "media_contact");
    assert_eq!(activity.entity_name, request.entity_name);
    assert_eq!(activity.user_id, user_id.to_string());
}

#[tokio::test]
async fn test_log_activity_rejects_unknown_type() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(Uuid::new_v4()).unwrap();

    let request = LogActivityRequest::with_type("archive");
    let response = server
        .post_auth("/api/v1/activities", &token, &request)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_ACTIVITY_TYPE");
}

#[tokio::test]
async fn test_log_activity_rejects_unknown_entity() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(Uuid::new_v4()).unwrap();

    let request = LogActivityRequest::with_entity("newsletter");
    let response = server
        .post_auth("/api/v1/activities", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_log_activity_preserves_details() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(Uuid::new_v4()).unwrap();

    let mut request = LogActivityRequest::with_type("update");
    request.details = Some(json!({"changed": ["email"], "rows": 1}));
    let response = server
        .post_auth("/api/v1/activities", &token, &request)
        .await
        .unwrap();
    let activity: ActivityResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(activity.details.unwrap()["rows"], 1);
}

#[tokio::test]
async fn test_list_activities_pagination() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    // A fresh user id isolates this test's records via the userId filter
    let user_id = Uuid::new_v4();
    let token = server.token_for(user_id).unwrap();

    for _ in 0..3 {
        let response = server
            .post_auth(
                "/api/v1/activities",
                &token,
                &LogActivityRequest::contact_created(),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let path = format!("/api/v1/activities?limit=2&offset=0&userId={user_id}");
    let response = server.get_auth(&path, &token).await.unwrap();
    let page: ActivityListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.total_count, 3);
    assert_eq!(page.activities.len(), 2);
    assert!(page.has_more);
    // Newest first
    assert!(page.activities[0].timestamp >= page.activities[1].timestamp);

    let path = format!("/api/v1/activities?limit=2&offset=2&userId={user_id}");
    let response = server.get_auth(&path, &token).await.unwrap();
    let page: ActivityListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.activities.len(), 1);
    assert!(!page.has_more);
}

#[tokio::test]
async fn test_list_activities_filters_conjunctively() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = Uuid::new_v4();
    let token = server.token_for(user_id).unwrap();

    for request in [
        LogActivityRequest::contact_created(),
        LogActivityRequest::with_type("update"),
        LogActivityRequest::with_entity("outlet"),
    ] {
        server
            .post_auth("/api/v1/activities", &token, &request)
            .await
            .unwrap();
    }

    let path = format!("/api/v1/activities?type=create&entity=media_contact&userId={user_id}");
    let response = server.get_auth(&path, &token).await.unwrap();
    let page: ActivityListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.total_count, 1);
    for activity in &page.activities {
        assert_eq!(activity.activity_type, "create");
        assert_eq!(activity.entity, "media_contact");
        assert_eq!(activity.user_id, user_id.to_string());
    }
}

#[tokio::test]
async fn test_negative_pagination_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(Uuid::new_v4()).unwrap();

    let response = server
        .get_auth("/api/v1/activities?limit=-1", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get_auth("/api/v1/activities?offset=-5", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Stats and Summary Tests
// ============================================================================

#[tokio::test]
async fn test_activity_stats_shape() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(Uuid::new_v4()).unwrap();

    server
        .post_auth(
            "/api/v1/activities",
            &token,
            &LogActivityRequest::contact_created(),
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/activities/stats?range=30d", &token)
        .await
        .unwrap();
    let stats: ActivityStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(stats.total >= 1);
    assert_eq!(stats.by_type.total(), stats.total);
    assert!(stats.top_users.len() <= 5);
    for pair in stats.top_users.windows(2) {
        assert!(pair[0].activity_count >= pair[1].activity_count);
    }
}

#[tokio::test]
async fn test_stats_rejects_year_range() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(Uuid::new_v4()).unwrap();

    let response = server
        .get_auth("/api/v1/activities/stats?range=1y", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_stats_rejects_unknown_range() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(Uuid::new_v4()).unwrap();

    let response = server
        .get_auth("/api/v1/activities/stats?range=2w", &token)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_TIME_RANGE");
}

#[tokio::test]
async fn test_activity_summary() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(Uuid::new_v4()).unwrap();

    server
        .post_auth(
            "/api/v1/activities",
            &token,
            &LogActivityRequest::contact_created(),
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/activities/summary", &token)
        .await
        .unwrap();
    let summary: ActivitySummaryResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(summary.total_activities >= 1);
    assert!(summary.distinct_users >= 1);
    assert!(summary.last_activity_at.is_some());
}

// ============================================================================
// Dashboard Chart Tests
// ============================================================================

#[tokio::test]
async fn test_chart_data_returns_series() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(Uuid::new_v4()).unwrap();

    let response = server
        .get_auth("/api/v1/dashboard/charts?type=category&range=3m", &token)
        .await
        .unwrap();
    let series: Vec<ChartPointResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    for point in &series {
        assert!(!point.label.is_empty());
        assert!(point.value >= 1);
        assert!(point.color.starts_with('#'));
    }
}

#[tokio::test]
async fn test_country_chart_capped_and_sorted() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(Uuid::new_v4()).unwrap();

    let response = server
        .get_auth("/api/v1/dashboard/charts?type=country&range=1y", &token)
        .await
        .unwrap();
    let series: Vec<ChartPointResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(series.len() <= 10);
    for pair in series.windows(2) {
        assert!(pair[0].value >= pair[1].value);
    }
}

#[tokio::test]
async fn test_unknown_chart_type_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(Uuid::new_v4()).unwrap();

    let response = server
        .get_auth("/api/v1/dashboard/charts?type=bogus", &token)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_CHART_TYPE");
}
