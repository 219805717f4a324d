//! Activity log database models

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the `activities` table
#[derive(Debug, Clone, FromRow)]
pub struct ActivityModel {
    pub id: Uuid,
    /// Activity action token stored as text
    #[sqlx(rename = "type")]
    pub activity_type: String,
    /// Tracked entity kind token stored as text
    pub entity: String,
    pub entity_id: String,
    /// Display name snapshot captured at write time
    pub entity_name: String,
    pub user_id: Uuid,
    /// Free-form JSON payload describing the change
    pub details: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
}

/// Row shape for `GROUP BY type` aggregation
#[derive(Debug, Clone, FromRow)]
pub struct TypeCountModel {
    #[sqlx(rename = "type")]
    pub activity_type: String,
    pub count: i64,
}

/// Row shape for `GROUP BY user_id` aggregation
#[derive(Debug, Clone, FromRow)]
pub struct UserCountModel {
    pub user_id: Uuid,
    pub count: i64,
}
