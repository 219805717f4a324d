//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate`. Enum-valued
//! fields arrive as raw tokens and are parsed in the service so out-of-enum
//! values fail with a proper validation error instead of a deserialization
//! error.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use validator::Validate;

/// Request to append one activity record.
///
/// The acting user is not part of the body; it comes from the auth boundary.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LogActivityRequest {
    /// Activity type token: create, update, delete, import, export
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 32))]
    pub activity_type: String,

    /// Tracked entity kind token, e.g. media_contact
    #[validate(length(min = 1, max = 32))]
    pub entity: String,

    /// Identifier of the affected row
    #[validate(length(min = 1, max = 255))]
    pub entity_id: String,

    /// Display name snapshot captured by the caller at mutation time
    #[validate(length(min = 1, max = 255))]
    pub entity_name: String,

    /// Free-form structured payload describing the change
    #[serde(default)]
    pub details: Option<JsonValue>,
}
