//! Contact-dimension join row model

use sqlx::FromRow;
use uuid::Uuid;

/// One (contact, dimension value) pair from a chart join query.
/// A contact with three categories yields three rows.
#[derive(Debug, Clone, FromRow)]
pub struct DimensionRowModel {
    pub contact_id: Uuid,
    pub label: String,
    /// Stored display color of the dimension value, if any
    pub color: Option<String>,
}
