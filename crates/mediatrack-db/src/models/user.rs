//! User display row model

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the display slice of the `users` table
#[derive(Debug, Clone, FromRow)]
pub struct UserDisplayModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}
