//! PostgreSQL implementation of ContactRepository
//!
//! Each query returns one row per (contact, dimension value) membership pair,
//! so a contact with several categories appears once per category. Counting
//! rows per label in the service yields the multi-membership aggregate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use mediatrack_core::traits::{ContactRepository, DimensionRow, RepoResult};

use crate::models::DimensionRowModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ContactRepository
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new PgContactRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_rows(&self, sql: &str, since: DateTime<Utc>) -> RepoResult<Vec<DimensionRow>> {
        let rows = sqlx::query_as::<_, DimensionRowModel>(sql)
            .bind(since)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(DimensionRow::from).collect())
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    #[instrument(skip(self))]
    async fn category_rows_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<DimensionRow>> {
        self.fetch_rows(
            r#"
            SELECT mc.id AS contact_id, c.name AS label, c.color
            FROM media_contacts mc
            JOIN contact_categories cc ON cc.contact_id = mc.id
            JOIN categories c ON c.id = cc.category_id
            WHERE mc.created_at >= $1
            ORDER BY mc.created_at ASC, c.name ASC
            "#,
            since,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn country_rows_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<DimensionRow>> {
        self.fetch_rows(
            r#"
            SELECT mc.id AS contact_id, co.name AS label, co.color
            FROM media_contacts mc
            JOIN contact_countries cn ON cn.contact_id = mc.id
            JOIN countries co ON co.id = cn.country_id
            WHERE mc.created_at >= $1
            ORDER BY mc.created_at ASC, co.name ASC
            "#,
            since,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn beat_rows_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<DimensionRow>> {
        self.fetch_rows(
            r#"
            SELECT mc.id AS contact_id, b.name AS label, b.color
            FROM media_contacts mc
            JOIN contact_beats cb ON cb.contact_id = mc.id
            JOIN beats b ON b.id = cb.beat_id
            WHERE mc.created_at >= $1
            ORDER BY mc.created_at ASC, b.name ASC
            "#,
            since,
        )
        .await
    }
}
