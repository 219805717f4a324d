//! PostgreSQL implementation of ActivityRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use mediatrack_core::entities::{ActivityFilters, ActivityRecord};
use mediatrack_core::traits::{
    ActivityPage, ActivityRepository, RepoResult, TypeCount, UserActivityCount,
};

use crate::models::{ActivityModel, TypeCountModel, UserCountModel};

use super::error::map_db_error;

const ACTIVITY_COLUMNS: &str =
    "id, type, entity, entity_id, entity_name, user_id, details, created_at";

/// PostgreSQL implementation of ActivityRepository
#[derive(Clone)]
pub struct PgActivityRepository {
    pool: PgPool,
}

impl PgActivityRepository {
    /// Create a new PgActivityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the conjunctive filter predicate to a query.
///
/// Used for both the page SELECT and the COUNT so the two are always computed
/// from an equivalent predicate.
fn push_filters<'qb>(qb: &mut QueryBuilder<'qb, Postgres>, filters: &'qb ActivityFilters) {
    if let Some(t) = filters.activity_type {
        qb.push(" AND type = ").push_bind(t.as_str());
    }
    if let Some(e) = filters.entity {
        qb.push(" AND entity = ").push_bind(e.as_str());
    }
    if let Some(user_id) = filters.user_id {
        qb.push(" AND user_id = ").push_bind(user_id);
    }
    if let Some(start) = filters.start_date {
        qb.push(" AND created_at >= ").push_bind(start);
    }
    if let Some(end) = filters.end_date {
        qb.push(" AND created_at <= ").push_bind(end);
    }
}

#[async_trait]
impl ActivityRepository for PgActivityRepository {
    #[instrument(skip(self, record), fields(activity_id = %record.id))]
    async fn append(&self, record: &ActivityRecord) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO activities (id, type, entity, entity_id, entity_name, user_id, details, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(record.id)
        .bind(record.activity_type.as_str())
        .bind(record.entity.as_str())
        .bind(&record.entity_id)
        .bind(&record.entity_name)
        .bind(record.user_id)
        .bind(&record.details)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_page(
        &self,
        filters: &ActivityFilters,
        limit: i64,
        offset: i64,
    ) -> RepoResult<ActivityPage> {
        // Rows and count must agree, so both run in one transaction
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let mut count_query =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM activities WHERE 1=1");
        push_filters(&mut count_query, filters);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let mut page_query = QueryBuilder::<Postgres>::new(format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities WHERE 1=1"
        ));
        push_filters(&mut page_query, filters);
        // Descending by timestamp; id breaks ties so pages never overlap
        page_query.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        page_query.push_bind(limit);
        page_query.push(" OFFSET ");
        page_query.push_bind(offset);

        let models: Vec<ActivityModel> = page_query
            .build_query_as()
            .fetch_all(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        let records = models
            .into_iter()
            .map(ActivityRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ActivityPage { records, total })
    }

    #[instrument(skip(self))]
    async fn count_by_type(&self, since: DateTime<Utc>) -> RepoResult<Vec<TypeCount>> {
        let rows = sqlx::query_as::<_, TypeCountModel>(
            r#"
            SELECT type, COUNT(*) AS count
            FROM activities
            WHERE created_at >= $1
            GROUP BY type
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(TypeCount::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn top_users(
        &self,
        since: DateTime<Utc>,
        limit: i64,
    ) -> RepoResult<Vec<UserActivityCount>> {
        let rows = sqlx::query_as::<_, UserCountModel>(
            r#"
            SELECT user_id, COUNT(*) AS count
            FROM activities
            WHERE created_at >= $1
            GROUP BY user_id
            ORDER BY count DESC, user_id ASC
            LIMIT $2
            "#,
        )
        .bind(since)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| UserActivityCount {
                user_id: row.user_id,
                count: row.count,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn total_count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM activities")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn distinct_user_count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(DISTINCT user_id) FROM activities")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn last_activity_at(&self) -> RepoResult<Option<DateTime<Utc>>> {
        sqlx::query_scalar::<_, Option<DateTime<Utc>>>("SELECT MAX(created_at) FROM activities")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
