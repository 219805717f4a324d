//! In-memory repository implementations for service unit tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use mediatrack_common::JwtService;
use mediatrack_core::traits::{
    ActivityPage, ActivityRepository, ContactRepository, DimensionRow, RepoResult, TypeCount,
    UserActivityCount, UserRepository,
};
use mediatrack_core::{ActivityFilters, ActivityRecord, ActivityType, DomainError, UserDisplay};
use mediatrack_db::PgPool;

use super::context::ServiceContext;

/// Activity store backed by a Vec, mirroring the SQL ordering rules
#[derive(Default)]
pub struct InMemoryActivityRepository {
    records: Mutex<Vec<ActivityRecord>>,
    fail_next: AtomicBool,
}

impl InMemoryActivityRepository {
    pub fn record_count(&self) -> usize {
        self.records.lock().len()
    }

    /// Make the next repository call return a database error
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn seed_record(
        &self,
        activity_type: &str,
        entity: &str,
        user_id: Uuid,
        created_at: DateTime<Utc>,
    ) {
        let record = ActivityRecord::new(
            activity_type.parse().unwrap(),
            entity.parse().unwrap(),
            "seed-id",
            "seed-name",
            user_id,
            None,
            created_at,
        );
        self.records.lock().push(record);
    }

    fn check_fail(&self) -> RepoResult<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "simulated storage failure".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn append(&self, record: &ActivityRecord) -> RepoResult<()> {
        self.check_fail()?;
        self.records.lock().push(record.clone());
        Ok(())
    }

    async fn find_page(
        &self,
        filters: &ActivityFilters,
        limit: i64,
        offset: i64,
    ) -> RepoResult<ActivityPage> {
        self.check_fail()?;
        let records = self.records.lock();
        let mut matching: Vec<ActivityRecord> = records
            .iter()
            .filter(|r| filters.matches(r))
            .cloned()
            .collect();
        matching.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect();

        Ok(ActivityPage {
            records: page,
            total,
        })
    }

    async fn count_by_type(&self, since: DateTime<Utc>) -> RepoResult<Vec<TypeCount>> {
        self.check_fail()?;
        let records = self.records.lock();
        let mut counts = Vec::new();
        for activity_type in ActivityType::ALL {
            let count = records
                .iter()
                .filter(|r| r.activity_type == activity_type && r.created_at >= since)
                .count() as i64;
            if count > 0 {
                counts.push(TypeCount {
                    activity_type,
                    count,
                });
            }
        }
        Ok(counts)
    }

    async fn top_users(
        &self,
        since: DateTime<Utc>,
        limit: i64,
    ) -> RepoResult<Vec<UserActivityCount>> {
        self.check_fail()?;
        let records = self.records.lock();
        let mut per_user: Vec<UserActivityCount> = Vec::new();
        for record in records.iter().filter(|r| r.created_at >= since) {
            match per_user.iter_mut().find(|u| u.user_id == record.user_id) {
                Some(entry) => entry.count += 1,
                None => per_user.push(UserActivityCount {
                    user_id: record.user_id,
                    count: 1,
                }),
            }
        }
        per_user.sort_by(|a, b| b.count.cmp(&a.count).then(a.user_id.cmp(&b.user_id)));
        per_user.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(per_user)
    }

    async fn total_count(&self) -> RepoResult<i64> {
        self.check_fail()?;
        Ok(self.records.lock().len() as i64)
    }

    async fn distinct_user_count(&self) -> RepoResult<i64> {
        self.check_fail()?;
        let records = self.records.lock();
        let mut ids: Vec<Uuid> = records.iter().map(|r| r.user_id).collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids.len() as i64)
    }

    async fn last_activity_at(&self) -> RepoResult<Option<DateTime<Utc>>> {
        self.check_fail()?;
        Ok(self.records.lock().iter().map(|r| r.created_at).max())
    }
}

/// Contact-dimension store; each seeded pair carries the contact creation time
#[derive(Default)]
pub struct InMemoryContactRepository {
    categories: Mutex<Vec<(DateTime<Utc>, DimensionRow)>>,
    countries: Mutex<Vec<(DateTime<Utc>, DimensionRow)>>,
    beats: Mutex<Vec<(DateTime<Utc>, DimensionRow)>>,
}

impl InMemoryContactRepository {
    pub fn seed_category(
        &self,
        contact_id: Uuid,
        label: &str,
        color: Option<&str>,
        created_at: DateTime<Utc>,
    ) {
        Self::seed(&self.categories, contact_id, label, color, created_at);
    }

    pub fn seed_country(
        &self,
        contact_id: Uuid,
        label: &str,
        color: Option<&str>,
        created_at: DateTime<Utc>,
    ) {
        Self::seed(&self.countries, contact_id, label, color, created_at);
    }

    pub fn seed_beat(
        &self,
        contact_id: Uuid,
        label: &str,
        color: Option<&str>,
        created_at: DateTime<Utc>,
    ) {
        Self::seed(&self.beats, contact_id, label, color, created_at);
    }

    fn seed(
        store: &Mutex<Vec<(DateTime<Utc>, DimensionRow)>>,
        contact_id: Uuid,
        label: &str,
        color: Option<&str>,
        created_at: DateTime<Utc>,
    ) {
        store.lock().push((
            created_at,
            DimensionRow {
                contact_id,
                label: label.to_string(),
                color: color.map(String::from),
            },
        ));
    }

    fn rows_since(
        store: &Mutex<Vec<(DateTime<Utc>, DimensionRow)>>,
        since: DateTime<Utc>,
    ) -> Vec<DimensionRow> {
        let mut pairs: Vec<(DateTime<Utc>, DimensionRow)> = store
            .lock()
            .iter()
            .filter(|(ts, _)| *ts >= since)
            .cloned()
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.label.cmp(&b.1.label)));
        pairs.into_iter().map(|(_, row)| row).collect()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn category_rows_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<DimensionRow>> {
        Ok(Self::rows_since(&self.categories, since))
    }

    async fn country_rows_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<DimensionRow>> {
        Ok(Self::rows_since(&self.countries, since))
    }

    async fn beat_rows_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<DimensionRow>> {
        Ok(Self::rows_since(&self.beats, since))
    }
}

/// User display store
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<UserDisplay>>,
}

impl InMemoryUserRepository {
    pub fn seed_user(&self, id: Uuid, name: &str, email: &str) {
        self.users.lock().push(UserDisplay {
            id,
            name: name.to_string(),
            email: email.to_string(),
        });
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_display(&self, ids: &[Uuid]) -> RepoResult<Vec<UserDisplay>> {
        let users = self.users.lock();
        Ok(users.iter().filter(|u| ids.contains(&u.id)).cloned().collect())
    }
}

/// Bundle of in-memory repositories shared between the test and the context
pub struct TestRepos {
    pub activity: Arc<InMemoryActivityRepository>,
    pub contacts: Arc<InMemoryContactRepository>,
    pub users: Arc<InMemoryUserRepository>,
}

impl TestRepos {
    pub fn new() -> Self {
        Self {
            activity: Arc::new(InMemoryActivityRepository::default()),
            contacts: Arc::new(InMemoryContactRepository::default()),
            users: Arc::new(InMemoryUserRepository::default()),
        }
    }
}

/// Build a context over the given repositories. The pool is lazy and never
/// connected; no test path touches it.
pub fn test_context(repos: &TestRepos) -> ServiceContext {
    let pool = PgPool::connect_lazy("postgresql://localhost:5432/mediatrack_test")
        .expect("lazy pool");

    ServiceContext::builder()
        .pool(pool)
        .activity_repo(repos.activity.clone())
        .contact_repo(repos.contacts.clone())
        .user_repo(repos.users.clone())
        .jwt_service(Arc::new(JwtService::new("test-secret-key", 3600)))
        .build()
        .expect("test context")
}
