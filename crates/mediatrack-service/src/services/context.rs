//! Service context - dependency container for services
//!
//! The original design relied on module-level singletons for the activity
//! service and cache; here every dependency is constructed once at process
//! start and passed by reference, so initialization and teardown are explicit
//! and services are testable in isolation against in-memory repositories.

use std::sync::Arc;

use mediatrack_cache::MemoryCache;
use mediatrack_common::{CacheConfig, JwtService};
use mediatrack_core::traits::{ActivityRepository, ContactRepository, UserRepository};
use mediatrack_core::MonotonicClock;
use mediatrack_db::PgPool;

/// Service context containing all dependencies
///
/// Provides access to:
/// - Database repositories (behind trait objects)
/// - The in-process cache and its TTL settings
/// - JWT service for the auth boundary
/// - The monotonic write clock
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    activity_repo: Arc<dyn ActivityRepository>,
    contact_repo: Arc<dyn ContactRepository>,
    user_repo: Arc<dyn UserRepository>,
    cache: Arc<MemoryCache>,
    cache_config: CacheConfig,
    jwt_service: Arc<JwtService>,
    clock: Arc<MonotonicClock>,
}

impl ServiceContext {
    /// Start building a context
    #[must_use]
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::default()
    }

    /// Shared database pool (used by readiness checks)
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn activity_repo(&self) -> &dyn ActivityRepository {
        self.activity_repo.as_ref()
    }

    pub fn contact_repo(&self) -> &dyn ContactRepository {
        self.contact_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn cache(&self) -> &MemoryCache {
        self.cache.as_ref()
    }

    pub fn cache_config(&self) -> &CacheConfig {
        &self.cache_config
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn clock(&self) -> &MonotonicClock {
        self.clock.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("cache_entries", &self.cache.len())
            .field("cache_config", &self.cache_config)
            .finish()
    }
}

/// Builder for [`ServiceContext`]
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    activity_repo: Option<Arc<dyn ActivityRepository>>,
    contact_repo: Option<Arc<dyn ContactRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    cache: Option<Arc<MemoryCache>>,
    cache_config: Option<CacheConfig>,
    jwt_service: Option<Arc<JwtService>>,
    clock: Option<Arc<MonotonicClock>>,
}

impl ServiceContextBuilder {
    #[must_use]
    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    #[must_use]
    pub fn activity_repo(mut self, repo: Arc<dyn ActivityRepository>) -> Self {
        self.activity_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn contact_repo(mut self, repo: Arc<dyn ContactRepository>) -> Self {
        self.contact_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn cache(mut self, cache: Arc<MemoryCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    #[must_use]
    pub fn cache_config(mut self, config: CacheConfig) -> Self {
        self.cache_config = Some(config);
        self
    }

    #[must_use]
    pub fn jwt_service(mut self, jwt: Arc<JwtService>) -> Self {
        self.jwt_service = Some(jwt);
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: Arc<MonotonicClock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the context, failing if a required dependency is missing.
    /// The cache, cache config, and clock fall back to fresh defaults.
    pub fn build(self) -> Result<ServiceContext, ContextBuildError> {
        Ok(ServiceContext {
            pool: self.pool.ok_or(ContextBuildError::Missing("pool"))?,
            activity_repo: self
                .activity_repo
                .ok_or(ContextBuildError::Missing("activity_repo"))?,
            contact_repo: self
                .contact_repo
                .ok_or(ContextBuildError::Missing("contact_repo"))?,
            user_repo: self
                .user_repo
                .ok_or(ContextBuildError::Missing("user_repo"))?,
            cache: self.cache.unwrap_or_else(|| Arc::new(MemoryCache::new())),
            cache_config: self.cache_config.unwrap_or_default(),
            jwt_service: self
                .jwt_service
                .ok_or(ContextBuildError::Missing("jwt_service"))?,
            clock: self
                .clock
                .unwrap_or_else(|| Arc::new(MonotonicClock::new())),
        })
    }
}

/// Context construction errors
#[derive(Debug, thiserror::Error)]
pub enum ContextBuildError {
    #[error("Missing required dependency: {0}")]
    Missing(&'static str),
}
