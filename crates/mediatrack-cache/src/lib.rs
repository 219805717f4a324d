//! # mediatrack-cache
//!
//! Process-local memoization layer for aggregation queries.
//!
//! ## Overview
//!
//! A best-effort in-memory TTL cache sitting in front of the activity query
//! engine and the dashboard aggregator. Expired entries are evicted lazily on
//! the next read; there is no background sweep. The cache is lost on restart
//! and has no cross-instance consistency - callers must function correctly
//! (just slower) with the cache empty or disabled.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use mediatrack_cache::{keys, MemoryCache};
//!
//! let cache = MemoryCache::new();
//! cache.set(keys::activity_summary(), &42_u64, Duration::from_secs(60)).unwrap();
//! assert_eq!(cache.get_as::<u64>(&keys::activity_summary()), Some(42));
//!
//! // A write to the activity log invalidates every activity-scoped entry
//! cache.clear_by_prefix(keys::ACTIVITY_PREFIX);
//! assert!(cache.get(&keys::activity_summary()).is_none());
//! ```

pub mod keys;
mod memory;

pub use memory::MemoryCache;
