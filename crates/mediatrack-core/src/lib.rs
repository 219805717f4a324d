//! # mediatrack-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{ActivityFilters, ActivityRecord, ActivityType, EntityKind, UserDisplay};
pub use error::DomainError;
pub use traits::{
    ActivityPage, ActivityRepository, ContactRepository, DimensionRow, RepoResult, TypeCount,
    UserActivityCount, UserRepository,
};
pub use value_objects::{ChartType, MonotonicClock, TimeRange};
