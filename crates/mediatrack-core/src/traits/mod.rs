//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ActivityPage, ActivityRepository, ContactRepository, DimensionRow, RepoResult, TypeCount,
    UserActivityCount, UserRepository,
};
