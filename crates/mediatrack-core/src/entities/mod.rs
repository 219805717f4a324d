//! Domain entities

mod activity;
mod user;

pub use activity::{ActivityFilters, ActivityRecord, ActivityType, EntityKind};
pub use user::UserDisplay;
