//! Database row models

mod activity;
mod contact;
mod user;

pub use activity::{ActivityModel, TypeCountModel, UserCountModel};
pub use contact::DimensionRowModel;
pub use user::UserDisplayModel;
