//! Repository implementations

mod activity;
mod contact;
mod error;
mod user;

pub use activity::PgActivityRepository;
pub use contact::PgContactRepository;
pub use user::PgUserRepository;
