//! Request extractors

mod auth;
mod filters;
mod pagination;
mod validated;

pub use auth::AuthUser;
pub use filters::ActivityFilterQuery;
pub use pagination::Pagination;
pub use validated::ValidatedJson;
