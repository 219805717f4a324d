//! Application services

mod activity;
mod context;
mod dashboard;
mod error;

#[cfg(test)]
pub(crate) mod test_support;

pub use activity::ActivityService;
pub use context::{ContextBuildError, ServiceContext, ServiceContextBuilder};
pub use dashboard::DashboardService;
pub use error::{ServiceError, ServiceResult};
