//! Cache key construction
//!
//! All cache keys are built here so invalidation prefixes and key formats
//! stay in one place.

use mediatrack_core::{ChartType, TimeRange};

/// Prefix for every activity-derived entry (stats, summary).
/// Cleared whenever a new activity record is appended.
pub const ACTIVITY_PREFIX: &str = "activity:";

/// Prefix for dashboard chart series
pub const CHARTS_PREFIX: &str = "charts:";

/// Key for windowed activity statistics
#[must_use]
pub fn activity_stats(range: TimeRange) -> String {
    format!("{ACTIVITY_PREFIX}stats:{range}")
}

/// Key for the all-time activity summary
#[must_use]
pub fn activity_summary() -> String {
    format!("{ACTIVITY_PREFIX}summary")
}

/// Key for one dashboard chart series
#[must_use]
pub fn chart_data(chart: ChartType, range: TimeRange) -> String {
    format!("{CHARTS_PREFIX}{chart}:{range}")
}
