//! Value objects - time windows, chart dimensions, and the write clock

mod chart;
mod clock;
mod time_range;

pub use chart::ChartType;
pub use clock::MonotonicClock;
pub use time_range::TimeRange;
