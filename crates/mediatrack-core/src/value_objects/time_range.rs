//! Time range - relative lookback window anchored to "now" at query time

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Relative lookback period for stats and chart queries.
///
/// Day-based ranges subtract whole days; month/year ranges subtract calendar
/// months so "3 months back from March 31" lands on the clamped end of
/// December rather than a fixed 90 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "3m")]
    Last3Months,
    #[serde(rename = "1y")]
    LastYear,
}

impl TimeRange {
    /// Wire token used in query strings and cache keys
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Last7Days => "7d",
            Self::Last30Days => "30d",
            Self::Last3Months => "3m",
            Self::LastYear => "1y",
        }
    }

    /// Compute the inclusive cutoff for this range anchored at `now`
    #[must_use]
    pub fn since(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Last7Days => now - Duration::days(7),
            Self::Last30Days => now - Duration::days(30),
            Self::Last3Months => now
                .checked_sub_months(Months::new(3))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            Self::LastYear => now
                .checked_sub_months(Months::new(12))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(Self::Last7Days),
            "30d" => Ok(Self::Last30Days),
            "3m" => Ok(Self::Last3Months),
            "1y" => Ok(Self::LastYear),
            other => Err(DomainError::InvalidTimeRange(other.to_string())),
        }
    }
}
