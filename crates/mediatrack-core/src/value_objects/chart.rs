//! Chart type - the contact dimension a dashboard chart groups by

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Dimension a dashboard chart counts contacts by.
///
/// Each dimension is a many-to-many relation, so a single contact can
/// contribute to several buckets of the same chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Category,
    Country,
    Beat,
}

impl ChartType {
    /// Wire token used in query strings and cache keys
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Country => "country",
            Self::Beat => "beat",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(Self::Category),
            "country" => Ok(Self::Country),
            "beat" => Ok(Self::Beat),
            other => Err(DomainError::InvalidChartType(other.to_string())),
        }
    }
}
