//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid activity type: {0}")]
    InvalidActivityType(String),

    #[error("Invalid entity kind: {0}")]
    InvalidEntityKind(String),

    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    #[error("Invalid chart type: {0}")]
    InvalidChartType(String),

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidActivityType(_) => "INVALID_ACTIVITY_TYPE",
            Self::InvalidEntityKind(_) => "INVALID_ENTITY_KIND",
            Self::InvalidTimeRange(_) => "INVALID_TIME_RANGE",
            Self::InvalidChartType(_) => "INVALID_CHART_TYPE",
            Self::InvalidPagination(_) => "INVALID_PAGINATION",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error (maps to 400 at the HTTP boundary)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidActivityType(_)
                | Self::InvalidEntityKind(_)
                | Self::InvalidTimeRange(_)
                | Self::InvalidChartType(_)
                | Self::InvalidPagination(_)
        )
    }
}
