//! Error types for the population engine.

use chrono::NaiveDate;

/// Error type for configuration and population failures.
#[derive(Debug, thiserror::Error)]
pub enum PopulateError {
    /// A size range was configured with a negative minimum or `min > max`
    #[error("Invalid size range [{min}, {max}]")]
    InvalidSizeRange { min: i64, max: i64 },

    /// A date range was configured with `start > end`
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// The requested type is abstract and could not be resolved to a
    /// constructible concrete type
    #[error("No constructible type for '{0}'")]
    NoConstructibleType(String),

    /// No step of the resolution chain produced a randomizer for the member
    #[error("No randomizer available for '{type_name}' at '{path}'")]
    NoRandomizerAvailable { path: String, type_name: String },

    /// The type's factory failed while producing the initial instance
    #[error("Factory of '{type_name}' failed: {reason}")]
    FactoryFailed { type_name: String, reason: String },

    /// The named type is not registered
    #[error("Unknown type: '{0}'")]
    UnknownType(String),
}

impl PopulateError {
    /// Whether this failure may be swallowed at the member level when
    /// error tolerance is enabled.
    ///
    /// Configuration errors are never swallowed: they surface at the
    /// configuration call site, before any population starts.
    pub fn is_member_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::InvalidSizeRange { .. } | Self::InvalidDateRange { .. }
        )
    }
}
