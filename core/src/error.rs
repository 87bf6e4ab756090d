//! Validation errors raised when a configuration cannot feed the calculators.

use chrono::NaiveDate;

/// Rejected configuration values.
///
/// The calculators never fail on their own; these are checked once when the
/// config is loaded so that nothing downstream divides by a zero lifespan or
/// counts weeks backwards from a birthdate that has not happened yet.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `expected_lifespan` must be between 1 and 150 years.
    #[error("Invalid expected lifespan: {0} (must be between 1 and 150 years)")]
    InvalidLifespan(u32),

    /// The birthdate lies after the reference date.
    #[error("Birthdate {birthdate} is after today ({today})")]
    BirthdateInFuture { birthdate: NaiveDate, today: NaiveDate },

    /// A daily time allocation is negative or not a number.
    #[error("Invalid value for {field}: {value} hours")]
    NegativeHours { field: &'static str, value: f64 },
}
