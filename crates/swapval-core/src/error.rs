//! Error types for core date, calendar and schedule operations.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Error types for date arithmetic, schedule generation and day count
/// calculations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The year/month/day triple does not name a calendar date.
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component (1-12).
        month: u32,
        /// Day-of-month component.
        day: u32,
    },

    /// A date string could not be parsed.
    #[error("Invalid date string: {input:?} (expected YYYY-MM-DD)")]
    InvalidDateString {
        /// The offending input.
        input: String,
    },

    /// A convention code could not be parsed.
    #[error("Unknown {kind} code: {code:?}")]
    UnknownCode {
        /// What kind of code was being parsed.
        kind: &'static str,
        /// The offending input.
        code: String,
    },

    /// A convention or rule combination the calculators do not handle.
    #[error("Unhandled convention: {detail}")]
    UnhandledConvention {
        /// Description of the unsupported combination.
        detail: String,
    },

    /// Schedule inputs that cannot produce a valid period schedule.
    #[error("Malformed schedule: {detail}")]
    MalformedSchedule {
        /// Description of what is wrong with the schedule.
        detail: String,
    },

    /// A date conversion left the range supported by `chrono`.
    #[error("Date {date} is outside the supported conversion range")]
    DateOutOfRange {
        /// ISO rendering of the offending date.
        date: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(year: i32, month: u32, day: u32) -> Self {
        Self::InvalidDate { year, month, day }
    }

    /// Creates an invalid date string error.
    #[must_use]
    pub fn invalid_date_string(input: impl Into<String>) -> Self {
        Self::InvalidDateString {
            input: input.into(),
        }
    }

    /// Creates an unknown code error.
    #[must_use]
    pub fn unknown_code(kind: &'static str, code: impl Into<String>) -> Self {
        Self::UnknownCode {
            kind,
            code: code.into(),
        }
    }

    /// Creates an unhandled convention error.
    #[must_use]
    pub fn unhandled_convention(detail: impl Into<String>) -> Self {
        Self::UnhandledConvention {
            detail: detail.into(),
        }
    }

    /// Creates a malformed schedule error.
    #[must_use]
    pub fn malformed_schedule(detail: impl Into<String>) -> Self {
        Self::MalformedSchedule {
            detail: detail.into(),
        }
    }
}
