//! Error types for schedule construction.

use accrual_core::{AccrualError, Date, Tenor};
use thiserror::Error;

/// A specialized Result type for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors that can occur while building a schedule.
///
/// Construction either returns a complete schedule or one of these; no
/// partially built schedule is ever observable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Both end-of-month and start-of-month rolling were requested.
    #[error("Schedule cannot roll both beginning and end of month")]
    ConflictingRollFlags,

    /// Day-of-month roll outside 1..=31.
    #[error("Invalid roll day {day}: must be between 1 and 31")]
    InvalidRollDay {
        /// The rejected day.
        day: u32,
    },

    /// Effective date is not before termination.
    #[error("Effective date {effective} must be before termination {termination}")]
    InvalidDateRange {
        /// Effective date.
        effective: Date,
        /// Termination date.
        termination: Date,
    },

    /// Stub date outside the schedule or stubs out of order.
    #[error("Invalid stub: {reason}")]
    InvalidStub {
        /// Description of what's invalid.
        reason: String,
    },

    /// The regular grid stepped past its end without landing on it.
    #[error("Regular roll grid does not land on {grid_end} (reached {reached}); supply a back stub")]
    GridMismatch {
        /// Where the regular grid should have ended.
        grid_end: Date,
        /// First grid date past the end.
        reached: Date,
    },

    /// A roll step returned a date that is not after its input.
    #[error("Roll convention does not advance from {date} with tenor {tenor}")]
    NonAdvancingRoll {
        /// Date the step started from.
        date: Date,
        /// Tenor used for the step.
        tenor: Tenor,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] AccrualError),
}

impl ScheduleError {
    /// Creates an invalid stub error.
    #[must_use]
    pub fn invalid_stub(reason: impl Into<String>) -> Self {
        Self::InvalidStub {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_roll_message() {
        assert_eq!(
            ScheduleError::ConflictingRollFlags.to_string(),
            "Schedule cannot roll both beginning and end of month"
        );
    }

    #[test]
    fn test_from_core_error() {
        let err: ScheduleError = AccrualError::invalid_date("2025-02-30").into();
        assert!(matches!(err, ScheduleError::Core(_)));
        assert!(err.to_string().contains("Invalid date"));
    }
}
