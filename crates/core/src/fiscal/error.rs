//! Fiscal calendar error types.

use fleet_shared::AppError;
use thiserror::Error;

use crate::clock::ClockError;

/// Fiscal calendar errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FiscalError {
    /// Quarter selector outside 1-4.
    #[error("Quarter must be between 1 and 4, got {0}")]
    InvalidQuarter(u32),

    /// Year cannot be represented as a calendar date.
    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),

    /// Unrecognised quarter label style.
    #[error("Unknown label style: {0} (expected \"full\" or \"short\")")]
    UnknownLabelStyle(String),

    /// Unrecognised reporting period key.
    #[error("Unknown reporting period: {0}")]
    UnknownPeriod(String),
}

impl From<FiscalError> for AppError {
    fn from(err: FiscalError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ClockError> for AppError {
    fn from(err: ClockError) -> Self {
        Self::Configuration(err.to_string())
    }
}
