//! Fiscal period value types.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::calendar::{fiscal_quarter_bounds, format_quarter_label};
use super::error::FiscalError;

/// Inclusive range of civil date-times.
///
/// `end` is the last representable millisecond before the following period
/// starts, i.e. 23:59:59.999 of the previous day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First instant of the range.
    pub start: NaiveDateTime,
    /// Last instant of the range.
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Range from `start` up to, but excluding, `next_start`.
    ///
    /// Returns `None` if `next_start` is not after `start`.
    #[must_use]
    pub fn until(start: NaiveDateTime, next_start: NaiveDateTime) -> Option<Self> {
        if next_start <= start {
            return None;
        }
        let end = next_start.checked_sub_signed(TimeDelta::milliseconds(1))?;
        Some(Self { start, end })
    }

    /// Returns true if `instant` falls within the range, bounds included.
    #[must_use]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Number of civil days touched by the range.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end.date() - self.start.date()).num_days() + 1
    }
}

/// A fiscal quarter of a fiscal year.
///
/// Orders chronologically: by fiscal year, then quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FiscalQuarter {
    /// Gregorian year in which the fiscal year starts.
    pub fiscal_year: i32,
    /// Quarter number (1-4).
    pub quarter: u32,
}

impl FiscalQuarter {
    /// Creates a quarter, rejecting numbers outside 1-4.
    pub fn new(fiscal_year: i32, quarter: u32) -> Result<Self, FiscalError> {
        if !(1..=4).contains(&quarter) {
            return Err(FiscalError::InvalidQuarter(quarter));
        }
        Ok(Self {
            fiscal_year,
            quarter,
        })
    }

    /// Date range covered by this quarter.
    pub fn bounds(&self) -> Result<DateRange, FiscalError> {
        fiscal_quarter_bounds(self.quarter, self.fiscal_year)
    }

    /// Human-readable label in the given style.
    #[must_use]
    pub fn label(&self, style: LabelStyle) -> String {
        format_quarter_label(self.quarter, self.fiscal_year, style)
    }
}

impl fmt::Display for FiscalQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(LabelStyle::Full))
    }
}

/// Quarter label format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// `FY 2024 Q1`
    #[default]
    Full,
    /// `Q1 2024`
    Short,
}

impl FromStr for LabelStyle {
    type Err = FiscalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "short" => Ok(Self::Short),
            _ => Err(FiscalError::UnknownLabelStyle(s.to_string())),
        }
    }
}
