//! Reporting period selection and bucketing.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::calendar::{fiscal_quarter_bounds, fiscal_year_bounds, quarter_of};
use super::error::FiscalError;
use super::types::{DateRange, FiscalQuarter};

/// A dashboard period key within a fiscal year.
///
/// Serialises as its period key (`"q2"`, `"annual"`) and deserialises through
/// [`FromStr`], so out-of-range quarters never reach a `Quarter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PeriodSelector {
    /// A single quarter (1-4).
    Quarter(u32),
    /// The whole fiscal year.
    Year,
}

impl PeriodSelector {
    /// Date range this selector covers in `fiscal_year`.
    pub fn range(self, fiscal_year: i32) -> Result<DateRange, FiscalError> {
        period_range(self, fiscal_year)
    }
}

impl FromStr for PeriodSelector {
    type Err = FiscalError;

    /// Parses `q1`..`q4` and `annual`/`fy`/`year`.
    ///
    /// A quarter key is `q` followed by exactly one digit. Other digits are
    /// rejected as [`FiscalError::InvalidQuarter`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if matches!(key.as_str(), "annual" | "fy" | "year") {
            return Ok(Self::Year);
        }
        let mut digits = key.strip_prefix('q').unwrap_or_default().chars();
        let quarter = match (digits.next().and_then(|c| c.to_digit(10)), digits.next()) {
            (Some(quarter), None) => quarter,
            _ => return Err(FiscalError::UnknownPeriod(s.to_string())),
        };
        if !(1..=4).contains(&quarter) {
            return Err(FiscalError::InvalidQuarter(quarter));
        }
        Ok(Self::Quarter(quarter))
    }
}

impl TryFrom<String> for PeriodSelector {
    type Error = FiscalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PeriodSelector> for String {
    fn from(selector: PeriodSelector) -> Self {
        selector.to_string()
    }
}

impl fmt::Display for PeriodSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quarter(quarter) => write!(f, "q{quarter}"),
            Self::Year => f.write_str("annual"),
        }
    }
}

/// Resolves a period selector to its date range.
pub fn period_range(selector: PeriodSelector, fiscal_year: i32) -> Result<DateRange, FiscalError> {
    let range = match selector {
        PeriodSelector::Quarter(quarter) => fiscal_quarter_bounds(quarter, fiscal_year)?,
        PeriodSelector::Year => fiscal_year_bounds(fiscal_year)?,
    };
    debug!(
        %selector,
        fiscal_year,
        start = %range.start,
        end = %range.end,
        "resolved reporting period"
    );
    Ok(range)
}

/// Groups records by the fiscal quarter of their timestamp.
///
/// Buckets iterate in chronological order; records keep their input order
/// within a bucket.
pub fn bucket_by_quarter<T, I, F>(items: I, timestamp: F) -> BTreeMap<FiscalQuarter, Vec<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> NaiveDateTime,
{
    let mut buckets: BTreeMap<FiscalQuarter, Vec<T>> = BTreeMap::new();
    for item in items {
        let quarter = quarter_of(timestamp(&item));
        buckets.entry(quarter).or_default().push(item);
    }
    buckets
}
