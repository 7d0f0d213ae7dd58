//! Ethiopian year numbering relative to the Gregorian calendar.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::fiscal::{FiscalError, ethiopian_new_year, fiscal_year_of, is_leap_year};

/// Gregorian year minus Ethiopian year, on or after the New Year.
/// Before the New Year the gap is one larger.
pub const ETHIOPIAN_YEAR_OFFSET: i32 = 7;

/// Ethiopian year that `date` falls in.
#[must_use]
pub fn ethiopian_year_of(date: NaiveDateTime) -> i32 {
    fiscal_year_of(date) - ETHIOPIAN_YEAR_OFFSET
}

/// Gregorian year in which Ethiopian year `ethiopian_year` begins.
#[must_use]
pub const fn gregorian_start_year(ethiopian_year: i32) -> i32 {
    ethiopian_year + ETHIOPIAN_YEAR_OFFSET
}

/// The first Ethiopian New Year strictly after `now`.
pub fn next_ethiopian_new_year(now: NaiveDateTime) -> Result<NaiveDateTime, FiscalError> {
    let year = now.year();
    let this_year = ethiopian_new_year(year)?;
    if now < this_year {
        return Ok(this_year);
    }
    let next = year
        .checked_add(1)
        .ok_or(FiscalError::YearOutOfRange(year))?;
    ethiopian_new_year(next)
}

/// Whole days from `now` until `target`, rounded up.
#[must_use]
pub fn days_until(now: NaiveDateTime, target: NaiveDateTime) -> i64 {
    let delta = target - now;
    let whole = delta.num_days();
    if delta > TimeDelta::days(whole) {
        whole + 1
    } else {
        whole
    }
}

/// Summary of where `now` sits in the Ethiopian calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthiopianYearInfo {
    /// Ethiopian year in progress.
    pub current_ethiopian_year: i32,
    /// Ethiopian year starting at the next New Year.
    pub next_ethiopian_year: i32,
    /// Date of the next New Year.
    pub next_new_year_date: NaiveDate,
    /// Days until the next New Year, rounded up.
    pub days_until_new_year: i64,
    /// Whether the next New Year falls in a Gregorian leap year (Sept 12).
    pub is_leap_year: bool,
}

/// Builds the Ethiopian year summary for `now`.
pub fn ethiopian_year_info(now: NaiveDateTime) -> Result<EthiopianYearInfo, FiscalError> {
    let current = ethiopian_year_of(now);
    let next_new_year = next_ethiopian_new_year(now)?;

    Ok(EthiopianYearInfo {
        current_ethiopian_year: current,
        next_ethiopian_year: current + 1,
        next_new_year_date: next_new_year.date(),
        days_until_new_year: days_until(now, next_new_year),
        is_leap_year: is_leap_year(next_new_year.year()),
    })
}
