//! Fiscal year and quarter arithmetic.
//!
//! The fiscal year follows the Ethiopian calendar: it starts on the Ethiopian
//! New Year (Enkutatash) and is identified by the Gregorian year in which it
//! starts. Quarters are three calendar months each, counted from that anchor:
//!
//! - Q1: Sept 11/12 - Dec 10/11
//! - Q2: Dec 11/12 - Mar 10/11
//! - Q3: Mar 11/12 - Jun 10/11
//! - Q4: Jun 11/12 - eve of the next New Year
//!
//! All dates are naive civil dates. No time zone normalisation happens here.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use super::error::FiscalError;
use super::types::{DateRange, FiscalQuarter, LabelStyle};

/// Gregorian month of the Ethiopian New Year.
pub const NEW_YEAR_MONTH: u32 = 9;

/// Gregorian day of the Ethiopian New Year in a common Gregorian year.
pub const NEW_YEAR_DAY: u32 = 11;

/// Gregorian day of the Ethiopian New Year in a Gregorian leap year.
///
/// Civil calendar fact: Enkutatash moves to September 12 around the Gregorian
/// leap day. The anchor is hard-coded, not derived from a calendar conversion.
pub const NEW_YEAR_DAY_LEAP: u32 = 12;

/// Calendar months in one fiscal quarter.
pub const MONTHS_PER_QUARTER: u32 = 3;

/// Returns true if `year` is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Day of September on which the Ethiopian New Year falls in `year`.
#[must_use]
pub const fn new_year_day(year: i32) -> u32 {
    if is_leap_year(year) {
        NEW_YEAR_DAY_LEAP
    } else {
        NEW_YEAR_DAY
    }
}

fn new_year_date(year: i32) -> Result<NaiveDate, FiscalError> {
    NaiveDate::from_ymd_opt(year, NEW_YEAR_MONTH, new_year_day(year))
        .ok_or(FiscalError::YearOutOfRange(year))
}

fn following_year(year: i32) -> Result<i32, FiscalError> {
    year.checked_add(1).ok_or(FiscalError::YearOutOfRange(year))
}

/// Midnight of the Ethiopian New Year within Gregorian `year`.
pub fn ethiopian_new_year(year: i32) -> Result<NaiveDateTime, FiscalError> {
    new_year_date(year).map(|date| date.and_time(NaiveTime::MIN))
}

/// Fiscal year that `date` belongs to.
///
/// Midnight of the New Year already belongs to the new fiscal year.
#[must_use]
pub fn fiscal_year_of(date: NaiveDateTime) -> i32 {
    let year = date.year();
    if (date.month(), date.day()) < (NEW_YEAR_MONTH, new_year_day(year)) {
        year - 1
    } else {
        year
    }
}

/// Full date range of `fiscal_year`.
pub fn fiscal_year_bounds(fiscal_year: i32) -> Result<DateRange, FiscalError> {
    let start = ethiopian_new_year(fiscal_year)?;
    let next = ethiopian_new_year(following_year(fiscal_year)?)?;
    DateRange::until(start, next).ok_or(FiscalError::YearOutOfRange(fiscal_year))
}

/// Start dates of Q1..Q4 followed by the start of the next fiscal year.
///
/// Quarter starts advance the anchor by whole calendar months. The anchor day
/// (11 or 12) exists in every month, so month addition never clamps.
fn quarter_starts(fiscal_year: i32) -> Result<[NaiveDate; 5], FiscalError> {
    let anchor = new_year_date(fiscal_year)?;
    let next = new_year_date(following_year(fiscal_year)?)?;
    let advance = |quarters: u32| {
        anchor
            .checked_add_months(Months::new(quarters * MONTHS_PER_QUARTER))
            .ok_or(FiscalError::YearOutOfRange(fiscal_year))
    };
    Ok([anchor, advance(1)?, advance(2)?, advance(3)?, next])
}

fn range_between(
    start: NaiveDate,
    next: NaiveDate,
    fiscal_year: i32,
) -> Result<DateRange, FiscalError> {
    let start = start.and_time(NaiveTime::MIN);
    let next = next.and_time(NaiveTime::MIN);
    DateRange::until(start, next).ok_or(FiscalError::YearOutOfRange(fiscal_year))
}

/// Date range of `quarter` (1-4) within `fiscal_year`.
///
/// Each quarter ends the instant before the next one starts. Q4 ends the
/// instant before the next fiscal year starts, so it absorbs the one-day
/// shift when only one of the two New Years falls in a leap year.
pub fn fiscal_quarter_bounds(quarter: u32, fiscal_year: i32) -> Result<DateRange, FiscalError> {
    if !(1..=4).contains(&quarter) {
        return Err(FiscalError::InvalidQuarter(quarter));
    }
    let starts = quarter_starts(fiscal_year)?;
    let index = (quarter - 1) as usize;
    range_between(starts[index], starts[index + 1], fiscal_year)
}

/// All four quarter ranges of `fiscal_year`, in order.
pub fn fiscal_quarters(fiscal_year: i32) -> Result<[DateRange; 4], FiscalError> {
    let s = quarter_starts(fiscal_year)?;
    Ok([
        range_between(s[0], s[1], fiscal_year)?,
        range_between(s[1], s[2], fiscal_year)?,
        range_between(s[2], s[3], fiscal_year)?,
        range_between(s[3], s[4], fiscal_year)?,
    ])
}

/// Unclamped quarter number of `date` within `fiscal_year`.
///
/// Counts whole months elapsed since the anchor; a month only completes once
/// the anchor day is reached.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn unclamped_quarter(date: NaiveDateTime, fiscal_year: i32) -> i32 {
    let mut months =
        (date.year() - fiscal_year) * 12 + (date.month() as i32 - NEW_YEAR_MONTH as i32);
    if date.day() < new_year_day(fiscal_year) {
        months -= 1;
    }
    months.div_euclid(MONTHS_PER_QUARTER as i32) + 1
}

/// Fiscal year and quarter containing `date`.
///
/// Months are counted from the anchor day, not bucketed by calendar month:
/// December 1-10 is still Q1 because Q2 only starts on December 11 (or 12).
/// Whole-calendar-month bucketing would put those days in Q2 while
/// [`fiscal_quarter_bounds`] places them in Q1.
///
/// The result is clamped to 1-4. The upper clamp is hit only on September 11
/// of a Gregorian leap year: the previous fiscal year still runs that day, one
/// day past twelve months from its own anchor, and it belongs to Q4.
#[must_use]
pub fn quarter_of(date: NaiveDateTime) -> FiscalQuarter {
    let fiscal_year = fiscal_year_of(date);
    let raw = unclamped_quarter(date, fiscal_year);
    let quarter = raw.clamp(1, 4);
    if quarter != raw {
        debug!(%date, fiscal_year, raw, "clamped quarter into the final quarter");
    }
    FiscalQuarter {
        fiscal_year,
        quarter: quarter.unsigned_abs(),
    }
}

/// Display label for a quarter: `FY 2024 Q1` or `Q1 2024`.
///
/// No validation; callers pass already-validated values.
#[must_use]
pub fn format_quarter_label(quarter: u32, fiscal_year: i32, style: LabelStyle) -> String {
    match style {
        LabelStyle::Full => format!("FY {fiscal_year} Q{quarter}"),
        LabelStyle::Short => format!("Q{quarter} {fiscal_year}"),
    }
}
