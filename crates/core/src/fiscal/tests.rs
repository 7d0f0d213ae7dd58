//! Property-based tests for fiscal period resolution.
//!
//! - Quarters partition their fiscal year
//! - Every date lands in the quarter that `quarter_of` reports
//! - The quarter clamp only fires on the anchor-shift day

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use proptest::prelude::*;

use super::calendar::{
    fiscal_quarter_bounds, fiscal_quarters, fiscal_year_bounds, fiscal_year_of, is_leap_year,
    quarter_of, unclamped_quarter,
};

fn one_ms() -> TimeDelta {
    TimeDelta::milliseconds(1)
}

/// Strategy for instants between 2010-01-01 and 2035-12-31, millisecond precision.
fn instant_2010_2035() -> impl Strategy<Value = NaiveDateTime> {
    let first = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(2035, 12, 31).unwrap();
    let span = (last - first).num_days();
    (0..=span, 0u32..86_400, 0u32..1_000).prop_map(move |(day, secs, ms)| {
        let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, ms * 1_000_000).unwrap();
        (first + TimeDelta::days(day)).and_time(time)
    })
}

fn assert_partition(fiscal_year: i32) {
    let year = fiscal_year_bounds(fiscal_year).unwrap();
    let quarters = fiscal_quarters(fiscal_year).unwrap();

    assert_eq!(quarters[0].start, year.start, "FY{fiscal_year} Q1 start");
    assert_eq!(quarters[3].end, year.end, "FY{fiscal_year} Q4 end");
    for pair in quarters.windows(2) {
        assert!(pair[0].start <= pair[0].end);
        assert_eq!(
            pair[0].end + one_ms(),
            pair[1].start,
            "FY{fiscal_year} quarters must be contiguous"
        );
    }
}

#[test]
fn test_quarters_partition_fiscal_year_2015_2030() {
    for fiscal_year in 2015..=2030 {
        assert_partition(fiscal_year);
    }
}

#[test]
fn test_quarters_partition_across_century_years() {
    for fiscal_year in [1899, 1900, 1999, 2000, 2099, 2100, 2399, 2400] {
        assert_partition(fiscal_year);
    }
}

#[test]
fn test_consecutive_fiscal_years_are_contiguous() {
    for fiscal_year in 2010..2035 {
        let this = fiscal_year_bounds(fiscal_year).unwrap();
        let next = fiscal_year_bounds(fiscal_year + 1).unwrap();
        assert_eq!(this.end + one_ms(), next.start);
    }
}

#[test]
fn test_fiscal_year_lengths() {
    // 365 normally; the one-day anchor shift yields 367 before a leap year
    // and 364 after it.
    for fiscal_year in 2010..=2035 {
        let days = fiscal_year_bounds(fiscal_year).unwrap().days();
        let expected = match (is_leap_year(fiscal_year), is_leap_year(fiscal_year + 1)) {
            (false, true) => 367,
            (true, false) => 364,
            _ => 365,
        };
        assert_eq!(days, expected, "FY{fiscal_year}");
    }
}

/// Walks every day from 2010 through 2035, at the first and last millisecond,
/// and records the days on which `quarter_of` needs its clamp.
#[test]
fn test_round_trip_every_day_and_flag_clamps() {
    let mut day = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(2035, 12, 31).unwrap();
    let mut clamped = Vec::new();

    while day <= last {
        for instant in [
            day.and_time(NaiveTime::MIN),
            day.and_hms_milli_opt(23, 59, 59, 999).unwrap(),
        ] {
            let quarter = quarter_of(instant);
            let range = fiscal_quarter_bounds(quarter.quarter, quarter.fiscal_year).unwrap();
            assert!(range.contains(instant), "{instant} not in {quarter}");

            let raw = unclamped_quarter(instant, fiscal_year_of(instant));
            if raw != i32::try_from(quarter.quarter).unwrap() {
                clamped.push(instant.date());
            }
        }
        day = day.succ_opt().unwrap();
    }

    clamped.dedup();
    assert!(
        clamped
            .iter()
            .all(|d| d.month() == 9 && d.day() == 11 && is_leap_year(d.year())),
        "clamp fired outside the anchor-shift day: {clamped:?}"
    );
    let expected: Vec<NaiveDate> = (2010..=2035)
        .filter(|y| is_leap_year(*y))
        .map(|y| NaiveDate::from_ymd_opt(y, 9, 11).unwrap())
        .collect();
    assert_eq!(clamped, expected);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// *For any* instant, the quarter reported by `quarter_of` contains it.
    #[test]
    fn prop_quarter_of_round_trips(instant in instant_2010_2035()) {
        let quarter = quarter_of(instant);
        let range = fiscal_quarter_bounds(quarter.quarter, quarter.fiscal_year).unwrap();
        prop_assert!(range.contains(instant), "{} not in {}", instant, quarter);
        prop_assert!(fiscal_year_bounds(quarter.fiscal_year).unwrap().contains(instant));
    }

    /// *For any* instant, the raw quarter only leaves 1-4 on a leap-year Sept 11.
    #[test]
    fn prop_clamp_only_on_anchor_shift_day(instant in instant_2010_2035()) {
        let raw = unclamped_quarter(instant, fiscal_year_of(instant));
        if !(1..=4).contains(&raw) {
            prop_assert_eq!(raw, 5);
            prop_assert_eq!((instant.month(), instant.day()), (9, 11));
            prop_assert!(is_leap_year(instant.year()));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* fiscal year, Q1..Q4 partition the year exactly.
    #[test]
    fn prop_quarters_partition_year(fiscal_year in 1600i32..3000) {
        let year = fiscal_year_bounds(fiscal_year).unwrap();
        let quarters = fiscal_quarters(fiscal_year).unwrap();
        prop_assert_eq!(quarters[0].start, year.start);
        prop_assert_eq!(quarters[3].end, year.end);
        for pair in quarters.windows(2) {
            prop_assert_eq!(pair[0].end + one_ms(), pair[1].start);
        }
    }
}
