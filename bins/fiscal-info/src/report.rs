//! JSON report of the calendar state at a point in time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fleet_core::clock::{Clock, FixedClock, SystemClock};
use fleet_core::ethiopian::EthiopianYearInfo;
use fleet_core::fiscal::{fiscal_quarters, fiscal_year_bounds};
use fleet_core::{DateRange, FiscalCalendarService, FiscalError, FiscalQuarter, LabelStyle};
use fleet_shared::CalendarConfig;
use serde::Serialize;

/// One quarter of the reported fiscal year.
#[derive(Debug, Serialize)]
pub struct QuarterReport {
    /// Quarter identifier.
    pub quarter: FiscalQuarter,
    /// Display label.
    pub label: String,
    /// Date range.
    pub range: DateRange,
}

/// Calendar state as of `as_of`.
#[derive(Debug, Serialize)]
pub struct FiscalReport {
    /// Instant the report describes.
    pub as_of: NaiveDateTime,
    /// Quarter containing `as_of`.
    pub current_quarter: FiscalQuarter,
    /// Label of the current quarter.
    pub label: String,
    /// Bounds of the current fiscal year.
    pub fiscal_year: DateRange,
    /// All quarters of the current fiscal year.
    pub quarters: Vec<QuarterReport>,
    /// Ethiopian year summary.
    pub ethiopian: EthiopianYearInfo,
}

impl FiscalReport {
    /// Builds the report for the service's current time.
    pub fn build<C: Clock>(
        service: &FiscalCalendarService<C>,
        style: LabelStyle,
    ) -> Result<Self, FiscalError> {
        let as_of = service.now();
        let current_quarter = service.current_fiscal_quarter();
        let fiscal_year = current_quarter.fiscal_year;

        let quarters = (1..=4)
            .zip(fiscal_quarters(fiscal_year)?)
            .map(|(quarter, range)| {
                let quarter = FiscalQuarter {
                    fiscal_year,
                    quarter,
                };
                QuarterReport {
                    quarter,
                    label: quarter.label(style),
                    range,
                }
            })
            .collect();

        Ok(Self {
            as_of,
            current_quarter,
            label: current_quarter.label(style),
            fiscal_year: fiscal_year_bounds(fiscal_year)?,
            quarters,
            ethiopian: service.ethiopian_year_info()?,
        })
    }
}

/// Parses `YYYY-MM-DD` (midnight) or `YYYY-MM-DDTHH:MM:SS[.fff]`.
pub fn parse_as_of(input: &str) -> Option<NaiveDateTime> {
    if let Ok(at) = input.parse::<NaiveDateTime>() {
        return Some(at);
    }
    let date = input.parse::<NaiveDate>().ok()?;
    Some(date.and_time(NaiveTime::MIN))
}

/// Picks the clock: explicit date argument, then configured fixed instant,
/// then the system clock in the configured zone.
pub fn build_clock(
    config: &CalendarConfig,
    as_of: Option<NaiveDateTime>,
) -> anyhow::Result<Box<dyn Clock>> {
    if let Some(at) = as_of.or(config.fixed_now) {
        return Ok(Box::new(FixedClock(at)));
    }
    let clock = match config.timezone.as_deref() {
        Some(name) => SystemClock::from_zone_name(name)?,
        None => SystemClock::local(),
    };
    Ok(Box::new(clock))
}
