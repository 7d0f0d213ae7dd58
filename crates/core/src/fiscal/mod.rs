//! Fiscal year and quarter resolution anchored to the Ethiopian New Year.

pub mod calendar;
pub mod error;
pub mod period;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use calendar::{
    MONTHS_PER_QUARTER, NEW_YEAR_DAY, NEW_YEAR_DAY_LEAP, NEW_YEAR_MONTH, ethiopian_new_year,
    fiscal_quarter_bounds, fiscal_quarters, fiscal_year_bounds, fiscal_year_of,
    format_quarter_label, is_leap_year, new_year_day, quarter_of,
};
pub use error::FiscalError;
pub use period::{PeriodSelector, bucket_by_quarter, period_range};
pub use service::FiscalCalendarService;
pub use types::{DateRange, FiscalQuarter, LabelStyle};
