//! Clock-aware fiscal calendar service.
//!
//! The free functions in [`super::calendar`] are pure. This service wraps the
//! handful of operations that need "now", taking the time source as an
//! injected [`Clock`] so callers and tests control it.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::ethiopian::{self, EthiopianYearInfo};

use super::calendar::{fiscal_year_of, quarter_of};
use super::error::FiscalError;
use super::types::{FiscalQuarter, LabelStyle};

/// Fiscal calendar service.
///
/// Stateless apart from the clock; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct FiscalCalendarService<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> FiscalCalendarService<C> {
    /// Creates a service reading time from `clock`.
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Current civil date-time according to the clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Fiscal year in progress.
    pub fn current_fiscal_year(&self) -> i32 {
        fiscal_year_of(self.now())
    }

    /// Fiscal quarter in progress.
    pub fn current_fiscal_quarter(&self) -> FiscalQuarter {
        let now = self.now();
        let quarter = quarter_of(now);
        debug!(
            %now,
            fiscal_year = quarter.fiscal_year,
            quarter = quarter.quarter,
            "resolved current fiscal quarter"
        );
        quarter
    }

    /// Label of the fiscal quarter in progress.
    pub fn current_quarter_label(&self, style: LabelStyle) -> String {
        self.current_fiscal_quarter().label(style)
    }

    /// Ethiopian year in progress.
    pub fn current_ethiopian_year(&self) -> i32 {
        ethiopian::ethiopian_year_of(self.now())
    }

    /// Next Ethiopian New Year after now.
    pub fn next_ethiopian_new_year(&self) -> Result<NaiveDateTime, FiscalError> {
        ethiopian::next_ethiopian_new_year(self.now())
    }

    /// Ethiopian year summary as of now.
    pub fn ethiopian_year_info(&self) -> Result<EthiopianYearInfo, FiscalError> {
        ethiopian::ethiopian_year_info(self.now())
    }
}
