//! Ethiopian calendar year tracking.

pub mod year;

pub use year::{
    ETHIOPIAN_YEAR_OFFSET, EthiopianYearInfo, days_until, ethiopian_year_info, ethiopian_year_of,
    gregorian_start_year, next_ethiopian_new_year,
};
