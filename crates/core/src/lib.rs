//! Fiscal calendar logic for the fleet backend.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `clock` - Injectable source of the current civil date-time
//! - `fiscal` - Fiscal year and quarter resolution
//! - `ethiopian` - Ethiopian year numbering and New Year tracking

pub mod clock;
pub mod ethiopian;
pub mod fiscal;

pub use clock::{Clock, FixedClock, SystemClock};
pub use fiscal::{DateRange, FiscalCalendarService, FiscalError, FiscalQuarter, LabelStyle};
