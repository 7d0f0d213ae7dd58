//! Injectable source of "now".
//!
//! Everything in this crate works on naive civil date-times. The clock is the
//! only place that looks at a time zone: it reads the current instant and
//! converts it to the wall time of either the host or a configured IANA zone.

use chrono::{Local, NaiveDateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Clock-related errors.
#[derive(Debug, Error)]
pub enum ClockError {
    /// The configured time zone is not a known IANA zone name.
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
}

/// Provides the current civil date-time.
pub trait Clock: Send + Sync {
    /// Returns the current wall-clock date-time.
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Option<Tz>,
}

impl SystemClock {
    /// Clock reporting the host's local wall time.
    #[must_use]
    pub const fn local() -> Self {
        Self { timezone: None }
    }

    /// Clock reporting wall time in `timezone`.
    #[must_use]
    pub const fn in_zone(timezone: Tz) -> Self {
        Self {
            timezone: Some(timezone),
        }
    }

    /// Clock for an IANA zone name such as `Africa/Addis_Ababa`.
    pub fn from_zone_name(name: &str) -> Result<Self, ClockError> {
        name.parse::<Tz>()
            .map(Self::in_zone)
            .map_err(|_| ClockError::UnknownTimeZone(name.to_string()))
    }

    /// The configured zone, if any.
    #[must_use]
    pub const fn timezone(&self) -> Option<Tz> {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.timezone {
            Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
            None => Local::now().naive_local(),
        }
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_returns_same_instant() {
        let at = NaiveDate::from_ymd_opt(2024, 9, 12)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn test_boxed_clock_delegates() {
        let at = NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let clock: Box<dyn Clock> = Box::new(FixedClock(at));
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn test_zone_name_parsing() {
        let clock = SystemClock::from_zone_name("Africa/Addis_Ababa").unwrap();
        assert_eq!(clock.timezone(), Some(chrono_tz::Africa::Addis_Ababa));

        let err = SystemClock::from_zone_name("Mars/Olympus_Mons").unwrap_err();
        assert_eq!(err.to_string(), "Unknown time zone: Mars/Olympus_Mons");
    }

    #[test]
    fn test_zoned_clock_tracks_utc_offset() {
        // Addis Ababa is UTC+3 with no DST.
        let before = Utc::now().naive_utc();
        let zoned = SystemClock::in_zone(chrono_tz::Africa::Addis_Ababa).now();
        let after = Utc::now().naive_utc();

        let offset = chrono::TimeDelta::hours(3);
        assert!(zoned >= before + offset);
        assert!(zoned <= after + offset);
    }
}
