//! Holds traits and their implementation for Rust usage.

use crate::{GregorianDate, SolarHijriDate};

/// Day number of 1970/01/01 (see [`crate::gregorian_day_number`]).
const UNIX_EPOCH_DAY_NUMBER: i64 = 719163;

/// Convert a time measured from the Unix epoch to a date.
///
/// Only whole days count, there is no timezone: the day is the UTC one.
pub trait FromUnixDays {
    /// Whole days since 1970/01/01, negative before it.
    ///
    /// This must be saturating.
    fn unix_days(&self) -> i64;

    /// The Gregorian date this many days after the epoch.
    fn gregorian(&self) -> GregorianDate {
        GregorianDate::from_day_number(UNIX_EPOCH_DAY_NUMBER.saturating_add(self.unix_days()))
    }

    /// The Solar Hijri date this many days after the epoch.
    fn solar_hijri(&self) -> SolarHijriDate {
        self.gregorian().to_solar_hijri()
    }
}

impl FromUnixDays for core::time::Duration {
    fn unix_days(&self) -> i64 {
        (self.as_secs() / 86400).min(i64::MAX as u64) as i64
    }
}

#[cfg(feature = "std")]
impl FromUnixDays for std::time::SystemTime {
    fn unix_days(&self) -> i64 {
        match self.duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => d.unix_days(),
            // the day still in progress before the epoch is the one to report
            Err(e) => {
                let before = e.duration();
                let days = before.unix_days();
                if before.as_secs() % 86400 == 0 && before.subsec_nanos() == 0 {
                    -days
                } else {
                    -days - 1
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    #[test]
    fn test_epoch() {
        assert_eq!(Duration::ZERO.gregorian(), GregorianDate::new(1970, 1, 1));
        assert_eq!(Duration::ZERO.solar_hijri(), SolarHijriDate::new(1348, 10, 11));
    }

    #[test]
    fn test_days_after_epoch() {
        // 2021/3/21 00:00:30 UTC
        let nowruz = Duration::from_secs(18707 * 86400 + 30);
        assert_eq!(nowruz.unix_days(), 18707);
        assert_eq!(nowruz.solar_hijri(), SolarHijriDate::new(1400, 1, 1));
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_system_time_before_epoch() {
        let t = std::time::UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(t.unix_days(), -1);
        assert_eq!(t.gregorian(), GregorianDate::new(1969, 12, 31));
        let t = std::time::UNIX_EPOCH - Duration::from_secs(86400);
        assert_eq!(t.unix_days(), -1);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_today_is_valid() {
        assert!(SolarHijriDate::today().is_valid());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_system_time_after_epoch() {
        // 2025/5/3 12:00 UTC
        let t = std::time::UNIX_EPOCH + Duration::from_secs(20211 * 86400 + 43200);
        assert_eq!(t.gregorian(), GregorianDate::new(2025, 5, 3));
        assert_eq!(t.solar_hijri(), SolarHijriDate::new(1404, 2, 13));
    }
}
