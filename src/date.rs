//! Date values of the two calendars.
//!
//! The calendars get distinct types so a triple of one can't be passed where the other is meant.
//! Both are plain `Copy` records without validation on construction, the conversions accept
//! anything and [`SolarHijriDate::is_valid`]/[`GregorianDate::is_valid`] tell whether a value names a
//! real day.

use core::{
    fmt::{self, Display},
    str::FromStr,
};

#[cfg(not(feature = "wasm"))]
use pdate_proc::fn_attr;

#[cfg(feature = "py")]
use pdate_proc::py_attr;

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{
    DidSaturate, Dom, Dow, Error, Month, PersianDigits, Year, day_of_week, gregorian_day_number,
    gregorian_to_solar_hijri, parse_numeral, solar_hijri_to_gregorian,
    month::{gregorian_table, solar_hijri_table},
};

/// Which calendar a date value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "c", repr(C))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(eq, eq_int))]
pub enum Calendar {
    /// The Solar Hijri (Jalali) calendar, years counted from 622/3/22.
    SolarHijri,
    /// The proleptic Gregorian calendar.
    Gregorian,
}

/// A Solar Hijri (Jalali) year, month and day.
///
/// Ordered chronologically for valid dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "c", repr(C))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all))]
pub struct SolarHijriDate {
    pub y: Year,
    pub m: Month,
    pub d: Dom,
}

/// A proleptic Gregorian year, month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "c", repr(C))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all))]
pub struct GregorianDate {
    pub y: Year,
    pub m: Month,
    pub d: Dom,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", py_attr(pymethods, new))]
impl SolarHijriDate {
    /// Create a date without checking it (see [`Self::is_valid`]).
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn new(y: Year, m: Month, d: Dom) -> Self {
        Self { y, m, d }
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pymethods)]
impl SolarHijriDate {
    /// Always [`Calendar::SolarHijri`].
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn calendar(&self) -> Calendar {
        Calendar::SolarHijri
    }

    /// Is this a real day: year from 1, month 1..=12 and a day the month has.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn is_valid(&self) -> bool {
        self.y >= 1
            && match solar_hijri_table(self.y as i64).get(self.m) {
                Some(max) => self.d >= 1 && self.d <= max,
                None => false,
            }
    }

    /// Days in the month of this date, 0 for a month outside 1..=12.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn month_length(&self) -> Dom {
        match solar_hijri_table(self.y as i64).get(self.m) {
            Some(v) => v,
            None => 0,
        }
    }

    /// Quarter of the year, 0 for spring (Farvardin to Khordad) to 3 for winter.
    ///
    /// Months outside 1..=12 count as the nearest valid month.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn season(&self) -> u8 {
        let m = if self.m < 1 {
            1
        } else if self.m > 12 {
            12
        } else {
            self.m
        };
        ((m - 1) / 3) as u8
    }

    /// The first day of the following month, Esfand moves to Farvardin of the next year.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn next_month(&self) -> Self {
        if self.m >= 12 {
            Self::new(self.y.saturating_add(1), 1, 1)
        } else {
            Self::new(self.y, self.m + 1, 1)
        }
    }

    /// The first day of the preceding month, Farvardin moves to Esfand of the previous year.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn previous_month(&self) -> Self {
        if self.m <= 1 {
            Self::new(self.y.saturating_sub(1), 12, 1)
        } else {
            Self::new(self.y, self.m - 1, 1)
        }
    }

    /// Convert to the Gregorian calendar (see [`solar_hijri_to_gregorian`]).
    pub fn to_gregorian(&self) -> GregorianDate {
        solar_hijri_to_gregorian(self.y, self.m, self.d)
    }

    /// Day of the week, 0 being Saturday (see [`day_of_week`]).
    pub fn weekday(&self) -> Dow {
        day_of_week(self.y, self.m, self.d)
    }
}

impl SolarHijriDate {
    /// Parse `year/month/day` written in ASCII digits, Persian digits or a mix, and validate it.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut parts = input.split('/');
        let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            tracing::debug!(input, "rejected date without three parts");
            return Err(Error::MalformedDate);
        };

        let date = Self::new(parse_numeral(y)?, parse_numeral(m)?, parse_numeral(d)?);
        if !date.is_valid() {
            tracing::debug!(input, "rejected date that is not on the calendar");
            return Err(Error::InvalidDate {
                year: date.y,
                month: date.m,
                day: date.d,
            });
        }
        Ok(date)
    }

    /// Display this date as `year/month/day` with Persian digits.
    pub const fn persian(&self) -> PersianDigits<&Self> {
        PersianDigits(self)
    }

    /// Today's date (UTC day, no timezone).
    #[cfg(feature = "std")]
    pub fn today() -> Self {
        use crate::FromUnixDays;
        std::time::SystemTime::now().solar_hijri()
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", py_attr(pymethods, new))]
impl GregorianDate {
    /// Create a date without checking it (see [`Self::is_valid`]).
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn new(y: Year, m: Month, d: Dom) -> Self {
        Self { y, m, d }
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", py_attr(pymethods, staticmethod))]
impl GregorianDate {
    /// The date of a proleptic Gregorian day number, 0001/01/01 being day 1.
    ///
    /// Years past the range of [`Year`] are clamped.
    pub fn from_day_number(day: i64) -> Self {
        let z = day.saturating_sub(1);
        let n400 = z.div_euclid(146097);
        let r = z.rem_euclid(146097);
        let n100 = (r / 36524).min(3);
        let r = r - n100 * 36524;
        let n4 = r / 1461;
        let r = r % 1461;
        let n1 = (r / 365).min(3);
        let doy = r - n1 * 365 + 1;

        let y = 400 * n400 + 100 * n100 + 4 * n4 + n1 + 1;
        let (m, d) = gregorian_table(y).split(doy);
        Self {
            y: DidSaturate::<Year>::narrow(y).result,
            m: m as Month,
            d: d as Dom,
        }
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pymethods)]
impl GregorianDate {
    /// Always [`Calendar::Gregorian`].
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn calendar(&self) -> Calendar {
        Calendar::Gregorian
    }

    /// Is this a real day: month 1..=12 and a day the month has.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn is_valid(&self) -> bool {
        match gregorian_table(self.y as i64).get(self.m) {
            Some(max) => self.d >= 1 && self.d <= max,
            None => false,
        }
    }

    /// The day number of this date (see [`gregorian_day_number`]).
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn day_number(&self) -> i64 {
        gregorian_day_number(self.y, self.m, self.d)
    }

    /// Convert to the Solar Hijri calendar (see [`gregorian_to_solar_hijri`]).
    pub fn to_solar_hijri(&self) -> SolarHijriDate {
        gregorian_to_solar_hijri(self.y, self.m, self.d)
    }
}

impl Display for SolarHijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.y, self.m, self.d)
    }
}

impl Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.y, self.m, self.d)
    }
}

impl FromStr for SolarHijriDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<SolarHijriDate> for GregorianDate {
    fn from(value: SolarHijriDate) -> Self {
        value.to_gregorian()
    }
}

impl From<GregorianDate> for SolarHijriDate {
    fn from(value: GregorianDate) -> Self {
        value.to_solar_hijri()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(SolarHijriDate::new(1400, 1, 1).calendar(), Calendar::SolarHijri);
        assert_eq!(GregorianDate::new(2021, 3, 21).calendar(), Calendar::Gregorian);
    }

    #[test]
    fn test_validity() {
        assert!(SolarHijriDate::new(1399, 12, 30).is_valid());
        assert!(!SolarHijriDate::new(1400, 12, 30).is_valid());
        assert!(SolarHijriDate::new(1400, 6, 31).is_valid());
        assert!(!SolarHijriDate::new(1400, 7, 31).is_valid());
        assert!(!SolarHijriDate::new(0, 1, 1).is_valid());
        assert!(!SolarHijriDate::new(1400, 13, 1).is_valid());
        assert!(!SolarHijriDate::new(1400, 1, 0).is_valid());

        assert!(GregorianDate::new(2000, 2, 29).is_valid());
        assert!(!GregorianDate::new(1900, 2, 29).is_valid());
        assert!(GregorianDate::new(-44, 3, 15).is_valid());
    }

    #[test]
    fn test_parse() {
        assert_eq!(SolarHijriDate::parse("1399/12/30"), Ok(SolarHijriDate::new(1399, 12, 30)));
        assert_eq!(SolarHijriDate::parse("۱۴۰۰/۰۱/۰۱"), Ok(SolarHijriDate::new(1400, 1, 1)));
        assert_eq!("۱۴۰۳/2/۹".parse::<SolarHijriDate>(), Ok(SolarHijriDate::new(1403, 2, 9)));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(SolarHijriDate::parse("1400/1"), Err(Error::MalformedDate));
        assert_eq!(SolarHijriDate::parse("1400/1/1/1"), Err(Error::MalformedDate));
        assert_eq!(SolarHijriDate::parse("1400/1/"), Err(Error::Empty));
        assert_eq!(
            SolarHijriDate::parse("1400-1-1"),
            Err(Error::MalformedDate)
        );
        assert_eq!(
            SolarHijriDate::parse("1400/1-1/1"),
            Err(Error::InvalidNumeral {
                position: 1,
                found: '-'
            })
        );
        assert_eq!(
            SolarHijriDate::parse("1400/12/30"),
            Err(Error::InvalidDate {
                year: 1400,
                month: 12,
                day: 30
            })
        );
        assert_eq!(
            SolarHijriDate::parse("0/1/1"),
            Err(Error::InvalidDate {
                year: 0,
                month: 1,
                day: 1
            })
        );
    }

    #[test]
    fn test_display() {
        let v = SolarHijriDate::new(1399, 12, 30);
        assert_eq!(v.to_string(), "1399/12/30");
        assert_eq!(v.persian().to_string(), "۱۳۹۹/۱۲/۳۰");
        assert_eq!(SolarHijriDate::parse(&v.persian().to_string()), Ok(v));
        assert_eq!(GregorianDate::new(2021, 3, 20).to_string(), "2021/3/20");
    }

    #[test]
    fn test_conversions() {
        let j = SolarHijriDate::new(1400, 1, 1);
        let g = GregorianDate::new(2021, 3, 21);
        assert_eq!(j.to_gregorian(), g);
        assert_eq!(g.to_solar_hijri(), j);
        assert_eq!(GregorianDate::from(j), g);
        assert_eq!(SolarHijriDate::from(g), j);
        assert_eq!(j.weekday(), 1);
    }

    #[test]
    fn test_month_navigation() {
        let v = SolarHijriDate::new(1400, 12, 15);
        assert_eq!(v.next_month(), SolarHijriDate::new(1401, 1, 1));
        assert_eq!(v.previous_month(), SolarHijriDate::new(1400, 11, 1));
        let v = SolarHijriDate::new(1400, 1, 31);
        assert_eq!(v.previous_month(), SolarHijriDate::new(1399, 12, 1));
        assert_eq!(v.next_month(), SolarHijriDate::new(1400, 2, 1));
        let mut v = SolarHijriDate::new(1400, 1, 1);
        for _ in 0..12 {
            v = v.next_month();
        }
        assert_eq!(v, SolarHijriDate::new(1401, 1, 1));
    }

    #[test]
    fn test_season_and_length() {
        let seasons: Vec<u8> = (1..=12).map(|m| SolarHijriDate::new(1400, m, 1).season()).collect();
        assert_eq!(seasons, [0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3]);
        assert_eq!(SolarHijriDate::new(1400, 0, 1).season(), 0);
        assert_eq!(SolarHijriDate::new(1400, 6, 1).month_length(), 31);
        assert_eq!(SolarHijriDate::new(1399, 12, 1).month_length(), 30);
        assert_eq!(SolarHijriDate::new(1400, 12, 1).month_length(), 29);
    }

    #[test]
    fn test_ordering() {
        assert!(SolarHijriDate::new(1399, 12, 30) < SolarHijriDate::new(1400, 1, 1));
        assert!(SolarHijriDate::new(1400, 2, 1) > SolarHijriDate::new(1400, 1, 31));
    }

    #[test]
    fn test_day_number_round_trip() {
        for day in [-1_000_000, -365, 0, 1, 59, 60, 719163, 737870, 2_000_000] {
            let date = GregorianDate::from_day_number(day);
            assert!(date.is_valid(), "{date:?}");
            assert_eq!(date.day_number(), day);
        }
        assert_eq!(GregorianDate::from_day_number(1), GregorianDate::new(1, 1, 1));
        assert_eq!(GregorianDate::from_day_number(719163), GregorianDate::new(1970, 1, 1));
        assert_eq!(GregorianDate::from_day_number(0), GregorianDate::new(0, 12, 31));
    }
}
