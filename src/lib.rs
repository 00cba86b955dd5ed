#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(feature = "py", allow(unsafe_op_in_unsafe_fn))] // python, staticmethods and new

#[cfg(feature = "std")]
extern crate alloc;

mod convert;
mod date;
mod error;
mod layout;
mod leap;
mod month;
mod numeral;
mod traits;
mod utility;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use convert::{
    day_of_week, gregorian_day_number, gregorian_to_solar_hijri, solar_hijri_to_gregorian,
};
pub use date::{Calendar, GregorianDate, SolarHijriDate};
pub use error::Error;
pub use layout::MonthLayout;
pub use leap::{
    GREGORIAN_CYCLE_DAYS, GREGORIAN_CYCLE_YEARS, SOLAR_HIJRI_CYCLE_DAYS, SOLAR_HIJRI_CYCLE_YEARS,
    gregorian_year_length, is_gregorian_leap, is_solar_hijri_leap, solar_hijri_year_length,
};
pub use month::{
    MONTH_NAMES, MonthLengths, WEEKDAY_INITIALS, gregorian_month_length, gregorian_month_lengths,
    month_name, solar_hijri_month_length, solar_hijri_month_lengths, weekday_initial,
};
#[cfg(feature = "std")]
pub use numeral::{to_ascii_digits, to_persian_digits};
pub use numeral::{
    AsciiDigits, PERSIAN_DIGITS, PersianDigits, digit_value, parse_numeral, to_ascii_digit,
    to_persian_digit,
};
pub use traits::FromUnixDays;
pub use utility::DidSaturate;

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "py")]
#[pymodule]
fn pdate(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(is_solar_hijri_leap, m)?)?;
    m.add_function(wrap_pyfunction!(is_gregorian_leap, m)?)?;
    m.add_function(wrap_pyfunction!(solar_hijri_year_length, m)?)?;
    m.add_function(wrap_pyfunction!(gregorian_year_length, m)?)?;
    m.add_function(wrap_pyfunction!(solar_hijri_month_length, m)?)?;
    m.add_function(wrap_pyfunction!(gregorian_month_length, m)?)?;
    m.add_function(wrap_pyfunction!(solar_hijri_to_gregorian, m)?)?;
    m.add_function(wrap_pyfunction!(gregorian_to_solar_hijri, m)?)?;
    m.add_function(wrap_pyfunction!(day_of_week, m)?)?;
    m.add_function(wrap_pyfunction!(month_name, m)?)?;
    m.add_function(wrap_pyfunction!(weekday_initial, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::to_persian_digits, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::to_ascii_digits, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::py_parse_numeral, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::py_parse_solar_hijri_date, m)?)?;
    m.add_class::<Calendar>()?;
    m.add_class::<SolarHijriDate>()?;
    m.add_class::<GregorianDate>()?;
    m.add_class::<MonthLayout>()?;
    Ok(())
}

#[cfg(all(not(test), not(feature = "std")))]
#[panic_handler]
fn panic_handler(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

/// Counter for years, in either calendar.
pub type Year = i32;

/// Counter for months of a year (1-based; 0 only appears for malformed input).
///
/// Signed so that out-of-range input is carried through the arithmetic instead of rejected.
pub type Month = i32;

/// Counter for days of a month.
pub type Dom = i32;

/// Day of the week, 0 is Saturday and 6 is Friday.
pub type Dow = u8;

/// The Gregorian year holding the first day of the Solar Hijri calendar.
pub const EPOCH_GREGORIAN_YEAR: Year = 622;

/// The Gregorian month holding the first day of the Solar Hijri calendar.
pub const EPOCH_GREGORIAN_MONTH: Month = 3;

/// The Gregorian day of month of the first day of the Solar Hijri calendar.
pub const EPOCH_GREGORIAN_DAY: Dom = 22;

/// Returned by [`gregorian_to_solar_hijri`] for dates before the epoch (1/1/1).
pub const PRE_EPOCH_SENTINEL: SolarHijriDate = SolarHijriDate { y: 1, m: 1, d: 1 };

/// Largest (exclusive) year a date picker lets its user navigate to.
pub const MAX_YEAR: Year = 275139;

/// Is the year in the range a picker lets its user navigate to (`0 < y < MAX_YEAR`).
pub const fn is_navigable_year(y: Year) -> bool {
    y > 0 && y < MAX_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    // Since the library is `cdylib`, Rust doesn't test the snippets in the code, this is a manual
    // copy of the code mentioned in the readme.
    #[test]
    #[cfg(feature = "std")]
    fn test_readme() {
        let nowruz = SolarHijriDate::parse("۱۴۰۰/۱/۱").unwrap();
        assert_eq!(nowruz.to_gregorian(), GregorianDate::new(2021, 3, 21));
        assert_eq!(nowruz.weekday(), 1);
        assert_eq!(month_name(nowruz.m), Some("فروردین"));
        assert_eq!(nowruz.persian().to_string(), "۱۴۰۰/۱/۱");
        assert_eq!(to_ascii_digits("۱۳۹۹/۱۲/۳۰"), "1399/12/30");
    }

    #[test]
    fn test_navigable_year_bounds() {
        assert!(!is_navigable_year(0));
        assert!(is_navigable_year(1));
        assert!(is_navigable_year(MAX_YEAR - 1));
        assert!(!is_navigable_year(MAX_YEAR));
    }

    #[test]
    fn test_sentinel_is_first_day() {
        assert_eq!(PRE_EPOCH_SENTINEL, SolarHijriDate::new(1, 1, 1));
        assert_eq!(
            PRE_EPOCH_SENTINEL.to_gregorian(),
            GregorianDate::new(EPOCH_GREGORIAN_YEAR, EPOCH_GREGORIAN_MONTH, EPOCH_GREGORIAN_DAY)
        );
    }
}
