//! Leap year rules of both calendars and the year lengths they imply.
//!
//! The Solar Hijri rule is the arithmetic 2820-year cycle: `((y + 2346) * 683) % 2820 < 683`. It
//! is not the astronomical calendar, but every table and conversion in this crate is built on it
//! so it must not be swapped for a lookup table.

#[cfg(any(not(feature = "wasm"), feature = "c"))]
use pdate_proc::fn_attr;

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::Year;

/// Years in one full Gregorian leap cycle.
pub const GREGORIAN_CYCLE_YEARS: i64 = 400;

/// Days in [`GREGORIAN_CYCLE_YEARS`] consecutive Gregorian years.
pub const GREGORIAN_CYCLE_DAYS: i64 = 400 * 365 + 97;

/// Years in one full Solar Hijri leap cycle.
pub const SOLAR_HIJRI_CYCLE_YEARS: i64 = 2820;

/// Days in [`SOLAR_HIJRI_CYCLE_YEARS`] consecutive Solar Hijri years (683 of them leap).
pub const SOLAR_HIJRI_CYCLE_DAYS: i64 = 2820 * 365 + 683;

/// The first Solar Hijri year from which [`is_solar_hijri_leap`] repeats every 2820 years.
///
/// Below it `(y + 2346) * 683` is negative, the truncating remainder never reaches 683 and every
/// year is leap.
pub(crate) const SOLAR_HIJRI_PERIODIC_FROM: i64 = -2346;

/// Is the Solar Hijri year a leap year (366 days).
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = isSolarHijriLeap))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn is_solar_hijri_leap(year: Year) -> bool {
    solar_hijri_leap(year as i64)
}

/// Is the Gregorian year a leap year (366 days).
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = isGregorianLeap))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn is_gregorian_leap(year: Year) -> bool {
    gregorian_leap(year as i64)
}

/// The number of days in a Solar Hijri year.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = solarHijriYearLength))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn solar_hijri_year_length(year: Year) -> u16 {
    solar_hijri_days_in(year as i64) as u16
}

/// The number of days in a Gregorian year.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = gregorianYearLength))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn gregorian_year_length(year: Year) -> u16 {
    gregorian_days_in(year as i64) as u16
}

// wide variants, years may leave the `Year` range while normalizing

pub(crate) const fn solar_hijri_leap(year: i64) -> bool {
    ((year + 2346) * 683) % 2820 < 683
}

pub(crate) const fn gregorian_leap(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub(crate) const fn solar_hijri_days_in(year: i64) -> i64 {
    if solar_hijri_leap(year) { 366 } else { 365 }
}

pub(crate) const fn gregorian_days_in(year: i64) -> i64 {
    if gregorian_leap(year) { 366 } else { 365 }
}
