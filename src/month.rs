//! Month length tables and Persian names.

use core::ops::Index;

#[cfg(any(not(feature = "wasm"), feature = "c"))]
use pdate_proc::fn_attr;

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{
    Dom, Dow, Month, Year,
    leap::{gregorian_leap, solar_hijri_leap},
};

/// Persian names of the Solar Hijri months, Farvardin first.
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Single letter Persian weekday headers, Saturday first.
pub const WEEKDAY_INITIALS: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

/// Days of each month of a year, 1-indexed.
///
/// Slot 0 holds 0 and is never a month. Built fresh per year, nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "c", repr(C))]
pub struct MonthLengths(pub [Dom; 13]);

impl MonthLengths {
    /// Days in the given month, `None` outside 1..=12.
    pub const fn get(&self, m: Month) -> Option<Dom> {
        if m >= 1 && m <= 12 {
            Some(self.0[m as usize])
        } else {
            None
        }
    }

    /// Total days of the year.
    pub const fn total(&self) -> Dom {
        let mut sum = 0;
        let mut i = 1;
        while i <= 12 {
            sum += self.0[i];
            i += 1;
        }
        sum
    }

    /// Split a day of the year into month and day of month.
    ///
    /// Walks every slot including the sentinel one, so a day of year below 1 stops on month 0 and
    /// is returned unchanged as the day. A day past the end of the year is left over on month 12.
    pub(crate) const fn split(&self, mut doy: i64) -> (i64, i64) {
        let mut m = 0;
        while m < 12 {
            if doy <= self.0[m] as i64 {
                break;
            }
            doy -= self.0[m] as i64;
            m += 1;
        }
        (m as i64, doy)
    }
}

impl Index<usize> for MonthLengths {
    type Output = Dom;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Month lengths of a Solar Hijri year: six months of 31, five of 30 and Esfand of 29 or 30.
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn solar_hijri_month_lengths(year: Year) -> MonthLengths {
    solar_hijri_table(year as i64)
}

/// Month lengths of a Gregorian year.
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn gregorian_month_lengths(year: Year) -> MonthLengths {
    gregorian_table(year as i64)
}

/// Days in a Solar Hijri month, 0 if the month is not 1..=12.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = solarHijriMonthLength))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn solar_hijri_month_length(year: Year, month: Month) -> Dom {
    match solar_hijri_table(year as i64).get(month) {
        Some(v) => v,
        None => 0,
    }
}

/// Days in a Gregorian month, 0 if the month is not 1..=12.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = gregorianMonthLength))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn gregorian_month_length(year: Year, month: Month) -> Dom {
    match gregorian_table(year as i64).get(month) {
        Some(v) => v,
        None => 0,
    }
}

/// Persian name of a Solar Hijri month.
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn month_name(m: Month) -> Option<&'static str> {
    if m >= 1 && m <= 12 {
        Some(MONTH_NAMES[m as usize - 1])
    } else {
        None
    }
}

/// Persian initial of a weekday (0 is Saturday).
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn weekday_initial(dow: Dow) -> Option<&'static str> {
    if (dow as usize) < WEEKDAY_INITIALS.len() {
        Some(WEEKDAY_INITIALS[dow as usize])
    } else {
        None
    }
}

pub(crate) const fn solar_hijri_table(year: i64) -> MonthLengths {
    let esfand = if solar_hijri_leap(year) { 30 } else { 29 };
    MonthLengths([0, 31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, esfand])
}

pub(crate) const fn gregorian_table(year: i64) -> MonthLengths {
    let february = if gregorian_leap(year) { 29 } else { 28 };
    MonthLengths([0, 31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31])
}
