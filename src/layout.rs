//! Where the days of a Solar Hijri month fall in a Saturday-first week grid.

#[cfg(not(feature = "wasm"))]
use pdate_proc::fn_attr;

#[cfg(feature = "py")]
use pdate_proc::py_attr;

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{Dom, Dow, Month, Year, day_of_week, solar_hijri_month_length};

/// Shape of a month in a 7-column grid: the column of day 1 and how many days follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "c", repr(C))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all))]
pub struct MonthLayout {
    /// Weekday of the first day, which is also the number of empty cells before it.
    pub first_weekday: Dow,
    /// Days in the month.
    pub days: Dom,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", py_attr(pymethods, new))]
impl MonthLayout {
    /// Layout of a Solar Hijri month, a month outside 1..=12 has no days.
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    pub fn new(year: Year, month: Month) -> Self {
        Self {
            first_weekday: day_of_week(year, month, 1),
            days: solar_hijri_month_length(year, month),
        }
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pymethods)]
impl MonthLayout {
    /// Rows needed to show the whole month.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn weeks(&self) -> u8 {
        ((self.first_weekday as Dom + self.days + 6) / 7) as u8
    }

    /// The day shown in a cell, 0 for the blank cells around the month.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn cell(&self, week: u8, column: Dow) -> Dom {
        if column > 6 {
            return 0;
        }
        let day = week as Dom * 7 + column as Dom - self.first_weekday as Dom + 1;
        if day >= 1 && day <= self.days { day } else { 0 }
    }
}

#[cfg_attr(feature = "py", pymethods)]
impl MonthLayout {
    /// Row and column of a day of the month, `None` if the month does not have it.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn position(&self, day: Dom) -> Option<(u8, Dow)> {
        if day < 1 || day > self.days {
            return None;
        }
        let offset = day - 1 + self.first_weekday as Dom;
        Some(((offset / 7) as u8, (offset % 7) as Dow))
    }
}
