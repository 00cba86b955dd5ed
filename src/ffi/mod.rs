//! Bindings whose Rust signature can't cross the language boundary as is.
//!
//! Everything integer-only is exported from where it is defined. What is left here are the text
//! functions: generic `Display` inputs become plain strings, borrowed names become owned strings
//! and [`Error`](crate::Error) becomes the binding's own exception type.
//!
//! C gets no text functions, only the arithmetic.

#[cfg(any(feature = "wasm", feature = "py"))]
use alloc::string::{String, ToString};

#[cfg(feature = "py")]
use pyo3::{exceptions::PyValueError, prelude::*};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(any(feature = "wasm", feature = "py"))]
use crate::{Dow, Month, SolarHijriDate};

#[cfg(feature = "py")]
impl From<crate::Error> for PyErr {
    fn from(value: crate::Error) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

/// Write the ASCII digits of a string in Persian.
#[cfg(any(feature = "wasm", feature = "py"))]
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = toPersianDigits))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn to_persian_digits(input: &str) -> String {
    crate::to_persian_digits(input)
}

/// Write the Persian digits of a string in ASCII.
#[cfg(any(feature = "wasm", feature = "py"))]
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = toAsciiDigits))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn to_ascii_digits(input: &str) -> String {
    crate::to_ascii_digits(input)
}

/// Read a number written in ASCII or Persian digits.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = parseNumeral)]
pub fn parse_numeral(input: &str) -> Result<i32, JsError> {
    crate::parse_numeral(input).map_err(|e| JsError::new(&e.to_string()))
}

/// Read a number written in ASCII or Persian digits.
#[cfg(feature = "py")]
#[pyfunction(name = "parse_numeral")]
pub fn py_parse_numeral(input: &str) -> PyResult<i32> {
    Ok(crate::parse_numeral(input)?)
}

/// Read and validate a `year/month/day` Solar Hijri date.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = parseSolarHijriDate)]
pub fn parse_solar_hijri_date(input: &str) -> Result<SolarHijriDate, JsError> {
    SolarHijriDate::parse(input).map_err(|e| JsError::new(&e.to_string()))
}

/// Read and validate a `year/month/day` Solar Hijri date.
#[cfg(feature = "py")]
#[pyfunction(name = "parse_solar_hijri_date")]
pub fn py_parse_solar_hijri_date(input: &str) -> PyResult<SolarHijriDate> {
    Ok(SolarHijriDate::parse(input)?)
}

/// Persian name of a Solar Hijri month.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = monthName)]
pub fn month_name(m: Month) -> Option<String> {
    crate::month_name(m).map(String::from)
}

/// Persian initial of a weekday (0 is Saturday).
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = weekdayInitial)]
pub fn weekday_initial(dow: Dow) -> Option<String> {
    crate::weekday_initial(dow).map(String::from)
}

#[cfg(any(feature = "wasm", feature = "py"))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pymethods)]
impl SolarHijriDate {
    /// The date as `year/month/day` in Persian digits.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = toPersianString))]
    pub fn to_persian_string(&self) -> String {
        self.persian().to_string()
    }

    /// The date as `year/month/day` in ASCII digits.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = toString))]
    #[cfg_attr(feature = "py", pyo3(name = "__str__"))]
    pub fn to_ascii_string(&self) -> String {
        self.to_string()
    }
}
