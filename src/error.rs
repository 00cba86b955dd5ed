//! Error type of the parsing operations.
//!
//! Calendar arithmetic itself never fails, only turning text into numbers and dates does.

use crate::{Dom, Month, Year};

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Returned when a numeral has no digits at all.
    #[error("empty numeral")]
    Empty,

    /// Returned when a numeral holds something other than ASCII or Persian digits.
    #[error("invalid numeral: {found:?} at position {position}")]
    InvalidNumeral {
        /// Character offset of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// Returned when a numeral is too large for a year, month or day.
    #[error("numeral overflows a 32-bit integer")]
    Overflow,

    /// Returned when a date string is not `year/month/day`.
    #[error("malformed date, expected year/month/day")]
    MalformedDate,

    /// Returned when the parsed numbers do not name a day of the Solar Hijri calendar.
    #[error("invalid date: {year}/{month}/{day}")]
    InvalidDate {
        /// The parsed year.
        year: Year,
        /// The parsed month.
        month: Month,
        /// The parsed day of month.
        day: Dom,
    },
}
