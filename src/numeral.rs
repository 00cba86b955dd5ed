//! Transliteration between ASCII digits and Persian (extended Arabic-Indic) digits.
//!
//! Every character is mapped exactly once, in a single pass, so already substituted output is
//! never scanned again. Non-digit characters pass through untouched.

use core::fmt::{self, Display, Write};

#[cfg(feature = "std")]
use alloc::string::{String, ToString};

use crate::Error;

/// Persian digits zero to nine (U+06F0 to U+06F9).
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Map an ASCII digit to its Persian glyph, anything else is returned as is.
pub const fn to_persian_digit(c: char) -> char {
    match c {
        '0'..='9' => PERSIAN_DIGITS[(c as u32 - '0' as u32) as usize],
        _ => c,
    }
}

/// Map a Persian digit to its ASCII glyph, anything else is returned as is.
pub const fn to_ascii_digit(c: char) -> char {
    match c {
        '۰'..='۹' => (b'0' + (c as u32 - '۰' as u32) as u8) as char,
        _ => c,
    }
}

/// The value of an ASCII or Persian digit.
pub const fn digit_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some((c as u32 - '0' as u32) as u8),
        '۰'..='۹' => Some((c as u32 - '۰' as u32) as u8),
        _ => None,
    }
}

/// Writer that maps every character before passing it on.
struct Transliterate<'a, W: ?Sized> {
    inner: &'a mut W,
    map: fn(char) -> char,
}

impl<W: Write + ?Sized> Write for Transliterate<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        s.chars().try_for_each(|c| self.inner.write_char((self.map)(c)))
    }
}

/// Display the wrapped value with its ASCII digits written in Persian.
///
/// Accepts anything [`Display`], integers and strings alike, without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersianDigits<T>(pub T);

impl<T: Display> Display for PersianDigits<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Transliterate {
            inner: f,
            map: to_persian_digit,
        };
        write!(out, "{}", self.0)
    }
}

/// Display the wrapped value with its Persian digits written in ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiDigits<T>(pub T);

impl<T: Display> Display for AsciiDigits<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Transliterate {
            inner: f,
            map: to_ascii_digit,
        };
        write!(out, "{}", self.0)
    }
}

/// Replace every ASCII digit of the value's decimal/string form with its Persian glyph.
#[cfg(feature = "std")]
pub fn to_persian_digits<T: Display>(input: T) -> String {
    PersianDigits(input).to_string()
}

/// Replace every Persian digit of the value's string form with its ASCII glyph.
#[cfg(feature = "std")]
pub fn to_ascii_digits<T: Display>(input: T) -> String {
    AsciiDigits(input).to_string()
}

/// Read a non-negative number written in ASCII digits, Persian digits or a mix of both.
///
/// Anything other than a digit is rejected, there is no implicit trimming or sign.
pub fn parse_numeral(input: &str) -> Result<i32, Error> {
    if input.is_empty() {
        return Err(Error::Empty);
    }

    input.chars().enumerate().try_fold(0i32, |acc, (position, found)| {
        let digit = digit_value(found).ok_or(Error::InvalidNumeral { position, found })?;
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(digit as i32))
            .ok_or(Error::Overflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    #[cfg(feature = "std")]
    fn test_year_to_persian() {
        assert_eq!(to_persian_digits(1399), "۱۳۹۹");
        assert_eq!(to_persian_digits("1399"), "۱۳۹۹");
        assert_eq!(to_persian_digits(-7), "-۷");
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_non_digits_pass_through() {
        assert_eq!(to_persian_digits("1400/1/1 a"), "۱۴۰۰/۱/۱ a");
        assert_eq!(to_ascii_digits("۱۴۰۰/۰۱/۰۱ ب"), "1400/01/01 ب");
        assert_eq!(to_ascii_digits("12۳۴"), "1234");
    }

    #[test]
    fn test_single_chars() {
        for (i, p) in PERSIAN_DIGITS.iter().enumerate() {
            let a = char::from(b'0' + i as u8);
            assert_eq!(to_persian_digit(a), *p);
            assert_eq!(to_ascii_digit(*p), a);
            assert_eq!(digit_value(a), Some(i as u8));
            assert_eq!(digit_value(*p), Some(i as u8));
        }
        assert_eq!(to_persian_digit('x'), 'x');
        assert_eq!(to_ascii_digit('x'), 'x');
        // arabic-indic digits are a different block and stay as they are
        assert_eq!(to_ascii_digit('٣'), '٣');
        assert_eq!(digit_value('٣'), None);
    }

    #[test]
    fn test_adaptors_do_not_allocate_for_formatting() {
        let mut buf = [0u8; 16];
        let mut cursor = Cursor(&mut buf, 0);
        write!(cursor, "{}", PersianDigits(42)).unwrap();
        let n = cursor.1;
        assert_eq!(core::str::from_utf8(&buf[..n]).unwrap(), "۴۲");
        assert_eq!(n, "۴۲".len());
    }

    struct Cursor<'a>(&'a mut [u8], usize);

    impl Write for Cursor<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            let end = self.1 + s.len();
            self.0.get_mut(self.1..end).ok_or(fmt::Error)?.copy_from_slice(s.as_bytes());
            self.1 = end;
            Ok(())
        }
    }

    #[test]
    fn test_parse_numeral() {
        assert_eq!(parse_numeral("1399"), Ok(1399));
        assert_eq!(parse_numeral("۱۳۹۹"), Ok(1399));
        assert_eq!(parse_numeral("۱3۹9"), Ok(1399));
        assert_eq!(parse_numeral("007"), Ok(7));
    }

    #[test]
    fn test_parse_numeral_rejects() {
        assert_eq!(parse_numeral(""), Err(Error::Empty));
        assert_eq!(
            parse_numeral("۱۲a"),
            Err(Error::InvalidNumeral {
                position: 2,
                found: 'a'
            })
        );
        assert_eq!(
            parse_numeral(" 1"),
            Err(Error::InvalidNumeral {
                position: 0,
                found: ' '
            })
        );
        assert_eq!(
            parse_numeral("-1"),
            Err(Error::InvalidNumeral {
                position: 0,
                found: '-'
            })
        );
        assert_eq!(parse_numeral("2147483647"), Ok(i32::MAX));
        assert_eq!(parse_numeral("2147483648"), Err(Error::Overflow));
    }

    #[cfg(feature = "std")]
    proptest! {
        #[test]
        fn prop_round_trip_ascii(s in "[0-9a-zA-Z/ ._-]{0,32}") {
            prop_assert_eq!(to_ascii_digits(to_persian_digits(&s)), s);
        }

        #[test]
        fn prop_ascii_idempotent(s in "\\PC{0,32}") {
            let once = to_ascii_digits(&s);
            prop_assert_eq!(to_ascii_digits(&once), once.clone());
            prop_assert!(!once.chars().any(|c| ('۰'..='۹').contains(&c)));
        }

        #[test]
        fn prop_same_char_count(s in "\\PC{0,32}") {
            prop_assert_eq!(to_persian_digits(&s).chars().count(), s.chars().count());
        }

        #[test]
        fn prop_parse_matches_display(n in 0i32..=i32::MAX) {
            prop_assert_eq!(parse_numeral(&to_persian_digits(n)), Ok(n));
            prop_assert_eq!(parse_numeral(&n.to_string()), Ok(n));
        }
    }
}
