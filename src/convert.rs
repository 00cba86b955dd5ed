//! Conversion between the Solar Hijri and the proleptic Gregorian calendars.
//!
//! Both directions count days from a common origin: the Gregorian side with the usual
//! `365 * y + y / 4 - y / 100 + y / 400` identity and the Solar Hijri side with the same 2820-year
//! cycle as [`crate::is_solar_hijri_leap`]. Three constants align the two counts. The day of year
//! left after subtracting the start of the guessed year is then carried over whole years and split
//! into a month and a day.
//!
//! Nothing is validated. Out of range months and days go through the same arithmetic and give a
//! consistent, if meaningless, answer. Integer division truncates toward zero throughout, negative
//! years included.

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "c")]
use pdate_proc::fn_attr;

use crate::{
    DidSaturate, Dom, Dow, EPOCH_GREGORIAN_DAY, EPOCH_GREGORIAN_MONTH, EPOCH_GREGORIAN_YEAR,
    GregorianDate, Month, PRE_EPOCH_SENTINEL, SolarHijriDate, Year,
    leap::{
        GREGORIAN_CYCLE_DAYS, GREGORIAN_CYCLE_YEARS, SOLAR_HIJRI_CYCLE_DAYS,
        SOLAR_HIJRI_CYCLE_YEARS, SOLAR_HIJRI_PERIODIC_FROM, gregorian_days_in, gregorian_leap,
        solar_hijri_days_in, solar_hijri_leap,
    },
    month::{gregorian_table, solar_hijri_table},
};

/// Subtracted from the Gregorian day count to align it with the Solar Hijri one.
const GREGORIAN_ALIGNMENT: i64 = 227180;

/// Subtracted from the Solar Hijri day count (added on the way back).
const SOLAR_HIJRI_ALIGNMENT: i64 = 285;

/// Leap days the 2820 cycle formula counts before year 1.
const LEAP_DAYS_BEFORE_EPOCH: i64 = 568;

/// Gregorian year of the Solar Hijri year with the same number minus this.
const YEAR_SHIFT: i64 = 621;

/// Days before 1 January of the Gregorian year (truncating division).
const fn gregorian_days_before(gy: i64) -> i64 {
    let p = gy - 1;
    365 * p + p / 4 - p / 100 + p / 400
}

/// Days before 1 Farvardin of the Solar Hijri year, 1/1/1 being day 1.
const fn solar_hijri_days_before(jy: i64) -> i64 {
    365 * (jy - 1) + (jy - 1 + 2346) * 683 / 2820 - LEAP_DAYS_BEFORE_EPOCH
}

/// Days of the Solar Hijri year before the first of the month (months past 12 keep the 30-day
/// pattern, months below 1 go negative).
const fn solar_hijri_days_before_month(jm: i64) -> i64 {
    30 * (jm - 1) + if jm < 7 { jm - 1 } else { 6 }
}

/// Days of the Gregorian year before the first of the month, counting at most the 12 real months.
const fn gregorian_days_before_month(gy: i64, gm: i64) -> i64 {
    let table = gregorian_table(gy);
    let mut sum = 0;
    let mut m = 1;
    while m < gm && m <= 12 {
        sum += table.0[m as usize] as i64;
        m += 1;
    }
    sum
}

/// Whole-year stepping of one calendar.
///
/// The carry functions give exactly what stepping one year at a time would, but skip whole leap
/// cycles first so the work is bounded for any input.
struct YearWalk {
    days_in: fn(i64) -> i64,
    cycle_years: i64,
    cycle_days: i64,
    /// `Some((from, len))` when the cycle only repeats from year `from` on and every year below
    /// it has `len` days, `None` when every year is part of the cycle.
    uniform_below: Option<(i64, i64)>,
}

const GREGORIAN: YearWalk = YearWalk {
    days_in: gregorian_days_in,
    cycle_years: GREGORIAN_CYCLE_YEARS,
    cycle_days: GREGORIAN_CYCLE_DAYS,
    uniform_below: None,
};

const SOLAR_HIJRI: YearWalk = YearWalk {
    days_in: solar_hijri_days_in,
    cycle_years: SOLAR_HIJRI_CYCLE_YEARS,
    cycle_days: SOLAR_HIJRI_CYCLE_DAYS,
    uniform_below: Some((SOLAR_HIJRI_PERIODIC_FROM, 366)),
};

impl YearWalk {
    /// While `doy` is past 366, take the length of `year` off it and move to the next year.
    fn carry_forward(&self, mut year: i64, mut doy: i64) -> (i64, i64) {
        while doy > 366 {
            if let Some((from, len)) = self.uniform_below {
                if year < from {
                    let steps = ((doy - 366 + len - 1) / len).min(from - year);
                    doy -= steps * len;
                    year += steps;
                    continue;
                }
            }

            let cycles = (doy - 367) / self.cycle_days;
            if cycles > 0 {
                tracing::trace!(year, cycles, "carrying whole leap cycles forward");
                doy -= cycles * self.cycle_days;
                year += cycles * self.cycle_years;
            }
            while doy > 366 {
                doy -= (self.days_in)(year);
                year += 1;
            }
        }
        (year, doy)
    }

    /// While `doy` is not positive, move to the previous year and add its length.
    fn carry_backward(&self, mut year: i64, mut doy: i64) -> (i64, i64) {
        while doy <= 0 {
            let room = match self.uniform_below {
                Some((from, len)) if year <= from => {
                    let steps = -doy / len + 1;
                    doy += steps * len;
                    year -= steps;
                    break;
                }
                Some((from, _)) => year.saturating_sub(from) / self.cycle_years,
                None => i64::MAX,
            };

            let cycles = (-doy / self.cycle_days).min(room);
            if cycles > 0 {
                tracing::trace!(year, cycles, "carrying whole leap cycles backward");
                doy += cycles * self.cycle_days;
                year -= cycles * self.cycle_years;
            }
            while doy <= 0 && self.uniform_below.is_none_or(|(from, _)| year > from) {
                year -= 1;
                doy += (self.days_in)(year);
            }
        }
        (year, doy)
    }
}

/// A 366th day in a 365-day year is the first day of the next one.
const fn roll_missing_leap_day(year: i64, doy: i64, is_leap: bool) -> (i64, i64) {
    if doy == 366 && !is_leap {
        (year + 1, 1)
    } else {
        (year, doy)
    }
}

/// Narrow the wide results, a year past the range of [`Year`] is clamped.
fn narrow_ymd(y: i64, m: i64, d: i64) -> (Year, Month, Dom) {
    let year = DidSaturate::<Year>::narrow(y);
    let day = DidSaturate::<Year>::narrow(d);
    if year.did_saturate || day.did_saturate {
        tracing::debug!(y, m, d, "converted date does not fit 32 bits, saturating");
    }
    (year.result, m as Month, day.result)
}

/// Convert a Solar Hijri date to the proleptic Gregorian calendar.
///
/// Months and days are not validated. A day of year that ends up below 1 (a non-positive day for
/// example) is returned as month 0 with that day.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = solarHijriToGregorian))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn solar_hijri_to_gregorian(jy: Year, jm: Month, jd: Dom) -> GregorianDate {
    let (jy, jm, jd) = (jy as i64, jm as i64, jd as i64);

    let gy = jy + YEAR_SHIFT;
    let dg = gregorian_days_before(gy) - GREGORIAN_ALIGNMENT;
    let dj = solar_hijri_days_before(jy) + solar_hijri_days_before_month(jm) + jd
        - SOLAR_HIJRI_ALIGNMENT;

    let (gy, gd) = GREGORIAN.carry_forward(gy, dj - dg);
    let (gy, gd) = roll_missing_leap_day(gy, gd, gregorian_leap(gy));
    let (gm, gd) = gregorian_table(gy).split(gd);

    let (y, m, d) = narrow_ymd(gy, gm, gd);
    GregorianDate { y, m, d }
}

/// Convert a proleptic Gregorian date to the Solar Hijri calendar.
///
/// Dates before 622/3/22, the first day of the Solar Hijri calendar, give
/// [`PRE_EPOCH_SENTINEL`] (1/1/1). Months past 12 count as the end of the year.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = gregorianToSolarHijri))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn gregorian_to_solar_hijri(gy: Year, gm: Month, gd: Dom) -> SolarHijriDate {
    if gy < EPOCH_GREGORIAN_YEAR
        || (gy == EPOCH_GREGORIAN_YEAR && gm < EPOCH_GREGORIAN_MONTH)
        || (gy == EPOCH_GREGORIAN_YEAR && gm == EPOCH_GREGORIAN_MONTH && gd < EPOCH_GREGORIAN_DAY)
    {
        tracing::debug!(gy, gm, gd, "date precedes the solar hijri epoch, substituting 1/1/1");
        return PRE_EPOCH_SENTINEL;
    }

    let (gy, gm, gd) = (gy as i64, gm as i64, gd as i64);

    let jy = gy - YEAR_SHIFT;
    let dj = solar_hijri_days_before(jy);
    let dg = gd + gregorian_days_before(gy) - GREGORIAN_ALIGNMENT
        + gregorian_days_before_month(gy, gm)
        + SOLAR_HIJRI_ALIGNMENT;

    let (jy, jd) = SOLAR_HIJRI.carry_backward(jy, dg - dj);
    let (jy, jd) = SOLAR_HIJRI.carry_forward(jy, jd);
    let (jy, jd) = roll_missing_leap_day(jy, jd, solar_hijri_leap(jy));
    let (jm, jd) = solar_hijri_table(jy).split(jd);

    let (y, m, d) = narrow_ymd(jy, jm, jd);
    SolarHijriDate { y, m, d }
}

/// The proleptic Gregorian day number (Rata Die), 0001/01/01 being day 1.
///
/// Unlike the conversions this floors, so it keeps counting correctly through negative years.
/// Months below 1 add no month days, months past 12 add the whole year. The day is taken as is.
pub const fn gregorian_day_number(gy: Year, gm: Month, gd: Dom) -> i64 {
    let p = gy as i64 - 1;
    365 * p + p.div_euclid(4) - p.div_euclid(100)
        + p.div_euclid(400)
        + gregorian_days_before_month(gy as i64, gm as i64)
        + gd as i64
}

/// Day of the week of a Solar Hijri date, 0 being Saturday.
///
/// Goes through the Gregorian date, whose Sunday-first weekday is shifted by one.
#[cfg_attr(feature = "wasm", wasm_bindgen(js_name = dayOfWeek))]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn day_of_week(jy: Year, jm: Month, jd: Dom) -> Dow {
    let GregorianDate { y, m, d } = solar_hijri_to_gregorian(jy, jm, jd);
    // day 1 is a Monday
    let sunday_first = gregorian_day_number(y, m, d).rem_euclid(7);
    ((sunday_first + 1) % 7) as Dow
}
