//! Yahrzeit and birthday anniversaries.
//!
//! Both follow Reingold and Dershowitz, *Calendrical Calculations*: dates
//! that do not exist in the target year (30 Cheshvan, 30 Kislev, Adar I/II)
//! move to a customary substitute.

use crate::consts::MAX_YEAR;
use crate::{CalendarError, DateInput, GregorianDate, HebrewCalendar, HebrewDate, Month};

/// Anniversary of a death in Hebrew year `hyear`.
///
/// Returns `None` when `hyear` is not after the year of death.
///
/// * 30 Cheshvan or 30 Kislev: if that day was missing in the first
///   anniversary year, the yahrzeit is the day before 1 Kislev (1 Tevet).
/// * Adar II: same day in the last month of `hyear`.
/// * 30 Adar I in a common `hyear`: 30 Sh'vat.
///
/// # Errors
/// Propagates the conversion error of `original`; `InvalidYear` if `hyear`
/// is past `MAX_YEAR`.
pub fn yahrzeit(
    cal: &HebrewCalendar,
    hyear: i64,
    original: impl Into<DateInput>,
) -> Result<Option<HebrewDate>, CalendarError> {
    let death = HebrewDate::from_input(cal, original)?;
    if hyear <= death.year() {
        return Ok(None);
    }
    if hyear > MAX_YEAR {
        return Err(CalendarError::InvalidYear(hyear));
    }

    let (mut month, mut day) = (death.month(), death.day());
    let first = death.year() + 1;

    if month == Month::Cheshvan && day == 30 && !cal.long_cheshvan(first) {
        let eve = cal.hebrew_to_absolute(hyear, Month::Kislev, 1)? - 1;
        let substitute = HebrewDate::from_absolute(cal, eve)?;
        (month, day) = (substitute.month(), substitute.day());
    } else if month == Month::Kislev && day == 30 && cal.short_kislev(first) {
        let eve = cal.hebrew_to_absolute(hyear, Month::Tevet, 1)? - 1;
        let substitute = HebrewDate::from_absolute(cal, eve)?;
        (month, day) = (substitute.month(), substitute.day());
    } else if month == Month::AdarII {
        month = last_month(hyear)?;
    } else if month == Month::AdarI && day == 30 && !cal.is_leap_year(hyear) {
        month = Month::Shvat;
    }

    (month, day) = roll_to_rosh_chodesh(cal, hyear, month, day);
    HebrewDate::new(cal, hyear, month, day).map(Some)
}

/// Birthday or other non-yahrzeit anniversary in Hebrew year `hyear`.
///
/// Returns the original date when `hyear` is its own year and `None` when
/// `hyear` is earlier.
///
/// * Adar of a common year or Adar II of a leap year: last month of `hyear`.
/// * 30 Cheshvan, 30 Kislev: 1st of the next month when missing in `hyear`.
/// * 30 Adar I of a leap year in a common `hyear`: 1 Nisan.
///
/// # Errors
/// Propagates the conversion error of `original`; `InvalidYear` if `hyear`
/// is past `MAX_YEAR`.
pub fn birthday_or_anniversary(
    cal: &HebrewCalendar,
    hyear: i64,
    original: impl Into<DateInput>,
) -> Result<Option<HebrewDate>, CalendarError> {
    let orig = HebrewDate::from_input(cal, original)?;
    if hyear == orig.year() {
        return Ok(Some(orig));
    }
    if hyear < orig.year() {
        return Ok(None);
    }
    if hyear > MAX_YEAR {
        return Err(CalendarError::InvalidYear(hyear));
    }

    let orig_leap = orig.is_leap_year();
    let (mut month, mut day) = (orig.month(), orig.day());

    if (month == Month::AdarI && !orig_leap) || (month == Month::AdarII && orig_leap) {
        month = last_month(hyear)?;
    } else if month == Month::AdarI && day == 30 && orig_leap && !cal.is_leap_year(hyear) {
        (month, day) = (Month::Nisan, 1);
    } else {
        (month, day) = roll_to_rosh_chodesh(cal, hyear, month, day);
    }

    HebrewDate::new(cal, hyear, month, day).map(Some)
}

/// [`yahrzeit`] as a Gregorian date.
///
/// # Errors
/// Propagates the conversion error of `original`.
pub fn yahrzeit_gregorian(
    cal: &HebrewCalendar,
    hyear: i64,
    original: impl Into<DateInput>,
) -> Result<Option<GregorianDate>, CalendarError> {
    Ok(yahrzeit(cal, hyear, original)?.map(|date| date.greg(cal)))
}

/// [`birthday_or_anniversary`] as a Gregorian date.
///
/// # Errors
/// Propagates the conversion error of `original`.
pub fn birthday_or_anniversary_gregorian(
    cal: &HebrewCalendar,
    hyear: i64,
    original: impl Into<DateInput>,
) -> Result<Option<GregorianDate>, CalendarError> {
    Ok(birthday_or_anniversary(cal, hyear, original)?.map(|date| date.greg(cal)))
}

/// Adar in a common year, Adar II in a leap year
fn last_month(year: i64) -> Result<Month, CalendarError> {
    Month::new(crate::months_in_year(year))
}

fn roll_to_rosh_chodesh(cal: &HebrewCalendar, year: i64, month: Month, day: u8) -> (Month, u8) {
    match (month, day) {
        (Month::Cheshvan, 30) if !cal.long_cheshvan(year) => (Month::Kislev, 1),
        (Month::Kislev, 30) if cal.short_kislev(year) => (Month::Tevet, 1),
        _ => (month, day),
    }
}
