//! Proleptic Gregorian calendar ↔ R.D. conversion.
//!
//! R.D. 1 is Monday, January 1, year 1. Years before 1 are astronomical
//! (year 0 is 1 BCE) and every date is valid, the calendar being proleptic.

use std::fmt;
use std::str::FromStr;

use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, DAYS_PER_4_YEARS,
    DAYS_PER_YEAR, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH,
    LEAP_YEAR_CYCLE, MAX_GREGORIAN_MONTH, MAX_GREGORIAN_YEAR,
};
use crate::CalendarError;

/// A validated proleptic Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year:  i64,
    month: u8,
    day:   u8,
}

pub const fn is_gregorian_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_gregorian_month(month: u8, year: i64) -> u8 {
    debug_assert!(month != 0 && month <= MAX_GREGORIAN_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

impl GregorianDate {
    /// Creates a Gregorian date, validating month and day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidGregorianDate` if the month is not 1-12,
    /// the day does not exist in that month, or `|year|` exceeds
    /// `MAX_GREGORIAN_YEAR`.
    pub const fn new(year: i64, month: u8, day: u8) -> Result<Self, CalendarError> {
        if year.unsigned_abs() > MAX_GREGORIAN_YEAR.unsigned_abs()
            || month == 0
            || month > MAX_GREGORIAN_MONTH
            || day == 0
            || day > days_in_gregorian_month(month, year)
        {
            return Err(CalendarError::InvalidGregorianDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// R.D. (Rata Die) day of this date.
    pub const fn to_absolute(&self) -> i64 {
        let py = self.year - 1;
        let month = self.month as i64;
        let march_correction = if self.month <= FEBRUARY {
            0
        } else if is_gregorian_leap_year(self.year) {
            -1
        } else {
            -2
        };
        DAYS_PER_YEAR * py + py.div_euclid(LEAP_YEAR_CYCLE) - py.div_euclid(CENTURY_CYCLE)
            + py.div_euclid(GREGORIAN_CYCLE)
            + (367 * month - 362).div_euclid(12)
            + march_correction
            + self.day as i64
    }

    /// Gregorian date of an R.D. (Rata Die) day.
    pub fn from_absolute(abs: i64) -> Self {
        let year = year_from_absolute(abs);
        let prior_days = abs - Self::first_of(year, 1).to_absolute();
        let correction = if abs < Self::first_of(year, 3).to_absolute() {
            0
        } else if is_gregorian_leap_year(year) {
            1
        } else {
            2
        };
        let month = (12 * (prior_days + correction) + 373).div_euclid(367);
        // month is 1..=12 and day 1..=31 by construction
        let month = u8::try_from(month).unwrap_or(1);
        let day = abs - Self::first_of(year, month).to_absolute() + 1;
        let day = u8::try_from(day).unwrap_or(1);
        Self { year, month, day }
    }

    const fn first_of(year: i64, month: u8) -> Self {
        Self { year, month, day: 1 }
    }
}

fn year_from_absolute(abs: i64) -> i64 {
    let l0 = abs - 1;
    let n400 = l0.div_euclid(DAYS_PER_400_YEARS);
    let d1 = l0.rem_euclid(DAYS_PER_400_YEARS);
    let n100 = d1.div_euclid(DAYS_PER_100_YEARS);
    let d2 = d1.rem_euclid(DAYS_PER_100_YEARS);
    let n4 = d2.div_euclid(DAYS_PER_4_YEARS);
    let d3 = d2.rem_euclid(DAYS_PER_4_YEARS);
    let n1 = d3.div_euclid(DAYS_PER_YEAR);
    let year = GREGORIAN_CYCLE * n400 + CENTURY_CYCLE * n100 + LEAP_YEAR_CYCLE * n4 + n1;
    // last day of a leap cycle belongs to the year before
    if n100 == 4 || n1 == 4 { year } else { year + 1 }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            f.write_str("-")?;
        }
        write!(
            f,
            "{:04}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
            self.year.unsigned_abs(),
            self.month,
            self.day
        )
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(s.to_owned()));
        };

        let bad_format = |_| CalendarError::InvalidFormat(s.to_owned());
        let year: i64 = year.parse().map_err(bad_format)?;
        let month: u8 = month.parse().map_err(bad_format)?;
        let day: u8 = day.parse().map_err(bad_format)?;

        Self::new(if negative { -year } else { year }, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
