use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{is_leap_year, months_in_year};
use crate::consts::{DAYS_PER_WEEK, ELUL, MAX_YEAR, MIN_YEAR, NISAN, TISHREI};
use crate::prelude::*;
use crate::types::day_on_or_before;
use crate::{CalendarError, GregorianDate, HebrewCalendar, Month, Weekday};

/// A validated Hebrew calendar date.
///
/// `month` never exceeds the months of `year` and `day` never exceeds the
/// length of `month`. Ordering is chronological (Tishrei starts the year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHebrewDate")]
pub struct HebrewDate {
    year:  i64,
    month: Month,
    day:   u8,
}

#[derive(Deserialize)]
struct RawHebrewDate {
    year:  i64,
    month: Month,
    day:   u8,
}

impl TryFrom<RawHebrewDate> for HebrewDate {
    type Error = CalendarError;

    fn try_from(raw: RawHebrewDate) -> Result<Self, Self::Error> {
        Self::new(&HebrewCalendar::uncached(), raw.year, raw.month, raw.day)
    }
}

/// Any value a Hebrew date can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub enum DateInput {
    /// R.D. (Rata Die) day
    Absolute(i64),
    Hebrew(HebrewDate),
    Gregorian(GregorianDate),
}

/// Units for [`HebrewDate::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Unit {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl FromStr for Unit {
    type Err = CalendarError;

    /// Accepts `d`, `w`, `M`, `y` or the unit name, singular or plural, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d" => return Ok(Self::Day),
            "w" => return Ok(Self::Week),
            "M" => return Ok(Self::Month),
            "y" => return Ok(Self::Year),
            _ => {}
        }
        let lower = s.to_lowercase();
        match lower.strip_suffix('s').unwrap_or(&lower) {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(CalendarError::InvalidUnits(s.to_owned())),
        }
    }
}

impl HebrewDate {
    /// Creates a date from components that must already be in range.
    ///
    /// # Errors
    /// Returns `InvalidYear` if `year` is outside `1..=MAX_YEAR`,
    /// `InvalidMonth` for Adar II in a common year, `InvalidDay` if `day` is 0
    /// or past the end of the month.
    pub fn new(
        cal: &HebrewCalendar,
        year: i64,
        month: Month,
        day: u8,
    ) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear(year));
        }
        if month.get() > months_in_year(year) {
            return Err(CalendarError::InvalidMonth(i64::from(month.get())));
        }
        if day == 0 || day > cal.days_in_month(month, year) {
            return Err(CalendarError::InvalidDay {
                year,
                month: month.get(),
                day: i64::from(day),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Caller guarantees the invariants.
    pub(crate) const fn from_valid(year: i64, month: Month, day: u8) -> Self {
        debug_assert!(year >= MIN_YEAR && day >= 1);
        Self { year, month, day }
    }

    /// Creates a date from loose components, rolling out-of-range months and
    /// days into neighbouring months and years.
    ///
    /// Month 13 in a common year becomes Adar; month 14 (or any month past
    /// the end of the year) continues from Nisan of the following year; month
    /// 0 and below count back into the previous year. Days past the end of a
    /// month spill into the next month, days below 1 into the previous one.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the result falls outside
    /// `1..=MAX_YEAR`.
    pub fn normalize(
        cal: &HebrewCalendar,
        year: i64,
        month: i64,
        day: i64,
    ) -> Result<Self, CalendarError> {
        let tishrei = i64::from(TISHREI);
        let elul = i64::from(ELUL);
        let (mut y, mut m, mut d) = (year, month, day);

        loop {
            if !(-MAX_YEAR..=MAX_YEAR).contains(&y) {
                return Err(CalendarError::InvalidYear(y));
            }
            let months = i64::from(months_in_year(y));
            let (ny, nm, nd) = if m == 13 && !is_leap_year(y) {
                (y, 12, d)
            } else if m < 1 {
                (y - 1, m + months, d)
            } else if m > months {
                (y + 1, m - months, d)
            } else if d < 1 {
                let ny = if m == tishrei { y - 1 } else { y };
                (ny, m - 1, d + i64::from(cal.days_in_month(Month::try_from(m)?, ny)))
            } else if d > i64::from(cal.days_in_month(Month::try_from(m)?, y)) {
                let ny = if m == elul { y + 1 } else { y };
                let nd = d - i64::from(cal.days_in_month(Month::try_from(m)?, ny));
                let nm = if m == i64::from(months_in_year(ny)) { i64::from(NISAN) } else { m + 1 };
                (ny, nm, nd)
            } else {
                break;
            };
            (y, m, d) = (ny, nm, nd);
        }

        if y < MIN_YEAR {
            return Err(CalendarError::InvalidYear(y));
        }
        let normalized_month = Month::try_from(m)?;
        // d is within 1..=30 once the loop settles
        let normalized_day = u8::try_from(d).map_err(|_| CalendarError::InvalidDay {
            year: y,
            month: normalized_month.get(),
            day: d,
        })?;
        if (y, m, d) != (year, month, day) {
            debug!(
                year,
                month,
                day,
                to_year = y,
                to_month = m,
                to_day = d,
                "normalized Hebrew date"
            );
        }
        Ok(Self::from_valid(y, normalized_month, normalized_day))
    }

    /// # Errors
    /// Returns `CalendarError::BeforeEpoch` if `abs` precedes the Hebrew epoch
    /// and `CalendarError::AfterLastDay` past the end of `MAX_YEAR`.
    pub fn from_absolute(cal: &HebrewCalendar, abs: i64) -> Result<Self, CalendarError> {
        cal.absolute_to_hebrew(abs)
    }

    /// # Errors
    /// Returns `CalendarError::BeforeEpoch` for dates before 7 October 3761 BCE
    /// and `CalendarError::AfterLastDay` past the end of `MAX_YEAR`.
    pub fn from_gregorian(
        cal: &HebrewCalendar,
        date: GregorianDate,
    ) -> Result<Self, CalendarError> {
        cal.absolute_to_hebrew(date.to_absolute())
    }

    /// # Errors
    /// Propagates the conversion error of the given variant.
    pub fn from_input(
        cal: &HebrewCalendar,
        input: impl Into<DateInput>,
    ) -> Result<Self, CalendarError> {
        match input.into() {
            DateInput::Absolute(abs) => Self::from_absolute(cal, abs),
            DateInput::Hebrew(date) => Ok(date),
            DateInput::Gregorian(date) => Self::from_gregorian(cal, date),
        }
    }

    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub const fn months_in_year(&self) -> u8 {
        months_in_year(self.year)
    }

    /// Month counted from Tishrei = 1
    pub const fn tishrei_month(&self) -> u8 {
        self.month.tishrei_month(self.is_leap_year())
    }

    /// Transliterated month name, e.g. "Adar" in a common year and "Adar I" in a leap year
    pub const fn month_name(&self) -> &'static str {
        self.month.name(self.is_leap_year())
    }

    pub fn days_in_month(&self, cal: &HebrewCalendar) -> u8 {
        cal.days_in_month(self.month, self.year)
    }

    /// R.D. (Rata Die) day
    pub fn abs(&self, cal: &HebrewCalendar) -> i64 {
        cal.to_absolute(self.year, self.month, i64::from(self.day))
    }

    pub fn greg(&self, cal: &HebrewCalendar) -> GregorianDate {
        GregorianDate::from_absolute(self.abs(cal))
    }

    pub fn day_of_week(&self, cal: &HebrewCalendar) -> Weekday {
        Weekday::of_absolute(self.abs(cal))
    }

    /// # Errors
    /// Returns `CalendarError::AfterLastDay` on the last day of `MAX_YEAR`.
    pub fn next(&self, cal: &HebrewCalendar) -> Result<Self, CalendarError> {
        Self::from_absolute(cal, self.abs(cal) + 1)
    }

    /// # Errors
    /// Returns `CalendarError::BeforeEpoch` on 1 Tishrei of year 1.
    pub fn prev(&self, cal: &HebrewCalendar) -> Result<Self, CalendarError> {
        Self::from_absolute(cal, self.abs(cal) - 1)
    }

    /// Adds `amount` units, which may be negative.
    ///
    /// Months advance by the length of the current month, so the day of month
    /// can drift by one across 29-day months. Years keep day and month and
    /// normalize in the target year (Adar II becomes Adar in a common year).
    ///
    /// # Errors
    /// Returns an error if the result falls outside the supported range.
    pub fn add(
        &self,
        cal: &HebrewCalendar,
        amount: i64,
        unit: Unit,
    ) -> Result<Self, CalendarError> {
        if amount == 0 {
            return Ok(*self);
        }
        match unit {
            Unit::Day => Self::from_absolute(cal, self.abs(cal).saturating_add(amount)),
            Unit::Week => {
                let days = DAYS_PER_WEEK.saturating_mul(amount);
                Self::from_absolute(cal, self.abs(cal).saturating_add(days))
            }
            Unit::Year => Self::normalize(
                cal,
                self.year.saturating_add(amount),
                i64::from(self.month.get()),
                i64::from(self.day),
            ),
            Unit::Month => {
                let sign = amount.signum();
                let mut date = *self;
                for _ in 0..amount.unsigned_abs() {
                    let step = sign * i64::from(date.days_in_month(cal));
                    date = Self::from_absolute(cal, date.abs(cal) + step)?;
                }
                Ok(date)
            }
        }
    }

    /// # Errors
    /// See [`Self::add`].
    pub fn subtract(
        &self,
        cal: &HebrewCalendar,
        amount: i64,
        unit: Unit,
    ) -> Result<Self, CalendarError> {
        self.add(cal, amount.saturating_neg(), unit)
    }

    /// Days from `other` to `self`; positive when `self` is later.
    pub fn delta_days(&self, cal: &HebrewCalendar, other: &Self) -> i64 {
        self.abs(cal) - other.abs(cal)
    }

    fn weekday_on_or_before(
        &self,
        cal: &HebrewCalendar,
        weekday: Weekday,
        offset: i64,
    ) -> Result<Self, CalendarError> {
        Self::from_absolute(cal, day_on_or_before(weekday, self.abs(cal) + offset))
    }

    /// Latest `weekday` strictly before this date.
    ///
    /// # Errors
    /// Returns `CalendarError::BeforeEpoch` near the start of the calendar.
    pub fn before(&self, cal: &HebrewCalendar, weekday: Weekday) -> Result<Self, CalendarError> {
        self.weekday_on_or_before(cal, weekday, -1)
    }

    /// # Errors
    /// Returns `CalendarError::BeforeEpoch` near the start of the calendar.
    pub fn on_or_before(
        &self,
        cal: &HebrewCalendar,
        weekday: Weekday,
    ) -> Result<Self, CalendarError> {
        self.weekday_on_or_before(cal, weekday, 0)
    }

    /// `weekday` closest to this date, within three days either side.
    ///
    /// # Errors
    /// Returns `CalendarError::BeforeEpoch` near the start of the calendar.
    pub fn nearest(&self, cal: &HebrewCalendar, weekday: Weekday) -> Result<Self, CalendarError> {
        self.weekday_on_or_before(cal, weekday, 3)
    }

    /// # Errors
    /// Returns `CalendarError::BeforeEpoch` near the start of the calendar.
    pub fn on_or_after(
        &self,
        cal: &HebrewCalendar,
        weekday: Weekday,
    ) -> Result<Self, CalendarError> {
        self.weekday_on_or_before(cal, weekday, 6)
    }

    /// Earliest `weekday` strictly after this date.
    ///
    /// # Errors
    /// Returns `CalendarError::BeforeEpoch` near the start of the calendar.
    pub fn after(&self, cal: &HebrewCalendar, weekday: Weekday) -> Result<Self, CalendarError> {
        self.weekday_on_or_before(cal, weekday, 7)
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.tishrei_month(), self.day).cmp(&(
            other.year,
            other.tishrei_month(),
            other.day,
        ))
    }
}
