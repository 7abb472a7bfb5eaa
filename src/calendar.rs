//! Hebrew calendar arithmetic: year structure and the Hebrew ↔ R.D. mapping.
//!
//! Everything here derives from [`elapsed_days`], the molad-based count of
//! days from the epoch to Rosh Hashanah of a year. [`HebrewCalendar`] owns an
//! optional memo table for it; results are identical with or without one.

use ahash::HashMap;
use parking_lot::RwLock;
use tracing::trace;

use crate::consts::{
    AVG_HEBYEAR_DAYS, BETUTAKPAT_PARTS, DAYS_PER_WEEK, EPOCH, FULL_MONTH_DAYS, GATARAD_PARTS,
    HOURS_PER_DAY, LEAP_YEARS_PER_CYCLE, LUNATION_DAYS, LUNATION_HOURS, LUNATION_PARTS,
    MAX_YEAR, METONIC_MONTHS, METONIC_YEARS, MIN_YEAR, MOLAD_BASE_HOURS, MOLAD_BASE_PARTS,
    MOLAD_ZAKEN_PARTS, MONTHS_COMMON_YEAR, MONTHS_LEAP_YEAR, PARTS_PER_HOUR, SHORT_MONTH_DAYS,
};
use crate::{CalendarError, HebrewDate, Month};

/// Returns true if the Hebrew year has 13 months
pub const fn is_leap_year(year: i64) -> bool {
    (1 + year.rem_euclid(METONIC_YEARS) * LEAP_YEARS_PER_CYCLE).rem_euclid(METONIC_YEARS)
        < LEAP_YEARS_PER_CYCLE
}

/// Number of months in the Hebrew year (12 or 13)
pub const fn months_in_year(year: i64) -> u8 {
    if is_leap_year(year) { MONTHS_LEAP_YEAR } else { MONTHS_COMMON_YEAR }
}

/// Lunar months from the epoch to the Tishrei molad of `year`.
pub(crate) const fn months_elapsed(year: i64) -> i64 {
    let prev = year - 1;
    let cycle_year = prev.rem_euclid(METONIC_YEARS);
    METONIC_MONTHS * prev.div_euclid(METONIC_YEARS)
        + 12 * cycle_year
        + (LEAP_YEARS_PER_CYCLE * cycle_year + 1).div_euclid(METONIC_YEARS)
}

/// Days from the Sunday before the epoch to Rosh Hashanah of `year`,
/// with the molad postponements applied.
///
/// Exact for every `year` in `-MAX_YEAR..=MAX_YEAR + 1`; the checked
/// conversions never leave that range.
pub const fn elapsed_days(year: i64) -> i64 {
    let months = months_elapsed(year);
    let parts_elapsed = MOLAD_BASE_PARTS + LUNATION_PARTS * months.rem_euclid(PARTS_PER_HOUR);
    let hours = MOLAD_BASE_HOURS
        + LUNATION_HOURS * months
        + LUNATION_PARTS * months.div_euclid(PARTS_PER_HOUR)
        + parts_elapsed.div_euclid(PARTS_PER_HOUR);
    let parts = parts_elapsed.rem_euclid(PARTS_PER_HOUR)
        + PARTS_PER_HOUR * hours.rem_euclid(HOURS_PER_DAY);

    let mut day = 1 + LUNATION_DAYS * months + hours.div_euclid(HOURS_PER_DAY);
    let weekday = day.rem_euclid(DAYS_PER_WEEK);

    if parts >= MOLAD_ZAKEN_PARTS
        || (weekday == 2 && parts >= GATARAD_PARTS && !is_leap_year(year))
        || (weekday == 1 && parts >= BETUTAKPAT_PARTS && is_leap_year(year - 1))
    {
        day += 1;
    }

    // lo ADU rosh: never Sunday, Wednesday or Friday
    match day.rem_euclid(DAYS_PER_WEEK) {
        0 | 3 | 5 => day + 1,
        _ => day,
    }
}

/// Last R.D. day of year [`MAX_YEAR`].
pub const MAX_ABS: i64 = EPOCH + elapsed_days(MAX_YEAR + 1) - 1;

/// Memo table for [`elapsed_days`], keyed by Hebrew year.
///
/// Grows with the set of years queried and is never evicted.
#[derive(Debug, Default)]
pub struct ElapsedDaysCache {
    table: RwLock<HashMap<i64, i64>>,
}

impl ElapsedDaysCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `year`, computing and storing it on a miss.
    pub fn get(&self, year: i64) -> i64 {
        let cached = self.table.read().get(&year).copied();
        if let Some(days) = cached {
            return days;
        }

        let days = elapsed_days(year);
        trace!(year, days, "elapsed days cache miss");
        self.table.write().insert(year, days);
        days
    }

    /// Number of years currently memoized.
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Entry point for all Hebrew calendar computations.
///
/// `HebrewCalendar::new()` memoizes year starts; `HebrewCalendar::uncached()`
/// recomputes them on every call. Both are `Send + Sync`.
#[derive(Debug)]
pub struct HebrewCalendar {
    cache: Option<ElapsedDaysCache>,
}

impl Default for HebrewCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl HebrewCalendar {
    /// Calendar with an elapsed-days memo table.
    pub fn new() -> Self {
        Self {
            cache: Some(ElapsedDaysCache::new()),
        }
    }

    /// Calendar that computes every year start directly.
    pub const fn uncached() -> Self {
        Self { cache: None }
    }

    /// The memo table, if this calendar has one.
    pub const fn cache(&self) -> Option<&ElapsedDaysCache> {
        self.cache.as_ref()
    }

    /// See [`elapsed_days`].
    pub fn elapsed_days(&self, year: i64) -> i64 {
        self.cache
            .as_ref()
            .map_or_else(|| elapsed_days(year), |cache| cache.get(year))
    }

    pub const fn is_leap_year(&self, year: i64) -> bool {
        is_leap_year(year)
    }

    pub const fn months_in_year(&self, year: i64) -> u8 {
        months_in_year(year)
    }

    /// Days in the Hebrew year: 353-355 for common years, 383-385 for leap years
    pub fn days_in_year(&self, year: i64) -> u16 {
        let days = self.elapsed_days(year + 1) - self.elapsed_days(year);
        // bounded by the postponement rules
        u16::try_from(days).unwrap_or(u16::MAX)
    }

    /// True if Cheshvan has 30 days in `year`
    pub fn long_cheshvan(&self, year: i64) -> bool {
        self.days_in_year(year) % 10 == 5
    }

    /// True if Kislev has 29 days in `year`
    pub fn short_kislev(&self, year: i64) -> bool {
        self.days_in_year(year) % 10 == 3
    }

    /// Number of days in the month (29 or 30)
    pub fn days_in_month(&self, month: Month, year: i64) -> u8 {
        match month {
            Month::Iyyar | Month::Tamuz | Month::Elul | Month::Tevet | Month::AdarII => {
                SHORT_MONTH_DAYS
            }
            Month::AdarI if !is_leap_year(year) => SHORT_MONTH_DAYS,
            Month::Cheshvan if !self.long_cheshvan(year) => SHORT_MONTH_DAYS,
            Month::Kislev if self.short_kislev(year) => SHORT_MONTH_DAYS,
            _ => FULL_MONTH_DAYS,
        }
    }

    /// R.D. of 1 Tishrei of `year`
    fn new_year(&self, year: i64) -> i64 {
        EPOCH + self.elapsed_days(year)
    }

    /// Converts a Hebrew date to R.D. (Rata Die) days.
    ///
    /// `day` is not range-checked; days past the end of the month count on
    /// into the following months.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if `year` is outside `1..=MAX_YEAR`
    /// and `CalendarError::InvalidDay` if `day` pushes the result past `i64`.
    pub fn hebrew_to_absolute(
        &self,
        year: i64,
        month: Month,
        day: i64,
    ) -> Result<i64, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear(year));
        }
        let first = self.to_absolute(year, month, 1);
        day.checked_sub(1)
            .and_then(|offset| first.checked_add(offset))
            .ok_or(CalendarError::InvalidDay {
                year,
                month: month.get(),
                day,
            })
    }

    /// Unchecked conversion; `year` must stay within `-MAX_YEAR..=MAX_YEAR + 1`.
    pub(crate) fn to_absolute(&self, year: i64, month: Month, day: i64) -> i64 {
        let leap = is_leap_year(year);
        // Adar II of a common year lands where Nisan starts
        let stop = if month == Month::AdarII && !leap { Month::Nisan } else { month };

        let preceding: i64 = Month::civil_order(leap)
            .take_while(|&m| m != stop)
            .map(|m| i64::from(self.days_in_month(m, year)))
            .sum();

        self.new_year(year) + preceding + day - 1
    }

    /// Converts R.D. (Rata Die) days to a Hebrew date.
    ///
    /// # Errors
    /// Returns `CalendarError::BeforeEpoch` if `abs <= EPOCH` and
    /// `CalendarError::AfterLastDay` if `abs > MAX_ABS`.
    pub fn absolute_to_hebrew(&self, abs: i64) -> Result<HebrewDate, CalendarError> {
        if abs <= EPOCH {
            return Err(CalendarError::BeforeEpoch(abs));
        }
        if abs > MAX_ABS {
            return Err(CalendarError::AfterLastDay(abs));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let mut year = ((abs - EPOCH) as f64 / AVG_HEBYEAR_DAYS).floor() as i64;
        while self.new_year(year) <= abs {
            year += 1;
        }
        year -= 1;

        let mut month = if abs < self.to_absolute(year, Month::Nisan, 1) {
            Month::Tishrei
        } else {
            Month::Nisan
        };
        loop {
            let last = self.days_in_month(month, year);
            if abs <= self.to_absolute(year, month, i64::from(last)) {
                break;
            }
            month = Month::new(month.get() + 1)?;
        }

        let day = 1 + abs - self.to_absolute(year, month, 1);
        let day = u8::try_from(day).map_err(|_| CalendarError::InvalidDay {
            year,
            month: month.get(),
            day,
        })?;
        Ok(HebrewDate::from_valid(year, month, day))
    }
}
