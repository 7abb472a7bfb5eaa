use crate::CalendarError;
use crate::consts::{
    ADAR_I, ADAR_II, AV, CHESHVAN, DAYS_PER_WEEK, ELUL, IYYAR, KISLEV, MONTHS_COMMON_YEAR,
    MONTHS_LEAP_YEAR, NISAN, SHVAT, SIVAN, TAMUZ, TEVET, TISHREI,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A Hebrew month in absolute numbering (Nisan = 1, Tishrei = 7).
///
/// `AdarI` is plain "Adar" in common years; `AdarII` only exists in leap years.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    #[display(fmt = "Nisan")]
    Nisan = NISAN,
    #[display(fmt = "Iyyar")]
    Iyyar = IYYAR,
    #[display(fmt = "Sivan")]
    Sivan = SIVAN,
    #[display(fmt = "Tamuz")]
    Tamuz = TAMUZ,
    #[display(fmt = "Av")]
    Av = AV,
    #[display(fmt = "Elul")]
    Elul = ELUL,
    #[display(fmt = "Tishrei")]
    Tishrei = TISHREI,
    #[display(fmt = "Cheshvan")]
    Cheshvan = CHESHVAN,
    #[display(fmt = "Kislev")]
    Kislev = KISLEV,
    #[display(fmt = "Tevet")]
    Tevet = TEVET,
    #[display(fmt = "Sh'vat")]
    Shvat = SHVAT,
    #[display(fmt = "Adar I")]
    AdarI = ADAR_I,
    #[display(fmt = "Adar II")]
    AdarII = ADAR_II,
}

static ALL_MONTHS: [Month; 13] = [
    Month::Nisan,
    Month::Iyyar,
    Month::Sivan,
    Month::Tamuz,
    Month::Av,
    Month::Elul,
    Month::Tishrei,
    Month::Cheshvan,
    Month::Kislev,
    Month::Tevet,
    Month::Shvat,
    Month::AdarI,
    Month::AdarII,
];

impl Month {
    /// Creates a month from its absolute number.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` outside `1..=13`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        usize::from(value)
            .checked_sub(1)
            .and_then(|idx| ALL_MONTHS.get(idx))
            .copied()
            .ok_or(CalendarError::InvalidMonth(i64::from(value)))
    }

    /// Returns the absolute month number (Nisan = 1)
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Month number counted from Tishrei (Tishrei = 1, Elul = last month of the year)
    pub const fn tishrei_month(self, leap_year: bool) -> u8 {
        let months = if leap_year { MONTHS_LEAP_YEAR } else { MONTHS_COMMON_YEAR };
        let m = (self.get() + months - 6) % months;
        if m == 0 { months } else { m }
    }

    /// Transliterated name as used in a year of the given kind.
    pub const fn name(self, leap_year: bool) -> &'static str {
        match self {
            Self::Nisan => "Nisan",
            Self::Iyyar => "Iyyar",
            Self::Sivan => "Sivan",
            Self::Tamuz => "Tamuz",
            Self::Av => "Av",
            Self::Elul => "Elul",
            Self::Tishrei => "Tishrei",
            Self::Cheshvan => "Cheshvan",
            Self::Kislev => "Kislev",
            Self::Tevet => "Tevet",
            Self::Shvat => "Sh'vat",
            Self::AdarI if leap_year => "Adar I",
            Self::AdarI => "Adar",
            Self::AdarII if leap_year => "Adar II",
            // no Adar II in a common year; the slot after Adar is Nisan
            Self::AdarII => "Nisan",
        }
    }

    /// Iterates the months of a year in civil order, Tishrei first.
    pub fn civil_order(leap_year: bool) -> impl Iterator<Item = Self> {
        let last = if leap_year { MONTHS_LEAP_YEAR } else { MONTHS_COMMON_YEAR };
        ALL_MONTHS[usize::from(TISHREI - 1)..usize::from(last)]
            .iter()
            .chain(&ALL_MONTHS[..usize::from(ELUL)])
            .copied()
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Month {
    type Error = CalendarError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| CalendarError::InvalidMonth(value))
            .and_then(Self::new)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// Day of the week, Sunday = 0 as in `abs mod 7`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Creates a weekday from 0 (Sunday) ..= 6 (Saturday).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeekday` for values above 6.
    pub const fn new(value: u8) -> Result<Self, CalendarError> {
        Ok(match value {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => return Err(CalendarError::InvalidWeekday(value)),
        })
    }

    /// Weekday of an absolute (R.D.) day.
    pub const fn of_absolute(abs: i64) -> Self {
        match abs.rem_euclid(DAYS_PER_WEEK) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.get()
    }
}

/// R.D. of the latest `weekday` on or before `abs`.
pub const fn day_on_or_before(weekday: Weekday, abs: i64) -> i64 {
    abs - (abs - weekday.get() as i64).rem_euclid(DAYS_PER_WEEK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=13 {
            let month = Month::new(m).unwrap();
            assert_eq!(month.get(), m, "Month {m} should round-trip");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(CalendarError::InvalidMonth(0))));
        assert!(matches!(Month::new(14), Err(CalendarError::InvalidMonth(14))));
        assert!(matches!(
            Month::try_from(-3_i64),
            Err(CalendarError::InvalidMonth(-3))
        ));
        assert!(matches!(
            Month::try_from(300_i64),
            Err(CalendarError::InvalidMonth(300))
        ));
    }

    #[test]
    fn test_month_display() {
        assert_eq!(Month::Shvat.to_string(), "Sh'vat");
        assert_eq!(Month::AdarI.to_string(), "Adar I");
        assert_eq!(Month::AdarII.to_string(), "Adar II");
    }

    #[test]
    fn test_month_name_by_year_kind() {
        assert_eq!(Month::AdarI.name(true), "Adar I");
        assert_eq!(Month::AdarII.name(true), "Adar II");
        assert_eq!(Month::AdarI.name(false), "Adar");
        assert_eq!(Month::AdarII.name(false), "Nisan");
        assert_eq!(Month::Tamuz.name(false), "Tamuz");
        assert_eq!(Month::Tishrei.name(true), "Tishrei");
    }

    #[test]
    fn test_tishrei_month() {
        struct TestCase {
            month:    Month,
            leap:     bool,
            expected: u8,
        }

        let cases = [
            TestCase { month: Month::Tishrei, leap: false, expected: 1 },
            TestCase { month: Month::Cheshvan, leap: false, expected: 2 },
            TestCase { month: Month::AdarI, leap: false, expected: 6 },
            TestCase { month: Month::Nisan, leap: false, expected: 7 },
            TestCase { month: Month::Elul, leap: false, expected: 12 },
            TestCase { month: Month::AdarII, leap: true, expected: 7 },
            TestCase { month: Month::Nisan, leap: true, expected: 8 },
            TestCase { month: Month::Elul, leap: true, expected: 13 },
            TestCase { month: Month::AdarII, leap: false, expected: 7 },
        ];

        for case in &cases {
            assert_eq!(
                case.month.tishrei_month(case.leap),
                case.expected,
                "{} in a {} year",
                case.month,
                if case.leap { "leap" } else { "common" }
            );
        }
    }

    #[test]
    fn test_civil_order() {
        let common: Vec<u8> = Month::civil_order(false).map(Month::get).collect();
        assert_eq!(common, [7, 8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6]);

        let leap: Vec<u8> = Month::civil_order(true).map(Month::get).collect();
        assert_eq!(leap, [7, 8, 9, 10, 11, 12, 13, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_month_serde() {
        let json = serde_json::to_string(&Month::Cheshvan).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Month::Cheshvan);

        let result: Result<Month, _> = serde_json::from_str("14");
        assert!(result.is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(Weekday::new(6).unwrap(), Weekday::Saturday);
        assert!(matches!(Weekday::new(7), Err(CalendarError::InvalidWeekday(7))));
        assert_eq!(Weekday::of_absolute(1), Weekday::Monday);
        assert_eq!(Weekday::of_absolute(0), Weekday::Sunday);
        assert_eq!(Weekday::of_absolute(-1), Weekday::Saturday);
        assert_eq!(Weekday::Thursday.to_string(), "Thursday");
    }

    #[test]
    fn test_day_on_or_before() {
        // R.D. 735_283 is Wednesday 2014-02-19
        assert_eq!(day_on_or_before(Weekday::Saturday, 735_283), 735_279);
        assert_eq!(day_on_or_before(Weekday::Wednesday, 735_283), 735_283);
        assert_eq!(day_on_or_before(Weekday::Sunday, -1), -7);
    }
}
