//! The molad: mean conjunction that starts each Hebrew month.

use serde::Serialize;

use crate::calendar::{months_elapsed, months_in_year};
use crate::consts::{
    HOURS_PER_DAY, LUNATION_DAYS, LUNATION_HOURS, LUNATION_PARTS, MAX_YEAR, MIN_YEAR,
    MOLAD_BASE_HOURS, MOLAD_BASE_PARTS, PARTS_PER_HOUR, PARTS_PER_MINUTE, TISHREI,
};
use crate::{CalendarError, Month, Weekday};

/// Hours between the halachic day start (6 pm) and the clock reading shown
const DISPLAY_OFFSET_HOURS: i64 = 6;

/// Molad of a Hebrew month, in clock time of the day it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Molad {
    pub year:        i64,
    pub month:       Month,
    pub day_of_week: Weekday,
    /// 0-23
    pub hour:        u8,
    /// 0-59
    pub minutes:     u8,
    /// parts of a minute, 0-17
    pub chalakim:    u8,
}

impl Molad {
    /// Computes the molad of `month` in `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if `year` is outside `1..=MAX_YEAR`.
    pub fn new(year: i64, month: Month) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear(year));
        }
        let months_in_year = i64::from(months_in_year(year));
        let offset = (i64::from(month.get()) - i64::from(TISHREI)).rem_euclid(months_in_year);
        let months = months_elapsed(year) + offset;

        let parts_elapsed = MOLAD_BASE_PARTS + LUNATION_PARTS * months.rem_euclid(PARTS_PER_HOUR);
        let hours = MOLAD_BASE_HOURS + LUNATION_HOURS * months
            + LUNATION_PARTS * months.div_euclid(PARTS_PER_HOUR)
            + parts_elapsed.div_euclid(PARTS_PER_HOUR)
            - DISPLAY_OFFSET_HOURS;
        let chalakim = parts_elapsed.rem_euclid(PARTS_PER_HOUR);
        let day = 1 + LUNATION_DAYS * months + hours.div_euclid(HOURS_PER_DAY);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (hour, minutes, chalakim) = (
            hours.rem_euclid(HOURS_PER_DAY) as u8,
            (chalakim / PARTS_PER_MINUTE) as u8,
            (chalakim % PARTS_PER_MINUTE) as u8,
        );

        Ok(Self {
            year,
            month,
            day_of_week: Weekday::of_absolute(day),
            hour,
            minutes,
            chalakim,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_molad_5769() {
        let cases = [
            (Month::Cheshvan, 3, 14, 42, 14),
            (Month::Kislev, 5, 3, 26, 15),
            (Month::Tevet, 6, 16, 10, 16),
            (Month::Shvat, 1, 4, 54, 17),
            (Month::AdarI, 2, 17, 39, 0),
            (Month::Nisan, 4, 6, 23, 1),
            (Month::Iyyar, 5, 19, 7, 2),
            (Month::Sivan, 0, 7, 51, 3),
            (Month::Tamuz, 1, 20, 35, 4),
            (Month::Av, 3, 9, 19, 5),
            (Month::Elul, 4, 22, 3, 6),
        ];
        for (month, dow, hour, minutes, chalakim) in cases {
            let molad = Molad::new(5769, month).unwrap();
            assert_eq!(molad.year, 5769);
            assert_eq!(molad.month, month);
            assert_eq!(molad.day_of_week.get(), dow, "{month}");
            assert_eq!(molad.hour, hour, "{month}");
            assert_eq!(molad.minutes, minutes, "{month}");
            assert_eq!(molad.chalakim, chalakim, "{month}");
        }
    }

    #[test]
    fn test_molad_tishrei_and_leap_year() {
        let tishrei = Molad::new(5784, Month::Tishrei).unwrap();
        assert_eq!(tishrei.day_of_week, Weekday::Friday);
        assert_eq!((tishrei.hour, tishrei.minutes, tishrei.chalakim), (5, 49, 0));

        let adar2 = Molad::new(5784, Month::AdarII).unwrap();
        assert_eq!(adar2.day_of_week, Weekday::Sunday);
        assert_eq!((adar2.hour, adar2.minutes, adar2.chalakim), (10, 13, 6));
    }

    #[test]
    fn test_molad_serializes() {
        let json = serde_json::to_value(Molad::new(5769, Month::Cheshvan).unwrap()).unwrap();
        assert_eq!(json["month"], 8);
        assert_eq!(json["day_of_week"], 3);
        assert_eq!(json["hour"], 14);
    }

    #[test]
    fn test_molad_year_range() {
        assert!(Molad::new(1, Month::Tishrei).is_ok());
        for year in [0, MAX_YEAR + 1, i64::MAX, i64::MIN] {
            assert!(matches!(
                Molad::new(year, Month::Nisan),
                Err(CalendarError::InvalidYear(y)) if y == year
            ));
        }
    }
}
