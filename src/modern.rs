//! Israeli civil observances whose dates shift with the day of the week.

use crate::consts::MAX_YEAR;
use crate::{HebrewCalendar, HebrewDate, Month, Weekday};

/// First year Yom HaShoah was observed (1951)
pub const YOM_HASHOAH_FIRST_YEAR: i64 = 5711;
/// First year of Yom HaZikaron and Yom HaAtzma'ut (1948)
pub const YOM_HAZIKARON_FIRST_YEAR: i64 = 5708;
/// From this year a Tuesday Pesach moves Yom HaZikaron to 5 Iyyar
const MONDAY_RULE_YEAR: i64 = 5764;

/// Yom HaShoah: 27 Nisan, moved to Thursday when it falls on Friday and to
/// Monday when it falls on Sunday. `None` before 5711 and past `MAX_YEAR`.
pub fn yom_ha_shoah(cal: &HebrewCalendar, year: i64) -> Option<HebrewDate> {
    if !(YOM_HASHOAH_FIRST_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    let day = match Weekday::of_absolute(cal.to_absolute(year, Month::Nisan, 27)) {
        Weekday::Friday => 26,
        Weekday::Sunday => 28,
        _ => 27,
    };
    Some(HebrewDate::from_valid(year, Month::Nisan, day))
}

/// Yom HaZikaron, the day before Yom HaAtzma'ut, placed by the weekday of
/// Pesach. `None` before 5708 and past `MAX_YEAR`.
pub fn yom_ha_zikaron(cal: &HebrewCalendar, year: i64) -> Option<HebrewDate> {
    if !(YOM_HAZIKARON_FIRST_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    let day = match Weekday::of_absolute(cal.to_absolute(year, Month::Nisan, 15)) {
        Weekday::Sunday => 2,
        Weekday::Saturday => 3,
        _ if year < MONDAY_RULE_YEAR => 4,
        Weekday::Tuesday => 5,
        _ => 4,
    };
    Some(HebrewDate::from_valid(year, Month::Iyyar, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{greg, hd};

    #[test]
    fn test_yom_ha_shoah() {
        let cal = HebrewCalendar::new();
        assert_eq!(yom_ha_shoah(&cal, 5710), None);
        assert_eq!(yom_ha_shoah(&cal, i64::MAX), None);
        let cases = [
            (5784, greg(2024, 5, 6)),
            (5783, greg(2023, 4, 18)),
            (5782, greg(2022, 4, 28)),
            (5781, greg(2021, 4, 8)),
            (5780, greg(2020, 4, 21)),
        ];
        for (year, expected) in cases {
            let date = yom_ha_shoah(&cal, year).unwrap();
            assert_eq!(date.greg(&cal), expected, "Yom HaShoah {year}");
        }
    }

    #[test]
    fn test_yom_ha_zikaron() {
        let cal = HebrewCalendar::new();
        assert_eq!(yom_ha_zikaron(&cal, 5707), None);
        assert_eq!(yom_ha_zikaron(&cal, i64::MAX), None);
        assert_eq!(yom_ha_zikaron(&cal, 5708), Some(hd(5708, 2, 3)));
        let cases = [
            (5784, greg(2024, 5, 13)),
            (5783, greg(2023, 4, 25)),
            (5782, greg(2022, 5, 4)),
            (5781, greg(2021, 4, 14)),
            (5780, greg(2020, 4, 28)),
        ];
        for (year, expected) in cases {
            let date = yom_ha_zikaron(&cal, year).unwrap();
            assert_eq!(date.greg(&cal), expected, "Yom HaZikaron {year}");
        }
    }
}
