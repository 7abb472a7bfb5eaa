//! Whether Tachanun is said on a given day.
//!
//! Each Hebrew year yields three sorted sets of R.D. days: days without
//! Tachanun anywhere, days some congregations skip it, and days whose
//! Mincha ignores the following day.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::calendar::is_leap_year;
use crate::modern::yom_ha_zikaron;
use crate::{HebrewCalendar, HebrewDate, Month, Weekday};

/// First year with Yom Yerushalayim (1967)
const YOM_YERUSHALAYIM_FIRST_YEAR: i64 = 5727;

/// Tachanun for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Tachanun {
    /// Said at Shacharit
    pub shacharit:         bool,
    /// Said at Mincha
    pub mincha:            bool,
    /// Said by all congregations
    pub all_congregations: bool,
}

#[derive(Debug)]
struct TachanunYear {
    none:     Vec<i64>,
    some:     Vec<i64>,
    yes_prev: Vec<i64>,
}

impl TachanunYear {
    fn new(cal: &HebrewCalendar, year: i64, israel: bool) -> Self {
        let abs = |month: Month, day: u8| cal.to_absolute(year, month, i64::from(day));
        let abs_range =
            |month: Month, days: RangeInclusive<u8>| days.map(move |day| abs(month, day));
        let after_shabbat = |day: i64| {
            if Weekday::of_absolute(day) == Weekday::Saturday { day + 1 } else { day }
        };
        let diaspora = u8::from(!israel);

        let leap = is_leap_year(year);
        let months: Vec<Month> = Month::civil_order(leap).collect();
        // Purim falls in Adar II in leap years
        let last_month = if leap { Month::AdarII } else { Month::AdarI };

        let mut none: Vec<i64> = Vec::new();
        // Rosh Chodesh, including Rosh Hashanah
        none.extend(months.iter().map(|&m| abs(m, 1)));
        none.extend(
            months
                .iter()
                .filter(|&&m| cal.days_in_month(m, year) == 30)
                .map(|&m| abs(m, 30)),
        );
        none.push(abs(Month::Tishrei, 2));
        none.extend(abs_range(Month::Nisan, 1..=cal.days_in_month(Month::Nisan, year)));
        // Lag BaOmer
        none.push(abs(Month::Iyyar, 18));
        // Rosh Chodesh Sivan through Isru Chag
        none.extend(abs_range(Month::Sivan, 1..=7 + diaspora));
        // Tisha B'Av, postponed from Shabbat
        none.push(after_shabbat(abs(Month::Av, 9)));
        none.push(abs(Month::Av, 15));
        none.push(abs(Month::Elul, 29));
        // Erev Yom Kippur through Isru Chag
        none.extend(abs_range(Month::Tishrei, 9..=23 + diaspora));
        // Chanukah runs into Tevet
        none.extend(abs_range(Month::Kislev, 25..=33));
        none.push(abs(Month::Shvat, 15));
        none.push(abs(last_month, 14));
        none.push(after_shabbat(abs(last_month, 15)));
        if leap {
            // Purim Katan
            none.push(abs(Month::AdarI, 14));
        }

        let mut some: Vec<i64> = Vec::new();
        some.extend(abs_range(Month::Sivan, 1..=13));
        // through the day after Rosh Chodesh Cheshvan
        some.extend(abs_range(Month::Tishrei, 20..=31));
        // Pesach Sheini
        some.push(abs(Month::Iyyar, 14));
        if year >= YOM_YERUSHALAYIM_FIRST_YEAR {
            some.push(abs(Month::Iyyar, 28));
        }
        // Yom HaAtzma'ut
        if let Some(zikaron) = yom_ha_zikaron(cal, year) {
            some.push(zikaron.abs(cal) + 1);
        }

        let mut yes_prev = vec![
            cal.to_absolute(year - 1, Month::Elul, 29),
            abs(Month::Tishrei, 9),
            abs(Month::Iyyar, 14),
        ];

        for days in [&mut none, &mut some, &mut yes_prev] {
            days.sort_unstable();
            days.dedup();
        }
        Self { none, some, yes_prev }
    }
}

/// Tachanun on `date`. `israel` selects the Israeli holiday schedule.
pub fn tachanun(cal: &HebrewCalendar, date: &HebrewDate, israel: bool) -> Tachanun {
    tachanun_on(cal, date.year(), date.abs(cal), israel, true)
}

fn tachanun_on(
    cal: &HebrewCalendar,
    year: i64,
    abs: i64,
    israel: bool,
    check_next: bool,
) -> Tachanun {
    let days = TachanunYear::new(cal, year, israel);
    if days.none.binary_search(&abs).is_ok() {
        return Tachanun::default();
    }

    let weekday = Weekday::of_absolute(abs);
    let all_congregations = days.some.binary_search(&abs).is_err();
    let shacharit = weekday != Weekday::Saturday;

    let tomorrow = abs + 1;
    let mincha = if check_next && days.yes_prev.binary_search(&tomorrow).is_err() {
        let next_year = cal.to_absolute(year + 1, Month::Tishrei, 1);
        let tomorrow_year = if tomorrow >= next_year { year + 1 } else { year };
        tachanun_on(cal, tomorrow_year, tomorrow, israel, false).shacharit
    } else {
        weekday != Weekday::Friday
    };

    if all_congregations && !mincha && !shacharit {
        return Tachanun::default();
    }
    Tachanun { shacharit, mincha, all_congregations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::hd;

    const NONE: Tachanun = Tachanun { shacharit: false, mincha: false, all_congregations: false };

    const fn t(shacharit: bool, mincha: bool, all_congregations: bool) -> Tachanun {
        Tachanun { shacharit, mincha, all_congregations }
    }

    #[test]
    fn test_tachanun_diaspora_and_israel() {
        struct TestCase {
            date:        HebrewDate,
            diaspora:    Tachanun,
            israel:      Tachanun,
            description: &'static str,
        }

        let cases = [
            TestCase { date: hd(5784, 8, 10), diaspora: t(true, true, true), israel: t(true, true, true), description: "ordinary weekday" },
            TestCase { date: hd(5784, 8, 13), diaspora: t(false, true, true), israel: t(false, true, true), description: "Shabbat" },
            TestCase { date: hd(5784, 8, 29), diaspora: t(true, false, true), israel: t(true, false, true), description: "erev Rosh Chodesh" },
            TestCase { date: hd(5784, 9, 1), diaspora: NONE, israel: NONE, description: "Rosh Chodesh" },
            TestCase { date: hd(5784, 9, 24), diaspora: t(true, false, true), israel: t(true, false, true), description: "erev Chanukah" },
            TestCase { date: hd(5784, 2, 13), diaspora: t(true, true, true), israel: t(true, true, true), description: "erev Pesach Sheini" },
            TestCase { date: hd(5784, 2, 14), diaspora: t(true, true, false), israel: t(true, true, false), description: "Pesach Sheini" },
            TestCase { date: hd(5784, 2, 17), diaspora: NONE, israel: NONE, description: "Shabbat before Lag BaOmer" },
            TestCase { date: hd(5784, 2, 18), diaspora: NONE, israel: NONE, description: "Lag BaOmer" },
            TestCase { date: hd(5784, 2, 6), diaspora: t(true, true, false), israel: t(true, true, false), description: "Yom HaAtzma'ut" },
            TestCase { date: hd(5784, 1, 29), diaspora: NONE, israel: NONE, description: "Nisan" },
            TestCase { date: hd(5784, 3, 8), diaspora: NONE, israel: t(true, false, false), description: "Isru Chag in the diaspora" },
            TestCase { date: hd(5784, 3, 13), diaspora: t(true, true, false), israel: t(true, true, false), description: "before 14 Sivan" },
            TestCase { date: hd(5784, 3, 14), diaspora: t(true, true, true), israel: t(true, true, true), description: "14 Sivan" },
            TestCase { date: hd(5784, 7, 8), diaspora: t(false, true, true), israel: t(false, true, true), description: "Shabbat before erev Yom Kippur" },
            TestCase { date: hd(5784, 7, 9), diaspora: NONE, israel: NONE, description: "erev Yom Kippur" },
            TestCase { date: hd(5784, 7, 20), diaspora: NONE, israel: NONE, description: "Sukkot" },
            TestCase { date: hd(5784, 5, 9), diaspora: NONE, israel: NONE, description: "Tisha B'Av" },
            TestCase { date: hd(5784, 6, 28), diaspora: t(true, false, true), israel: t(true, false, true), description: "before erev Rosh Hashanah" },
            TestCase { date: hd(5784, 6, 29), diaspora: NONE, israel: NONE, description: "erev Rosh Hashanah" },
        ];

        let cal = HebrewCalendar::new();
        for case in &cases {
            assert_eq!(tachanun(&cal, &case.date, false), case.diaspora, "{} ({}) diaspora", case.date, case.description);
            assert_eq!(tachanun(&cal, &case.date, true), case.israel, "{} ({}) Israel", case.date, case.description);
        }
    }

    #[test]
    fn test_tisha_bav_postponed_from_shabbat() {
        let cal = HebrewCalendar::new();
        assert_eq!(hd(5782, 5, 9).day_of_week(&cal), Weekday::Saturday);
        assert_eq!(tachanun(&cal, &hd(5782, 5, 10), false), NONE);
        assert_eq!(tachanun(&cal, &hd(5782, 5, 11), false), t(true, true, true));
    }

    #[test]
    fn test_purim_in_common_and_leap_years() {
        let cal = HebrewCalendar::new();
        // 5783 is a common year: Purim is in Adar
        assert_eq!(tachanun(&cal, &hd(5783, 12, 13), false), t(true, false, true));
        assert_eq!(tachanun(&cal, &hd(5783, 12, 14), false), NONE);
        assert_eq!(tachanun(&cal, &hd(5783, 12, 15), false), NONE);
        assert_eq!(tachanun(&cal, &hd(5783, 12, 16), false), t(true, true, true));

        // 5782 is a leap year: Purim Katan and Purim
        assert_eq!(tachanun(&cal, &hd(5782, 12, 14), false), NONE);
        assert_eq!(tachanun(&cal, &hd(5782, 13, 14), false), NONE);
        assert_eq!(tachanun(&cal, &hd(5782, 13, 15), false), NONE);
    }

    #[test]
    fn test_year_sets_are_sorted() {
        let cal = HebrewCalendar::new();
        let year = TachanunYear::new(&cal, 5784, false);
        for days in [&year.none, &year.some, &year.yes_prev] {
            assert!(days.windows(2).all(|w| w[0] < w[1]));
        }
        // all of Nisan alone is 30 days
        assert!(year.none.len() > 60);
    }
}
