use crate::{GregorianDate, HebrewCalendar, HebrewDate, Month};

/// Builds a Hebrew date from raw numbers, panicking on invalid input.
pub fn hd(year: i64, month: u8, day: u8) -> HebrewDate {
    HebrewDate::new(&HebrewCalendar::uncached(), year, Month::new(month).unwrap(), day).unwrap()
}

pub fn greg(year: i64, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day).unwrap()
}
