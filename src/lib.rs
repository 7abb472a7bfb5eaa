//! Hebrew calendar arithmetic.
//!
//! Converts between Hebrew dates, proleptic Gregorian dates and R.D. (Rata
//! Die) day numbers, and derives yahrzeits, birthdays, the molad, the Omer
//! count, modern Israeli observances and Tachanun from them.
//!
//! ```
//! use hebcal_date::{GregorianDate, HebrewCalendar, HebrewDate, Month};
//!
//! let cal = HebrewCalendar::new();
//! let date = HebrewDate::new(&cal, 5769, Month::Cheshvan, 15)?;
//! assert_eq!(date.abs(&cal), 733_359);
//! assert_eq!(date.greg(&cal), GregorianDate::new(2008, 11, 13)?);
//! assert_eq!(date.to_string(), "15 Cheshvan 5769");
//! # Ok::<(), hebcal_date::CalendarError>(())
//! ```

mod anniversary;
mod calendar;
mod consts;
mod error;
mod gregorian;
mod hdate;
mod modern;
mod molad;
mod omer;
pub mod prelude;
mod tachanun;
mod types;

#[cfg(test)]
mod test_utils;

pub use anniversary::{
    birthday_or_anniversary, birthday_or_anniversary_gregorian, yahrzeit, yahrzeit_gregorian,
};
pub use calendar::{
    ElapsedDaysCache, HebrewCalendar, MAX_ABS, elapsed_days, is_leap_year, months_in_year,
};
pub use consts::*;
pub use error::CalendarError;
pub use gregorian::{GregorianDate, days_in_gregorian_month, is_gregorian_leap_year};
pub use hdate::{DateInput, HebrewDate, Unit};
pub use modern::{YOM_HASHOAH_FIRST_YEAR, YOM_HAZIKARON_FIRST_YEAR, yom_ha_shoah, yom_ha_zikaron};
pub use molad::Molad;
pub use omer::{OmerDay, Sefira, omer_day};
pub use tachanun::{Tachanun, tachanun};
pub use types::{Month, Weekday, day_on_or_before};
