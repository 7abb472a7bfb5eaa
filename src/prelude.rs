//! `use hebcal_date::prelude::*;` for the calendar, date types and errors.
//!
//! Inside the crate it also carries the derive_more macros.

pub use crate::{
    CalendarError, DateInput, GregorianDate, HebrewCalendar, HebrewDate, Month, Unit, Weekday,
};

pub(crate) use derive_more::{Display, From, Into};
