use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_WEEK, OMER_DAYS, OMER_FIRST_NISAN_DAY};
use crate::prelude::*;
use crate::{CalendarError, HebrewCalendar, HebrewDate, Month};

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const WEEK: u8 = DAYS_PER_WEEK as u8;

/// One of the seven sefirot counted through the Omer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Sefira {
    Chesed,
    Gevurah,
    Tiferet,
    Netzach,
    Hod,
    Yesod,
    Malkhut,
}

static SEFIROT: [Sefira; 7] = [
    Sefira::Chesed,
    Sefira::Gevurah,
    Sefira::Tiferet,
    Sefira::Netzach,
    Sefira::Hod,
    Sefira::Yesod,
    Sefira::Malkhut,
];

impl Sefira {
    /// English rendering, e.g. "Lovingkindness" for Chesed
    pub const fn english(self) -> &'static str {
        match self {
            Self::Chesed => "Lovingkindness",
            Self::Gevurah => "Might",
            Self::Tiferet => "Beauty",
            Self::Netzach => "Eternity",
            Self::Hod => "Splendor",
            Self::Yesod => "Foundation",
            Self::Malkhut => "Majesty",
        }
    }

    /// 1-based position
    fn nth(position: u8) -> Self {
        SEFIROT[usize::from(position - 1) % SEFIROT.len()]
    }
}

/// Day of the Omer count, 1 through 49.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct OmerDay(u8);

impl OmerDay {
    /// # Errors
    /// Returns `CalendarError::InvalidOmerDay` outside `1..=49`.
    pub const fn new(day: u8) -> Result<Self, CalendarError> {
        if day == 0 || day > OMER_DAYS {
            return Err(CalendarError::InvalidOmerDay(day));
        }
        Ok(Self(day))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Week of the count the day falls in, 1-7
    pub const fn weeks(self) -> u8 {
        (self.0 - 1) / WEEK + 1
    }

    /// Day within the current week, 1-7
    pub const fn days_within_week(self) -> u8 {
        match self.0 % WEEK {
            0 => WEEK,
            d => d,
        }
    }

    /// `(day sefira, week sefira)`: day 8 is Chesed within Gevurah.
    pub fn sefira(self) -> (Sefira, Sefira) {
        (Sefira::nth(self.days_within_week()), Sefira::nth(self.weeks()))
    }

    /// Transliterated sefira, e.g. "Chesed shebiGevurah"
    pub fn sefira_translit(self) -> String {
        let (day, week) = self.sefira();
        let infix = if matches!(week, Sefira::Gevurah | Sefira::Yesod) { "shebi" } else { "sheb'" };
        format!("{day} {infix}{week}")
    }

    /// English sefira, e.g. "Lovingkindness within Might"
    pub fn sefira_english(self) -> String {
        let (day, week) = self.sefira();
        format!("{} within {}", day.english(), week.english())
    }
}

impl TryFrom<u8> for OmerDay {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Omer count for `date`, from 16 Nisan through 5 Sivan.
pub fn omer_day(cal: &HebrewCalendar, date: &HebrewDate) -> Option<OmerDay> {
    let eve_day = i64::from(OMER_FIRST_NISAN_DAY) - 1;
    let eve = cal.hebrew_to_absolute(date.year(), Month::Nisan, eve_day).ok()?;
    let day = u8::try_from(date.abs(cal) - eve).ok()?;
    OmerDay::new(day).ok()
}
