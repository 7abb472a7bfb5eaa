//! Error type shared by every calendar operation.

use crate::calendar::MAX_ABS;
use crate::consts::{EPOCH, MAX_YEAR};

/// Error type for all fallible calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Hebrew year outside `MIN_YEAR..=MAX_YEAR`.
    #[error("Invalid Hebrew year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(i64),

    /// Absolute day on or before the Hebrew epoch.
    #[error("Absolute day {0} is on or before the Hebrew epoch ({epoch})", epoch = EPOCH)]
    BeforeEpoch(i64),

    /// Absolute day after the last day of `MAX_YEAR`.
    #[error("Absolute day {0} is after the last supported day ({last})", last = MAX_ABS)]
    AfterLastDay(i64),

    /// Month number outside the accepted range.
    #[error("Invalid Hebrew month: {0}")]
    InvalidMonth(i64),

    /// Day does not exist in the given Hebrew month.
    #[error("Invalid day {day} for Hebrew month {month} of year {year}")]
    InvalidDay { year: i64, month: u8, day: i64 },

    /// Proleptic Gregorian date that does not exist.
    #[error("Invalid Gregorian date: {year:04}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: i64, month: u8, day: u8 },

    /// Day of week outside 0 (Sunday) ..= 6 (Saturday).
    #[error("Invalid day of week: {0} (must be 0-6)")]
    InvalidWeekday(u8),

    /// Omer day outside 1..=49.
    #[error("Invalid Omer day: {0} (must be 1-49)")]
    InvalidOmerDay(u8),

    /// Text that does not follow the expected date layout.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Unrecognised unit for date arithmetic.
    #[error("Invalid units '{0}'")]
    InvalidUnits(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CalendarError::InvalidYear(0).to_string(),
            "Invalid Hebrew year: 0 (must be 1-1000000)"
        );
        assert_eq!(
            CalendarError::AfterLastDay(i64::MAX).to_string(),
            format!("Absolute day {} is after the last supported day ({MAX_ABS})", i64::MAX)
        );
        assert_eq!(
            CalendarError::BeforeEpoch(-1_373_429).to_string(),
            "Absolute day -1373429 is on or before the Hebrew epoch (-1373428)"
        );
        assert_eq!(
            CalendarError::InvalidGregorianDate {
                year: 2023,
                month: 2,
                day: 29
            }
            .to_string(),
            "Invalid Gregorian date: 2023-02-29"
        );
        assert_eq!(
            CalendarError::InvalidUnits("fortnight".to_owned()).to_string(),
            "Invalid units 'fortnight'"
        );
    }
}
