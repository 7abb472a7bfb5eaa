/// R.D. of the day before 1 Tishrei, year 1 of the Hebrew calendar.
/// Year 1 begins on `EPOCH + elapsed_days(1)`, i.e. `EPOCH + 1`.
pub const EPOCH: i64 = -1_373_428;

/// Average Hebrew year length over one 19-year cycle (235 lunar months)
pub const AVG_HEBYEAR_DAYS: f64 = 365.246_822_205_977_94;

/// First valid Hebrew year
pub const MIN_YEAR: i64 = 1;

/// Last supported Hebrew year
pub const MAX_YEAR: i64 = 1_000_000;

/// Month number for Nisan (month numbering starts here, not at Tishrei)
pub const NISAN: u8 = 1;
/// Month number for Iyyar
pub const IYYAR: u8 = 2;
/// Month number for Sivan
pub const SIVAN: u8 = 3;
/// Month number for Tamuz
pub const TAMUZ: u8 = 4;
/// Month number for Av
pub const AV: u8 = 5;
/// Month number for Elul
pub const ELUL: u8 = 6;
/// Month number for Tishrei (first month of the civil year)
pub const TISHREI: u8 = 7;
/// Month number for Cheshvan
pub const CHESHVAN: u8 = 8;
/// Month number for Kislev
pub const KISLEV: u8 = 9;
/// Month number for Tevet
pub const TEVET: u8 = 10;
/// Month number for Sh'vat
pub const SHVAT: u8 = 11;
/// Month number for Adar I (plain Adar in common years)
pub const ADAR_I: u8 = 12;
/// Month number for Adar II (leap years only)
pub const ADAR_II: u8 = 13;

/// Months in a common year
pub const MONTHS_COMMON_YEAR: u8 = 12;
/// Months in a leap year
pub const MONTHS_LEAP_YEAR: u8 = 13;

/// Length of a short month
pub const SHORT_MONTH_DAYS: u8 = 29;
/// Length of a full month
pub const FULL_MONTH_DAYS: u8 = 30;

/// Years in one Metonic cycle
pub(crate) const METONIC_YEARS: i64 = 19;
/// Lunar months in one Metonic cycle
pub(crate) const METONIC_MONTHS: i64 = 235;
/// Leap years in one Metonic cycle
pub(crate) const LEAP_YEARS_PER_CYCLE: i64 = 7;

/// Parts ("chalakim") per hour
pub(crate) const PARTS_PER_HOUR: i64 = 1080;
/// Parts per minute
pub(crate) const PARTS_PER_MINUTE: i64 = 18;
/// Hours in a day
pub(crate) const HOURS_PER_DAY: i64 = 24;
/// Days in a week
pub const DAYS_PER_WEEK: i64 = 7;

/// Parts of the molad of creation (BaHaRaD) past the hour
pub(crate) const MOLAD_BASE_PARTS: i64 = 204;
/// Hours of the molad of creation
pub(crate) const MOLAD_BASE_HOURS: i64 = 5;
/// Fractional part of a lunar month, in parts
pub(crate) const LUNATION_PARTS: i64 = 793;
/// Whole hours of a lunar month past 29 days
pub(crate) const LUNATION_HOURS: i64 = 12;
/// Whole days of a lunar month
pub(crate) const LUNATION_DAYS: i64 = 29;

/// Molad 18 hours or more into the day postpones Rosh Hashanah (molad zaken)
pub(crate) const MOLAD_ZAKEN_PARTS: i64 = 19_440;
/// Tuesday 9h 204p: common-year postponement (GaTaRaD)
pub(crate) const GATARAD_PARTS: i64 = 9_924;
/// Monday 15h 589p: post-leap-year postponement (BeTUTaKPaT)
pub(crate) const BETUTAKPAT_PARTS: i64 = 16_789;

/// Omer counting starts on 16 Nisan
pub const OMER_FIRST_NISAN_DAY: u8 = 16;
/// Last day of the Omer count
pub const OMER_DAYS: u8 = 49;

/// Largest Gregorian year magnitude accepted by `GregorianDate::new`
pub const MAX_GREGORIAN_YEAR: i64 = 1_000_000_000;

/// Maximum valid Gregorian month (December)
pub const MAX_GREGORIAN_MONTH: u8 = 12;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in 400 Gregorian years
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in a Gregorian century without its 400-year leap day
pub(crate) const DAYS_PER_100_YEARS: i64 = 36_524;
/// Days in 4 Gregorian years
pub(crate) const DAYS_PER_4_YEARS: i64 = 1_461;
/// Days in a common Gregorian year
pub(crate) const DAYS_PER_YEAR: i64 = 365;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
