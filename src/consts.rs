/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Maximum valid week number; week 53 only occurs in years that start on
/// (or, in leap years, just before) a Monday
pub const MAX_WEEK: u8 = 53;

/// Maximum valid quarter (October through December)
pub const MAX_QUARTER: u8 = 4;

/// First day of month, used for lower bounds
pub const MIN_DAY: u32 = 1;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Months in each quarter
pub const MONTHS_PER_QUARTER: u32 = 3;

/// Days in a week (weeks run Monday through Sunday)
pub const DAYS_PER_WEEK: u32 = 7;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Days in a common year
pub const DAYS_IN_YEAR: u32 = 365;
/// Days in a leap year
pub const DAYS_IN_YEAR_LEAP: u32 = 366;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
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
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Range separator between two date expressions; shares its glyph with the
/// hyphen inside dates, so range splitting is disambiguated by position
pub const RANGE_SEPARATOR: char = '-';
/// Keyword range separator ("2014 to 2015")
pub const RANGE_KEYWORD: &str = "to";
/// Separator between an interval's start and end dates (ISO 8601 extended format)
pub const INTERVAL_SEPARATOR: char = '/';
