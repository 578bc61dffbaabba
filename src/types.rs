use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_YEAR, DAYS_IN_YEAR_LEAP, DAYS_PER_WEEK, DECEMBER,
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH,
    MAX_QUARTER, MAX_WEEK, MAX_YEAR, MIN_DAY, MONTHS_PER_QUARTER,
};
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year if the value is non-zero and <= `MAX_YEAR`.
    /// Out-of-range values are a non-match, not an error.
    pub fn new(value: u16) -> Option<Self> {
        let non_zero = NonZeroU16::new(value)?;
        if value > MAX_YEAR {
            return None;
        }
        Some(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month if the value is non-zero and <= `MAX_MONTH`
    pub fn new(value: u8) -> Option<Self> {
        let non_zero = NonZeroU8::new(value)?;
        if value > MAX_MONTH {
            return None;
        }
        Some(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day if the value is non-zero and valid for the given
    /// year and month (leap years included).
    pub fn new(value: u8, year: u16, month: u8) -> Option<Self> {
        let non_zero = NonZeroU8::new(value)?;

        let max_day = days_in_month(i32::from(year), u32::from(month));
        if u32::from(value) > max_day {
            return None;
        }

        Some(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A week number in the range `0..=MAX_WEEK` (0..=53)
/// Week 1 starts on the year's first Monday; week 0 covers the days before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week(u8);

impl Week {
    /// Creates a new Week if the value is <= `MAX_WEEK` (0 is valid)
    pub fn new(value: u8) -> Option<Self> {
        if value > MAX_WEEK {
            return None;
        }
        Some(Self(value))
    }

    /// Returns the week number as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quarter value guaranteed to be in the range `1..=MAX_QUARTER` (1..=4)
/// Uses `NonZeroU8` internally, so 0 is not a valid quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quarter(NonZeroU8);

impl Quarter {
    /// Creates a new Quarter if the value is in `1..=MAX_QUARTER`
    pub fn new(value: u8) -> Option<Self> {
        let non_zero = NonZeroU8::new(value)?;
        if value > MAX_QUARTER {
            return None;
        }
        Some(Self(non_zero))
    }

    /// Returns the quarter value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// First month of this quarter (1, 4, 7, or 10)
    pub fn first_month(self) -> u32 {
        (u32::from(self.get()) - 1) * MONTHS_PER_QUARTER + JANUARY
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month >= JANUARY && month <= DECEMBER);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        DAYS_IN_YEAR_LEAP
    } else {
        DAYS_IN_YEAR
    }
}

/// Monday on which the given week begins, counting week 1 from the year's
/// first Monday. Week 0 lands on the Monday of the partial week before it,
/// which may fall in the previous year; late weeks may spill into the next.
pub(crate) fn monday_of_week(year: i32, week: u8) -> Option<NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, JANUARY, MIN_DAY)?;
    let days_from_monday = u64::from(jan1.weekday().num_days_from_monday());
    let week_length = u64::from(DAYS_PER_WEEK);
    if week == 0 {
        jan1.checked_sub_days(Days::new(days_from_monday))
    } else {
        let to_first_monday = (week_length - days_from_monday) % week_length;
        let offset = to_first_monday + week_length * (u64::from(week) - 1);
        jan1.checked_add_days(Days::new(offset))
    }
}
