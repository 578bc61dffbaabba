use chrono::NaiveDate;

use crate::DateSpan;
use crate::interval::DateInterval;
use crate::types::{Day, Month, Quarter, Week, Year};

/// Date literal for tests.
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date")
}

/// Interval literal for tests, from two (year, month, day) triples.
pub(crate) fn interval(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateInterval {
    let (start_year, start_month, start_day) = start;
    let (end_year, end_month, end_day) = end;
    DateInterval::new(
        date(start_year, start_month, start_day),
        date(end_year, end_month, end_day),
    )
    .expect("invalid test interval")
}

pub(crate) fn year(value: u16) -> Year {
    Year::new(value).expect("invalid test year")
}

pub(crate) fn month(value: u8) -> Month {
    Month::new(value).expect("invalid test month")
}

pub(crate) fn day(value: u8, year: u16, month: u8) -> Day {
    Day::new(value, year, month).expect("invalid test day")
}

pub(crate) fn week(value: u8) -> Week {
    Week::new(value).expect("invalid test week")
}

pub(crate) fn quarter(value: u8) -> Quarter {
    Quarter::new(value).expect("invalid test quarter")
}

pub(crate) fn span_day(y: u16, m: u8, d: u8) -> DateSpan {
    DateSpan::Day {
        year: year(y),
        month: month(m),
        day: day(d, y, m),
    }
}

pub(crate) fn span_week(y: u16, w: u8) -> DateSpan {
    DateSpan::Week {
        year: year(y),
        week: week(w),
    }
}

pub(crate) fn span_month(y: u16, m: u8) -> DateSpan {
    DateSpan::Month {
        year: year(y),
        month: month(m),
    }
}

pub(crate) fn span_quarter(y: u16, q: u8) -> DateSpan {
    DateSpan::Quarter {
        year: year(y),
        quarter: quarter(q),
    }
}

pub(crate) fn span_year(y: u16) -> DateSpan {
    DateSpan::Year { year: year(y) }
}
