mod consts;
mod granularity;
mod interval;
mod parse;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use granularity::{Granularity, Period, UnknownPeriodName, UnsupportedGranularity};
pub use interval::{DateInterval, tile};
pub use parse::{parse_date_range, parse_date_range_at, substitute};
pub use types::{Day, Month, Quarter, Week, Year};

use crate::prelude::*;
use chrono::NaiveDate;
use types::monday_of_week;

/// Represents a calendar period with varying levels of precision.
/// Each variant covers a whole period: a single day, a Monday-based week,
/// a month, a quarter, or a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateSpan {
    /// Full date with day, month, and year
    #[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
    Day {
        year: types::Year,
        month: types::Month,
        day: types::Day,
    },
    /// Week of a year, counting from the year's first Monday
    #[display(fmt = "{:04}-W{:02}", "year.get()", "week.get()")]
    Week { year: types::Year, week: types::Week },
    /// Month and year only
    #[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
    Month {
        year: types::Year,
        month: types::Month,
    },
    /// Quarter of a year
    #[display(fmt = "{:04}-Q{}", "year.get()", "quarter.get()")]
    Quarter {
        year: types::Year,
        quarter: types::Quarter,
    },
    /// Year only
    #[display(fmt = "{:04}", "year.get()")]
    Year { year: types::Year },
}

impl DateSpan {
    /// Returns the granularity matching this span's precision
    pub fn granularity(&self) -> Granularity {
        match self {
            Self::Day { .. } => Granularity::Day,
            Self::Week { .. } => Granularity::Week,
            Self::Month { .. } => Granularity::Month,
            Self::Quarter { .. } => Granularity::Quarter,
            Self::Year { .. } => Granularity::Year,
        }
    }

    /// Returns the year component (always present)
    pub fn year(&self) -> u16 {
        match self {
            Self::Day { year, .. }
            | Self::Week { year, .. }
            | Self::Month { year, .. }
            | Self::Quarter { year, .. }
            | Self::Year { year } => year.get(),
        }
    }

    /// First calendar date covered by this span.
    /// A week 0 span may begin in the previous year.
    pub fn first_day(&self) -> Option<NaiveDate> {
        match *self {
            Self::Day { year, month, day } => NaiveDate::from_ymd_opt(
                i32::from(year.get()),
                u32::from(month.get()),
                u32::from(day.get()),
            ),
            Self::Week { year, week } => monday_of_week(i32::from(year.get()), week.get()),
            Self::Month { year, month } => {
                NaiveDate::from_ymd_opt(i32::from(year.get()), u32::from(month.get()), MIN_DAY)
            }
            Self::Quarter { year, quarter } => {
                NaiveDate::from_ymd_opt(i32::from(year.get()), quarter.first_month(), MIN_DAY)
            }
            Self::Year { year } => NaiveDate::from_ymd_opt(i32::from(year.get()), JANUARY, MIN_DAY),
        }
    }

    /// First date after this span: the start of the next period at this
    /// span's granularity. A span of year `MAX_YEAR` ends on 10000-01-01,
    /// which is a valid exclusive bound even though 10000 is not a valid
    /// year.
    pub fn end_exclusive(&self) -> Option<NaiveDate> {
        Some(self.granularity().next_boundary(self.first_day()?))
    }

    /// The covered period as a half-open interval
    pub fn interval(&self) -> Option<DateInterval> {
        DateInterval::new(self.first_day()?, self.end_exclusive()?)
    }
}

impl serde::Serialize for DateSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DateSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date span: {s}")))
    }
}
