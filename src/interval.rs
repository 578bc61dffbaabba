use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::granularity::Granularity;
use crate::{INTERVAL_SEPARATOR, prelude::*};

/// A half-open span of calendar dates: `start` is included, `end` is not.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Creates a new interval if `start <= end`.
    /// A reversed pair is a non-match, not an error.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self { start, end })
    }

    /// Returns the first date inside the interval
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the first date after the interval
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns both dates as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Checks if the interval contains a given date.
    /// The end date is excluded, so adjacent intervals never share a date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Number of days the interval covers
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// True when the interval covers no dates (start == end)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl PartialOrd for DateInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateInterval {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DateInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_interval(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date interval: {s}")))
    }
}

/// Parses the `Display` form: two ISO dates joined by `INTERVAL_SEPARATOR`.
fn parse_interval(s: &str) -> Option<DateInterval> {
    let (start, end) = s.split_once(INTERVAL_SEPARATOR)?;
    let start = start.parse::<NaiveDate>().ok()?;
    let end = end.parse::<NaiveDate>().ok()?;
    DateInterval::new(start, end)
}

/// Splits the span between `start` and `end` into consecutive intervals
/// aligned on `granularity` boundaries.
///
/// The first interval begins at `start` itself; every later interval begins
/// on a boundary; the final interval runs through the whole period containing
/// `end`, so its end may lie past `end` rather than being clamped to it.
/// A span with `start == end` still yields that single covering interval.
/// Returns an empty list when either bound is missing or `end` is before
/// `start`.
pub fn tile(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    granularity: Granularity,
) -> Vec<DateInterval> {
    let (Some(first), Some(last)) = (start, end) else {
        return Vec::new();
    };
    if last < first {
        return Vec::new();
    }

    let mut intervals = Vec::new();
    let mut current = first;
    loop {
        let next = granularity.next_boundary(current);
        intervals.push(DateInterval {
            start: current,
            end: next,
        });
        if next >= last {
            break;
        }
        current = next;
    }
    intervals
}
