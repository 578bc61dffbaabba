use crate::consts::{DAYS_PER_WEEK, JANUARY, MONTHS_PER_QUARTER};
use crate::prelude::*;
use crate::types::{days_in_month, days_in_year};
use chrono::{Datelike, Days, NaiveDate};
use std::str::FromStr;

/// Error for a granularity name outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported granularity: {0}")]
pub struct UnsupportedGranularity(pub String);

/// Error for a period name outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown period name: {0}")]
pub struct UnknownPeriodName(pub String);

/// Step size for interval boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Granularity {
    /// Calendar days
    #[display(fmt = "day")]
    Day,
    /// Weeks starting on Monday
    #[display(fmt = "week")]
    Week,
    /// Calendar months
    #[display(fmt = "month")]
    Month,
    /// Calendar quarters, starting January, April, July, and October
    #[display(fmt = "quarter")]
    Quarter,
    /// Calendar years
    #[display(fmt = "year")]
    Year,
}

impl Granularity {
    /// First date strictly after `date` on which the next period at this
    /// granularity begins. A Monday steps a full week forward; the first of
    /// a month still steps to the first of the following month.
    ///
    /// Every date through year `MAX_YEAR` has a representable boundary. The
    /// date arithmetic is unchecked and panics past chrono's calendar
    /// maximum, far beyond that range.
    pub fn next_boundary(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Day => date + Days::new(1),
            Self::Week => {
                let into_week = date.weekday().num_days_from_monday();
                date + Days::new(u64::from(DAYS_PER_WEEK - into_week))
            }
            Self::Month => first_of_next_month(date),
            Self::Quarter => {
                let mut next = first_of_next_month(date);
                while (next.month() - JANUARY) % MONTHS_PER_QUARTER != 0 {
                    next = first_of_next_month(next);
                }
                next
            }
            Self::Year => {
                let remaining = days_in_year(date.year()) - date.ordinal();
                date + Days::new(u64::from(remaining + 1))
            }
        }
    }
}

impl FromStr for Granularity {
    type Err = UnsupportedGranularity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            _ => Err(UnsupportedGranularity(s.to_owned())),
        }
    }
}

impl serde::Serialize for Granularity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Granularity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Named reporting period sizes. Kept separate from [`Granularity`] because
/// the two accept different spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Period {
    /// One day
    #[display(fmt = "daily")]
    Daily,
    /// One week
    #[display(fmt = "weekly")]
    Weekly,
    /// One calendar month
    #[display(fmt = "monthly")]
    Monthly,
    /// One calendar quarter
    #[display(fmt = "quarterly")]
    Quarterly,
    /// One calendar year
    #[display(fmt = "yearly")]
    Yearly,
}

impl Period {
    /// Number of days in the period of this size that contains `reference`.
    pub fn days(self, reference: NaiveDate) -> u32 {
        match self {
            Self::Daily => 1,
            Self::Weekly => DAYS_PER_WEEK,
            Self::Monthly => days_in_month(reference.year(), reference.month()),
            Self::Quarterly => {
                let first =
                    (reference.month() - JANUARY) / MONTHS_PER_QUARTER * MONTHS_PER_QUARTER
                        + JANUARY;
                (first..first + MONTHS_PER_QUARTER)
                    .map(|month| days_in_month(reference.year(), month))
                    .sum()
            }
            Self::Yearly => days_in_year(reference.year()),
        }
    }
}

impl FromStr for Period {
    type Err = UnknownPeriodName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(UnknownPeriodName(s.to_owned())),
        }
    }
}

impl serde::Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// First day of the month after `date`'s month.
fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let remaining = days_in_month(date.year(), date.month()) - date.day();
    date + Days::new(u64::from(remaining + 1))
}
