use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate};
use regex::{Captures, Regex};

use crate::DateSpan;
use crate::consts::{
    DAYS_PER_WEEK, JANUARY, MAX_MONTH, MAX_QUARTER, MONTHS_PER_QUARTER, RANGE_KEYWORD,
    RANGE_SEPARATOR,
};
use crate::interval::DateInterval;
use crate::types::{Day, Month, Quarter, Week, Year};

/// Compiles a pattern known to be valid.
fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap_or_else(|err| panic!("invalid date pattern {re}: {err}"))
}

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(\d{4})$"));
static MONTH_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(\d{4})-(\d{2})$"));
static DAY_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(\d{4})-(\d{2})-(\d{2})$"));
static WEEK_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(\d{4})-W(\d{2})$"));
static QUARTER_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(\d{4})-Q(\d)$"));
static KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"\(?(year|quarter|month|week|day)(?:([-+])(\d+))?\)?"));

impl DateSpan {
    /// Parses a single date expression: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`,
    /// `YYYY-Wnn`, or `YYYY-Qn`, with surrounding whitespace ignored.
    /// Anything else, including out-of-range components, is a non-match.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(caps) = YEAR_RE.captures(trimmed) {
            year_rule(&caps)
        } else if let Some(caps) = MONTH_RE.captures(trimmed) {
            month_rule(&caps)
        } else if let Some(caps) = DAY_RE.captures(trimmed) {
            day_rule(&caps)
        } else if let Some(caps) = WEEK_RE.captures(trimmed) {
            week_rule(&caps)
        } else if let Some(caps) = QUARTER_RE.captures(trimmed) {
            quarter_rule(&caps)
        } else {
            None
        }
    }
}

fn year_rule(caps: &Captures<'_>) -> Option<DateSpan> {
    let year = Year::new(caps[1].parse().ok()?)?;
    Some(DateSpan::Year { year })
}

fn month_rule(caps: &Captures<'_>) -> Option<DateSpan> {
    let year = Year::new(caps[1].parse().ok()?)?;
    let month = Month::new(caps[2].parse().ok()?)?;
    Some(DateSpan::Month { year, month })
}

fn day_rule(caps: &Captures<'_>) -> Option<DateSpan> {
    let year = Year::new(caps[1].parse().ok()?)?;
    let month = Month::new(caps[2].parse().ok()?)?;
    let day = Day::new(caps[3].parse().ok()?, year.get(), month.get())?;
    Some(DateSpan::Day { year, month, day })
}

fn week_rule(caps: &Captures<'_>) -> Option<DateSpan> {
    let year = Year::new(caps[1].parse().ok()?)?;
    let week = Week::new(caps[2].parse().ok()?)?;
    Some(DateSpan::Week { year, week })
}

fn quarter_rule(caps: &Captures<'_>) -> Option<DateSpan> {
    let year = Year::new(caps[1].parse().ok()?)?;
    let quarter = Quarter::new(caps[2].parse().ok()?)?;
    Some(DateSpan::Quarter { year, quarter })
}

/// Parses a date or date range expression into a half-open interval.
///
/// A single span (`2015`, `2015-04`, `2015-04-01`, `2015-W01`, `2015-Q2`)
/// covers its whole period. Two year, month, or day expressions joined by
/// `to` or `-` form a range from the start of the first through the end of
/// the second. Returns `None` for unrecognized or reversed input; this
/// function never errors.
pub fn parse_date_range(text: &str) -> Option<DateInterval> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(span) = DateSpan::parse(trimmed) {
        return span.interval();
    }
    parse_range(trimmed)
}

/// Like [`parse_date_range`], with date keywords substituted first:
/// `month` resolves to the month containing `today`, `year-1 - month` to
/// the range from last year's start through that month.
pub fn parse_date_range_at(text: &str, today: NaiveDate) -> Option<DateInterval> {
    parse_date_range(&substitute(text, today))
}

/// Tries every occurrence of the range keyword and the range separator
/// until both sides parse as complete date expressions running forward in
/// time. Scanning every position lets `2011-10-2015` split after the month
/// rather than after the year.
fn parse_range(text: &str) -> Option<DateInterval> {
    let splits = text
        .match_indices(RANGE_KEYWORD)
        .chain(text.match_indices(RANGE_SEPARATOR));
    for (position, separator) in splits {
        let left = text[..position].trim();
        let right = text[position + separator.len()..].trim();
        let (Some(start), Some(end)) = (range_side(left), range_side(right)) else {
            continue;
        };
        let (Some(first), Some(last)) = (start.first_day(), end.end_exclusive()) else {
            continue;
        };
        // `2015 to 2014` resolves to equal endpoints; a non-forward pair is not a range.
        if first >= last {
            continue;
        }
        return DateInterval::new(first, last);
    }
    None
}

/// A range side must be a plain year, month, or day expression.
/// Week and quarter spans do not combine into ranges.
fn range_side(text: &str) -> Option<DateSpan> {
    let span = DateSpan::parse(text)?;
    match span {
        DateSpan::Day { .. } | DateSpan::Month { .. } | DateSpan::Year { .. } => Some(span),
        DateSpan::Week { .. } | DateSpan::Quarter { .. } => None,
    }
}

/// Replaces date keywords (`year`, `quarter`, `month`, `week`, `day`) with
/// the matching date expression anchored on `today`. Keywords take an
/// optional `+N`/`-N` offset and may be parenthesized, so `(month-1)`
/// becomes e.g. `2016-05`. Each occurrence is replaced independently;
/// anything else, including keywords with unresolvable offsets, passes
/// through unchanged.
pub fn substitute(text: &str, today: NaiveDate) -> String {
    KEYWORD_RE
        .replace_all(text, |caps: &Captures<'_>| {
            resolve_keyword(caps, today).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn resolve_keyword(caps: &Captures<'_>, today: NaiveDate) -> Option<String> {
    let offset = match (caps.get(2), caps.get(3)) {
        (Some(sign), Some(magnitude)) => {
            let magnitude: i32 = magnitude.as_str().parse().ok()?;
            if sign.as_str() == "-" {
                -magnitude
            } else {
                magnitude
            }
        }
        _ => 0,
    };

    match &caps[1] {
        "year" => {
            let year = today.year().checked_add(offset)?;
            Some(format!("{year:04}"))
        }
        "quarter" => {
            let quarters = i32::from(MAX_QUARTER);
            let index = i32::try_from((today.month() - JANUARY) / MONTHS_PER_QUARTER)
                .ok()?
                .checked_add(offset)?;
            let year = today.year().checked_add(index.div_euclid(quarters))?;
            let quarter = index.rem_euclid(quarters) + 1;
            Some(format!("{year:04}-Q{quarter}"))
        }
        "month" => {
            let months = i32::from(MAX_MONTH);
            let index = i32::try_from(today.month() - JANUARY)
                .ok()?
                .checked_add(offset)?;
            let year = today.year().checked_add(index.div_euclid(months))?;
            let month = index.rem_euclid(months) + 1;
            Some(format!("{year:04}-{month:02}"))
        }
        "week" => {
            let days = i64::from(offset).checked_mul(i64::from(DAYS_PER_WEEK))?;
            Some(add_days(today, days)?.format("%Y-W%W").to_string())
        }
        "day" => Some(add_days(today, i64::from(offset))?.to_string()),
        _ => None,
    }
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days < 0 {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    }
}
