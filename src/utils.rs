use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, Weekday};
use regex::Regex;

use crate::error::{FixerError, Result};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

// "+3 days", "-1 week", "2 months"
static OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)\s*(\d+)\s*(day|week|month|year)s?$").expect("valid offset pattern")
});

// "2 days ago"
static AGO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s*(day|week|month|year)s?\s+ago$").expect("valid ago pattern")
});

// "last monday", "next fri"
static WEEKDAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(last|next)\s+([a-z]+)$").expect("valid weekday pattern"));

/// Parses a loose date expression into a calendar date.
///
/// Accepts ISO dates, a handful of common numeric and month-name layouts,
/// local date-times, RFC 3339 / RFC 2822 timestamps and relative phrases
/// (`today`, `yesterday`, `-1 day`, `2 weeks ago`, `last monday`) resolved
/// against the local clock.
pub fn parse_date(expr: &str) -> Result<NaiveDate> {
    parse_date_at(expr, Local::now().date_naive())
}

/// Same as [`parse_date`] with relative phrases resolved against `today`.
pub fn parse_date_at(expr: &str, today: NaiveDate) -> Result<NaiveDate> {
    let expr = expr.trim();
    let invalid = || FixerError::Configuration(format!("Failed to parse date '{}'", expr));

    if let Some(relative) = parse_relative(&expr.to_ascii_lowercase(), today) {
        return relative.ok_or_else(invalid);
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(expr, fmt).ok())
    {
        return Ok(date);
    }

    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(expr, fmt).ok())
    {
        return Ok(datetime.date());
    }

    DateTime::parse_from_rfc3339(expr)
        .or_else(|_| DateTime::parse_from_rfc2822(expr))
        .map(|dt| dt.date_naive())
        .map_err(|_| invalid())
}

/// `None` when `expr` is not a relative phrase, `Some(None)` when it is one
/// but lands outside the representable range.
fn parse_relative(expr: &str, today: NaiveDate) -> Option<Option<NaiveDate>> {
    match expr {
        "today" | "now" => return Some(Some(today)),
        "yesterday" => return Some(today.pred_opt()),
        "tomorrow" => return Some(today.succ_opt()),
        _ => {}
    }

    if let Some(caps) = OFFSET.captures(expr) {
        let amount = caps[2].parse::<u32>().ok()?;
        return Some(shift(today, amount, &caps[3], &caps[1] != "-"));
    }

    if let Some(caps) = AGO.captures(expr) {
        let amount = caps[1].parse::<u32>().ok()?;
        return Some(shift(today, amount, &caps[2], false));
    }

    if let Some(caps) = WEEKDAY.captures(expr) {
        let weekday = caps[2].parse::<Weekday>().ok()?;
        return Some(nearest_weekday(today, weekday, &caps[1] == "next"));
    }

    None
}

fn shift(date: NaiveDate, amount: u32, unit: &str, forward: bool) -> Option<NaiveDate> {
    match unit {
        "day" | "week" => {
            let days = Days::new(u64::from(amount) * if unit == "week" { 7 } else { 1 });
            if forward {
                date.checked_add_days(days)
            } else {
                date.checked_sub_days(days)
            }
        }
        _ => {
            let months = Months::new(amount.checked_mul(if unit == "year" { 12 } else { 1 })?);
            if forward {
                date.checked_add_months(months)
            } else {
                date.checked_sub_months(months)
            }
        }
    }
}

/// The closest `weekday` strictly after (`next`) or before (`last`) `date`.
fn nearest_weekday(date: NaiveDate, weekday: Weekday, forward: bool) -> Option<NaiveDate> {
    let from = i64::from(date.weekday().num_days_from_monday());
    let to = i64::from(weekday.num_days_from_monday());
    let days = if forward {
        (to - from - 1).rem_euclid(7) + 1
    } else {
        (from - to - 1).rem_euclid(7) + 1
    };
    let days = Days::new(days as u64);

    if forward {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}
