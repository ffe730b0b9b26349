//! Natural-language date-range parsing.
//!
//! Parses expressions like "today", "last 3 business days", or
//! "from 2024-01-01 to 2024-03-15" into a [`DateRange`].
//!
//! Matching is an ordered table of (predicate, resolver) pairs evaluated
//! top to bottom; the first predicate that accepts the normalized input
//! wins. Order matters: "last N business days" must be tried before the
//! generic "last N days" pattern it textually contains.

use chrono::{Duration, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::calendar;
use crate::error::DatespanError;
use crate::range::DateRange;

/// A single expression rule: a cheap structural predicate plus a resolver
/// that computes the range relative to `today`.
struct Rule {
    matches: fn(&str) -> bool,
    resolve: fn(&str, NaiveDate) -> Result<DateRange, DatespanError>,
}

/// Supported expressions, in priority order.
static RULES: &[Rule] = &[
    Rule {
        matches: |input| input == "today",
        resolve: |_, today| Ok(DateRange::single(today)),
    },
    Rule {
        matches: |input| input == "yesterday",
        resolve: |_, today| Ok(DateRange::single(today - Duration::days(1))),
    },
    Rule {
        matches: |input| input == "this week",
        resolve: |_, today| Ok(DateRange::new(calendar::start_of_week(today), today)),
    },
    Rule {
        matches: |input| input == "this month",
        resolve: |_, today| Ok(DateRange::new(calendar::start_of_month(today), today)),
    },
    Rule {
        matches: |input| input == "last week",
        resolve: |_, today| {
            let end = today - Duration::days(1);
            Ok(DateRange::new(end - Duration::days(6), end))
        },
    },
    Rule {
        matches: |input| input == "last month",
        resolve: |_, today| {
            let end = today - Duration::days(1);
            let start = calendar::back_one_month(end) + Duration::days(1);
            Ok(DateRange::new(start, end))
        },
    },
    Rule {
        matches: |input| input.starts_with("last ") && input.contains("business day"),
        resolve: resolve_last_business_days,
    },
    Rule {
        matches: |input| input.starts_with("last ") && input.contains("day"),
        resolve: resolve_last_days,
    },
    Rule {
        matches: |input| FROM_TO_PATTERN.is_match(input),
        resolve: resolve_from_to,
    },
];

// Two numeric date tokens (digit groups joined by - or /) after "from"/"to".
static FROM_TO_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bfrom\s+(\d{1,4}(?:[-/]\d{1,4}){2})\s+to\s+(\d{1,4}(?:[-/]\d{1,4}){2})\b")
        .unwrap_or_else(|e| panic!("Invalid from/to regex: {e}"))
});

/// Parse a date-range expression against the current local date.
///
/// The local date is read once per call, so a call that straddles midnight
/// still sees a single consistent "today".
///
/// # Errors
///
/// - [`DatespanError::EmptyInput`] if `input` is empty or whitespace-only.
/// - [`DatespanError::UnsupportedExpression`] if no rule matches.
/// - [`DatespanError::NoCount`] if a counted rule matched but no integer
///   token was found.
/// - [`DatespanError::CountOutOfRange`] if the extracted count is zero or
///   negative.
pub fn parse(input: &str) -> Result<DateRange, DatespanError> {
    parse_on(input, Local::now().date_naive())
}

/// Parse a date-range expression against an explicit reference date.
///
/// This is the deterministic core of [`parse`]; pinning `today` makes
/// results reproducible in tests and batch jobs.
///
/// # Errors
///
/// Same as [`parse`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use datespan::parse_on;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
/// let range = parse_on("last 5 days", today).unwrap();
/// assert_eq!(range.start(), NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
/// assert_eq!(range.end(), NaiveDate::from_ymd_opt(2024, 6, 11).unwrap());
/// ```
pub fn parse_on(input: &str, today: NaiveDate) -> Result<DateRange, DatespanError> {
    let normalized = input.trim().to_lowercase();

    if normalized.is_empty() {
        return Err(DatespanError::EmptyInput);
    }

    for rule in RULES {
        if (rule.matches)(&normalized) {
            return (rule.resolve)(&normalized, today);
        }
    }

    Err(DatespanError::UnsupportedExpression(normalized))
}

/// Non-throwing variant of [`parse`].
///
/// Collapses every failure kind into `None`.
///
/// # Examples
///
/// ```
/// assert!(datespan::try_parse("today").is_some());
/// assert!(datespan::try_parse("next week").is_none());
/// assert!(datespan::try_parse("").is_none());
/// ```
#[must_use]
pub fn try_parse(input: &str) -> Option<DateRange> {
    parse(input).ok()
}

/// "last N business days": a window of N business days ending on the most
/// recent business day before today.
fn resolve_last_business_days(
    input: &str,
    today: NaiveDate,
) -> Result<DateRange, DatespanError> {
    let count = extract_count(input)?;
    if count <= 0 {
        return Err(DatespanError::CountOutOfRange(count));
    }

    // The window ends on a business day, so a request made on a Monday or
    // over a weekend anchors to the previous Friday.
    let end = calendar::previous_business_day(today - Duration::days(1));
    let start = calendar::subtract_business_days(end, count - 1)
        .ok_or(DatespanError::CountOutOfRange(count))?;

    Ok(DateRange::new(start, end))
}

/// "last N days": an inclusive N-day calendar window ending yesterday.
fn resolve_last_days(input: &str, today: NaiveDate) -> Result<DateRange, DatespanError> {
    let count = extract_count(input)?;
    if count <= 0 {
        return Err(DatespanError::CountOutOfRange(count));
    }

    let end = today - Duration::days(1);
    let span = Duration::try_days(count - 1).ok_or(DatespanError::CountOutOfRange(count))?;
    let start = end
        .checked_sub_signed(span)
        .ok_or(DatespanError::CountOutOfRange(count))?;

    Ok(DateRange::new(start, end))
}

/// "from X to Y" with explicit numeric dates. Unparsable or reversed dates
/// make the whole expression unsupported rather than raising a distinct
/// error, since nothing else can match this shape.
fn resolve_from_to(input: &str, _today: NaiveDate) -> Result<DateRange, DatespanError> {
    let unsupported = || DatespanError::UnsupportedExpression(input.to_string());

    let caps = FROM_TO_PATTERN.captures(input).ok_or_else(unsupported)?;
    let start = caps
        .get(1)
        .and_then(|m| parse_date_token(m.as_str()))
        .ok_or_else(unsupported)?;
    let end = caps
        .get(2)
        .and_then(|m| parse_date_token(m.as_str()))
        .ok_or_else(unsupported)?;

    if start > end {
        return Err(unsupported());
    }

    Ok(DateRange::new(start, end))
}

/// Parse a numeric date token with explicit formats: ISO first, then
/// slash-separated ISO, then US month/day/year.
fn parse_date_token(token: &str) -> Option<NaiveDate> {
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(token, format) {
            return Some(date);
        }
    }
    None
}

/// Extract the first whitespace-separated token that parses as a base-10
/// integer. Leading zeros are fine; a parseable negative is passed through
/// so the caller can reject it as out of range rather than missing.
fn extract_count(input: &str) -> Result<i64, DatespanError> {
    input
        .split_whitespace()
        .find_map(|token| token.parse::<i64>().ok())
        .ok_or_else(|| DatespanError::NoCount(input.to_string()))
}
