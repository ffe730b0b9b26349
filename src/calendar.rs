//! Pure calendar arithmetic used by the parser.
//!
//! Weeks start on Monday; business days are Monday through Friday.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// Whether a date falls on Saturday or Sunday.
pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The most recent Monday on or before `date`.
pub(crate) fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The first day of the month containing `date`.
pub(crate) fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The date one calendar month before `date`, with the day clamped to the
/// target month's length (e.g. Mar 31 -> Feb 28/29).
pub(crate) fn back_one_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

/// The most recent non-weekend day on or before `date`.
pub(crate) fn previous_business_day(mut date: NaiveDate) -> NaiveDate {
    while is_weekend(date) {
        date -= Duration::days(1);
    }
    date
}

/// Step backward from `from` one calendar day at a time, counting only
/// non-weekend days, until `count` business days have been subtracted.
/// Returns `None` if the walk runs off the calendar.
pub(crate) fn subtract_business_days(from: NaiveDate, mut count: i64) -> Option<NaiveDate> {
    let mut date = from;
    while count > 0 {
        date = date.checked_sub_signed(Duration::days(1))?;
        if !is_weekend(date) {
            count -= 1;
        }
    }
    Some(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date(2024, 6, 8))); // Saturday
        assert!(is_weekend(date(2024, 6, 9))); // Sunday
        assert!(!is_weekend(date(2024, 6, 10))); // Monday
    }

    #[test]
    fn test_start_of_week_mid_week() {
        // Wednesday 2024-06-12 -> Monday 2024-06-10
        assert_eq!(start_of_week(date(2024, 6, 12)), date(2024, 6, 10));
    }

    #[test]
    fn test_start_of_week_on_monday() {
        assert_eq!(start_of_week(date(2024, 6, 10)), date(2024, 6, 10));
    }

    #[test]
    fn test_start_of_week_on_sunday() {
        // Sunday belongs to the week that started the previous Monday
        assert_eq!(start_of_week(date(2024, 6, 16)), date(2024, 6, 10));
    }

    #[test]
    fn test_start_of_month() {
        assert_eq!(start_of_month(date(2024, 6, 15)), date(2024, 6, 1));
        assert_eq!(start_of_month(date(2024, 6, 1)), date(2024, 6, 1));
    }

    #[test]
    fn test_back_one_month_simple() {
        assert_eq!(back_one_month(date(2024, 6, 15)), date(2024, 5, 15));
    }

    #[test]
    fn test_back_one_month_clamps_day() {
        // March 31 -> February 29 in a leap year
        assert_eq!(back_one_month(date(2024, 3, 31)), date(2024, 2, 29));
    }

    #[test]
    fn test_previous_business_day_from_weekend() {
        // Sunday 2024-06-09 -> Friday 2024-06-07
        assert_eq!(previous_business_day(date(2024, 6, 9)), date(2024, 6, 7));
        assert_eq!(previous_business_day(date(2024, 6, 8)), date(2024, 6, 7));
    }

    #[test]
    fn test_previous_business_day_identity_on_weekday() {
        assert_eq!(previous_business_day(date(2024, 6, 11)), date(2024, 6, 11));
    }

    #[test]
    fn test_subtract_business_days_skips_weekend() {
        // Friday minus 2 business days -> Wednesday
        assert_eq!(
            subtract_business_days(date(2024, 6, 7), 2),
            Some(date(2024, 6, 5))
        );
        // Monday minus 1 business day -> previous Friday
        assert_eq!(
            subtract_business_days(date(2024, 6, 10), 1),
            Some(date(2024, 6, 7))
        );
    }

    #[test]
    fn test_subtract_zero_business_days() {
        assert_eq!(
            subtract_business_days(date(2024, 6, 8), 0),
            Some(date(2024, 6, 8))
        );
    }
}
