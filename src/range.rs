//! The date-range value type.

use chrono::NaiveDate;
use serde::Serialize;

/// An inclusive range of calendar dates, at day granularity.
///
/// Ranges are built only by the parser, which guarantees `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range from a start and end date.
    pub(crate) const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Create a range covering a single day.
    pub(crate) const fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, counting both endpoints.
    #[must_use]
    pub fn num_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days() + 1
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::single(date(2024, 6, 10));
        assert_eq!(range.start(), range.end());
        assert_eq!(range.num_days(), 1);
    }

    #[test]
    fn test_num_days_inclusive() {
        let range = DateRange::new(date(2024, 6, 1), date(2024, 6, 7));
        assert_eq!(range.num_days(), 7);
    }

    #[test]
    fn test_display_iso_dates() {
        let range = DateRange::new(date(2024, 6, 1), date(2024, 6, 7));
        assert_eq!(range.to_string(), "2024-06-01..2024-06-07");
    }
}
