use std::fmt;

use chrono::{Datelike, NaiveDate};

/// A day on the proleptic Gregorian calendar.
///
/// Only constructed from components that form a real calendar date, so a
/// `CalendarDate` is always valid.
/// Years representable as four digits, without proleptic year 0
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from year, month and day.
    ///
    /// Returns None when the year is outside 1-9999, the month is outside
    /// 1-12 or the day does not exist in that month (leap years included).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !YEAR_RANGE.contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub(crate) fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_valid() {
        let d = CalendarDate::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 2);
        assert_eq!(d.day(), 29);
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert!(CalendarDate::from_ymd(2023, 2, 29).is_none());
        assert!(CalendarDate::from_ymd(2023, 13, 1).is_none());
        assert!(CalendarDate::from_ymd(2023, 0, 1).is_none());
        assert!(CalendarDate::from_ymd(2023, 4, 31).is_none());
        assert!(CalendarDate::from_ymd(2023, 1, 0).is_none());
    }

    #[test]
    fn test_from_ymd_year_bounds() {
        assert!(CalendarDate::from_ymd(0, 1, 1).is_none());
        assert!(CalendarDate::from_ymd(0, 2, 29).is_none());
        assert!(CalendarDate::from_ymd(-1, 1, 1).is_none());
        assert!(CalendarDate::from_ymd(10000, 1, 1).is_none());
        assert!(CalendarDate::from_ymd(1, 1, 1).is_some());
        assert!(CalendarDate::from_ymd(9999, 12, 31).is_some());
    }

    #[test]
    fn test_display_is_zero_padded() {
        let d = CalendarDate::from_ymd(987, 3, 7).unwrap();
        assert_eq!(d.to_string(), "0987-03-07");
    }

    #[test]
    fn test_ordering() {
        let a = CalendarDate::from_ymd(2023, 5, 1).unwrap();
        let b = CalendarDate::from_ymd(2023, 6, 1).unwrap();
        assert!(a < b);
    }
}
