use crate::app::domain::CalendarDate;

/// Number of calendar days from `start` to `end`.
///
/// Negative when `end` precedes `start`.
pub fn delta(start: CalendarDate, end: CalendarDate) -> i64 {
    end.naive().signed_duration_since(start.naive()).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_delta_forward() {
        assert_eq!(delta(date(2023, 1, 1), date(2023, 1, 31)), 30);
        assert_eq!(delta(date(2023, 1, 1), date(2024, 1, 1)), 365);
        assert_eq!(delta(date(2024, 1, 1), date(2025, 1, 1)), 366);
    }

    #[test]
    fn test_delta_backward_is_negative() {
        assert_eq!(delta(date(2023, 6, 1), date(2023, 5, 1)), -31);
    }

    #[test]
    fn test_delta_same_day_is_zero() {
        for d in [date(2023, 5, 10), date(2024, 2, 29), date(1, 1, 1)] {
            assert_eq!(delta(d, d), 0);
        }
    }

    #[test]
    fn test_delta_antisymmetric() {
        let pairs = [
            (date(2023, 1, 1), date(2023, 1, 31)),
            (date(1999, 12, 31), date(2000, 3, 1)),
            (date(1, 1, 1), date(9999, 12, 31)),
        ];
        for (a, b) in pairs {
            assert_eq!(delta(a, b), -delta(b, a));
        }
    }

    #[test]
    fn test_delta_across_leap_day() {
        assert_eq!(delta(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(delta(date(2023, 2, 28), date(2023, 3, 1)), 1);
    }

    #[test]
    fn test_delta_full_range() {
        // 0001-01-01 to 9999-12-31 spans 3_652_058 days
        assert_eq!(delta(date(1, 1, 1), date(9999, 12, 31)), 3_652_058);
    }
}
