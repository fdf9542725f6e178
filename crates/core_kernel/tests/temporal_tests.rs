//! Unit tests for temporal types and calendar helpers

use chrono::{NaiveDate, TimeZone, Utc};
use core_kernel::{end_of_day, start_of_month, TemporalError, ValidPeriod};

fn at(y: i32, m: u32, d: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

mod valid_period {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_interval() {
        let result = ValidPeriod::new(at(2024, 6, 1), Some(at(2024, 1, 1)));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_new_rejects_empty_interval() {
        let result = ValidPeriod::new(at(2024, 6, 1), Some(at(2024, 6, 1)));
        assert!(result.is_err());
    }

    #[test]
    fn test_contains_is_half_open() {
        let period = ValidPeriod::bounded(at(2024, 1, 1), at(2024, 3, 16)).unwrap();

        assert!(period.contains(at(2024, 1, 1)));
        assert!(period.contains(at(2024, 3, 15)));
        assert!(!period.contains(at(2024, 3, 16)));
    }

    #[test]
    fn test_unbounded_contains_far_future() {
        let period = ValidPeriod::from(at(2024, 1, 1));
        assert!(period.is_unbounded());
        assert!(period.contains(at(2099, 12, 31)));
        assert!(!period.contains(at(2023, 12, 31)));
    }

    #[test]
    fn test_close_at_bounds_the_period() {
        let mut period = ValidPeriod::from(at(2024, 1, 1));
        period.close_at(at(2024, 3, 16)).unwrap();

        assert!(!period.is_unbounded());
        assert!(!period.contains(at(2024, 3, 16)));
    }

    #[test]
    fn test_close_at_before_start_fails() {
        let mut period = ValidPeriod::from(at(2024, 6, 1));
        assert!(period.close_at(at(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_adjacent_periods_do_not_overlap() {
        let first = ValidPeriod::bounded(at(2024, 1, 1), at(2024, 3, 16)).unwrap();
        let second = ValidPeriod::from(at(2024, 3, 16));

        assert!(!first.overlaps(&second));
    }

    #[test]
    fn test_nested_periods_overlap() {
        let outer = ValidPeriod::from(at(2024, 1, 1));
        let inner = ValidPeriod::bounded(at(2024, 2, 1), at(2024, 3, 1)).unwrap();

        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}

mod calendar_helpers {
    use super::*;

    #[test]
    fn test_start_of_month_truncates() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 17, 14, 25, 9).unwrap();
        assert_eq!(start_of_month(ts), at(2024, 3, 1));
    }

    #[test]
    fn test_start_of_month_is_idempotent() {
        let first = at(2024, 3, 1);
        assert_eq!(start_of_month(first), first);
    }

    #[test]
    fn test_end_of_day_is_before_next_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let end = end_of_day(date);

        assert_eq!(end.date_naive(), date);
        assert!(end < at(2024, 4, 1));
    }

    #[test]
    fn test_end_of_day_across_year_boundary() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let end = end_of_day(date);

        assert!(end < at(2024, 1, 1));
        assert!(end > at(2023, 12, 31));
    }
}
