//! Calendar month tokens and reporting windows

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use core_kernel::end_of_day;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportingError;

/// A calendar month, parsed from a `"YYYY-MM"` token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportMonth {
    year: i32,
    month: u32,
}

impl ReportMonth {
    /// Creates a month, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, ReportingError> {
        if year < 1 || !(1..=12).contains(&month) {
            return Err(ReportingError::InvalidMonth(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// Returns the year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// First instant of the month
    pub fn start(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(self.year, self.month, 1, 0, 0, 0)
            .single()
            .expect("validated month number")
    }

    /// Last instant of the month's last day
    pub fn end(&self) -> DateTime<Utc> {
        end_of_day(self.last_day())
    }

    /// The inclusive reporting window for this month
    pub fn period(&self) -> ReportPeriod {
        ReportPeriod {
            start: self.start(),
            end: self.end(),
        }
    }

    fn last_day(&self) -> NaiveDate {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("validated month");
        let first_of_next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
        .expect("first of month always exists");
        first_of_next.pred_opt().unwrap_or(first)
    }
}

impl fmt::Display for ReportMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for ReportMonth {
    type Err = ReportingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReportingError::InvalidMonth(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }
}

impl From<DateTime<Utc>> for ReportMonth {
    fn from(timestamp: DateTime<Utc>) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }
}

/// The resolved date window of a monthly report, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_month() {
        let month: ReportMonth = "2024-03".parse().unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 3);
        assert_eq!(month.to_string(), "2024-03");
    }

    #[test]
    fn test_parse_rejects_out_of_range_month() {
        assert!("2024-13".parse::<ReportMonth>().is_err());
        assert!("2024-00".parse::<ReportMonth>().is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abcd".parse::<ReportMonth>().is_err());
        assert!("2024".parse::<ReportMonth>().is_err());
        assert!("2024-xy".parse::<ReportMonth>().is_err());
        assert!("".parse::<ReportMonth>().is_err());
    }

    #[test]
    fn test_period_spans_whole_month() {
        let month: ReportMonth = "2024-03".parse().unwrap();
        let period = month.period();

        assert_eq!(
            period.start,
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(period.end.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        // The entire last day is inside the window.
        assert!(period.end >= Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_december_window() {
        let month: ReportMonth = "2023-12".parse().unwrap();
        assert_eq!(
            month.end().date_naive(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_leap_february_window() {
        let month: ReportMonth = "2024-02".parse().unwrap();
        assert_eq!(
            month.end().date_naive(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }
}
