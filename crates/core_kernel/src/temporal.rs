//! Temporal types for time-varying contractual data
//!
//! This module provides the validity-interval type used for commission
//! agreements and the calendar helpers used by monthly reporting windows.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must be before end {end}")]
    InvalidPeriod { start: String, end: String },
}

/// A half-open validity interval `[start, end)`
///
/// This tracks the business-effective dates of contractual terms. A
/// commission agreement with `end = None` is open-ended and stays in force
/// until superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidPeriod {
    /// Start of the valid period (inclusive)
    pub start: DateTime<Utc>,
    /// End of the valid period (exclusive), None means unbounded
    pub end: Option<DateTime<Utc>>,
}

impl ValidPeriod {
    /// Creates a new valid period
    pub fn new(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Result<Self, TemporalError> {
        if let Some(end) = end {
            if start >= end {
                return Err(TemporalError::InvalidPeriod {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }
        Ok(Self { start, end })
    }

    /// Creates an unbounded period starting from the given time
    pub fn from(start: DateTime<Utc>) -> Self {
        Self { start, end: None }
    }

    /// Creates a bounded period
    pub fn bounded(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TemporalError> {
        Self::new(start, Some(end))
    }

    /// Returns true if this period contains the given timestamp
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && self.end.map_or(true, |e| timestamp < e)
    }

    /// Returns true if this period overlaps with another
    pub fn overlaps(&self, other: &ValidPeriod) -> bool {
        let self_end = self.end.unwrap_or(DateTime::<Utc>::MAX_UTC);
        let other_end = other.end.unwrap_or(DateTime::<Utc>::MAX_UTC);

        self.start < other_end && other.start < self_end
    }

    /// Returns true if this period is unbounded (no end date)
    pub fn is_unbounded(&self) -> bool {
        self.end.is_none()
    }

    /// Closes the period at the given timestamp
    pub fn close_at(&mut self, timestamp: DateTime<Utc>) -> Result<(), TemporalError> {
        if timestamp <= self.start {
            return Err(TemporalError::InvalidPeriod {
                start: self.start.to_string(),
                end: timestamp.to_string(),
            });
        }
        self.end = Some(timestamp);
        Ok(())
    }
}

/// Returns the first instant of the calendar month containing `timestamp`
pub fn start_of_month(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(timestamp.year(), timestamp.month(), 1, 0, 0, 0)
        .single()
        .expect("first of month is always a valid instant in UTC")
}

/// Returns the last instant (23:59:59.999999999) of the given date
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .expect("within-day time components are in range")
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_period_creation() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();

        let period = ValidPeriod::bounded(start, end).unwrap();
        assert!(period.contains(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()));
        assert!(!period.contains(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_period_end_is_exclusive() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let period = ValidPeriod::bounded(start, end).unwrap();

        assert!(period.contains(start));
        assert!(!period.contains(end));
    }

    #[test]
    fn test_unbounded_period() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let period = ValidPeriod::from(start);

        assert!(period.is_unbounded());
        assert!(period.contains(Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_close_at() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut period = ValidPeriod::from(start);

        let cutover = Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap();
        period.close_at(cutover).unwrap();
        assert_eq!(period.end, Some(cutover));

        assert!(period.close_at(start).is_err());
    }

    #[test]
    fn test_valid_period_overlap() {
        let p1 = ValidPeriod::bounded(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap(),
        )
        .unwrap();

        let p2 = ValidPeriod::bounded(
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
        )
        .unwrap();

        assert!(p1.overlaps(&p2));
    }

    #[test]
    fn test_start_of_month() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 17, 14, 25, 9).unwrap();
        assert_eq!(
            start_of_month(ts),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_end_of_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let end = end_of_day(date);
        assert_eq!(end.date_naive(), date);
        assert!(end > Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap() - chrono::Duration::seconds(1));
    }
}
