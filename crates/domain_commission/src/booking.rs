//! Booking entity and its lifecycle
//!
//! A booking moves Pending -> Completed or Pending -> Cancelled. Only
//! completed bookings are eligible for commission calculation, and the
//! completion timestamp anchors the monthly volume window.

use chrono::{DateTime, Utc};
use core_kernel::{BookingId, HotelId, Money};
use serde::{Deserialize, Serialize};

use crate::error::CommissionError;

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Completed,
    Cancelled,
}

/// A guest booking at a partner hotel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier
    pub id: BookingId,
    /// The hotel the stay was booked at
    pub hotel_id: HotelId,
    /// Gross booking amount
    pub amount: Money,
    /// When the booking was made; determines which agreement governs it
    pub booking_date: DateTime<Utc>,
    /// Lifecycle status
    pub status: BookingStatus,
    /// When the stay completed; anchors the monthly volume window
    pub completed_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new pending booking
    pub fn new(hotel_id: HotelId, amount: Money, booking_date: DateTime<Utc>) -> Self {
        Self {
            id: BookingId::new_v7(),
            hotel_id,
            amount,
            booking_date,
            status: BookingStatus::Pending,
            completed_at: None,
            created_at: Utc::now(),
        }
    }

    /// Marks the booking as completed at the given instant
    ///
    /// # Errors
    ///
    /// Returns an error if the booking is already completed or was cancelled.
    pub fn mark_completed(&mut self, at: DateTime<Utc>) -> Result<(), CommissionError> {
        match self.status {
            BookingStatus::Completed => Err(CommissionError::BookingAlreadyCompleted),
            BookingStatus::Cancelled => Err(CommissionError::BookingCancelled),
            BookingStatus::Pending => {
                self.status = BookingStatus::Completed;
                self.completed_at = Some(at);
                Ok(())
            }
        }
    }

    /// Cancels the booking
    ///
    /// # Errors
    ///
    /// Returns an error if the booking has already completed.
    pub fn cancel(&mut self) -> Result<(), CommissionError> {
        match self.status {
            BookingStatus::Completed => Err(CommissionError::CancelAfterCompletion),
            _ => {
                self.status = BookingStatus::Cancelled;
                Ok(())
            }
        }
    }

    /// Returns true if the booking has completed
    pub fn is_completed(&self) -> bool {
        self.status == BookingStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn booking() -> Booking {
        Booking::new(
            HotelId::new(),
            Money::new(dec!(1000), Currency::CHF),
            Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_mark_completed() {
        let mut b = booking();
        let at = Utc.with_ymd_and_hms(2024, 3, 12, 9, 0, 0).unwrap();

        b.mark_completed(at).unwrap();
        assert!(b.is_completed());
        assert_eq!(b.completed_at, Some(at));
    }

    #[test]
    fn test_cannot_complete_twice() {
        let mut b = booking();
        let at = Utc.with_ymd_and_hms(2024, 3, 12, 9, 0, 0).unwrap();
        b.mark_completed(at).unwrap();

        assert!(matches!(
            b.mark_completed(at),
            Err(CommissionError::BookingAlreadyCompleted)
        ));
    }

    #[test]
    fn test_cannot_complete_cancelled() {
        let mut b = booking();
        b.cancel().unwrap();

        let at = Utc.with_ymd_and_hms(2024, 3, 12, 9, 0, 0).unwrap();
        assert!(matches!(
            b.mark_completed(at),
            Err(CommissionError::BookingCancelled)
        ));
    }

    #[test]
    fn test_cannot_cancel_completed() {
        let mut b = booking();
        b.mark_completed(Utc.with_ymd_and_hms(2024, 3, 12, 9, 0, 0).unwrap())
            .unwrap();

        assert!(matches!(
            b.cancel(),
            Err(CommissionError::CancelAfterCompletion)
        ));
    }
}
