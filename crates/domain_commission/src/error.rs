//! Commission domain errors

use chrono::{DateTime, Utc};
use core_kernel::{BookingId, HotelId, MoneyError, PortError};
use thiserror::Error;

/// Errors that can occur in the commission domain
#[derive(Debug, Error)]
pub enum CommissionError {
    /// Booking not found
    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    /// Hotel not found
    #[error("Hotel not found: {0}")]
    HotelNotFound(HotelId),

    /// No agreement interval covers the reference date
    #[error("No commission agreement found for hotel {hotel_id} at {reference_date}")]
    NoAgreementInForce {
        hotel_id: HotelId,
        reference_date: DateTime<Utc>,
    },

    /// Agreement data is internally inconsistent
    #[error("Invalid agreement: {0}")]
    InvalidAgreement(String),

    /// Commission requested for a booking that is not completed
    #[error("Booking must be completed before calculating commission")]
    BookingNotCompleted,

    /// A calculation already exists for this booking
    #[error("Commission already calculated for this booking")]
    AlreadyCalculated,

    /// Completed booking is missing its completion timestamp
    #[error("Booking has no completion date")]
    MissingCompletionDate,

    /// Completion requested twice
    #[error("Booking is already completed")]
    BookingAlreadyCompleted,

    /// Completion requested for a cancelled booking
    #[error("Cannot complete a cancelled booking")]
    BookingCancelled,

    /// Cancellation requested for a completed booking
    #[error("Cannot cancel a completed booking")]
    CancelAfterCompletion,

    /// Monetary arithmetic failure (e.g. mixed currencies in one agreement)
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Collaborator failure
    #[error(transparent)]
    Port(#[from] PortError),
}
