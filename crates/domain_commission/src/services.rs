//! Commission domain services
//!
//! `CommissionService` orchestrates one calculation run: it owns the
//! business preconditions (booking completed, no prior calculation), the
//! temporal agreement resolution, and the monthly volume lookup, then hands
//! the assembled input to the pure calculator and persists the result.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, instrument};

use core_kernel::{start_of_month, BookingId};

use crate::booking::BookingStatus;
use crate::calculation::CommissionCalculation;
use crate::calculator::{CalculationInput, CommissionCalculator};
use crate::error::CommissionError;
use crate::ports::CommissionPort;
use crate::resolver::resolve_agreement;

/// Orchestrates commission calculation over a `CommissionPort`
pub struct CommissionService {
    port: Arc<dyn CommissionPort>,
    calculator: CommissionCalculator,
}

impl CommissionService {
    /// Creates a service backed by the given port
    pub fn new(port: Arc<dyn CommissionPort>) -> Self {
        Self {
            port,
            calculator: CommissionCalculator::new(),
        }
    }

    /// Calculates and persists the commission for a completed booking
    ///
    /// The monthly volume window is `[start of completion month,
    /// completion instant)`, so the booking never counts toward its own
    /// tier qualification.
    ///
    /// # Errors
    ///
    /// - `BookingNotFound` / `HotelNotFound` when a collaborator lookup
    ///   comes back empty
    /// - `BookingNotCompleted`, `MissingCompletionDate`, `AlreadyCalculated`
    ///   when a business precondition fails
    /// - `NoAgreementInForce` when no agreement interval covers the booking
    ///   date
    /// - `InvalidAgreement` when the resolved agreement is internally
    ///   inconsistent
    #[instrument(skip(self))]
    pub async fn calculate_for_booking(
        &self,
        booking_id: BookingId,
    ) -> Result<CommissionCalculation, CommissionError> {
        let booking = self.port.booking(booking_id).await.map_err(|e| {
            if e.is_not_found() {
                CommissionError::BookingNotFound(booking_id)
            } else {
                CommissionError::Port(e)
            }
        })?;

        if booking.status != BookingStatus::Completed {
            return Err(CommissionError::BookingNotCompleted);
        }
        if self
            .port
            .calculation_for_booking(booking_id)
            .await?
            .is_some()
        {
            return Err(CommissionError::AlreadyCalculated);
        }
        let completed_at = booking
            .completed_at
            .ok_or(CommissionError::MissingCompletionDate)?;

        let hotel = self.port.hotel(booking.hotel_id).await.map_err(|e| {
            if e.is_not_found() {
                CommissionError::HotelNotFound(booking.hotel_id)
            } else {
                CommissionError::Port(e)
            }
        })?;

        let agreements = self.port.agreements_for_hotel(booking.hotel_id).await?;
        let agreement = resolve_agreement(&agreements, booking.booking_date).ok_or(
            CommissionError::NoAgreementInForce {
                hotel_id: booking.hotel_id,
                reference_date: booking.booking_date,
            },
        )?;
        debug!(
            agreement_id = %agreement.id,
            commission_type = %agreement.commission_type,
            "Resolved governing agreement"
        );

        let monthly_count = self
            .port
            .completed_booking_count(booking.hotel_id, start_of_month(completed_at), completed_at)
            .await?;
        debug!(monthly_count, "Trailing monthly volume");

        let input = CalculationInput::from_agreement(
            booking.amount,
            agreement,
            hotel.status,
            monthly_count,
        );
        let result = self.calculator.calculate(&input)?;
        debug!(total = %result.total_amount, "Commission calculated");

        let calculation = CommissionCalculation::from_result(
            &booking,
            agreement.id,
            result,
            monthly_count,
            Utc::now(),
        );
        Ok(self.port.save_calculation(calculation).await?)
    }
}
