//! Persisted commission calculation record

use chrono::{DateTime, Utc};
use core_kernel::{AgreementId, BookingId, CalculationId, HotelId, Money, Rate};
use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::calculator::{AppliedTierRule, CalculationResult};

/// The immutable result of one calculation run for one booking
///
/// Created exactly once per booking and never modified afterwards; the
/// at-most-one-per-booking uniqueness is enforced by the orchestrating
/// service before the calculator runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionCalculation {
    /// Unique identifier
    pub id: CalculationId,
    /// The booking this calculation is for (1:1)
    pub booking_id: BookingId,
    /// The hotel earning the commission
    pub hotel_id: HotelId,
    /// The agreement that governed the booking
    pub agreement_id: AgreementId,
    /// Commission before bonuses
    pub base_amount: Money,
    /// Percentage rate applied, None for flat-fee agreements
    pub base_rate: Option<Rate>,
    /// Preferred-hotel bonus
    pub preferred_bonus: Money,
    /// Volume tier bonus
    pub tier_bonus: Money,
    /// Exact total commission
    pub total_amount: Money,
    /// The monthly volume the tier selection ran against
    pub monthly_booking_count: u32,
    /// The qualifying tier, if any
    pub applied_tier_rule: Option<AppliedTierRule>,
    /// When the calculation ran
    pub calculated_at: DateTime<Utc>,
}

impl CommissionCalculation {
    /// Builds the record from a calculator result and its context
    pub fn from_result(
        booking: &Booking,
        agreement_id: AgreementId,
        result: CalculationResult,
        monthly_booking_count: u32,
        calculated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CalculationId::new_v7(),
            booking_id: booking.id,
            hotel_id: booking.hotel_id,
            agreement_id,
            base_amount: result.base_amount,
            base_rate: result.base_rate,
            preferred_bonus: result.preferred_bonus,
            tier_bonus: result.tier_bonus,
            total_amount: result.total_amount,
            monthly_booking_count,
            applied_tier_rule: result.applied_tier_rule,
            calculated_at,
        }
    }
}
