//! Commission calculation
//!
//! The calculator is a pure function: booking amount, agreement terms,
//! hotel status, and monthly volume in; a commission breakdown out. It
//! performs no I/O and does not re-check business preconditions (booking
//! completed, no prior calculation) — those belong to the orchestrating
//! service.

use core_kernel::{Money, Rate};
use serde::{Deserialize, Serialize};

use crate::agreement::{CommissionAgreement, CommissionType};
use crate::error::CommissionError;
use crate::hotel::HotelStatus;
use crate::tier::{select_tier, TierRule};

/// Everything a single calculation needs, already fetched and resolved
#[derive(Debug, Clone)]
pub struct CalculationInput {
    /// Gross booking amount
    pub booking_amount: Money,
    /// Agreement discriminant
    pub commission_type: CommissionType,
    /// Required iff the agreement is PERCENTAGE
    pub base_rate: Option<Rate>,
    /// Required iff the agreement is FLAT_FEE
    pub flat_amount: Option<Money>,
    /// Hotel status at calculation time
    pub hotel_status: HotelStatus,
    /// Extra rate for preferred hotels, if configured
    pub preferred_bonus: Option<Rate>,
    /// Volume tier rules from the agreement
    pub tier_rules: Vec<TierRule>,
    /// Completed bookings this month, excluding the booking itself
    pub monthly_booking_count: u32,
}

impl CalculationInput {
    /// Assembles an input from a resolved agreement
    pub fn from_agreement(
        booking_amount: Money,
        agreement: &CommissionAgreement,
        hotel_status: HotelStatus,
        monthly_booking_count: u32,
    ) -> Self {
        Self {
            booking_amount,
            commission_type: agreement.commission_type,
            base_rate: agreement.base_rate,
            flat_amount: agreement.flat_amount,
            hotel_status,
            preferred_bonus: agreement.preferred_bonus,
            tier_rules: agreement.tier_rules.clone(),
            monthly_booking_count,
        }
    }
}

/// The tier rule that granted the tier bonus, echoed for audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedTierRule {
    pub min_bookings: u32,
    pub bonus_rate: Rate,
}

/// The breakdown produced by one calculation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Commission before bonuses
    pub base_amount: Money,
    /// The percentage rate applied, None for flat-fee agreements
    pub base_rate: Option<Rate>,
    /// Preferred-hotel bonus, zero for standard hotels
    pub preferred_bonus: Money,
    /// Volume tier bonus, zero when no tier qualifies
    pub tier_bonus: Money,
    /// base + preferred bonus + tier bonus, exact
    pub total_amount: Money,
    /// The qualifying tier, if any
    pub applied_tier_rule: Option<AppliedTierRule>,
}

/// Pure commission calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct CommissionCalculator;

impl CommissionCalculator {
    /// Creates a calculator
    pub fn new() -> Self {
        Self
    }

    /// Computes the commission breakdown for one booking
    ///
    /// # Errors
    ///
    /// Fails with `InvalidAgreement` when the agreement data is internally
    /// inconsistent: a PERCENTAGE agreement without a base rate, or a
    /// FLAT_FEE agreement without a flat amount.
    pub fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult, CommissionError> {
        let (base_amount, base_rate) = self.base(input)?;
        let preferred_bonus = self.preferred_bonus(input);
        let (tier_bonus, applied_tier_rule) = self.tier_bonus(input);

        // No intermediate rounding: totals stay exact until reporting.
        let total_amount = base_amount
            .checked_add(&preferred_bonus)?
            .checked_add(&tier_bonus)?;

        Ok(CalculationResult {
            base_amount,
            base_rate,
            preferred_bonus,
            tier_bonus,
            total_amount,
            applied_tier_rule,
        })
    }

    fn base(&self, input: &CalculationInput) -> Result<(Money, Option<Rate>), CommissionError> {
        match input.commission_type {
            CommissionType::Percentage => {
                let rate = input.base_rate.ok_or_else(|| {
                    CommissionError::InvalidAgreement(
                        "PERCENTAGE agreement must have baseRate".to_string(),
                    )
                })?;
                Ok((rate.apply(&input.booking_amount), Some(rate)))
            }
            CommissionType::FlatFee => {
                let amount = input.flat_amount.ok_or_else(|| {
                    CommissionError::InvalidAgreement(
                        "FLAT_FEE agreement must have flatAmount".to_string(),
                    )
                })?;
                // Independent of the booking amount.
                Ok((amount, None))
            }
        }
    }

    fn preferred_bonus(&self, input: &CalculationInput) -> Money {
        match (input.hotel_status, input.preferred_bonus) {
            (HotelStatus::Preferred, Some(rate)) => rate.apply(&input.booking_amount),
            _ => Money::zero(input.booking_amount.currency()),
        }
    }

    fn tier_bonus(&self, input: &CalculationInput) -> (Money, Option<AppliedTierRule>) {
        match select_tier(input.monthly_booking_count, &input.tier_rules) {
            Some(tier) => (
                tier.bonus_rate.apply(&input.booking_amount),
                Some(AppliedTierRule {
                    min_bookings: tier.min_bookings,
                    bonus_rate: tier.bonus_rate,
                }),
            ),
            None => (Money::zero(input.booking_amount.currency()), None),
        }
    }
}
