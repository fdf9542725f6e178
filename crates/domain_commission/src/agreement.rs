//! Commission agreements
//!
//! An agreement captures the contractual terms in force for a hotel over a
//! half-open validity interval. At most one agreement per hotel is active at
//! a time; amending terms supersedes the incumbent (see `AgreementBook`).

use chrono::{DateTime, Utc};
use core_kernel::{AgreementId, HotelId, Money, Rate, ValidPeriod};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommissionError;
use crate::tier::TierRule;

/// How the base commission is derived from a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommissionType {
    /// Base commission is a fraction of the booking amount
    Percentage,
    /// Base commission is a fixed amount per booking
    FlatFee,
}

impl fmt::Display for CommissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommissionType::Percentage => write!(f, "PERCENTAGE"),
            CommissionType::FlatFee => write!(f, "FLAT_FEE"),
        }
    }
}

impl FromStr for CommissionType {
    type Err = CommissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PERCENTAGE" => Ok(CommissionType::Percentage),
            "FLAT_FEE" => Ok(CommissionType::FlatFee),
            other => Err(CommissionError::InvalidAgreement(format!(
                "Unknown commission type: {other}"
            ))),
        }
    }
}

/// The commission contract terms in force for a hotel over a time interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionAgreement {
    /// Unique identifier
    pub id: AgreementId,
    /// The hotel these terms apply to
    pub hotel_id: HotelId,
    /// How the base commission is derived
    pub commission_type: CommissionType,
    /// Required for PERCENTAGE agreements, a fraction 0-1
    pub base_rate: Option<Rate>,
    /// Required for FLAT_FEE agreements
    pub flat_amount: Option<Money>,
    /// Extra rate for PREFERRED hotels
    pub preferred_bonus: Option<Rate>,
    /// Half-open validity interval `[valid_from, valid_to)`
    pub validity: ValidPeriod,
    /// True while these are the hotel's current terms
    pub is_active: bool,
    /// Volume tier rules, unordered as stored
    pub tier_rules: Vec<TierRule>,
}

impl CommissionAgreement {
    /// Creates a percentage agreement, open-ended from `valid_from`
    pub fn percentage(hotel_id: HotelId, base_rate: Rate, valid_from: DateTime<Utc>) -> Self {
        Self {
            id: AgreementId::new_v7(),
            hotel_id,
            commission_type: CommissionType::Percentage,
            base_rate: Some(base_rate),
            flat_amount: None,
            preferred_bonus: None,
            validity: ValidPeriod::from(valid_from),
            is_active: true,
            tier_rules: Vec::new(),
        }
    }

    /// Creates a flat-fee agreement, open-ended from `valid_from`
    pub fn flat_fee(hotel_id: HotelId, flat_amount: Money, valid_from: DateTime<Utc>) -> Self {
        Self {
            id: AgreementId::new_v7(),
            hotel_id,
            commission_type: CommissionType::FlatFee,
            base_rate: None,
            flat_amount: Some(flat_amount),
            preferred_bonus: None,
            validity: ValidPeriod::from(valid_from),
            is_active: true,
            tier_rules: Vec::new(),
        }
    }

    /// Bounds the validity interval at `valid_to` (exclusive)
    pub fn with_valid_to(mut self, valid_to: DateTime<Utc>) -> Self {
        self.validity.end = Some(valid_to);
        self
    }

    /// Sets the preferred-hotel bonus rate
    pub fn with_preferred_bonus(mut self, rate: Rate) -> Self {
        self.preferred_bonus = Some(rate);
        self
    }

    /// Adds a volume tier rule
    pub fn with_tier_rule(mut self, min_bookings: u32, bonus_rate: Rate) -> Self {
        self.tier_rules.push(TierRule::new(min_bookings, bonus_rate));
        self
    }

    /// Returns true if this agreement's interval contains the given instant
    pub fn covers(&self, at: DateTime<Utc>) -> bool {
        self.validity.contains(at)
    }

    /// Supersedes these terms as of `at`
    ///
    /// Clears the active flag and closes the validity interval, so bookings
    /// dated from `at` onward resolve to the successor agreement. Agreements
    /// are superseded, never deleted.
    pub fn supersede_at(&mut self, at: DateTime<Utc>) {
        self.is_active = false;
        if at > self.validity.start {
            self.validity.end = Some(at);
        }
    }
}

/// The full set of agreements a hotel has ever had
///
/// Maintains the invariant that at most one agreement is active at a time:
/// an amendment that takes effect immediately supersedes the incumbent.
/// Future-dated amendments are stored inactive until their start date is
/// reached by date-based resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementBook {
    hotel_id: HotelId,
    agreements: Vec<CommissionAgreement>,
}

impl AgreementBook {
    /// Creates an empty book for a hotel
    pub fn new(hotel_id: HotelId) -> Self {
        Self {
            hotel_id,
            agreements: Vec::new(),
        }
    }

    /// Records an amendment to the hotel's terms
    ///
    /// If the new agreement starts at or before `now`, the currently active
    /// agreement (if any) is superseded and the new one becomes active.
    ///
    /// # Errors
    ///
    /// Returns an error if the agreement belongs to a different hotel.
    pub fn amend(
        &mut self,
        mut agreement: CommissionAgreement,
        now: DateTime<Utc>,
    ) -> Result<&CommissionAgreement, CommissionError> {
        if agreement.hotel_id != self.hotel_id {
            return Err(CommissionError::InvalidAgreement(format!(
                "agreement {} belongs to hotel {}, not {}",
                agreement.id, agreement.hotel_id, self.hotel_id
            )));
        }

        let starts_immediately = agreement.validity.start <= now;
        if starts_immediately {
            for incumbent in self.agreements.iter_mut().filter(|a| a.is_active) {
                incumbent.supersede_at(now);
            }
        }
        agreement.is_active = starts_immediately;

        self.agreements.push(agreement);
        Ok(self.agreements.last().expect("just pushed"))
    }

    /// Returns the currently active agreement, if any
    pub fn active(&self) -> Option<&CommissionAgreement> {
        self.agreements.iter().find(|a| a.is_active)
    }

    /// Returns all agreements, superseded ones included
    pub fn agreements(&self) -> &[CommissionAgreement] {
        &self.agreements
    }

    /// Returns the hotel this book belongs to
    pub fn hotel_id(&self) -> HotelId {
        self.hotel_id
    }
}
