//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use chrono::{DateTime, Utc};
use core_kernel::{BookingId, CalculationId, HotelId, Money, Rate};
use rust_decimal_macros::dec;

use domain_commission::{
    Booking, BookingStatus, CommissionAgreement, Hotel, HotelStatus,
};
use domain_reporting::CalculationRecord;

use crate::fixtures::{MoneyFixtures, RateFixtures, TemporalFixtures};

/// Builder for commission agreements
///
/// Defaults to a percentage agreement at 8%, open-ended from Jan 1, 2024.
pub struct AgreementBuilder {
    hotel_id: HotelId,
    base_rate: Option<Rate>,
    flat_amount: Option<Money>,
    preferred_bonus: Option<Rate>,
    valid_from: DateTime<Utc>,
    valid_to: Option<DateTime<Utc>>,
    is_active: bool,
    tier_rules: Vec<(u32, Rate)>,
}

impl Default for AgreementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgreementBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            hotel_id: HotelId::new(),
            base_rate: Some(RateFixtures::base_8pct()),
            flat_amount: None,
            preferred_bonus: None,
            valid_from: TemporalFixtures::agreement_start(),
            valid_to: None,
            is_active: true,
            tier_rules: Vec::new(),
        }
    }

    /// Sets the hotel
    pub fn for_hotel(mut self, hotel_id: HotelId) -> Self {
        self.hotel_id = hotel_id;
        self
    }

    /// Makes this a percentage agreement with the given base rate
    pub fn percentage(mut self, base_rate: Rate) -> Self {
        self.base_rate = Some(base_rate);
        self.flat_amount = None;
        self
    }

    /// Makes this a flat-fee agreement with the given amount
    pub fn flat_fee(mut self, flat_amount: Money) -> Self {
        self.flat_amount = Some(flat_amount);
        self.base_rate = None;
        self
    }

    /// Sets the preferred-hotel bonus rate
    pub fn with_preferred_bonus(mut self, rate: Rate) -> Self {
        self.preferred_bonus = Some(rate);
        self
    }

    /// Sets the validity start
    pub fn valid_from(mut self, from: DateTime<Utc>) -> Self {
        self.valid_from = from;
        self
    }

    /// Bounds the validity interval (exclusive end)
    pub fn valid_to(mut self, to: DateTime<Utc>) -> Self {
        self.valid_to = Some(to);
        self
    }

    /// Marks the agreement as superseded
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Adds a volume tier rule
    pub fn with_tier(mut self, min_bookings: u32, bonus_rate: Rate) -> Self {
        self.tier_rules.push((min_bookings, bonus_rate));
        self
    }

    /// Builds the agreement
    pub fn build(self) -> CommissionAgreement {
        let mut agreement = match self.flat_amount {
            Some(flat) => CommissionAgreement::flat_fee(self.hotel_id, flat, self.valid_from),
            None => CommissionAgreement::percentage(
                self.hotel_id,
                self.base_rate.expect("builder defaults to a percentage rate"),
                self.valid_from,
            ),
        };

        agreement.validity.end = self.valid_to;
        agreement.is_active = self.is_active;
        agreement.preferred_bonus = self.preferred_bonus;
        for (min_bookings, bonus_rate) in self.tier_rules {
            agreement = agreement.with_tier_rule(min_bookings, bonus_rate);
        }
        agreement
    }
}

/// Builder for bookings
///
/// Defaults to a completed CHF 1000 booking dated March 10, 2024, completed
/// March 15, 2024.
pub struct BookingBuilder {
    hotel_id: HotelId,
    amount: Money,
    booking_date: DateTime<Utc>,
    status: BookingStatus,
    completed_at: Option<DateTime<Utc>>,
}

impl Default for BookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            hotel_id: HotelId::new(),
            amount: MoneyFixtures::chf_1000(),
            booking_date: TemporalFixtures::booking_date(),
            status: BookingStatus::Completed,
            completed_at: Some(TemporalFixtures::completion_date()),
        }
    }

    /// Sets the hotel
    pub fn for_hotel(mut self, hotel_id: HotelId) -> Self {
        self.hotel_id = hotel_id;
        self
    }

    /// Sets the booking amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the booking date
    pub fn booked_on(mut self, date: DateTime<Utc>) -> Self {
        self.booking_date = date;
        self
    }

    /// Sets the completion instant
    pub fn completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.status = BookingStatus::Completed;
        self.completed_at = Some(at);
        self
    }

    /// Leaves the booking pending
    pub fn pending(mut self) -> Self {
        self.status = BookingStatus::Pending;
        self.completed_at = None;
        self
    }

    /// Cancels the booking
    pub fn cancelled(mut self) -> Self {
        self.status = BookingStatus::Cancelled;
        self.completed_at = None;
        self
    }

    /// Builds the booking
    pub fn build(self) -> Booking {
        let mut booking = Booking::new(self.hotel_id, self.amount, self.booking_date);
        booking.status = self.status;
        booking.completed_at = self.completed_at;
        booking
    }
}

/// Builder for denormalized calculation records used in reporting tests
pub struct CalculationRecordBuilder {
    hotel_id: HotelId,
    hotel_name: String,
    hotel_status: HotelStatus,
    booking_amount: Money,
    total_amount: Money,
    calculated_at: DateTime<Utc>,
}

impl Default for CalculationRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculationRecordBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            hotel_id: HotelId::new(),
            hotel_name: "Test Hotel".to_string(),
            hotel_status: HotelStatus::Standard,
            booking_amount: MoneyFixtures::chf_1000(),
            total_amount: MoneyFixtures::chf(dec!(80.00)),
            calculated_at: TemporalFixtures::march_day(20),
        }
    }

    /// Sets the hotel identity fields
    pub fn for_hotel(mut self, hotel: &Hotel) -> Self {
        self.hotel_id = hotel.id;
        self.hotel_name = hotel.name.clone();
        self.hotel_status = hotel.status;
        self
    }

    /// Sets the hotel id directly
    pub fn with_hotel_id(mut self, hotel_id: HotelId) -> Self {
        self.hotel_id = hotel_id;
        self
    }

    /// Sets the hotel name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.hotel_name = name.into();
        self
    }

    /// Sets the hotel status
    pub fn with_status(mut self, status: HotelStatus) -> Self {
        self.hotel_status = status;
        self
    }

    /// Sets the booking amount
    pub fn with_booking_amount(mut self, amount: Money) -> Self {
        self.booking_amount = amount;
        self
    }

    /// Sets the commission total
    pub fn with_commission(mut self, amount: Money) -> Self {
        self.total_amount = amount;
        self
    }

    /// Sets the calculation timestamp
    pub fn calculated_at(mut self, at: DateTime<Utc>) -> Self {
        self.calculated_at = at;
        self
    }

    /// Builds the record
    pub fn build(self) -> CalculationRecord {
        CalculationRecord {
            calculation_id: CalculationId::new(),
            hotel_id: self.hotel_id,
            hotel_name: self.hotel_name,
            hotel_status: self.hotel_status,
            booking_id: BookingId::new(),
            booking_amount: self.booking_amount,
            total_amount: self.total_amount,
            calculated_at: self.calculated_at,
        }
    }
}
