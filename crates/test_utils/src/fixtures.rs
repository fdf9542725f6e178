//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the commission
//! engine. These fixtures are designed to be consistent and predictable for
//! unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{Currency, Money, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical booking amount
    pub fn chf_1000() -> Money {
        Money::new(dec!(1000.00), Currency::CHF)
    }

    /// A small booking amount
    pub fn chf_500() -> Money {
        Money::new(dec!(500.00), Currency::CHF)
    }

    /// A typical flat commission fee
    pub fn chf_flat_150() -> Money {
        Money::new(dec!(150.00), Currency::CHF)
    }

    /// A zero amount
    pub fn chf_zero() -> Money {
        Money::zero(Currency::CHF)
    }

    /// An arbitrary CHF amount
    pub fn chf(amount: Decimal) -> Money {
        Money::new(amount, Currency::CHF)
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for rate test data
pub struct RateFixtures;

impl RateFixtures {
    /// The standard contractual base rate (8%)
    pub fn base_8pct() -> Rate {
        Rate::new(dec!(0.08))
    }

    /// A preferred-hotel bonus rate (2%)
    pub fn preferred_2pct() -> Rate {
        Rate::new(dec!(0.02))
    }

    /// A volume tier bonus rate (0.5%)
    pub fn tier_half_pct() -> Rate {
        Rate::new(dec!(0.005))
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard agreement start (Jan 1, 2024)
    pub fn agreement_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// A day in the standard reporting month (March 2024)
    pub fn march_day(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    /// Standard booking date (March 10, 2024)
    pub fn booking_date() -> DateTime<Utc> {
        Self::march_day(10)
    }

    /// Standard completion instant (March 15, 2024)
    pub fn completion_date() -> DateTime<Utc> {
        Self::march_day(15)
    }
}
