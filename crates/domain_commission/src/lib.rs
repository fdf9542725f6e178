//! Commission Domain - Agreement Resolution and Tiered Calculation
//!
//! This crate computes per-booking sales commissions for hotel partners
//! under time-varying contractual terms:
//!
//! - **Agreement resolution**: which agreement governs a booking as of its
//!   booking date, with a latest-start tie-break for anomalous overlaps
//! - **Tier selection**: the highest volume tier a hotel's trailing monthly
//!   booking count qualifies for (non-cumulative, best tier wins)
//! - **Calculation**: a pure function from booking amount, agreement terms,
//!   hotel status, and monthly volume to an exact-decimal commission
//!   breakdown
//! - **Orchestration**: `CommissionService` enforces business preconditions
//!   and persists results through the `CommissionPort` collaborator contract
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_commission::{CalculationInput, CommissionCalculator};
//!
//! let calculator = CommissionCalculator::new();
//! let result = calculator.calculate(&input)?;
//! assert_eq!(result.total_amount, expected_commission);
//! ```

pub mod agreement;
pub mod booking;
pub mod calculation;
pub mod calculator;
pub mod error;
pub mod hotel;
pub mod ports;
pub mod resolver;
pub mod services;
pub mod tier;

pub use agreement::{AgreementBook, CommissionAgreement, CommissionType};
pub use booking::{Booking, BookingStatus};
pub use calculation::CommissionCalculation;
pub use calculator::{AppliedTierRule, CalculationInput, CalculationResult, CommissionCalculator};
pub use error::CommissionError;
pub use hotel::{Hotel, HotelStatus};
pub use ports::CommissionPort;
pub use resolver::resolve_agreement;
pub use services::CommissionService;
pub use tier::{select_tier, TierRule};
