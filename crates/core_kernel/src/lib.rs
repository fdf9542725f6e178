//! Core Kernel - Foundational types and utilities for the commission engine
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Temporal types for time-varying contractual terms
//! - Common identifiers and value objects
//! - Port infrastructure for external collaborators

pub mod error;
pub mod identifiers;
pub mod money;
pub mod ports;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{AgreementId, BookingId, CalculationId, HotelId, TierRuleId};
pub use money::{Currency, Money, MoneyError, Rate};
pub use ports::{DomainPort, PortError};
pub use temporal::{end_of_day, start_of_month, TemporalError, ValidPeriod};
