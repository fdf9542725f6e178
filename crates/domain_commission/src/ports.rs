//! Commission Domain Ports
//!
//! The commission service needs bookings, hotels, agreements, and prior
//! calculations from its collaborators; the `CommissionPort` trait defines
//! those contracts without fixing an implementation. Production wires in a
//! database adapter; tests use the in-memory adapter from `test_utils`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use core_kernel::{BookingId, DomainPort, HotelId, PortError};

use crate::agreement::CommissionAgreement;
use crate::booking::Booking;
use crate::calculation::CommissionCalculation;
use crate::hotel::Hotel;

/// Data-source contract for the commission domain
#[async_trait]
pub trait CommissionPort: DomainPort {
    /// Fetches a booking by id
    async fn booking(&self, id: BookingId) -> Result<Booking, PortError>;

    /// Fetches a hotel by id
    async fn hotel(&self, id: HotelId) -> Result<Hotel, PortError>;

    /// Fetches every agreement the hotel has ever had, superseded ones
    /// included; temporal resolution happens in the domain
    async fn agreements_for_hotel(
        &self,
        hotel_id: HotelId,
    ) -> Result<Vec<CommissionAgreement>, PortError>;

    /// Counts the hotel's COMPLETED bookings with `completed_at` in the
    /// half-open window `[from, until)`
    ///
    /// The exclusive upper bound is what keeps a booking from counting
    /// toward its own tier qualification.
    async fn completed_booking_count(
        &self,
        hotel_id: HotelId,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<u32, PortError>;

    /// Returns the calculation already stored for a booking, if any
    async fn calculation_for_booking(
        &self,
        booking_id: BookingId,
    ) -> Result<Option<CommissionCalculation>, PortError>;

    /// Persists a calculation and returns the stored record
    async fn save_calculation(
        &self,
        calculation: CommissionCalculation,
    ) -> Result<CommissionCalculation, PortError>;
}
