//! In-memory port adapter
//!
//! Implements both domain port traits over plain hash maps, letting service
//! tests run the full orchestration without external dependencies.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use core_kernel::{BookingId, DomainPort, HotelId, PortError};
use domain_commission::{
    Booking, BookingStatus, CommissionAgreement, CommissionCalculation, CommissionPort, Hotel,
};
use domain_reporting::{CalculationRecord, ReportingPort};

/// In-memory store implementing `CommissionPort` and `ReportingPort`
#[derive(Default)]
pub struct InMemoryDirectory {
    hotels: RwLock<HashMap<HotelId, Hotel>>,
    bookings: RwLock<HashMap<BookingId, Booking>>,
    agreements: RwLock<Vec<CommissionAgreement>>,
    calculations: RwLock<Vec<CommissionCalculation>>,
}

impl InMemoryDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a hotel
    pub fn insert_hotel(&self, hotel: Hotel) {
        self.hotels.write().expect("lock").insert(hotel.id, hotel);
    }

    /// Seeds a booking
    pub fn insert_booking(&self, booking: Booking) {
        self.bookings
            .write()
            .expect("lock")
            .insert(booking.id, booking);
    }

    /// Seeds an agreement
    pub fn insert_agreement(&self, agreement: CommissionAgreement) {
        self.agreements.write().expect("lock").push(agreement);
    }

    /// Seeds a stored calculation
    pub fn insert_calculation(&self, calculation: CommissionCalculation) {
        self.calculations.write().expect("lock").push(calculation);
    }

    /// Returns the number of stored calculations
    pub fn calculation_count(&self) -> usize {
        self.calculations.read().expect("lock").len()
    }
}

impl DomainPort for InMemoryDirectory {}

#[async_trait]
impl CommissionPort for InMemoryDirectory {
    async fn booking(&self, id: BookingId) -> Result<Booking, PortError> {
        self.bookings
            .read()
            .expect("lock")
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Booking", id))
    }

    async fn hotel(&self, id: HotelId) -> Result<Hotel, PortError> {
        self.hotels
            .read()
            .expect("lock")
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Hotel", id))
    }

    async fn agreements_for_hotel(
        &self,
        hotel_id: HotelId,
    ) -> Result<Vec<CommissionAgreement>, PortError> {
        Ok(self
            .agreements
            .read()
            .expect("lock")
            .iter()
            .filter(|a| a.hotel_id == hotel_id)
            .cloned()
            .collect())
    }

    async fn completed_booking_count(
        &self,
        hotel_id: HotelId,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<u32, PortError> {
        let count = self
            .bookings
            .read()
            .expect("lock")
            .values()
            .filter(|b| b.hotel_id == hotel_id && b.status == BookingStatus::Completed)
            .filter_map(|b| b.completed_at)
            .filter(|c| *c >= from && *c < until)
            .count();
        Ok(count as u32)
    }

    async fn calculation_for_booking(
        &self,
        booking_id: BookingId,
    ) -> Result<Option<CommissionCalculation>, PortError> {
        Ok(self
            .calculations
            .read()
            .expect("lock")
            .iter()
            .find(|c| c.booking_id == booking_id)
            .cloned())
    }

    async fn save_calculation(
        &self,
        calculation: CommissionCalculation,
    ) -> Result<CommissionCalculation, PortError> {
        let mut calculations = self.calculations.write().expect("lock");
        if calculations
            .iter()
            .any(|c| c.booking_id == calculation.booking_id)
        {
            return Err(PortError::conflict(format!(
                "calculation already exists for booking {}",
                calculation.booking_id
            )));
        }
        calculations.push(calculation.clone());
        Ok(calculation)
    }
}

#[async_trait]
impl ReportingPort for InMemoryDirectory {
    async fn calculations_in(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<CalculationRecord>, PortError> {
        let hotels = self.hotels.read().expect("lock");
        let bookings = self.bookings.read().expect("lock");

        let mut in_window: Vec<CommissionCalculation> = self
            .calculations
            .read()
            .expect("lock")
            .iter()
            .filter(|c| c.calculated_at >= from && c.calculated_at <= until)
            .cloned()
            .collect();
        in_window.sort_by_key(|c| c.calculated_at);

        in_window
            .into_iter()
            .map(|calc| {
                let hotel = hotels
                    .get(&calc.hotel_id)
                    .ok_or_else(|| PortError::not_found("Hotel", calc.hotel_id))?;
                let booking = bookings
                    .get(&calc.booking_id)
                    .ok_or_else(|| PortError::not_found("Booking", calc.booking_id))?;
                Ok(CalculationRecord {
                    calculation_id: calc.id,
                    hotel_id: hotel.id,
                    hotel_name: hotel.name.clone(),
                    hotel_status: hotel.status,
                    booking_id: booking.id,
                    booking_amount: booking.amount,
                    total_amount: calc.total_amount,
                    calculated_at: calc.calculated_at,
                })
            })
            .collect()
    }
}
