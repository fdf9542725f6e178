//! Monthly commission aggregation
//!
//! Folds a month's worth of calculation records into per-hotel summaries
//! and grand totals. The fold is a commutative, associative exact-decimal
//! sum, so input order never affects the figures; hotel rows surface in
//! first-appearance order for deterministic output.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use core_kernel::{BookingId, CalculationId, Currency, HotelId, Money, MoneyError};
use serde::{Deserialize, Serialize};

use domain_commission::HotelStatus;

use crate::month::{ReportMonth, ReportPeriod};

/// One month-window calculation, denormalized with its hotel and booking
/// fields by the bulk lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub calculation_id: CalculationId,
    pub hotel_id: HotelId,
    pub hotel_name: String,
    pub hotel_status: HotelStatus,
    pub booking_id: BookingId,
    pub booking_amount: Money,
    pub total_amount: Money,
    pub calculated_at: DateTime<Utc>,
}

/// Line-item detail retained per calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationLine {
    pub booking_id: BookingId,
    pub booking_amount: Money,
    pub commission: Money,
    pub calculated_at: DateTime<Utc>,
}

/// Per-hotel roll-up for the month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSummary {
    pub hotel_id: HotelId,
    pub hotel_name: String,
    pub hotel_status: HotelStatus,
    pub total_commission: Money,
    pub booking_count: u32,
    pub calculations: Vec<CalculationLine>,
}

/// Overall totals for the month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub total_hotels: u32,
    pub total_bookings: u32,
    pub grand_total_commission: Money,
}

/// The monthly, per-hotel financial summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: ReportMonth,
    pub period: ReportPeriod,
    pub hotels: Vec<HotelSummary>,
    pub totals: SummaryTotals,
}

/// Per-aggregation accumulator, built once per call and discarded after
/// producing the immutable summary
struct MonthlyAccumulator {
    index: HashMap<HotelId, usize>,
    hotels: Vec<HotelSummary>,
}

impl MonthlyAccumulator {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            hotels: Vec::new(),
        }
    }

    fn fold(&mut self, record: &CalculationRecord) -> Result<(), MoneyError> {
        let slot = match self.index.get(&record.hotel_id) {
            Some(&slot) => slot,
            None => {
                let slot = self.hotels.len();
                self.hotels.push(HotelSummary {
                    hotel_id: record.hotel_id,
                    hotel_name: record.hotel_name.clone(),
                    hotel_status: record.hotel_status,
                    total_commission: Money::zero(record.total_amount.currency()),
                    booking_count: 0,
                    calculations: Vec::new(),
                });
                self.index.insert(record.hotel_id, slot);
                slot
            }
        };

        let summary = &mut self.hotels[slot];
        summary.total_commission = summary.total_commission.checked_add(&record.total_amount)?;
        summary.booking_count += 1;
        summary.calculations.push(CalculationLine {
            booking_id: record.booking_id,
            booking_amount: record.booking_amount,
            commission: record.total_amount,
            calculated_at: record.calculated_at,
        });
        Ok(())
    }

    fn finish(self, month: ReportMonth, total_bookings: u32) -> Result<MonthlySummary, MoneyError> {
        let currency = self
            .hotels
            .first()
            .map(|h| h.total_commission.currency())
            .unwrap_or(Currency::CHF);

        let mut grand_total = Money::zero(currency);
        for hotel in &self.hotels {
            grand_total = grand_total.checked_add(&hotel.total_commission)?;
        }

        let totals = SummaryTotals {
            total_hotels: self.hotels.len() as u32,
            total_bookings,
            grand_total_commission: grand_total,
        };

        Ok(MonthlySummary {
            month,
            period: month.period(),
            hotels: self.hotels,
            totals,
        })
    }
}

/// Aggregates a month's calculation records into a `MonthlySummary`
///
/// `records` is the externally-supplied set of all calculations whose
/// `calculated_at` falls within the month's window. The grand total over
/// per-hotel totals always equals the direct sum over the input records.
///
/// # Errors
///
/// Fails only on mixed-currency input, which indicates upstream data
/// corruption.
pub fn aggregate_month(
    records: &[CalculationRecord],
    month: ReportMonth,
) -> Result<MonthlySummary, MoneyError> {
    let mut accumulator = MonthlyAccumulator::new();
    for record in records {
        accumulator.fold(record)?;
    }
    accumulator.finish(month, records.len() as u32)
}
