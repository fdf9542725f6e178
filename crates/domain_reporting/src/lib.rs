//! Reporting Domain - Monthly Aggregation and Export
//!
//! This crate folds a calendar month's commission calculations into a
//! per-hotel financial summary and renders it as a flat CSV report:
//!
//! - **Month windows**: `"YYYY-MM"` tokens resolved to a window spanning
//!   the first instant of the month through the end of its last day
//! - **Aggregation**: exact-decimal per-hotel totals and grand totals, with
//!   the reconciliation invariant that the grand total equals the direct
//!   sum over the input records
//! - **Export**: a positionally-parsed CSV with a fixed header and a
//!   trailing TOTAL roll-up row

pub mod error;
pub mod export;
pub mod month;
pub mod ports;
pub mod services;
pub mod summary;

pub use error::ReportingError;
pub use export::export_csv;
pub use month::{ReportMonth, ReportPeriod};
pub use ports::ReportingPort;
pub use services::ReportingService;
pub use summary::{
    aggregate_month, CalculationLine, CalculationRecord, HotelSummary, MonthlySummary,
    SummaryTotals,
};
