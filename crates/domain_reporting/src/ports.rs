//! Reporting Domain Ports
//!
//! Monthly aggregation consumes calculations in bulk; the `ReportingPort`
//! trait defines that lookup without fixing an implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use core_kernel::{DomainPort, PortError};

use crate::summary::CalculationRecord;

/// Data-source contract for the reporting domain
#[async_trait]
pub trait ReportingPort: DomainPort {
    /// Fetches every calculation whose `calculated_at` falls within
    /// `[from, until]` (inclusive on both ends), denormalized with hotel
    /// and booking fields
    async fn calculations_in(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<CalculationRecord>, PortError>;
}
