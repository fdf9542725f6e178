//! Reporting domain services

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::ReportingError;
use crate::export::export_csv;
use crate::month::ReportMonth;
use crate::ports::ReportingPort;
use crate::summary::{aggregate_month, MonthlySummary};

/// Produces monthly summaries and exports over a `ReportingPort`
pub struct ReportingService {
    port: Arc<dyn ReportingPort>,
}

impl ReportingService {
    /// Creates a service backed by the given port
    pub fn new(port: Arc<dyn ReportingPort>) -> Self {
        Self { port }
    }

    /// Aggregates the given month's calculations into a summary
    ///
    /// # Errors
    ///
    /// - `InvalidMonth` when the token is not a valid `"YYYY-MM"`
    /// - `Port` when the bulk lookup fails
    #[instrument(skip(self))]
    pub async fn monthly_summary(&self, month: &str) -> Result<MonthlySummary, ReportingError> {
        let month: ReportMonth = month.parse()?;
        let period = month.period();

        let records = self.port.calculations_in(period.start, period.end).await?;
        debug!(record_count = records.len(), %month, "Aggregating monthly calculations");

        Ok(aggregate_month(&records, month)?)
    }

    /// Renders the given month's summary as a CSV report
    pub async fn export_monthly_summary(&self, month: &str) -> Result<String, ReportingError> {
        let summary = self.monthly_summary(month).await?;
        Ok(export_csv(&summary))
    }
}
