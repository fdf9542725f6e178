//! Reporting domain errors

use core_kernel::{MoneyError, PortError};
use thiserror::Error;

/// Errors that can occur in the reporting domain
#[derive(Debug, Error)]
pub enum ReportingError {
    /// Malformed month token
    #[error("Invalid month format. Use YYYY-MM: {0}")]
    InvalidMonth(String),

    /// Monetary arithmetic failure (e.g. mixed currencies in one report)
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Collaborator failure
    #[error(transparent)]
    Port(#[from] PortError),
}
