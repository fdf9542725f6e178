//! Temporal agreement resolution
//!
//! Given all agreements a hotel has ever had, picks the one governing a
//! booking as of its booking date. Agreement volume per hotel is a handful
//! of amendments, so a linear scan is sufficient.

use chrono::{DateTime, Utc};

use crate::agreement::CommissionAgreement;

/// Selects the agreement whose validity interval contains `reference`
///
/// When nominally overlapping matches exist (a data-integrity anomaly in the
/// store), the most recently started agreement wins. Returns `None` when no
/// interval covers the date; callers treat that as a hard stop, not a
/// default.
pub fn resolve_agreement(
    agreements: &[CommissionAgreement],
    reference: DateTime<Utc>,
) -> Option<&CommissionAgreement> {
    agreements
        .iter()
        .filter(|a| a.covers(reference))
        .max_by_key(|a| a.validity.start)
}
