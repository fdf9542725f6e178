//! Flat-file (CSV) rendering of monthly summaries
//!
//! Downstream finance tooling parses these rows positionally, so the header,
//! the quoting of hotel names, and the fixed two-decimal numerics are part
//! of the contract, not presentation choices.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::summary::MonthlySummary;

const HEADER: &str =
    "Hotel Name,Hotel Status,Total Bookings,Total Commission (CHF),Avg Commission (CHF)";

/// Renders a monthly summary as a CSV report
///
/// One row per hotel in summary order, then a trailing TOTAL roll-up row
/// with an empty status field and an empty average field.
pub fn export_csv(summary: &MonthlySummary) -> String {
    let mut lines = Vec::with_capacity(summary.hotels.len() + 2);
    lines.push(HEADER.to_string());

    for hotel in &summary.hotels {
        let average = if hotel.booking_count > 0 {
            format_amount(
                hotel.total_commission.amount() / Decimal::from(hotel.booking_count),
            )
        } else {
            "0.00".to_string()
        };

        lines.push(format!(
            "\"{}\",{},{},{},{}",
            hotel.hotel_name,
            hotel.hotel_status,
            hotel.booking_count,
            format_amount(hotel.total_commission.amount()),
            average,
        ));
    }

    lines.push(format!(
        "TOTAL,,{},{},",
        summary.totals.total_bookings,
        format_amount(summary.totals.grand_total_commission.amount()),
    ));

    lines.join("\n")
}

/// Fixed two-decimal rendering, rounding half away from zero
fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
