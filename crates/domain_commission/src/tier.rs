//! Volume tier rules and tier selection

use core_kernel::{Rate, TierRuleId};
use serde::{Deserialize, Serialize};

/// A volume tier on a commission agreement
///
/// Grants an additional bonus rate when the hotel's completed-booking count
/// for the month meets or exceeds the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRule {
    /// Unique identifier
    pub id: TierRuleId,
    /// Minimum completed bookings in the month to qualify
    pub min_bookings: u32,
    /// Bonus rate applied to the booking amount
    pub bonus_rate: Rate,
}

impl TierRule {
    /// Creates a new tier rule
    pub fn new(min_bookings: u32, bonus_rate: Rate) -> Self {
        Self {
            id: TierRuleId::new_v7(),
            min_bookings,
            bonus_rate,
        }
    }
}

/// Selects the applicable tier for a monthly booking count
///
/// Tiers are non-cumulative: among the rules whose threshold the count meets,
/// only the one with the highest `min_bookings` applies, regardless of the
/// order the rules were declared in. Returns `None` when no rule qualifies.
pub fn select_tier(monthly_count: u32, rules: &[TierRule]) -> Option<&TierRule> {
    rules
        .iter()
        .filter(|rule| rule.min_bookings <= monthly_count)
        .max_by_key(|rule| rule.min_bookings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_rule_set_selects_nothing() {
        assert!(select_tier(100, &[]).is_none());
    }

    #[test]
    fn test_below_all_thresholds_selects_nothing() {
        let rules = vec![TierRule::new(5, Rate::new(dec!(0.003)))];
        assert!(select_tier(4, &rules).is_none());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let rules = vec![TierRule::new(5, Rate::new(dec!(0.003)))];
        let selected = select_tier(5, &rules).unwrap();
        assert_eq!(selected.min_bookings, 5);
    }
}
