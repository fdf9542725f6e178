//! Unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, rounding,
//! currency handling, and edge cases.

use core_kernel::{Currency, Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(1250.50), Currency::CHF);
        assert_eq!(m.amount(), dec!(1250.50));
        assert_eq!(m.currency(), Currency::CHF);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::CHF);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_converts_rappen_correctly() {
        let m = Money::from_minor(10050, Currency::CHF);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_positive_excludes_zero() {
        assert!(Money::new(dec!(0.01), Currency::CHF).is_positive());
        assert!(!Money::zero(Currency::CHF).is_positive());
    }

    #[test]
    fn test_is_negative() {
        assert!(Money::new(dec!(-5), Currency::CHF).is_negative());
        assert!(!Money::new(dec!(5), Currency::CHF).is_negative());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_addition_and_subtraction() {
        let a = Money::new(dec!(80.00), Currency::CHF);
        let b = Money::new(dec!(20.00), Currency::CHF);

        assert_eq!((a + b).amount(), dec!(100.00));
        assert_eq!((a - b).amount(), dec!(60.00));
    }

    #[test]
    fn test_checked_add_rejects_currency_mismatch() {
        let chf = Money::new(dec!(100.00), Currency::CHF);
        let gbp = Money::new(dec!(100.00), Currency::GBP);

        assert!(matches!(
            chf.checked_add(&gbp),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
        assert!(matches!(
            chf.checked_sub(&gbp),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_multiply_by_scalar() {
        let m = Money::new(dec!(1000.00), Currency::CHF);
        assert_eq!(m.multiply(dec!(0.08)).amount(), dec!(80.00));
        assert_eq!((m * dec!(0.005)).amount(), dec!(5.00));
    }

    #[test]
    fn test_divide_by_scalar() {
        let m = Money::new(dec!(250.00), Currency::CHF);
        assert_eq!(m.divide(dec!(2)).unwrap().amount(), dec!(125.00));
    }

    #[test]
    fn test_divide_by_zero_fails() {
        let m = Money::new(dec!(250.00), Currency::CHF);
        assert_eq!(m.divide(Decimal::ZERO), Err(MoneyError::DivisionByZero));
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_currency_uses_two_places() {
        let m = Money::new(dec!(25.8331), Currency::CHF);
        assert_eq!(m.round_to_currency().amount(), dec!(25.83));
    }

    #[test]
    fn test_round_half_up_at_midpoint() {
        let m = Money::new(dec!(0.005), Currency::CHF);
        assert_eq!(m.round_half_up(2).amount(), dec!(0.01));
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(dec!(8));
        assert_eq!(rate.as_decimal(), dec!(0.08));
        assert_eq!(rate.as_percentage(), dec!(8));
    }

    #[test]
    fn test_rate_apply() {
        let rate = Rate::new(dec!(0.02));
        let amount = Money::new(dec!(1000.00), Currency::CHF);
        assert_eq!(rate.apply(&amount).amount(), dec!(20.00));
    }
}

mod display_and_serde {
    use super::*;

    #[test]
    fn test_money_display() {
        let m = Money::new(dec!(1250.5), Currency::CHF);
        assert_eq!(m.to_string(), "CHF 1250.50");
    }

    #[test]
    fn test_currency_serde_uses_iso_codes() {
        let json = serde_json::to_string(&Currency::CHF).unwrap();
        assert_eq!(json, "\"CHF\"");
    }

    #[test]
    fn test_money_serde_round_trip() {
        let m = Money::new(dec!(85.1234), Currency::CHF);
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
