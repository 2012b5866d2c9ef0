//! Unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, lakh conversion,
//! currency handling, and edge cases.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::INR);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::INR);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::INR);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_inr_shorthand() {
        let m = Money::inr(dec!(750_000));
        assert_eq!(m.currency(), Currency::INR);
        assert_eq!(m.amount(), dec!(750_000));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::INR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::INR);
    }
}

mod lakhs {
    use super::*;

    #[test]
    fn test_to_lakhs_rounds_to_one_decimal() {
        assert_eq!(Money::inr(dec!(1_000_000)).to_lakhs(), dec!(10.0));
        assert_eq!(Money::inr(dec!(550_000)).to_lakhs(), dec!(5.5));
        assert_eq!(Money::inr(dec!(123_456)).to_lakhs(), dec!(1.2));
    }

    #[test]
    fn test_from_lakhs_expands_amount() {
        assert_eq!(Money::from_lakhs(dec!(2.5)).amount(), dec!(250_000));
    }

    #[test]
    fn test_zero_is_zero_lakhs() {
        assert_eq!(Money::zero(Currency::INR).to_lakhs(), dec!(0));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::inr(dec!(100));
        let b = Money::inr(dec!(25.50));
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(125.50));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::inr(dec!(100));
        let b = Money::new(dec!(100), Currency::USD);
        assert!(matches!(
            a.checked_add(&b),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_multiply_by_scalar() {
        let premium = Money::inr(dec!(350));
        assert_eq!(premium.multiply(dec!(12)).amount(), dec!(4200));
    }

    #[test]
    fn test_ratio_to_for_cover_multiple() {
        let cover = Money::from_lakhs(dec!(50));
        let income = Money::from_lakhs(dec!(10));
        assert_eq!(cover.ratio_to(&income).unwrap(), dec!(5));
    }

    #[test]
    fn test_ratio_to_zero_income_fails() {
        let cover = Money::from_lakhs(dec!(50));
        let income = Money::zero(Currency::INR);
        assert_eq!(cover.ratio_to(&income), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_negation() {
        let m = -Money::inr(dec!(10));
        assert_eq!(m.amount(), dec!(-10));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_inr_display_uses_rupee_symbol() {
        assert_eq!(Money::inr(dec!(1500)).to_string(), "₹1500.00");
    }

    #[test]
    fn test_round_to_currency() {
        let m = Money::new(dec!(99.999), Currency::INR).round_to_currency();
        assert_eq!(m.amount(), dec!(100.00));
    }
}
