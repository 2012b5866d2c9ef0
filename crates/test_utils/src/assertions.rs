//! Custom Test Assertions
//!
//! Specialized assertion helpers for scoring types that give more meaningful
//! error messages than standard assertions.

use domain_underwriting::{RiskBand, ScoringResult, MAX_POSSIBLE_SCORE};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Asserts that every category in a scoring result sits within its bounds
/// and that the total and percentage are internally consistent
///
/// # Panics
///
/// Panics with a description of the offending category or figure.
pub fn assert_scoring_invariants(result: &ScoringResult) {
    let mut sum = Decimal::ZERO;
    for (name, category) in result.categories() {
        assert!(
            category.score >= Decimal::ZERO && category.score <= category.max,
            "category {} out of bounds: {} (max {})",
            name,
            category.score,
            category.max
        );
        sum += category.score;
    }
    assert_eq!(
        sum, result.total_score,
        "total {} does not equal category sum {}",
        result.total_score, sum
    );
    assert!(
        result.total_score <= MAX_POSSIBLE_SCORE,
        "total {} exceeds the fixed maximum",
        result.total_score
    );
    let expected = (result.total_score / MAX_POSSIBLE_SCORE * dec!(100)).round_dp(1);
    assert_eq!(
        result.risk_percentage, expected,
        "percentage {} does not match formula result {}",
        result.risk_percentage, expected
    );
}

/// Asserts that a percentage classifies into the expected band
pub fn assert_band(percentage: Decimal, expected: RiskBand) {
    let actual = domain_underwriting::ClassificationTable::default()
        .classify(percentage)
        .band;
    assert_eq!(
        actual, expected,
        "{percentage}% classified as {actual:?}, expected {expected:?}"
    );
}
