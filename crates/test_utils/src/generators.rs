//! Property-Based Test Generators
//!
//! Proptest strategies for generating random profiles that stay within the
//! value ranges the form can actually produce.

use domain_underwriting::{
    ClientProfile, Dependent, DependencyLevel, DependentInfo, FinancialInfo,
    InsuranceHistory, LifestyleInfo, LocationTier, MedicalInfo, PersonalInfo,
    PreferenceInfo,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Strategy for location tiers
pub fn location_tier_strategy() -> impl Strategy<Value = LocationTier> {
    prop_oneof![
        Just(LocationTier::Metro),
        Just(LocationTier::TierTwo),
        Just(LocationTier::Rural),
    ]
}

/// Strategy for dependency levels
pub fn dependency_level_strategy() -> impl Strategy<Value = DependencyLevel> {
    prop_oneof![
        Just(DependencyLevel::Full),
        Just(DependencyLevel::Partial),
        Just(DependencyLevel::Minimal),
    ]
}

/// Strategy for one-decimal-place values in the given tenth-steps range
pub fn tenths_strategy(range: std::ops::Range<u32>) -> impl Strategy<Value = Decimal> {
    range.prop_map(|n| Decimal::from(n) / dec!(10))
}

/// Strategy for a dependent entry
pub fn dependent_strategy() -> impl Strategy<Value = Dependent> {
    (
        proptest::option::of(0u32..100),
        proptest::option::of(dependency_level_strategy()),
    )
        .prop_map(|(age, dependency_level)| Dependent {
            age,
            dependency_level,
        })
}

/// Strategy for arbitrary client profiles
///
/// Every factor field is independently present or absent, so the generated
/// corpus exercises both the scoring bands and the missing-value defaults.
pub fn profile_strategy() -> impl Strategy<Value = ClientProfile> {
    let personal = (
        proptest::option::of(0u32..100),
        proptest::option::of("[a-zA-Z]{3,12}"),
        proptest::option::of(location_tier_strategy()),
    )
        .prop_map(|(age, marital_status, location_tier)| PersonalInfo {
            age,
            marital_status,
            location_tier,
            ..Default::default()
        });

    let lifestyle = (
        proptest::option::of("[a-z ]{0,20}"),
        proptest::option::of(0u32..30_000),
        proptest::option::of(tenths_strategy(0..120)),
        proptest::option::of(tenths_strategy(100..500)),
        proptest::option::of(any::<bool>()),
        proptest::option::of("[a-z]{3,12}"),
    )
        .prop_map(
            |(occupation, daily_steps, sleep_hours, bmi, is_smoker, alcohol)| LifestyleInfo {
                occupation,
                daily_steps,
                sleep_hours,
                bmi,
                is_smoker,
                alcohol_consumption: alcohol,
                ..Default::default()
            },
        );

    let financial = (
        proptest::option::of("[a-z]{3,12}"),
        proptest::option::of(tenths_strategy(0..500)),
        proptest::option::of(tenths_strategy(0..1000)),
        proptest::option::of(tenths_strategy(0..1000)),
    )
        .prop_map(
            |(employment_status, income, disposable, emi)| FinancialInfo {
                employment_status,
                annual_income_lakhs: income,
                disposable_income_percent: disposable,
                emi_load_percent: emi,
            },
        );

    let medical = (
        proptest::collection::vec("[a-z]{3,10}", 0..4),
        proptest::option::of(0u32..120),
        proptest::collection::vec("[a-z]{3,10}", 0..4),
    )
        .prop_map(
            |(pre_existing_conditions, months_since_checkup, allergies)| MedicalInfo {
                pre_existing_conditions,
                months_since_checkup,
                allergies,
            },
        );

    let preferences = (
        proptest::option::of("[a-z]{3,10}"),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of("[a-z]{3,12}"),
    )
        .prop_map(
            |(budget, riders, deductible, tolerance)| PreferenceInfo {
                budget_flexibility: budget,
                riders_willingness: riders,
                deductible_flexibility: deductible,
                risk_tolerance: tolerance,
            },
        );

    let dependents = proptest::collection::vec(dependent_strategy(), 0..8).prop_map(|deps| {
        DependentInfo {
            count: deps.len() as u32,
            dependents: deps,
        }
    });

    let insurance = (
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(0u32..6),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(life, health, claims, lapse)| InsuranceHistory {
            has_life_insurance: life,
            has_health_insurance: health,
            claim_count_last_5yrs: claims,
            has_lapsed_policy: lapse,
        });

    (
        personal, lifestyle, financial, medical, preferences, dependents, insurance,
    )
        .prop_map(
            |(personal, lifestyle, financial, medical, preferences, dependents, insurance_history)| {
                ClientProfile {
                    personal,
                    lifestyle,
                    financial,
                    medical,
                    preferences,
                    dependents,
                    insurance_history,
                    ..Default::default()
                }
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertions::assert_scoring_invariants;
    use domain_underwriting::RiskScoringEngine;

    proptest! {
        #[test]
        fn prop_generated_profiles_satisfy_invariants(profile in profile_strategy()) {
            assert_scoring_invariants(&RiskScoringEngine::score(&profile));
        }
    }
}
