//! Comprehensive tests for the risk scoring engine
//!
//! Covers the end-to-end scoring of realistic profiles, default handling for
//! missing inputs, and property-based invariants over arbitrary profiles.

use domain_underwriting::{
    ClassificationTable, ClientProfile, CoverageInfo, Dependent, DependencyLevel,
    DependentInfo, FinancialInfo, InsuranceHistory, LifestyleInfo, LocationTier,
    MedicalInfo, PersonalInfo, PreferenceInfo, RiskBand, RiskScoringEngine,
    MAX_POSSIBLE_SCORE,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn high_risk_profile() -> ClientProfile {
    ClientProfile {
        personal: PersonalInfo {
            age: Some(55),
            ..Default::default()
        },
        lifestyle: LifestyleInfo {
            occupation: Some("Driver".to_string()),
            daily_steps: Some(2_000),
            bmi: Some(dec!(32)),
            is_smoker: Some(true),
            ..Default::default()
        },
        financial: FinancialInfo {
            annual_income_lakhs: Some(dec!(3)),
            emi_load_percent: Some(dec!(60)),
            ..Default::default()
        },
        medical: MedicalInfo {
            pre_existing_conditions: vec!["Diabetes".to_string()],
            ..Default::default()
        },
        dependents: DependentInfo {
            count: 5,
            dependents: vec![
                Dependent {
                    age: Some(65),
                    dependency_level: Some(DependencyLevel::Full),
                };
                5
            ],
        },
        ..Default::default()
    }
}

fn minimal_risk_profile() -> ClientProfile {
    ClientProfile {
        personal: PersonalInfo {
            age: Some(25),
            marital_status: Some("Married".to_string()),
            location_tier: Some(LocationTier::Rural),
            ..Default::default()
        },
        lifestyle: LifestyleInfo {
            occupation: Some("Software Engineer".to_string()),
            daily_steps: Some(12_000),
            sleep_hours: Some(dec!(7.5)),
            bmi: Some(dec!(22)),
            is_smoker: Some(false),
            ..Default::default()
        },
        financial: FinancialInfo {
            employment_status: Some("Salaried".to_string()),
            annual_income_lakhs: Some(dec!(15)),
            disposable_income_percent: Some(dec!(40)),
            emi_load_percent: Some(dec!(10)),
        },
        medical: MedicalInfo {
            months_since_checkup: Some(6),
            ..Default::default()
        },
        preferences: PreferenceInfo {
            budget_flexibility: Some("High".to_string()),
            riders_willingness: Some(true),
            deductible_flexibility: Some(true),
            risk_tolerance: Some("Conservative".to_string()),
        },
        insurance_history: InsuranceHistory {
            has_life_insurance: Some(true),
            has_health_insurance: Some(true),
            claim_count_last_5yrs: Some(0),
            has_lapsed_policy: Some(false),
        },
        coverage: CoverageInfo {
            life_coverage_multiple_of_income: Some(dec!(10)),
            health_coverage_lakhs: Some(dec!(5)),
        },
        ..Default::default()
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn test_high_risk_profile_scores_exactly() {
        let result = RiskScoringEngine::score(&high_risk_profile());

        assert_eq!(result.personal.score, dec!(3));
        assert_eq!(result.lifestyle.score, dec!(8));
        assert_eq!(result.financial.score, dec!(6));
        assert_eq!(result.medical.score, dec!(5));
        assert_eq!(result.preferences.score, dec!(3));
        assert_eq!(result.dependents.score, dec!(6));
        assert_eq!(result.insurance_history.score, dec!(2));
        assert_eq!(result.coverage.score, dec!(3));

        assert_eq!(result.total_score, dec!(36));
        assert_eq!(result.risk_percentage, dec!(67.9));

        let class = ClassificationTable::default().classify(result.risk_percentage);
        assert_eq!(class.band, RiskBand::High);
        assert_eq!(class.grade, "C");
    }

    #[test]
    fn test_minimal_risk_profile_is_very_low() {
        let result = RiskScoringEngine::score(&minimal_risk_profile());

        assert_eq!(result.total_score, dec!(1));
        assert_eq!(result.risk_percentage, dec!(1.9));

        let class = ClassificationTable::default().classify(result.risk_percentage);
        assert_eq!(class.band, RiskBand::VeryLow);
        assert_eq!(class.grade, "A+");
    }

    #[test]
    fn test_dependents_clamp_at_category_max() {
        let result = RiskScoringEngine::score(&high_risk_profile());
        // 5 fully dependent elders stack past the cap before clamping
        let raw: Decimal = result.dependents.breakdown.values().copied().sum();
        assert!(raw > result.dependents.score);
        assert_eq!(result.dependents.score, dec!(6));
    }

    #[test]
    fn test_breakdown_keys_are_stable() {
        let result = RiskScoringEngine::score(&ClientProfile::default());
        let keys: Vec<&str> = result
            .lifestyle
            .breakdown
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            [
                "alcohol",
                "bmi",
                "commute",
                "daily_steps",
                "occupation",
                "sleep_hours",
                "smoking",
                "working_type"
            ]
        );
    }
}

mod defaults {
    use super::*;

    #[test]
    fn test_missing_checkup_scores_like_explicit_36_months() {
        let mut explicit = ClientProfile::default();
        explicit.medical.months_since_checkup = Some(36);
        let implicit = ClientProfile::default();
        assert_eq!(
            RiskScoringEngine::score(&explicit),
            RiskScoringEngine::score(&implicit)
        );
    }

    #[test]
    fn test_missing_income_takes_worst_band() {
        let result = RiskScoringEngine::score(&ClientProfile::default());
        assert_eq!(result.financial.breakdown["annual_income"], dec!(2));
        assert_eq!(result.financial.breakdown["disposable_income"], dec!(2));
        assert_eq!(result.financial.breakdown["emi_load"], dec!(2));
    }

    #[test]
    fn test_none_condition_string_is_ignored() {
        let mut profile = ClientProfile::default();
        profile.medical.pre_existing_conditions = vec!["None".to_string()];
        let result = RiskScoringEngine::score(&profile);
        assert_eq!(result.medical.breakdown["pre_existing_conditions"], dec!(0));
    }

    #[test]
    fn test_single_allergy_scores_half_point() {
        let mut profile = ClientProfile::default();
        profile.medical.allergies = vec!["Pollen".to_string()];
        let result = RiskScoringEngine::score(&profile);
        assert_eq!(result.medical.breakdown["allergies"], dec!(0.5));
    }
}

fn arb_profile() -> impl Strategy<Value = ClientProfile> {
    let personal = (
        proptest::option::of(0u32..100),
        proptest::option::of("[a-z]{3,10}"),
        proptest::option::of(prop_oneof![
            Just(LocationTier::Metro),
            Just(LocationTier::TierTwo),
            Just(LocationTier::Rural),
        ]),
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
        proptest::option::of((0u32..120).prop_map(|n| Decimal::from(n) / dec!(10))),
        proptest::option::of((100u32..500).prop_map(|n| Decimal::from(n) / dec!(10))),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(occupation, daily_steps, sleep_hours, bmi, is_smoker)| {
            LifestyleInfo {
                occupation,
                daily_steps,
                sleep_hours,
                bmi,
                is_smoker,
                ..Default::default()
            }
        });

    let financial = (
        proptest::option::of((0u32..500).prop_map(|n| Decimal::from(n) / dec!(10))),
        proptest::option::of((0u32..1000).prop_map(|n| Decimal::from(n) / dec!(10))),
        proptest::option::of((0u32..1000).prop_map(|n| Decimal::from(n) / dec!(10))),
    )
        .prop_map(|(income, disposable, emi)| FinancialInfo {
            annual_income_lakhs: income,
            disposable_income_percent: disposable,
            emi_load_percent: emi,
            ..Default::default()
        });

    let dependents = proptest::collection::vec(
        (
            proptest::option::of(0u32..100),
            proptest::option::of(prop_oneof![
                Just(DependencyLevel::Full),
                Just(DependencyLevel::Partial),
                Just(DependencyLevel::Minimal),
            ]),
        )
            .prop_map(|(age, dependency_level)| Dependent {
                age,
                dependency_level,
            }),
        0..8,
    )
    .prop_map(|deps| DependentInfo {
        count: deps.len() as u32,
        dependents: deps,
    });

    let medical = (
        proptest::collection::vec("[a-z]{3,10}", 0..4),
        proptest::option::of(0u32..120),
    )
        .prop_map(|(pre_existing_conditions, months_since_checkup)| MedicalInfo {
            pre_existing_conditions,
            months_since_checkup,
            ..Default::default()
        });

    (personal, lifestyle, financial, medical, dependents).prop_map(
        |(personal, lifestyle, financial, medical, dependents)| ClientProfile {
            personal,
            lifestyle,
            financial,
            medical,
            dependents,
            ..Default::default()
        },
    )
}

mod properties {
    use super::*;

    proptest! {
        #[test]
        fn prop_total_is_within_bounds(profile in arb_profile()) {
            let result = RiskScoringEngine::score(&profile);
            prop_assert!(result.total_score >= Decimal::ZERO);
            prop_assert!(result.total_score <= MAX_POSSIBLE_SCORE);
        }

        #[test]
        fn prop_percentage_matches_formula(profile in arb_profile()) {
            let result = RiskScoringEngine::score(&profile);
            let expected =
                (result.total_score / MAX_POSSIBLE_SCORE * dec!(100)).round_dp(1);
            prop_assert_eq!(result.risk_percentage, expected);
            prop_assert!(result.risk_percentage >= Decimal::ZERO);
            prop_assert!(result.risk_percentage <= dec!(100));
        }

        #[test]
        fn prop_scoring_is_idempotent(profile in arb_profile()) {
            let first = RiskScoringEngine::score(&profile);
            let second = RiskScoringEngine::score(&profile);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_smoking_never_lowers_the_score(profile in arb_profile()) {
            let mut smoker = profile.clone();
            smoker.lifestyle.is_smoker = Some(true);
            let mut non_smoker = profile;
            non_smoker.lifestyle.is_smoker = Some(false);
            prop_assert!(
                RiskScoringEngine::score(&smoker).total_score
                    >= RiskScoringEngine::score(&non_smoker).total_score
            );
        }

        #[test]
        fn prop_category_scores_respect_their_max(profile in arb_profile()) {
            let result = RiskScoringEngine::score(&profile);
            for (name, category) in result.categories() {
                prop_assert!(
                    category.score <= category.max,
                    "category {} exceeded its max",
                    name
                );
                prop_assert!(category.score >= Decimal::ZERO);
            }
        }
    }
}
