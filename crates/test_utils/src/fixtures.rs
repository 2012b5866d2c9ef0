//! Pre-built Test Fixtures
//!
//! Ready-to-use profiles and raw applications with known, hand-checked
//! scores. Tests that assert exact totals should use these rather than
//! constructing profiles inline.

use agent_narrative::mock::MockNarrativePort;
use chrono::NaiveDate;
use domain_underwriting::{
    ClientProfile, CoverageInfo, Dependent, DependencyLevel, DependentInfo,
    FinancialInfo, InsuranceHistory, LifestyleInfo, LocationTier, MedicalInfo,
    PersonalInfo, PreferenceInfo,
};
use rust_decimal_macros::dec;

/// Fixture for client profiles
pub struct ProfileFixtures;

impl ProfileFixtures {
    /// A profile where every answered factor lands in its best band.
    ///
    /// Scores a total of 1 (the unavoidable age point) for a risk percentage
    /// of 1.9, Very Low Risk / A+.
    pub fn minimal_risk() -> ClientProfile {
        ClientProfile {
            personal: PersonalInfo {
                age: Some(25),
                marital_status: Some("Married".to_string()),
                location_tier: Some(LocationTier::Rural),
                ..Default::default()
            },
            lifestyle: LifestyleInfo {
                occupation: Some("Accountant".to_string()),
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

    /// A heavily loaded profile: older smoker in a hazardous occupation with
    /// diabetes, low income, high EMIs, and five fully dependent elders.
    ///
    /// Scores a total of 36 for a risk percentage of 67.9, High Risk / C.
    pub fn high_risk() -> ClientProfile {
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
}

/// Fixture for temporal anchors
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The reference date all deterministic normalization tests share
    pub fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }
}

/// Fixture for raw application payloads
pub struct RawApplicationFixtures;

impl RawApplicationFixtures {
    /// A complete well-formed application payload covering every form step
    pub fn complete_json() -> &'static str {
        r#"{
            "basicInfo": {
                "fullName": "Asha Verma",
                "dob": "1990-03-20",
                "gender": "Female",
                "maritalStatus": "Married",
                "city": "Pune",
                "state": "Maharashtra"
            },
            "lifestyleInfo": {
                "occupation": "Software Engineer",
                "workingType": "Remote",
                "stepsPerDay": "8000",
                "sleepHours": "7.5",
                "smoker": "no",
                "alcohol": "Occasionally",
                "commuteType": "Car"
            },
            "medicalInfo": {
                "height": "165",
                "weight": "60",
                "preExistingConditions": "None",
                "lastHealthCheckup": "2024-12-15",
                "allergies": "None"
            },
            "financialInfo": {
                "employmentStatus": "Salaried",
                "totalCtc": "1500000",
                "monthlySalary": "125000",
                "monthlyExpenses": "50000",
                "existingEmis": "10000",
                "bnplObligations": "0"
            },
            "familyInfo": {
                "numDependents": "1",
                "dependents": [{"age": "8", "dependencyLevel": "full"}]
            },
            "coverageInfo": {
                "existingLifePolicies": ["LIC-001"],
                "existingHealthPolicies": ["HLT-001"],
                "claimHistory": [],
                "policyLapseHistory": [],
                "totalLifeCoverage": "15000000",
                "totalHealthCoverage": "500000"
            },
            "preferencesInfo": {
                "budgetFlexibility": "High",
                "willingnessForRiders": "yes",
                "deductibleFlexibility": "yes",
                "riskTolerance": "Conservative"
            }
        }"#
    }
}

/// Fixture for narrative ports
pub struct NarrativeFixtures;

impl NarrativeFixtures {
    /// A mock port answering every request with a short canned narrative
    pub fn canned_port() -> std::sync::Arc<MockNarrativePort> {
        std::sync::Arc::new(MockNarrativePort::with_response(
            "Canned underwriting narrative for testing.",
        ))
    }

    /// A mock port failing every request, for fallback-path tests
    pub fn failing_port() -> std::sync::Arc<MockNarrativePort> {
        std::sync::Arc::new(MockNarrativePort::failing("narrative model offline"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_underwriting::RiskScoringEngine;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minimal_risk_fixture_total() {
        let result = RiskScoringEngine::score(&ProfileFixtures::minimal_risk());
        assert_eq!(result.total_score, dec!(1));
    }

    #[test]
    fn test_high_risk_fixture_total() {
        let result = RiskScoringEngine::score(&ProfileFixtures::high_risk());
        assert_eq!(result.total_score, dec!(36));
    }

    #[test]
    fn test_complete_payload_parses() {
        use domain_intake::RawApplication;
        assert!(RawApplication::from_json(RawApplicationFixtures::complete_json()).is_ok());
    }
}
