//! Client profile value objects
//!
//! A [`ClientProfile`] is the normalized, strongly-typed input to the scoring
//! engine. Every factor input is optional: the engine substitutes a documented
//! default for each missing value, so an empty profile still scores.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Location tier for pricing geography
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationTier {
    /// Metro city (Mumbai, Delhi, Bangalore, ...)
    Metro,
    /// Tier-2 city (Nagpur, Indore, Bhopal, ...)
    TierTwo,
    /// Rural or unrecognized location
    Rural,
}

/// Level of financial dependency of a dependent on the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DependencyLevel {
    Full,
    Partial,
    Minimal,
}

/// A single financial dependent of the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dependent {
    pub age: Option<u32>,
    pub dependency_level: Option<DependencyLevel>,
}

/// Personal demographics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub city: Option<String>,
    pub location_tier: Option<LocationTier>,
}

/// Lifestyle and health habits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifestyleInfo {
    pub occupation: Option<String>,
    pub working_type: Option<String>,
    pub daily_steps: Option<u32>,
    pub sleep_hours: Option<Decimal>,
    pub bmi: Option<Decimal>,
    pub is_smoker: Option<bool>,
    pub alcohol_consumption: Option<String>,
    pub commute_type: Option<String>,
}

/// Financial position, pre-derived into scoring units
///
/// Income is expressed in lakhs and the load figures as percentages of
/// salary; the intake normalizer performs those derivations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialInfo {
    pub employment_status: Option<String>,
    pub annual_income_lakhs: Option<Decimal>,
    pub disposable_income_percent: Option<Decimal>,
    pub emi_load_percent: Option<Decimal>,
}

/// Medical history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalInfo {
    pub pre_existing_conditions: Vec<String>,
    pub months_since_checkup: Option<u32>,
    pub allergies: Vec<String>,
}

/// Product preferences stated by the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceInfo {
    pub budget_flexibility: Option<String>,
    pub riders_willingness: Option<bool>,
    pub deductible_flexibility: Option<bool>,
    pub risk_tolerance: Option<String>,
}

/// Dependents overview
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependentInfo {
    pub count: u32,
    pub dependents: Vec<Dependent>,
}

/// Prior insurance behaviour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceHistory {
    pub has_life_insurance: Option<bool>,
    pub has_health_insurance: Option<bool>,
    pub claim_count_last_5yrs: Option<u32>,
    pub has_lapsed_policy: Option<bool>,
}

/// Existing coverage adequacy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageInfo {
    /// Life cover as a multiple of annual income (None when income is unknown)
    pub life_coverage_multiple_of_income: Option<Decimal>,
    pub health_coverage_lakhs: Option<Decimal>,
}

/// The complete normalized client profile fed to the scoring engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub personal: PersonalInfo,
    pub lifestyle: LifestyleInfo,
    pub financial: FinancialInfo,
    pub medical: MedicalInfo,
    pub preferences: PreferenceInfo,
    pub dependents: DependentInfo,
    pub insurance_history: InsuranceHistory,
    pub coverage: CoverageInfo,
}
