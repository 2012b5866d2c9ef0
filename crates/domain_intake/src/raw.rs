//! Raw application form model
//!
//! Mirrors the multi-step application form as submitted: every field arrives
//! as an optional string so that partial or malformed submissions still
//! deserialize. The normalizer is responsible for parsing and defaulting.

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// Basic demographics step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBasicInfo {
    pub full_name: Option<String>,
    /// Date of birth as `YYYY-MM-DD`
    pub dob: Option<String>,
    /// Fallback when no date of birth was supplied
    pub age: Option<String>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Lifestyle step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLifestyleInfo {
    pub occupation: Option<String>,
    pub working_type: Option<String>,
    pub steps_per_day: Option<String>,
    pub sleep_hours: Option<String>,
    /// `yes` / `no`
    pub smoker: Option<String>,
    pub alcohol: Option<String>,
    pub commute_type: Option<String>,
}

/// Medical step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMedicalInfo {
    /// Height in centimetres
    pub height: Option<String>,
    /// Weight in kilograms
    pub weight: Option<String>,
    /// Fallback when height or weight is missing
    pub bmi: Option<String>,
    pub pre_existing_conditions: Option<String>,
    /// Last checkup date as `YYYY-MM-DD`
    pub last_health_checkup: Option<String>,
    pub allergies: Option<String>,
}

/// Financial step, amounts in rupees
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFinancialInfo {
    pub employment_status: Option<String>,
    /// Annual CTC in rupees
    pub total_ctc: Option<String>,
    pub monthly_salary: Option<String>,
    pub monthly_expenses: Option<String>,
    pub existing_emis: Option<String>,
    pub bnpl_obligations: Option<String>,
}

/// A dependent as captured on the family step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDependent {
    pub age: Option<String>,
    /// `full` / `partial` / `minimal`
    pub dependency_level: Option<String>,
}

/// Family step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFamilyInfo {
    pub num_dependents: Option<String>,
    pub dependents: Vec<RawDependent>,
}

/// Existing coverage step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCoverageInfo {
    pub existing_life_policies: Vec<String>,
    pub existing_health_policies: Vec<String>,
    pub claim_history: Vec<String>,
    pub policy_lapse_history: Vec<String>,
    /// Total life cover in rupees
    pub total_life_coverage: Option<String>,
    /// Total health cover in rupees
    pub total_health_coverage: Option<String>,
}

/// Preferences step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPreferencesInfo {
    pub budget_flexibility: Option<String>,
    /// `yes` / `no`
    pub willingness_for_riders: Option<String>,
    /// `yes` / `no`; anything but an explicit `no` counts as flexible
    pub deductible_flexibility: Option<String>,
    pub risk_tolerance: Option<String>,
}

/// The complete raw application across all form steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawApplication {
    pub basic_info: RawBasicInfo,
    pub lifestyle_info: RawLifestyleInfo,
    pub medical_info: RawMedicalInfo,
    pub financial_info: RawFinancialInfo,
    pub family_info: RawFamilyInfo,
    pub coverage_info: RawCoverageInfo,
    pub preferences_info: RawPreferencesInfo,
}

impl RawApplication {
    /// Deserializes an application from its JSON payload
    pub fn from_json(payload: &str) -> Result<Self, IntakeError> {
        Ok(serde_json::from_str(payload)?)
    }
}
