//! Application Intake Domain
//!
//! This crate captures raw, stringly-typed application form data and
//! normalizes it into the strongly-typed [`ClientProfile`] the scoring
//! engine consumes.
//!
//! Normalization is total: a parse failure on any field degrades to that
//! field's documented scoring default instead of failing the application.
//! Derived metrics (age from date of birth, BMI from height and weight,
//! location tier, income in lakhs, disposable-income and EMI percentages,
//! coverage multiples) are computed here so the scoring engine never sees
//! raw form values.
//!
//! [`ClientProfile`]: domain_underwriting::ClientProfile

pub mod error;
pub mod locations;
pub mod normalizer;
pub mod raw;

pub use error::IntakeError;
pub use locations::tier_for_city;
pub use normalizer::ProfileNormalizer;
pub use raw::{
    RawApplication, RawBasicInfo, RawCoverageInfo, RawDependent, RawFamilyInfo,
    RawFinancialInfo, RawLifestyleInfo, RawMedicalInfo, RawPreferencesInfo,
};
