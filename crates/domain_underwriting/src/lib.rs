//! Underwriting Risk Domain
//!
//! This crate implements the core risk-scoring logic for client underwriting,
//! following Domain-Driven Design (DDD) principles. The scoring path is pure
//! and synchronous: given a [`ClientProfile`], the engine produces a
//! deterministic [`ScoringResult`] and a [`RiskClassification`], with no I/O
//! and no failure modes.
//!
//! # Scoring model
//!
//! Eight weighted categories contribute additive points against a fixed
//! maximum of 53:
//!
//! ```text
//! Personal (5) + Lifestyle (8) + Financial (8) + Medical (8)
//!   + Preferences (4) + Dependents (6) + Insurance History (4) + Coverage (3)
//! ```
//!
//! The risk percentage is `total / 53 * 100`, rounded to one decimal place,
//! and maps onto five bands (A+ through D).
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_underwriting::{RiskScoringEngine, ClassificationTable};
//!
//! let scoring = RiskScoringEngine::score(&profile);
//! let class = ClassificationTable::default().classify(scoring.risk_percentage);
//! ```

pub mod profile;
pub mod scoring;
pub mod classification;
pub mod assessment;
pub mod error;

pub use profile::{
    ClientProfile, PersonalInfo, LifestyleInfo, FinancialInfo, MedicalInfo,
    PreferenceInfo, DependentInfo, Dependent, DependencyLevel, InsuranceHistory,
    CoverageInfo, LocationTier,
};
pub use scoring::{RiskScoringEngine, ScoringResult, CategoryScore, MAX_POSSIBLE_SCORE};
pub use classification::{ClassificationTable, RiskClassification, RiskBand};
pub use assessment::RiskAssessment;
pub use error::UnderwritingError;
