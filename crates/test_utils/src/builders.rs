//! Test Data Builders
//!
//! Builder patterns for constructing test profiles with sensible defaults.
//! Tests specify only the fields under scrutiny and take the minimal-risk
//! fixture for everything else.

use domain_underwriting::{
    ClientProfile, Dependent, DependencyLevel, LocationTier,
};
use rust_decimal::Decimal;

use crate::fixtures::ProfileFixtures;

/// Builder for client profiles, starting from the minimal-risk fixture
pub struct ProfileBuilder {
    profile: ClientProfile,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileBuilder {
    /// Creates a builder seeded with the minimal-risk fixture
    pub fn new() -> Self {
        Self {
            profile: ProfileFixtures::minimal_risk(),
        }
    }

    /// Creates a builder seeded with an entirely empty profile
    pub fn empty() -> Self {
        Self {
            profile: ClientProfile::default(),
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.profile.personal.age = Some(age);
        self
    }

    pub fn with_marital_status(mut self, status: impl Into<String>) -> Self {
        self.profile.personal.marital_status = Some(status.into());
        self
    }

    pub fn with_location_tier(mut self, tier: LocationTier) -> Self {
        self.profile.personal.location_tier = Some(tier);
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.profile.lifestyle.occupation = Some(occupation.into());
        self
    }

    pub fn with_smoker(mut self, smoker: bool) -> Self {
        self.profile.lifestyle.is_smoker = Some(smoker);
        self
    }

    pub fn with_bmi(mut self, bmi: Decimal) -> Self {
        self.profile.lifestyle.bmi = Some(bmi);
        self
    }

    pub fn with_income_lakhs(mut self, lakhs: Decimal) -> Self {
        self.profile.financial.annual_income_lakhs = Some(lakhs);
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.profile
            .medical
            .pre_existing_conditions
            .push(condition.into());
        self
    }

    pub fn with_dependent(mut self, age: u32, level: DependencyLevel) -> Self {
        self.profile.dependents.dependents.push(Dependent {
            age: Some(age),
            dependency_level: Some(level),
        });
        self.profile.dependents.count = self.profile.dependents.dependents.len() as u32;
        self
    }

    pub fn with_claims(mut self, count: u32) -> Self {
        self.profile.insurance_history.claim_count_last_5yrs = Some(count);
        self
    }

    pub fn build(self) -> ClientProfile {
        self.profile
    }
}
