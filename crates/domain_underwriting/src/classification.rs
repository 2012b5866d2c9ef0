//! Risk band classification
//!
//! Maps a risk percentage onto one of five bands, each carrying the guidance
//! strings underwriters surface to advisors. The strings live in a
//! [`ClassificationTable`] so a deployment can override the wording without
//! touching the band boundaries.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The five risk bands, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskBand {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskBand {
    /// Letter grade shown on advisor-facing reports
    pub fn grade(&self) -> &'static str {
        match self {
            RiskBand::VeryLow => "A+",
            RiskBand::Low => "A",
            RiskBand::Moderate => "B",
            RiskBand::High => "C",
            RiskBand::VeryHigh => "D",
        }
    }

    /// Human-readable band label
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::VeryLow => "Very Low Risk",
            RiskBand::Low => "Low Risk",
            RiskBand::Moderate => "Moderate Risk",
            RiskBand::High => "High Risk",
            RiskBand::VeryHigh => "Very High Risk",
        }
    }
}

/// A classified risk result with its guidance strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskClassification {
    pub band: RiskBand,
    pub label: String,
    pub grade: String,
    pub description: String,
    pub recommended_cover: String,
    pub suggested_premium: String,
}

/// Guidance strings for one band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandGuidance {
    pub description: String,
    pub recommended_cover: String,
    pub suggested_premium: String,
}

/// Lookup table from risk percentage to classification
///
/// Band boundaries are fixed at 20/40/60/80 with inclusive upper bounds;
/// only the guidance wording is configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationTable {
    pub very_low: BandGuidance,
    pub low: BandGuidance,
    pub moderate: BandGuidance,
    pub high: BandGuidance,
    pub very_high: BandGuidance,
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self {
            very_low: BandGuidance {
                description: "Excellent risk profile with minimal underwriting considerations"
                    .to_string(),
                recommended_cover: "Standard coverage with minimal loading".to_string(),
                suggested_premium: "Standard rates".to_string(),
            },
            low: BandGuidance {
                description: "Good risk profile with standard underwriting considerations"
                    .to_string(),
                recommended_cover: "Standard coverage with slight loading".to_string(),
                suggested_premium: "Standard rates with minor adjustments".to_string(),
            },
            moderate: BandGuidance {
                description: "Standard risk profile with moderate underwriting considerations"
                    .to_string(),
                recommended_cover: "Standard coverage with moderate loading".to_string(),
                suggested_premium: "Standard rates with moderate loading".to_string(),
            },
            high: BandGuidance {
                description: "Higher risk profile requiring detailed underwriting review"
                    .to_string(),
                recommended_cover: "Limited coverage with significant loading".to_string(),
                suggested_premium: "Higher rates with significant loading".to_string(),
            },
            very_high: BandGuidance {
                description:
                    "High-risk profile requiring specialized underwriting and medical review"
                        .to_string(),
                recommended_cover: "Specialized coverage with maximum loading".to_string(),
                suggested_premium: "Maximum rates with specialized underwriting".to_string(),
            },
        }
    }
}

impl ClassificationTable {
    /// Classifies a risk percentage into its band
    pub fn classify(&self, risk_percentage: Decimal) -> RiskClassification {
        let (band, guidance) = if risk_percentage <= dec!(20) {
            (RiskBand::VeryLow, &self.very_low)
        } else if risk_percentage <= dec!(40) {
            (RiskBand::Low, &self.low)
        } else if risk_percentage <= dec!(60) {
            (RiskBand::Moderate, &self.moderate)
        } else if risk_percentage <= dec!(80) {
            (RiskBand::High, &self.high)
        } else {
            (RiskBand::VeryHigh, &self.very_high)
        };

        RiskClassification {
            band,
            label: band.label().to_string(),
            grade: band.grade().to_string(),
            description: guidance.description.clone(),
            recommended_cover: guidance.recommended_cover.clone(),
            suggested_premium: guidance.suggested_premium.clone(),
        }
    }
}
