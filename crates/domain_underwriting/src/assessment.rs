//! Assessment audit snapshot
//!
//! A [`RiskAssessment`] bundles everything the engine produced for one
//! client: the normalized profile, the full scoring breakdown, the band
//! classification, and the narrative. Serialized as pretty JSON it forms the
//! audit record written alongside advisor-facing reports.

use chrono::{DateTime, Utc};
use core_kernel::{AssessmentId, ClientId};
use serde::{Deserialize, Serialize};

use crate::classification::RiskClassification;
use crate::error::UnderwritingError;
use crate::profile::ClientProfile;
use crate::scoring::ScoringResult;

/// The complete outcome of one underwriting risk assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub assessment_id: AssessmentId,
    pub client_id: ClientId,
    pub generated_at: DateTime<Utc>,
    pub profile: ClientProfile,
    pub scoring: ScoringResult,
    pub classification: RiskClassification,
    /// Narrative text, or the fixed fallback when generation failed
    pub narrative: String,
}

impl RiskAssessment {
    pub fn new(
        client_id: ClientId,
        profile: ClientProfile,
        scoring: ScoringResult,
        classification: RiskClassification,
        narrative: String,
    ) -> Self {
        Self {
            assessment_id: AssessmentId::new_v7(),
            client_id,
            generated_at: Utc::now(),
            profile,
            scoring,
            classification,
            narrative,
        }
    }

    /// Serializes the full assessment as a pretty-printed JSON snapshot
    pub fn to_json(&self) -> Result<String, UnderwritingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::ClassificationTable;
    use crate::scoring::RiskScoringEngine;

    #[test]
    fn test_snapshot_contains_all_sections() {
        let profile = ClientProfile::default();
        let scoring = RiskScoringEngine::score(&profile);
        let classification =
            ClassificationTable::default().classify(scoring.risk_percentage);
        let assessment = RiskAssessment::new(
            ClientId::new(),
            profile,
            scoring,
            classification,
            "narrative".to_string(),
        );

        let json = assessment.to_json().unwrap();
        for key in ["profile", "scoring", "classification", "narrative", "client_id"] {
            assert!(json.contains(key), "missing section: {key}");
        }
    }
}
