//! Prompt assembly for the underwriting narrative
//!
//! The prompt carries the full assessment as pretty-printed JSON plus a fixed
//! instruction block that pins the response format. Keeping the instruction
//! text stable matters: downstream report rendering splits the narrative on
//! these section headings.

use serde::Serialize;

use crate::ports::NarrativeRequest;

/// Sections the model is instructed to produce, in order
pub const NARRATIVE_SECTIONS: [&str; 6] = [
    "DETAILED ANALYSIS",
    "RISK FACTORS",
    "POSITIVE INDICATORS",
    "AREAS OF CONCERN",
    "RECOMMENDATIONS",
    "CONCLUSION",
];

#[derive(Serialize)]
struct PromptPayload<'a> {
    profile: &'a domain_underwriting::ClientProfile,
    scoring: &'a domain_underwriting::ScoringResult,
    classification: &'a domain_underwriting::RiskClassification,
}

/// Builds the full prompt for a narrative request
pub fn build_prompt(request: &NarrativeRequest) -> String {
    let payload = PromptPayload {
        profile: &request.profile,
        scoring: &request.scoring,
        classification: &request.classification,
    };
    // The payload is plain data; serialization cannot fail here
    let client_data =
        serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"You are an expert insurance underwriter. Analyze this client's data and provide a personalized, comprehensive risk assessment.

**CLIENT DATA:**
{client_data}

**REQUIRED ANALYSIS FORMAT:**

**DETAILED ANALYSIS:**
- Analyze age, occupation, and lifestyle factors specific to this client's data
- Evaluate medical history and current health status, referencing specific conditions if any
- Assess financial stability and income capacity, mentioning specific amounts
- Review insurance history and claims experience
- Identify any high-risk factors specific to this client
- Highlight positive indicators unique to this client's profile

**RISK FACTORS:**
- List specific risk factors found in this client's data, one line each
- Explain how each factor impacts their insurability

**POSITIVE INDICATORS:**
- List positive factors from this client's profile, one line each
- Explain how these factors benefit their insurance application

**AREAS OF CONCERN:**
- Identify specific concerns from their data, one line each
- Explain what additional information or actions might be needed

**RECOMMENDATIONS:**
- Provide specific policy recommendations based on their profile
- Suggest appropriate coverage amounts based on their income and needs
- Recommend any medical requirements or checkups needed
- Suggest premium payment options suitable for their financial situation
- Recommend any riders or additional coverage they should consider

**CONCLUSION:**
Provide a personalized conclusion about this specific client's risk profile, insurability, and recommended next steps in 2-3 detailed lines.

Please make this analysis highly personalized to the specific data provided. Reference their actual age, occupation, income, medical conditions, and other specific details from their profile."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_underwriting::{
        ClassificationTable, ClientProfile, RiskScoringEngine,
    };

    fn request() -> NarrativeRequest {
        let profile = ClientProfile::default();
        let scoring = RiskScoringEngine::score(&profile);
        let classification =
            ClassificationTable::default().classify(scoring.risk_percentage);
        NarrativeRequest::new(profile, scoring, classification)
    }

    #[test]
    fn test_prompt_contains_all_sections_in_order() {
        let prompt = build_prompt(&request());
        let mut last = 0;
        for section in NARRATIVE_SECTIONS {
            let pos = prompt.find(section).expect(section);
            assert!(pos > last, "section {section} out of order");
            last = pos;
        }
    }

    #[test]
    fn test_prompt_embeds_scoring_data() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("risk_percentage"));
        assert!(prompt.contains("max_possible_score"));
    }
}
