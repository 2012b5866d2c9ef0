//! Deterministic risk scoring engine
//!
//! Scores a [`ClientProfile`] across eight categories of additive risk
//! points. The computation is pure: no I/O, no clock, no randomness. Missing
//! inputs fall back to documented defaults rather than erroring, so scoring
//! is total over all profiles.
//!
//! Each category is clamped at its nominal maximum, which keeps the total
//! within the fixed overall maximum of 53 even when individual factors stack.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::profile::{ClientProfile, DependencyLevel, LocationTier};

/// Fixed denominator of the risk percentage.
///
/// This is a business constant, not the sum of the category maxima. It stays
/// fixed so that percentages remain comparable across profiles and releases.
pub const MAX_POSSIBLE_SCORE: Decimal = dec!(53);

/// Score for a single category with its per-factor breakdown
///
/// The breakdown keeps the raw factor points before category clamping, for
/// audit purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: Decimal,
    pub max: Decimal,
    pub breakdown: BTreeMap<String, Decimal>,
}

impl CategoryScore {
    fn from_breakdown(max: Decimal, breakdown: BTreeMap<String, Decimal>) -> Self {
        let raw: Decimal = breakdown.values().copied().sum();
        Self {
            score: raw.min(max),
            max,
            breakdown,
        }
    }
}

/// The complete scoring output for a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub personal: CategoryScore,
    pub lifestyle: CategoryScore,
    pub financial: CategoryScore,
    pub medical: CategoryScore,
    pub preferences: CategoryScore,
    pub dependents: CategoryScore,
    pub insurance_history: CategoryScore,
    pub coverage: CategoryScore,
    pub total_score: Decimal,
    pub max_possible_score: Decimal,
    /// `total / max * 100`, rounded to one decimal place
    pub risk_percentage: Decimal,
}

impl ScoringResult {
    /// Iterates the eight category scores in canonical order
    pub fn categories(&self) -> [(&'static str, &CategoryScore); 8] {
        [
            ("personal", &self.personal),
            ("lifestyle", &self.lifestyle),
            ("financial", &self.financial),
            ("medical", &self.medical),
            ("preferences", &self.preferences),
            ("dependents", &self.dependents),
            ("insurance_history", &self.insurance_history),
            ("coverage", &self.coverage),
        ]
    }
}

/// Stateless scoring engine
pub struct RiskScoringEngine;

impl RiskScoringEngine {
    /// Scores a profile across all eight categories
    pub fn score(profile: &ClientProfile) -> ScoringResult {
        let personal = Self::score_personal(profile);
        let lifestyle = Self::score_lifestyle(profile);
        let financial = Self::score_financial(profile);
        let medical = Self::score_medical(profile);
        let preferences = Self::score_preferences(profile);
        let dependents = Self::score_dependents(profile);
        let insurance_history = Self::score_insurance_history(profile);
        let coverage = Self::score_coverage(profile);

        let total_score = personal.score
            + lifestyle.score
            + financial.score
            + medical.score
            + preferences.score
            + dependents.score
            + insurance_history.score
            + coverage.score;

        let risk_percentage =
            (total_score / MAX_POSSIBLE_SCORE * dec!(100)).round_dp(1);

        tracing::debug!(
            total = %total_score,
            percentage = %risk_percentage,
            "risk scoring complete"
        );

        ScoringResult {
            personal,
            lifestyle,
            financial,
            medical,
            preferences,
            dependents,
            insurance_history,
            coverage,
            total_score,
            max_possible_score: MAX_POSSIBLE_SCORE,
            risk_percentage,
        }
    }

    /// Personal demographics: age band, marital status, location tier (max 5)
    fn score_personal(profile: &ClientProfile) -> CategoryScore {
        let p = &profile.personal;
        let mut breakdown = BTreeMap::new();

        let age = p.age.unwrap_or(0);
        let age_points = if age >= 50 {
            dec!(3)
        } else if age >= 30 {
            dec!(2)
        } else {
            dec!(1)
        };
        breakdown.insert("age".to_string(), age_points);

        let marital_points = match &p.marital_status {
            Some(status) if status.eq_ignore_ascii_case("single") => dec!(1),
            _ => dec!(0),
        };
        breakdown.insert("marital_status".to_string(), marital_points);

        let tier_points = match p.location_tier {
            Some(LocationTier::Metro) => dec!(1),
            Some(LocationTier::TierTwo) => dec!(0.5),
            Some(LocationTier::Rural) | None => dec!(0),
        };
        breakdown.insert("location_tier".to_string(), tier_points);

        CategoryScore::from_breakdown(dec!(5), breakdown)
    }

    /// Lifestyle habits: occupation hazard, activity, sleep, BMI, smoking,
    /// alcohol, commute (max 8)
    fn score_lifestyle(profile: &ClientProfile) -> CategoryScore {
        let l = &profile.lifestyle;
        let mut breakdown = BTreeMap::new();

        let occupation = lower_or_empty(&l.occupation);
        let occupation_points = if contains_any(
            &occupation,
            &["driver", "construction", "delivery", "miner", "pilot", "firefighter", "police"],
        ) {
            dec!(2)
        } else if contains_any(&occupation, &["field", "onsite", "sales"]) {
            dec!(1)
        } else {
            dec!(0)
        };
        breakdown.insert("occupation".to_string(), occupation_points);

        let working_type = lower_or_empty(&l.working_type);
        let working_points = if working_type.contains("hazardous") {
            dec!(2)
        } else if working_type.contains("onsite") {
            dec!(1)
        } else {
            dec!(0)
        };
        breakdown.insert("working_type".to_string(), working_points);

        let steps = l.daily_steps.unwrap_or(0);
        let steps_points = if steps >= 10_000 {
            dec!(0)
        } else if steps >= 5_000 {
            dec!(1)
        } else {
            dec!(2)
        };
        breakdown.insert("daily_steps".to_string(), steps_points);

        let sleep_points = match l.sleep_hours {
            Some(h) if h >= dec!(7) => dec!(0),
            Some(h) if h >= dec!(5) => dec!(1),
            Some(_) => dec!(2),
            None => dec!(1),
        };
        breakdown.insert("sleep_hours".to_string(), sleep_points);

        breakdown.insert("bmi".to_string(), bmi_points(l.bmi));

        let smoker_points = if l.is_smoker.unwrap_or(false) {
            dec!(3)
        } else {
            dec!(0)
        };
        breakdown.insert("smoking".to_string(), smoker_points);

        let alcohol = lower_or_empty(&l.alcohol_consumption);
        let alcohol_points = if contains_any(&alcohol, &["daily", "regularly"]) {
            dec!(2)
        } else if alcohol.contains("occasionally") {
            dec!(1)
        } else {
            dec!(0)
        };
        breakdown.insert("alcohol".to_string(), alcohol_points);

        let commute = lower_or_empty(&l.commute_type);
        let commute_points = if contains_any(&commute, &["heavy", "truck"]) {
            dec!(2)
        } else if contains_any(&commute, &["bike", "motorcycle"]) {
            dec!(1)
        } else {
            dec!(0)
        };
        breakdown.insert("commute".to_string(), commute_points);

        CategoryScore::from_breakdown(dec!(8), breakdown)
    }

    /// Financial stability: employment, income, disposable income, EMI load
    /// (max 8)
    fn score_financial(profile: &ClientProfile) -> CategoryScore {
        let f = &profile.financial;
        let mut breakdown = BTreeMap::new();

        let employment = lower_or_empty(&f.employment_status);
        let employment_points = if employment.contains("unemployed") {
            dec!(2)
        } else if contains_any(&employment, &["freelancer", "seasonal", "business"]) {
            dec!(1)
        } else {
            dec!(0)
        };
        breakdown.insert("employment_status".to_string(), employment_points);

        // Unknown income is treated as zero lakhs, the worst band
        let income = f.annual_income_lakhs.unwrap_or(Decimal::ZERO);
        let income_points = if income >= dec!(10) {
            dec!(0)
        } else if income >= dec!(5) {
            dec!(1)
        } else {
            dec!(2)
        };
        breakdown.insert("annual_income".to_string(), income_points);

        let disposable_points = match f.disposable_income_percent {
            Some(p) if p >= dec!(30) => dec!(0),
            Some(p) if p >= dec!(15) => dec!(1),
            _ => dec!(2),
        };
        breakdown.insert("disposable_income".to_string(), disposable_points);

        let emi_points = match f.emi_load_percent {
            Some(p) if p < dec!(30) => dec!(0),
            Some(p) if p <= dec!(50) => dec!(1),
            _ => dec!(2),
        };
        breakdown.insert("emi_load".to_string(), emi_points);

        CategoryScore::from_breakdown(dec!(8), breakdown)
    }

    /// Medical history: pre-existing conditions, BMI, checkup recency,
    /// allergies (max 8)
    fn score_medical(profile: &ClientProfile) -> CategoryScore {
        let m = &profile.medical;
        let mut breakdown = BTreeMap::new();

        let conditions: Vec<String> = m
            .pre_existing_conditions
            .iter()
            .map(|c| c.to_lowercase())
            .filter(|c| !c.is_empty() && c != "none")
            .collect();
        let condition_points = if conditions.is_empty() {
            dec!(0)
        } else if conditions
            .iter()
            .any(|c| contains_any(c, &["diabetes", "heart", "cancer"]))
        {
            dec!(2)
        } else {
            dec!(1)
        };
        breakdown.insert("pre_existing_conditions".to_string(), condition_points);

        // BMI is scored here with the same bands as in lifestyle
        breakdown.insert("bmi".to_string(), bmi_points(profile.lifestyle.bmi));

        // Unknown checkup recency is treated as 36 months
        let months = m.months_since_checkup.unwrap_or(36);
        let checkup_points = if months < 12 {
            dec!(0)
        } else if months <= 36 {
            dec!(1)
        } else {
            dec!(2)
        };
        breakdown.insert("last_checkup".to_string(), checkup_points);

        let allergies: Vec<&String> = m
            .allergies
            .iter()
            .filter(|a| !a.is_empty() && !a.eq_ignore_ascii_case("none"))
            .collect();
        let allergy_points = match allergies.len() {
            0 => dec!(0),
            1 => dec!(0.5),
            _ => dec!(1),
        };
        breakdown.insert("allergies".to_string(), allergy_points);

        CategoryScore::from_breakdown(dec!(8), breakdown)
    }

    /// Product preferences: budget, riders, deductible, risk tolerance (max 4)
    fn score_preferences(profile: &ClientProfile) -> CategoryScore {
        let p = &profile.preferences;
        let mut breakdown = BTreeMap::new();

        let budget = lower_or_empty(&p.budget_flexibility);
        let budget_points = if budget.contains("high") {
            dec!(0)
        } else if budget.contains("moderate") {
            dec!(0.5)
        } else {
            dec!(1)
        };
        breakdown.insert("budget_flexibility".to_string(), budget_points);

        let riders_points = if p.riders_willingness.unwrap_or(false) {
            dec!(0)
        } else {
            dec!(1)
        };
        breakdown.insert("riders_willingness".to_string(), riders_points);

        // Deductible flexibility defaults to true when unstated
        let deductible_points = if p.deductible_flexibility.unwrap_or(true) {
            dec!(0)
        } else {
            dec!(1)
        };
        breakdown.insert("deductible_flexibility".to_string(), deductible_points);

        let tolerance = lower_or_empty(&p.risk_tolerance);
        let tolerance_points = if tolerance.contains("conservative") {
            dec!(0)
        } else if tolerance.contains("moderate") {
            dec!(0.5)
        } else {
            dec!(1)
        };
        breakdown.insert("risk_tolerance".to_string(), tolerance_points);

        CategoryScore::from_breakdown(dec!(4), breakdown)
    }

    /// Dependents: headcount, dependency load, elderly dependents (max 6)
    fn score_dependents(profile: &ClientProfile) -> CategoryScore {
        let d = &profile.dependents;
        let mut breakdown = BTreeMap::new();

        let count_points = match d.count {
            0 => dec!(0),
            1..=2 => dec!(1),
            3..=4 => dec!(2),
            _ => dec!(3),
        };
        breakdown.insert("count".to_string(), count_points);

        let load: Decimal = d
            .dependents
            .iter()
            .map(|dep| match dep.dependency_level {
                Some(DependencyLevel::Full) => dec!(1.5),
                Some(DependencyLevel::Partial) => dec!(1.0),
                Some(DependencyLevel::Minimal) => dec!(0.5),
                None => Decimal::ZERO,
            })
            .sum();
        breakdown.insert("dependency_load".to_string(), load.min(dec!(2.5)));

        let elderly: Decimal = d
            .dependents
            .iter()
            .filter(|dep| dep.age.is_some_and(|a| a >= 60))
            .map(|_| dec!(0.5))
            .sum();
        breakdown.insert("elderly_dependents".to_string(), elderly.min(dec!(1.5)));

        CategoryScore::from_breakdown(dec!(6), breakdown)
    }

    /// Insurance history: existing life and health cover, claims, lapses
    /// (max 4)
    fn score_insurance_history(profile: &ClientProfile) -> CategoryScore {
        let h = &profile.insurance_history;
        let mut breakdown = BTreeMap::new();

        let life_points = if h.has_life_insurance.unwrap_or(false) {
            dec!(0)
        } else {
            dec!(1)
        };
        breakdown.insert("no_life_insurance".to_string(), life_points);

        let health_points = if h.has_health_insurance.unwrap_or(false) {
            dec!(0)
        } else {
            dec!(1)
        };
        breakdown.insert("no_health_insurance".to_string(), health_points);

        let claims = h.claim_count_last_5yrs.unwrap_or(0);
        let claim_points = match claims {
            0 => dec!(0),
            1..=2 => dec!(1),
            _ => dec!(2),
        };
        breakdown.insert("claims".to_string(), claim_points);

        let lapse_points = if h.has_lapsed_policy.unwrap_or(false) {
            dec!(1)
        } else {
            dec!(0)
        };
        breakdown.insert("lapsed_policy".to_string(), lapse_points);

        CategoryScore::from_breakdown(dec!(4), breakdown)
    }

    /// Coverage adequacy: life cover multiple of income, health cover (max 3)
    fn score_coverage(profile: &ClientProfile) -> CategoryScore {
        let c = &profile.coverage;
        let mut breakdown = BTreeMap::new();

        let life_points = match c.life_coverage_multiple_of_income {
            Some(m) if m >= dec!(10) => dec!(0),
            Some(m) if m >= dec!(5) => dec!(1),
            _ => dec!(2),
        };
        breakdown.insert("life_coverage".to_string(), life_points);

        let health = c.health_coverage_lakhs.unwrap_or(Decimal::ZERO);
        let health_points = if health >= dec!(5) {
            dec!(0)
        } else if health >= dec!(2) {
            dec!(0.5)
        } else {
            dec!(1)
        };
        breakdown.insert("health_coverage".to_string(), health_points);

        CategoryScore::from_breakdown(dec!(3), breakdown)
    }
}

/// BMI bands shared between the lifestyle and medical categories
fn bmi_points(bmi: Option<Decimal>) -> Decimal {
    match bmi {
        Some(b) if b >= dec!(18.5) && b <= dec!(24.9) => dec!(0),
        Some(b) if b >= dec!(25) && b <= dec!(29.9) => dec!(1),
        Some(_) => dec!(2),
        None => dec!(1),
    }
}

fn lower_or_empty(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("").to_lowercase()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
