//! Raw form to profile normalization
//!
//! Every derivation here is forgiving: a missing or malformed field yields
//! `None` (or the documented default) so the scoring engine can apply its own
//! worst-case or neutral defaults. Nothing in this module returns an error.

use chrono::{Datelike, NaiveDate, Utc};
use core_kernel::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_underwriting::{
    ClientProfile, CoverageInfo, Dependent, DependencyLevel, DependentInfo,
    FinancialInfo, InsuranceHistory, LifestyleInfo, MedicalInfo, PersonalInfo,
    PreferenceInfo,
};

use crate::locations::tier_for_city;
use crate::raw::{RawApplication, RawDependent};

/// Normalizes raw applications against a fixed reference date
///
/// The reference date drives age and checkup-recency derivations; injecting
/// it keeps normalization deterministic under test.
#[derive(Debug, Clone, Copy)]
pub struct ProfileNormalizer {
    as_of: NaiveDate,
}

impl ProfileNormalizer {
    pub fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    /// Convenience constructor anchored to the current date
    pub fn today() -> Self {
        Self::new(Utc::now().date_naive())
    }

    /// Converts a raw application into a scoring-ready profile
    pub fn normalize(&self, raw: &RawApplication) -> ClientProfile {
        let profile = ClientProfile {
            personal: self.normalize_personal(raw),
            lifestyle: self.normalize_lifestyle(raw),
            financial: self.normalize_financial(raw),
            medical: self.normalize_medical(raw),
            preferences: self.normalize_preferences(raw),
            dependents: self.normalize_dependents(raw),
            insurance_history: self.normalize_insurance_history(raw),
            coverage: self.normalize_coverage(raw),
        };
        tracing::debug!(
            age = ?profile.personal.age,
            income_lakhs = ?profile.financial.annual_income_lakhs,
            dependents = profile.dependents.count,
            "application normalized"
        );
        profile
    }

    fn normalize_personal(&self, raw: &RawApplication) -> PersonalInfo {
        let b = &raw.basic_info;
        PersonalInfo {
            age: self.derive_age(b.dob.as_deref(), b.age.as_deref()),
            gender: non_empty(&b.gender),
            marital_status: non_empty(&b.marital_status),
            city: non_empty(&b.city),
            location_tier: non_empty(&b.city).map(|c| tier_for_city(&c)),
        }
    }

    fn normalize_lifestyle(&self, raw: &RawApplication) -> LifestyleInfo {
        let l = &raw.lifestyle_info;
        let m = &raw.medical_info;
        LifestyleInfo {
            occupation: non_empty(&l.occupation),
            working_type: non_empty(&l.working_type),
            daily_steps: parse_u32(&l.steps_per_day),
            sleep_hours: derive_sleep_hours(&l.sleep_hours),
            bmi: derive_bmi(m.height.as_deref(), m.weight.as_deref(), m.bmi.as_deref()),
            is_smoker: yes_no(&l.smoker),
            alcohol_consumption: non_empty(&l.alcohol),
            commute_type: non_empty(&l.commute_type),
        }
    }

    fn normalize_financial(&self, raw: &RawApplication) -> FinancialInfo {
        let f = &raw.financial_info;
        let salary = parse_decimal(&f.monthly_salary).filter(|s| *s > Decimal::ZERO);
        let expenses = parse_decimal(&f.monthly_expenses).unwrap_or(Decimal::ZERO);
        let emis = parse_decimal(&f.existing_emis).unwrap_or(Decimal::ZERO);
        let bnpl = parse_decimal(&f.bnpl_obligations).unwrap_or(Decimal::ZERO);

        let disposable = salary.map(|s| {
            let pct = (s - expenses - emis - bnpl) / s * dec!(100);
            pct.max(Decimal::ZERO).round_dp(1)
        });
        let emi_load = salary.map(|s| ((emis + bnpl) / s * dec!(100)).round_dp(1));

        FinancialInfo {
            employment_status: non_empty(&f.employment_status),
            annual_income_lakhs: parse_decimal(&f.total_ctc)
                .map(|ctc| Money::inr(ctc).to_lakhs()),
            disposable_income_percent: disposable,
            emi_load_percent: emi_load,
        }
    }

    fn normalize_medical(&self, raw: &RawApplication) -> MedicalInfo {
        let m = &raw.medical_info;
        MedicalInfo {
            pre_existing_conditions: parse_free_text_list(&m.pre_existing_conditions),
            months_since_checkup: self.derive_checkup_months(m.last_health_checkup.as_deref()),
            allergies: parse_free_text_list(&m.allergies),
        }
    }

    fn normalize_preferences(&self, raw: &RawApplication) -> PreferenceInfo {
        let p = &raw.preferences_info;
        PreferenceInfo {
            budget_flexibility: non_empty(&p.budget_flexibility),
            riders_willingness: yes_no(&p.willingness_for_riders),
            // Anything but an explicit "no" counts as flexible
            deductible_flexibility: non_empty(&p.deductible_flexibility)
                .map(|v| !v.eq_ignore_ascii_case("no")),
            risk_tolerance: non_empty(&p.risk_tolerance),
        }
    }

    fn normalize_dependents(&self, raw: &RawApplication) -> DependentInfo {
        let f = &raw.family_info;
        let dependents: Vec<Dependent> =
            f.dependents.iter().map(normalize_dependent).collect();
        DependentInfo {
            count: parse_u32(&f.num_dependents).unwrap_or(dependents.len() as u32),
            dependents,
        }
    }

    fn normalize_insurance_history(&self, raw: &RawApplication) -> InsuranceHistory {
        let c = &raw.coverage_info;
        InsuranceHistory {
            has_life_insurance: Some(!c.existing_life_policies.is_empty()),
            has_health_insurance: Some(!c.existing_health_policies.is_empty()),
            claim_count_last_5yrs: Some(c.claim_history.len() as u32),
            has_lapsed_policy: Some(!c.policy_lapse_history.is_empty()),
        }
    }

    fn normalize_coverage(&self, raw: &RawApplication) -> CoverageInfo {
        let c = &raw.coverage_info;
        let f = &raw.financial_info;

        let life_multiple = match (parse_decimal(&c.total_life_coverage), parse_decimal(&f.total_ctc)) {
            (Some(cover), Some(income)) => Money::inr(cover)
                .ratio_to(&Money::inr(income))
                .ok()
                .map(|m| m.round_dp(1)),
            _ => None,
        };

        CoverageInfo {
            life_coverage_multiple_of_income: life_multiple,
            health_coverage_lakhs: parse_decimal(&c.total_health_coverage)
                .map(|amount| Money::inr(amount).to_lakhs()),
        }
    }

    /// Age from date of birth by calendar-year difference, falling back to
    /// the raw age field
    fn derive_age(&self, dob: Option<&str>, raw_age: Option<&str>) -> Option<u32> {
        let from_dob = dob
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(|d| (self.as_of.year() - d.year()).max(0) as u32);
        from_dob.or_else(|| raw_age.and_then(|a| a.trim().parse().ok()))
    }

    /// Whole months since the last checkup (30-day months), defaulting to 36
    fn derive_checkup_months(&self, checkup: Option<&str>) -> Option<u32> {
        let date = NaiveDate::parse_from_str(checkup?, "%Y-%m-%d").ok()?;
        let days = (self.as_of - date).num_days().max(0);
        Some((days / 30) as u32)
    }
}

/// BMI from height (cm) and weight (kg), rounded to one decimal place,
/// falling back to the raw BMI field
fn derive_bmi(height: Option<&str>, weight: Option<&str>, raw_bmi: Option<&str>) -> Option<Decimal> {
    let computed = match (
        height.and_then(|h| h.trim().parse::<Decimal>().ok()),
        weight.and_then(|w| w.trim().parse::<Decimal>().ok()),
    ) {
        (Some(h), Some(w)) if h > Decimal::ZERO => {
            let height_m = h / dec!(100);
            Some((w / (height_m * height_m)).round_dp(1))
        }
        _ => None,
    };
    computed.or_else(|| raw_bmi.and_then(|b| b.trim().parse().ok()))
}

/// Sleep hours; a present but unparseable value degrades to zero hours,
/// which scores as the worst sleep band
fn derive_sleep_hours(raw: &Option<String>) -> Option<Decimal> {
    let value = non_empty(raw)?;
    Some(value.trim().parse().unwrap_or(Decimal::ZERO))
}

/// Free-text medical fields: "none"/"no"/empty mean an empty list, anything
/// else is carried as a single entry
fn parse_free_text_list(raw: &Option<String>) -> Vec<String> {
    match non_empty(raw) {
        Some(text) if !matches!(text.to_lowercase().as_str(), "none" | "no") => vec![text],
        _ => Vec::new(),
    }
}

fn normalize_dependent(raw: &RawDependent) -> Dependent {
    let level = raw.dependency_level.as_deref().and_then(|l| {
        match l.trim().to_lowercase().as_str() {
            "full" => Some(DependencyLevel::Full),
            "partial" => Some(DependencyLevel::Partial),
            "minimal" => Some(DependencyLevel::Minimal),
            _ => None,
        }
    });
    Dependent {
        age: raw.age.as_deref().and_then(|a| a.trim().parse().ok()),
        dependency_level: level,
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn yes_no(value: &Option<String>) -> Option<bool> {
    non_empty(value).map(|v| v.eq_ignore_ascii_case("yes"))
}

fn parse_decimal(value: &Option<String>) -> Option<Decimal> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

fn parse_u32(value: &Option<String>) -> Option<u32> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}
