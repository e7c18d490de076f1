//! Eligibility evaluation
//!
//! Scores one applicant snapshot against every rule set in a catalog. Five
//! criteria are checked per rule set (age, license seniority, bonus-malus,
//! prior insurance, claims history); each failed or unverifiable criterion
//! subtracts a fixed penalty from a starting score of 100. Business outcomes
//! are never errors: absent snapshot fields degrade to missing-information
//! findings.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use core_kernel::CLAIMS_LOOKBACK;

use crate::applicant::ApplicantSnapshot;
use crate::catalog::Catalog;
use crate::error::EligibilityError;
use crate::report::{generate_report, EligibilityReport};
use crate::ruleset::{CeilingCategory, RuleSet};

/// Minimum score required for eligibility
pub const ELIGIBILITY_SCORE_THRESHOLD: u8 = 70;

/// The five criteria every rule set is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    Age,
    LicenseSeniority,
    BonusMalus,
    PriorInsurance,
    ClaimsHistory,
}

impl Criterion {
    /// Score penalty when the criterion fails or cannot be verified
    pub fn penalty(&self) -> i32 {
        match self {
            Criterion::Age => 30,
            Criterion::LicenseSeniority => 25,
            Criterion::BonusMalus => 20,
            Criterion::PriorInsurance => 15,
            Criterion::ClaimsHistory => 20,
        }
    }
}

/// How a single criterion check turned out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Requirement met; explanation recorded, no penalty
    Pass,
    /// Requirement explicitly violated; penalty applied
    Fail,
    /// Snapshot lacks the data to verify; penalty applied and eligibility blocked
    MissingData,
    /// Soft concern; warning recorded, no penalty
    Caution,
}

/// Outcome of one criterion check against one rule set
#[derive(Debug, Clone)]
pub struct CriterionCheck {
    pub criterion: Criterion,
    pub disposition: Disposition,
    pub message: String,
    /// Additional warnings to surface alongside the check
    pub extra_warnings: Vec<String>,
}

impl CriterionCheck {
    fn new(criterion: Criterion, disposition: Disposition, message: String) -> Self {
        Self {
            criterion,
            disposition,
            message,
            extra_warnings: Vec::new(),
        }
    }
}

/// Per-product evaluation outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    /// Product the applicant was scored against
    pub product: String,
    /// Whether the applicant qualifies for the product
    pub eligible: bool,
    /// Score in [0, 100]
    pub score: u8,
    /// Pass/fail explanations in criterion order
    pub reasons: Vec<String>,
    /// Soft concerns that do not by themselves block eligibility
    pub warnings: Vec<String>,
    /// Data the snapshot lacked; any entry blocks eligibility
    pub missing_info: Vec<String>,
}

fn check_age(snapshot: &ApplicantSnapshot, rule_set: &RuleSet, as_of: NaiveDate) -> CriterionCheck {
    if rule_set.age.is_unbounded() {
        return CriterionCheck::new(
            Criterion::Age,
            Disposition::Pass,
            "No age requirement for this product".to_string(),
        );
    }
    match snapshot.age_at(as_of) {
        None => CriterionCheck::new(
            Criterion::Age,
            Disposition::MissingData,
            "Date of birth not provided; age cannot be verified".to_string(),
        ),
        Some(age) if rule_set.age.contains(age) => CriterionCheck::new(
            Criterion::Age,
            Disposition::Pass,
            format!("Age {} is within the accepted range ({})", age, rule_set.age),
        ),
        Some(age) => CriterionCheck::new(
            Criterion::Age,
            Disposition::Fail,
            format!("Age {} is outside the accepted range ({})", age, rule_set.age),
        ),
    }
}

fn check_license(
    snapshot: &ApplicantSnapshot,
    rule_set: &RuleSet,
    as_of: NaiveDate,
) -> CriterionCheck {
    let Some(required_years) = rule_set.license_seniority_years else {
        return CriterionCheck::new(
            Criterion::LicenseSeniority,
            Disposition::Pass,
            "No license seniority requirement for this product".to_string(),
        );
    };
    match snapshot.license_years_at(as_of) {
        None => CriterionCheck::new(
            Criterion::LicenseSeniority,
            Disposition::MissingData,
            "License issue date not provided; seniority cannot be verified".to_string(),
        ),
        Some(years) if years >= required_years => CriterionCheck::new(
            Criterion::LicenseSeniority,
            Disposition::Pass,
            format!(
                "License seniority of {} years meets the minimum of {} years",
                years, required_years
            ),
        ),
        Some(years) => CriterionCheck::new(
            Criterion::LicenseSeniority,
            Disposition::Fail,
            format!(
                "License seniority of {} years is below the minimum of {} years",
                years, required_years
            ),
        ),
    }
}

fn check_bonus_malus(snapshot: &ApplicantSnapshot, rule_set: &RuleSet) -> CriterionCheck {
    if rule_set.bonus_malus.is_unbounded() {
        return CriterionCheck::new(
            Criterion::BonusMalus,
            Disposition::Pass,
            "No bonus-malus requirement for this product".to_string(),
        );
    }
    match snapshot.bonus_malus {
        None => CriterionCheck::new(
            Criterion::BonusMalus,
            Disposition::MissingData,
            "Bonus-malus coefficient not provided".to_string(),
        ),
        Some(coefficient) if rule_set.bonus_malus.contains(coefficient) => CriterionCheck::new(
            Criterion::BonusMalus,
            Disposition::Pass,
            format!(
                "Bonus-malus coefficient {} is within the accepted range ({})",
                coefficient, rule_set.bonus_malus
            ),
        ),
        Some(coefficient) => CriterionCheck::new(
            Criterion::BonusMalus,
            Disposition::Fail,
            format!(
                "Bonus-malus coefficient {} is outside the accepted range ({})",
                coefficient, rule_set.bonus_malus
            ),
        ),
    }
}

fn check_prior_insurance(snapshot: &ApplicantSnapshot, rule_set: &RuleSet) -> CriterionCheck {
    let requirement = &rule_set.prior_insurance;
    if requirement.is_none_required() {
        return CriterionCheck::new(
            Criterion::PriorInsurance,
            Disposition::Pass,
            "No prior insurance requirement for this product".to_string(),
        );
    }
    let Some(months) = snapshot.prior_insurance_months else {
        // Gaps in the prior-insurance record are a soft concern, not a blocker
        return CriterionCheck::new(
            Criterion::PriorInsurance,
            Disposition::Caution,
            format!(
                "Prior insurance duration not provided; {} months required",
                requirement.min_months
            ),
        );
    };
    if months < requirement.min_months {
        return CriterionCheck::new(
            Criterion::PriorInsurance,
            Disposition::Fail,
            format!(
                "Prior insurance of {} months is below the required {} months",
                months, requirement.min_months
            ),
        );
    }
    match (requirement.category, snapshot.prior_insurance_category) {
        (Some(required), Some(held)) if required != held => CriterionCheck::new(
            Criterion::PriorInsurance,
            Disposition::Fail,
            format!(
                "Prior insurance held as {} does not match the required {} capacity",
                held, required
            ),
        ),
        (Some(required), None) => CriterionCheck::new(
            Criterion::PriorInsurance,
            Disposition::Caution,
            format!(
                "Prior insurance category not stated; {} capacity required",
                required
            ),
        ),
        (Some(required), Some(_)) => CriterionCheck::new(
            Criterion::PriorInsurance,
            Disposition::Pass,
            format!(
                "Prior insurance of {} months held as {} meets the requirement",
                months, required
            ),
        ),
        (None, _) => CriterionCheck::new(
            Criterion::PriorInsurance,
            Disposition::Pass,
            format!(
                "Prior insurance of {} months meets the required {} months",
                months, requirement.min_months
            ),
        ),
    }
}

fn check_claims(
    snapshot: &ApplicantSnapshot,
    rule_set: &RuleSet,
    as_of: NaiveDate,
) -> CriterionCheck {
    let Some(windowed) = snapshot.claims_within(CLAIMS_LOOKBACK, as_of) else {
        return CriterionCheck::new(
            Criterion::ClaimsHistory,
            Disposition::MissingData,
            "Claims history not provided".to_string(),
        );
    };

    let mut counts: HashMap<CeilingCategory, u32> = HashMap::new();
    for claim in &windowed {
        if let Some(category) = claim.ceiling_category() {
            *counts.entry(category).or_insert(0) += 1;
        }
    }

    let mut exceeded: Vec<String> = Vec::new();
    for category in CeilingCategory::ALL {
        let count = counts.get(&category).copied().unwrap_or(0);
        let limit = rule_set.max_claims_36_months.limit_for(category);
        if count > limit {
            exceeded.push(format!("{} {} (limit {})", count, category.label(), limit));
        }
    }

    if exceeded.is_empty() {
        return CriterionCheck::new(
            Criterion::ClaimsHistory,
            Disposition::Pass,
            format!(
                "{} claims in the last {} months, all within the partner ceilings",
                windowed.len(),
                CLAIMS_LOOKBACK.months()
            ),
        );
    }

    let mut check = CriterionCheck::new(
        Criterion::ClaimsHistory,
        Disposition::Fail,
        format!("Claim ceilings exceeded: {}", exceeded.join(", ")),
    );
    if let Some(note) = &rule_set.responsibility_note {
        check.extra_warnings.push(note.clone());
    }
    check
}

/// Scores one applicant snapshot against one rule set
///
/// Pure function over its inputs; the internal score may go negative, the
/// published score is clamped to [0, 100].
pub fn evaluate_rule_set(
    snapshot: &ApplicantSnapshot,
    rule_set: &RuleSet,
    as_of: NaiveDate,
) -> EligibilityResult {
    let checks = [
        check_age(snapshot, rule_set, as_of),
        check_license(snapshot, rule_set, as_of),
        check_bonus_malus(snapshot, rule_set),
        check_prior_insurance(snapshot, rule_set),
        check_claims(snapshot, rule_set, as_of),
    ];

    let mut score: i32 = 100;
    let mut reasons = Vec::new();
    let mut warnings = Vec::new();
    let mut missing_info = Vec::new();

    for check in checks {
        match check.disposition {
            Disposition::Pass => reasons.push(check.message),
            Disposition::Fail => {
                score -= check.criterion.penalty();
                reasons.push(check.message);
            }
            Disposition::MissingData => {
                score -= check.criterion.penalty();
                missing_info.push(check.message);
            }
            Disposition::Caution => warnings.push(check.message),
        }
        warnings.extend(check.extra_warnings);
    }

    let score = score.clamp(0, 100) as u8;
    let eligible = score >= ELIGIBILITY_SCORE_THRESHOLD && missing_info.is_empty();

    debug!(
        product = %rule_set.product,
        score,
        eligible,
        missing = missing_info.len(),
        "rule set evaluated"
    );

    EligibilityResult {
        product: rule_set.product.clone(),
        eligible,
        score,
        reasons,
        warnings,
        missing_info,
    }
}

/// Scores one applicant snapshot against every rule set, in catalog order
pub fn evaluate(
    snapshot: &ApplicantSnapshot,
    catalog: &[RuleSet],
    as_of: NaiveDate,
) -> Vec<EligibilityResult> {
    catalog
        .iter()
        .map(|rule_set| evaluate_rule_set(snapshot, rule_set, as_of))
        .collect()
}

/// Stateless evaluation service over a loaded catalog
///
/// Safe to share across concurrent callers: evaluation is a pure function
/// and the catalog is read-only after construction.
pub struct EligibilityService {
    catalog: Catalog,
}

impl EligibilityService {
    /// Creates a service over an already-loaded catalog
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Creates a service over the partner catalog shipped with the crate
    pub fn with_builtin_catalog() -> Result<Self, EligibilityError> {
        Ok(Self::new(Catalog::builtin()?))
    }

    /// The catalog this service evaluates against
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Evaluates a snapshot as of today
    pub fn evaluate(&self, snapshot: &ApplicantSnapshot) -> Vec<EligibilityResult> {
        self.evaluate_at(snapshot, Utc::now().date_naive())
    }

    /// Evaluates a snapshot as of an explicit date
    pub fn evaluate_at(
        &self,
        snapshot: &ApplicantSnapshot,
        as_of: NaiveDate,
    ) -> Vec<EligibilityResult> {
        evaluate(snapshot, self.catalog.rule_sets(), as_of)
    }

    /// Builds the full report for a snapshot as of today
    pub fn generate_report(&self, snapshot: &ApplicantSnapshot) -> EligibilityReport {
        self.generate_report_at(snapshot, Utc::now().date_naive())
    }

    /// Builds the full report for a snapshot as of an explicit date
    pub fn generate_report_at(
        &self,
        snapshot: &ApplicantSnapshot,
        as_of: NaiveDate,
    ) -> EligibilityReport {
        generate_report(snapshot, self.catalog.rule_sets(), as_of)
    }
}
