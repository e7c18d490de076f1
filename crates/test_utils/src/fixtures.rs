//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for eligibility evaluations. These
//! fixtures are fixed in time so tests stay deterministic regardless of
//! when they run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_eligibility::{
    AgeRange, BonusRange, ClaimCeilings, PriorInsuranceCategory, PriorInsuranceRequirement,
    RuleSet,
};

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard evaluation date all fixtures are calibrated against
    pub fn evaluation_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    /// Date of birth of a 30-year-old applicant at the evaluation date
    pub fn dob_age_30() -> NaiveDate {
        NaiveDate::from_ymd_opt(1995, 3, 10).unwrap()
    }

    /// License issue date giving 10 full years of seniority
    pub fn license_10_years() -> NaiveDate {
        NaiveDate::from_ymd_opt(2015, 6, 1).unwrap()
    }

    /// A claim date inside the 36-month window
    pub fn recent_claim_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    /// A claim date 37 months before the evaluation date
    pub fn stale_claim_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 5, 15).unwrap()
    }
}

/// Fixture for bonus-malus coefficients
pub struct BonusFixtures;

impl BonusFixtures {
    /// Neutral coefficient
    pub fn neutral() -> Decimal {
        dec!(1.00)
    }

    /// Well-bonused driver
    pub fn bonused() -> Decimal {
        dec!(0.60)
    }

    /// Surcharged driver, above most partner ceilings
    pub fn malussed() -> Decimal {
        dec!(2.00)
    }
}

/// Fixture for partner rule sets
pub struct RuleSetFixtures;

impl RuleSetFixtures {
    /// The VTC product from the standard partner catalog
    pub fn vtc_product() -> RuleSet {
        RuleSet {
            product: "Zéphir VTC Taxi".to_string(),
            age: AgeRange { min: Some(25), max: Some(65) },
            license_seniority_years: Some(5),
            bonus_malus: BonusRange { min: None, max: Some(dec!(1.50)) },
            prior_insurance: PriorInsuranceRequirement {
                min_months: 12,
                category: Some(PriorInsuranceCategory::Vtc),
            },
            max_claims_36_months: ClaimCeilings {
                bodily_responsible: 1,
                bodily_non_responsible: 1,
                material_responsible: 3,
                material_non_responsible: 3,
                parking: 1,
                glass_breakage: 2,
                theft_fire: 1,
                aggravating: 0,
            },
            responsibility_note: None,
        }
    }

    /// A product that tolerates no claims at all
    pub fn zero_tolerance_product() -> RuleSet {
        let mut rule_set = Self::vtc_product();
        rule_set.product = "Zero Tolerance".to_string();
        rule_set.max_claims_36_months = ClaimCeilings::none_allowed();
        rule_set
    }
}
