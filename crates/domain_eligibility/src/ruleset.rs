//! Partner rule sets
//!
//! One `RuleSet` per insurance partner/product. All thresholds are typed
//! numeric ranges; the catalog format carries no free-text rules, so a
//! malformed entry fails at load time instead of silently passing a
//! criterion.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::applicant::PriorInsuranceCategory;

/// Accepted applicant age band, with optional open ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    #[serde(default)]
    pub min: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
}

impl AgeRange {
    pub fn contains(&self, age: u32) -> bool {
        self.min.map(|min| age >= min).unwrap_or(true)
            && self.max.map(|max| age <= max).unwrap_or(true)
    }

    /// Whether the rule set constrains age at all
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "{} to {}", min, max),
            (Some(min), None) => write!(f, "at least {}", min),
            (None, Some(max)) => write!(f, "at most {}", max),
            (None, None) => write!(f, "unrestricted"),
        }
    }
}

/// Accepted bonus-malus coefficient band, with optional open ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusRange {
    #[serde(default)]
    pub min: Option<Decimal>,
    #[serde(default)]
    pub max: Option<Decimal>,
}

impl BonusRange {
    pub fn contains(&self, coefficient: Decimal) -> bool {
        self.min.map(|min| coefficient >= min).unwrap_or(true)
            && self.max.map(|max| coefficient <= max).unwrap_or(true)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl fmt::Display for BonusRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "between {} and {}", min, max),
            (Some(min), None) => write!(f, "at least {}", min),
            (None, Some(max)) => write!(f, "at most {}", max),
            (None, None) => write!(f, "unrestricted"),
        }
    }
}

/// Minimum prior-insurance record required by a partner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorInsuranceRequirement {
    /// Minimum continuous duration in months
    pub min_months: u32,
    /// Capacity the prior insurance must have been held in, if constrained
    #[serde(default)]
    pub category: Option<PriorInsuranceCategory>,
}

impl PriorInsuranceRequirement {
    /// Whether the partner requires any prior insurance at all
    pub fn is_none_required(&self) -> bool {
        self.min_months == 0 && self.category.is_none()
    }
}

/// Claim categories the partner rule tables set ceilings for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CeilingCategory {
    BodilyResponsible,
    BodilyNonResponsible,
    MaterialResponsible,
    MaterialNonResponsible,
    Parking,
    GlassBreakage,
    TheftFire,
    Aggravating,
}

impl CeilingCategory {
    pub const ALL: [CeilingCategory; 8] = [
        CeilingCategory::BodilyResponsible,
        CeilingCategory::BodilyNonResponsible,
        CeilingCategory::MaterialResponsible,
        CeilingCategory::MaterialNonResponsible,
        CeilingCategory::Parking,
        CeilingCategory::GlassBreakage,
        CeilingCategory::TheftFire,
        CeilingCategory::Aggravating,
    ];

    /// Human-readable label for report messages
    pub fn label(&self) -> &'static str {
        match self {
            CeilingCategory::BodilyResponsible => "responsible bodily claims",
            CeilingCategory::BodilyNonResponsible => "non-responsible bodily claims",
            CeilingCategory::MaterialResponsible => "responsible material claims",
            CeilingCategory::MaterialNonResponsible => "non-responsible material claims",
            CeilingCategory::Parking => "parking claims",
            CeilingCategory::GlassBreakage => "glass breakage claims",
            CeilingCategory::TheftFire => "theft or fire claims",
            CeilingCategory::Aggravating => "aggravating cases",
        }
    }
}

/// Per-category claim-count ceilings over the trailing 36-month window
///
/// A ceiling of 0 disqualifies on the first claim in that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimCeilings {
    pub bodily_responsible: u32,
    pub bodily_non_responsible: u32,
    pub material_responsible: u32,
    pub material_non_responsible: u32,
    pub parking: u32,
    pub glass_breakage: u32,
    pub theft_fire: u32,
    pub aggravating: u32,
}

impl ClaimCeilings {
    /// The ceiling for one category
    pub fn limit_for(&self, category: CeilingCategory) -> u32 {
        match category {
            CeilingCategory::BodilyResponsible => self.bodily_responsible,
            CeilingCategory::BodilyNonResponsible => self.bodily_non_responsible,
            CeilingCategory::MaterialResponsible => self.material_responsible,
            CeilingCategory::MaterialNonResponsible => self.material_non_responsible,
            CeilingCategory::Parking => self.parking,
            CeilingCategory::GlassBreakage => self.glass_breakage,
            CeilingCategory::TheftFire => self.theft_fire,
            CeilingCategory::Aggravating => self.aggravating,
        }
    }

    /// Ceilings that reject any claim of any category
    pub const fn none_allowed() -> Self {
        Self {
            bodily_responsible: 0,
            bodily_non_responsible: 0,
            material_responsible: 0,
            material_non_responsible: 0,
            parking: 0,
            glass_breakage: 0,
            theft_fire: 0,
            aggravating: 0,
        }
    }
}

/// Underwriting rule set for one partner product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Product name, unique within a catalog
    pub product: String,
    /// Accepted applicant age band
    #[serde(default)]
    pub age: AgeRange,
    /// Minimum full years since license issuance, if constrained
    #[serde(default)]
    pub license_seniority_years: Option<u32>,
    /// Accepted bonus-malus coefficient band
    #[serde(default)]
    pub bonus_malus: BonusRange,
    /// Required prior-insurance record
    #[serde(default)]
    pub prior_insurance: PriorInsuranceRequirement,
    /// Per-category claim ceilings over the trailing 36 months
    pub max_claims_36_months: ClaimCeilings,
    /// Partner's responsibility policy, surfaced when the claims check fails
    #[serde(default)]
    pub responsibility_note: Option<String>,
}

impl RuleSet {
    /// Checks internal coherence of the thresholds
    pub fn validate(&self) -> Result<(), String> {
        if self.product.trim().is_empty() {
            return Err("product name must not be empty".to_string());
        }
        if let (Some(min), Some(max)) = (self.age.min, self.age.max) {
            if min > max {
                return Err(format!("age range {} to {} is inverted", min, max));
            }
        }
        if let (Some(min), Some(max)) = (self.bonus_malus.min, self.bonus_malus.max) {
            if min > max {
                return Err(format!("bonus-malus range between {} and {} is inverted", min, max));
            }
        }
        if let Some(min) = self.bonus_malus.min {
            if min < Decimal::ZERO {
                return Err("bonus-malus bounds must be non-negative".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_rule_set() -> RuleSet {
        RuleSet {
            product: "Test VTC".to_string(),
            age: AgeRange { min: Some(25), max: Some(65) },
            license_seniority_years: Some(5),
            bonus_malus: BonusRange { min: None, max: Some(dec!(1.50)) },
            prior_insurance: PriorInsuranceRequirement {
                min_months: 12,
                category: Some(PriorInsuranceCategory::Vtc),
            },
            max_claims_36_months: ClaimCeilings::none_allowed(),
            responsibility_note: None,
        }
    }

    #[test]
    fn test_age_range_bounds_are_inclusive() {
        let range = AgeRange { min: Some(25), max: Some(65) };
        assert!(range.contains(25));
        assert!(range.contains(65));
        assert!(!range.contains(24));
        assert!(!range.contains(66));
    }

    #[test]
    fn test_open_ended_ranges() {
        let range = AgeRange { min: Some(25), max: None };
        assert!(range.contains(99));
        assert!(!range.contains(20));
        assert!(AgeRange::default().contains(0));
    }

    #[test]
    fn test_bonus_range_display() {
        let range = BonusRange { min: Some(dec!(0.50)), max: Some(dec!(1.00)) };
        assert_eq!(range.to_string(), "between 0.50 and 1.00");
        let range = BonusRange { min: None, max: Some(dec!(1.50)) };
        assert_eq!(range.to_string(), "at most 1.50");
    }

    #[test]
    fn test_validate_accepts_coherent_rule_set() {
        assert!(sample_rule_set().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_age_range() {
        let mut rule_set = sample_rule_set();
        rule_set.age = AgeRange { min: Some(65), max: Some(25) };
        assert!(rule_set.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_product_name() {
        let mut rule_set = sample_rule_set();
        rule_set.product = "  ".to_string();
        assert!(rule_set.validate().is_err());
    }

    #[test]
    fn test_ceiling_lookup_covers_all_categories() {
        let ceilings = ClaimCeilings {
            bodily_responsible: 1,
            bodily_non_responsible: 2,
            material_responsible: 3,
            material_non_responsible: 4,
            parking: 5,
            glass_breakage: 6,
            theft_fire: 7,
            aggravating: 8,
        };
        let seen: Vec<u32> = CeilingCategory::ALL
            .iter()
            .map(|c| ceilings.limit_for(*c))
            .collect();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
