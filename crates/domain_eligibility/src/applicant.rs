//! Applicant snapshot and claims history
//!
//! The snapshot is the complete input to one evaluation: identity dates,
//! bonus-malus coefficient, prior-insurance record, and the claims the
//! applicant declared. Every field the caller could not supply is `None`;
//! the engine turns absent fields into missing-information findings rather
//! than errors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{age_at, full_years_between, ApplicantId, ClaimId, LookbackWindow};

use crate::ruleset::CeilingCategory;

/// Prior-insurance capacity recognized by partner rule tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorInsuranceCategory {
    /// Chauffeur-driven private-hire vehicle
    Vtc,
    /// Licensed taxi
    Taxi,
    /// Private individual
    Particulier,
}

impl fmt::Display for PriorInsuranceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriorInsuranceCategory::Vtc => "VTC",
            PriorInsuranceCategory::Taxi => "Taxi",
            PriorInsuranceCategory::Particulier => "Particulier",
        };
        write!(f, "{}", label)
    }
}

/// Claim classification used by French motor insurers
///
/// RC levels encode the declared share of responsibility: RC100 is fully
/// at fault, RC50 partially, RC0 not at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimType {
    MaterialRc100,
    MaterialRc50,
    MaterialRc0,
    BodilyRc100,
    BodilyRc50,
    BodilyRc0,
    GlassBreakage,
    Theft,
    Fire,
    NaturalDisaster,
}

impl ClaimType {
    /// Returns the responsibility share implied by the RC level, if any
    pub fn implied_responsibility(&self) -> Option<u8> {
        match self {
            ClaimType::MaterialRc100 | ClaimType::BodilyRc100 => Some(100),
            ClaimType::MaterialRc50 | ClaimType::BodilyRc50 => Some(50),
            ClaimType::MaterialRc0 | ClaimType::BodilyRc0 => Some(0),
            _ => None,
        }
    }

    fn is_bodily(&self) -> bool {
        matches!(
            self,
            ClaimType::BodilyRc100 | ClaimType::BodilyRc50 | ClaimType::BodilyRc0
        )
    }

    fn is_material(&self) -> bool {
        matches!(
            self,
            ClaimType::MaterialRc100 | ClaimType::MaterialRc50 | ClaimType::MaterialRc0
        )
    }
}

/// A single prior claim declared by the applicant
///
/// Claims are immutable input to the engine; evaluation never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Claim classification
    pub claim_type: ClaimType,
    /// Date of loss
    pub date: NaiveDate,
    /// Settled amount, if known
    pub amount: Option<Decimal>,
    /// Declared responsibility share (0-100), overrides the RC level
    pub responsibility_percent: Option<u8>,
    /// Insurer that handled the claim
    pub insurer: Option<String>,
}

impl Claim {
    /// Creates a claim with only the fields every declaration carries
    pub fn new(claim_type: ClaimType, date: NaiveDate) -> Self {
        Self {
            id: ClaimId::new_v7(),
            claim_type,
            date,
            amount: None,
            responsibility_percent: None,
            insurer: None,
        }
    }

    /// Responsibility share for this claim, declared or implied by type
    pub fn responsibility(&self) -> Option<u8> {
        self.responsibility_percent
            .or_else(|| self.claim_type.implied_responsibility())
    }

    /// Whether the applicant bears any share of fault
    pub fn is_responsible(&self) -> bool {
        self.responsibility().map(|p| p > 0).unwrap_or(false)
    }

    /// The rule-table ceiling this claim counts against, if any
    ///
    /// Natural disasters are no-fault events and count against no ceiling.
    pub fn ceiling_category(&self) -> Option<CeilingCategory> {
        if self.claim_type.is_bodily() {
            return Some(if self.is_responsible() {
                CeilingCategory::BodilyResponsible
            } else {
                CeilingCategory::BodilyNonResponsible
            });
        }
        if self.claim_type.is_material() {
            return Some(if self.is_responsible() {
                CeilingCategory::MaterialResponsible
            } else {
                CeilingCategory::MaterialNonResponsible
            });
        }
        match self.claim_type {
            ClaimType::GlassBreakage => Some(CeilingCategory::GlassBreakage),
            ClaimType::Theft | ClaimType::Fire => Some(CeilingCategory::TheftFire),
            ClaimType::NaturalDisaster => None,
            _ => None,
        }
    }
}

/// The complete input to one eligibility evaluation
///
/// `claims: None` means the history is unknown; `Some(vec![])` is a verified
/// clean record. The two are scored differently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantSnapshot {
    /// Applicant identifier
    pub id: ApplicantId,
    /// Date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Date the driving license was issued
    pub license_issue_date: Option<NaiveDate>,
    /// Bonus-malus coefficient (lower is better; 1.00 is neutral)
    pub bonus_malus: Option<Decimal>,
    /// Continuous prior-insurance duration in months
    pub prior_insurance_months: Option<u32>,
    /// Capacity in which the prior insurance was held
    pub prior_insurance_category: Option<PriorInsuranceCategory>,
    /// Declared claims history
    pub claims: Option<Vec<Claim>>,
}

impl ApplicantSnapshot {
    /// Creates an empty snapshot for the given applicant
    pub fn new(id: ApplicantId) -> Self {
        Self {
            id,
            date_of_birth: None,
            license_issue_date: None,
            bonus_malus: None,
            prior_insurance_months: None,
            prior_insurance_category: None,
            claims: None,
        }
    }

    /// Civil age at the evaluation date, if the date of birth is known
    pub fn age_at(&self, as_of: NaiveDate) -> Option<u32> {
        self.date_of_birth.map(|dob| age_at(dob, as_of))
    }

    /// Full years since license issuance, if the issue date is known
    pub fn license_years_at(&self, as_of: NaiveDate) -> Option<u32> {
        self.license_issue_date
            .map(|issued| full_years_between(issued, as_of))
    }

    /// Declared claims falling inside the window ending at `as_of`
    ///
    /// Returns `None` when the history itself is unknown.
    pub fn claims_within(&self, window: LookbackWindow, as_of: NaiveDate) -> Option<Vec<&Claim>> {
        self.claims.as_ref().map(|claims| {
            claims
                .iter()
                .filter(|claim| window.contains(as_of, claim.date))
                .collect()
        })
    }
}
