//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::{ApplicantId, ClaimId};
use domain_eligibility::{
    ApplicantSnapshot, Claim, ClaimType, PriorInsuranceCategory,
};

use crate::fixtures::{BonusFixtures, TemporalFixtures};

/// Builder for applicant snapshots
///
/// Defaults to a complete, clean 30-year-old VTC driver who passes every
/// criterion of the standard partner catalog.
pub struct ApplicantSnapshotBuilder {
    snapshot: ApplicantSnapshot,
}

impl Default for ApplicantSnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicantSnapshotBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            snapshot: ApplicantSnapshot {
                id: ApplicantId::new(),
                date_of_birth: Some(TemporalFixtures::dob_age_30()),
                license_issue_date: Some(TemporalFixtures::license_10_years()),
                bonus_malus: Some(BonusFixtures::neutral()),
                prior_insurance_months: Some(24),
                prior_insurance_category: Some(PriorInsuranceCategory::Vtc),
                claims: Some(vec![]),
            },
        }
    }

    /// Sets the date of birth
    pub fn with_date_of_birth(mut self, date: Option<NaiveDate>) -> Self {
        self.snapshot.date_of_birth = date;
        self
    }

    /// Sets the license issue date
    pub fn with_license_issue_date(mut self, date: Option<NaiveDate>) -> Self {
        self.snapshot.license_issue_date = date;
        self
    }

    /// Sets the bonus-malus coefficient
    pub fn with_bonus_malus(mut self, coefficient: Option<Decimal>) -> Self {
        self.snapshot.bonus_malus = coefficient;
        self
    }

    /// Sets the prior-insurance record
    pub fn with_prior_insurance(
        mut self,
        months: Option<u32>,
        category: Option<PriorInsuranceCategory>,
    ) -> Self {
        self.snapshot.prior_insurance_months = months;
        self.snapshot.prior_insurance_category = category;
        self
    }

    /// Sets the declared claims history
    pub fn with_claims(mut self, claims: Option<Vec<Claim>>) -> Self {
        self.snapshot.claims = claims;
        self
    }

    /// Adds one claim, creating the history if it was unknown
    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.snapshot.claims.get_or_insert_with(Vec::new).push(claim);
        self
    }

    /// Builds the snapshot
    pub fn build(self) -> ApplicantSnapshot {
        self.snapshot
    }
}

/// Builder for claims
pub struct ClaimBuilder {
    claim: Claim,
}

impl ClaimBuilder {
    /// Creates a builder for a claim of the given type on the fixture's
    /// recent claim date
    pub fn new(claim_type: ClaimType) -> Self {
        Self {
            claim: Claim::new(claim_type, TemporalFixtures::recent_claim_date()),
        }
    }

    /// Sets the claim identifier
    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.claim.id = id;
        self
    }

    /// Sets the date of loss
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.claim.date = date;
        self
    }

    /// Sets the settled amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.claim.amount = Some(amount);
        self
    }

    /// Sets the declared responsibility share
    pub fn with_responsibility(mut self, percent: u8) -> Self {
        self.claim.responsibility_percent = Some(percent);
        self
    }

    /// Sets the handling insurer
    pub fn with_insurer(mut self, insurer: impl Into<String>) -> Self {
        self.claim.insurer = Some(insurer.into());
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        self.claim
    }
}
