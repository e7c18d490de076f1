//! Eligibility Domain
//!
//! This crate implements the insurance-eligibility evaluation engine for a
//! French vehicle-insurance brokerage: applicant snapshots are scored against
//! partner underwriting rule sets to produce per-product results and an
//! aggregate report.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic, containing only business logic:
//! - **Value Objects**: ApplicantSnapshot, Claim, RuleSet, ClaimCeilings
//! - **Domain Services**: evaluation (scoring) and report aggregation
//! - **Configuration**: the rule catalog, loaded from JSON and validated once
//!
//! # Evaluation model
//!
//! Each rule set is checked on five criteria (age, license seniority,
//! bonus-malus, prior insurance, claims history). The score starts at 100 and
//! each failed or unverifiable criterion subtracts a fixed penalty. A product
//! is eligible when the score reaches 70 and no criterion was left
//! unverifiable: incomplete data never auto-approves.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_eligibility::{ApplicantSnapshot, Catalog, EligibilityService};
//!
//! let service = EligibilityService::new(Catalog::builtin()?);
//! let report = service.generate_report(&snapshot);
//! match report.best_match {
//!     Some(best) => println!("Best match: {} ({}/100)", best.product, best.score),
//!     None => println!("{}", report.recommendations.join("\n")),
//! }
//! ```

pub mod applicant;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod report;
pub mod ruleset;

pub use applicant::{ApplicantSnapshot, Claim, ClaimType, PriorInsuranceCategory};
pub use catalog::{Catalog, CatalogError};
pub use engine::{
    evaluate, evaluate_rule_set, Criterion, CriterionCheck, Disposition, EligibilityResult,
    EligibilityService, ELIGIBILITY_SCORE_THRESHOLD,
};
pub use error::EligibilityError;
pub use report::{generate_report, EligibilityReport};
pub use ruleset::{
    AgeRange, BonusRange, CeilingCategory, ClaimCeilings, PriorInsuranceRequirement, RuleSet,
};
