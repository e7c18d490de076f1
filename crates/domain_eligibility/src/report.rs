//! Aggregate eligibility reporting
//!
//! Folds per-product results into the report a broker presents to the
//! applicant: eligible count, best match, and recommendation text.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::applicant::ApplicantSnapshot;
use crate::engine::{evaluate, EligibilityResult};
use crate::ruleset::RuleSet;

/// Full evaluation report across a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityReport {
    /// One result per rule set, in catalog order
    pub results: Vec<EligibilityResult>,
    /// Number of eligible products
    pub eligible_count: usize,
    /// Highest-scoring eligible result; first in catalog order on ties
    pub best_match: Option<EligibilityResult>,
    /// Human-readable guidance for the broker
    pub recommendations: Vec<String>,
    /// Date the evaluation was run against
    pub evaluated_at: NaiveDate,
}

/// Evaluates a snapshot and aggregates the results into a report
pub fn generate_report(
    snapshot: &ApplicantSnapshot,
    catalog: &[RuleSet],
    as_of: NaiveDate,
) -> EligibilityReport {
    let results = evaluate(snapshot, catalog, as_of);

    let eligible: Vec<&EligibilityResult> = results.iter().filter(|r| r.eligible).collect();
    let best_match: Option<EligibilityResult> = eligible
        .iter()
        .copied()
        .fold(None::<&EligibilityResult>, |best, result| match best {
            Some(current) if result.score > current.score => Some(result),
            None => Some(result),
            _ => best,
        })
        .cloned();

    let eligible_count = eligible.len();
    let recommendations = build_recommendations(&results, &eligible, best_match.as_ref());

    EligibilityReport {
        eligible_count,
        best_match,
        results,
        recommendations,
        evaluated_at: as_of,
    }
}

fn build_recommendations(
    results: &[EligibilityResult],
    eligible: &[&EligibilityResult],
    best_match: Option<&EligibilityResult>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    match eligible.len() {
        0 => {
            recommendations
                .push("No partner product currently matches this profile".to_string());

            let mut missing: Vec<&str> = Vec::new();
            for result in results {
                for item in &result.missing_info {
                    if !missing.contains(&item.as_str()) {
                        missing.push(item);
                    }
                }
            }
            if !missing.is_empty() {
                recommendations.push(format!(
                    "Provide the missing information to complete the assessment: {}",
                    missing.join("; ")
                ));
            } else if let Some(closest) = results.iter().max_by_key(|r| r.score) {
                recommendations.push(format!(
                    "Closest product: {} with a score of {}/100; review its stated reasons before resubmitting",
                    closest.product, closest.score
                ));
            }
        }
        1 => {
            let only = eligible[0];
            recommendations.push(format!(
                "{} is eligible with a score of {}/100",
                only.product, only.score
            ));
        }
        count => {
            // best_match is always present when anything is eligible
            if let Some(best) = best_match {
                recommendations.push(format!(
                    "{} products are eligible; best match is {} with a score of {}/100",
                    count, best.product, best.score
                ));
            }
        }
    }

    recommendations
}
