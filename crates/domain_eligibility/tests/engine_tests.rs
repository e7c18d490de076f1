//! Unit tests for the evaluation engine
//!
//! Covers the scoring contract: additive penalties, missing-data handling,
//! the 36-month claims window, and the conservative eligibility rule.

use rust_decimal_macros::dec;

use domain_eligibility::{evaluate, evaluate_rule_set, ClaimType};
use test_utils::{ApplicantSnapshotBuilder, ClaimBuilder, RuleSetFixtures, TemporalFixtures};

mod scoring {
    use super::*;

    #[test]
    fn test_clean_vtc_driver_scores_full_marks() {
        // 30 years old, 10 years of license, bonus 1.00, 24 months VTC, no claims
        let snapshot = ApplicantSnapshotBuilder::new().build();
        let result = evaluate_rule_set(
            &snapshot,
            &RuleSetFixtures::vtc_product(),
            TemporalFixtures::evaluation_date(),
        );

        assert!(result.eligible);
        assert_eq!(result.score, 100);
        assert!(result.missing_info.is_empty());
    }

    #[test]
    fn test_out_of_range_bonus_is_a_failure_not_missing_data() {
        let snapshot = ApplicantSnapshotBuilder::new()
            .with_bonus_malus(Some(dec!(2.00)))
            .build();
        let result = evaluate_rule_set(
            &snapshot,
            &RuleSetFixtures::vtc_product(),
            TemporalFixtures::evaluation_date(),
        );

        // the value was present, just out of range: -20, no missing info
        assert_eq!(result.score, 80);
        assert!(result.missing_info.is_empty());
        assert!(result.eligible);
    }

    #[test]
    fn test_each_criterion_penalty() {
        let as_of = TemporalFixtures::evaluation_date();
        let rule_set = RuleSetFixtures::vtc_product();

        let too_young = ApplicantSnapshotBuilder::new()
            .with_date_of_birth(Some(chrono::NaiveDate::from_ymd_opt(2004, 1, 1).unwrap()))
            .build();
        assert_eq!(evaluate_rule_set(&too_young, &rule_set, as_of).score, 70);

        let novice = ApplicantSnapshotBuilder::new()
            .with_license_issue_date(Some(chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()))
            .build();
        assert_eq!(evaluate_rule_set(&novice, &rule_set, as_of).score, 75);

        let short_record = ApplicantSnapshotBuilder::new()
            .with_prior_insurance(Some(6), Some(domain_eligibility::PriorInsuranceCategory::Vtc))
            .build();
        assert_eq!(evaluate_rule_set(&short_record, &rule_set, as_of).score, 85);
    }

    #[test]
    fn test_score_floors_at_zero_when_everything_fails() {
        let snapshot = ApplicantSnapshotBuilder::new()
            .with_date_of_birth(Some(chrono::NaiveDate::from_ymd_opt(2006, 1, 1).unwrap()))
            .with_license_issue_date(Some(chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()))
            .with_bonus_malus(Some(dec!(3.50)))
            .with_prior_insurance(Some(2), Some(domain_eligibility::PriorInsuranceCategory::Vtc))
            .with_claim(ClaimBuilder::new(ClaimType::BodilyRc100).build())
            .with_claim(ClaimBuilder::new(ClaimType::BodilyRc100).build())
            .build();
        let result = evaluate_rule_set(
            &snapshot,
            &RuleSetFixtures::vtc_product(),
            TemporalFixtures::evaluation_date(),
        );

        // 100 - 30 - 25 - 20 - 15 - 20 clamps to 0
        assert_eq!(result.score, 0);
        assert!(!result.eligible);
    }
}

mod missing_data {
    use super::*;

    #[test]
    fn test_high_score_with_missing_info_is_not_eligible() {
        let snapshot = ApplicantSnapshotBuilder::new()
            .with_bonus_malus(None)
            .build();
        let result = evaluate_rule_set(
            &snapshot,
            &RuleSetFixtures::vtc_product(),
            TemporalFixtures::evaluation_date(),
        );

        assert_eq!(result.score, 80);
        assert_eq!(result.missing_info.len(), 1);
        assert!(!result.eligible, "incomplete data must never auto-approve");
    }

    #[test]
    fn test_unknown_claims_history_blocks_eligibility() {
        let snapshot = ApplicantSnapshotBuilder::new().with_claims(None).build();
        let result = evaluate_rule_set(
            &snapshot,
            &RuleSetFixtures::vtc_product(),
            TemporalFixtures::evaluation_date(),
        );

        assert_eq!(result.score, 80);
        assert!(!result.eligible);
        assert!(result.missing_info[0].contains("Claims history"));
    }

    #[test]
    fn test_missing_prior_insurance_duration_is_only_a_warning() {
        let snapshot = ApplicantSnapshotBuilder::new()
            .with_prior_insurance(None, None)
            .build();
        let result = evaluate_rule_set(
            &snapshot,
            &RuleSetFixtures::vtc_product(),
            TemporalFixtures::evaluation_date(),
        );

        assert_eq!(result.score, 100);
        assert!(result.eligible);
        assert!(result.warnings.iter().any(|w| w.contains("Prior insurance")));
    }
}

mod claims_window {
    use super::*;

    #[test]
    fn test_claim_older_than_36_months_is_ignored() {
        // zero-tolerance ceilings, but the claim is 37 months old
        let snapshot = ApplicantSnapshotBuilder::new()
            .with_claim(
                ClaimBuilder::new(ClaimType::BodilyRc100)
                    .with_date(TemporalFixtures::stale_claim_date())
                    .build(),
            )
            .build();
        let result = evaluate_rule_set(
            &snapshot,
            &RuleSetFixtures::zero_tolerance_product(),
            TemporalFixtures::evaluation_date(),
        );

        assert_eq!(result.score, 100);
        assert!(result.eligible);
    }

    #[test]
    fn test_zero_ceilings_reject_a_single_windowed_claim() {
        let snapshot = ApplicantSnapshotBuilder::new()
            .with_claim(ClaimBuilder::new(ClaimType::GlassBreakage).build())
            .build();
        let result = evaluate_rule_set(
            &snapshot,
            &RuleSetFixtures::zero_tolerance_product(),
            TemporalFixtures::evaluation_date(),
        );

        assert_eq!(result.score, 80);
        assert!(result
            .reasons
            .iter()
            .any(|r| r.contains("Claim ceilings exceeded")));
    }

    #[test]
    fn test_empty_history_always_passes_the_claims_criterion() {
        let snapshot = ApplicantSnapshotBuilder::new().with_claims(Some(vec![])).build();
        let result = evaluate_rule_set(
            &snapshot,
            &RuleSetFixtures::zero_tolerance_product(),
            TemporalFixtures::evaluation_date(),
        );

        assert_eq!(result.score, 100);
        assert!(result.eligible);
    }

    #[test]
    fn test_counts_are_split_by_responsibility() {
        // one responsible and one non-responsible material claim; the VTC
        // product allows 3 of each
        let snapshot = ApplicantSnapshotBuilder::new()
            .with_claim(ClaimBuilder::new(ClaimType::MaterialRc100).build())
            .with_claim(ClaimBuilder::new(ClaimType::MaterialRc0).build())
            .build();
        let result = evaluate_rule_set(
            &snapshot,
            &RuleSetFixtures::vtc_product(),
            TemporalFixtures::evaluation_date(),
        );

        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_theft_and_fire_share_one_ceiling() {
        // VTC product allows one theft-or-fire claim; one of each exceeds it
        let snapshot = ApplicantSnapshotBuilder::new()
            .with_claim(ClaimBuilder::new(ClaimType::Theft).build())
            .with_claim(
                ClaimBuilder::new(ClaimType::Fire)
                    .with_date(chrono::NaiveDate::from_ymd_opt(2024, 11, 1).unwrap())
                    .build(),
            )
            .build();
        let result = evaluate_rule_set(
            &snapshot,
            &RuleSetFixtures::vtc_product(),
            TemporalFixtures::evaluation_date(),
        );

        assert_eq!(result.score, 80);
    }

    #[test]
    fn test_natural_disaster_never_counts() {
        let snapshot = ApplicantSnapshotBuilder::new()
            .with_claim(ClaimBuilder::new(ClaimType::NaturalDisaster).build())
            .build();
        let result = evaluate_rule_set(
            &snapshot,
            &RuleSetFixtures::zero_tolerance_product(),
            TemporalFixtures::evaluation_date(),
        );

        assert_eq!(result.score, 100);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_repeated_evaluation_is_identical() {
        let snapshot = ApplicantSnapshotBuilder::new()
            .with_bonus_malus(Some(dec!(1.20)))
            .with_claim(ClaimBuilder::new(ClaimType::GlassBreakage).build())
            .build();
        let catalog = vec![
            RuleSetFixtures::vtc_product(),
            RuleSetFixtures::zero_tolerance_product(),
        ];
        let as_of = TemporalFixtures::evaluation_date();

        let first = evaluate(&snapshot, &catalog, as_of);
        let second = evaluate(&snapshot, &catalog, as_of);
        assert_eq!(first, second);
    }
}
