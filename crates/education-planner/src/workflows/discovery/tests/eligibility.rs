use super::common::*;
use crate::workflows::discovery::domain::{LevelBand, LocationPreference, Tuition};
use crate::workflows::discovery::eligibility::{
    assess, filter_eligible, matched_priorities, Eligibility, ExclusionReason,
};

#[test]
fn public_only_budget_keeps_free_school() {
    let catalog = free_and_independent_elementary();
    let profile = flexible_profile(5);

    let eligible = filter_eligible(&catalog, &profile);

    assert_eq!(ids(&eligible), vec!["lord-byng"]);
}

#[test]
fn raised_budget_admits_both_schools() {
    let catalog = free_and_independent_elementary();
    let profile = flexible_profile(5).with_budget(35_000);

    let eligible = filter_eligible(&catalog, &profile);

    assert_eq!(ids(&eligible), vec!["lord-byng", "hillcrest"]);
}

#[test]
fn teenager_never_matches_elementary() {
    let catalog = vec![school("lord-byng", LevelBand::Elementary, Tuition::Free)];
    let profile = flexible_profile(16).with_budget(50_000);

    assert!(filter_eligible(&catalog, &profile).is_empty());
    assert_eq!(
        assess(&catalog[0], &profile),
        Eligibility::Excluded {
            reason: ExclusionReason::LevelMismatch {
                child_age: 16,
                level: LevelBand::Elementary,
            }
        }
    );
}

#[test]
fn location_matches_by_case_insensitive_substring() {
    let catalog = vec![
        located(
            school("st-georges", LevelBand::AllAges, Tuition::Free),
            "Vancouver (Point Grey)",
        ),
        located(
            school("deer-lake", LevelBand::AllAges, Tuition::Free),
            "Burnaby",
        ),
    ];
    let profile =
        flexible_profile(9).with_location(LocationPreference::Municipality("vancouver".into()));

    assert_eq!(ids(&filter_eligible(&catalog, &profile)), vec!["st-georges"]);
}

#[test]
fn location_containment_is_one_directional() {
    let catalog = vec![located(
        school("central", LevelBand::AllAges, Tuition::Free),
        "Vancouver",
    )];
    let profile = flexible_profile(9).with_location(LocationPreference::Municipality(
        "North Vancouver".into(),
    ));

    assert!(filter_eligible(&catalog, &profile).is_empty());
}

#[test]
fn priority_keywords_match_synonyms() {
    let catalog = vec![described(
        school("choice", LevelBand::Elementary, Tuition::Free),
        "Program for gifted learners in a supportive setting.",
    )];
    let profile = flexible_profile(8).with_priority("Academic Excellence");

    assert_eq!(ids(&filter_eligible(&catalog, &profile)), vec!["choice"]);
    assert_eq!(
        matched_priorities(&catalog[0], &profile),
        vec!["Academic Excellence".to_string()]
    );
}

#[test]
fn priorities_combine_with_or() {
    let catalog = vec![described(
        school("waldorf", LevelBand::AllAges, Tuition::Free),
        "Arts-integrated curriculum with outdoor play.",
    )];
    let profile = flexible_profile(8)
        .with_priority("Technology Focus")
        .with_priority("Outdoor Education")
        .with_priority("Language Learning");

    assert_eq!(filter_eligible(&catalog, &profile).len(), 1);
    assert_eq!(
        matched_priorities(&catalog[0], &profile),
        vec!["Outdoor Education".to_string()]
    );
}

#[test]
fn unknown_priority_uses_its_own_text() {
    let tagged = {
        let mut record = school("bodwell", LevelBand::High, Tuition::Free);
        record.feature_tags = vec!["Boarding available".to_string()];
        record
    };
    let catalog = vec![tagged];

    let matching = flexible_profile(16).with_priority("Boarding");
    assert_eq!(filter_eligible(&catalog, &matching).len(), 1);

    let missing = flexible_profile(16).with_priority("Rowing");
    assert!(matches!(
        assess(&catalog[0], &missing),
        Eligibility::Excluded {
            reason: ExclusionReason::NoPriorityMatch { .. }
        }
    ));
}

#[test]
fn numeric_zero_is_not_treated_as_free() {
    let catalog = vec![school("zero", LevelBand::Elementary, Tuition::Numeric(0))];
    let public_only = flexible_profile(8);

    assert!(filter_eligible(&catalog, &public_only).is_empty());
    assert_eq!(filter_eligible(&catalog, &public_only.with_budget(2_500)).len(), 1);
}

#[test]
fn variable_tuition_is_admitted_only_with_a_budget() {
    let catalog = vec![school(
        "pacific-spirit",
        LevelBand::Elementary,
        Tuition::Variable("Starting from $9,250 (sliding scale)".into()),
    )];

    let public_only = flexible_profile(8);
    match assess(&catalog[0], &public_only) {
        Eligibility::Excluded {
            reason: ExclusionReason::NotFree { tuition },
        } => assert!(matches!(tuition, Tuition::Variable(_))),
        other => panic!("expected not-free exclusion, got {other:?}"),
    }

    assert_eq!(filter_eligible(&catalog, &public_only.with_budget(2_500)).len(), 1);
}

#[test]
fn over_budget_reports_amounts() {
    let catalog = free_and_independent_elementary();
    let profile = flexible_profile(6).with_budget(20_000);

    let eligibility = assess(&catalog[1], &profile);
    assert_eq!(
        eligibility,
        Eligibility::Excluded {
            reason: ExclusionReason::OverBudget {
                tuition: 30_000,
                budget: 20_000,
            }
        }
    );
    assert_eq!(
        eligibility.summary(),
        "tuition $30,000 exceeds budget $20,000"
    );
}

#[test]
fn out_of_range_age_yields_empty_result() {
    let catalog = vec![
        school("pre", LevelBand::Preschool, Tuition::Free),
        school("all", LevelBand::AllAges, Tuition::Free),
    ];

    assert!(filter_eligible(&catalog, &flexible_profile(1)).is_empty());
    assert!(filter_eligible(&catalog, &flexible_profile(25)).is_empty());
}

#[test]
fn empty_catalog_yields_empty_result() {
    assert!(filter_eligible(&[], &flexible_profile(8)).is_empty());
}

#[test]
fn assess_agrees_with_filter() {
    let catalog = free_and_independent_elementary();
    for budget in [0, 10_000, 30_000, 50_000] {
        let profile = flexible_profile(7).with_budget(budget);
        let eligible = ids(&filter_eligible(&catalog, &profile));
        for record in &catalog {
            assert_eq!(
                assess(record, &profile).is_eligible(),
                eligible.contains(&record.id),
                "disagreement for {} at budget {budget}",
                record.id
            );
        }
    }
}
