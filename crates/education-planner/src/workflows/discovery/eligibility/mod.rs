//! Eligibility screening of catalog schools against a family profile.
//!
//! Four rules run in a fixed order (age/level, location, budget, priorities) and a
//! school must pass all of them. Screening is a pure function of its inputs, so
//! callers re-run it on every profile change.

mod keywords;
mod policy;
mod rules;

pub use policy::{Eligibility, ExclusionReason};

use super::domain::{FamilyProfile, SchoolRecord, Tuition};
use tracing::debug;

/// Schools the family can consider, in catalog order.
pub fn filter_eligible<'a>(
    catalog: &'a [SchoolRecord],
    profile: &FamilyProfile,
) -> Vec<&'a SchoolRecord> {
    let eligible: Vec<&SchoolRecord> = catalog
        .iter()
        .filter(|school| is_eligible(school, profile))
        .collect();

    debug!(
        child_age = profile.child_age,
        budget = profile.budget.amount(),
        priorities = profile.priorities.len(),
        eligible = eligible.len(),
        total = catalog.len(),
        "screened catalog"
    );

    eligible
}

pub fn is_eligible(school: &SchoolRecord, profile: &FamilyProfile) -> bool {
    rules::level_compatible(school, profile.child_age)
        && rules::location_compatible(school, &profile.location)
        && rules::budget_compatible(school, profile.budget)
        && priorities_compatible(school, profile)
}

/// Screens one school and reports the first rule it failed.
pub fn assess(school: &SchoolRecord, profile: &FamilyProfile) -> Eligibility {
    if !rules::level_compatible(school, profile.child_age) {
        return excluded(ExclusionReason::LevelMismatch {
            child_age: profile.child_age,
            level: school.level_band,
        });
    }

    if !rules::location_compatible(school, &profile.location) {
        return excluded(ExclusionReason::OutsideLocation {
            preference: profile.location.label().to_string(),
            location: school.location.clone(),
        });
    }

    if !rules::budget_compatible(school, profile.budget) {
        let reason = match &school.tuition {
            Tuition::Numeric(amount) if !profile.budget.is_public_only() => {
                ExclusionReason::OverBudget {
                    tuition: *amount,
                    budget: profile.budget.amount(),
                }
            }
            tuition => ExclusionReason::NotFree {
                tuition: tuition.clone(),
            },
        };
        return excluded(reason);
    }

    if !priorities_compatible(school, profile) {
        return excluded(ExclusionReason::NoPriorityMatch {
            priorities: profile.priorities.iter().cloned().collect(),
        });
    }

    Eligibility::Eligible {
        matched_priorities: matched_priorities(school, profile),
    }
}

/// Priority tags from the profile that hit the school's descriptive text.
pub fn matched_priorities(school: &SchoolRecord, profile: &FamilyProfile) -> Vec<String> {
    if profile.priorities.is_empty() {
        return Vec::new();
    }

    let text = rules::descriptive_text(school);
    profile
        .priorities
        .iter()
        .filter(|tag| rules::priority_matches(tag, &text))
        .cloned()
        .collect()
}

fn priorities_compatible(school: &SchoolRecord, profile: &FamilyProfile) -> bool {
    if profile.priorities.is_empty() {
        return true;
    }

    let text = rules::descriptive_text(school);
    profile
        .priorities
        .iter()
        .any(|tag| rules::priority_matches(tag, &text))
}

fn excluded(reason: ExclusionReason) -> Eligibility {
    Eligibility::Excluded { reason }
}
