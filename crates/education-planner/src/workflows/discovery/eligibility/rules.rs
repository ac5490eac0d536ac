use super::keywords::keywords_for;
use crate::workflows::discovery::domain::{
    Budget, LevelBand, LocationPreference, SchoolRecord, Tuition, MAX_CHILD_AGE, MIN_CHILD_AGE,
};

/// Level bands a child of `age` may attend. Ages outside the planner's
/// 2..=18 range admit nothing.
pub(crate) fn admissible_levels(age: u8) -> &'static [LevelBand] {
    if !(MIN_CHILD_AGE..=MAX_CHILD_AGE).contains(&age) {
        return &[];
    }

    match age {
        0..=6 => &[LevelBand::Preschool, LevelBand::Elementary, LevelBand::AllAges],
        7..=11 => &[LevelBand::Elementary, LevelBand::AllAges],
        12..=14 => &[LevelBand::Middle, LevelBand::High, LevelBand::AllAges],
        _ => &[LevelBand::High, LevelBand::AllAges],
    }
}

pub(crate) fn level_compatible(school: &SchoolRecord, age: u8) -> bool {
    admissible_levels(age).contains(&school.level_band)
}

pub(crate) fn location_compatible(school: &SchoolRecord, preference: &LocationPreference) -> bool {
    match preference {
        LocationPreference::Flexible => true,
        LocationPreference::Municipality(name) => school
            .location
            .to_lowercase()
            .contains(&name.to_lowercase()),
    }
}

pub(crate) fn budget_compatible(school: &SchoolRecord, budget: Budget) -> bool {
    match &school.tuition {
        Tuition::Free => true,
        _ if budget.is_public_only() => false,
        Tuition::Numeric(amount) => *amount <= budget.amount(),
        Tuition::Variable(_) => true,
    }
}

/// Lowercased specialty tags, feature tags and description, space separated.
pub(crate) fn descriptive_text(school: &SchoolRecord) -> String {
    school
        .specialty_tags
        .iter()
        .chain(school.feature_tags.iter())
        .map(String::as_str)
        .chain(std::iter::once(school.description.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub(crate) fn priority_matches(tag: &str, text: &str) -> bool {
    keywords_for(tag).iter().any(|keyword| text.contains(keyword.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_breakpoints_follow_planner_bands() {
        assert!(admissible_levels(6).contains(&LevelBand::Preschool));
        assert!(!admissible_levels(7).contains(&LevelBand::Preschool));
        assert!(admissible_levels(11).contains(&LevelBand::Elementary));
        assert!(!admissible_levels(12).contains(&LevelBand::Elementary));
        assert!(admissible_levels(14).contains(&LevelBand::Middle));
        assert!(!admissible_levels(15).contains(&LevelBand::Middle));
        assert_eq!(admissible_levels(18), &[LevelBand::High, LevelBand::AllAges]);
    }

    #[test]
    fn out_of_range_ages_admit_nothing() {
        assert!(admissible_levels(1).is_empty());
        assert!(admissible_levels(0).is_empty());
        assert!(admissible_levels(25).is_empty());
    }
}
