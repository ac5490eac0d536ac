use crate::workflows::discovery::domain::{
    Competitiveness, FamilyProfile, LevelBand, LocationPreference, SchoolCategory, SchoolRecord,
    Tuition,
};

pub(super) fn school(id: &str, level_band: LevelBand, tuition: Tuition) -> SchoolRecord {
    SchoolRecord {
        id: id.to_string(),
        name: format!("{id} school"),
        category: if tuition.is_free() {
            SchoolCategory::Public
        } else {
            SchoolCategory::Independent
        },
        level_band,
        grade_range: "K-7".to_string(),
        location: "Vancouver".to_string(),
        tuition,
        specialty_tags: Vec::new(),
        feature_tags: Vec::new(),
        description: String::new(),
        competitiveness: Competitiveness::Moderate,
        application_deadline: "December 1".to_string(),
        website: None,
        financial_aid: false,
        admissions_test_required: false,
    }
}

pub(super) fn located(mut record: SchoolRecord, location: &str) -> SchoolRecord {
    record.location = location.to_string();
    record
}

pub(super) fn described(mut record: SchoolRecord, description: &str) -> SchoolRecord {
    record.description = description.to_string();
    record
}

pub(super) fn free_and_independent_elementary() -> Vec<SchoolRecord> {
    vec![
        school("lord-byng", LevelBand::Elementary, Tuition::Free),
        school("hillcrest", LevelBand::Elementary, Tuition::Numeric(30_000)),
    ]
}

pub(super) fn flexible_profile(child_age: u8) -> FamilyProfile {
    FamilyProfile::new(child_age).with_location(LocationPreference::Flexible)
}

pub(super) fn ids(records: &[&SchoolRecord]) -> Vec<String> {
    records.iter().map(|record| record.id.clone()).collect()
}
