use super::advice::{advice_sections, preparation_tips};
use super::timeline::{
    admissions_calendar, application_timeline, needs_admissions_support, tutoring_resources,
};
use super::views::{PlanOverview, PlanReport, SelectedSchoolView, TitleBlock};
use crate::workflows::discovery::{Catalog, FamilyProfile, Selection};
use chrono::NaiveDate;
use tracing::warn;

impl PlanReport {
    /// Resolves the shortlist against the catalog and assembles the plan.
    /// Ids missing from the catalog are skipped.
    pub fn build(
        profile: &FamilyProfile,
        selection: &Selection,
        catalog: &Catalog,
        generated_on: NaiveDate,
    ) -> Self {
        let records: Vec<_> = selection
            .ids()
            .iter()
            .filter_map(|id| {
                let record = catalog.get(id);
                if record.is_none() {
                    warn!(school = %id, "selected school missing from catalog");
                }
                record
            })
            .collect();

        let schools: Vec<SelectedSchoolView> = records
            .iter()
            .map(|record| {
                SelectedSchoolView::from_record(
                    record,
                    preparation_tips(record.competitiveness),
                    application_timeline(record.category),
                )
            })
            .collect();

        let support = if records.iter().any(|record| {
            needs_admissions_support(record.competitiveness, record.admissions_test_required)
        }) {
            tutoring_resources().to_vec()
        } else {
            Vec::new()
        };

        let title = TitleBlock {
            heading: format!("Education Plan for {}", profile.child_display_name()),
            prepared_for: profile
                .parent_name
                .as_ref()
                .map(|parent| format!("Prepared for {parent}")),
            generated_on,
        };

        let overview = PlanOverview {
            schools_selected: schools.len(),
            budget_label: profile.budget.label(),
            child_age: profile.child_age,
        };

        Self {
            title,
            overview,
            schools,
            calendar: admissions_calendar().to_vec(),
            advice: advice_sections(profile),
            support,
        }
    }
}
