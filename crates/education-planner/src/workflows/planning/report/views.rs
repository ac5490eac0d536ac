use super::timeline::{AdmissionsPhase, Milestone, SupportResource};
use crate::workflows::discovery::domain::{Competitiveness, SchoolCategory, SchoolRecord};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TitleBlock {
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepared_for: Option<String>,
    pub generated_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanOverview {
    pub schools_selected: usize,
    pub budget_label: String,
    pub child_age: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectedSchoolView {
    pub id: String,
    pub name: String,
    pub category: SchoolCategory,
    pub category_label: &'static str,
    pub location: String,
    pub grade_range: String,
    pub tuition_label: String,
    pub application_deadline: String,
    pub specialties: Vec<String>,
    pub competitiveness: Competitiveness,
    pub competitiveness_label: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preparation_tips: Vec<&'static str>,
    pub timeline: Vec<Milestone>,
}

impl SelectedSchoolView {
    pub fn from_record(
        record: &SchoolRecord,
        preparation_tips: &[&'static str],
        timeline: &[Milestone],
    ) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category,
            category_label: record.category.label(),
            location: record.location.clone(),
            grade_range: record.grade_range.clone(),
            tuition_label: record.tuition.label(),
            application_deadline: record.application_deadline.clone(),
            specialties: record.specialty_tags.clone(),
            competitiveness: record.competitiveness,
            competitiveness_label: record.competitiveness.label(),
            preparation_tips: preparation_tips.to_vec(),
            timeline: timeline.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdviceSection {
    pub horizon: &'static str,
    pub bullets: Vec<String>,
}

/// Everything the plan document prints, in print order.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub title: TitleBlock,
    pub overview: PlanOverview,
    pub schools: Vec<SelectedSchoolView>,
    pub calendar: Vec<AdmissionsPhase>,
    pub advice: Vec<AdviceSection>,
    /// Empty unless a shortlisted school is very selective or tested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub support: Vec<SupportResource>,
}
