use super::CatalogError;
use crate::workflows::discovery::domain::{
    Competitiveness, LevelBand, SchoolCategory, SchoolRecord, Tuition,
};
use serde::Deserialize;
use serde_json::Value;

/// Catalog entry as it appears in the bundled JSON dataset, before validation.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSchool {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) category: String,
    pub(crate) level: String,
    #[serde(default)]
    pub(crate) grades: String,
    pub(crate) location: String,
    /// Kept loose so every malformed value is reported against its school.
    pub(crate) tuition: Value,
    #[serde(default)]
    pub(crate) specialty: Vec<String>,
    #[serde(default)]
    pub(crate) features: Vec<String>,
    #[serde(default)]
    pub(crate) description: String,
    pub(crate) competitiveness: String,
    #[serde(default)]
    pub(crate) application_deadline: String,
    #[serde(default)]
    pub(crate) website: Option<String>,
    #[serde(default)]
    pub(crate) financial_aid: bool,
    #[serde(default)]
    pub(crate) admissions_test_required: bool,
}

impl RawSchool {
    pub(crate) fn into_record(self) -> Result<SchoolRecord, CatalogError> {
        let id = self.id.trim().to_string();
        if id.is_empty() {
            return Err(CatalogError::MissingField {
                id: None,
                field: "id",
            });
        }
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::MissingField {
                id: Some(id),
                field: "name",
            });
        }

        let category =
            SchoolCategory::parse(&self.category).ok_or_else(|| CatalogError::UnknownLabel {
                id: id.clone(),
                field: "category",
                value: self.category.clone(),
            })?;
        let level_band = LevelBand::parse(&self.level).ok_or_else(|| CatalogError::UnknownLabel {
            id: id.clone(),
            field: "level",
            value: self.level.clone(),
        })?;
        let competitiveness = Competitiveness::parse(&self.competitiveness).ok_or_else(|| {
            CatalogError::UnknownLabel {
                id: id.clone(),
                field: "competitiveness",
                value: self.competitiveness.clone(),
            }
        })?;

        let tuition = match &self.tuition {
            Value::Number(amount) => amount.as_f64().and_then(Tuition::from_amount),
            Value::String(text) => Tuition::parse_text(text),
            _ => None,
        }
        .ok_or_else(|| CatalogError::InvalidTuition {
            id: id.clone(),
            value: self.tuition.to_string(),
        })?;

        Ok(SchoolRecord {
            id,
            name,
            category,
            level_band,
            grade_range: self.grades.trim().to_string(),
            location: self.location.trim().to_string(),
            tuition,
            specialty_tags: clean_tags(self.specialty),
            feature_tags: clean_tags(self.features),
            description: self.description.trim().to_string(),
            competitiveness,
            application_deadline: self.application_deadline.trim().to_string(),
            website: self
                .website
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            financial_aid: self.financial_aid,
            admissions_test_required: self.admissions_test_required,
        })
    }
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
