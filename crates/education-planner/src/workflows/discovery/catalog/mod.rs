mod import;
mod raw;

pub use import::CatalogImporter;

use super::domain::{Competitiveness, LevelBand, SchoolCategory, SchoolRecord};
use raw::RawSchool;
use std::collections::HashSet;
use std::io::Read;
use tracing::debug;

const BUILTIN_DATASET: &str = include_str!("../../../../data/schools.json");

/// Validation and decoding failures raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate school id '{0}' in catalog")]
    DuplicateId(String),
    #[error("school {id:?} is missing required field '{field}'")]
    MissingField {
        id: Option<String>,
        field: &'static str,
    },
    #[error("school '{id}' has unrecognized {field} '{value}'")]
    UnknownLabel {
        id: String,
        field: &'static str,
        value: String,
    },
    #[error("school '{id}' has invalid tuition {value}: expected a non-negative whole amount, \"Free\", or a description")]
    InvalidTuition { id: String, value: String },
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Immutable, validated collection of schools in dataset order.
#[derive(Debug, Clone)]
pub struct Catalog {
    schools: Vec<SchoolRecord>,
}

impl Catalog {
    /// Loads the dataset compiled into the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_reader(BUILTIN_DATASET.as_bytes())
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let raw: Vec<RawSchool> = serde_json::from_reader(reader)?;
        let records = raw
            .into_iter()
            .map(RawSchool::into_record)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    pub fn from_records(schools: Vec<SchoolRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(schools.len());
        for school in &schools {
            if !seen.insert(school.id.as_str()) {
                return Err(CatalogError::DuplicateId(school.id.clone()));
            }
        }

        debug!(schools = schools.len(), "catalog loaded");
        Ok(Self { schools })
    }

    pub fn schools(&self) -> &[SchoolRecord] {
        &self.schools
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SchoolRecord> {
        self.schools.iter().find(|school| school.id == id)
    }

    pub fn by_category(&self, category: SchoolCategory) -> Vec<&SchoolRecord> {
        self.matching(|school| school.category == category)
    }

    pub fn by_level(&self, level: LevelBand) -> Vec<&SchoolRecord> {
        self.matching(|school| school.level_band == level)
    }

    pub fn by_competitiveness(&self, competitiveness: Competitiveness) -> Vec<&SchoolRecord> {
        self.matching(|school| school.competitiveness == competitiveness)
    }

    /// Tuition-charging schools: private, independent and religious.
    pub fn private_schools(&self) -> Vec<&SchoolRecord> {
        self.matching(|school| {
            matches!(
                school.category,
                SchoolCategory::Private | SchoolCategory::Independent | SchoolCategory::Religious
            )
        })
    }

    /// District-run choice programs.
    pub fn public_programs(&self) -> Vec<&SchoolRecord> {
        self.matching(|school| {
            matches!(
                school.category,
                SchoolCategory::Public | SchoolCategory::MiniSchool | SchoolCategory::IbProgram
            )
        })
    }

    pub fn requiring_admissions_test(&self) -> Vec<&SchoolRecord> {
        self.matching(|school| school.admissions_test_required)
    }

    pub fn with_financial_aid(&self) -> Vec<&SchoolRecord> {
        self.matching(|school| school.financial_aid)
    }

    fn matching<F>(&self, predicate: F) -> Vec<&SchoolRecord>
    where
        F: Fn(&SchoolRecord) -> bool,
    {
        self.schools.iter().filter(|school| predicate(school)).collect()
    }
}
