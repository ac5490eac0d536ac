use chrono::NaiveDate;
use education_planner::config::CatalogConfig;
use education_planner::error::AppError;
use education_planner::workflows::discovery::{
    Catalog, CatalogImporter, LevelBand, SchoolCategory,
};
use std::path::Path;
use tracing::info;

/// Where the active catalog was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogSource {
    Builtin,
    Import(String),
}

impl CatalogSource {
    pub(crate) fn label(&self) -> String {
        match self {
            CatalogSource::Builtin => "bundled Metro Vancouver dataset".to_string(),
            CatalogSource::Import(path) => format!("CSV import ({path})"),
        }
    }
}

/// Loads the catalog named on the command line, then the configured path,
/// falling back to the bundled dataset.
pub(crate) fn load_catalog(
    flag: Option<&Path>,
    config: &CatalogConfig,
) -> Result<(Catalog, CatalogSource), AppError> {
    match flag.or(config.path.as_deref()) {
        Some(path) => {
            let catalog = CatalogImporter::from_path(path)?;
            Ok((catalog, CatalogSource::Import(path.display().to_string())))
        }
        None => {
            let catalog = Catalog::builtin()?;
            info!(schools = catalog.len(), "using bundled catalog");
            Ok((catalog, CatalogSource::Builtin))
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_category(raw: &str) -> Result<SchoolCategory, String> {
    SchoolCategory::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = SchoolCategory::ordered()
            .iter()
            .map(|category| category.label())
            .collect();
        format!("unknown category '{raw}' (expected one of: {})", known.join(", "))
    })
}

pub(crate) fn parse_level(raw: &str) -> Result<LevelBand, String> {
    LevelBand::parse(raw).ok_or_else(|| {
        format!("unknown level '{raw}' (expected preschool, elementary, middle, high or k12)")
    })
}
