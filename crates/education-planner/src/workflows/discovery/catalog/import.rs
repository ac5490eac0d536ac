use super::raw::RawSchool;
use super::{Catalog, CatalogError};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;
use tracing::info;

const LIST_SEPARATOR: char = '|';

/// Loads a catalog from a spreadsheet export instead of the bundled dataset.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), schools = catalog.len(), "imported catalog export");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<CatalogRow>() {
            records.push(row?.into_raw().into_record()?);
        }

        Catalog::from_records(records)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    category: String,
    level: String,
    #[serde(default)]
    grades: String,
    location: String,
    tuition: String,
    #[serde(default, deserialize_with = "split_list")]
    specialty: Vec<String>,
    #[serde(default, deserialize_with = "split_list")]
    features: Vec<String>,
    #[serde(default)]
    description: String,
    competitiveness: String,
    #[serde(default)]
    application_deadline: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    website: Option<String>,
    #[serde(default, deserialize_with = "yes_no")]
    financial_aid: bool,
    #[serde(default, deserialize_with = "yes_no")]
    admissions_test_required: bool,
}

impl CatalogRow {
    fn into_raw(self) -> RawSchool {
        RawSchool {
            id: self.id,
            name: self.name,
            category: self.category,
            level: self.level,
            grades: self.grades,
            location: self.location,
            tuition: serde_json::Value::String(self.tuition),
            specialty: self.specialty,
            features: self.features,
            description: self.description,
            competitiveness: self.competitiveness,
            application_deadline: self.application_deadline,
            website: self.website,
            financial_aid: self.financial_aid,
            admissions_test_required: self.admissions_test_required,
        }
    }
}

fn split_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn yes_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "no" | "n" | "false" | "0" => Ok(false),
        "yes" | "y" | "true" | "1" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected yes/no, found '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::discovery::domain::{LevelBand, Tuition};
    use std::io::Cursor;

    const HEADER: &str = "id,name,category,level,grades,location,tuition,specialty,features,description,competitiveness,application_deadline,website,financial_aid,admissions_test_required\n";

    #[test]
    fn imports_rows_and_splits_tag_lists() {
        let csv = format!(
            "{HEADER}hillside,Hillside Academy,Independent,k12,K-12,Burnaby,\"$18,500\",STEM|Robotics,Small classes| Outdoor lab ,A science-focused school.,High,December 1,https://hillside.example,yes,no\n\
             lakeview,Lakeview Elementary,Public,elementary,K-7,Burnaby,Free,,,,Low,,,,\n"
        );

        let catalog = CatalogImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(catalog.len(), 2);

        let hillside = catalog.get("hillside").expect("hillside present");
        assert_eq!(hillside.tuition, Tuition::Numeric(18_500));
        assert_eq!(hillside.specialty_tags, vec!["STEM", "Robotics"]);
        assert_eq!(hillside.feature_tags, vec!["Small classes", "Outdoor lab"]);
        assert_eq!(hillside.level_band, LevelBand::AllAges);
        assert!(hillside.financial_aid);
        assert!(!hillside.admissions_test_required);

        let lakeview = catalog.get("lakeview").expect("lakeview present");
        assert_eq!(lakeview.tuition, Tuition::Free);
        assert!(lakeview.specialty_tags.is_empty());
        assert!(lakeview.website.is_none());
    }

    #[test]
    fn rejects_blank_tuition_cells() {
        let csv = format!("{HEADER}blank,Blank School,Private,high,8-12,Surrey,,,,,High,,,,\n");
        match CatalogImporter::from_reader(Cursor::new(csv)) {
            Err(CatalogError::InvalidTuition { id, .. }) => assert_eq!(id, "blank"),
            other => panic!("expected invalid tuition, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_flags() {
        let csv =
            format!("{HEADER}odd,Odd School,Private,high,8-12,Surrey,9000,,,,High,,,maybe,\n");
        let error = CatalogImporter::from_reader(Cursor::new(csv)).expect_err("flag rejected");
        assert!(matches!(error, CatalogError::Csv(_)));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = CatalogImporter::from_path("./does-not-exist.csv").expect_err("io error");
        assert!(matches!(error, CatalogError::Io(_)));
    }
}
