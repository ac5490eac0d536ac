//! School discovery: the catalog, eligibility screening and the family shortlist.

pub mod catalog;
pub mod domain;
pub mod eligibility;
pub mod selection;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogError, CatalogImporter};
pub use domain::{
    Budget, Competitiveness, FamilyProfile, LevelBand, LocationPreference, SchoolCategory,
    SchoolRecord, Tuition,
};
pub use eligibility::{assess, filter_eligible, matched_priorities, Eligibility, ExclusionReason};
pub use selection::{toggle_selection, Selection, SelectionError, MAX_SELECTION};
