mod advice;
mod document;
mod summary;
mod timeline;
pub mod views;

pub use advice::{advice_sections, preparation_tips, AdviceHorizon, ADMISSIONS_TEST_AGE};
pub use document::{
    Page, PageLayout, PlanDocument, DEFAULT_LINES_PER_PAGE, DEFAULT_WIDTH, MIN_LINES_PER_PAGE,
    MIN_WIDTH,
};
pub use timeline::{
    admissions_calendar, application_timeline, needs_admissions_support, tutoring_resources,
    AdmissionsPhase, Milestone, SupportResource,
};
pub use views::PlanReport;

use crate::workflows::discovery::{Catalog, FamilyProfile, Selection};
use chrono::{Local, NaiveDate};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("page layout {lines_per_page} lines x {width} columns is too small")]
    InvalidLayout { lines_per_page: usize, width: usize },
    #[error("failed to save plan: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the family's plan dated today with the default page layout.
pub fn render_report(
    profile: &FamilyProfile,
    selection: &Selection,
    catalog: &Catalog,
) -> PlanDocument {
    render_report_on(
        profile,
        selection,
        catalog,
        Local::now().date_naive(),
        PageLayout::default(),
    )
}

pub fn render_report_on(
    profile: &FamilyProfile,
    selection: &Selection,
    catalog: &Catalog,
    generated_on: NaiveDate,
    layout: PageLayout,
) -> PlanDocument {
    let report = PlanReport::build(profile, selection, catalog, generated_on);
    PlanDocument::render(&report, layout)
}
