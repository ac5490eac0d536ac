use super::report::{render_report_on, PageLayout, PlanDocument};
use crate::workflows::discovery::domain::{
    FamilyProfile, LocationPreference, SchoolRecord, MAX_BUDGET, MAX_CHILD_AGE, MIN_CHILD_AGE,
};
use crate::workflows::discovery::{filter_eligible, Catalog, Selection};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

const DEFAULT_CHILD_AGE: u8 = 5;
const DEFAULT_LOCATION: &str = "Vancouver";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Welcome,
    Profile,
    Discovery,
    Results,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 4] {
        [Self::Welcome, Self::Profile, Self::Discovery, Self::Results]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Profile => "Profile",
            Self::Discovery => "Discovery",
            Self::Results => "Results",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Welcome => 0,
            Self::Profile => 1,
            Self::Discovery => 2,
            Self::Results => 3,
        }
    }

    const fn following(self) -> Self {
        match self {
            Self::Welcome => Self::Profile,
            Self::Profile => Self::Discovery,
            Self::Discovery | Self::Results => Self::Results,
        }
    }

    const fn preceding(self) -> Self {
        match self {
            Self::Welcome | Self::Profile => Self::Welcome,
            Self::Discovery => Self::Profile,
            Self::Results => Self::Discovery,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("select at least one school before viewing results")]
    EmptySelection,
    #[error("the plan is only available on the results step (currently on {})", .0.label())]
    NotAtResults(WizardStep),
}

/// Session state for the four-step planner. Profile and selection are value
/// objects; every update swaps in a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    step: WizardStep,
    profile: FamilyProfile,
    selection: Selection,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Welcome,
            profile: FamilyProfile::new(DEFAULT_CHILD_AGE)
                .with_location(LocationPreference::parse(DEFAULT_LOCATION)),
            selection: Selection::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn profile(&self) -> &FamilyProfile {
        &self.profile
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Position through the steps after the welcome screen, 0 to 100.
    pub fn progress_pct(&self) -> u8 {
        let last = WizardStep::ordered().len() - 1;
        (self.step.index() * 100 / last) as u8
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Results => false,
            WizardStep::Discovery => !self.selection.is_empty(),
            WizardStep::Welcome | WizardStep::Profile => true,
        }
    }

    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        if self.step == WizardStep::Discovery && self.selection.is_empty() {
            return Err(WizardError::EmptySelection);
        }
        self.step = self.step.following();
        debug!(step = self.step.label(), "wizard advanced");
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.preceding();
        self.step
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn set_child_age(&mut self, age: u8) {
        let age = age.clamp(MIN_CHILD_AGE, MAX_CHILD_AGE);
        self.update_profile(|profile| profile.with_age(age));
    }

    pub fn set_budget(&mut self, budget: u32) {
        let budget = budget.min(MAX_BUDGET);
        self.update_profile(|profile| profile.with_budget(budget));
    }

    pub fn set_location(&mut self, raw: &str) {
        let location = LocationPreference::parse(raw);
        self.update_profile(|profile| profile.with_location(location));
    }

    pub fn toggle_priority(&mut self, tag: &str) {
        self.update_profile(|profile| profile.toggle_priority(tag));
    }

    pub fn set_names(&mut self, parent_name: Option<String>, child_name: Option<String>) {
        self.update_profile(|profile| {
            profile
                .with_parent_name(parent_name)
                .with_child_name(child_name)
        });
    }

    /// Toggles a school on the shortlist; returns whether the shortlist changed.
    pub fn toggle_school(&mut self, id: &str) -> bool {
        let next = self.selection.toggle(id);
        let changed = next != self.selection;
        self.selection = next;
        changed
    }

    /// Re-screens the catalog against the current profile.
    pub fn eligible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a SchoolRecord> {
        filter_eligible(catalog.schools(), &self.profile)
    }

    pub fn report(
        &self,
        catalog: &Catalog,
        generated_on: NaiveDate,
        layout: PageLayout,
    ) -> Result<PlanDocument, WizardError> {
        if self.step != WizardStep::Results {
            return Err(WizardError::NotAtResults(self.step));
        }
        Ok(render_report_on(
            &self.profile,
            &self.selection,
            catalog,
            generated_on,
            layout,
        ))
    }

    fn update_profile<F>(&mut self, update: F)
    where
        F: FnOnce(FamilyProfile) -> FamilyProfile,
    {
        self.profile = update(self.profile.clone());
    }
}
