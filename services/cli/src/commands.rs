use crate::infra::{parse_category, parse_date, parse_level, CatalogSource};
use chrono::{Local, NaiveDate};
use clap::Args;
use education_planner::config::ReportConfig;
use education_planner::error::AppError;
use education_planner::workflows::discovery::{
    assess, Catalog, Eligibility, FamilyProfile, LevelBand, LocationPreference, SchoolCategory,
    SchoolRecord, Selection, MAX_SELECTION,
};
use education_planner::workflows::planning::{render_report_on, PageLayout};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug, Default)]
pub(crate) struct SchoolsArgs {
    /// Only list schools in this category (e.g. "Mini School", "IB Program")
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Option<SchoolCategory>,
    /// Only list schools serving this level band (preschool, elementary, middle, high, k12)
    #[arg(long, value_parser = parse_level)]
    pub(crate) level: Option<LevelBand>,
    /// Print the matching records as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct ProfileArgs {
    /// Child's age in years
    #[arg(long)]
    pub(crate) age: u8,
    /// Preferred municipality, or "Flexible" for anywhere
    #[arg(long, default_value = "Flexible")]
    pub(crate) location: String,
    /// Annual tuition budget in dollars; 0 means free programs only
    #[arg(long, default_value_t = 0)]
    pub(crate) budget: u32,
    /// Priority tag to match (repeatable)
    #[arg(long = "priority")]
    pub(crate) priorities: Vec<String>,
}

impl ProfileArgs {
    pub(crate) fn to_profile(&self) -> FamilyProfile {
        FamilyProfile::new(self.age)
            .with_location(LocationPreference::parse(&self.location))
            .with_budget(self.budget)
            .with_priorities(self.priorities.iter().cloned())
    }
}

#[derive(Args, Debug)]
pub(crate) struct DiscoverArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Also list excluded schools with the rule each one failed
    #[arg(long)]
    pub(crate) explain: bool,
    /// Print the screening result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct PlanArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// School id to include in the plan, in order (repeatable, at most five)
    #[arg(long = "select", required = true)]
    pub(crate) select: Vec<String>,
    /// Parent or guardian name for the title block
    #[arg(long)]
    pub(crate) parent_name: Option<String>,
    /// Child's name used throughout the plan
    #[arg(long)]
    pub(crate) child_name: Option<String>,
    /// Write the plan to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Override the plan date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Override the configured number of lines per page
    #[arg(long)]
    pub(crate) page_lines: Option<usize>,
    /// Override the configured page width in columns
    #[arg(long)]
    pub(crate) width: Option<usize>,
}

pub(crate) fn run_schools<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    source: &CatalogSource,
    args: &SchoolsArgs,
) -> Result<(), AppError> {
    let schools: Vec<&SchoolRecord> = catalog
        .schools()
        .iter()
        .filter(|school| args.category.map_or(true, |category| school.category == category))
        .filter(|school| args.level.map_or(true, |level| school.level_band == level))
        .collect();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &schools)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "{} of {} schools ({})",
        schools.len(),
        catalog.len(),
        source.label()
    )?;
    for school in schools {
        writeln!(out, "{}", school_line(school))?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct DiscoveryView<'a> {
    profile: &'a FamilyProfile,
    eligible: Vec<EligibleView<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    excluded: Vec<ExcludedView<'a>>,
}

#[derive(Debug, Serialize)]
struct EligibleView<'a> {
    school: &'a SchoolRecord,
    matched_priorities: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ExcludedView<'a> {
    id: &'a str,
    reason: String,
}

pub(crate) fn run_discover<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    args: &DiscoverArgs,
) -> Result<(), AppError> {
    let profile = args.profile.to_profile();
    let mut eligible = Vec::new();
    let mut excluded = Vec::new();

    for school in catalog.schools() {
        match assess(school, &profile) {
            Eligibility::Eligible { matched_priorities } => eligible.push(EligibleView {
                school,
                matched_priorities,
            }),
            Eligibility::Excluded { reason } if args.explain => excluded.push(ExcludedView {
                id: &school.id,
                reason: reason.summary(),
            }),
            Eligibility::Excluded { .. } => {}
        }
    }

    if args.json {
        let view = DiscoveryView {
            profile: &profile,
            eligible,
            excluded,
        };
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Profile: {}", profile_line(&profile))?;
    writeln!(
        out,
        "\nEligible schools ({} of {})",
        eligible.len(),
        catalog.len()
    )?;
    if eligible.is_empty() {
        writeln!(out, "- none; try widening location or budget")?;
    }
    for view in &eligible {
        let matches = if view.matched_priorities.is_empty() {
            String::new()
        } else {
            format!(" [matches: {}]", view.matched_priorities.join(", "))
        };
        writeln!(out, "{}{}", school_line(view.school), matches)?;
    }

    if args.explain && !excluded.is_empty() {
        writeln!(out, "\nExcluded")?;
        for view in &excluded {
            writeln!(out, "- {}: {}", view.id, view.reason)?;
        }
    }
    Ok(())
}

pub(crate) fn run_plan<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    report_config: &ReportConfig,
    args: &PlanArgs,
) -> Result<(), AppError> {
    let profile = args
        .profile
        .to_profile()
        .with_parent_name(args.parent_name.clone())
        .with_child_name(args.child_name.clone());

    let mut selection = Selection::new();
    for id in &args.select {
        if selection.contains(id) {
            continue;
        }
        if selection.is_full() {
            warn!(school = %id, limit = MAX_SELECTION, "shortlist full, dropping school");
            writeln!(out, "note: only {MAX_SELECTION} schools fit in a plan, skipped {id}")?;
            continue;
        }
        match catalog.get(id) {
            Some(school) => {
                if let Eligibility::Excluded { reason } = assess(school, &profile) {
                    writeln!(out, "note: {id} is outside this profile ({})", reason.summary())?;
                }
            }
            None => {
                writeln!(out, "note: no school with id '{id}' in the catalog")?;
                continue;
            }
        }
        selection = selection.toggle(id);
    }

    let layout = PageLayout::new(
        args.page_lines.unwrap_or(report_config.lines_per_page),
        args.width.unwrap_or(report_config.width),
    )?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let document = render_report_on(&profile, &selection, catalog, today, layout);

    match &args.output {
        Some(path) => {
            document.write_to(path)?;
            writeln!(
                out,
                "Plan saved to {} ({} page{})",
                path.display(),
                document.page_count(),
                if document.page_count() == 1 { "" } else { "s" }
            )?;
        }
        None => write!(out, "{}", document.to_text())?,
    }
    Ok(())
}

pub(crate) fn profile_line(profile: &FamilyProfile) -> String {
    let priorities = if profile.priorities.is_empty() {
        "none".to_string()
    } else {
        profile
            .priorities
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "age {} | {} | {} | priorities: {}",
        profile.child_age,
        profile.location.label(),
        profile.budget.label(),
        priorities
    )
}

pub(crate) fn school_line(school: &SchoolRecord) -> String {
    format!(
        "- {} | {} | {} | {} | {} | {}",
        school.id,
        school.name,
        school.category.label(),
        school.level_band.label(),
        school.location,
        school.tuition
    )
}
