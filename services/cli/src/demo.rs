use crate::commands::{profile_line, school_line};
use crate::infra::{parse_date, CatalogSource};
use chrono::{Local, NaiveDate};
use clap::Args;
use education_planner::error::AppError;
use education_planner::workflows::discovery::Catalog;
use education_planner::workflows::planning::{PageLayout, WizardSession, WizardStep};
use std::io::Write;
use std::path::PathBuf;

const DEMO_PICKS: usize = 3;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the plan date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Save the resulting plan to this file instead of printing it
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

/// Walks a sample family through every wizard step and prints the plan.
pub(crate) fn run_demo<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    source: &CatalogSource,
    layout: PageLayout,
    args: &DemoArgs,
) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let mut session = WizardSession::new();

    writeln!(out, "Education planner demo")?;
    writeln!(out, "Catalog: {} schools from {}", catalog.len(), source.label())?;
    step_banner(out, &session)?;

    session.next()?;
    session.set_child_age(12);
    session.set_budget(35_000);
    session.set_location("Vancouver");
    session.toggle_priority("Academic Excellence");
    session.toggle_priority("Arts & Creativity");
    session.set_names(Some("Alex".to_string()), Some("Jamie".to_string()));
    step_banner(out, &session)?;
    writeln!(out, "- {}", profile_line(session.profile()))?;

    session.next()?;
    step_banner(out, &session)?;
    let mut picks = Vec::new();
    for school in session.eligible(catalog).into_iter().take(DEMO_PICKS) {
        writeln!(out, "{}", school_line(school))?;
        picks.push(school.id.clone());
    }

    if picks.is_empty() {
        writeln!(out, "- no eligible schools; the demo profile needs a wider catalog")?;
        return Ok(());
    }
    for id in &picks {
        session.toggle_school(id);
    }
    writeln!(
        out,
        "Shortlisted {} (room for {} more)",
        picks.join(", "),
        session.selection().remaining()
    )?;

    session.next()?;
    step_banner(out, &session)?;
    let document = session.report(catalog, today, layout)?;

    match &args.output {
        Some(path) => {
            document.write_to(path)?;
            writeln!(out, "Plan saved to {}", path.display())?;
        }
        None => {
            writeln!(out)?;
            write!(out, "{}", document.to_text())?;
        }
    }
    Ok(())
}

fn step_banner<W: Write>(out: &mut W, session: &WizardSession) -> std::io::Result<()> {
    let step = session.step();
    writeln!(
        out,
        "\n[{}/{}] {} ({}% complete)",
        step.index() + 1,
        WizardStep::ordered().len(),
        step.label(),
        session.progress_pct()
    )
}
