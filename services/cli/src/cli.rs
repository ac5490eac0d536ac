use crate::commands::{run_discover, run_plan, run_schools, DiscoverArgs, PlanArgs, SchoolsArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::infra::load_catalog;
use clap::{Parser, Subcommand};
use education_planner::config::AppConfig;
use education_planner::error::AppError;
use education_planner::telemetry;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "education-planner",
    about = "Discover schools that fit your family and build an application plan",
    version
)]
struct Cli {
    /// CSV catalog export to use instead of the bundled dataset
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the school catalog
    Schools(SchoolsArgs),
    /// Screen the catalog against a family profile
    Discover(DiscoverArgs),
    /// Build a printable plan for a shortlist of schools
    Plan(PlanArgs),
    /// Walk a sample family through the planner (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));
    let (catalog, source) = load_catalog(cli.catalog.as_deref(), &config.catalog)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Schools(args) => run_schools(&mut out, &catalog, &source, &args),
        Command::Discover(args) => run_discover(&mut out, &catalog, &args),
        Command::Plan(args) => run_plan(&mut out, &catalog, &config.report, &args),
        Command::Demo(args) => {
            let layout = config.report.page_layout()?;
            run_demo(&mut out, &catalog, &source, layout, &args)
        }
    }
}
