mod cli;
mod commands;
mod demo;
mod infra;

use education_planner::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
