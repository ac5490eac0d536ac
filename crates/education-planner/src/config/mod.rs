use crate::workflows::planning::report::{
    PageLayout, ReportError, DEFAULT_LINES_PER_PAGE, DEFAULT_WIDTH, MIN_LINES_PER_PAGE, MIN_WIDTH,
};
use std::env;
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the planner.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub catalog: CatalogConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let path = env::var("APP_CATALOG_PATH")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let lines_per_page = read_usize("APP_REPORT_PAGE_LINES", DEFAULT_LINES_PER_PAGE)
            .map_err(|source| ConfigError::InvalidPageLines { source: Some(source) })?;
        if lines_per_page < MIN_LINES_PER_PAGE {
            return Err(ConfigError::InvalidPageLines { source: None });
        }

        let width = read_usize("APP_REPORT_WIDTH", DEFAULT_WIDTH)
            .map_err(|source| ConfigError::InvalidWidth { source: Some(source) })?;
        if width < MIN_WIDTH {
            return Err(ConfigError::InvalidWidth { source: None });
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            catalog: CatalogConfig { path },
            report: ReportConfig {
                lines_per_page,
                width,
            },
        })
    }
}

fn read_usize(key: &str, default: usize) -> Result<usize, ParseIntError> {
    match env::var(key) {
        Ok(value) => value.trim().parse::<usize>(),
        Err(_) => Ok(default),
    }
}

/// Where the school catalog comes from. `None` selects the bundled dataset.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

/// Page geometry for saved plans.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub lines_per_page: usize,
    pub width: usize,
}

impl ReportConfig {
    pub fn page_layout(&self) -> Result<PageLayout, ReportError> {
        PageLayout::new(self.lines_per_page, self.width)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPageLines { source: Option<ParseIntError> },
    InvalidWidth { source: Option<ParseIntError> },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPageLines { .. } => write!(
                f,
                "APP_REPORT_PAGE_LINES must be an integer of at least {}",
                MIN_LINES_PER_PAGE
            ),
            ConfigError::InvalidWidth { .. } => write!(
                f,
                "APP_REPORT_WIDTH must be an integer of at least {}",
                MIN_WIDTH
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPageLines { source } | ConfigError::InvalidWidth { source } => {
                source.as_ref().map(|err| err as &(dyn std::error::Error + 'static))
            }
        }
    }
}
