//! Turning a shortlist into a family plan: the guided session and the printable report.

pub mod report;
mod wizard;

pub use report::{render_report, render_report_on, PageLayout, PlanDocument, ReportError};
pub use wizard::{WizardError, WizardSession, WizardStep};
