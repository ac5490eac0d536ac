use crate::workflows::discovery::domain::{format_amount, LevelBand, Tuition};
use serde::Serialize;

/// Result of screening one school against a family profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Eligibility {
    Eligible { matched_priorities: Vec<String> },
    Excluded { reason: ExclusionReason },
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible { .. })
    }

    pub fn summary(&self) -> String {
        match self {
            Eligibility::Eligible { matched_priorities } if matched_priorities.is_empty() => {
                "eligible".to_string()
            }
            Eligibility::Eligible { matched_priorities } => {
                format!("eligible, matches {}", matched_priorities.join(", "))
            }
            Eligibility::Excluded { reason } => reason.summary(),
        }
    }
}

/// First rule a school failed, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ExclusionReason {
    LevelMismatch { child_age: u8, level: LevelBand },
    OutsideLocation { preference: String, location: String },
    NotFree { tuition: Tuition },
    OverBudget { tuition: u32, budget: u32 },
    NoPriorityMatch { priorities: Vec<String> },
}

impl ExclusionReason {
    pub fn summary(&self) -> String {
        match self {
            ExclusionReason::LevelMismatch { child_age, level } => format!(
                "serves {} students, not suitable for age {}",
                level.label(),
                child_age
            ),
            ExclusionReason::OutsideLocation {
                preference,
                location,
            } => format!("located in {location}, outside {preference}"),
            ExclusionReason::NotFree { tuition } => {
                format!("charges tuition ({tuition}) but only free options were requested")
            }
            ExclusionReason::OverBudget { tuition, budget } => format!(
                "tuition ${} exceeds budget ${}",
                format_amount(*tuition),
                format_amount(*budget)
            ),
            ExclusionReason::NoPriorityMatch { priorities } => {
                format!("matches none of: {}", priorities.join(", "))
            }
        }
    }
}
