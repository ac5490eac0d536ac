use super::views::AdviceSection;
use crate::workflows::discovery::domain::{Competitiveness, FamilyProfile};

/// Child age from which the plan reminds families about admissions testing.
pub const ADMISSIONS_TEST_AGE: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceHorizon {
    Immediate,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl AdviceHorizon {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Immediate,
            Self::ShortTerm,
            Self::MediumTerm,
            Self::LongTerm,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "This Week",
            Self::ShortTerm => "1-3 Months",
            Self::MediumTerm => "3-6 Months",
            Self::LongTerm => "Long-term",
        }
    }

    const fn bullets(self) -> &'static [&'static str] {
        match self {
            Self::Immediate => &[
                "Mark application deadlines in your calendar",
                "Research information sessions for {child}'s shortlisted schools",
                "Sign up for school newsletters to track updates",
            ],
            Self::ShortTerm => &[
                "Book tours and information nights",
                "Prepare applications and gather {child}'s school reports",
            ],
            Self::MediumTerm => &[
                "Plan academic enrichment or tutoring for {child}",
                "Practice interviews with {child}",
                "Review financial planning and aid options",
            ],
            Self::LongTerm => &[
                "Apply to backup schools",
                "Join parent community groups",
                "Monitor district policy and catchment changes",
            ],
        }
    }
}

/// The four fixed action checklists, personalized for the profile.
pub fn advice_sections(profile: &FamilyProfile) -> Vec<AdviceSection> {
    let child = profile.child_display_name();

    AdviceHorizon::ordered()
        .into_iter()
        .map(|horizon| {
            let mut bullets: Vec<String> = horizon
                .bullets()
                .iter()
                .map(|bullet| bullet.replace("{child}", child))
                .collect();

            if horizon == AdviceHorizon::ShortTerm && profile.child_age >= ADMISSIONS_TEST_AGE {
                bullets.push(format!("Register {child} for admissions tests (SSAT)"));
            }

            AdviceSection {
                horizon: horizon.label(),
                bullets,
            }
        })
        .collect()
}

/// Preparation guidance scaled to how selective a school is. The most
/// selective tier shares the very-high list.
pub fn preparation_tips(competitiveness: Competitiveness) -> &'static [&'static str] {
    match competitiveness {
        Competitiveness::ExtremelyHigh | Competitiveness::VeryHigh => &[
            "Start preparation 2+ years early",
            "Consider SSAT prep tutoring",
            "Build strong academic portfolio",
            "Develop leadership experiences",
            "Practice interview skills extensively",
        ],
        Competitiveness::High => &[
            "Start preparation 1-2 years early",
            "Maintain excellent grades",
            "Develop well-rounded interests",
            "Practice assessment activities",
            "Show genuine interest in school",
        ],
        Competitiveness::Moderate => &[
            "Start preparation 6-12 months early",
            "Show alignment with school values",
            "Prepare for assessment day",
            "Demonstrate child readiness",
            "Visit school multiple times",
        ],
        Competitiveness::Low => &[
            "Apply several months early",
            "Ensure basic requirements met",
            "Show interest and fit",
            "Complete application thoroughly",
        ],
    }
}
