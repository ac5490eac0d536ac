use crate::workflows::discovery::domain::{Competitiveness, SchoolCategory};
use serde::Serialize;

/// One step of a school's application lead time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub window: &'static str,
    pub task: &'static str,
}

/// One season of the general admissions year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdmissionsPhase {
    pub phase: &'static str,
    pub timeframe: &'static str,
    pub tasks: &'static [&'static str],
}

/// Local admissions coaching, listed for selective or tested schools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportResource {
    pub name: &'static str,
    pub focus: &'static str,
    pub location: &'static str,
    pub services: &'static [&'static str],
}

const fn milestone(window: &'static str, task: &'static str) -> Milestone {
    Milestone { window, task }
}

const IB_TIMELINE: &[Milestone] = &[
    milestone("24-18 months before", "Research schools, attend information sessions"),
    milestone("18-12 months before", "Begin application process, book tours"),
    milestone("12-6 months before", "Complete applications, prepare for assessments"),
    milestone("6-3 months before", "Interviews, assessments, SSAT if required"),
    milestone("3-1 months before", "Decision notifications, enrollment deposits"),
    milestone("Summer before", "Orientation, uniform fittings, final preparations"),
];

const PRIVATE_TIMELINE: &[Milestone] = &[
    milestone("18-12 months before", "Research schools, attend open houses"),
    milestone("12-8 months before", "Complete applications, gather documents"),
    milestone("8-4 months before", "Assessments, interviews, testing"),
    milestone("4-2 months before", "Decision notifications, enrollment"),
    milestone("Summer before", "Orientation and preparation"),
];

const PUBLIC_TIMELINE: &[Milestone] = &[
    milestone("12-6 months before", "Research choice programs"),
    milestone("6-4 months before", "Submit applications by VSB deadline"),
    milestone("4-2 months before", "Lottery results, placement notifications"),
    milestone("Summer before", "School registration and preparation"),
];

/// Lead-time milestones counted back from the start date. Categories
/// without their own schedule follow the private-school one.
pub fn application_timeline(category: SchoolCategory) -> &'static [Milestone] {
    match category {
        SchoolCategory::IbProgram => IB_TIMELINE,
        SchoolCategory::Public | SchoolCategory::MiniSchool => PUBLIC_TIMELINE,
        SchoolCategory::Private
        | SchoolCategory::Independent
        | SchoolCategory::Religious
        | SchoolCategory::Montessori
        | SchoolCategory::Alternative => PRIVATE_TIMELINE,
    }
}

const ADMISSIONS_CALENDAR: &[AdmissionsPhase] = &[
    AdmissionsPhase {
        phase: "Early Planning",
        timeframe: "January-March (year before)",
        tasks: &[
            "Research schools and programs",
            "Attend open houses and tours",
            "Start SSAT preparation if needed",
            "Plan family budget and financial aid needs",
        ],
    },
    AdmissionsPhase {
        phase: "Spring Preparation",
        timeframe: "April-August",
        tasks: &[
            "Continue SSAT prep (minimum 6 weeks)",
            "Gather required documents",
            "Request recommendation letters",
            "Plan school visits and tours",
        ],
    },
    AdmissionsPhase {
        phase: "Application Season",
        timeframe: "September-December",
        tasks: &[
            "Attend school open houses",
            "Take SSAT exams (if required)",
            "Submit applications before deadlines",
            "Complete parent/student interviews",
        ],
    },
    AdmissionsPhase {
        phase: "Assessment Period",
        timeframe: "January-February",
        tasks: &[
            "Participate in school assessments",
            "Complete student interviews",
            "Submit any additional documents",
            "Wait for admission decisions",
        ],
    },
    AdmissionsPhase {
        phase: "Decision Time",
        timeframe: "March-April",
        tasks: &[
            "Receive admission decisions",
            "Make final school choice",
            "Submit enrollment deposits",
            "Plan for September start",
        ],
    },
];

/// The five seasons of a typical Lower Mainland admissions year.
pub fn admissions_calendar() -> &'static [AdmissionsPhase] {
    ADMISSIONS_CALENDAR
}

const TUTORING_RESOURCES: &[SupportResource] = &[
    SupportResource {
        name: "KEY Education",
        focus: "SSAT prep, Private school admissions consulting",
        location: "Vancouver",
        services: &[
            "SSAT preparation",
            "Admissions consulting",
            "Interview coaching",
            "Academic tutoring",
        ],
    },
    SupportResource {
        name: "Aspire Math Academy",
        focus: "Private school entrance coaching",
        location: "West Vancouver",
        services: &[
            "SSAT preparation",
            "Mock interviews",
            "Application assistance",
            "Confidence building",
        ],
    },
    SupportResource {
        name: "Test Innovators",
        focus: "SSAT online preparation",
        location: "Online",
        services: &[
            "SSAT practice tests",
            "Adaptive learning",
            "Progress tracking",
        ],
    },
];

pub fn tutoring_resources() -> &'static [SupportResource] {
    TUTORING_RESOURCES
}

/// Schools that warrant pointing the family at outside coaching.
pub fn needs_admissions_support(
    competitiveness: Competitiveness,
    admissions_test_required: bool,
) -> bool {
    admissions_test_required || competitiveness >= Competitiveness::VeryHigh
}
