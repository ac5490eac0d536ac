use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

pub const MIN_CHILD_AGE: u8 = 2;
pub const MAX_CHILD_AGE: u8 = 18;
pub const MAX_BUDGET: u32 = 50_000;
pub const BUDGET_STEP: u32 = 2_500;

/// Priority labels offered to families on the profile step.
pub const PRIORITY_VOCABULARY: [&str; 8] = [
    "Academic Excellence",
    "Arts & Creativity",
    "Small Class Sizes",
    "Language Learning",
    "Gifted Programs",
    "Technology Focus",
    "Outdoor Education",
    "Strong Community",
];

pub const LOCATION_OPTIONS: [&str; 4] = ["Vancouver", "Burnaby", "Richmond", "Flexible"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolCategory {
    Public,
    Private,
    Independent,
    Religious,
    MiniSchool,
    IbProgram,
    Montessori,
    Alternative,
}

impl SchoolCategory {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Public,
            Self::Private,
            Self::Independent,
            Self::Religious,
            Self::MiniSchool,
            Self::IbProgram,
            Self::Montessori,
            Self::Alternative,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
            Self::Independent => "Independent",
            Self::Religious => "Religious",
            Self::MiniSchool => "Mini School",
            Self::IbProgram => "IB Program",
            Self::Montessori => "Montessori",
            Self::Alternative => "Alternative",
        }
    }

    /// Resolves dataset labels, including the aliases used by older exports.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "independent" => Some(Self::Independent),
            "religious" | "catholic" => Some(Self::Religious),
            "mini school" | "mini-school" | "mini_school" => Some(Self::MiniSchool),
            "ib" | "ib program" | "ib_program" => Some(Self::IbProgram),
            "montessori" => Some(Self::Montessori),
            "alternative" | "charter" => Some(Self::Alternative),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelBand {
    Preschool,
    Elementary,
    Middle,
    High,
    AllAges,
}

impl LevelBand {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Preschool,
            Self::Elementary,
            Self::Middle,
            Self::High,
            Self::AllAges,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Preschool => "Preschool",
            Self::Elementary => "Elementary",
            Self::Middle => "Middle",
            Self::High => "High",
            Self::AllAges => "All Ages (K-12)",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "preschool" => Some(Self::Preschool),
            "elementary" => Some(Self::Elementary),
            "middle" => Some(Self::Middle),
            "high" => Some(Self::High),
            "k12" | "k-12" | "all-ages" | "all ages" | "all_ages" => Some(Self::AllAges),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Competitiveness {
    Low,
    Moderate,
    High,
    VeryHigh,
    ExtremelyHigh,
}

impl Competitiveness {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::ExtremelyHigh => "Extremely High",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            "very high" | "very-high" | "very_high" => Some(Self::VeryHigh),
            "extremely high" | "extremely-high" | "extremely_high" => Some(Self::ExtremelyHigh),
            _ => None,
        }
    }
}

/// Annual tuition as published by the school.
///
/// `Free` is only ever produced from an explicit "Free" marker; a numeric
/// amount of zero stays `Numeric(0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Tuition {
    Numeric(u32),
    Free,
    Variable(String),
}

impl Tuition {
    /// Resolves a JSON-style numeric amount. Rejects negative, fractional,
    /// non-finite and out-of-range values.
    pub fn from_amount(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 || amount.fract() != 0.0 {
            return None;
        }
        if amount > u32::MAX as f64 {
            return None;
        }
        Some(Self::Numeric(amount as u32))
    }

    /// Resolves a textual tuition cell. Blank text does not resolve.
    pub fn parse_text(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.eq_ignore_ascii_case("free") {
            return Some(Self::Free);
        }
        if let Some(amount) = parse_plain_amount(trimmed) {
            return Some(Self::Numeric(amount));
        }
        Some(Self::Variable(trimmed.to_string()))
    }

    pub const fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    pub fn label(&self) -> String {
        match self {
            Self::Numeric(amount) => format!("${}/yr", format_amount(*amount)),
            Self::Free => "Free".to_string(),
            Self::Variable(text) => text.clone(),
        }
    }
}

impl fmt::Display for Tuition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

fn parse_plain_amount(value: &str) -> Option<u32> {
    let digits = value.strip_prefix('$').unwrap_or(value);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == ',') {
        return None;
    }
    if digits.starts_with(',') || digits.ends_with(',') {
        return None;
    }
    digits.replace(',', "").parse::<u32>().ok()
}

/// Formats an amount with comma thousands separators (`42500` -> `42,500`).
pub fn format_amount(amount: u32) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

fn normalize_label(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolRecord {
    pub id: String,
    pub name: String,
    pub category: SchoolCategory,
    pub level_band: LevelBand,
    pub grade_range: String,
    pub location: String,
    pub tuition: Tuition,
    pub specialty_tags: Vec<String>,
    pub feature_tags: Vec<String>,
    pub description: String,
    pub competitiveness: Competitiveness,
    pub application_deadline: String,
    pub website: Option<String>,
    pub financial_aid: bool,
    pub admissions_test_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationPreference {
    #[default]
    Flexible,
    Municipality(String),
}

impl LocationPreference {
    /// "Flexible" (any case) and blank input mean no location constraint.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("flexible") {
            Self::Flexible
        } else {
            Self::Municipality(trimmed.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Flexible => "Flexible",
            Self::Municipality(name) => name,
        }
    }
}

/// Annual budget ceiling. Zero restricts results to free programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Budget(pub u32);

impl Budget {
    pub const PUBLIC_ONLY: Self = Self(0);

    pub const fn amount(self) -> u32 {
        self.0
    }

    pub const fn is_public_only(self) -> bool {
        self.0 == 0
    }

    pub fn label(self) -> String {
        if self.is_public_only() {
            "Public only (Free)".to_string()
        } else {
            format!("Up to ${}/yr", format_amount(self.0))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyProfile {
    pub child_age: u8,
    pub location: LocationPreference,
    pub budget: Budget,
    pub priorities: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_name: Option<String>,
}

impl FamilyProfile {
    pub fn new(child_age: u8) -> Self {
        Self {
            child_age,
            location: LocationPreference::Flexible,
            budget: Budget::PUBLIC_ONLY,
            priorities: BTreeSet::new(),
            parent_name: None,
            child_name: None,
        }
    }

    pub fn with_age(mut self, child_age: u8) -> Self {
        self.child_age = child_age;
        self
    }

    pub fn with_location(mut self, location: LocationPreference) -> Self {
        self.location = location;
        self
    }

    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = Budget(budget);
        self
    }

    pub fn with_priority(mut self, tag: impl Into<String>) -> Self {
        self.priorities.insert(tag.into());
        self
    }

    pub fn with_priorities<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priorities.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Adds the tag when absent, removes it when present.
    pub fn toggle_priority(mut self, tag: &str) -> Self {
        if !self.priorities.remove(tag) {
            self.priorities.insert(tag.to_string());
        }
        self
    }

    pub fn with_parent_name(mut self, name: Option<String>) -> Self {
        self.parent_name = name.filter(|value| !value.trim().is_empty());
        self
    }

    pub fn with_child_name(mut self, name: Option<String>) -> Self {
        self.child_name = name.filter(|value| !value.trim().is_empty());
        self
    }

    /// Name used in report copy, falling back to "your child".
    pub fn child_display_name(&self) -> &str {
        self.child_name.as_deref().unwrap_or("your child")
    }
}
