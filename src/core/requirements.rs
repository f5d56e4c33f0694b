//! Requirements vector and lenient normalization.
//!
//! Callers hand us loosely typed strings (from JSON bodies, TOML files or CLI
//! flags). Normalization never fails: missing or unrecognized values become
//! [`ValidationGap`]s which only lower confidence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-step categorical level shared by most requirement fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize_token(value).as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" | "moderate" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traffic {
    Low,
    Medium,
    High,
    Variable,
}

impl Traffic {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize_token(value).as_str() {
            "variable" | "spiky" | "bursty" => Some(Self::Variable),
            other => Level::parse(other).map(|level| match level {
                Level::Low => Self::Low,
                Level::Medium => Self::Medium,
                Level::High => Self::High,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSize {
    Small,
    Medium,
    Large,
}

impl TeamSize {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize_token(value).as_str() {
            "small" | "solo" | "1-5" => Some(Self::Small),
            "medium" | "med" | "6-20" => Some(Self::Medium),
            "large" | "enterprise" | "20+" => Some(Self::Large),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compliance {
    Yes,
    No,
}

impl Compliance {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize_token(value).as_str() {
            "yes" | "true" | "required" => Some(Self::Yes),
            "no" | "false" | "none" => Some(Self::No),
            _ => None,
        }
    }
}

fn normalize_token(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

/// Requirement fields, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequirementField {
    UserTraffic,
    Complexity,
    TeamSize,
    Scalability,
    Budget,
    Security,
    Maintenance,
    Performance,
    Compliance,
}

impl RequirementField {
    pub const REQUIRED: [RequirementField; 5] = [
        Self::UserTraffic,
        Self::Complexity,
        Self::TeamSize,
        Self::Scalability,
        Self::Budget,
    ];

    pub const OPTIONAL: [RequirementField; 4] = [
        Self::Security,
        Self::Maintenance,
        Self::Performance,
        Self::Compliance,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::UserTraffic => "userTraffic",
            Self::Complexity => "complexity",
            Self::TeamSize => "teamSize",
            Self::Scalability => "scalability",
            Self::Budget => "budget",
            Self::Security => "security",
            Self::Maintenance => "maintenance",
            Self::Performance => "performance",
            Self::Compliance => "compliance",
        }
    }
}

impl fmt::Display for RequirementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A requirement value that could not be used as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationGap {
    MissingRequired { field: RequirementField },
    Unrecognized { field: RequirementField, value: String },
}

impl fmt::Display for ValidationGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired { field } => write!(f, "missing required field '{}'", field),
            Self::Unrecognized { field, value } => {
                write!(f, "unrecognized value '{}' for '{}'", value, field)
            }
        }
    }
}

/// Untyped requirements as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_traffic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<String>,
}

impl RawRequirements {
    /// Fields set in `overrides` replace the ones in `self`.
    pub fn with_overrides(self, overrides: RawRequirements) -> Self {
        Self {
            user_traffic: overrides.user_traffic.or(self.user_traffic),
            complexity: overrides.complexity.or(self.complexity),
            team_size: overrides.team_size.or(self.team_size),
            scalability: overrides.scalability.or(self.scalability),
            budget: overrides.budget.or(self.budget),
            security: overrides.security.or(self.security),
            maintenance: overrides.maintenance.or(self.maintenance),
            performance: overrides.performance.or(self.performance),
            compliance: overrides.compliance.or(self.compliance),
        }
    }

    fn value(&self, field: RequirementField) -> Option<&str> {
        let value = match field {
            RequirementField::UserTraffic => &self.user_traffic,
            RequirementField::Complexity => &self.complexity,
            RequirementField::TeamSize => &self.team_size,
            RequirementField::Scalability => &self.scalability,
            RequirementField::Budget => &self.budget,
            RequirementField::Security => &self.security,
            RequirementField::Maintenance => &self.maintenance,
            RequirementField::Performance => &self.performance,
            RequirementField::Compliance => &self.compliance,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }
}

/// Typed requirements vector. Every field is optional so that evaluation
/// can always proceed; presence feeds the confidence estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementsVector {
    pub user_traffic: Option<Traffic>,
    pub complexity: Option<Level>,
    pub team_size: Option<TeamSize>,
    pub scalability: Option<Level>,
    pub budget: Option<Level>,
    pub security: Option<Level>,
    pub maintenance: Option<Level>,
    pub performance: Option<Level>,
    pub compliance: Option<Compliance>,
}

impl RequirementsVector {
    /// Normalize raw caller input, collecting every gap found on the way.
    pub fn from_raw(raw: &RawRequirements) -> (Self, Vec<ValidationGap>) {
        let mut gaps: Vec<ValidationGap> = RequirementField::REQUIRED
            .iter()
            .filter(|field| raw.value(**field).is_none())
            .map(|&field| ValidationGap::MissingRequired { field })
            .collect();

        let vector = Self {
            user_traffic: parse_field(
                raw,
                RequirementField::UserTraffic,
                Traffic::parse,
                &mut gaps,
            ),
            complexity: parse_field(raw, RequirementField::Complexity, Level::parse, &mut gaps),
            team_size: parse_field(raw, RequirementField::TeamSize, TeamSize::parse, &mut gaps),
            scalability: parse_field(raw, RequirementField::Scalability, Level::parse, &mut gaps),
            budget: parse_field(raw, RequirementField::Budget, Level::parse, &mut gaps),
            security: parse_field(raw, RequirementField::Security, Level::parse, &mut gaps),
            maintenance: parse_field(raw, RequirementField::Maintenance, Level::parse, &mut gaps),
            performance: parse_field(raw, RequirementField::Performance, Level::parse, &mut gaps),
            compliance: parse_field(
                raw,
                RequirementField::Compliance,
                Compliance::parse,
                &mut gaps,
            ),
        };

        for gap in &gaps {
            log::debug!("Requirements validation gap: {}", gap);
        }

        (vector, gaps)
    }

    pub fn is_present(&self, field: RequirementField) -> bool {
        match field {
            RequirementField::UserTraffic => self.user_traffic.is_some(),
            RequirementField::Complexity => self.complexity.is_some(),
            RequirementField::TeamSize => self.team_size.is_some(),
            RequirementField::Scalability => self.scalability.is_some(),
            RequirementField::Budget => self.budget.is_some(),
            RequirementField::Security => self.security.is_some(),
            RequirementField::Maintenance => self.maintenance.is_some(),
            RequirementField::Performance => self.performance.is_some(),
            RequirementField::Compliance => self.compliance.is_some(),
        }
    }

    // Builder-style setters, mostly for tests and the CLI.
    pub fn with_user_traffic(mut self, value: Traffic) -> Self {
        self.user_traffic = Some(value);
        self
    }

    pub fn with_complexity(mut self, value: Level) -> Self {
        self.complexity = Some(value);
        self
    }

    pub fn with_team_size(mut self, value: TeamSize) -> Self {
        self.team_size = Some(value);
        self
    }

    pub fn with_scalability(mut self, value: Level) -> Self {
        self.scalability = Some(value);
        self
    }

    pub fn with_budget(mut self, value: Level) -> Self {
        self.budget = Some(value);
        self
    }

    pub fn with_security(mut self, value: Level) -> Self {
        self.security = Some(value);
        self
    }

    pub fn with_maintenance(mut self, value: Level) -> Self {
        self.maintenance = Some(value);
        self
    }

    pub fn with_performance(mut self, value: Level) -> Self {
        self.performance = Some(value);
        self
    }

    pub fn with_compliance(mut self, value: Compliance) -> Self {
        self.compliance = Some(value);
        self
    }
}

fn parse_field<T>(
    raw: &RawRequirements,
    field: RequirementField,
    parse: fn(&str) -> Option<T>,
    gaps: &mut Vec<ValidationGap>,
) -> Option<T> {
    let value = raw.value(field)?;
    let parsed = parse(value);
    if parsed.is_none() {
        log::warn!("Ignoring unrecognized value '{}' for '{}'", value, field);
        gaps.push(ValidationGap::Unrecognized {
            field,
            value: value.to_string(),
        });
    }
    parsed
}
