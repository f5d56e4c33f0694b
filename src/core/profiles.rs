//! Immutable catalog profile types.
//!
//! Profiles are built once when the catalog is constructed and are only ever
//! handed out by shared reference. Nothing computed per evaluation is stored
//! here; see [`crate::core::analysis`] for the per-call results.

use crate::core::requirements::{Level, TeamSize, Traffic};
use crate::scoring::pattern_rules::PatternRule;
use crate::scoring::strategy::ScoringStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchitectureKind {
    Monolithic,
    Microservices,
    Serverless,
    Soa,
}

impl ArchitectureKind {
    pub const ALL: [ArchitectureKind; 4] = [
        Self::Monolithic,
        Self::Microservices,
        Self::Serverless,
        Self::Soa,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Monolithic => "monolithic",
            Self::Microservices => "microservices",
            Self::Serverless => "serverless",
            Self::Soa => "soa",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl fmt::Display for ArchitectureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Typical requirement values an architecture is designed for. Risk
/// assessment compares the caller's requirements against these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceCriteria {
    pub user_traffic: Traffic,
    pub complexity: Level,
    pub team_size: TeamSize,
    pub scalability: Level,
    pub budget: Level,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureProfile {
    pub id: &'static str,
    pub kind: ArchitectureKind,
    pub name: &'static str,
    pub description: &'static str,
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
    pub best_for: &'static [&'static str],
    pub criteria: ReferenceCriteria,
    pub strategy: ScoringStrategy,
}

impl ArchitectureProfile {
    pub fn risk_factor(&self) -> f64 {
        self.strategy.risk_factor()
    }
}

/// Qualitative rating used on design pattern profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPatternProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub use_case: &'static str,
    pub applicable_architectures: &'static [ArchitectureKind],
    pub complexity: Rating,
    pub performance: Rating,
    pub maintainability: Rating,
    #[serde(skip)]
    pub rule: PatternRule,
}

impl DesignPatternProfile {
    pub fn applies_to(&self, kind: ArchitectureKind) -> bool {
        self.applicable_architectures.contains(&kind)
    }
}
