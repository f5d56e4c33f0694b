//! Risk heuristics for one architecture against one requirements vector.
//!
//! Risk starts from the architecture's baseline factor and grows by a fixed
//! increment for each mismatch between the caller's requirements and the
//! architecture's reference criteria.

use crate::config::thresholds::{LOW_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};
use crate::core::analysis::{RiskAssessment, RiskLevel};
use crate::core::clamp_unit;
use crate::core::profiles::ArchitectureProfile;
use crate::core::requirements::{Level, RequirementsVector, TeamSize};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Mitigation used when a risk label has no dedicated entry.
pub const GENERIC_MITIGATION: &str =
    "Consult experienced architects to review this decision before committing";

/// A detected requirement/criteria mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mismatch {
    Complexity,
    Scalability,
    Budget,
    TeamSize,
}

impl Mismatch {
    pub fn label(self) -> &'static str {
        match self {
            Self::Complexity => "complexity_mismatch",
            Self::Scalability => "scalability_mismatch",
            Self::Budget => "budget_constraint",
            Self::TeamSize => "team_size_mismatch",
        }
    }

    pub fn increment(self) -> f64 {
        match self {
            Self::Complexity => 0.20,
            Self::Scalability => 0.15,
            Self::Budget => 0.25,
            Self::TeamSize => 0.10,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Complexity => "High project complexity exceeds what this architecture is designed for",
            Self::Scalability => "High scalability needs exceed this architecture's typical reach",
            Self::Budget => "Low budget conflicts with this architecture's cost profile",
            Self::TeamSize => "Small team may struggle with this architecture's operational load",
        }
    }
}

static MITIGATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "complexity_mismatch",
            "Break the domain into well-defined modules and introduce complexity incrementally",
        ),
        (
            "scalability_mismatch",
            "Add caching, read replicas and horizontal scaling at known bottlenecks",
        ),
        (
            "budget_constraint",
            "Phase the rollout and prefer managed services to keep fixed costs down",
        ),
        (
            "team_size_mismatch",
            "Invest in automation and tooling, or grow the team before scaling the architecture",
        ),
    ])
});

/// Mitigation text for a risk label, falling back to [`GENERIC_MITIGATION`].
pub fn mitigation_for(label: &str) -> &'static str {
    MITIGATIONS.get(label).copied().unwrap_or(GENERIC_MITIGATION)
}

/// Detect every requirement/criteria mismatch, in a fixed order.
pub fn detect_mismatches(
    profile: &ArchitectureProfile,
    req: &RequirementsVector,
) -> Vec<Mismatch> {
    let criteria = &profile.criteria;
    let checks = [
        (
            Mismatch::Complexity,
            req.complexity == Some(Level::High) && criteria.complexity == Level::Low,
        ),
        (
            Mismatch::Scalability,
            req.scalability == Some(Level::High) && criteria.scalability == Level::Low,
        ),
        (
            Mismatch::Budget,
            req.budget == Some(Level::Low) && criteria.budget == Level::High,
        ),
        (
            Mismatch::TeamSize,
            req.team_size == Some(TeamSize::Small) && criteria.team_size == TeamSize::Large,
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(mismatch, triggered)| triggered.then_some(mismatch))
        .collect()
}

/// Classify overall risk. Bounds are exclusive on the low side: exactly the
/// low threshold is already `Medium`.
pub fn classify_risk_level(overall_risk: f64, low: f64, medium: f64) -> RiskLevel {
    if overall_risk < low {
        RiskLevel::Low
    } else if overall_risk < medium {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

pub fn assess_risk(profile: &ArchitectureProfile, req: &RequirementsVector) -> RiskAssessment {
    assess_risk_with_thresholds(profile, req, LOW_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD)
}

pub fn assess_risk_with_thresholds(
    profile: &ArchitectureProfile,
    req: &RequirementsVector,
    low: f64,
    medium: f64,
) -> RiskAssessment {
    let mismatches = detect_mismatches(profile, req);

    let total = mismatches
        .iter()
        .fold(profile.risk_factor(), |acc, m| acc + m.increment());
    let overall_risk = clamp_unit(total.min(1.0));

    RiskAssessment {
        overall_risk,
        risk_level: classify_risk_level(overall_risk, low, medium),
        risk_factors: mismatches
            .iter()
            .map(|m| m.description().to_string())
            .collect(),
        mitigations: mismatches
            .iter()
            .map(|m| mitigation_for(m.label()).to_string())
            .collect(),
    }
}
