use crate::core::profiles::ArchitectureKind;
use crate::core::requirements::{Level, RequirementsVector, TeamSize, Traffic};
use serde::Serialize;

/// Weights applied to the four component scores.
///
/// Complexity and scalability both use `performance`; there is no separate
/// scalability weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyWeights {
    pub performance: f64,
    pub cost: f64,
    pub maintenance: f64,
}

impl StrategyWeights {
    /// Sum of the weights as actually applied (performance counts twice).
    pub fn effective_sum(&self) -> f64 {
        self.performance * 2.0 + self.cost + self.maintenance
    }
}

/// Scoring rules for one architecture kind.
///
/// Dispatch is a `match` on the kind rather than stored closures, so a
/// strategy is `Copy` and carries no per-call state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringStrategy {
    pub kind: ArchitectureKind,
    pub weights: StrategyWeights,
    pub risk_factor: f64,
}

impl ScoringStrategy {
    pub const fn for_kind(kind: ArchitectureKind) -> Self {
        let (weights, risk_factor) = match kind {
            ArchitectureKind::Monolithic => (
                StrategyWeights {
                    performance: 0.25,
                    cost: 0.30,
                    maintenance: 0.20,
                },
                0.10,
            ),
            ArchitectureKind::Microservices => (
                StrategyWeights {
                    performance: 0.30,
                    cost: 0.20,
                    maintenance: 0.20,
                },
                0.20,
            ),
            ArchitectureKind::Serverless => (
                StrategyWeights {
                    performance: 0.30,
                    cost: 0.25,
                    maintenance: 0.15,
                },
                0.25,
            ),
            ArchitectureKind::Soa => (
                StrategyWeights {
                    performance: 0.30,
                    cost: 0.20,
                    maintenance: 0.20,
                },
                0.25,
            ),
        };

        Self {
            kind,
            weights,
            risk_factor,
        }
    }

    pub fn risk_factor(&self) -> f64 {
        self.risk_factor
    }

    pub fn complexity(&self, req: &RequirementsVector) -> f64 {
        match self.kind {
            ArchitectureKind::Monolithic => match req.complexity {
                Some(Level::Low) => 100.0,
                Some(Level::Medium) => 70.0,
                _ => 30.0,
            },
            ArchitectureKind::Microservices => match req.complexity {
                Some(Level::High) => 100.0,
                Some(Level::Medium) => 70.0,
                _ => 30.0,
            },
            ArchitectureKind::Serverless => match req.complexity {
                Some(Level::Low) => 90.0,
                Some(Level::Medium) => 80.0,
                _ => 50.0,
            },
            ArchitectureKind::Soa => match req.complexity {
                Some(Level::High) => 90.0,
                Some(Level::Medium) => 75.0,
                _ => 40.0,
            },
        }
    }

    pub fn scalability(&self, req: &RequirementsVector) -> f64 {
        match self.kind {
            ArchitectureKind::Monolithic => match req.scalability {
                Some(Level::Low) => 90.0,
                Some(Level::Medium) => 60.0,
                _ => 30.0,
            },
            ArchitectureKind::Microservices => match req.scalability {
                Some(Level::High) => 100.0,
                Some(Level::Medium) => 70.0,
                _ => 40.0,
            },
            // Pay-per-use absorbs bursty load regardless of the stated need
            ArchitectureKind::Serverless => match (req.user_traffic, req.scalability) {
                (Some(Traffic::Variable), _) => 100.0,
                (_, Some(Level::High)) => 90.0,
                (_, Some(Level::Medium)) => 70.0,
                _ => 50.0,
            },
            ArchitectureKind::Soa => match req.scalability {
                Some(Level::High) => 80.0,
                Some(Level::Medium) => 70.0,
                _ => 50.0,
            },
        }
    }

    pub fn cost(&self, req: &RequirementsVector) -> f64 {
        match self.kind {
            ArchitectureKind::Monolithic => match req.budget {
                Some(Level::Low) => 100.0,
                Some(Level::Medium) => 80.0,
                _ => 60.0,
            },
            ArchitectureKind::Microservices => match req.budget {
                Some(Level::High) => 90.0,
                Some(Level::Medium) => 60.0,
                _ => 20.0,
            },
            ArchitectureKind::Serverless => match req.budget {
                Some(Level::Low) => 90.0,
                Some(Level::Medium) => 80.0,
                _ => 60.0,
            },
            ArchitectureKind::Soa => match req.budget {
                Some(Level::High) => 80.0,
                Some(Level::Medium) => 60.0,
                _ => 30.0,
            },
        }
    }

    pub fn maintenance(&self, req: &RequirementsVector) -> f64 {
        match self.kind {
            ArchitectureKind::Monolithic => match req.team_size {
                Some(TeamSize::Small) => 90.0,
                Some(TeamSize::Medium) => 70.0,
                _ => 40.0,
            },
            ArchitectureKind::Microservices => match req.team_size {
                Some(TeamSize::Large) => 90.0,
                Some(TeamSize::Medium) => 70.0,
                _ => 30.0,
            },
            ArchitectureKind::Serverless => match req.team_size {
                Some(TeamSize::Small) => 90.0,
                Some(TeamSize::Medium) => 80.0,
                _ => 60.0,
            },
            ArchitectureKind::Soa => match req.team_size {
                Some(TeamSize::Large) => 85.0,
                Some(TeamSize::Medium) => 70.0,
                _ => 40.0,
            },
        }
    }
}
