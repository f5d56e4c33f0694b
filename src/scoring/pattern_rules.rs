use crate::core::clamp_percent;
use crate::core::requirements::{Compliance, Level, RequirementsVector, TeamSize, Traffic};

/// Context scoring rule for a design pattern.
///
/// Each rule starts from a base score and adds bonuses for requirement
/// values that make the pattern more useful. Results are clamped to
/// `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRule {
    ApiGateway,
    CircuitBreaker,
    EventSourcing,
    Cqrs,
    Saga,
    ServiceRegistry,
    Layered,
    Repository,
    StranglerFig,
    BackendForFrontend,
    EnterpriseServiceBus,
    FunctionFanOut,
}

impl PatternRule {
    pub fn context_score(self, req: &RequirementsVector) -> f64 {
        let score = match self {
            Self::ApiGateway => {
                50.0 + traffic_bonus(req, 20.0, 10.0)
                    + level_bonus(req.security, 15.0, 5.0)
                    + level_bonus(req.complexity, 10.0, 5.0)
            }
            Self::CircuitBreaker => {
                45.0 + level_bonus(req.scalability, 20.0, 10.0)
                    + traffic_bonus(req, 15.0, 5.0)
                    + level_bonus(req.performance, 10.0, 5.0)
            }
            Self::EventSourcing => {
                35.0 + level_bonus(req.complexity, 20.0, 5.0)
                    + compliance_bonus(req, 25.0)
                    + level_bonus(req.scalability, 10.0, 0.0)
            }
            Self::Cqrs => {
                40.0 + level_bonus(req.performance, 20.0, 10.0)
                    + traffic_bonus(req, 15.0, 5.0)
                    + level_bonus(req.complexity, 10.0, 0.0)
            }
            Self::Saga => {
                40.0 + level_bonus(req.complexity, 25.0, 10.0)
                    + team_bonus(req, 0.0, 10.0, 15.0)
                    + compliance_bonus(req, 10.0)
            }
            Self::ServiceRegistry => {
                40.0 + level_bonus(req.scalability, 25.0, 10.0)
                    + team_bonus(req, 0.0, 10.0, 20.0)
            }
            Self::Layered => {
                55.0 + team_bonus(req, 20.0, 10.0, 0.0)
                    + low_level_bonus(req.complexity, 15.0)
                    + level_bonus(req.maintenance, 10.0, 5.0)
            }
            Self::Repository => {
                60.0 + level_bonus(req.maintenance, 20.0, 10.0)
                    + level_bonus(req.complexity, 5.0, 10.0)
            }
            Self::StranglerFig => {
                35.0 + level_bonus(req.maintenance, 25.0, 10.0)
                    + level_bonus(req.complexity, 15.0, 5.0)
                    + low_level_bonus(req.budget, 10.0)
            }
            Self::BackendForFrontend => {
                45.0 + traffic_bonus(req, 15.0, 10.0)
                    + level_bonus(req.performance, 15.0, 5.0)
                    + team_bonus(req, 0.0, 10.0, 10.0)
            }
            Self::EnterpriseServiceBus => {
                35.0 + compliance_bonus(req, 20.0)
                    + level_bonus(req.security, 15.0, 5.0)
                    + team_bonus(req, 0.0, 5.0, 20.0)
            }
            Self::FunctionFanOut => {
                40.0 + variable_traffic_bonus(req, 35.0)
                    + low_level_bonus(req.budget, 15.0)
                    + level_bonus(req.scalability, 10.0, 5.0)
            }
        };

        clamp_percent(score)
    }
}

fn level_bonus(level: Option<Level>, high: f64, medium: f64) -> f64 {
    match level {
        Some(Level::High) => high,
        Some(Level::Medium) => medium,
        _ => 0.0,
    }
}

fn low_level_bonus(level: Option<Level>, low: f64) -> f64 {
    if level == Some(Level::Low) {
        low
    } else {
        0.0
    }
}

fn traffic_bonus(req: &RequirementsVector, high: f64, medium: f64) -> f64 {
    match req.user_traffic {
        Some(Traffic::High) | Some(Traffic::Variable) => high,
        Some(Traffic::Medium) => medium,
        _ => 0.0,
    }
}

fn variable_traffic_bonus(req: &RequirementsVector, bonus: f64) -> f64 {
    if req.user_traffic == Some(Traffic::Variable) {
        bonus
    } else {
        0.0
    }
}

fn team_bonus(req: &RequirementsVector, small: f64, medium: f64, large: f64) -> f64 {
    match req.team_size {
        Some(TeamSize::Small) => small,
        Some(TeamSize::Medium) => medium,
        Some(TeamSize::Large) => large,
        None => 0.0,
    }
}

fn compliance_bonus(req: &RequirementsVector, bonus: f64) -> f64 {
    if req.compliance == Some(Compliance::Yes) {
        bonus
    } else {
        0.0
    }
}
