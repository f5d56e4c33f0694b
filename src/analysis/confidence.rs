//! Confidence estimation.
//!
//! Confidence measures how completely the requirements vector was specified,
//! not how likely the recommendation is to be right.

use crate::core::clamp_percent;
use crate::core::requirements::{RequirementField, RequirementsVector};

pub const REQUIRED_FIELD_POINTS: f64 = 2.0;
pub const OPTIONAL_FIELD_POINTS: f64 = 1.0;

/// Highest attainable point total: 5 required fields at 2 points plus 4
/// optional fields at 1 point.
pub const MAX_CONFIDENCE_POINTS: f64 = RequirementField::REQUIRED.len() as f64
    * REQUIRED_FIELD_POINTS
    + RequirementField::OPTIONAL.len() as f64 * OPTIONAL_FIELD_POINTS;

pub fn calculate_confidence(req: &RequirementsVector) -> f64 {
    let required: f64 = RequirementField::REQUIRED
        .iter()
        .filter(|field| req.is_present(**field))
        .map(|_| REQUIRED_FIELD_POINTS)
        .sum();

    let optional: f64 = RequirementField::OPTIONAL
        .iter()
        .filter(|field| req.is_present(**field))
        .map(|_| OPTIONAL_FIELD_POINTS)
        .sum();

    clamp_percent((required + optional) / MAX_CONFIDENCE_POINTS * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::requirements::{Compliance, Level, TeamSize, Traffic};

    #[test]
    fn test_max_points() {
        assert_eq!(MAX_CONFIDENCE_POINTS, 14.0);
    }

    #[test]
    fn test_full_requirements_give_full_confidence() {
        let req = RequirementsVector::default()
            .with_user_traffic(Traffic::High)
            .with_complexity(Level::High)
            .with_team_size(TeamSize::Large)
            .with_scalability(Level::High)
            .with_budget(Level::High)
            .with_security(Level::High)
            .with_maintenance(Level::High)
            .with_performance(Level::High)
            .with_compliance(Compliance::Yes);
        assert_eq!(calculate_confidence(&req), 100.0);
    }

    #[test]
    fn test_required_only() {
        let req = RequirementsVector::default()
            .with_user_traffic(Traffic::Low)
            .with_complexity(Level::Low)
            .with_team_size(TeamSize::Small)
            .with_scalability(Level::Low)
            .with_budget(Level::Low);
        let confidence = calculate_confidence(&req);
        assert!((confidence - 10.0 / 14.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_requirements_give_zero() {
        assert_eq!(calculate_confidence(&RequirementsVector::default()), 0.0);
    }

    #[test]
    fn test_optional_fields_count_once() {
        let req = RequirementsVector::default().with_security(Level::Medium);
        let confidence = calculate_confidence(&req);
        assert!((confidence - 100.0 / 14.0).abs() < 1e-9);
    }
}
