//! Relative cost model.
//!
//! Costs are unitless multiples of a baseline; only their ratios to the
//! budget tier matter.

use crate::core::analysis::CostAnalysis;
use crate::core::clamp_percent;
use crate::core::profiles::ArchitectureKind;
use crate::core::requirements::{Level, RequirementsVector};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseCosts {
    pub development: f64,
    pub maintenance: f64,
    pub infrastructure: f64,
}

impl BaseCosts {
    pub fn for_kind(kind: ArchitectureKind) -> Self {
        let (development, maintenance, infrastructure) = match kind {
            ArchitectureKind::Monolithic => (1.0, 0.8, 0.6),
            ArchitectureKind::Microservices => (1.5, 1.3, 1.2),
            ArchitectureKind::Serverless => (0.8, 0.6, 1.0),
            ArchitectureKind::Soa => (1.3, 1.2, 1.0),
        };
        Self {
            development,
            maintenance,
            infrastructure,
        }
    }

    pub fn sum(&self) -> f64 {
        self.development + self.maintenance + self.infrastructure
    }
}

pub fn complexity_multiplier(level: Option<Level>) -> f64 {
    match level {
        Some(Level::High) => 1.3,
        Some(Level::Medium) => 1.1,
        _ => 1.0,
    }
}

pub fn scalability_multiplier(level: Option<Level>) -> f64 {
    match level {
        Some(Level::High) => 1.2,
        _ => 1.0,
    }
}

/// Absent budget is treated like a medium budget.
pub fn budget_multiplier(level: Option<Level>) -> f64 {
    match level {
        Some(Level::Low) => 0.7,
        Some(Level::High) => 1.5,
        _ => 1.0,
    }
}

/// Cost efficiency in `[0, 100]`. A non-positive or non-finite total cost
/// yields 0 rather than a division fault.
pub fn cost_efficiency(budget_multiplier: f64, total_cost: f64) -> f64 {
    if !total_cost.is_finite() || total_cost <= 0.0 {
        return 0.0;
    }
    clamp_percent(budget_multiplier / total_cost * 100.0)
}

pub fn analyze_cost(kind: ArchitectureKind, req: &RequirementsVector) -> CostAnalysis {
    analyze_base_costs(BaseCosts::for_kind(kind), req)
}

pub fn analyze_base_costs(base: BaseCosts, req: &RequirementsVector) -> CostAnalysis {
    let scale = complexity_multiplier(req.complexity) * scalability_multiplier(req.scalability);
    let total_cost = base.sum() * scale;

    CostAnalysis {
        development_cost: base.development * scale,
        maintenance_cost: base.maintenance * scale,
        infrastructure_cost: base.infrastructure * scale,
        total_cost,
        cost_efficiency: cost_efficiency(budget_multiplier(req.budget), total_cost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_microservices_high_complexity_high_scalability() {
        let req = RequirementsVector::default()
            .with_complexity(Level::High)
            .with_scalability(Level::High)
            .with_budget(Level::High);
        let cost = analyze_cost(ArchitectureKind::Microservices, &req);

        let expected = (1.5 + 1.3 + 1.2) * 1.3 * 1.2;
        assert!((cost.total_cost - 6.24).abs() < 1e-9);
        assert!((cost.total_cost - expected).abs() < 1e-12);
        assert!((cost.cost_efficiency - 1.5 / expected * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_components_sum_to_total() {
        let req = RequirementsVector::default().with_complexity(Level::Medium);
        let cost = analyze_cost(ArchitectureKind::Soa, &req);
        let sum = cost.development_cost + cost.maintenance_cost + cost.infrastructure_cost;
        assert!((sum - cost.total_cost).abs() < 1e-9);
    }

    #[test]
    fn test_efficiency_is_clamped() {
        let req = RequirementsVector::default().with_budget(Level::High);
        let base = BaseCosts {
            development: 0.2,
            maintenance: 0.2,
            infrastructure: 0.2,
        };
        assert_eq!(analyze_base_costs(base, &req).cost_efficiency, 100.0);
    }

    #[test]
    fn test_zero_total_cost_is_guarded() {
        let base = BaseCosts {
            development: 0.0,
            maintenance: 0.0,
            infrastructure: 0.0,
        };
        let cost = analyze_base_costs(base, &RequirementsVector::default());
        assert_eq!(cost.total_cost, 0.0);
        assert_eq!(cost.cost_efficiency, 0.0);
        assert_eq!(cost_efficiency(1.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(complexity_multiplier(Some(Level::Low)), 1.0);
        assert_eq!(complexity_multiplier(None), 1.0);
        assert_eq!(scalability_multiplier(Some(Level::Medium)), 1.0);
        assert_eq!(budget_multiplier(Some(Level::Low)), 0.7);
        assert_eq!(budget_multiplier(None), 1.0);
    }
}
