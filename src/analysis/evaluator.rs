use crate::analysis::confidence::calculate_confidence;
use crate::analysis::cost::analyze_cost;
use crate::catalog::CatalogStore;
use crate::config::thresholds::ThresholdsConfig;
use crate::core::analysis::{AnalysisResult, ComponentScores};
use crate::core::clamp_percent;
use crate::core::profiles::ArchitectureProfile;
use crate::core::requirements::RequirementsVector;
use crate::observability::{set_current_architecture, set_phase, PipelinePhase};
use crate::risk::assess_risk_with_thresholds;
use rayon::prelude::*;

/// Evaluates architectures against a requirements vector.
///
/// The evaluator only reads the profile it is given and allocates a fresh
/// [`AnalysisResult`] per call, so it can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    thresholds: ThresholdsConfig,
}

impl Evaluator {
    pub fn new(thresholds: ThresholdsConfig) -> Self {
        Self { thresholds }
    }

    pub fn evaluate(
        &self,
        profile: &'static ArchitectureProfile,
        req: &RequirementsVector,
    ) -> AnalysisResult {
        let _phase = set_phase(PipelinePhase::Evaluation);
        let _arch = set_current_architecture(profile.id);

        let component_scores = component_scores(profile, req);
        let weighted = weighted_sum(profile, &component_scores);
        let score = clamp_percent(weighted * (1.0 - profile.risk_factor()));

        let result = AnalysisResult {
            architecture_id: profile.id,
            score,
            confidence: calculate_confidence(req),
            component_scores,
            risk_assessment: assess_risk_with_thresholds(
                profile,
                req,
                self.thresholds.low_risk,
                self.thresholds.medium_risk,
            ),
            cost_analysis: analyze_cost(profile.kind, req),
        };

        log::debug!(
            "Evaluated {}: score={:.1} confidence={:.1} risk={:.2} ({})",
            profile.id,
            result.score,
            result.confidence,
            result.risk_assessment.overall_risk,
            result.risk_assessment.risk_level
        );

        result
    }

    /// Evaluate every catalog architecture. Results keep catalog order.
    pub fn evaluate_all(
        &self,
        catalog: &CatalogStore,
        req: &RequirementsVector,
    ) -> Vec<AnalysisResult> {
        catalog
            .list_architectures()
            .par_iter()
            .map(|profile| self.evaluate(profile, req))
            .collect()
    }
}

pub fn component_scores(
    profile: &ArchitectureProfile,
    req: &RequirementsVector,
) -> ComponentScores {
    let strategy = &profile.strategy;
    ComponentScores {
        complexity: clamp_percent(strategy.complexity(req)),
        scalability: clamp_percent(strategy.scalability(req)),
        cost: clamp_percent(strategy.cost(req)),
        maintenance: clamp_percent(strategy.maintenance(req)),
    }
}

/// Weighted sum of component scores. Complexity and scalability share the
/// performance weight.
pub fn weighted_sum(profile: &ArchitectureProfile, scores: &ComponentScores) -> f64 {
    let weights = &profile.strategy.weights;
    scores.complexity * weights.performance
        + scores.scalability * weights.performance
        + scores.cost * weights.cost
        + scores.maintenance * weights.maintenance
}
