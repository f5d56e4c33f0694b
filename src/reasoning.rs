//! Human-readable justification for a recommendation.
//!
//! Rules are evaluated in a fixed order and each one appends at most one
//! sentence, so the output is deterministic for a given analysis.

use crate::config::thresholds::ThresholdsConfig;
use crate::core::analysis::{AnalysisResult, RiskLevel};
use crate::core::profiles::ArchitectureProfile;
use crate::core::requirements::{Level, RequirementsVector};

pub const FALLBACK_REASON: &str =
    "This architecture offers a balanced fit for the stated requirements";

fn level_word(level: Option<Level>) -> &'static str {
    match level {
        Some(Level::Low) => "low",
        Some(Level::Medium) => "medium",
        Some(Level::High) => "high",
        None => "unspecified",
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReasoningGenerator {
    thresholds: ThresholdsConfig,
}

impl ReasoningGenerator {
    pub fn new(thresholds: ThresholdsConfig) -> Self {
        Self { thresholds }
    }

    pub fn explain(
        &self,
        req: &RequirementsVector,
        profile: &ArchitectureProfile,
        analysis: &AnalysisResult,
    ) -> Vec<String> {
        let t = &self.thresholds;
        let mut reasons = Vec::new();

        if analysis.component_scores.complexity > t.alignment {
            reasons.push(format!(
                "{} aligns well with your {} complexity requirements",
                profile.name,
                level_word(req.complexity)
            ));
        }

        if analysis.component_scores.scalability > t.alignment {
            reasons.push(format!(
                "Excellent match for {} scalability needs",
                level_word(req.scalability)
            ));
        }

        if analysis.cost_analysis.cost_efficiency > t.cost_efficiency {
            reasons.push(format!(
                "Cost-efficient for a {} budget ({:.0}% efficiency)",
                level_word(req.budget),
                analysis.cost_analysis.cost_efficiency
            ));
        }

        match analysis.risk_assessment.risk_level {
            RiskLevel::Low => reasons.push(format!(
                "Low implementation risk ({:.0}% overall)",
                analysis.risk_assessment.overall_risk * 100.0
            )),
            RiskLevel::Medium => reasons.push(format!(
                "Manageable risk ({:.0}% overall) with known mitigations",
                analysis.risk_assessment.overall_risk * 100.0
            )),
            RiskLevel::High => {}
        }

        if analysis.confidence > t.high_confidence {
            reasons.push(format!(
                "High confidence ({:.0}%) based on a complete requirements profile",
                analysis.confidence
            ));
        } else if analysis.confidence < t.low_confidence {
            reasons.push(format!(
                "Limited confidence ({:.0}%); specifying more requirements would sharpen this recommendation",
                analysis.confidence
            ));
        }

        if reasons.is_empty() {
            reasons.push(FALLBACK_REASON.to_string());
        }

        reasons
    }
}
