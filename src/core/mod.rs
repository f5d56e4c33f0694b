pub mod analysis;
pub mod profiles;
pub mod requirements;

pub use analysis::{
    AnalysisResult, ComponentScores, CostAnalysis, ModelSummary, PatternLabel, Recommendation,
    RecommendationRef, RiskAssessment, RiskLevel, ScoredPattern,
};
pub use profiles::{
    ArchitectureKind, ArchitectureProfile, DesignPatternProfile, Rating, ReferenceCriteria,
};
pub use requirements::{
    Compliance, Level, RawRequirements, RequirementField, RequirementsVector, TeamSize, Traffic,
    ValidationGap,
};

/// Clamp a percentage-like value into `[0, 100]`. NaN collapses to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Clamp a probability-like value into `[0, 1]`. NaN collapses to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(140.0), 100.0);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
        assert_eq!(clamp_percent(f64::INFINITY), 100.0);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(1.3), 1.0);
        assert_eq!(clamp_unit(-0.1), 0.0);
        assert_eq!(clamp_unit(0.45), 0.45);
    }
}
