//! Per-call analysis results.
//!
//! Every type here is created fresh by an evaluation and owned by the
//! caller. None of them reference back into mutable catalog state.

use crate::core::profiles::{ArchitectureProfile, DesignPatternProfile};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    pub complexity: f64,
    pub scalability: f64,
    pub cost: f64,
    pub maintenance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub overall_risk: f64,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub mitigations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAnalysis {
    pub development_cost: f64,
    pub maintenance_cost: f64,
    pub infrastructure_cost: f64,
    pub total_cost: f64,
    pub cost_efficiency: f64,
}

/// Outcome of evaluating one architecture against one requirements vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub architecture_id: &'static str,
    pub score: f64,
    pub confidence: f64,
    pub component_scores: ComponentScores,
    pub risk_assessment: RiskAssessment,
    pub cost_analysis: CostAnalysis,
}

/// Label attached to a pattern after context scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PatternLabel {
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
    Recommended,
    Consider,
}

impl fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighlyRecommended => write!(f, "Highly Recommended"),
            Self::Recommended => write!(f, "Recommended"),
            Self::Consider => write!(f, "Consider"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPattern {
    #[serde(flatten)]
    pub pattern: &'static DesignPatternProfile,
    pub context_score: f64,
    pub recommendation: PatternLabel,
}

/// One ranked entry produced by the ranker and enriched with patterns and
/// reasoning.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub rank: usize,
    pub architecture: &'static ArchitectureProfile,
    pub analysis: AnalysisResult,
    pub design_patterns: Vec<ScoredPattern>,
    pub reasoning: Vec<String>,
    pub model_summary: ModelSummary,
}

/// Compact digest of a recommendation for callers that do not need the full
/// analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub rank: usize,
    pub score: f64,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub cost_efficiency: f64,
    pub pattern_count: usize,
}

impl ModelSummary {
    pub fn new(rank: usize, analysis: &AnalysisResult, pattern_count: usize) -> Self {
        Self {
            rank,
            score: analysis.score,
            confidence: analysis.confidence,
            risk_level: analysis.risk_assessment.risk_level,
            cost_efficiency: analysis.cost_analysis.cost_efficiency,
            pattern_count,
        }
    }
}

impl Recommendation {
    /// Reference handed back to callers so they can submit feedback later
    /// without the core keeping the recommendation around.
    pub fn reference(&self, id: impl Into<String>) -> RecommendationRef {
        RecommendationRef {
            id: id.into(),
            architecture_id: self.architecture.id.to_string(),
            confidence: self.analysis.confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRef {
    pub id: String,
    pub architecture_id: String,
    pub confidence: f64,
}
