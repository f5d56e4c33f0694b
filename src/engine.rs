//! Public entry point tying the catalog, evaluator, ranker, pattern
//! recommender, reasoning and feedback tracker together.
//!
//! Every operation except feedback recording is pure over the immutable
//! catalog, so a single engine can be shared behind an `Arc` and called from
//! any number of threads.

use crate::analysis::evaluator::Evaluator;
use crate::catalog::CatalogStore;
use crate::config::core::ArchmapConfig;
use crate::config::thresholds::RankingConfig;
use crate::core::analysis::{AnalysisResult, ModelSummary, Recommendation, RecommendationRef};
use crate::core::profiles::{ArchitectureKind, ArchitectureProfile, DesignPatternProfile};
use crate::core::requirements::{RawRequirements, RequirementsVector, ValidationGap};
use crate::errors::{ArchmapError, Result};
use crate::feedback::{
    Feedback, FeedbackAck, FeedbackStore, FeedbackTracker, PerformanceMetrics, RingBufferStore,
};
use crate::observability::{
    enter_recovery_scope, set_current_architecture, set_phase, PipelinePhase,
};
use crate::priority::{PatternRecommender, Ranker, RecommendationStrength};
use crate::reasoning::ReasoningGenerator;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::info_span;

pub const ENGINE_NAME: &str = "archmap";
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-architecture scores plus the full analysis behind each one.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub scores: BTreeMap<String, f64>,
    pub detailed_analysis: BTreeMap<String, AnalysisResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validation_gaps: Vec<ValidationGap>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub architecture_id: &'static str,
    pub name: &'static str,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationAnalysis {
    pub total_evaluated: usize,
    pub top_score: f64,
    pub average_score: f64,
    pub score_distribution: Vec<ScoreEntry>,
    pub recommendation_strength: RecommendationStrength,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineMeta {
    pub name: &'static str,
    pub version: &'static str,
    pub catalog_size: usize,
    pub pattern_count: usize,
    pub generated_at: DateTime<Utc>,
    pub validation_gaps: Vec<ValidationGap>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
    pub analysis: RecommendationAnalysis,
    pub engine_meta: EngineMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationFailure {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl RecommendationFailure {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }
}

impl From<&ArchmapError> for RecommendationFailure {
    fn from(err: &ArchmapError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// Result of [`RecommendationEngine::generate_recommendation`]. Callers always
/// get one of the two shapes, never an error or a panic.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RecommendationResponse {
    Success(RecommendationSet),
    Failure(RecommendationFailure),
}

impl RecommendationResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            Self::Success(set) => &set.recommendations,
            Self::Failure(_) => &[],
        }
    }
}

pub struct RecommendationEngine<S: FeedbackStore = RingBufferStore> {
    catalog: CatalogStore,
    evaluator: Evaluator,
    ranker: Ranker,
    patterns: PatternRecommender,
    reasoning: ReasoningGenerator,
    feedback: FeedbackTracker<S>,
}

impl Default for RecommendationEngine<RingBufferStore> {
    fn default() -> Self {
        Self::from_config(&ArchmapConfig::default())
    }
}

impl RecommendationEngine<RingBufferStore> {
    /// Engine over the built-in catalog. Feedback is kept in memory, bounded
    /// to the metrics window.
    pub fn from_config(config: &ArchmapConfig) -> Self {
        let window = config.clone().sanitized().feedback().window_size;
        Self::with_store(config, RingBufferStore::with_capacity(window))
    }
}

impl<S: FeedbackStore> RecommendationEngine<S> {
    pub fn with_store(config: &ArchmapConfig, store: S) -> Self {
        Self::with_catalog(CatalogStore::builtin(), config, store)
    }

    pub fn with_catalog(catalog: CatalogStore, config: &ArchmapConfig, store: S) -> Self {
        let config = config.clone().sanitized();
        let thresholds = config.thresholds();
        let evaluator = Evaluator::new(thresholds);

        Self {
            catalog,
            evaluator,
            ranker: Ranker::new(evaluator, config.ranking()),
            patterns: PatternRecommender::new(thresholds),
            reasoning: ReasoningGenerator::new(thresholds),
            feedback: FeedbackTracker::new(store, config.feedback().window_size),
        }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn ranking_config(&self) -> &RankingConfig {
        self.ranker.config()
    }

    pub fn list_architectures(&self) -> &'static [ArchitectureProfile] {
        self.catalog.list_architectures()
    }

    pub fn list_design_patterns(&self) -> &'static [DesignPatternProfile] {
        self.catalog.list_patterns()
    }

    pub fn get_architecture(&self, id: &str) -> Option<&'static ArchitectureProfile> {
        self.catalog.get_architecture(id)
    }

    /// Score every architecture for raw caller input.
    pub fn evaluate(&self, raw: &RawRequirements) -> EvaluationReport {
        let (req, gaps) = RequirementsVector::from_raw(raw);
        let mut report = self.evaluate_vector(&req);
        report.validation_gaps = gaps;
        report
    }

    pub fn evaluate_vector(&self, req: &RequirementsVector) -> EvaluationReport {
        let _span = info_span!("evaluate").entered();

        let detailed_analysis: BTreeMap<String, AnalysisResult> = self
            .evaluator
            .evaluate_all(&self.catalog, req)
            .into_iter()
            .map(|result| (result.architecture_id.to_string(), result))
            .collect();
        let scores = detailed_analysis
            .iter()
            .map(|(id, result)| (id.clone(), result.score))
            .collect();

        EvaluationReport {
            scores,
            detailed_analysis,
            validation_gaps: Vec::new(),
        }
    }

    /// Full recommendation for raw caller input.
    ///
    /// Errors and panics inside the pipeline are converted into a
    /// [`RecommendationFailure`] here; nothing else escapes.
    pub fn generate_recommendation(&self, raw: &RawRequirements) -> RecommendationResponse {
        let _span = info_span!("generate_recommendation").entered();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let _recovery = enter_recovery_scope();
            let (req, gaps) = {
                let _phase = set_phase(PipelinePhase::Normalization);
                RequirementsVector::from_raw(raw)
            };
            self.recommend_with_gaps(&req, gaps)
        }));

        match outcome {
            Ok(Ok(set)) => RecommendationResponse::Success(set),
            Ok(Err(err)) => {
                log::error!("Recommendation failed: {}", err);
                RecommendationResponse::Failure(RecommendationFailure::from(&err))
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::error!("Recommendation pipeline panicked: {}", message);
                RecommendationResponse::Failure(RecommendationFailure::new(
                    "internal_error",
                    message,
                ))
            }
        }
    }

    fn recommend_with_gaps(
        &self,
        req: &RequirementsVector,
        validation_gaps: Vec<ValidationGap>,
    ) -> Result<RecommendationSet> {
        let ranking = {
            let _phase = set_phase(PipelinePhase::Ranking);
            self.ranker.rank(&self.catalog, req)
        };
        if ranking.ranked.is_empty() {
            return Err(ArchmapError::internal("catalog contains no architectures"));
        }

        let recommendations = {
            let _span = info_span!("assemble_recommendations").entered();
            ranking
                .top(self.ranker.config().top_n)
                .iter()
                .map(|entry| {
                    let kind = ArchitectureKind::from_id(entry.profile.id)
                        .ok_or_else(|| ArchmapError::architecture_not_found(entry.profile.id))?;
                    let _arch = set_current_architecture(entry.profile.id);
                    let design_patterns = {
                        let _phase = set_phase(PipelinePhase::PatternMatching);
                        self.patterns.recommend_for_kind(&self.catalog, kind, req)
                    };
                    let reasoning = {
                        let _phase = set_phase(PipelinePhase::Reasoning);
                        self.reasoning.explain(req, entry.profile, &entry.analysis)
                    };
                    let model_summary =
                        ModelSummary::new(entry.rank, &entry.analysis, design_patterns.len());

                    Ok(Recommendation {
                        rank: entry.rank,
                        architecture: entry.profile,
                        analysis: entry.analysis.clone(),
                        design_patterns,
                        reasoning,
                        model_summary,
                    })
                })
                .collect::<Result<Vec<_>>>()?
        };

        let score_distribution = ranking
            .ranked
            .iter()
            .map(|entry| ScoreEntry {
                architecture_id: entry.profile.id,
                name: entry.profile.name,
                score: entry.analysis.score,
            })
            .collect();

        let analysis = RecommendationAnalysis {
            total_evaluated: ranking.ranked.len(),
            top_score: ranking.top_score(),
            average_score: ranking.average_score(),
            score_distribution,
            recommendation_strength: ranking.strength,
        };

        log::info!(
            "Recommended {} ({:.1}), strength {}",
            recommendations
                .first()
                .map_or("none", |r: &Recommendation| r.architecture.id),
            analysis.top_score,
            analysis.recommendation_strength.strength
        );

        Ok(RecommendationSet {
            success: true,
            recommendations,
            analysis,
            engine_meta: EngineMeta {
                name: ENGINE_NAME,
                version: ENGINE_VERSION,
                catalog_size: self.catalog.list_architectures().len(),
                pattern_count: self.catalog.list_patterns().len(),
                generated_at: Utc::now(),
                validation_gaps,
            },
        })
    }

    pub fn record_feedback(
        &self,
        recommendation: &RecommendationRef,
        feedback: Feedback,
    ) -> Result<FeedbackAck> {
        let _phase = set_phase(PipelinePhase::FeedbackRecording);
        self.feedback.record(recommendation, feedback)
    }

    pub fn get_performance_metrics(&self) -> Arc<PerformanceMetrics> {
        self.feedback.metrics()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected panic in recommendation pipeline".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::thresholds::{FeedbackConfig, RankingConfig};
    use crate::core::analysis::{PatternLabel, RiskLevel};
    use crate::core::profiles::ReferenceCriteria;
    use crate::core::requirements::{Level, RequirementField, TeamSize, Traffic};
    use crate::scoring::strategy::ScoringStrategy;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::default()
    }

    fn all_high_raw() -> RawRequirements {
        RawRequirements {
            user_traffic: Some("high".into()),
            complexity: Some("high".into()),
            team_size: Some("large".into()),
            scalability: Some("high".into()),
            budget: Some("high".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_recommendation_success_shape() {
        let response = engine().generate_recommendation(&all_high_raw());
        let RecommendationResponse::Success(set) = response else {
            panic!("expected success");
        };

        assert!(set.success);
        assert_eq!(set.recommendations.len(), 3);
        assert_eq!(set.recommendations[0].architecture.id, "microservices");
        assert_eq!(set.recommendations[0].model_summary.rank, 1);
        assert_eq!(set.analysis.total_evaluated, 4);
        assert_eq!(set.analysis.score_distribution.len(), 4);
        assert_eq!(set.engine_meta.catalog_size, 4);
        assert_eq!(set.engine_meta.pattern_count, 12);
        assert!(set.engine_meta.validation_gaps.is_empty());
    }

    #[test]
    fn test_generate_recommendation_reports_gaps() {
        let raw = RawRequirements {
            complexity: Some("extreme".into()),
            ..Default::default()
        };
        let RecommendationResponse::Success(set) = engine().generate_recommendation(&raw) else {
            panic!("expected success");
        };
        let gaps = &set.engine_meta.validation_gaps;
        assert!(gaps.contains(&ValidationGap::MissingRequired {
            field: RequirementField::Budget
        }));
        assert!(gaps.contains(&ValidationGap::Unrecognized {
            field: RequirementField::Complexity,
            value: "extreme".into()
        }));
    }

    #[test]
    fn test_top_n_is_configurable() {
        let config = ArchmapConfig {
            ranking: Some(RankingConfig {
                top_n: 1,
                ..Default::default()
            }),
            ..Default::default()
        };
        let engine = RecommendationEngine::from_config(&config);
        let response = engine.generate_recommendation(&all_high_raw());
        assert_eq!(response.recommendations().len(), 1);
    }

    #[test]
    fn test_evaluate_report_keys() {
        let report = engine().evaluate(&all_high_raw());
        let ids: Vec<&str> = report.scores.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["microservices", "monolithic", "serverless", "soa"]);
        assert_eq!(
            report.scores["microservices"],
            report.detailed_analysis["microservices"].score
        );
    }

    static BROKEN_ARCHITECTURES: [ArchitectureProfile; 1] = [ArchitectureProfile {
        id: "mainframe",
        kind: ArchitectureKind::Monolithic,
        name: "Mainframe",
        description: "Unknown to the pattern catalog",
        advantages: &[],
        disadvantages: &[],
        best_for: &[],
        criteria: ReferenceCriteria {
            user_traffic: Traffic::Low,
            complexity: Level::Low,
            team_size: TeamSize::Small,
            scalability: Level::Low,
            budget: Level::Low,
        },
        strategy: ScoringStrategy::for_kind(ArchitectureKind::Monolithic),
    }];

    static NO_PATTERNS: [DesignPatternProfile; 0] = [];

    #[test]
    fn test_lookup_miss_becomes_structured_failure() {
        let catalog = CatalogStore::new(&BROKEN_ARCHITECTURES, &NO_PATTERNS);
        let engine = RecommendationEngine::with_catalog(
            catalog,
            &ArchmapConfig::default(),
            RingBufferStore::default(),
        );

        let response = engine.generate_recommendation(&all_high_raw());
        let RecommendationResponse::Failure(failure) = response else {
            panic!("expected failure");
        };
        assert!(!failure.success);
        assert_eq!(failure.error, "catalog_lookup_miss");
        assert!(failure.message.contains("mainframe"));
    }

    #[test]
    fn test_empty_catalog_is_internal_failure() {
        static EMPTY: [ArchitectureProfile; 0] = [];
        let catalog = CatalogStore::new(&EMPTY, &NO_PATTERNS);
        let engine = RecommendationEngine::with_catalog(
            catalog,
            &ArchmapConfig::default(),
            RingBufferStore::default(),
        );

        let json = serde_json::to_value(engine.generate_recommendation(&all_high_raw())).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "internal_error");
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(7_u8);
        assert!(panic_message(payload.as_ref()).contains("unexpected panic"));
    }

    #[test]
    fn test_feedback_round_trip_through_engine() {
        let engine = engine();
        let RecommendationResponse::Success(set) = engine.generate_recommendation(&all_high_raw())
        else {
            panic!("expected success");
        };
        let reference = set.recommendations[0].reference("rec-42");
        let ack = engine.record_feedback(&reference, Feedback::new(5)).unwrap();

        assert_eq!(ack.metrics.total_recommendations, 1);
        assert_eq!(
            engine.get_performance_metrics().average_confidence,
            set.recommendations[0].analysis.confidence
        );
    }

    #[test]
    fn test_default_feedback_store_follows_window() {
        let config = ArchmapConfig {
            feedback: Some(FeedbackConfig { window_size: 3 }),
            ..Default::default()
        };
        let engine = RecommendationEngine::from_config(&config);
        let reference = RecommendationRef {
            id: "rec-1".into(),
            architecture_id: "soa".into(),
            confidence: 50.0,
        };
        for _ in 0..5 {
            engine.record_feedback(&reference, Feedback::new(4)).unwrap();
        }
        let metrics = engine.get_performance_metrics();
        assert_eq!(metrics.total_recommendations, 5);
        assert_eq!(metrics.window_size, 3);
    }

    #[test]
    fn test_patterns_attached_to_recommendations() {
        let RecommendationResponse::Success(set) = engine().generate_recommendation(&all_high_raw())
        else {
            panic!("expected success");
        };
        let top = &set.recommendations[0];
        assert!(!top.design_patterns.is_empty());
        assert!(top
            .design_patterns
            .iter()
            .all(|p| p.pattern.applies_to(ArchitectureKind::Microservices)));
        assert!(top
            .design_patterns
            .iter()
            .any(|p| p.recommendation != PatternLabel::Consider));
        assert_eq!(top.analysis.risk_assessment.risk_level, RiskLevel::Low);
        assert_eq!(top.model_summary.pattern_count, top.design_patterns.len());
    }
}
