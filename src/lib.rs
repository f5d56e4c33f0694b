// Export modules for library usage
pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod feedback;
pub mod io;
pub mod observability;
pub mod priority;
pub mod reasoning;
pub mod risk;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    AnalysisResult, ArchitectureKind, ArchitectureProfile, ComponentScores, CostAnalysis,
    DesignPatternProfile, ModelSummary, PatternLabel, RawRequirements, Recommendation,
    RecommendationRef, RequirementsVector, RiskAssessment, RiskLevel, ScoredPattern,
    ValidationGap,
};

pub use crate::catalog::CatalogStore;
pub use crate::config::{load_config, ArchmapConfig};
pub use crate::engine::{
    EngineMeta, EvaluationReport, RecommendationAnalysis, RecommendationEngine,
    RecommendationFailure, RecommendationResponse, RecommendationSet, ScoreEntry,
};
pub use crate::errors::{ArchmapError, Result};
pub use crate::feedback::{
    AccuracyLabel, Feedback, FeedbackAck, FeedbackStore, FeedbackTracker, HistoryStore,
    JsonlFeedbackStore, PerformanceMetrics, RingBufferStore,
};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::priority::{PatternRecommender, Ranker, RecommendationStrength};
pub use crate::reasoning::ReasoningGenerator;
