//! Ranking of architectures and of the design patterns that fit them.

pub mod patterns;
pub mod ranker;

pub use patterns::{label_for_score, PatternRecommender};
pub use ranker::{
    recommendation_strength, ConfidenceLabel, RankedArchitecture, Ranker, Ranking,
    RecommendationStrength, StrengthLabel,
};
