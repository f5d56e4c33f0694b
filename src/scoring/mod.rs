pub mod pattern_rules;
pub mod strategy;

pub use pattern_rules::PatternRule;
pub use strategy::{ScoringStrategy, StrategyWeights};
