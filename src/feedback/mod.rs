//! Feedback history and rolling performance metrics.

pub mod store;
pub mod tracker;

pub use store::{FeedbackStore, HistoryStore, JsonlFeedbackStore, RingBufferStore};
pub use tracker::{compute_metrics, FeedbackTracker, MAX_SATISFACTION, MIN_SATISFACTION};

use crate::core::analysis::RecommendationRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccuracyLabel {
    High,
    Medium,
    Low,
}

impl AccuracyLabel {
    pub fn from_satisfaction(satisfaction: u8) -> Self {
        match satisfaction {
            s if s >= 4 => Self::High,
            3 => Self::Medium,
            _ => Self::Low,
        }
    }
}

impl fmt::Display for AccuracyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Caller feedback on a recommendation. Satisfaction is 1 to 5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub satisfaction: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Feedback {
    pub fn new(satisfaction: u8) -> Self {
        Self {
            satisfaction,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub timestamp: DateTime<Utc>,
    pub recommendation: RecommendationRef,
    pub satisfaction: u8,
    pub accuracy: AccuracyLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub total_recommendations: usize,
    pub recent_accuracy: f64,
    pub average_confidence: f64,
    pub window_size: usize,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAck {
    pub recorded_at: DateTime<Utc>,
    pub accuracy: AccuracyLabel,
    pub metrics: PerformanceMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_from_satisfaction() {
        assert_eq!(AccuracyLabel::from_satisfaction(5), AccuracyLabel::High);
        assert_eq!(AccuracyLabel::from_satisfaction(4), AccuracyLabel::High);
        assert_eq!(AccuracyLabel::from_satisfaction(3), AccuracyLabel::Medium);
        assert_eq!(AccuracyLabel::from_satisfaction(2), AccuracyLabel::Low);
        assert_eq!(AccuracyLabel::from_satisfaction(1), AccuracyLabel::Low);
    }

    #[test]
    fn test_feedback_deserializes_without_comment() {
        let feedback: Feedback = serde_json::from_str(r#"{"satisfaction": 4}"#).unwrap();
        assert_eq!(feedback, Feedback::new(4));
    }
}
