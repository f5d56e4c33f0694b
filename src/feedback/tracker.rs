use crate::config::thresholds::DEFAULT_FEEDBACK_WINDOW;
use crate::core::analysis::RecommendationRef;
use crate::core::clamp_percent;
use crate::errors::{ArchmapError, Result};
use crate::feedback::store::{FeedbackStore, RingBufferStore};
use crate::feedback::{AccuracyLabel, Feedback, FeedbackAck, FeedbackRecord, PerformanceMetrics};
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

pub const MIN_SATISFACTION: u8 = 1;
pub const MAX_SATISFACTION: u8 = 5;
pub const MAX_CONFIDENCE: f64 = 100.0;

/// Records caller feedback and publishes rolling performance metrics.
///
/// `record` calls are serialized on the store mutex. The metrics snapshot is
/// recomputed while that lock is held and then swapped in, so `metrics`
/// never observes a half-updated value and never waits on a recomputation.
pub struct FeedbackTracker<S: FeedbackStore = RingBufferStore> {
    store: Mutex<S>,
    snapshot: RwLock<Arc<PerformanceMetrics>>,
    window: usize,
}

impl Default for FeedbackTracker<RingBufferStore> {
    fn default() -> Self {
        Self::new(RingBufferStore::default(), DEFAULT_FEEDBACK_WINDOW)
    }
}

impl<S: FeedbackStore> FeedbackTracker<S> {
    pub fn new(store: S, window: usize) -> Self {
        let window = window.max(1);
        let initial = compute_metrics(&store.recent(window), store.total());
        Self {
            store: Mutex::new(store),
            snapshot: RwLock::new(Arc::new(initial)),
            window,
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn record(
        &self,
        recommendation: &RecommendationRef,
        feedback: Feedback,
    ) -> Result<FeedbackAck> {
        if !(MIN_SATISFACTION..=MAX_SATISFACTION).contains(&feedback.satisfaction) {
            return Err(ArchmapError::validation(format!(
                "satisfaction must be between {} and {}, got {}",
                MIN_SATISFACTION, MAX_SATISFACTION, feedback.satisfaction
            )));
        }
        let confidence = recommendation.confidence;
        if !(0.0..=MAX_CONFIDENCE).contains(&confidence) {
            return Err(ArchmapError::validation(format!(
                "confidence must be between 0 and {}, got {}",
                MAX_CONFIDENCE, confidence
            )));
        }

        let accuracy = AccuracyLabel::from_satisfaction(feedback.satisfaction);
        let record = FeedbackRecord {
            timestamp: Utc::now(),
            recommendation: recommendation.clone(),
            satisfaction: feedback.satisfaction,
            accuracy,
            comment: feedback.comment,
        };
        let recorded_at = record.timestamp;

        let metrics = {
            let mut store = self.store.lock();
            store.append(record)?;
            let metrics = Arc::new(compute_metrics(&store.recent(self.window), store.total()));
            *self.snapshot.write() = Arc::clone(&metrics);
            metrics
        };

        log::debug!(
            "Recorded feedback for {} ({}): accuracy={} recent_accuracy={:.1}",
            recommendation.id,
            recommendation.architecture_id,
            accuracy,
            metrics.recent_accuracy
        );

        Ok(FeedbackAck {
            recorded_at,
            accuracy,
            metrics: (*metrics).clone(),
        })
    }

    /// Last published snapshot. No recomputation happens here.
    pub fn metrics(&self) -> Arc<PerformanceMetrics> {
        self.snapshot.read().clone()
    }

    pub fn total(&self) -> usize {
        self.store.lock().total()
    }
}

/// Aggregate a window of records. An empty window yields zeros.
pub fn compute_metrics(window: &[FeedbackRecord], total: usize) -> PerformanceMetrics {
    let size = window.len();
    let (recent_accuracy, average_confidence) = if size == 0 {
        (0.0, 0.0)
    } else {
        let high = window
            .iter()
            .filter(|r| r.accuracy == AccuracyLabel::High)
            .count();
        let confidence_sum: f64 = window.iter().map(|r| r.recommendation.confidence).sum();
        (
            clamp_percent(high as f64 / size as f64 * 100.0),
            clamp_percent(confidence_sum / size as f64),
        )
    };

    PerformanceMetrics {
        total_recommendations: total,
        recent_accuracy,
        average_confidence,
        window_size: size,
        last_updated: window.last().map(|r| r.timestamp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::store::{HistoryStore, JsonlFeedbackStore};
    use tempfile::TempDir;
    use std::thread;

    fn tracker() -> FeedbackTracker {
        FeedbackTracker::default()
    }

    fn reference(confidence: f64) -> RecommendationRef {
        RecommendationRef {
            id: "rec-1".to_string(),
            architecture_id: "microservices".to_string(),
            confidence,
        }
    }

    #[test]
    fn test_empty_metrics_are_zero() {
        let tracker = tracker();
        let metrics = tracker.metrics();
        assert_eq!(metrics.total_recommendations, 0);
        assert_eq!(metrics.recent_accuracy, 0.0);
        assert_eq!(metrics.average_confidence, 0.0);
        assert_eq!(metrics.window_size, 0);
        assert!(metrics.last_updated.is_none());
    }

    #[test]
    fn test_accuracy_labels() {
        let tracker = tracker();
        let label = |s| tracker.record(&reference(80.0), Feedback::new(s)).unwrap().accuracy;
        assert_eq!(label(5), AccuracyLabel::High);
        assert_eq!(label(4), AccuracyLabel::High);
        assert_eq!(label(3), AccuracyLabel::Medium);
        assert_eq!(label(1), AccuracyLabel::Low);
    }

    #[test]
    fn test_metrics_follow_window() {
        let tracker = tracker();
        tracker.record(&reference(90.0), Feedback::new(5)).unwrap();
        let ack = tracker.record(&reference(50.0), Feedback::new(2)).unwrap();

        assert_eq!(ack.metrics.total_recommendations, 2);
        assert_eq!(ack.metrics.recent_accuracy, 50.0);
        assert_eq!(ack.metrics.average_confidence, 70.0);
        assert_eq!(*tracker.metrics(), ack.metrics);
    }

    #[test]
    fn test_window_limits_aggregation_but_not_total() {
        let tracker = FeedbackTracker::new(HistoryStore::new(), 2);
        tracker.record(&reference(10.0), Feedback::new(1)).unwrap();
        tracker.record(&reference(60.0), Feedback::new(5)).unwrap();
        tracker.record(&reference(80.0), Feedback::new(5)).unwrap();

        let metrics = tracker.metrics();
        assert_eq!(metrics.total_recommendations, 3);
        assert_eq!(metrics.window_size, 2);
        assert_eq!(metrics.recent_accuracy, 100.0);
        assert_eq!(metrics.average_confidence, 70.0);
    }

    #[test]
    fn test_rejects_out_of_range_satisfaction() {
        let tracker = tracker();
        for bad in [0, 6] {
            let err = tracker.record(&reference(50.0), Feedback::new(bad)).unwrap_err();
            assert_eq!(err.code(), "validation_error");
        }
        assert_eq!(tracker.total(), 0);
    }

    #[test]
    fn test_rejects_confidence_outside_percent_range() {
        let tracker = tracker();
        for bad in [f64::NAN, f64::INFINITY, -1.0, 500.0] {
            let err = tracker.record(&reference(bad), Feedback::new(4)).unwrap_err();
            assert_eq!(err.code(), "validation_error");
        }
        assert_eq!(tracker.total(), 0);
        assert_eq!(tracker.metrics().average_confidence, 0.0);
    }

    #[test]
    fn test_rejected_confidence_keeps_log_readable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feedback.jsonl");
        {
            let tracker = FeedbackTracker::new(JsonlFeedbackStore::open(&path).unwrap(), 50);
            assert!(tracker.record(&reference(f64::NAN), Feedback::new(5)).is_err());
            tracker.record(&reference(100.0), Feedback::new(5)).unwrap();
        }

        let reopened = FeedbackTracker::new(JsonlFeedbackStore::open(&path).unwrap(), 50);
        assert_eq!(reopened.total(), 1);
        assert_eq!(reopened.metrics().average_confidence, 100.0);
    }

    #[test]
    fn test_default_tracker_memory_is_bounded() {
        let tracker = tracker();
        for _ in 0..(DEFAULT_FEEDBACK_WINDOW + 10) {
            tracker.record(&reference(60.0), Feedback::new(3)).unwrap();
        }
        let metrics = tracker.metrics();
        assert_eq!(metrics.total_recommendations, DEFAULT_FEEDBACK_WINDOW + 10);
        assert_eq!(metrics.window_size, DEFAULT_FEEDBACK_WINDOW);
        assert_eq!(tracker.store.lock().recent(usize::MAX).len(), DEFAULT_FEEDBACK_WINDOW);
    }

    #[test]
    fn test_concurrent_records_are_all_counted() {
        let tracker = Arc::new(FeedbackTracker::new(RingBufferStore::with_capacity(50), 50));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                thread::spawn(move || {
                    for _ in 0..25 {
                        tracker.record(&reference(75.0), Feedback::new(4)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let metrics = tracker.metrics();
        assert_eq!(metrics.total_recommendations, 200);
        assert_eq!(metrics.window_size, 50);
        assert_eq!(metrics.recent_accuracy, 100.0);
    }
}
