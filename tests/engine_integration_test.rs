//! End-to-end tests of the public recommendation engine API.

use archmap::config::{parse_config, RankingConfig};
use archmap::feedback::RingBufferStore;
use archmap::priority::{recommendation_strength, ConfidenceLabel, StrengthLabel};
use archmap::risk::classify_risk_level;
use archmap::{
    AccuracyLabel, ArchmapConfig, Feedback, RawRequirements, RecommendationEngine,
    RecommendationResponse, RecommendationSet, RiskLevel,
};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn raw(pairs: &[(&str, &str)]) -> RawRequirements {
    let mut raw = RawRequirements::default();
    for (key, value) in pairs {
        let value = Some(value.to_string());
        match *key {
            "userTraffic" => raw.user_traffic = value,
            "complexity" => raw.complexity = value,
            "teamSize" => raw.team_size = value,
            "scalability" => raw.scalability = value,
            "budget" => raw.budget = value,
            "security" => raw.security = value,
            "maintenance" => raw.maintenance = value,
            "performance" => raw.performance = value,
            "compliance" => raw.compliance = value,
            other => panic!("unknown key {other}"),
        }
    }
    raw
}

fn all_high() -> RawRequirements {
    raw(&[
        ("userTraffic", "high"),
        ("complexity", "high"),
        ("teamSize", "large"),
        ("scalability", "high"),
        ("budget", "high"),
    ])
}

fn success(response: RecommendationResponse) -> RecommendationSet {
    match response {
        RecommendationResponse::Success(set) => set,
        RecommendationResponse::Failure(failure) => panic!("unexpected failure: {failure:?}"),
    }
}

#[test]
fn test_high_everything_recommends_microservices() {
    let set = success(RecommendationEngine::default().generate_recommendation(&all_high()));
    let top = &set.recommendations[0];

    assert_eq!(top.architecture.id, "microservices");
    assert_eq!(top.analysis.component_scores.complexity, 100.0);
    assert_eq!(top.analysis.component_scores.scalability, 100.0);
    // (1.5 + 1.3 + 1.2) * 1.3 * 1.2
    assert!((top.analysis.cost_analysis.total_cost - 6.24).abs() < 1e-9);
    assert!((top.analysis.score - 76.8).abs() < 1e-9);

    let ids: Vec<&str> = set
        .analysis
        .score_distribution
        .iter()
        .map(|entry| entry.architecture_id)
        .collect();
    assert_eq!(ids, vec!["microservices", "soa", "serverless", "monolithic"]);
    assert_eq!(
        set.analysis.recommendation_strength.strength,
        StrengthLabel::Moderate
    );
}

#[test]
fn test_full_requirements_give_full_confidence() {
    let mut requirements = all_high();
    requirements.security = Some("high".into());
    requirements.maintenance = Some("high".into());
    requirements.performance = Some("high".into());
    requirements.compliance = Some("yes".into());

    let set = success(RecommendationEngine::default().generate_recommendation(&requirements));
    for recommendation in &set.recommendations {
        assert_eq!(recommendation.analysis.confidence, 100.0);
    }
    assert!(set.engine_meta.validation_gaps.is_empty());
}

#[test]
fn test_empty_requirements_still_succeed() {
    let engine = RecommendationEngine::default();
    let set = success(engine.generate_recommendation(&RawRequirements::default()));
    assert_eq!(set.recommendations.len(), 3);
    assert_eq!(set.engine_meta.validation_gaps.len(), 5);
    for recommendation in &set.recommendations {
        assert_eq!(recommendation.analysis.confidence, 0.0);
        assert!(!recommendation.reasoning.is_empty());
    }
}

#[test]
fn test_risk_level_boundaries_are_exclusive() {
    assert_eq!(classify_risk_level(0.29, 0.3, 0.6), RiskLevel::Low);
    assert_eq!(classify_risk_level(0.3, 0.3, 0.6), RiskLevel::Medium);
    assert_eq!(classify_risk_level(0.6, 0.3, 0.6), RiskLevel::High);
}

#[test]
fn test_strength_for_clear_winner() {
    let strength = recommendation_strength(&[92.0, 70.0, 50.0], &RankingConfig::default());
    assert_eq!(strength.strength, StrengthLabel::Strong);
    assert_eq!(strength.confidence, ConfidenceLabel::High);
}

#[test]
fn test_evaluate_is_bit_identical_across_calls() {
    let engine = RecommendationEngine::default();
    let first = engine.evaluate(&all_high());
    let second = engine.evaluate(&all_high());

    assert_eq!(first.detailed_analysis, second.detailed_analysis);
    for (id, score) in &first.scores {
        assert_eq!(score.to_bits(), second.scores[id].to_bits());
    }
}

#[test]
fn test_evaluate_does_not_leak_between_requirements() {
    let engine = RecommendationEngine::default();
    let before = engine.evaluate(&all_high());
    let _ = engine.evaluate(&raw(&[("complexity", "low"), ("budget", "low")]));
    let after = engine.evaluate(&all_high());
    assert_eq!(before.detailed_analysis, after.detailed_analysis);
}

#[test]
fn test_feedback_labels_and_metrics() {
    let engine = RecommendationEngine::default();
    let metrics = engine.get_performance_metrics();
    assert_eq!(metrics.recent_accuracy, 0.0);
    assert_eq!(metrics.average_confidence, 0.0);

    let set = success(engine.generate_recommendation(&all_high()));
    let reference = set.recommendations[0].reference("rec-1");

    let labels: Vec<AccuracyLabel> = [5, 3, 1]
        .into_iter()
        .map(|s| engine.record_feedback(&reference, Feedback::new(s)).unwrap().accuracy)
        .collect();
    assert_eq!(
        labels,
        vec![AccuracyLabel::High, AccuracyLabel::Medium, AccuracyLabel::Low]
    );

    let metrics = engine.get_performance_metrics();
    assert_eq!(metrics.total_recommendations, 3);
    assert!((metrics.recent_accuracy - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_ring_buffer_backed_engine_keeps_window() {
    let config = parse_config(indoc! {r#"
        [feedback]
        window_size = 2
    "#})
    .unwrap();
    let engine = RecommendationEngine::with_store(&config, RingBufferStore::with_capacity(2));
    let set = success(engine.generate_recommendation(&all_high()));
    let reference = set.recommendations[0].reference("rec-1");

    for satisfaction in [1, 5, 5] {
        engine
            .record_feedback(&reference, Feedback::new(satisfaction))
            .unwrap();
    }
    let metrics = engine.get_performance_metrics();
    assert_eq!(metrics.total_recommendations, 3);
    assert_eq!(metrics.window_size, 2);
    assert_eq!(metrics.recent_accuracy, 100.0);
}

#[test]
fn test_config_thresholds_change_ranking_output() {
    let config = parse_config(indoc! {r#"
        [ranking]
        top_n = 2
        strong_gap = 5.0
        moderate_gap = 1.0
    "#})
    .unwrap();
    let engine = RecommendationEngine::from_config(&config);
    let set = success(engine.generate_recommendation(&all_high()));

    assert_eq!(set.recommendations.len(), 2);
    assert_eq!(
        set.analysis.recommendation_strength.strength,
        StrengthLabel::Strong
    );
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let config: ArchmapConfig = toml::from_str(indoc! {r#"
        [ranking]
        top_n = 0
    "#})
    .unwrap();
    assert!(!config.validate().is_success());

    let engine = RecommendationEngine::from_config(&config);
    assert_eq!(engine.ranking_config().top_n, 3);
}

#[test]
fn test_json_response_shape() {
    let response = RecommendationEngine::default().generate_recommendation(&all_high());
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["analysis"]["totalEvaluated"], 4);
    assert_eq!(json["engineMeta"]["name"], "archmap");
    let top = &json["recommendations"][0];
    assert_eq!(top["architecture"]["id"], "microservices");
    assert_eq!(top["modelSummary"]["rank"], 1);
    assert_eq!(top["analysis"]["riskAssessment"]["riskLevel"], "Low");
    assert!(top["reasoning"].as_array().is_some_and(|r| !r.is_empty()));
}
