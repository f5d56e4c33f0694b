use crate::analysis::evaluator::Evaluator;
use crate::catalog::CatalogStore;
use crate::config::thresholds::RankingConfig;
use crate::core::analysis::AnalysisResult;
use crate::core::profiles::ArchitectureProfile;
use crate::core::requirements::RequirementsVector;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    Strong,
    Moderate,
    Weak,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strong => write!(f, "Strong"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Weak => write!(f, "Weak"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceLabel {
    High,
    Medium,
    Low,
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// How decisively the top architecture beats the runner-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationStrength {
    pub strength: StrengthLabel,
    pub confidence: ConfidenceLabel,
    pub score_gap: f64,
}

/// Compute strength from scores sorted in descending order.
///
/// With fewer than two scores the gap is the top score itself (or 0 when
/// there are none).
pub fn recommendation_strength(
    sorted_scores: &[f64],
    config: &RankingConfig,
) -> RecommendationStrength {
    let gap = match sorted_scores {
        [first, second, ..] => first - second,
        [only] => *only,
        [] => 0.0,
    };

    let (strength, confidence) = if gap > config.strong_gap {
        (StrengthLabel::Strong, ConfidenceLabel::High)
    } else if gap > config.moderate_gap {
        (StrengthLabel::Moderate, ConfidenceLabel::Medium)
    } else {
        (StrengthLabel::Weak, ConfidenceLabel::Low)
    };

    RecommendationStrength {
        strength,
        confidence,
        score_gap: gap,
    }
}

#[derive(Debug, Clone)]
pub struct RankedArchitecture {
    pub rank: usize,
    pub profile: &'static ArchitectureProfile,
    pub analysis: AnalysisResult,
}

/// Every evaluated architecture, best first.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub ranked: Vec<RankedArchitecture>,
    pub strength: RecommendationStrength,
}

impl Ranking {
    pub fn top(&self, n: usize) -> &[RankedArchitecture] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    pub fn top_score(&self) -> f64 {
        self.ranked.first().map_or(0.0, |r| r.analysis.score)
    }

    pub fn average_score(&self) -> f64 {
        if self.ranked.is_empty() {
            return 0.0;
        }
        self.ranked.iter().map(|r| r.analysis.score).sum::<f64>() / self.ranked.len() as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    evaluator: Evaluator,
    config: RankingConfig,
}

impl Ranker {
    pub fn new(evaluator: Evaluator, config: RankingConfig) -> Self {
        Self { evaluator, config }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Evaluate the whole catalog and sort by score, best first. Ties keep
    /// catalog order.
    pub fn rank(&self, catalog: &CatalogStore, req: &RequirementsVector) -> Ranking {
        let _span = tracing::info_span!("rank_architectures").entered();

        let mut evaluated: Vec<(&'static ArchitectureProfile, AnalysisResult)> = catalog
            .list_architectures()
            .iter()
            .zip(self.evaluator.evaluate_all(catalog, req))
            .collect();

        evaluated.sort_by(|(_, a), (_, b)| compare_scores_desc(a.score, b.score));

        let scores: Vec<f64> = evaluated.iter().map(|(_, a)| a.score).collect();
        let strength = recommendation_strength(&scores, &self.config);

        let ranked = evaluated
            .into_iter()
            .enumerate()
            .map(|(i, (profile, analysis))| RankedArchitecture {
                rank: i + 1,
                profile,
                analysis,
            })
            .collect();

        Ranking { ranked, strength }
    }

    /// Top `top_n` architectures from [`Ranker::rank`].
    pub fn rank_all(
        &self,
        catalog: &CatalogStore,
        req: &RequirementsVector,
    ) -> Vec<RankedArchitecture> {
        let mut ranking = self.rank(catalog, req);
        ranking.ranked.truncate(self.config.top_n);
        ranking.ranked
    }
}

fn compare_scores_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
