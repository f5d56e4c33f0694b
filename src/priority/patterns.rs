use crate::catalog::CatalogStore;
use crate::config::thresholds::ThresholdsConfig;
use crate::core::analysis::{PatternLabel, ScoredPattern};
use crate::core::profiles::ArchitectureKind;
use crate::core::requirements::RequirementsVector;
use std::cmp::Ordering;

/// Label a context score. Both bounds are exclusive.
pub fn label_for_score(score: f64, thresholds: &ThresholdsConfig) -> PatternLabel {
    if score > thresholds.highly_recommended {
        PatternLabel::HighlyRecommended
    } else if score > thresholds.recommended {
        PatternLabel::Recommended
    } else {
        PatternLabel::Consider
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRecommender {
    thresholds: ThresholdsConfig,
}

impl PatternRecommender {
    pub fn new(thresholds: ThresholdsConfig) -> Self {
        Self { thresholds }
    }

    /// Patterns applicable to `architecture_id`, best context score first.
    /// An unknown id yields an empty list.
    pub fn recommend_patterns(
        &self,
        catalog: &CatalogStore,
        architecture_id: &str,
        req: &RequirementsVector,
    ) -> Vec<ScoredPattern> {
        match ArchitectureKind::from_id(architecture_id) {
            Some(kind) => self.recommend_for_kind(catalog, kind, req),
            None => {
                log::debug!("No patterns for unknown architecture '{}'", architecture_id);
                Vec::new()
            }
        }
    }

    pub fn recommend_for_kind(
        &self,
        catalog: &CatalogStore,
        kind: ArchitectureKind,
        req: &RequirementsVector,
    ) -> Vec<ScoredPattern> {
        let mut scored: Vec<ScoredPattern> = catalog
            .patterns_for(kind)
            .map(|pattern| {
                let context_score = pattern.rule.context_score(req);
                ScoredPattern {
                    pattern,
                    context_score,
                    recommendation: label_for_score(context_score, &self.thresholds),
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.context_score
                .partial_cmp(&a.context_score)
                .unwrap_or(Ordering::Equal)
        });
        scored
    }
}
