use serde::{Deserialize, Serialize};

/// Component score above which a requirement counts as well aligned.
pub const ALIGNMENT_THRESHOLD: f64 = 80.0;
/// Cost efficiency above which the cost model is called out as a strength.
pub const COST_EFFICIENCY_THRESHOLD: f64 = 70.0;
/// Confidence above which the requirements are considered complete.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 80.0;
/// Confidence below which more input is requested.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 60.0;

/// Risk below this is `Low`.
pub const LOW_RISK_THRESHOLD: f64 = 0.3;
/// Risk below this (and not low) is `Medium`; anything else is `High`.
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.6;

/// Score gap between first and second place for a strong recommendation.
pub const STRONG_GAP_THRESHOLD: f64 = 20.0;
/// Score gap for a moderate recommendation.
pub const MODERATE_GAP_THRESHOLD: f64 = 10.0;

/// Context score above which a pattern is highly recommended.
pub const HIGHLY_RECOMMENDED_THRESHOLD: f64 = 80.0;
/// Context score above which a pattern is recommended.
pub const RECOMMENDED_THRESHOLD: f64 = 60.0;

pub const DEFAULT_TOP_N: usize = 3;
pub const DEFAULT_FEEDBACK_WINDOW: usize = 50;

/// Thresholds used by risk classification, pattern labelling and reasoning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_alignment")]
    pub alignment: f64,

    #[serde(default = "default_cost_efficiency")]
    pub cost_efficiency: f64,

    #[serde(default = "default_high_confidence")]
    pub high_confidence: f64,

    #[serde(default = "default_low_confidence")]
    pub low_confidence: f64,

    #[serde(default = "default_low_risk")]
    pub low_risk: f64,

    #[serde(default = "default_medium_risk")]
    pub medium_risk: f64,

    #[serde(default = "default_highly_recommended")]
    pub highly_recommended: f64,

    #[serde(default = "default_recommended")]
    pub recommended: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            alignment: default_alignment(),
            cost_efficiency: default_cost_efficiency(),
            high_confidence: default_high_confidence(),
            low_confidence: default_low_confidence(),
            low_risk: default_low_risk(),
            medium_risk: default_medium_risk(),
            highly_recommended: default_highly_recommended(),
            recommended: default_recommended(),
        }
    }
}

impl ThresholdsConfig {
    pub fn validate(&self) -> Result<(), String> {
        let percentages = [
            ("alignment", self.alignment),
            ("cost_efficiency", self.cost_efficiency),
            ("high_confidence", self.high_confidence),
            ("low_confidence", self.low_confidence),
            ("highly_recommended", self.highly_recommended),
            ("recommended", self.recommended),
        ];
        for (name, value) in percentages {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!("{} threshold must be between 0 and 100", name));
            }
        }

        if !(0.0..=1.0).contains(&self.low_risk) || !(0.0..=1.0).contains(&self.medium_risk) {
            return Err("risk thresholds must be between 0.0 and 1.0".to_string());
        }
        if self.low_risk >= self.medium_risk {
            return Err("low_risk must be below medium_risk".to_string());
        }
        if self.low_confidence > self.high_confidence {
            return Err("low_confidence must not exceed high_confidence".to_string());
        }
        if self.recommended > self.highly_recommended {
            return Err("recommended must not exceed highly_recommended".to_string());
        }

        Ok(())
    }
}

fn default_alignment() -> f64 {
    ALIGNMENT_THRESHOLD
}
fn default_cost_efficiency() -> f64 {
    COST_EFFICIENCY_THRESHOLD
}
fn default_high_confidence() -> f64 {
    HIGH_CONFIDENCE_THRESHOLD
}
fn default_low_confidence() -> f64 {
    LOW_CONFIDENCE_THRESHOLD
}
fn default_low_risk() -> f64 {
    LOW_RISK_THRESHOLD
}
fn default_medium_risk() -> f64 {
    MEDIUM_RISK_THRESHOLD
}
fn default_highly_recommended() -> f64 {
    HIGHLY_RECOMMENDED_THRESHOLD
}
fn default_recommended() -> f64 {
    RECOMMENDED_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// How many architectures to return (default: 3)
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    #[serde(default = "default_strong_gap")]
    pub strong_gap: f64,

    #[serde(default = "default_moderate_gap")]
    pub moderate_gap: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            strong_gap: default_strong_gap(),
            moderate_gap: default_moderate_gap(),
        }
    }
}

impl RankingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.top_n == 0 {
            return Err("top_n must be at least 1".to_string());
        }
        if self.strong_gap < 0.0 || self.moderate_gap < 0.0 {
            return Err("score gaps must not be negative".to_string());
        }
        if self.moderate_gap > self.strong_gap {
            return Err("moderate_gap must not exceed strong_gap".to_string());
        }
        Ok(())
    }
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}
fn default_strong_gap() -> f64 {
    STRONG_GAP_THRESHOLD
}
fn default_moderate_gap() -> f64 {
    MODERATE_GAP_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Number of most recent records used for rolling metrics (default: 50)
    #[serde(default = "default_window_size")]
    pub window_size: usize,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
        }
    }
}

impl FeedbackConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.window_size == 0 {
            return Err("window_size must be at least 1".to_string());
        }
        Ok(())
    }
}

fn default_window_size() -> usize {
    DEFAULT_FEEDBACK_WINDOW
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ThresholdsConfig::default().validate().is_ok());
        assert!(RankingConfig::default().validate().is_ok());
        assert!(FeedbackConfig::default().validate().is_ok());
    }

    #[test]
    fn test_defaults_match_constants() {
        let thresholds = ThresholdsConfig::default();
        assert_eq!(thresholds.alignment, ALIGNMENT_THRESHOLD);
        assert_eq!(thresholds.low_risk, LOW_RISK_THRESHOLD);
        assert_eq!(RankingConfig::default().strong_gap, STRONG_GAP_THRESHOLD);
        assert_eq!(FeedbackConfig::default().window_size, DEFAULT_FEEDBACK_WINDOW);
    }

    #[test]
    fn test_rejects_inverted_risk_thresholds() {
        let thresholds = ThresholdsConfig {
            low_risk: 0.7,
            medium_risk: 0.5,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_gaps_and_zero_top_n() {
        let ranking = RankingConfig {
            strong_gap: 5.0,
            moderate_gap: 10.0,
            ..Default::default()
        };
        assert!(ranking.validate().is_err());

        let ranking = RankingConfig {
            top_n: 0,
            ..Default::default()
        };
        assert!(ranking.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_window() {
        assert!(FeedbackConfig { window_size: 0 }.validate().is_err());
    }
}
