use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::{NonEmptyVec, Validation};

use super::thresholds::{FeedbackConfig, RankingConfig, ThresholdsConfig};

/// Root configuration structure for archmap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ArchmapConfig {
    /// Classification and reasoning thresholds
    #[serde(default)]
    pub thresholds: Option<ThresholdsConfig>,

    /// Ranking and recommendation strength configuration
    #[serde(default)]
    pub ranking: Option<RankingConfig>,

    /// Feedback tracker configuration
    #[serde(default)]
    pub feedback: Option<FeedbackConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl ArchmapConfig {
    pub fn thresholds(&self) -> ThresholdsConfig {
        self.thresholds.unwrap_or_default()
    }

    pub fn ranking(&self) -> RankingConfig {
        self.ranking.unwrap_or_default()
    }

    pub fn feedback(&self) -> FeedbackConfig {
        self.feedback.unwrap_or_default()
    }

    /// Validate every present section, accumulating all problems.
    pub fn validate(&self) -> ConfigValidation {
        combine_validations(vec![
            section_validation(ConfigSection::Thresholds, self.thresholds.map(|t| t.validate())),
            section_validation(ConfigSection::Ranking, self.ranking.map(|r| r.validate())),
            section_validation(ConfigSection::Feedback, self.feedback.map(|f| f.validate())),
        ])
    }

    /// Replace invalid sections with defaults, warning about each one.
    pub fn sanitized(mut self) -> Self {
        let Validation::Failure(issues) = self.validate() else {
            return self;
        };
        for issue in issues {
            log::warn!("{}. Using defaults.", issue);
            match issue.section {
                ConfigSection::Thresholds => self.thresholds = Some(ThresholdsConfig::default()),
                ConfigSection::Ranking => self.ranking = Some(RankingConfig::default()),
                ConfigSection::Feedback => self.feedback = Some(FeedbackConfig::default()),
            }
        }
        self
    }
}

/// Accumulated configuration problems.
pub type ConfigValidation = Validation<(), NonEmptyVec<ConfigIssue>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Thresholds,
    Ranking,
    Feedback,
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSection::Thresholds => write!(f, "thresholds"),
            ConfigSection::Ranking => write!(f, "ranking"),
            ConfigSection::Feedback => write!(f, "feedback"),
        }
    }
}

/// One invalid section and why.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub section: ConfigSection,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid [{}] configuration: {}", self.section, self.message)
    }
}

fn section_validation(
    section: ConfigSection,
    result: Option<Result<(), String>>,
) -> ConfigValidation {
    match result {
        Some(Err(message)) => {
            Validation::Failure(NonEmptyVec::new(ConfigIssue { section, message }, Vec::new()))
        }
        _ => Validation::Success(()),
    }
}

fn combine_validations(validations: Vec<ConfigValidation>) -> ConfigValidation {
    let mut failures = Vec::new();
    for validation in validations {
        if let Validation::Failure(issues) = validation {
            failures.extend(issues);
        }
    }
    match NonEmptyVec::from_vec(failures) {
        Some(issues) => Validation::Failure(issues),
        None => Validation::Success(()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Default output format ("terminal" or "json")
    pub default_format: Option<String>,
}
