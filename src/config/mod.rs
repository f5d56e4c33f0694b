//! Configuration for archmap.
//!
//! Configuration is read from `.archmap.toml`, discovered by walking up from
//! the working directory, or from an explicit `--config` path. Every section
//! is optional; missing fields fall back to the named constants in
//! [`thresholds`].

pub mod core;
pub mod loader;
pub mod thresholds;

pub use self::core::{ArchmapConfig, ConfigIssue, ConfigSection, ConfigValidation, OutputConfig};
pub use loader::{
    default_config_toml, discover_config, load_config, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};
pub use thresholds::{FeedbackConfig, RankingConfig, ThresholdsConfig};
