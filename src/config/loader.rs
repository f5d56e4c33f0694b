use std::fs;
use std::path::{Path, PathBuf};

use super::core::ArchmapConfig;
use crate::errors::{ArchmapError, Result};

pub const CONFIG_FILE_NAME: &str = ".archmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from TOML string and drop invalid sections
pub fn parse_config(contents: &str) -> Result<ArchmapConfig> {
    let config = toml::from_str::<ArchmapConfig>(contents)?;
    Ok(config.sanitized())
}

/// Load configuration from an explicit path. Unlike discovery, a missing or
/// malformed file is an error here.
pub fn load_config_from_path(path: &Path) -> Result<ArchmapConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ArchmapError::config_with_path(format!("Failed to read config: {}", e), path)
    })?;
    let config = parse_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ArchmapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.archmap.toml`.
pub fn discover_config(start: PathBuf) -> ArchmapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ArchmapConfig::default()
        })
}

pub fn load_config() -> ArchmapConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ArchmapConfig::default()
        }
    }
}

/// Default configuration file contents written by `archmap init`.
pub fn default_config_toml() -> String {
    let config = ArchmapConfig {
        thresholds: Some(Default::default()),
        ranking: Some(Default::default()),
        feedback: Some(Default::default()),
        output: None,
    };
    // Serializing plain numeric structs cannot fail
    toml::to_string_pretty(&config).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::thresholds::{RankingConfig, DEFAULT_FEEDBACK_WINDOW};
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_partial_config_uses_field_defaults() {
        let config = parse_config(indoc! {r#"
            [ranking]
            top_n = 2

            [thresholds]
            alignment = 75.0
        "#})
        .unwrap();

        assert_eq!(config.ranking().top_n, 2);
        assert_eq!(config.ranking().strong_gap, 20.0);
        assert_eq!(config.thresholds().alignment, 75.0);
        assert_eq!(config.feedback().window_size, DEFAULT_FEEDBACK_WINDOW);
    }

    #[test]
    fn test_invalid_section_falls_back_to_defaults() {
        let config = parse_config(indoc! {r#"
            [ranking]
            top_n = 0
        "#})
        .unwrap();
        assert_eq!(config.ranking(), RankingConfig::default());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(parse_config("[ranking\ntop_n = ").is_err());
    }

    #[test]
    fn test_discovers_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[feedback]\nwindow_size = 10\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.feedback().window_size, 10);
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let temp = TempDir::new().unwrap();
        let result = load_config_from_path(&temp.path().join("missing.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_round_trips() {
        let contents = default_config_toml();
        let config = parse_config(&contents).unwrap();
        assert!(config.validate().is_success());
        assert_eq!(config.ranking(), RankingConfig::default());
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }
}
