//! Error types for archmap.
//!
//! Only [`ArchmapError::Internal`] and [`ArchmapError::CatalogLookup`] can
//! come out of the recommendation pipeline, and even those are converted into
//! a structured failure at the engine boundary. The remaining variants belong
//! to the edges: configuration, feedback storage and input files.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchmapError {
    /// Input that cannot be accepted (e.g. satisfaction outside 1..=5)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration file problems
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Unknown architecture or pattern id reached a place that needs one
    #[error("Catalog lookup miss: no {kind} with id '{id}'")]
    CatalogLookup { kind: &'static str, id: String },

    /// Anything that should not happen in normal operation
    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl ArchmapError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn architecture_not_found(id: impl Into<String>) -> Self {
        Self::CatalogLookup {
            kind: "architecture",
            id: id.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Stable machine-readable code, used as the `error` field of a
    /// structured failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Config { .. } => "config_error",
            Self::CatalogLookup { .. } => "catalog_lookup_miss",
            Self::Internal(_) => "internal_error",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
            Self::Toml(_) => "config_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchmapError>;
