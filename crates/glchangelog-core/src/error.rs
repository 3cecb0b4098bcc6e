//! Error types for glchangelog

use std::path::PathBuf;

use glchangelog_gitlab::GitLabError;
use thiserror::Error;

/// Result type alias using ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Main error type, one variant per pipeline stage
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Retrieving milestones, merge requests or the project failed
    #[error("Failed to fetch from GitLab: {0}")]
    Fetch(#[from] GitLabError),

    /// Template-related errors
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Writing the rendered changelog failed
    #[error("Failed to write changelog to {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Template-related errors
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file not found
    #[error("Template not found at {0}")]
    NotFound(PathBuf),

    /// A placeholder marker is absent
    #[error("Template is missing the {0} placeholder")]
    MissingMarker(&'static str),

    /// IO error
    #[error("IO error reading template: {0}")]
    Io(#[from] std::io::Error),
}

impl ChangelogError {
    /// Create a write error for `path`
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
