//! Configuration types

use std::path::PathBuf;

use glchangelog_gitlab::DEFAULT_PER_PAGE;
use serde::{Deserialize, Serialize};

use super::defaults::DEFAULT_CHANGELOG_FILE;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitLab API settings
    pub gitlab: GitLabSettings,

    /// Changelog output settings
    pub changelog: ChangelogConfig,
}

/// GitLab API settings
///
/// The instance URL, token and project are deliberately absent: they come
/// from the command line or the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitLabSettings {
    /// Items requested per page on list endpoints (1-100)
    pub per_page: u32,
}

impl Default for GitLabSettings {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Changelog output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Output file, relative to the working directory
    pub file: PathBuf,

    /// Custom template; the built-in one is used when unset
    pub template: Option<PathBuf>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
            template: None,
        }
    }
}
