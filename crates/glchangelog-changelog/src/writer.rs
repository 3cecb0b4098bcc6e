//! Changelog file output

use std::path::Path;

use glchangelog_core::{ChangelogError, Result};
use tracing::info;

/// Write the rendered changelog to `path`, replacing any existing file
pub fn write_changelog(path: &Path, content: &str) -> Result<()> {
    info!(path = %path.display(), bytes = content.len(), "writing changelog");
    std::fs::write(path, content).map_err(|e| ChangelogError::write(path, e))
}
