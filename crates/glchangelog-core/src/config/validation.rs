//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_gitlab(config)?;
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_gitlab(config: &Config) -> Result<()> {
    if !(1..=100).contains(&config.gitlab.per_page) {
        return Err(ConfigError::InvalidValue {
            field: "gitlab.per_page".to_string(),
            message: "must be between 1 and 100".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file path cannot be empty".to_string(),
        }
        .into());
    }

    if config
        .changelog
        .template
        .as_ref()
        .is_some_and(|t| t.as_os_str().is_empty())
    {
        return Err(ConfigError::InvalidValue {
            field: "changelog.template".to_string(),
            message: "template path cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
