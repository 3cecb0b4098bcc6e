//! Exit codes for the CLI

use glchangelog_core::ChangelogError;
use glchangelog_gitlab::GitLabError;

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// GitLab API error
pub const API_ERROR: u8 = 3;

/// Template error
pub const TEMPLATE_ERROR: u8 = 4;

/// Changelog write error
pub const WRITE_ERROR: u8 = 5;

/// Exit code for the stage that produced `err`
pub fn for_error(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<ChangelogError>() {
        return match err {
            ChangelogError::Config(_) => CONFIG_ERROR,
            ChangelogError::Fetch(_) => API_ERROR,
            ChangelogError::Template(_) => TEMPLATE_ERROR,
            ChangelogError::Write { .. } => WRITE_ERROR,
        };
    }

    if err.downcast_ref::<GitLabError>().is_some() {
        return API_ERROR;
    }

    ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use glchangelog_core::{ConfigError, TemplateError};

    #[test]
    fn test_codes_survive_context() {
        let err: anyhow::Result<()> = Err(ChangelogError::from(TemplateError::MissingMarker("HEADER")))
            .context("loading changelog template");
        assert_eq!(for_error(&err.unwrap_err()), TEMPLATE_ERROR);
    }

    #[test]
    fn test_gitlab_error_is_api_error() {
        let err = anyhow::Error::new(GitLabError::AuthenticationFailed("401".into()))
            .context("creating GitLab client");
        assert_eq!(for_error(&err), API_ERROR);

        let err: anyhow::Error = ChangelogError::from(GitLabError::NotFound("x".into())).into();
        assert_eq!(for_error(&err), API_ERROR);
    }

    #[test]
    fn test_every_stage_has_its_own_code() {
        let config: anyhow::Error = ChangelogError::from(ConfigError::InvalidValue {
            field: "gitlab.per_page".into(),
            message: "must be between 1 and 100".into(),
        })
        .into();
        let write: anyhow::Error = ChangelogError::write(
            "CHANGELOG.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
        .into();

        assert_eq!(for_error(&config.context("loading configuration")), CONFIG_ERROR);
        assert_eq!(for_error(&write.context("writing changelog")), WRITE_ERROR);
    }

    #[test]
    fn test_other_errors_are_generic() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(for_error(&err), ERROR);
        assert_ne!(ERROR, SUCCESS);
    }
}
