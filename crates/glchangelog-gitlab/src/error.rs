//! GitLab error types

use thiserror::Error;

/// GitLab API errors
#[derive(Debug, Error)]
pub enum GitLabError {
    /// Token rejected or lacking permissions (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Project or milestone does not exist (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Any other non-success response
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Base URL could not be parsed
    #[error("Invalid GitLab URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport or decoding error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for GitLab operations
pub type Result<T> = std::result::Result<T, GitLabError>;
