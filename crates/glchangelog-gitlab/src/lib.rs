//! GitLab REST API access for glchangelog
//!
//! This crate provides the read-only query interface the changelog pipeline
//! consumes, the GitLab models it returns, and a `reqwest` implementation
//! against the GitLab v4 API.
//!
//! ## Usage
//!
//! ```ignore
//! use glchangelog_gitlab::{GitLabClient, GitLabConfig, ProjectSource};
//!
//! let client = GitLabClient::new(GitLabConfig::new("https://gitlab.com", token))?;
//! let milestones = client.list_project_milestones(42).await?;
//! ```

pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::{GitLabClient, GitLabConfig, DEFAULT_PER_PAGE};
pub use error::{GitLabError, Result};
pub use traits::ProjectSource;
pub use types::*;
