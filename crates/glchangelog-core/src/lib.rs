//! glchangelog Core - shared error handling and configuration
//!
//! This crate provides the error taxonomy and the configuration file
//! support used by the changelog pipeline and the CLI.

pub mod config;
pub mod error;

pub use config::{load_config, load_config_or_default, Config};
pub use error::{ChangelogError, ConfigError, Result, TemplateError};
