//! CLI definition and command handling

pub mod output;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing::info;

use glchangelog_changelog::{write_changelog, ChangelogGenerator, Template};
use glchangelog_core::config::{load_config_or_default, Config};
use glchangelog_gitlab::{GitLabClient, GitLabConfig};

/// glchangelog - Generate a Keep a Changelog file from GitLab milestones
#[derive(Debug, Parser)]
#[command(name = "glchangelog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GitLab instance URL (e.g. https://gitlab.com)
    #[arg(short, long, env = "GITLAB_URL")]
    pub url: String,

    /// Access token with the read_api scope
    #[arg(short, long, env = "GITLAB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Numeric ID of the project
    #[arg(short = 'p', long = "projectId", env = "GITLAB_PROJECT_ID")]
    pub project_id: u64,

    /// Output file (defaults to the configured changelog file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Template file holding the HEADER and CONTENT markers
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Print the changelog instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,
}

impl Cli {
    /// Run the changelog pipeline once
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)
                .with_context(|| format!("changing directory to {}", dir.display()))?;
        }

        let cwd = std::env::current_dir()?;
        let (config, config_path) =
            load_config_or_default(&cwd).context("loading configuration")?;
        info!(config = ?config_path, project_id = self.project_id, "executing changelog run");

        let template = self.template(&cwd, &config)?;
        let client = GitLabClient::new(
            GitLabConfig::new(&self.url, &self.token).with_per_page(config.gitlab.per_page),
        )
        .context("creating GitLab client")?;

        if !self.quiet && !self.dry_run {
            output::info(&format!(
                "Fetching milestones for project {} from {}",
                self.project_id, self.url
            ));
        }

        let generator = ChangelogGenerator::new(template);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let changelog = runtime
            .block_on(generator.generate(&client, self.project_id))
            .context("generating changelog")?;

        if self.dry_run {
            print!("{}", changelog);
            return Ok(());
        }

        let output_path = self.output_path(&cwd, &config);
        write_changelog(&output_path, &changelog).context("writing changelog")?;

        if !self.quiet {
            output::success(&format!(
                "Changelog written to {}",
                style(output_path.display()).cyan()
            ));
        }

        Ok(())
    }

    /// Template from `--template`, the config file, or the built-in one
    fn template(&self, cwd: &Path, config: &Config) -> anyhow::Result<Template> {
        match self.template.as_ref().or(config.changelog.template.as_ref()) {
            Some(path) => Template::load(&cwd.join(path)).context("loading changelog template"),
            None => Ok(Template::builtin()),
        }
    }

    fn output_path(&self, cwd: &Path, config: &Config) -> PathBuf {
        cwd.join(self.output.as_ref().unwrap_or(&config.changelog.file))
    }
}
