//! Changelog generation

use futures::try_join;
use glchangelog_core::Result;
use glchangelog_gitlab::ProjectSource;
use tracing::{info, instrument};

use crate::fetcher::fetch_milestone_groups;
use crate::formatter::MarkdownFormatter;
use crate::template::Template;
use crate::types::{sort_newest_first, MilestoneGroup};

/// Text substituted for the HEADER marker
const HEADER: &str = "";

/// Changelog generator
pub struct ChangelogGenerator {
    template: Template,
}

impl ChangelogGenerator {
    /// Create a generator rendering into `template`
    pub fn new(template: Template) -> Self {
        Self { template }
    }

    /// Fetch a project's milestones and render the complete document.
    ///
    /// This is the single run of the pipeline: milestones, their merge
    /// requests and the project URL are fetched, then rendered. Any fetch
    /// failure aborts the run before anything is rendered.
    #[instrument(skip(self, source))]
    pub async fn generate<S>(&self, source: &S, project_id: u64) -> Result<String>
    where
        S: ProjectSource + ?Sized,
    {
        let (groups, project) = try_join!(
            fetch_milestone_groups(source, project_id),
            source.get_project(project_id)
        )?;

        info!(
            milestone_count = groups.len(),
            web_url = %project.web_url,
            "rendering changelog"
        );
        Ok(self.render(groups, &project.web_url))
    }

    /// Render groups in any order into the template
    pub fn render(&self, mut groups: Vec<MilestoneGroup>, web_url: &str) -> String {
        sort_newest_first(&mut groups);
        let content = MarkdownFormatter::new(web_url).format(&groups);
        self.template.render(HEADER, &content)
    }
}

impl Default for ChangelogGenerator {
    fn default() -> Self {
        Self::new(Template::builtin())
    }
}
