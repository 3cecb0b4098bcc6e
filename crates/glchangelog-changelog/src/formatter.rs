//! Markdown changelog formatter
//!
//! Produces the body that replaces the template's CONTENT marker:
//!
//! ```text
//! ## [Unreleased]
//!
//! ## [1.1] - (no release date)
//! ### Fixed
//! - !9 Fix crash (@bob)
//!
//!
//! [Unreleased]: <web_url>/compare/v1.1...HEAD
//! [1.1]: <web_url>/commits/v1.1
//! ```

use tracing::{debug, instrument};

use glchangelog_gitlab::MergeRequest;

use crate::taxonomy::Taxonomy;
use crate::types::{ChangeSection, MilestoneGroup};

/// Placeholder for milestones without a due date
pub const NO_RELEASE_DATE: &str = "(no release date)";

/// Markdown changelog formatter
pub struct MarkdownFormatter {
    /// Project web URL, base of comparison links
    pub web_url: String,
    taxonomy: &'static Taxonomy,
}

impl MarkdownFormatter {
    /// Create a formatter linking against `web_url`
    pub fn new(web_url: impl Into<String>) -> Self {
        let web_url: String = web_url.into();
        Self {
            web_url: web_url.trim_end_matches('/').to_string(),
            taxonomy: Taxonomy::standard(),
        }
    }

    /// Format milestone groups, which must already be sorted newest first
    #[instrument(skip(self, groups), fields(group_count = groups.len()))]
    pub fn format(&self, groups: &[MilestoneGroup]) -> String {
        let mut output = String::from("## [Unreleased]\n\n");

        for group in groups {
            self.format_group(group, &mut output);
        }

        let links = self.links(groups);
        if !links.is_empty() {
            output.push('\n');
            output.push_str(&links.join("\n"));
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn format_group(&self, group: &MilestoneGroup, output: &mut String) {
        let date = group
            .milestone
            .due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| NO_RELEASE_DATE.to_string());
        output.push_str(&format!("## [{}] - {}\n", group.version(), date));

        for section in ChangeSection::ALL {
            let entries = self.taxonomy.entries(section, &group.merge_requests);
            if entries.is_empty() {
                continue;
            }

            output.push_str(&format!("### {}\n", section));
            for mr in entries {
                output.push_str(&format_entry(mr));
                output.push('\n');
            }
            output.push('\n');
        }

        for mr in &group.merge_requests {
            if !self.taxonomy.is_categorized(mr) {
                debug!(
                    milestone = %group.milestone.title,
                    iid = mr.iid,
                    labels = ?mr.labels,
                    "merge request has no changelog label, omitted"
                );
            }
        }
    }

    /// Reference links, `[Unreleased]` first then one per milestone.
    ///
    /// Each milestone is compared against the next older one; the oldest
    /// links to its commit history. Empty when there are no milestones.
    pub fn links(&self, groups: &[MilestoneGroup]) -> Vec<String> {
        let Some(newest) = groups.first() else {
            return Vec::new();
        };

        let mut links = Vec::with_capacity(groups.len() + 1);
        links.push(format!(
            "[Unreleased]: {}/compare/{}...HEAD",
            self.web_url, newest.milestone.title
        ));

        for (index, group) in groups.iter().enumerate() {
            let link = match groups.get(index + 1) {
                Some(previous) => format!(
                    "[{}]: {}/compare/{}...{}",
                    group.version(),
                    self.web_url,
                    previous.milestone.title,
                    group.milestone.title
                ),
                None => format!(
                    "[{}]: {}/commits/{}",
                    group.version(),
                    self.web_url,
                    group.milestone.title
                ),
            };
            links.push(link);
        }

        links
    }
}

/// Format one changelog line, `- !<iid> <title> (@<author>)`
pub fn format_entry(mr: &MergeRequest) -> String {
    format!("- !{} {} (@{})", mr.iid, mr.title, mr.author.username)
}
