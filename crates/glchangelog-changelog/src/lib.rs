//! glchangelog Changelog - milestone changelog generation
//!
//! Groups merged merge requests by milestone, classifies them into
//! Keep a Changelog sections by label, and renders the result into a
//! markdown template.

pub mod fetcher;
pub mod formatter;
pub mod generator;
pub mod taxonomy;
pub mod template;
pub mod types;
pub mod writer;

#[cfg(test)]
mod testing;

pub use fetcher::fetch_milestone_groups;
pub use formatter::MarkdownFormatter;
pub use generator::ChangelogGenerator;
pub use taxonomy::Taxonomy;
pub use template::Template;
pub use types::{ChangeSection, MilestoneGroup};
pub use writer::write_changelog;
