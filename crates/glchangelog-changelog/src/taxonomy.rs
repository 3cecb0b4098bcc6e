//! Label taxonomy
//!
//! Maps merge request labels to changelog sections. Sections are
//! independent filters: a merge request carrying `feature` and `bug` is
//! listed under both Added and Fixed, and one matching no section is left
//! out of the changelog.

use std::sync::LazyLock;

use glchangelog_gitlab::MergeRequest;
use regex::{RegexSet, RegexSetBuilder};

use crate::types::ChangeSection;

static STANDARD: LazyLock<Taxonomy> = LazyLock::new(Taxonomy::build);

/// Compiled label patterns for every section
pub struct Taxonomy {
    sections: Vec<(ChangeSection, RegexSet)>,
}

impl Taxonomy {
    /// The fixed taxonomy, compiled on first use
    pub fn standard() -> &'static Taxonomy {
        &STANDARD
    }

    fn build() -> Self {
        let sections = ChangeSection::ALL
            .iter()
            .map(|&section| {
                let set = RegexSetBuilder::new(section.patterns().iter().map(|p| regex::escape(p)))
                    .case_insensitive(true)
                    .build()
                    .expect("Invalid label pattern");
                (section, set)
            })
            .collect();

        Self { sections }
    }

    // `sections` is built from `ChangeSection::ALL`, which follows declaration order
    fn patterns(&self, section: ChangeSection) -> &RegexSet {
        &self.sections[section as usize].1
    }

    #[cfg(test)]
    fn label_matches(&self, section: ChangeSection, label: &str) -> bool {
        self.patterns(section).is_match(label)
    }

    /// Check if any label of the merge request qualifies for a section
    pub fn matches(&self, section: ChangeSection, mr: &MergeRequest) -> bool {
        let set = self.patterns(section);
        mr.labels.iter().any(|label| set.is_match(label))
    }

    /// All sections the merge request belongs to, in rendering order
    pub fn sections_for(&self, mr: &MergeRequest) -> Vec<ChangeSection> {
        self.sections
            .iter()
            .filter(|(_, set)| mr.labels.iter().any(|label| set.is_match(label)))
            .map(|(section, _)| *section)
            .collect()
    }

    /// Merge requests belonging to a section, in input order
    pub fn entries<'a>(
        &self,
        section: ChangeSection,
        merge_requests: &'a [MergeRequest],
    ) -> Vec<&'a MergeRequest> {
        merge_requests
            .iter()
            .filter(|mr| self.matches(section, mr))
            .collect()
    }

    /// Check if the merge request appears in at least one section
    pub fn is_categorized(&self, mr: &MergeRequest) -> bool {
        !self.sections_for(mr).is_empty()
    }
}
