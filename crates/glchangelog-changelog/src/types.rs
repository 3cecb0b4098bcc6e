//! Changelog types

use std::cmp::Ordering;

use glchangelog_gitlab::{MergeRequest, Milestone};

/// A Keep a Changelog section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeSection {
    /// New features
    Added,
    /// Changes to existing functionality
    Changed,
    /// Soon-to-be removed features
    Deprecated,
    /// Removed features
    Removed,
    /// Bug fixes
    Fixed,
    /// Vulnerability fixes
    Security,
}

impl ChangeSection {
    /// All sections, in rendering order
    pub const ALL: [ChangeSection; 6] = [
        Self::Added,
        Self::Changed,
        Self::Deprecated,
        Self::Removed,
        Self::Fixed,
        Self::Security,
    ];

    /// Section heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
            Self::Security => "Security",
        }
    }

    /// Label patterns, matched case-insensitively anywhere in a label
    pub fn patterns(&self) -> &'static [&'static str] {
        match self {
            Self::Added => &["feature", "feat", "added"],
            Self::Changed => &["improvement", "improve", "changed"],
            Self::Deprecated => &["to-remove", "deprecated", "to-be-removed"],
            Self::Removed => &["removed"],
            Self::Fixed => &["fix", "fixed", "hotfix", "hot-fix", "bug"],
            Self::Security => &["secu", "security"],
        }
    }
}

impl std::fmt::Display for ChangeSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// A milestone with its merged merge requests
#[derive(Debug, Clone)]
pub struct MilestoneGroup {
    /// The milestone
    pub milestone: Milestone,
    /// Merged merge requests, in source order
    pub merge_requests: Vec<MergeRequest>,
}

impl MilestoneGroup {
    /// Create a group, keeping only merged merge requests
    pub fn new(milestone: Milestone, merge_requests: Vec<MergeRequest>) -> Self {
        Self {
            milestone,
            merge_requests: merge_requests.into_iter().filter(|mr| mr.is_merged()).collect(),
        }
    }

    /// Milestone title with a leading `v` stripped
    pub fn version(&self) -> &str {
        let title = &self.milestone.title;
        title.strip_prefix('v').unwrap_or(title)
    }

    /// Ordering that puts the most recent milestone first
    pub fn newest_first(a: &Self, b: &Self) -> Ordering {
        b.milestone.id.cmp(&a.milestone.id)
    }
}

/// Sort groups by descending milestone ID.
///
/// The sort is stable: groups sharing an ID keep their input order.
pub fn sort_newest_first(groups: &mut [MilestoneGroup]) {
    groups.sort_by(MilestoneGroup::newest_first);
}
