//! GitLab API models
//!
//! Only the fields the changelog needs are modelled; everything else in the
//! API payloads is ignored during deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A project milestone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Instance-wide milestone ID
    pub id: u64,
    /// Project-scoped milestone ID
    #[serde(default)]
    pub iid: u64,
    /// Milestone title, usually the release tag (e.g. "v1.2.0")
    pub title: String,
    /// Planned release date
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl Milestone {
    /// Create a milestone without a due date
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            iid: id,
            title: title.into(),
            due_date: None,
        }
    }

    /// Set the due date
    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }
}

/// Merge request state as reported by GitLab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeRequestState {
    Opened,
    Closed,
    Locked,
    Merged,
    /// Any state this client does not know about
    #[serde(other)]
    Other,
}

/// Merge request author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Login handle, rendered as `@username`
    pub username: String,
    /// Display name
    #[serde(default)]
    pub name: String,
}

/// A merge request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRequest {
    /// Instance-wide merge request ID
    pub id: u64,
    /// Project-scoped merge request ID, rendered as `!iid`
    pub iid: u64,
    /// Title
    pub title: String,
    /// Author
    pub author: Author,
    /// Labels attached to the merge request
    #[serde(default)]
    pub labels: Vec<String>,
    /// Current state
    pub state: MergeRequestState,
}

impl MergeRequest {
    /// Create a merged merge request without labels
    pub fn new(iid: u64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: iid,
            iid,
            title: title.into(),
            author: Author {
                username: author.into(),
                name: String::new(),
            },
            labels: Vec::new(),
            state: MergeRequestState::Merged,
        }
    }

    /// Add a label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Set the state
    pub fn with_state(mut self, state: MergeRequestState) -> Self {
        self.state = state;
        self
    }

    /// Check if the merge request has been merged
    pub fn is_merged(&self) -> bool {
        self.state == MergeRequestState::Merged
    }
}

/// Project details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project ID
    pub id: u64,
    /// Canonical web URL, used as the base of comparison links
    pub web_url: String,
    /// Full path including namespace
    #[serde(default)]
    pub path_with_namespace: String,
}
