//! Project source trait

use crate::error::Result;
use crate::types::{MergeRequest, Milestone, Project};

/// Read-only view of a project's milestones and merge requests
///
/// [`GitLabClient`](crate::GitLabClient) is the production implementation.
/// Implementations must be shareable across the concurrent per-milestone
/// fetches issued by the changelog pipeline.
#[async_trait::async_trait]
pub trait ProjectSource: Send + Sync {
    /// List every milestone of a project
    async fn list_project_milestones(&self, project_id: u64) -> Result<Vec<Milestone>>;

    /// List every merge request attached to a milestone, in any state
    async fn list_milestone_merge_requests(
        &self,
        project_id: u64,
        milestone_id: u64,
    ) -> Result<Vec<MergeRequest>>;

    /// Get project details
    async fn get_project(&self, project_id: u64) -> Result<Project>;
}
