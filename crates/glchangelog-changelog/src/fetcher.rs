//! Milestone and merge request retrieval

use futures::future::try_join_all;
use glchangelog_gitlab::{Milestone, ProjectSource, Result};
use tracing::{debug, info, instrument};

use crate::types::MilestoneGroup;

/// Fetch every milestone of a project with its merged merge requests.
///
/// Merge requests are requested for all milestones concurrently. The first
/// failure aborts the whole fetch; nothing is retried. The order of the
/// returned groups is unspecified.
#[instrument(skip(source))]
pub async fn fetch_milestone_groups<S>(source: &S, project_id: u64) -> Result<Vec<MilestoneGroup>>
where
    S: ProjectSource + ?Sized,
{
    let milestones = source.list_project_milestones(project_id).await?;
    info!(milestone_count = milestones.len(), "fetched milestones");

    let groups = try_join_all(
        milestones
            .into_iter()
            .map(|milestone| fetch_group(source, project_id, milestone)),
    )
    .await?;

    Ok(groups)
}

async fn fetch_group<S>(source: &S, project_id: u64, milestone: Milestone) -> Result<MilestoneGroup>
where
    S: ProjectSource + ?Sized,
{
    let merge_requests = source
        .list_milestone_merge_requests(project_id, milestone.id)
        .await?;
    let fetched = merge_requests.len();
    let group = MilestoneGroup::new(milestone, merge_requests);

    debug!(
        milestone = %group.milestone.title,
        fetched,
        merged = group.merge_requests.len(),
        "fetched merge requests"
    );

    Ok(group)
}
