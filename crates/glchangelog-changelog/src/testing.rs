//! In-memory project source for tests

use std::collections::HashSet;

use glchangelog_gitlab::{
    GitLabError, MergeRequest, Milestone, Project, ProjectSource, Result,
};

/// Serves a fixed set of milestones and merge requests
pub struct MemorySource {
    web_url: String,
    milestones: Vec<(Milestone, Vec<MergeRequest>)>,
    failing: HashSet<u64>,
    project_missing: bool,
}

impl MemorySource {
    pub fn new(web_url: impl Into<String>) -> Self {
        Self {
            web_url: web_url.into(),
            milestones: Vec::new(),
            failing: HashSet::new(),
            project_missing: false,
        }
    }

    pub fn with_milestone(mut self, milestone: Milestone, mrs: Vec<MergeRequest>) -> Self {
        self.milestones.push((milestone, mrs));
        self
    }

    /// Make the merge request listing of one milestone fail with 404
    pub fn failing_milestone(mut self, milestone_id: u64) -> Self {
        self.failing.insert(milestone_id);
        self
    }

    /// Make the project lookup fail with 404
    pub fn missing_project(mut self) -> Self {
        self.project_missing = true;
        self
    }
}

#[async_trait::async_trait]
impl ProjectSource for MemorySource {
    async fn list_project_milestones(&self, _project_id: u64) -> Result<Vec<Milestone>> {
        Ok(self.milestones.iter().map(|(m, _)| m.clone()).collect())
    }

    async fn list_milestone_merge_requests(
        &self,
        _project_id: u64,
        milestone_id: u64,
    ) -> Result<Vec<MergeRequest>> {
        if self.failing.contains(&milestone_id) {
            return Err(GitLabError::NotFound(format!("milestone {milestone_id}")));
        }

        Ok(self
            .milestones
            .iter()
            .find(|(m, _)| m.id == milestone_id)
            .map(|(_, mrs)| mrs.clone())
            .unwrap_or_default())
    }

    async fn get_project(&self, project_id: u64) -> Result<Project> {
        if self.project_missing {
            return Err(GitLabError::NotFound(format!("project {project_id}")));
        }

        Ok(Project {
            id: project_id,
            web_url: self.web_url.clone(),
            path_with_namespace: String::new(),
        })
    }
}
