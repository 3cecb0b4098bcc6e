//! GitLab v4 REST client
//!
//! ## Authentication
//!
//! Requests carry a personal, project or group access token in the
//! `PRIVATE-TOKEN` header. The token needs the `read_api` scope.
//!
//! ## Pagination
//!
//! List endpoints are read page by page, following the `X-Next-Page`
//! header until GitLab stops sending one.

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{GitLabError, Result};
use crate::traits::ProjectSource;
use crate::types::{MergeRequest, Milestone, Project};

/// Largest page size GitLab accepts
pub const DEFAULT_PER_PAGE: u32 = 100;

const TOKEN_HEADER: &str = "PRIVATE-TOKEN";
const NEXT_PAGE_HEADER: &str = "x-next-page";

/// GitLab connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitLabConfig {
    /// Instance URL (e.g. "https://gitlab.com")
    pub url: String,

    /// Access token
    pub token: String,

    /// Items requested per page on list endpoints
    pub per_page: u32,
}

impl GitLabConfig {
    /// Create a config with the default page size
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Set the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

/// GitLab API client
pub struct GitLabClient {
    api_url: Url,
    token: String,
    per_page: u32,
    client: Client,
}

impl GitLabClient {
    /// Create a new client for the instance at `config.url`
    pub fn new(config: GitLabConfig) -> Result<Self> {
        let api_url = Url::parse(&format!("{}/api/v4/", config.url.trim_end_matches('/')))?;
        let client = Client::builder()
            .user_agent(concat!("glchangelog/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(api_url = %api_url, per_page = config.per_page, "created GitLab client");

        Ok(Self {
            api_url,
            token: config.token,
            per_page: config.per_page,
            client,
        })
    }

    /// Base URL of the v4 API
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.api_url.join(path.trim_start_matches('/'))?)
    }

    /// Send an authenticated GET and map error statuses
    async fn send(&self, url: Url) -> Result<reqwest::Response> {
        debug!(url = %url, "GET");
        let response = self
            .client
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GitLabError::AuthenticationFailed(message)
            }
            StatusCode::NOT_FOUND => GitLabError::NotFound(message),
            _ => GitLabError::ApiError {
                status: status.as_u16(),
                message,
            },
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        let response = self.send(url).await?;
        Ok(response.json().await?)
    }

    /// Collect every page of a list endpoint
    async fn get_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let mut url = self.endpoint(path)?;
            url.query_pairs_mut()
                .append_pair("per_page", &self.per_page.to_string())
                .append_pair("page", &page.to_string());

            let response = self.send(url).await?;
            let next = next_page(response.headers());
            let batch: Vec<T> = response.json().await?;
            debug!(path, page, count = batch.len(), "fetched page");
            items.extend(batch);

            match next {
                Some(next) if next > page => page = next,
                _ => break,
            }
        }

        Ok(items)
    }
}

/// Parse `X-Next-Page`; GitLab sends it empty on the last page
fn next_page(headers: &HeaderMap) -> Option<u32> {
    headers
        .get(NEXT_PAGE_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

#[async_trait::async_trait]
impl ProjectSource for GitLabClient {
    #[instrument(skip(self))]
    async fn list_project_milestones(&self, project_id: u64) -> Result<Vec<Milestone>> {
        let milestones: Vec<Milestone> = self
            .get_all(&format!("projects/{}/milestones", project_id))
            .await?;
        debug!(count = milestones.len(), "listed milestones");
        Ok(milestones)
    }

    #[instrument(skip(self))]
    async fn list_milestone_merge_requests(
        &self,
        project_id: u64,
        milestone_id: u64,
    ) -> Result<Vec<MergeRequest>> {
        let merge_requests: Vec<MergeRequest> = self
            .get_all(&format!(
                "projects/{}/milestones/{}/merge_requests",
                project_id, milestone_id
            ))
            .await?;
        debug!(count = merge_requests.len(), "listed merge requests");
        Ok(merge_requests)
    }

    #[instrument(skip(self))]
    async fn get_project(&self, project_id: u64) -> Result<Project> {
        self.get_json(&format!("projects/{}", project_id)).await
    }
}
