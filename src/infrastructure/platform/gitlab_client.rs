use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;

use super::platform_interface::{GroupListing, PlatformClient, PlatformError};
use crate::domain::value_objects::platform_kind::PlatformKind;
use crate::domain::value_objects::repository_url::RepositoryReference;

const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";
const NEXT_PAGE_HEADER: &str = "x-next-page";
const PAGE_SIZE: u32 = 100;

/// Project as returned by `GET /groups/:id/projects`
#[derive(Debug, Deserialize)]
struct GitLabProject {
    web_url: String,
    #[serde(default)]
    archived: bool,
}

/// GitLab REST v4 client
pub struct GitLabClient {
    http_client: reqwest::Client,
    base_url: String,
    host: String,
}

impl GitLabClient {
    /// Create a client for the instance at `base_url` (`scheme://host[:port]`)
    pub fn new(
        base_url: impl Into<String>,
        host: impl Into<String>,
        token: &str,
    ) -> Result<Self, PlatformError> {
        let host = host.into();
        let mut headers = HeaderMap::new();
        if !token.is_empty() {
            let value = HeaderValue::from_str(token).map_err(|e| {
                PlatformError::authentication(&host, format!("invalid token: {}", e))
            })?;
            headers.insert(PRIVATE_TOKEN_HEADER, value);
        }

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("heimdall/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            host,
        })
    }

    /// Create a client for the instance hosting `group`
    pub fn for_group(group: &RepositoryReference, token: &str) -> Result<Self, PlatformError> {
        Self::new(group.base_url(), group.hostname(), token)
    }

    fn projects_url(&self, group_path: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(group_path.as_bytes()).collect();
        format!("{}/api/v4/groups/{}/projects", self.base_url, encoded)
    }
}

#[async_trait]
impl PlatformClient for GitLabClient {
    fn kind(&self) -> PlatformKind {
        PlatformKind::GitLab
    }

    async fn list_group_members(&self, group_path: &str) -> Result<GroupListing, PlatformError> {
        let url = self.projects_url(group_path);
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("archived", "false".to_string()),
                ("include_subgroups", "true".to_string()),
                ("per_page", PAGE_SIZE.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlatformError::from_status(&self.host, status, &body));
        }

        let truncated = response
            .headers()
            .get(NEXT_PAGE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false);

        let projects: Vec<GitLabProject> = response
            .json()
            .await
            .map_err(|e| PlatformError::invalid_response(e.to_string()))?;

        let repositories = projects
            .into_iter()
            .filter(|project| !project.archived)
            .map(|project| RepositoryReference::parse(&project.web_url))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GroupListing {
            repositories,
            truncated,
        })
    }
}
